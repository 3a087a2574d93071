//! Core-Domänentypen: Punkte, Kanten, Bereiche, Topologie, Transformation, Spatial-Index.

pub mod area;
pub mod bezier;
pub mod edge;
pub mod error;
pub mod geometry;
pub mod groups;
pub mod map_file;
/// Core-Datenmodell der Topologie
///
/// - TopologyMap: Container für Punkte, Kanten, Bereiche und Gruppen
/// - MapPoint: Einzelner Punkt mit Rolle und Attributen
/// - Edge: Gerichtete oder beidseitige Kante zwischen zwei Punkten
pub mod point;
pub mod raster;
pub(crate) mod serde_xy;
pub mod spatial;
pub mod stroke;
pub mod topology;
pub mod transform;

pub use area::{Area, AreaColorScheme, AreaKind, AreaPatch};
pub use edge::{Edge, EdgeKind, EdgePatch, MotionProfile};
pub use error::EditError;
pub use geometry::Rect;
pub use groups::{NetworkGroup, NodeStub, PathGroup, PathStub};
pub use map_file::{MapFileRecord, MapInfo, TopologyData, MAX_ENTITY_ID};
pub use point::{normalize_degrees, MapPoint, PointAttributes, PointKind, PointPatch};
pub use raster::{RasterError, RasterLayer};
pub use spatial::{SpatialIndex, SpatialMatch};
pub use stroke::{Stroke, StrokeKind, StrokeLayer};
pub use topology::{NameCounters, TopologyMap, Visibility};
pub use transform::ViewTransform;
