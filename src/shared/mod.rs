//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und einem Renderer geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::EditorOptions;
pub use render_scene::{
    AreaPreview, EdgeGeometry, RenderArea, RenderEdge, RenderPoint, RenderScene, RenderStroke,
};
