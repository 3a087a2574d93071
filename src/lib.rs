//! Topologie-Karten-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod input;
pub mod shared;

pub use app::{
    ActiveLayer, AppCommand, AppController, AppIntent, AppState, EditorTool, EditorToolState,
    EntityRef, SelectionState, UiState, ViewState,
};
pub use core::{
    Area, AreaKind, EditError, Edge, EdgeKind, MapFileRecord, MapInfo, MapPoint, PointKind,
    TopologyMap,
};
pub use core::{SpatialIndex, SpatialMatch, ViewTransform};
pub use input::{InputEvent, InputState};
pub use shared::{EditorOptions, RenderScene};
