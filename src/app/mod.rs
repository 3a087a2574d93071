//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Topologie, Raster, View, Tools).
pub mod state;
pub mod tools;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use history::{EditHistory, Snapshot, StrokeSnapshot};
pub use render_scene::build as build_render_scene;
pub use state::{
    ActiveLayer, AppState, Clipboard, EditorTool, EditorToolState, EntityRef, MapDocument,
    Notification, NotificationLevel, SelectionState, UiState, ViewState,
};
pub use tools::{DragTarget, HandleSlot};
