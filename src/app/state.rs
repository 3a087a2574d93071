//! Application State: zentrale Datenhaltung.

mod app_state;
mod editor;
mod selection;
mod ui;
mod view;

pub use app_state::{AppState, MapDocument};
pub use editor::{ActiveLayer, Clipboard, EditorTool, EditorToolState};
pub use selection::SelectionState;
pub use ui::{ContextMenu, EntityRef, Notification, NotificationLevel, UiState};
pub use view::ViewState;
