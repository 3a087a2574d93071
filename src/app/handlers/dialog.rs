//! Handler für Eigenschaften-Editor, Kontextmenü, Meldungen und Optionen.

use crate::app::state::{ContextMenu, EntityRef};
use crate::app::AppState;
use crate::shared::EditorOptions;
use glam::Vec2;

pub fn open_properties(state: &mut AppState, target: EntityRef) {
    state.ui.context_menu = None;
    state.ui.property_target = Some(target);
    log::debug!("Eigenschaften geöffnet: {:?}", target);
}

pub fn close_properties(state: &mut AppState) {
    state.ui.property_target = None;
}

pub fn open_context_menu(state: &mut AppState, canvas_pos: Vec2) {
    state.ui.context_menu = Some(ContextMenu { canvas_pos });
}

pub fn close_context_menu(state: &mut AppState) {
    state.ui.context_menu = None;
}

pub fn dismiss_notifications(state: &mut AppState) {
    state.ui.notifications.clear();
}

/// Übernimmt Optionen ohne zu persistieren; History-Kapazitäten folgen.
fn set_options(state: &mut AppState, options: EditorOptions) {
    state.history.set_capacity(options.history_capacity);
    state.stroke_history.set_capacity(options.stroke_history_capacity);
    state.options = options;
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
pub fn apply_options(state: &mut AppState, options: EditorOptions) -> anyhow::Result<()> {
    set_options(state, options);
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    set_options(state, EditorOptions::default());
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}
