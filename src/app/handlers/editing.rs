//! Handler für Topologie-Editing und Editor-Werkzeug.

use crate::app::state::{ActiveLayer, EditorTool};
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{AreaKind, AreaPatch, EdgeKind, EdgePatch, PointKind, PointPatch};
use glam::Vec2;

/// Bricht alle offenen Werkzeugeingaben ab (Verbindung, Bereich, Strich, Geste).
fn flush_pending_input(state: &mut AppState) {
    use_cases::editing::cancel_connection(state);
    use_cases::editing::cancel_area(state);
    if state.strokes.is_drawing() {
        use_cases::raster::commit_stroke(state);
    }
    use_cases::selection::cancel_drag(state);
}

/// Aktiviert ein Editor-Werkzeug und setzt tool-spezifische Zwischenzustände zurück.
pub fn set_editor_tool(state: &mut AppState, tool: EditorTool) {
    flush_pending_input(state);
    state.editor.active_tool = tool;
    if tool.is_raster() {
        state.editor.active_layer = ActiveLayer::Raster;
    }
    log::info!("Editor-Werkzeug: {:?}", tool);
}

/// Wechselt die aktive Ebene; Rasterwerkzeuge fallen auf Auswahl zurück.
pub fn set_active_layer(state: &mut AppState, layer: ActiveLayer) {
    if state.editor.active_layer == layer {
        return;
    }
    flush_pending_input(state);
    state.editor.active_layer = layer;
    if layer == ActiveLayer::Topology && state.editor.active_tool.is_raster() {
        state.editor.active_tool = EditorTool::Select;
    }
    log::info!("Aktive Ebene: {:?}", layer);
}

/// Merkt die letzte Klickposition (Einfüge-Anker).
pub fn record_click(state: &mut AppState, canvas_pos: Vec2) {
    state.editor.last_click_canvas = Some(canvas_pos);
}

/// Vorschau-Zeiger für Kanten- und Bereichswerkzeug.
pub fn update_pointer(state: &mut AppState, canvas_pos: Vec2) {
    state.editor.connection.pointer_moved(canvas_pos);
    state.editor.area_draft.pointer_moved(canvas_pos);
}

pub fn add_point(state: &mut AppState, kind: PointKind, canvas_pos: Vec2) {
    use_cases::editing::add_point(state, kind, canvas_pos);
}

pub fn connect_point(state: &mut AppState, point_id: u64, kind: EdgeKind) {
    use_cases::editing::connect_point(state, point_id, kind);
}

pub fn connect_new_point(state: &mut AppState, canvas_pos: Vec2, kind: EdgeKind) {
    use_cases::editing::connect_new_point(state, canvas_pos, kind);
}

pub fn cancel_connection(state: &mut AppState) {
    use_cases::editing::cancel_connection(state);
}

pub fn add_area_vertex(state: &mut AppState, canvas_pos: Vec2) {
    use_cases::editing::add_area_vertex(state, canvas_pos);
}

pub fn complete_area(state: &mut AppState, kind: AreaKind) {
    use_cases::editing::complete_area(state, kind);
}

pub fn cancel_area(state: &mut AppState) {
    use_cases::editing::cancel_area(state);
}

/// Teilt eine Kante und selektiert den neuen Punkt.
pub fn split_edge(state: &mut AppState, edge_id: u64, canvas_pos: Vec2) {
    if let Some(point_id) = use_cases::editing::split_edge(state, edge_id, canvas_pos) {
        state.selection.pick_point(point_id, false);
    }
}

pub fn delete_selection(state: &mut AppState) {
    use_cases::editing::delete_selection(state);
}

pub fn nudge_selection(state: &mut AppState, delta: Vec2) {
    use_cases::editing::nudge_selection(state, delta);
}

pub fn rotate_selection(state: &mut AppState, degrees: f32) {
    use_cases::editing::rotate_selection(state, degrees);
}

pub fn copy_selection(state: &mut AppState) {
    use_cases::editing::copy_selection(state);
}

pub fn paste_clipboard(state: &mut AppState, offset: Vec2) {
    use_cases::editing::paste_clipboard(state, offset);
}

pub fn update_point(state: &mut AppState, id: u64, patch: &PointPatch) {
    use_cases::editing::update_point(state, id, patch);
}

pub fn update_edge(state: &mut AppState, id: u64, patch: &EdgePatch) {
    use_cases::editing::update_edge(state, id, patch);
}

pub fn update_area(state: &mut AppState, id: u64, patch: &AreaPatch) {
    use_cases::editing::update_area(state, id, patch);
}
