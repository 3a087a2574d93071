//! Handler für Selektions-Operationen und Drag-Gesten.
//!
//! Reine Selektionsänderungen erzeugen keinen History-Eintrag.

use crate::app::tools::DragTarget;
use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

pub fn select_point(state: &mut AppState, id: u64, additive: bool) {
    use_cases::selection::select_point(state, id, additive);
}

pub fn select_edge(state: &mut AppState, id: u64, additive: bool) {
    use_cases::selection::select_edge(state, id, additive);
}

pub fn select_area(state: &mut AppState, id: u64, additive: bool) {
    use_cases::selection::select_area(state, id, additive);
}

pub fn select_area_vertex(state: &mut AppState, area_id: u64, index: usize, additive: bool) {
    use_cases::selection::select_area_vertex(state, area_id, index, additive);
}

/// Selektiert Punkte und Kanten innerhalb eines Rechtecks.
pub fn select_in_rect(state: &mut AppState, min: Vec2, max: Vec2, additive: bool) {
    use_cases::selection::select_in_rect(state, min, max, additive);
}

pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_selection(state);
}

pub fn begin_drag(state: &mut AppState, target: DragTarget, canvas_pos: Vec2) {
    use_cases::selection::begin_drag(state, target, canvas_pos);
}

pub fn update_drag(state: &mut AppState, canvas_pos: Vec2) {
    use_cases::selection::update_drag(state, canvas_pos);
}

pub fn end_drag(state: &mut AppState) {
    use_cases::selection::end_drag(state);
}

pub fn cancel_drag(state: &mut AppState) {
    use_cases::selection::cancel_drag(state);
}
