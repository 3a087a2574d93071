//! Use-Case-Funktionen für Pinsel- und Radiererstriche auf der Rasterebene.

use crate::app::state::EditorTool;
use crate::app::AppState;
use crate::core::StrokeKind;
use glam::Vec2;

/// Beginnt einen Strich mit dem aktiven Rasterwerkzeug.
pub fn begin_stroke(state: &mut AppState, canvas_pos: Vec2, time_ms: u64) {
    let (kind, radius) = match state.editor.active_tool {
        EditorTool::Brush => (StrokeKind::Brush, state.options.brush_radius),
        EditorTool::Eraser => (StrokeKind::Eraser, state.options.eraser_radius),
        other => {
            log::debug!("Strich ignoriert: Werkzeug {:?} ist kein Rasterwerkzeug", other);
            return;
        }
    };
    state.strokes.begin(kind, canvas_pos, radius, time_ms);
}

pub fn extend_stroke(state: &mut AppState, canvas_pos: Vec2) {
    state.strokes.extend(canvas_pos);
}

/// Schließt den laufenden Strich ab; ein einfacher Klick ergibt einen Punkt.
pub fn commit_stroke(state: &mut AppState) {
    if !state.strokes.is_drawing() {
        return;
    }
    // Snapshot VOR Mutation
    state.record_stroke_snapshot();
    if let Some(id) = state.strokes.commit() {
        log::info!(
            "Strich {} abgeschlossen ({} Striche gesamt)",
            id,
            state.strokes.committed().len()
        );
    }
}

pub fn undo_stroke(state: &mut AppState) {
    state.strokes.abort();
    let current = state.strokes.committed().clone();
    match state.stroke_history.pop_undo_with_current(current) {
        Some(prev) => {
            state.strokes.restore(prev);
            log::info!("Strich-Undo ausgeführt");
        }
        None => log::debug!("Strich-Undo: nichts zu tun"),
    }
}

pub fn redo_stroke(state: &mut AppState) {
    let current = state.strokes.committed().clone();
    match state.stroke_history.pop_redo_with_current(current) {
        Some(next) => {
            state.strokes.restore(next);
            log::info!("Strich-Redo ausgeführt");
        }
        None => log::debug!("Strich-Redo: nichts zu tun"),
    }
}
