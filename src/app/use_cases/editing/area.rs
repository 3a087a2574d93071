//! Use-Case: Bereiche aus gesammelten Eckpunkten erzeugen.

use crate::app::AppState;
use crate::core::{AreaKind, EditError};
use glam::Vec2;

/// Hängt einen Eckpunkt an den Entwurf an.
pub fn add_area_vertex(state: &mut AppState, canvas_pos: Vec2) {
    if state.editor.area_draft.push_vertex(canvas_pos) {
        log::debug!(
            "Bereich: Eckpunkt {} bei ({:.1}, {:.1})",
            state.editor.area_draft.vertex_count(),
            canvas_pos.x,
            canvas_pos.y
        );
    }
}

/// Schließt den Entwurf ab. Mit weniger als drei Eckpunkten wird abgelehnt
/// und der Entwurf bleibt erhalten.
pub fn complete_area(state: &mut AppState, kind: AreaKind) -> Option<u64> {
    if !state.editor.area_draft.can_complete() {
        let err = EditError::TooFewVertices(state.editor.area_draft.vertex_count());
        log::warn!("Bereich abgelehnt: {}", err);
        state.ui.warn(err.to_string());
        return None;
    }

    let vertices = state.editor.area_draft.take_vertices();
    state.record_undo_snapshot();
    match state.topology_mut().add_area(kind, vertices) {
        Ok(id) => {
            log::info!(
                "Bereich {} ({:?}) erstellt",
                state.topology.areas[&id].name,
                kind
            );
            Some(id)
        }
        Err(e) => {
            log::warn!("Bereich abgelehnt: {}", e);
            state.ui.warn(e.to_string());
            None
        }
    }
}

/// Verwirft alle gesammelten Eckpunkte.
pub fn cancel_area(state: &mut AppState) {
    if state.editor.area_draft.is_collecting() {
        log::debug!(
            "Bereich verworfen ({} Eckpunkte)",
            state.editor.area_draft.vertex_count()
        );
        state.editor.area_draft.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_vertices_are_rejected_and_kept() {
        let mut state = AppState::new();
        add_area_vertex(&mut state, Vec2::ZERO);
        add_area_vertex(&mut state, Vec2::new(10.0, 0.0));

        assert_eq!(complete_area(&mut state, AreaKind::NoGo), None);
        assert_eq!(state.area_count(), 0);
        assert_eq!(state.editor.area_draft.vertex_count(), 2);
        assert!(!state.can_undo());
    }

    #[test]
    fn three_vertices_create_area_with_tool_kind() {
        let mut state = AppState::new();
        for v in [Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(5.0, 8.0)] {
            add_area_vertex(&mut state, v);
        }
        let id = complete_area(&mut state, AreaKind::SpeedZone).expect("Bereich");

        let area = &state.topology.areas[&id];
        assert_eq!(area.kind, AreaKind::SpeedZone);
        assert_eq!(area.name, "a1");
        assert!(!state.editor.area_draft.is_collecting());
        assert_eq!(state.history.undo_len(), 1);
    }

    #[test]
    fn cancel_discards_without_history() {
        let mut state = AppState::new();
        add_area_vertex(&mut state, Vec2::ZERO);
        add_area_vertex(&mut state, Vec2::ONE);
        cancel_area(&mut state);
        assert!(!state.editor.area_draft.is_collecting());
        assert!(!state.can_undo());
    }
}
