//! Use-Case: Ziehen von Selektion, Bereichs-Eckpunkten und Bézier-Griffen.
//!
//! Beim Drücken werden Ausgangspositionen und ein Snapshot erfasst. Jede
//! Bewegung wendet das kumulierte Delta auf die Ausgangswerte an, beim
//! Loslassen entsteht höchstens ein History-Eintrag (nur bei Netto-Versatz);
//! ein Abbruch stellt den Zustand vom Drücken wieder her.

use crate::app::history::Snapshot;
use crate::app::tools::{DragSession, DragTarget, EdgeControls, HandleSlot};
use crate::app::use_cases::editing::transform::{apply_affine, capture_selection, refresh_selection_box};
use crate::app::AppState;
use glam::{Affine2, Vec2};

use super::rect::select_in_rect;

/// Startet eine Drag-Geste.
pub fn begin_drag(state: &mut AppState, target: DragTarget, canvas_pos: Vec2) {
    let mut session = DragSession::new(target, canvas_pos, Snapshot::from_state(state));

    match target {
        DragTarget::Selection => {
            let targets = capture_selection(state);
            if targets.is_empty() {
                log::debug!("Drag: keine Selektion zum Verschieben");
                return;
            }
            session.initial_points = targets.points;
            session.initial_edges = targets.edges;
            session.initial_areas = targets.areas;
            session.initial_box = state.selection.selection_box;
        }
        DragTarget::AreaVertices { area_id } => {
            let Some(area) = state.topology.areas.get(&area_id) else {
                log::debug!("Drag: Bereich {} existiert nicht", area_id);
                return;
            };
            session.initial_areas = vec![(area_id, area.vertices.clone())];
        }
        DragTarget::BezierHandle { edge_id, .. } => {
            let Some(edge) = state.topology.edges.get(&edge_id) else {
                log::debug!("Drag: Kante {} existiert nicht", edge_id);
                return;
            };
            session.initial_edges = vec![EdgeControls {
                edge_id,
                start_id: edge.start_point_id,
                end_id: edge.end_point_id,
                cp1: edge.cp1,
                cp2: edge.cp2,
            }];
        }
        DragTarget::BoxSelect { .. } => {}
    }

    state.editor.drag = Some(session);
}

/// Aktualisiert die laufende Geste mit der neuen Zeigerposition.
pub fn update_drag(state: &mut AppState, canvas_pos: Vec2) {
    let Some(mut session) = state.editor.drag.take() else {
        return;
    };
    session.current_canvas = canvas_pos;
    let delta = session.delta();

    match session.target {
        DragTarget::Selection => {
            apply_affine(
                state.topology_mut(),
                &session.initial_points,
                &session.initial_edges,
                &session.initial_areas,
                Affine2::from_translation(delta),
            );
            refresh_selection_box(state);
        }
        DragTarget::AreaVertices { area_id } => {
            let indices: Vec<usize> = state.selection.vertex_indices.iter().copied().collect();
            if let Some((_, initial)) = session.initial_areas.first() {
                let initial = initial.clone();
                if let Some(area) = state.topology_mut().areas.get_mut(&area_id) {
                    for idx in indices {
                        if let (Some(v), Some(v0)) = (area.vertices.get_mut(idx), initial.get(idx)) {
                            *v = *v0 + delta;
                        }
                    }
                }
            }
        }
        DragTarget::BezierHandle { edge_id, slot } => {
            if let Some(ctrl) = session.initial_edges.first() {
                let (cp1, cp2) = (ctrl.cp1, ctrl.cp2);
                if let Some(edge) = state.topology_mut().edges.get_mut(&edge_id) {
                    match slot {
                        HandleSlot::First => edge.cp1 = cp1.map(|p| p + delta),
                        HandleSlot::Second => edge.cp2 = cp2.map(|p| p + delta),
                    }
                }
            }
        }
        DragTarget::BoxSelect { .. } => {}
    }

    state.editor.drag = Some(session);
}

/// Beendet die Geste: Box-Selektion auswerten oder einen Undo-Eintrag anlegen.
pub fn end_drag(state: &mut AppState) {
    let Some(session) = state.editor.drag.take() else {
        return;
    };

    match session.target {
        DragTarget::BoxSelect { additive } => {
            select_in_rect(state, session.start_canvas, session.current_canvas, additive);
        }
        _ if session.has_effect() => {
            let delta = session.delta();
            state.history.record_snapshot(session.snapshot);
            log::info!("Drag abgeschlossen: Versatz ({:.1}, {:.1})", delta.x, delta.y);
        }
        _ => {
            log::debug!("Drag ohne Netto-Bewegung beendet");
        }
    }
}

/// Bricht die Geste ab und stellt den Zustand vom Drücken wieder her (ohne History).
pub fn cancel_drag(state: &mut AppState) {
    let Some(session) = state.editor.drag.take() else {
        return;
    };
    match session.target {
        DragTarget::BoxSelect { .. } => log::debug!("Box-Selektion abgebrochen"),
        _ => {
            session.snapshot.apply_to(state);
            log::info!("Drag abgebrochen, Ausgangszustand wiederhergestellt");
        }
    }
}
