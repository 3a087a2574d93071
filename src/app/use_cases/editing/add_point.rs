//! Use-Case: Neuen Punkt hinzufügen.

use crate::app::AppState;
use crate::core::PointKind;
use glam::Vec2;

/// Fügt einen Punkt an der Canvas-Position hinzu und gibt seine ID zurück.
pub fn add_point(state: &mut AppState, kind: PointKind, canvas_pos: Vec2) -> u64 {
    // Snapshot VOR Mutation
    state.record_undo_snapshot();
    let id = state.topology_mut().add_point(kind, canvas_pos);
    log::info!(
        "Punkt {} ({:?}) bei ({:.1}, {:.1}) erstellt",
        state.topology.point_label(id),
        kind,
        canvas_pos.x,
        canvas_pos.y
    );
    id
}
