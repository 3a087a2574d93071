//! Use-Case: Kante an einer Position teilen (Shift-Klick auf eine Kante).

use crate::app::AppState;
use crate::core::{bezier, geometry, PointKind};
use glam::Vec2;

/// Abstand zu den Endpunkten (Kurvenparameter), unter dem nicht geteilt wird
const MIN_SPLIT_T: f32 = 0.01;

/// Fügt auf der Kante einen Knoten ein und teilt sie in zwei Kanten.
///
/// Die erste Hälfte behält ID und Namen, die zweite erhält neue. Bei
/// Bézier-Kanten werden die Steuerpunkte per de Casteljau auf beide
/// Hälften verteilt. Gibt die ID des neuen Punkts zurück.
pub fn split_edge(state: &mut AppState, edge_id: u64, canvas_pos: Vec2) -> Option<u64> {
    let topology = &state.topology;
    let Some(edge) = topology.edges.get(&edge_id) else {
        log::debug!("Teilen: Kante {} existiert nicht", edge_id);
        return None;
    };
    let Some((a, b)) = topology.edge_endpoints(edge) else {
        log::warn!("Teilen: Kante {} hat keinen Endpunkt mehr", edge.name);
        return None;
    };

    let curve = topology.edge_curve(edge);
    let t = match &curve {
        Some(c) => bezier::closest_t(c, canvas_pos, 48).0,
        None => geometry::project_onto_segment(canvas_pos, a, b),
    };
    if !(MIN_SPLIT_T..=1.0 - MIN_SPLIT_T).contains(&t) {
        log::debug!("Teilen: Position zu nah am Endpunkt (t = {:.3})", t);
        return None;
    }
    let (split_pos, halves) = match &curve {
        Some(c) => {
            let (left, right) = bezier::split(c, t);
            (left[3], Some((left, right)))
        }
        None => (a.lerp(b, t), None),
    };
    let original = edge.clone();

    // Snapshot VOR Mutation
    state.record_undo_snapshot();
    let topology = state.topology_mut();
    let new_point = topology.add_point(PointKind::Node, split_pos);

    let mut second = original.clone();
    second.id = topology.allocate_id();
    second.name = topology.reserve_edge_name();
    second.start_point_id = new_point;
    second.recompute_length(split_pos, b);

    if let Some(first) = topology.edges.get_mut(&edge_id) {
        first.end_point_id = new_point;
        first.recompute_length(a, split_pos);
        if let Some((left, _)) = &halves {
            first.cp1 = Some(left[1]);
            first.cp2 = Some(left[2]);
        }
    }
    if let Some((_, right)) = &halves {
        second.cp1 = Some(right[1]);
        second.cp2 = Some(right[2]);
    }
    let second_name = second.name.clone();
    topology.insert_edge_raw(second);

    log::info!(
        "Kante {} bei t = {:.2} geteilt (neu: {}, Punkt {})",
        original.name,
        t,
        second_name,
        topology.point_label(new_point)
    );
    Some(new_point)
}
