//! Use-Case: Selektion verschieben (Pfeiltasten) und drehen.
//!
//! Enthält außerdem die gemeinsamen Helfer, mit denen Drags, Nudges und
//! Rotationen Punkte, Bereiche und mitlaufende Steuerpunkte transformieren.

use crate::app::tools::EdgeControls;
use crate::app::AppState;
use crate::core::geometry;
use crate::core::{normalize_degrees, TopologyMap};
use glam::{Affine2, Vec2};
use indexmap::IndexSet;

/// Ausgangswerte aller Entitäten, die eine Transformation betrifft.
#[derive(Debug, Clone, Default)]
pub(crate) struct TransformTargets {
    pub points: Vec<(u64, Vec2)>,
    pub edges: Vec<EdgeControls>,
    pub areas: Vec<(u64, Vec<Vec2>)>,
}

impl TransformTargets {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.areas.is_empty()
    }

    /// Alle Positionen (Punkte und Eckpunkte) für Schwerpunkt/Rahmen.
    pub fn positions(&self) -> Vec<Vec2> {
        self.points
            .iter()
            .map(|(_, p)| *p)
            .chain(self.areas.iter().flat_map(|(_, v)| v.iter().copied()))
            .collect()
    }
}

/// Punkte, die eine Selektions-Transformation bewegt:
/// selektierte Punkte plus Endpunkte selektierter Kanten.
pub(crate) fn moved_point_ids(state: &AppState) -> IndexSet<u64> {
    let topology = &state.topology;
    let mut ids: IndexSet<u64> = state
        .selection
        .point_ids
        .iter()
        .copied()
        .filter(|id| topology.points.contains_key(id))
        .collect();
    for edge_id in &state.selection.edge_ids {
        if let Some(edge) = topology.edges.get(edge_id) {
            for pid in [edge.start_point_id, edge.end_point_id] {
                if topology.points.contains_key(&pid) {
                    ids.insert(pid);
                }
            }
        }
    }
    ids
}

/// Erfasst die Ausgangswerte für die aktuelle Selektion.
pub(crate) fn capture_selection(state: &AppState) -> TransformTargets {
    let point_ids = moved_point_ids(state);
    let topology = &state.topology;
    let points = capture_points(topology, point_ids.iter().copied());
    let edges = capture_edge_controls(topology, &points);
    let areas = state
        .selection
        .area_ids
        .iter()
        .filter_map(|id| topology.areas.get(id).map(|a| (*id, a.vertices.clone())))
        .collect();
    TransformTargets {
        points,
        edges,
        areas,
    }
}

pub(crate) fn capture_points(
    topology: &TopologyMap,
    ids: impl IntoIterator<Item = u64>,
) -> Vec<(u64, Vec2)> {
    ids.into_iter()
        .filter_map(|id| topology.point_position(id).map(|p| (id, p)))
        .collect()
}

/// Bézier-Kanten, deren Start- oder Endpunkt sich bewegt.
pub(crate) fn capture_edge_controls(
    topology: &TopologyMap,
    moved: &[(u64, Vec2)],
) -> Vec<EdgeControls> {
    let moved_ids: IndexSet<u64> = moved.iter().map(|(id, _)| *id).collect();
    topology
        .edges
        .values()
        .filter(|e| e.kind.is_bezier() && (e.cp1.is_some() || e.cp2.is_some()))
        .filter(|e| moved_ids.contains(&e.start_point_id) || moved_ids.contains(&e.end_point_id))
        .map(|e| EdgeControls {
            edge_id: e.id,
            start_id: e.start_point_id,
            end_id: e.end_point_id,
            cp1: e.cp1,
            cp2: e.cp2,
        })
        .collect()
}

/// Führt Steuerpunkte nach, nachdem sich Endpunkte bewegt haben.
///
/// Die Ähnlichkeitstransformation der Sehne (alt → neu) wird auf die
/// Ausgangs-Steuerpunkte angewendet; die Kurvenform bleibt erhalten.
pub(crate) fn follow_controls(
    topology: &mut TopologyMap,
    initial_points: &[(u64, Vec2)],
    controls: &[EdgeControls],
) {
    let initial = |id: u64, topology: &TopologyMap| {
        initial_points
            .iter()
            .find(|(pid, _)| *pid == id)
            .map(|(_, p)| *p)
            .or_else(|| topology.point_position(id))
    };
    for ctrl in controls {
        let (Some(a0), Some(b0)) = (initial(ctrl.start_id, topology), initial(ctrl.end_id, topology))
        else {
            continue;
        };
        let (Some(a1), Some(b1)) = (
            topology.point_position(ctrl.start_id),
            topology.point_position(ctrl.end_id),
        ) else {
            continue;
        };
        let sim = geometry::similarity_between(a0, b0, a1, b1);
        if let Some(edge) = topology.edges.get_mut(&ctrl.edge_id) {
            edge.cp1 = ctrl.cp1.map(|p| sim.transform_point2(p));
            edge.cp2 = ctrl.cp2.map(|p| sim.transform_point2(p));
        }
    }
}

/// Wendet eine affine Abbildung auf die Ausgangswerte an.
pub(crate) fn apply_affine(
    topology: &mut TopologyMap,
    points: &[(u64, Vec2)],
    edges: &[EdgeControls],
    areas: &[(u64, Vec<Vec2>)],
    affine: Affine2,
) {
    let positions: Vec<(u64, Vec2)> = points
        .iter()
        .map(|(id, p)| (*id, affine.transform_point2(*p)))
        .collect();
    topology.set_point_positions(&positions);
    for (area_id, vertices) in areas {
        if let Some(area) = topology.areas.get_mut(area_id) {
            area.vertices = vertices.iter().map(|v| affine.transform_point2(*v)).collect();
        }
    }
    follow_controls(topology, points, edges);
}

impl TransformTargets {
    pub fn apply(&self, topology: &mut TopologyMap, affine: Affine2) {
        apply_affine(topology, &self.points, &self.edges, &self.areas, affine);
    }
}

/// Berechnet den Selektionsrahmen neu, falls einer aktiv ist.
pub(crate) fn refresh_selection_box(state: &mut AppState) {
    if state.selection.selection_box.is_some() {
        state.selection.selection_box = crate::app::use_cases::selection::selection_bounds(state);
    }
}

/// Verschiebt die Selektion um ein Delta (eine History-Stufe).
pub fn nudge_selection(state: &mut AppState, delta: Vec2) {
    let targets = capture_selection(state);
    if targets.is_empty() || delta == Vec2::ZERO {
        log::debug!("Nudge: nichts selektiert");
        return;
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot();
    targets.apply(state.topology_mut(), Affine2::from_translation(delta));
    refresh_selection_box(state);

    log::info!(
        "Selektion um ({:.1}, {:.1}) verschoben",
        delta.x,
        delta.y
    );
}

/// Dreht die Selektion um ihren Schwerpunkt.
///
/// Positiver Winkel dreht bei nach unten wachsender y-Achse im Uhrzeigersinn.
/// Ausrichtungen der Punkte drehen mit und bleiben in `[-180, 180]`.
pub fn rotate_selection(state: &mut AppState, degrees: f32) {
    let targets = capture_selection(state);
    let Some(center) = geometry::centroid(&targets.positions()) else {
        log::debug!("Rotation: nichts selektiert");
        return;
    };

    state.record_undo_snapshot();
    let topology = state.topology_mut();
    targets.apply(topology, geometry::rotation_about(center, degrees));
    for (id, _) in &targets.points {
        if let Some(point) = topology.points.get_mut(id) {
            point.direction = normalize_degrees(point.direction + degrees);
        }
    }
    refresh_selection_box(state);

    log::info!(
        "Selektion um {:.0}° gedreht ({} Punkte, {} Bereiche)",
        degrees,
        targets.points.len(),
        targets.areas.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EdgeKind, PointKind};
    use approx::assert_relative_eq;

    fn state_with_bezier() -> (AppState, u64, u64, u64) {
        let mut state = AppState::new();
        let topology = state.topology_mut();
        let a = topology.add_point(PointKind::Node, Vec2::new(0.0, 0.0));
        let b = topology.add_point(PointKind::Node, Vec2::new(100.0, 0.0));
        let e = topology
            .add_edge(a, b, EdgeKind::SingleBezier, [1.0; 4], 1.0)
            .expect("Kante");
        if let Some(edge) = topology.edges.get_mut(&e) {
            edge.cp1 = Some(Vec2::new(30.0, 40.0));
            edge.cp2 = Some(Vec2::new(70.0, 40.0));
        }
        (state, a, b, e)
    }

    #[test]
    fn nudge_translates_controls_when_both_endpoints_move() {
        let (mut state, a, b, e) = state_with_bezier();
        state.selection.pick_point(a, false);
        state.selection.pick_point(b, true);

        nudge_selection(&mut state, Vec2::new(5.0, -2.0));

        let edge = &state.topology.edges[&e];
        let cp1 = edge.cp1.expect("cp1");
        assert_relative_eq!(cp1.x, 35.0, epsilon = 1e-4);
        assert_relative_eq!(cp1.y, 38.0, epsilon = 1e-4);
        assert_eq!(state.history.undo_len(), 1);
    }

    #[test]
    fn moving_one_endpoint_keeps_curve_shape() {
        let (mut state, _a, b, e) = state_with_bezier();
        state.selection.pick_point(b, false);

        // Endpunkt b um den Ursprung auf die y-Achse drehen: (100,0) → (0,100)
        let targets = capture_selection(&state);
        targets.apply(
            state.topology_mut(),
            geometry::rotation_about(Vec2::ZERO, 90.0),
        );

        let edge = &state.topology.edges[&e];
        let cp1 = edge.cp1.expect("cp1");
        // (30,40) um 90° um a gedreht → (-40,30)
        assert_relative_eq!(cp1.x, -40.0, epsilon = 1e-3);
        assert_relative_eq!(cp1.y, 30.0, epsilon = 1e-3);
    }

    #[test]
    fn four_quarter_turns_restore_positions_and_directions() {
        let mut state = AppState::new();
        let ids: Vec<u64> = [(0.0, 0.0), (13.0, 7.5), (-4.0, 22.0)]
            .iter()
            .map(|&(x, y)| state.topology_mut().add_point(PointKind::Node, Vec2::new(x, y)))
            .collect();
        if let Some(p) = state.topology_mut().points.get_mut(&ids[1]) {
            p.direction = 170.0;
        }
        let before: Vec<(Vec2, f32)> = ids
            .iter()
            .map(|id| {
                let p = &state.topology.points[id];
                (p.position, p.direction)
            })
            .collect();
        for (i, id) in ids.iter().enumerate() {
            state.selection.pick_point(*id, i > 0);
        }

        for _ in 0..4 {
            rotate_selection(&mut state, 90.0);
        }

        for (id, (pos, dir)) in ids.iter().zip(before) {
            let p = &state.topology.points[id];
            assert_relative_eq!(p.position.x, pos.x, epsilon = 1e-3);
            assert_relative_eq!(p.position.y, pos.y, epsilon = 1e-3);
            assert_relative_eq!(
                (p.direction - dir).rem_euclid(360.0).min((dir - p.direction).rem_euclid(360.0)),
                0.0,
                epsilon = 1e-3
            );
        }
    }

    #[test]
    fn empty_selection_records_nothing() {
        let mut state = AppState::new();
        rotate_selection(&mut state, 90.0);
        nudge_selection(&mut state, Vec2::X);
        assert!(!state.can_undo());
    }
}
