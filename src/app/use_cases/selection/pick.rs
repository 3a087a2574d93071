//! Use-Case: Treffertest und Einzelklick-Selektion.

use crate::app::tools::HandleSlot;
use crate::app::AppState;
use crate::core::Visibility;
use glam::Vec2;

/// Ergebnis eines Treffertests, in Prioritätsreihenfolge
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hit {
    /// Steuerpunkt einer selektierten Bézier-Kante
    Handle { edge_id: u64, slot: HandleSlot },
    /// Eckpunkt des selektierten Bereichs
    AreaVertex { area_id: u64, index: usize },
    Point(u64),
    Edge(u64),
    Area(u64),
}

/// Ermittelt die Entität unter einer Canvas-Position.
///
/// Griffe und Eckpunkte der Selektion haben Vorrang vor Punkten, Punkte vor
/// Kanten, Kanten vor Bereichen. Ausgeblendete Entitäten sind nicht treffbar.
pub fn hit_test(state: &AppState, pos: Vec2) -> Option<Hit> {
    let scale = state.scale();
    let opts = &state.options;
    let topology = &state.topology;

    let handle_radius = opts.handle_radius(scale);
    for edge_id in &state.selection.edge_ids {
        let Some(edge) = topology.edges.get(edge_id) else {
            continue;
        };
        if !edge.kind.is_bezier() {
            continue;
        }
        for (slot, cp) in [(HandleSlot::First, edge.cp1), (HandleSlot::Second, edge.cp2)] {
            if cp.is_some_and(|cp| cp.distance(pos) <= handle_radius) {
                return Some(Hit::Handle {
                    edge_id: *edge_id,
                    slot,
                });
            }
        }
    }

    if let Some(area_id) = state.selection.single_area() {
        if let Some(area) = topology.areas.get(&area_id) {
            let nearest = area
                .vertices
                .iter()
                .enumerate()
                .map(|(i, v)| (i, v.distance(pos)))
                .filter(|(_, d)| *d <= handle_radius)
                .min_by(|a, b| a.1.total_cmp(&b.1));
            if let Some((index, _)) = nearest {
                return Some(Hit::AreaVertex { area_id, index });
            }
        }
    }

    let visibility = topology.visibility();
    if let Some(id) = hit_point(state, pos, &visibility) {
        return Some(Hit::Point(id));
    }
    if let Some(id) = hit_edge(state, pos, &visibility) {
        return Some(Hit::Edge(id));
    }
    topology.area_at(pos).map(Hit::Area)
}

/// Nächster sichtbarer Punkt im Pick-Radius.
pub fn hit_point(state: &AppState, pos: Vec2, visibility: &Visibility) -> Option<u64> {
    let radius = state.options.pick_radius(state.scale());
    state
        .topology
        .points_within_radius(pos, radius)
        .into_iter()
        .map(|m| m.point_id)
        .find(|id| !visibility.hidden_points.contains(id))
}

/// Nächste sichtbare Kante innerhalb der Toleranz (Bézier-genau).
pub fn hit_edge(state: &AppState, pos: Vec2, visibility: &Visibility) -> Option<u64> {
    let tolerance = state.options.edge_tolerance(state.scale());
    let topology = &state.topology;
    topology
        .edges
        .values()
        .filter(|e| !visibility.hidden_edges.contains(&e.id))
        .filter_map(|e| topology.edge_distance(e, pos).map(|d| (e.id, d)))
        .filter(|(_, d)| *d <= tolerance)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id)
}

/// Ob die Position im aktiven Selektionsrahmen liegt.
pub fn selection_box_contains(state: &AppState, pos: Vec2) -> bool {
    state
        .selection
        .selection_box
        .is_some_and(|rect| rect.contains(pos))
}

pub fn select_point(state: &mut AppState, id: u64, additive: bool) {
    if !state.topology.points.contains_key(&id) {
        log::debug!("Selektion: Punkt {} existiert nicht", id);
        return;
    }
    state.selection.pick_point(id, additive);
}

pub fn select_edge(state: &mut AppState, id: u64, additive: bool) {
    if !state.topology.edges.contains_key(&id) {
        log::debug!("Selektion: Kante {} existiert nicht", id);
        return;
    }
    state.selection.pick_edge(id, additive);
}

pub fn select_area(state: &mut AppState, id: u64, additive: bool) {
    if !state.topology.areas.contains_key(&id) {
        log::debug!("Selektion: Bereich {} existiert nicht", id);
        return;
    }
    state.selection.pick_area(id, additive);
}

pub fn select_area_vertex(state: &mut AppState, area_id: u64, index: usize, additive: bool) {
    let valid = state
        .topology
        .areas
        .get(&area_id)
        .is_some_and(|a| index < a.vertices.len());
    if !valid {
        log::debug!("Selektion: Eckpunkt {}#{} existiert nicht", area_id, index);
        return;
    }
    state.selection.pick_vertex(area_id, index, additive);
}
