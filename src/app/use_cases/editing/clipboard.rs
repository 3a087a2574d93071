//! Use-Case: Selektion kopieren und versetzt einfügen.

use crate::app::state::Clipboard;
use crate::app::use_cases::selection::selection_bounds;
use crate::app::AppState;
use crate::core::geometry;
use glam::Vec2;
use std::collections::HashMap;

use super::transform::moved_point_ids;

/// Kopiert selektierte Punkte (inkl. Endpunkte selektierter Kanten), die
/// Kanten zwischen ihnen und selektierte Bereiche.
pub fn copy_selection(state: &mut AppState) {
    let topology = &state.topology;
    let point_ids = moved_point_ids(state);
    let points: Vec<_> = point_ids
        .iter()
        .filter_map(|id| topology.points.get(id).cloned())
        .collect();
    let edges: Vec<_> = topology
        .edges
        .values()
        .filter(|e| point_ids.contains(&e.start_point_id) && point_ids.contains(&e.end_point_id))
        .cloned()
        .collect();
    let areas: Vec<_> = state
        .selection
        .area_ids
        .iter()
        .filter_map(|id| topology.areas.get(id).cloned())
        .collect();

    let positions: Vec<Vec2> = points
        .iter()
        .map(|p| p.position)
        .chain(areas.iter().flat_map(|a| a.vertices.iter().copied()))
        .collect();
    let Some(centroid) = geometry::centroid(&positions) else {
        log::debug!("Kopieren: nichts selektiert");
        return;
    };

    log::info!(
        "{} Punkte, {} Kanten, {} Bereiche kopiert",
        points.len(),
        edges.len(),
        areas.len()
    );
    state.editor.clipboard = Some(Clipboard {
        points,
        edges,
        areas,
        centroid,
    });
}

/// Fügt die Zwischenablage um `offset` versetzt ein.
///
/// Alle eingefügten Entitäten erhalten neue IDs und Namen und bilden
/// gemeinsam die neue Selektion.
pub fn paste_clipboard(state: &mut AppState, offset: Vec2) {
    let Some(clipboard) = state.editor.clipboard.clone().filter(|c| !c.is_empty()) else {
        log::debug!("Einfügen: Zwischenablage leer");
        return;
    };

    state.record_undo_snapshot();
    let topology = state.topology_mut();

    let mut id_map: HashMap<u64, u64> = HashMap::new();
    for point in &clipboard.points {
        let mut copy = point.clone();
        copy.id = topology.allocate_id();
        copy.name = topology.reserve_point_name(point.kind);
        copy.position += offset;
        id_map.insert(point.id, copy.id);
        topology.insert_point_raw(copy);
    }

    let mut new_edges = Vec::with_capacity(clipboard.edges.len());
    for edge in &clipboard.edges {
        let (Some(&start), Some(&end)) = (
            id_map.get(&edge.start_point_id),
            id_map.get(&edge.end_point_id),
        ) else {
            continue;
        };
        let mut copy = edge.clone();
        copy.id = topology.allocate_id();
        copy.name = topology.reserve_edge_name();
        copy.start_point_id = start;
        copy.end_point_id = end;
        copy.cp1 = edge.cp1.map(|p| p + offset);
        copy.cp2 = edge.cp2.map(|p| p + offset);
        new_edges.push(copy.id);
        topology.insert_edge_raw(copy);
    }

    let mut new_areas = Vec::with_capacity(clipboard.areas.len());
    for area in &clipboard.areas {
        let mut copy = area.clone();
        copy.id = topology.allocate_id();
        copy.name = topology.reserve_area_name();
        copy.vertices.iter_mut().for_each(|v| *v += offset);
        // Netzgruppen-Bindung gilt nur für das Original
        copy.network_group_id = None;
        new_areas.push(copy.id);
        topology.insert_area_raw(copy);
    }

    state.selection.clear();
    state.selection.point_ids.extend(id_map.values().copied());
    state.selection.edge_ids.extend(new_edges.iter().copied());
    state.selection.area_ids.extend(new_areas.iter().copied());
    state.selection.selection_box = selection_bounds(state);

    log::info!(
        "{} Punkte, {} Kanten, {} Bereiche eingefügt (Versatz {:.1}, {:.1})",
        id_map.len(),
        new_edges.len(),
        new_areas.len(),
        offset.x,
        offset.y
    );
}
