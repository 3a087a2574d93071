//! Use-Case-Funktionen für Netzwerk- und Pfadgruppen.

use crate::app::history::Snapshot;
use crate::app::AppState;
use crate::core::{EditError, TopologyMap};

/// Führt eine Gruppen-Mutation aus und nimmt den Snapshot nur bei Erfolg auf.
fn apply<T>(
    state: &mut AppState,
    what: &str,
    op: impl FnOnce(&mut TopologyMap) -> Result<T, EditError>,
) -> Option<T> {
    let snap = Snapshot::from_state(state);
    match op(state.topology_mut()) {
        Ok(value) => {
            state.history.record_snapshot(snap);
            log::info!("{}", what);
            Some(value)
        }
        Err(e) => {
            log::warn!("{} abgelehnt: {}", what, e);
            state.ui.warn(e.to_string());
            None
        }
    }
}

/// Wendet `op` auf jede ID an; Teilfehler werden gemeldet, Erfolge bleiben.
fn apply_each(
    state: &mut AppState,
    what: &str,
    ids: &[u64],
    op: impl Fn(&mut TopologyMap, u64) -> Result<(), EditError>,
) -> usize {
    let snap = Snapshot::from_state(state);
    let mut added = 0;
    let mut errors = Vec::new();
    {
        let topology = state.topology_mut();
        for &id in ids {
            match op(topology, id) {
                Ok(()) => added += 1,
                Err(e) => errors.push(e),
            }
        }
    }
    if added > 0 {
        state.history.record_snapshot(snap);
        log::info!("{}: {} Einträge", what, added);
    }
    for e in errors {
        log::warn!("{}: {}", what, e);
        state.ui.warn(e.to_string());
    }
    added
}

pub fn create_network_group(state: &mut AppState, name: &str, area_id: Option<u64>) -> Option<u64> {
    apply(state, &format!("Netzwerkgruppe '{name}' erstellt"), |t| {
        t.add_network_group(name, area_id)
    })
}

pub fn create_path_group(state: &mut AppState, name: &str) -> Option<u64> {
    apply(state, &format!("Pfadgruppe '{name}' erstellt"), |t| {
        t.add_path_group(name)
    })
}

pub fn add_paths_to_network_group(state: &mut AppState, group_id: u64, edge_ids: &[u64]) -> usize {
    apply_each(state, "Pfade zur Netzwerkgruppe", edge_ids, |t, id| {
        t.add_path_to_network_group(group_id, id)
    })
}

pub fn add_points_to_network_group(state: &mut AppState, group_id: u64, point_ids: &[u64]) -> usize {
    apply_each(state, "Punkte zur Netzwerkgruppe", point_ids, |t, id| {
        t.add_point_to_network_group(group_id, id)
    })
}

/// Pfadgruppen lehnen Kanten ab, die bereits in irgendeiner Pfadgruppe sind.
pub fn add_paths_to_path_group(state: &mut AppState, group_id: u64, edge_ids: &[u64]) -> usize {
    apply_each(state, "Pfade zur Pfadgruppe", edge_ids, |t, id| {
        t.add_path_to_path_group(group_id, id)
    })
}

/// Sichtbarkeit einer Netzwerkgruppe; blendet ihre Kanten und Punkte aus.
pub fn set_network_group_visible(state: &mut AppState, group_id: u64, visible: bool) {
    let what = format!(
        "Netzwerkgruppe {} {}",
        group_id,
        if visible { "eingeblendet" } else { "ausgeblendet" }
    );
    apply(state, &what, |t| t.set_network_group_visible(group_id, visible));
}

pub fn remove_group(state: &mut AppState, group_id: u64) {
    apply(state, &format!("Gruppe {group_id} entfernt"), |t| {
        t.remove_group(group_id)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EdgeKind, PointKind};
    use glam::Vec2;

    fn with_edge() -> (AppState, u64) {
        let mut state = AppState::new();
        let topology = state.topology_mut();
        let a = topology.add_point(PointKind::Node, Vec2::ZERO);
        let b = topology.add_point(PointKind::Node, Vec2::X);
        let e = topology
            .add_edge(a, b, EdgeKind::SingleLine, [1.0; 4], 1.0)
            .expect("Kante");
        (state, e)
    }

    #[test]
    fn path_group_rejects_edge_from_other_path_group() {
        let (mut state, e) = with_edge();
        let g1 = create_path_group(&mut state, "Gang A").expect("g1");
        let g2 = create_path_group(&mut state, "Gang B").expect("g2");

        assert_eq!(add_paths_to_path_group(&mut state, g1, &[e]), 1);
        assert_eq!(add_paths_to_path_group(&mut state, g2, &[e]), 0);
        assert!(state.ui.last_notification().is_some());
    }

    #[test]
    fn network_groups_may_share_edges_and_hide_them() {
        let (mut state, e) = with_edge();
        let g1 = create_network_group(&mut state, "Netz 1", None).expect("g1");
        let g2 = create_network_group(&mut state, "Netz 2", None).expect("g2");
        assert_eq!(add_paths_to_network_group(&mut state, g1, &[e]), 1);
        assert_eq!(add_paths_to_network_group(&mut state, g2, &[e]), 1);

        set_network_group_visible(&mut state, g2, false);
        let vis = state.topology.visibility();
        assert!(vis.hidden_edges.contains(&e));
    }

    #[test]
    fn duplicate_group_name_is_rejected() {
        let (mut state, _) = with_edge();
        create_path_group(&mut state, "Gang").expect("erste");
        let undo_before = state.history.undo_len();
        assert_eq!(create_path_group(&mut state, "Gang"), None);
        assert_eq!(state.history.undo_len(), undo_before);
    }
}
