//! Use-Case: Selektion löschen.

use crate::app::AppState;
use std::collections::HashSet;

/// Löscht die Selektion mit Priorität Punkte, sonst Kanten, sonst Bereiche.
///
/// Kanten an gelöschten Punkten bleiben stehen; die Anzahl hängender Kanten
/// wird gemeldet.
pub fn delete_selection(state: &mut AppState) {
    let sel = &state.selection;
    if !sel.point_ids.is_empty() {
        let ids: HashSet<u64> = sel.point_ids.iter().copied().collect();
        let dangling_before = state.topology.dangling_edges().len();
        state.record_undo_snapshot();
        let removed = state.topology_mut().delete_points(&ids);
        let dangling = state
            .topology
            .dangling_edges()
            .len()
            .saturating_sub(dangling_before);
        log::info!("{} Punkte gelöscht", removed);
        if dangling > 0 {
            log::warn!("{} Kanten verweisen auf gelöschte Punkte", dangling);
            state
                .ui
                .warn(format!("{dangling} Kanten haben keinen Endpunkt mehr"));
        }
    } else if !sel.edge_ids.is_empty() {
        let ids: HashSet<u64> = sel.edge_ids.iter().copied().collect();
        state.record_undo_snapshot();
        let removed = state.topology_mut().delete_edges(&ids);
        log::info!("{} Kanten gelöscht", removed);
    } else if !sel.area_ids.is_empty() {
        let ids: HashSet<u64> = sel.area_ids.iter().copied().collect();
        state.record_undo_snapshot();
        let removed = state.topology_mut().delete_areas(&ids);
        log::info!("{} Bereiche gelöscht", removed);
    } else {
        log::debug!("Löschen: nichts selektiert");
        return;
    }
    state.selection.clear();
}
