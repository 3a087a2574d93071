//! Use-Case: Teiländerungen aus dem Eigenschaften-Dialog übernehmen.
//!
//! Geprüft wird vor dem Snapshot: eine abgelehnte Änderung hinterlässt
//! weder Mutation noch History-Eintrag.

use crate::app::history::Snapshot;
use crate::app::AppState;
use crate::core::{AreaPatch, EdgePatch, EditError, PointPatch};

fn finish(state: &mut AppState, snap: Snapshot, result: Result<(), EditError>, what: &str) {
    match result {
        Ok(()) => {
            state.history.record_snapshot(snap);
            log::info!("{} aktualisiert", what);
        }
        Err(e) => {
            log::warn!("{} nicht aktualisiert: {}", what, e);
            state.ui.warn(e.to_string());
        }
    }
}

pub fn update_point(state: &mut AppState, id: u64, patch: &PointPatch) {
    let snap = Snapshot::from_state(state);
    let result = state.topology_mut().update_point(id, patch);
    finish(state, snap, result, &format!("Punkt {id}"));
}

pub fn update_edge(state: &mut AppState, id: u64, patch: &EdgePatch) {
    let snap = Snapshot::from_state(state);
    let result = state.topology_mut().update_edge(id, patch);
    finish(state, snap, result, &format!("Kante {id}"));
}

pub fn update_area(state: &mut AppState, id: u64, patch: &AreaPatch) {
    let snap = Snapshot::from_state(state);
    let result = state.topology_mut().update_area(id, patch);
    finish(state, snap, result, &format!("Bereich {id}"));
}
