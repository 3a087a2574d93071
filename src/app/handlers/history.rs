//! Handler für Undo/Redo der Topologie.

use crate::app::history::Snapshot;
use crate::app::AppState;

/// Stellt den vorherigen Topologie-Zustand wieder her.
///
/// Eine laufende Zieh-Geste wird verworfen; eine Kettenverbindung nur dann,
/// wenn ihr Startpunkt im wiederhergestellten Zustand fehlt.
pub fn undo(state: &mut AppState) {
    state.editor.drag = None;
    let current = Snapshot::from_state(state);
    match state.history.pop_undo_with_current(current) {
        Some(prev) => {
            prev.apply_to(state);
            drop_stale_connection(state);
            log::info!("Undo ausgeführt ({} verbleibend)", state.history.undo_len());
        }
        None => log::debug!("Undo: nichts zu tun"),
    }
}

/// Wendet den zuletzt rückgängig gemachten Zustand erneut an.
pub fn redo(state: &mut AppState) {
    state.editor.drag = None;
    let current = Snapshot::from_state(state);
    match state.history.pop_redo_with_current(current) {
        Some(next) => {
            next.apply_to(state);
            drop_stale_connection(state);
            log::info!("Redo ausgeführt ({} verbleibend)", state.history.redo_len());
        }
        None => log::debug!("Redo: nichts zu tun"),
    }
}

fn drop_stale_connection(state: &mut AppState) {
    if let Some(start) = state.editor.connection.start() {
        if !state.topology.points.contains_key(&start) {
            state.editor.connection.cancel();
        }
    }
}
