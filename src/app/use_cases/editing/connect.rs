//! Use-Case: Kanten über das Kantenwerkzeug erstellen (mit Verkettung).

use crate::app::history::Snapshot;
use crate::app::tools::ConnectionStep;
use crate::app::AppState;
use crate::core::{EdgeKind, EditError, PointKind};
use glam::Vec2;

/// Erstellt eine Kante ohne eigenen Snapshot; Bézier-Kanten erhalten
/// zoomabhängige Standard-Steuerpunkte.
fn create_edge(state: &mut AppState, start: u64, end: u64, kind: EdgeKind) -> Result<u64, EditError> {
    let color = state.options.edge_color(kind);
    let width = state.options.edge_width;
    let offset_px = state.options.bezier_handle_offset_px;
    let scale = state.scale();

    state
        .topology_mut()
        .add_edge_at_scale(start, end, kind, color, width, offset_px, scale)
}

fn reject(state: &mut AppState, err: &EditError) {
    log::warn!("Kante abgelehnt: {}", err);
    state.ui.warn(err.to_string());
}

/// Kantenwerkzeug: Klick auf einen existierenden Punkt.
///
/// Der erste Klick setzt den Startpunkt, jeder weitere erzeugt eine Kante
/// vom aktuellen Start und macht den Endpunkt zum neuen Start. Abgelehnte
/// Kanten lassen den Start unverändert.
pub fn connect_point(state: &mut AppState, point_id: u64, kind: EdgeKind) {
    if !state.topology.points.contains_key(&point_id) {
        log::debug!("Kantenwerkzeug: Punkt {} existiert nicht", point_id);
        return;
    }
    // Start kann per Undo verschwunden sein
    if let Some(start) = state.editor.connection.start() {
        if !state.topology.points.contains_key(&start) {
            log::debug!("Kantenwerkzeug: Start {} fehlt, Neustart bei {}", start, point_id);
            state.editor.connection.restart(point_id);
            return;
        }
    }

    match state.editor.connection.click_point(point_id) {
        ConnectionStep::Started(id) => {
            log::debug!("Kantenwerkzeug: Start bei {}", state.topology.point_label(id));
        }
        ConnectionStep::Ignored => {
            log::debug!("Kantenwerkzeug: Klick auf Startpunkt ignoriert");
        }
        ConnectionStep::Connect { start, end } => {
            if let Err(e) = state.topology.check_edge(start, end, kind, None) {
                reject(state, &e);
                return;
            }
            state.record_undo_snapshot();
            match create_edge(state, start, end, kind) {
                Ok(id) => {
                    state.editor.connection.edge_created(end);
                    log::info!(
                        "Kante {} ({} {} {}) erstellt",
                        state.topology.edges[&id].name,
                        state.topology.point_label(start),
                        kind.arrow_glyph(),
                        state.topology.point_label(end)
                    );
                }
                Err(e) => reject(state, &e),
            }
        }
    }
}

/// Kantenwerkzeug: Klick auf leeren Canvas.
///
/// Legt dort einen Knoten an und behandelt ihn wie einen Klick auf einen
/// Punkt. Punkt und Kante teilen sich einen Undo-Eintrag.
pub fn connect_new_point(state: &mut AppState, canvas_pos: Vec2, kind: EdgeKind) {
    let snap = Snapshot::from_state(state);
    let point_id = state.topology_mut().add_point(PointKind::Node, canvas_pos);
    state.history.record_snapshot(snap);
    log::info!(
        "Punkt {} für Kantenwerkzeug erstellt",
        state.topology.point_label(point_id)
    );

    let start = state
        .editor
        .connection
        .start()
        .filter(|s| state.topology.points.contains_key(s));
    let Some(start) = start else {
        state.editor.connection.restart(point_id);
        return;
    };

    state.editor.connection.click_point(point_id);
    match create_edge(state, start, point_id, kind) {
        Ok(id) => {
            state.editor.connection.edge_created(point_id);
            log::info!("Kante {} erstellt", state.topology.edges[&id].name);
        }
        Err(e) => reject(state, &e),
    }
}

/// Verwirft den offenen Startpunkt (bereits erstellte Kanten bleiben).
pub fn cancel_connection(state: &mut AppState) {
    if state.editor.connection.is_active() {
        state.editor.connection.cancel();
        log::debug!("Kantenwerkzeug: Verbindung abgebrochen");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tools::ConnectionPhase;
    use approx::assert_relative_eq;

    fn with_points() -> (AppState, u64, u64) {
        let mut state = AppState::new();
        let a = state.topology_mut().add_point(PointKind::Node, Vec2::ZERO);
        let b = state
            .topology_mut()
            .add_point(PointKind::Node, Vec2::new(100.0, 0.0));
        (state, a, b)
    }

    #[test]
    fn two_clicks_create_edge_and_chain() {
        let (mut state, a, b) = with_points();
        connect_point(&mut state, a, EdgeKind::SingleLine);
        connect_point(&mut state, b, EdgeKind::SingleLine);

        assert_eq!(state.edge_count(), 1);
        let edge = state.topology.edges.values().next().expect("Kante");
        assert_eq!((edge.start_point_id, edge.end_point_id), (a, b));
        assert_relative_eq!(edge.length, 100.0);
        assert_eq!(
            state.editor.connection.phase(),
            ConnectionPhase::Chaining { start: b }
        );
    }

    #[test]
    fn duplicate_is_rejected_with_warning_and_start_kept() {
        let (mut state, a, b) = with_points();
        connect_point(&mut state, a, EdgeKind::DoubleLine);
        connect_point(&mut state, b, EdgeKind::DoubleLine);
        state.editor.connection.cancel();

        connect_point(&mut state, b, EdgeKind::SingleLine);
        connect_point(&mut state, a, EdgeKind::SingleLine);

        assert_eq!(state.edge_count(), 1);
        assert!(state.ui.last_notification().is_some());
        assert_eq!(state.editor.connection.start(), Some(b));
        assert_eq!(state.history.undo_len(), 1);
    }

    #[test]
    fn empty_canvas_click_creates_point_and_edge_in_one_step() {
        let (mut state, a, _) = with_points();
        connect_point(&mut state, a, EdgeKind::SingleBezier);
        connect_new_point(&mut state, Vec2::new(0.0, 50.0), EdgeKind::SingleBezier);

        assert_eq!(state.point_count(), 3);
        assert_eq!(state.edge_count(), 1);
        assert_eq!(state.history.undo_len(), 1);
        let edge = state.topology.edges.values().next().expect("Kante");
        assert!(edge.cp1.is_some() && edge.cp2.is_some());
    }

    #[test]
    fn bezier_handles_follow_current_zoom() {
        let (mut state, a, b) = with_points();
        state.view.transform.scale = 2.0;
        connect_point(&mut state, a, EdgeKind::SingleBezier);
        connect_point(&mut state, b, EdgeKind::SingleBezier);

        let edge = state.topology.edges.values().next().expect("Kante");
        let cp1 = edge.cp1.expect("cp1");
        let cp2 = edge.cp2.expect("cp2");
        let half_offset = state.options.bezier_handle_offset_px / 2.0;
        assert_relative_eq!(cp1.x, 30.0, epsilon = 1e-4);
        assert_relative_eq!(cp1.y.abs(), half_offset, epsilon = 1e-4);
        assert_relative_eq!(cp2.x, 70.0, epsilon = 1e-4);
        assert_relative_eq!(cp2.y, -cp1.y, epsilon = 1e-4);
    }

    #[test]
    fn first_click_on_empty_canvas_only_starts() {
        let mut state = AppState::new();
        connect_new_point(&mut state, Vec2::ZERO, EdgeKind::SingleLine);
        assert_eq!(state.point_count(), 1);
        assert_eq!(state.edge_count(), 0);
        assert!(state.editor.connection.is_active());
    }
}
