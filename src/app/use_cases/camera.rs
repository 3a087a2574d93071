//! Use-Case-Funktionen für Pan, Zoom und Zentrieren.

use crate::app::{AppState, EntityRef};
use crate::core::geometry;
use glam::Vec2;

/// Setzt Zoom und Verschiebung auf Default zurück.
pub fn reset_view(state: &mut AppState) {
    state.view.transform.reset();
}

/// Übernimmt Lage und Größe des Viewports.
pub fn set_viewport(state: &mut AppState, origin: Vec2, size: Vec2) {
    state.view.transform.viewport_origin = origin;
    state.view.transform.viewport_size = size.max(Vec2::ZERO);
}

/// Zoomt um ganze Stufen; ein Fokuspunkt bleibt auf dem Bildschirm stabil.
pub fn zoom_steps(state: &mut AppState, steps: f32, focus_screen: Option<Vec2>) {
    let opts = &state.options;
    state.view.transform.zoom_steps(
        steps,
        opts.view_zoom_step,
        opts.view_scale_min,
        opts.view_scale_max,
        focus_screen,
    );
}

/// Pinch-Zoom über das Verhältnis der Fingerabstände.
pub fn pinch(state: &mut AppState, previous_distance: f32, current_distance: f32) {
    let opts = &state.options;
    state.view.transform.pinch(
        previous_distance,
        current_distance,
        opts.view_scale_min,
        opts.view_scale_max,
    );
}

/// Verschiebt die Ansicht 1:1 mit dem Bildschirm-Delta.
pub fn pan(state: &mut AppState, screen_delta: Vec2) {
    state.view.transform.pan_screen(screen_delta);
}

pub fn center_on(state: &mut AppState, canvas_pos: Vec2) {
    state.view.transform.center_on(canvas_pos);
}

/// Canvas-Position, auf die beim Zentrieren einer Entität gezielt wird.
///
/// Punkte: Position; Kanten: Mitte der Endpunkte; Bereiche: Eckpunkt-Schwerpunkt.
pub fn entity_focus(state: &AppState, entity: EntityRef) -> Option<Vec2> {
    let topology = &state.topology;
    match entity {
        EntityRef::Point(id) => topology.point_position(id),
        EntityRef::Edge(id) => {
            let edge = topology.edges.get(&id)?;
            let (a, b) = topology.edge_endpoints(edge)?;
            Some((a + b) * 0.5)
        }
        EntityRef::Area(id) => geometry::centroid(&topology.areas.get(&id)?.vertices),
    }
}
