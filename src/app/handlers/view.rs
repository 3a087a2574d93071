//! Handler für Zoom, Pan und Viewport.

use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Setzt Zoom und Verschiebung auf den Standardzustand zurück.
pub fn reset_view(state: &mut AppState) {
    use_cases::camera::reset_view(state);
}

/// Aktualisiert Lage und Größe des Viewports im State.
pub fn set_viewport(state: &mut AppState, origin: Vec2, size: Vec2) {
    use_cases::camera::set_viewport(state, origin, size);
}

pub fn zoom_steps(state: &mut AppState, steps: f32, focus_screen: Option<Vec2>) {
    use_cases::camera::zoom_steps(state, steps, focus_screen);
}

pub fn pinch(state: &mut AppState, previous_distance: f32, current_distance: f32) {
    use_cases::camera::pinch(state, previous_distance, current_distance);
}

/// Verschiebt die Ansicht um ein Bildschirm-Delta.
pub fn pan(state: &mut AppState, screen_delta: Vec2) {
    use_cases::camera::pan(state, screen_delta);
}

pub fn center_on(state: &mut AppState, canvas_pos: Vec2) {
    use_cases::camera::center_on(state, canvas_pos);
}
