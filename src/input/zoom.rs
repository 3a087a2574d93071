//! Mausrad- und Pinch-Zoom; erst nach einem Klick auf den Canvas aktiv.

use super::InputState;
use crate::app::AppIntent;
use glam::Vec2;

impl InputState {
    pub(crate) fn handle_wheel(&mut self, ticks: f32, screen_pos: Vec2, events: &mut Vec<AppIntent>) {
        if !self.canvas_focused {
            log::debug!("Mausrad ignoriert: Canvas nicht fokussiert");
            return;
        }
        if ticks == 0.0 {
            return;
        }
        events.push(AppIntent::WheelZoom {
            ticks,
            focus_screen: screen_pos,
        });
    }

    pub(crate) fn handle_pinch(
        &mut self,
        previous_distance: f32,
        current_distance: f32,
        events: &mut Vec<AppIntent>,
    ) {
        if !self.canvas_focused {
            log::debug!("Pinch ignoriert: Canvas nicht fokussiert");
            return;
        }
        events.push(AppIntent::PinchZoom {
            previous_distance,
            current_distance,
        });
    }
}
