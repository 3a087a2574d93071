//! Zeiger-Events: Klick vs. Zieh-Geste (Schwelle), Pan bei gehaltener Leertaste.

use super::{to_canvas, InputState, Modifiers, PointerButton, PrimaryDragMode, PrimaryPress};
use crate::app::{AppIntent, AppState};
use glam::Vec2;

impl InputState {
    pub(crate) fn handle_pointer_down(
        &mut self,
        screen_pos: Vec2,
        button: PointerButton,
        modifiers: Modifiers,
        time_ms: u64,
    ) {
        self.canvas_focused = true;
        if button != PointerButton::Primary {
            return;
        }
        let mode = if self.space_held {
            PrimaryDragMode::CameraPan
        } else {
            PrimaryDragMode::Pending
        };
        self.press = Some(PrimaryPress {
            screen_pos,
            last_screen_pos: screen_pos,
            modifiers,
            time_ms,
            mode,
        });
    }

    pub(crate) fn handle_pointer_moved(
        &mut self,
        state: &AppState,
        screen_pos: Vec2,
        time_ms: u64,
        events: &mut Vec<AppIntent>,
    ) {
        let Some(mut press) = self.press else {
            // Reine Zeigerbewegung speist nur Vorschauen
            if self
                .throttle
                .admit(time_ms, state.options.pointer_throttle_ms)
            {
                events.push(AppIntent::PointerMoved {
                    canvas_pos: to_canvas(state, screen_pos),
                });
            }
            return;
        };

        match press.mode {
            PrimaryDragMode::CameraPan => {
                events.push(AppIntent::CameraPan {
                    screen_delta: screen_pos - press.last_screen_pos,
                });
            }
            PrimaryDragMode::Pending => {
                if press.screen_pos.distance(screen_pos) >= state.options.drag_threshold_px {
                    press.mode = PrimaryDragMode::Editing;
                    events.push(AppIntent::DragStarted {
                        canvas_pos: to_canvas(state, press.screen_pos),
                        additive: press.modifiers.command,
                        time_ms: press.time_ms,
                    });
                    events.push(AppIntent::DragUpdated {
                        canvas_pos: to_canvas(state, screen_pos),
                    });
                }
            }
            PrimaryDragMode::Editing => {
                events.push(AppIntent::DragUpdated {
                    canvas_pos: to_canvas(state, screen_pos),
                });
            }
        }
        press.last_screen_pos = screen_pos;
        self.press = Some(press);
    }

    pub(crate) fn handle_pointer_up(
        &mut self,
        state: &AppState,
        screen_pos: Vec2,
        button: PointerButton,
        time_ms: u64,
        events: &mut Vec<AppIntent>,
    ) {
        if button == PointerButton::Secondary {
            events.push(AppIntent::CanvasRightClicked {
                canvas_pos: to_canvas(state, screen_pos),
            });
            return;
        }

        let Some(press) = self.press.take() else {
            return;
        };
        match press.mode {
            PrimaryDragMode::Editing => events.push(AppIntent::DragEnded),
            PrimaryDragMode::Pending => events.push(AppIntent::CanvasClicked {
                canvas_pos: to_canvas(state, press.screen_pos),
                additive: press.modifiers.command,
                shift: press.modifiers.shift,
                time_ms,
            }),
            PrimaryDragMode::CameraPan => {}
        }
    }
}
