//! Headless Eingabe-Übersetzung: Zeiger- und Tastatur-Events → AppIntent.
//!
//! Aufgeteilt in Submodule:
//! - `pointer` — Drücken/Bewegen/Loslassen, Zieh-Schwelle und Pan-Modus
//! - `zoom` — Mausrad und Pinch (nur nach Klick auf den Canvas)
//! - `keyboard` — Tastenbelegung
//! - `throttle` — Drosselung roher Zeigerpositionen für Vorschauen

mod keyboard;
mod pointer;
mod throttle;
mod zoom;

pub use keyboard::collect_keyboard_intents;
pub use throttle::PointerThrottle;

use crate::app::{AppIntent, AppState};
use glam::Vec2;

/// Zeigertaste
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Gedrückte Modifikatoren (`command` = Ctrl bzw. Cmd)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub command: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        shift: false,
        command: false,
    };
    pub const SHIFT: Modifiers = Modifiers {
        shift: true,
        command: false,
    };
    pub const COMMAND: Modifiers = Modifiers {
        shift: false,
        command: true,
    };
}

/// Taste (Buchstaben klein)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Delete,
    Backspace,
    Escape,
    Enter,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
}

/// Rohes Eingabe-Event in Bildschirmkoordinaten
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown {
        screen_pos: Vec2,
        button: PointerButton,
        modifiers: Modifiers,
        time_ms: u64,
    },
    PointerMoved { screen_pos: Vec2, time_ms: u64 },
    PointerUp {
        screen_pos: Vec2,
        button: PointerButton,
        time_ms: u64,
    },
    DoubleClick { screen_pos: Vec2 },
    /// Mausrad in Rasten (positiv = hinein)
    Wheel { ticks: f32, screen_pos: Vec2 },
    Pinch {
        previous_distance: f32,
        current_distance: f32,
    },
    KeyDown { key: Key, modifiers: Modifiers },
    KeyUp { key: Key },
    /// Ein Texteingabefeld hat den Fokus erhalten/verloren
    TextInputFocus { focused: bool },
}

/// Modus einer gedrückten Primärtaste
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum PrimaryDragMode {
    /// Gedrückt, Schwelle noch nicht überschritten
    #[default]
    Pending,
    /// Zieh-Geste an den Editor weitergereicht
    Editing,
    /// Leertaste gehalten: Ansicht verschieben
    CameraPan,
}

/// Gedrückte Primärtaste
#[derive(Debug, Clone, Copy)]
pub(crate) struct PrimaryPress {
    pub screen_pos: Vec2,
    pub last_screen_pos: Vec2,
    pub modifiers: Modifiers,
    pub time_ms: u64,
    pub mode: PrimaryDragMode,
}

/// Verwaltet den Eingabe-Zustand zwischen Events (Drag, Pan, Fokus, Drossel)
#[derive(Debug, Default)]
pub struct InputState {
    pub(crate) press: Option<PrimaryPress>,
    /// Leertaste gehalten
    pub(crate) space_held: bool,
    /// Canvas wurde angeklickt (Voraussetzung für Zoom)
    pub(crate) canvas_focused: bool,
    /// Texteingabe hat den Fokus (Tastenkürzel aus)
    pub(crate) text_input_focused: bool,
    pub(crate) throttle: PointerThrottle,
}

impl InputState {
    /// Erstellt einen neuen, leeren Eingabe-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ob der Canvas Zoom-Gesten annimmt.
    pub fn canvas_focused(&self) -> bool {
        self.canvas_focused
    }

    /// Ob gerade eine Zieh-Geste an den Editor läuft.
    pub fn is_dragging(&self) -> bool {
        self.press
            .is_some_and(|p| p.mode == PrimaryDragMode::Editing)
    }

    /// Übersetzt ein rohes Event in AppIntents.
    ///
    /// Zentraler Einstieg für alle Zeiger-, Zoom- und Tastatur-Events; die
    /// Umrechnung in Canvas-Koordinaten nutzt die aktuelle Ansicht.
    pub fn handle_event(&mut self, state: &AppState, event: InputEvent) -> Vec<AppIntent> {
        let mut events = Vec::new();
        match event {
            InputEvent::PointerDown {
                screen_pos,
                button,
                modifiers,
                time_ms,
            } => self.handle_pointer_down(screen_pos, button, modifiers, time_ms),
            InputEvent::PointerMoved {
                screen_pos,
                time_ms,
            } => self.handle_pointer_moved(state, screen_pos, time_ms, &mut events),
            InputEvent::PointerUp {
                screen_pos,
                button,
                time_ms,
            } => self.handle_pointer_up(state, screen_pos, button, time_ms, &mut events),
            InputEvent::DoubleClick { screen_pos } => {
                events.push(AppIntent::CanvasDoubleClicked {
                    canvas_pos: to_canvas(state, screen_pos),
                });
            }
            InputEvent::Wheel { ticks, screen_pos } => {
                self.handle_wheel(ticks, screen_pos, &mut events)
            }
            InputEvent::Pinch {
                previous_distance,
                current_distance,
            } => self.handle_pinch(previous_distance, current_distance, &mut events),
            InputEvent::KeyDown { key, modifiers } => {
                if self.text_input_focused {
                    // Texteingabe hat Vorrang
                } else if key == Key::Space {
                    self.space_held = true;
                } else {
                    events.extend(collect_keyboard_intents(
                        key,
                        modifiers,
                        state.editor.active_layer,
                    ));
                }
            }
            InputEvent::KeyUp { key } => {
                if key == Key::Space {
                    self.space_held = false;
                }
            }
            InputEvent::TextInputFocus { focused } => self.text_input_focused = focused,
        }
        events
    }
}

/// Bildschirm- → Canvas-Koordinaten über die aktuelle Ansicht.
pub(crate) fn to_canvas(state: &AppState, screen_pos: Vec2) -> Vec2 {
    state.view.transform.screen_to_canvas(screen_pos)
}
