//! Gemeinsame Helfer der Controller-Flow-Tests.

mod editing;
mod history;
mod io;
mod selection;

use glam::Vec2;
use topomap_editor::{AppController, AppIntent, AppState, EditorTool, MapPoint};

/// Controller plus Zustand, gesteuert ausschließlich über Intents.
pub struct Harness {
    pub controller: AppController,
    pub state: AppState,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            controller: AppController::new(),
            state: AppState::new(),
        }
    }

    pub fn send(&mut self, intent: AppIntent) {
        self.controller
            .handle_intent(&mut self.state, intent)
            .expect("Intent sollte ohne Fehler verarbeitet werden");
    }

    pub fn tool(&mut self, tool: EditorTool) {
        self.send(AppIntent::SetEditorToolRequested { tool });
    }

    pub fn click(&mut self, x: f32, y: f32) {
        self.click_with(x, y, false, false);
    }

    pub fn click_with(&mut self, x: f32, y: f32, additive: bool, shift: bool) {
        self.send(AppIntent::CanvasClicked {
            canvas_pos: Vec2::new(x, y),
            additive,
            shift,
            time_ms: 0,
        });
    }

    /// Zieh-Geste von `from` nach `to` in zwei Schritten.
    pub fn drag(&mut self, from: Vec2, to: Vec2, additive: bool) {
        self.send(AppIntent::DragStarted {
            canvas_pos: from,
            additive,
            time_ms: 0,
        });
        self.send(AppIntent::DragUpdated {
            canvas_pos: from.lerp(to, 0.5),
        });
        self.send(AppIntent::DragUpdated { canvas_pos: to });
        self.send(AppIntent::DragEnded);
    }

    pub fn point_named(&self, name: &str) -> &MapPoint {
        self.state
            .topology
            .points
            .values()
            .find(|p| p.name == name)
            .unwrap_or_else(|| panic!("Punkt {name} sollte existieren"))
    }

    pub fn last_warning(&self) -> String {
        self.state
            .ui
            .last_notification()
            .map(|n| n.message.clone())
            .unwrap_or_default()
    }
}

/// Zwei Knoten über das Punktwerkzeug anlegen: n1 (0,0), n2 (100,0).
pub fn harness_with_two_nodes() -> Harness {
    let mut h = Harness::new();
    h.tool(EditorTool::PlacePoint(topomap_editor::PointKind::Node));
    h.click(0.0, 0.0);
    h.click(100.0, 0.0);
    h
}
