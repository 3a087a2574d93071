//! Tastenkürzel des Editors.
//!
//! Übersetzt einzelne Tastendrücke in `AppIntent`s; `B` und `E` hängen von der
//! aktiven Ebene ab.

use super::{Key, Modifiers};
use crate::app::{ActiveLayer, AppIntent, EditorTool};
use crate::core::{AreaKind, EdgeKind, PointKind};
use glam::Vec2;

/// Verarbeitet einen Tastendruck und gibt AppIntents zurück.
pub fn collect_keyboard_intents(
    key: Key,
    modifiers: Modifiers,
    active_layer: ActiveLayer,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Undo / Redo / Kopieren / Einfügen / Speichern (Cmd/Ctrl)
    if modifiers.command {
        match key {
            Key::Char('z') if modifiers.shift => events.push(AppIntent::RedoRequested),
            Key::Char('z') => events.push(AppIntent::UndoRequested),
            Key::Char('y') => events.push(AppIntent::RedoRequested),
            Key::Char('c') => events.push(AppIntent::CopyRequested),
            Key::Char('v') => events.push(AppIntent::PasteRequested),
            Key::Char('s') => events.push(AppIntent::SaveRequested),
            _ => {}
        }
        return events;
    }

    match key {
        Key::Escape => events.push(AppIntent::EscapePressed),
        Key::Enter => events.push(AppIntent::EnterPressed),
        Key::Delete | Key::Backspace => events.push(AppIntent::DeleteSelectedRequested),
        Key::ArrowUp => events.push(nudge(0.0, -1.0)),
        Key::ArrowDown => events.push(nudge(0.0, 1.0)),
        Key::ArrowLeft => events.push(nudge(-1.0, 0.0)),
        Key::ArrowRight => events.push(nudge(1.0, 0.0)),
        Key::Char('r') => events.push(AppIntent::RotateRequested {
            clockwise: !modifiers.shift,
        }),
        Key::Char(c) => {
            if let Some(tool) = tool_for_key(c, active_layer) {
                events.push(AppIntent::SetEditorToolRequested { tool });
            }
        }
        Key::Space => {}
    }

    events
}

/// Werkzeug-Taste → Werkzeug (`None` = keine Belegung auf dieser Ebene).
fn tool_for_key(c: char, active_layer: ActiveLayer) -> Option<EditorTool> {
    let raster = active_layer == ActiveLayer::Raster;
    let tool = match c {
        'v' => EditorTool::Select,
        'p' => EditorTool::PlacePoint(PointKind::Node),
        't' => EditorTool::PlacePoint(PointKind::Station),
        'k' => EditorTool::PlacePoint(PointKind::Dock),
        'h' => EditorTool::PlacePoint(PointKind::Charge),
        'm' => EditorTool::PlacePoint(PointKind::TempStop),
        'd' => EditorTool::DrawEdge(EdgeKind::DoubleLine),
        's' => EditorTool::DrawEdge(EdgeKind::SingleLine),
        'b' if raster => EditorTool::Brush,
        'b' => EditorTool::DrawEdge(EdgeKind::DoubleBezier),
        'c' => EditorTool::DrawEdge(EdgeKind::SingleBezier),
        'a' => EditorTool::DrawArea(AreaKind::SpeedZone),
        'f' => EditorTool::DrawArea(AreaKind::NoGo),
        'e' if raster => EditorTool::Eraser,
        _ => return None,
    };
    Some(tool)
}

fn nudge(x: f32, y: f32) -> AppIntent {
    AppIntent::NudgeRequested {
        direction: Vec2::new(x, y),
    }
}
