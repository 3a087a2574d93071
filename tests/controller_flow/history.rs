use super::{harness_with_two_nodes, Harness};
use glam::Vec2;
use topomap_editor::{ActiveLayer, AppIntent, AreaKind, EdgeKind, EditorTool, PointKind};

#[test]
fn test_undo_redo_are_inverse_over_mixed_edits() {
    let mut h = Harness::new();
    let mut states = vec![h.state.topology.to_data()];

    h.tool(EditorTool::PlacePoint(PointKind::Node));
    h.click(0.0, 0.0);
    states.push(h.state.topology.to_data());
    h.click(100.0, 0.0);
    states.push(h.state.topology.to_data());

    h.tool(EditorTool::DrawEdge(EdgeKind::DoubleBezier));
    h.click(0.0, 0.0);
    h.click(100.0, 0.0);
    states.push(h.state.topology.to_data());

    h.tool(EditorTool::DrawArea(AreaKind::SpeedZone));
    h.click(200.0, 0.0);
    h.click(300.0, 0.0);
    h.click(250.0, 80.0);
    h.send(AppIntent::EnterPressed);
    states.push(h.state.topology.to_data());

    h.tool(EditorTool::Select);
    h.click(0.0, 0.0);
    h.send(AppIntent::NudgeRequested {
        direction: Vec2::new(1.0, 0.0),
    });
    states.push(h.state.topology.to_data());

    h.drag(Vec2::new(100.0, 0.0), Vec2::new(120.0, 30.0), false);
    states.push(h.state.topology.to_data());

    assert_eq!(h.state.history.undo_len(), states.len() - 1);

    for expected in states.iter().rev().skip(1) {
        h.send(AppIntent::UndoRequested);
        assert_eq!(&h.state.topology.to_data(), expected);
    }
    assert!(!h.state.can_undo());

    for expected in states.iter().skip(1) {
        h.send(AppIntent::RedoRequested);
        assert_eq!(&h.state.topology.to_data(), expected);
    }
    assert!(!h.state.can_redo());
}

#[test]
fn test_history_is_bounded_to_capacity() {
    let mut h = Harness::new();
    assert_eq!(h.state.options.history_capacity, 50);
    h.tool(EditorTool::PlacePoint(PointKind::Node));

    for i in 0..51 {
        h.click(i as f32 * 30.0, 0.0);
    }
    assert_eq!(h.state.point_count(), 51);
    assert_eq!(h.state.history.undo_len(), 50);

    for _ in 0..50 {
        assert!(h.state.can_undo());
        h.send(AppIntent::UndoRequested);
    }
    assert_eq!(h.state.point_count(), 1);

    // 51. Undo ist ein No-op
    h.send(AppIntent::UndoRequested);
    assert_eq!(h.state.point_count(), 1);
    assert_eq!(h.state.history.redo_len(), 50);
}

#[test]
fn test_new_edit_clears_redo() {
    let mut h = harness_with_two_nodes();
    h.send(AppIntent::UndoRequested);
    assert!(h.state.can_redo());

    h.click(50.0, 50.0);

    assert!(!h.state.can_redo());
}

#[test]
fn test_drag_records_single_entry_and_click_none() {
    let mut h = harness_with_two_nodes();
    h.tool(EditorTool::Select);
    let before = h.state.history.undo_len();

    h.click(0.0, 0.0);
    assert_eq!(h.state.history.undo_len(), before);

    h.drag(Vec2::new(0.0, 0.0), Vec2::new(-40.0, 10.0), false);
    assert_eq!(h.state.history.undo_len(), before + 1);
    assert_eq!(h.point_named("n1").position, Vec2::new(-40.0, 10.0));

    h.send(AppIntent::UndoRequested);
    assert_eq!(h.point_named("n1").position, Vec2::ZERO);
    assert!(h.state.editor.drag.is_none());
}

#[test]
fn test_raster_layer_routes_undo_to_strokes() {
    let mut h = harness_with_two_nodes();
    h.send(AppIntent::SetActiveLayerRequested {
        layer: ActiveLayer::Raster,
    });
    h.tool(EditorTool::Brush);
    h.drag(Vec2::new(10.0, 10.0), Vec2::new(40.0, 10.0), false);
    assert_eq!(h.state.strokes.committed().len(), 1);

    h.send(AppIntent::UndoRequested);
    assert!(h.state.strokes.committed().is_empty());
    assert_eq!(h.state.point_count(), 2);

    h.send(AppIntent::RedoRequested);
    assert_eq!(h.state.strokes.committed().len(), 1);

    // Zurück auf die Topologie: Undo betrifft wieder Punkte
    h.send(AppIntent::SetActiveLayerRequested {
        layer: ActiveLayer::Topology,
    });
    assert_eq!(h.state.editor.active_tool, EditorTool::Select);
    h.send(AppIntent::UndoRequested);
    assert_eq!(h.state.point_count(), 1);
    assert_eq!(h.state.strokes.committed().len(), 1);
}

#[test]
fn test_escape_during_drag_restores_start_without_history() {
    let mut h = harness_with_two_nodes();
    h.tool(EditorTool::Select);
    let before = h.state.history.undo_len();

    h.send(AppIntent::DragStarted {
        canvas_pos: Vec2::new(100.0, 0.0),
        additive: false,
        time_ms: 0,
    });
    h.send(AppIntent::DragUpdated {
        canvas_pos: Vec2::new(150.0, 50.0),
    });
    assert_eq!(h.point_named("n2").position, Vec2::new(150.0, 50.0));

    h.send(AppIntent::EscapePressed);

    assert_eq!(h.point_named("n2").position, Vec2::new(100.0, 0.0));
    assert_eq!(h.state.history.undo_len(), before);
    assert!(h.state.editor.drag.is_none());

    // Das Loslassen nach dem Abbruch bleibt folgenlos
    h.send(AppIntent::DragEnded);
    assert_eq!(h.state.history.undo_len(), before);
}

#[test]
fn test_tool_switch_during_drag_discards_move() {
    let mut h = harness_with_two_nodes();
    h.tool(EditorTool::Select);
    let before = h.state.history.undo_len();

    h.send(AppIntent::DragStarted {
        canvas_pos: Vec2::new(0.0, 0.0),
        additive: false,
        time_ms: 0,
    });
    h.send(AppIntent::DragUpdated {
        canvas_pos: Vec2::new(-30.0, 40.0),
    });
    h.tool(EditorTool::PlacePoint(PointKind::Node));

    assert_eq!(h.point_named("n1").position, Vec2::ZERO);
    assert_eq!(h.state.history.undo_len(), before);
}

#[test]
fn test_drag_back_to_start_records_nothing() {
    let mut h = harness_with_two_nodes();
    h.tool(EditorTool::Select);
    let before = h.state.history.undo_len();

    h.send(AppIntent::DragStarted {
        canvas_pos: Vec2::new(100.0, 0.0),
        additive: false,
        time_ms: 0,
    });
    h.send(AppIntent::DragUpdated {
        canvas_pos: Vec2::new(150.0, 50.0),
    });
    h.send(AppIntent::DragUpdated {
        canvas_pos: Vec2::new(100.0, 0.0),
    });
    h.send(AppIntent::DragEnded);

    assert_eq!(h.point_named("n2").position, Vec2::new(100.0, 0.0));
    assert_eq!(h.state.history.undo_len(), before);
}
