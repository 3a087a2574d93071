use super::{harness_with_two_nodes, Harness};
use approx::assert_relative_eq;
use glam::Vec2;
use topomap_editor::{AppIntent, AreaKind, EdgeKind, EditorTool, PointKind};

#[test]
fn test_end_to_end_two_nodes_and_one_edge() {
    let mut h = harness_with_two_nodes();
    assert_eq!(h.state.point_count(), 2);
    assert_eq!(h.point_named("n1").position, Vec2::new(0.0, 0.0));
    assert_eq!(h.point_named("n2").position, Vec2::new(100.0, 0.0));

    h.tool(EditorTool::DrawEdge(EdgeKind::SingleLine));
    h.click(0.5, 0.5);
    h.click(100.0, 0.5);

    assert_eq!(h.state.edge_count(), 1);
    let edge = h
        .state
        .topology
        .edges
        .values()
        .next()
        .expect("Kante e1 sollte existieren");
    assert_eq!(edge.name, "e1");
    assert_relative_eq!(edge.length, 100.0, epsilon = 1e-3);
    assert_eq!(edge.start_point_id, h.point_named("n1").id);
    assert_eq!(edge.end_point_id, h.point_named("n2").id);
}

#[test]
fn test_duplicate_edge_is_rejected_per_direction() {
    let mut h = harness_with_two_nodes();
    h.tool(EditorTool::DrawEdge(EdgeKind::SingleLine));
    h.click(0.0, 0.0);
    h.click(100.0, 0.0);
    h.send(AppIntent::EscapePressed);

    // Gleiche Richtung → abgelehnt, Warnung nennt beide Punkte
    h.click(0.0, 0.0);
    h.click(100.0, 0.0);
    assert_eq!(h.state.edge_count(), 1);
    let warning = h.last_warning();
    assert!(warning.contains("n1") && warning.contains("n2"), "{warning}");
    h.send(AppIntent::EscapePressed);

    // Gegenrichtung ist erlaubt
    h.click(100.0, 0.0);
    h.click(0.0, 0.0);
    assert_eq!(h.state.edge_count(), 2);
    h.send(AppIntent::EscapePressed);

    // Beidseitige Kante kollidiert mit jeder vorhandenen
    h.tool(EditorTool::DrawEdge(EdgeKind::DoubleLine));
    h.click(0.0, 0.0);
    h.click(100.0, 0.0);
    assert_eq!(h.state.edge_count(), 2);
}

#[test]
fn test_edge_tool_chains_and_creates_nodes_on_empty_canvas() {
    let mut h = harness_with_two_nodes();
    h.tool(EditorTool::DrawEdge(EdgeKind::SingleLine));

    h.click(0.0, 0.0);
    h.click(100.0, 0.0);
    h.click(100.0, 100.0);

    assert_eq!(h.state.point_count(), 3);
    assert_eq!(h.state.edge_count(), 2);
    assert!(h.state.editor.connection.is_active());

    // Punkt und Kante teilen sich einen Undo-Schritt
    h.send(AppIntent::UndoRequested);
    assert_eq!(h.state.point_count(), 2);
    assert_eq!(h.state.edge_count(), 1);
}

#[test]
fn test_bezier_tool_creates_default_control_points() {
    let mut h = harness_with_two_nodes();
    h.tool(EditorTool::DrawEdge(EdgeKind::SingleBezier));
    h.click(0.0, 0.0);
    h.click(100.0, 0.0);

    let edge = h.state.topology.edges.values().next().expect("Kante");
    let cp1 = edge.cp1.expect("cp1");
    let cp2 = edge.cp2.expect("cp2");
    assert_relative_eq!(cp1.x, 30.0, epsilon = 1e-4);
    assert_relative_eq!(cp2.x, 70.0, epsilon = 1e-4);
    assert_relative_eq!(cp1.y, -cp2.y, epsilon = 1e-4);
}

#[test]
fn test_area_requires_three_vertices_on_enter() {
    let mut h = Harness::new();
    h.tool(EditorTool::DrawArea(AreaKind::NoGo));
    h.click(0.0, 0.0);
    h.click(50.0, 0.0);

    h.send(AppIntent::EnterPressed);
    assert_eq!(h.state.area_count(), 0);
    assert!(h.last_warning().contains('3'));
    assert_eq!(h.state.editor.area_draft.vertex_count(), 2);

    h.click(25.0, 40.0);
    h.send(AppIntent::EnterPressed);
    assert_eq!(h.state.area_count(), 1);
    let area = h.state.topology.areas.values().next().expect("Bereich");
    assert_eq!(area.kind, AreaKind::NoGo);
    assert_eq!(area.vertices.len(), 3);
    assert!(!h.state.editor.area_draft.is_collecting());
}

#[test]
fn test_escape_cancels_short_area_silently() {
    let mut h = Harness::new();
    h.tool(EditorTool::DrawArea(AreaKind::SpeedZone));
    h.click(0.0, 0.0);
    h.click(50.0, 0.0);

    h.send(AppIntent::EscapePressed);

    assert_eq!(h.state.area_count(), 0);
    assert!(!h.state.editor.area_draft.is_collecting());
    assert!(h.state.ui.notifications.is_empty());
}

#[test]
fn test_double_click_completes_area() {
    let mut h = Harness::new();
    h.tool(EditorTool::DrawArea(AreaKind::WorkZone));
    h.click(0.0, 0.0);
    h.click(50.0, 0.0);
    h.click(50.0, 50.0);
    h.click(50.0, 50.0);
    h.send(AppIntent::CanvasDoubleClicked {
        canvas_pos: Vec2::new(50.0, 50.0),
    });

    assert_eq!(h.state.area_count(), 1);
    let area = h.state.topology.areas.values().next().expect("Bereich");
    assert_eq!(area.vertices.len(), 3);
}

#[test]
fn test_shift_click_splits_edge_and_selects_new_node() {
    let mut h = harness_with_two_nodes();
    h.tool(EditorTool::DrawEdge(EdgeKind::SingleLine));
    h.click(0.0, 0.0);
    h.click(100.0, 0.0);
    h.tool(EditorTool::Select);

    h.click_with(40.0, 2.0, false, true);

    assert_eq!(h.state.point_count(), 3);
    assert_eq!(h.state.edge_count(), 2);
    assert_eq!(h.state.selection.point_ids.len(), 1);
    let new_id = h.state.selection.point_ids[0];
    let new_point = &h.state.topology.points[&new_id];
    assert_relative_eq!(new_point.position.x, 40.0, epsilon = 0.5);
    assert_relative_eq!(new_point.position.y, 0.0, epsilon = 1e-3);
}

#[test]
fn test_delete_point_leaves_dangling_edge_out_of_scene() {
    let mut h = harness_with_two_nodes();
    h.tool(EditorTool::DrawEdge(EdgeKind::SingleLine));
    h.click(0.0, 0.0);
    h.click(100.0, 0.0);
    h.tool(EditorTool::Select);

    h.click(0.0, 0.0);
    h.send(AppIntent::DeleteSelectedRequested);

    assert_eq!(h.state.point_count(), 1);
    assert_eq!(h.state.edge_count(), 1);
    assert_eq!(h.state.topology.dangling_edges().len(), 1);
    assert!(h.last_warning().contains('1'));
    let scene = h.controller.build_render_scene(&h.state);
    assert!(scene.edges.is_empty());
}

#[test]
fn test_copy_paste_offsets_to_last_click() {
    let mut h = harness_with_two_nodes();
    h.tool(EditorTool::Select);
    h.click(0.0, 0.0);
    h.click_with(100.0, 0.0, true, false);
    h.send(AppIntent::CopyRequested);

    h.click(300.0, 300.0);
    h.send(AppIntent::PasteRequested);

    assert_eq!(h.state.point_count(), 4);
    let pasted: Vec<Vec2> = h
        .state
        .selection
        .point_ids
        .iter()
        .map(|id| h.state.topology.points[id].position)
        .collect();
    assert_eq!(pasted.len(), 2);
    // Schwerpunkt (50,0) landet auf der Klickposition
    assert!(pasted.contains(&Vec2::new(250.0, 300.0)));
    assert!(pasted.contains(&Vec2::new(350.0, 300.0)));
}

#[test]
fn test_rotation_four_quarter_turns_is_identity() {
    let mut h = Harness::new();
    h.tool(EditorTool::PlacePoint(PointKind::Station));
    h.click(10.0, 20.0);
    h.click(60.0, 25.0);
    h.click(30.0, 80.0);
    let before = h.state.topology.to_data();

    h.tool(EditorTool::Select);
    h.drag(Vec2::new(-10.0, -10.0), Vec2::new(100.0, 100.0), false);
    assert_eq!(h.state.selection.point_ids.len(), 3);

    for _ in 0..4 {
        h.send(AppIntent::RotateRequested { clockwise: true });
    }

    let after = h.state.topology.to_data();
    for (a, b) in before.points.iter().zip(after.points.iter()) {
        assert_relative_eq!(a.position.x, b.position.x, epsilon = 1e-3);
        assert_relative_eq!(a.position.y, b.position.y, epsilon = 1e-3);
    }
    assert_eq!(h.state.history.undo_len(), 3 + 4);
}

#[test]
fn test_properties_update_renames_point() {
    let mut h = harness_with_two_nodes();
    let id = h.point_named("n1").id;

    h.send(AppIntent::UpdatePointRequested {
        id,
        patch: topomap_editor::core::PointPatch {
            name: Some("ladestation".to_string()),
            ..Default::default()
        },
    });
    assert_eq!(h.state.topology.points[&id].name, "ladestation");

    // Namenskollision wird abgelehnt
    h.send(AppIntent::UpdatePointRequested {
        id,
        patch: topomap_editor::core::PointPatch {
            name: Some("n2".to_string()),
            ..Default::default()
        },
    });
    assert_eq!(h.state.topology.points[&id].name, "ladestation");
    assert!(h.last_warning().contains("n2"));
}
