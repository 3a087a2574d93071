use super::{harness_with_two_nodes, Harness};
use approx::assert_relative_eq;
use glam::Vec2;
use topomap_editor::{AppIntent, AreaKind, EdgeKind, EditorTool, EntityRef};

/// n1 (0,0), n2 (100,0), n3 (200,200); Kanten n1→n2 und n2→n3.
fn harness_with_path() -> Harness {
    let mut h = harness_with_two_nodes();
    h.click(200.0, 200.0);
    h.tool(EditorTool::DrawEdge(EdgeKind::SingleLine));
    h.click(0.0, 0.0);
    h.click(100.0, 0.0);
    h.click(200.0, 200.0);
    h.send(AppIntent::EscapePressed);
    h.tool(EditorTool::Select);
    h
}

#[test]
fn test_box_selection_selects_inside_points_and_touching_edges() {
    let mut h = harness_with_path();

    h.drag(Vec2::new(-10.0, -10.0), Vec2::new(120.0, 20.0), false);

    let sel = &h.state.selection;
    assert_eq!(sel.point_ids.len(), 2);
    assert!(sel.point_ids.contains(&h.point_named("n1").id));
    assert!(sel.point_ids.contains(&h.point_named("n2").id));
    // n1→n2 liegt innen, n2→n3 schneidet den Rahmen
    assert_eq!(sel.edge_ids.len(), 2);
    assert!(sel.selection_box.is_some());
}

#[test]
fn test_box_selection_skips_edges_entirely_outside() {
    let mut h = harness_with_path();

    h.drag(Vec2::new(190.0, 190.0), Vec2::new(210.0, 210.0), false);

    let sel = &h.state.selection;
    assert_eq!(sel.point_ids.len(), 1);
    assert!(sel.point_ids.contains(&h.point_named("n3").id));
    // n2→n3 endet im Rahmen und kreuzt damit eine Seite
    assert_eq!(sel.edge_ids.len(), 1);
}

#[test]
fn test_dragging_inside_selection_box_moves_everything() {
    let mut h = harness_with_path();
    h.drag(Vec2::new(-10.0, -10.0), Vec2::new(120.0, 20.0), false);
    let box_before = h.state.selection.selection_box.expect("Rahmen");

    // Leere Stelle im Rahmen ziehen
    h.drag(Vec2::new(50.0, 15.0), Vec2::new(60.0, 35.0), false);

    assert_eq!(h.point_named("n1").position, Vec2::new(10.0, 20.0));
    assert_eq!(h.point_named("n2").position, Vec2::new(110.0, 20.0));
    // n3 ist Endpunkt einer selektierten Kante und läuft mit
    assert_eq!(h.point_named("n3").position, Vec2::new(210.0, 220.0));
    let box_after = h.state.selection.selection_box.expect("Rahmen");
    assert_relative_eq!(box_after.min.x - box_before.min.x, 10.0, epsilon = 1e-4);
}

#[test]
fn test_ctrl_click_toggles_membership() {
    let mut h = harness_with_two_nodes();
    h.tool(EditorTool::Select);

    h.click(0.0, 0.0);
    h.click_with(100.0, 0.0, true, false);
    assert_eq!(h.state.selection.point_ids.len(), 2);

    h.click_with(0.0, 0.0, true, false);
    assert_eq!(h.state.selection.point_ids.len(), 1);
    assert!(h
        .state
        .selection
        .point_ids
        .contains(&h.point_named("n2").id));
}

#[test]
fn test_area_vertex_drag_moves_only_that_vertex() {
    let mut h = Harness::new();
    h.tool(EditorTool::DrawArea(AreaKind::WorkZone));
    h.click(0.0, 0.0);
    h.click(100.0, 0.0);
    h.click(50.0, 80.0);
    h.send(AppIntent::EnterPressed);
    h.tool(EditorTool::Select);

    h.click(50.0, 30.0);
    let area_id = *h.state.topology.areas.keys().next().expect("Bereich");
    assert!(h.state.selection.area_ids.contains(&area_id));

    h.drag(Vec2::new(100.0, 0.0), Vec2::new(120.0, -10.0), false);

    let area = &h.state.topology.areas[&area_id];
    assert_eq!(area.vertices[0], Vec2::new(0.0, 0.0));
    assert_eq!(area.vertices[1], Vec2::new(120.0, -10.0));
    assert_eq!(area.vertices[2], Vec2::new(50.0, 80.0));
}

#[test]
fn test_hidden_network_group_hides_its_paths_and_points() {
    let mut h = harness_with_path();
    h.send(AppIntent::CreateNetworkGroupRequested {
        name: "Halle".to_string(),
        area_id: None,
    });
    let group_id = *h
        .state
        .topology
        .network_groups
        .keys()
        .next()
        .expect("Gruppe");

    // Kante n1→n2 anklicken und der Gruppe zuordnen
    h.click(50.0, 0.0);
    assert_eq!(h.state.selection.edge_ids.len(), 1);
    h.send(AppIntent::AddSelectedPathsToNetworkGroup { group_id });
    h.send(AppIntent::NetworkGroupVisibilityChanged {
        group_id,
        visible: false,
    });
    h.send(AppIntent::EscapePressed);

    h.drag(Vec2::new(-10.0, -10.0), Vec2::new(110.0, 10.0), false);

    // n1 hängt nur an der ausgeblendeten Kante
    let sel = &h.state.selection;
    assert_eq!(sel.point_ids.len(), 1);
    assert!(sel.point_ids.contains(&h.point_named("n2").id));
    let scene = h.controller.build_render_scene(&h.state);
    assert_eq!(scene.points.len(), 2);
    assert_eq!(scene.edges.len(), 1);
}

#[test]
fn test_right_click_selects_and_opens_context_menu() {
    let mut h = harness_with_two_nodes();
    h.tool(EditorTool::Select);

    h.send(AppIntent::CanvasRightClicked {
        canvas_pos: Vec2::new(100.0, 0.0),
    });

    assert!(h
        .state
        .selection
        .point_ids
        .contains(&h.point_named("n2").id));
    assert!(h.state.ui.context_menu.is_some());

    h.send(AppIntent::EscapePressed);
    assert!(h.state.ui.context_menu.is_none());
}

#[test]
fn test_double_click_opens_properties_and_center_on_entity() {
    let mut h = harness_with_two_nodes();
    h.tool(EditorTool::Select);
    h.send(AppIntent::ViewportResized {
        origin: Vec2::ZERO,
        size: Vec2::new(800.0, 600.0),
    });

    h.send(AppIntent::CanvasDoubleClicked {
        canvas_pos: Vec2::new(100.0, 0.0),
    });
    let target = h.state.ui.property_target.expect("Eigenschaften offen");

    h.send(AppIntent::CenterOnEntityRequested { entity: target });
    let screen = h
        .state
        .view
        .transform
        .canvas_to_screen(Vec2::new(100.0, 0.0));
    assert_relative_eq!(screen.x, 400.0, epsilon = 1e-3);
    assert_relative_eq!(screen.y, 300.0, epsilon = 1e-3);
    assert_eq!(target, EntityRef::Point(h.point_named("n2").id));
}
