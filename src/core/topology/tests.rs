use super::*;
use glam::Vec2;

const WHITE: [f32; 4] = [1.0; 4];

fn two_points() -> (TopologyMap, u64, u64) {
    let mut map = TopologyMap::new();
    let a = map.add_point(PointKind::Node, Vec2::new(0.0, 0.0));
    let b = map.add_point(PointKind::Node, Vec2::new(100.0, 0.0));
    (map, a, b)
}

#[test]
fn test_point_names_follow_kind_prefix() {
    let mut map = TopologyMap::new();
    let n1 = map.add_point(PointKind::Node, Vec2::ZERO);
    let s1 = map.add_point(PointKind::Station, Vec2::ONE);
    let n2 = map.add_point(PointKind::Node, Vec2::X);
    let m1 = map.add_point(PointKind::TempStop, Vec2::Y);

    assert_eq!(map.points[&n1].name, "n1");
    assert_eq!(map.points[&s1].name, "s1");
    assert_eq!(map.points[&n2].name, "n2");
    assert_eq!(map.points[&m1].name, "m1");
}

#[test]
fn test_counters_are_never_reused_after_delete() {
    let mut map = TopologyMap::new();
    let first = map.add_point(PointKind::Node, Vec2::ZERO);
    map.delete_points(&HashSet::from([first]));
    let second = map.add_point(PointKind::Node, Vec2::ZERO);

    assert_eq!(map.points[&second].name, "n2");
}

#[test]
fn test_edge_length_is_euclidean_at_creation() {
    let (mut map, a, b) = two_points();
    let id = map
        .add_edge(a, b, EdgeKind::SingleLine, WHITE, 2.0)
        .expect("Kante erwartet");

    let edge = &map.edges[&id];
    assert_eq!(edge.name, "e1");
    assert!((edge.length - 100.0).abs() < 1e-4);

    // Länge wird bei Punktbewegung nicht nachgeführt
    map.set_point_positions(&[(b, Vec2::new(200.0, 0.0))]);
    assert!((map.edges[&id].length - 100.0).abs() < 1e-4);
}

#[test]
fn test_self_loop_is_rejected() {
    let (mut map, a, _) = two_points();
    let result = map.add_edge(a, a, EdgeKind::SingleLine, WHITE, 1.0);
    assert_eq!(result, Err(EditError::SelfLoop(a)));
    assert_eq!(map.edge_count(), 0);
}

#[test]
fn test_single_edges_are_direction_aware() {
    let (mut map, a, b) = two_points();
    map.add_edge(a, b, EdgeKind::SingleLine, WHITE, 1.0)
        .expect("a→b erwartet");

    let duplicate = map.add_edge(a, b, EdgeKind::SingleBezier, WHITE, 1.0);
    match duplicate {
        Err(EditError::DuplicateEdge { start, end, .. }) => {
            assert_eq!(start, "n1");
            assert_eq!(end, "n2");
        }
        other => panic!("Duplikat erwartet, erhalten: {other:?}"),
    }

    assert!(map.add_edge(b, a, EdgeKind::SingleLine, WHITE, 1.0).is_ok());
    assert_eq!(map.edge_count(), 2);
}

#[test]
fn test_double_edge_excludes_every_other_edge_on_pair() {
    let (mut map, a, b) = two_points();
    map.add_edge(a, b, EdgeKind::DoubleLine, WHITE, 1.0)
        .expect("Doppelkante erwartet");

    assert!(map.add_edge(b, a, EdgeKind::SingleLine, WHITE, 1.0).is_err());
    assert!(map.add_edge(a, b, EdgeKind::DoubleBezier, WHITE, 1.0).is_err());

    let (mut map, a, b) = two_points();
    map.add_edge(b, a, EdgeKind::SingleLine, WHITE, 1.0)
        .expect("b→a erwartet");
    assert!(map.add_edge(a, b, EdgeKind::DoubleLine, WHITE, 1.0).is_err());
}

#[test]
fn test_update_edge_kind_respects_duplicate_rule() {
    let (mut map, a, b) = two_points();
    let ab = map
        .add_edge(a, b, EdgeKind::SingleLine, WHITE, 1.0)
        .expect("a→b");
    map.add_edge(b, a, EdgeKind::SingleLine, WHITE, 1.0)
        .expect("b→a");

    let patch = EdgePatch {
        kind: Some(EdgeKind::DoubleLine),
        ..Default::default()
    };
    assert!(map.update_edge(ab, &patch).is_err());
    assert_eq!(map.edges[&ab].kind, EdgeKind::SingleLine);
}

#[test]
fn test_point_rename_collision_is_rejected() {
    let (mut map, a, _) = two_points();
    let patch = PointPatch {
        name: Some("n2".into()),
        ..Default::default()
    };
    assert_eq!(
        map.update_point(a, &patch),
        Err(EditError::NameTaken("n2".into()))
    );
    assert_eq!(map.points[&a].name, "n1");
}

#[test]
fn test_delete_point_leaves_dangling_edge() {
    let (mut map, a, b) = two_points();
    let e = map
        .add_edge(a, b, EdgeKind::SingleLine, WHITE, 1.0)
        .expect("Kante");

    map.delete_points(&HashSet::from([a]));

    assert_eq!(map.edge_count(), 1);
    assert_eq!(map.dangling_edges(), vec![e]);
    assert!(map.nearest_point(Vec2::ZERO).map(|m| m.point_id) == Some(b));
}

#[test]
fn test_area_requires_three_vertices() {
    let mut map = TopologyMap::new();
    let err = map.add_area(AreaKind::NoGo, vec![Vec2::ZERO, Vec2::X]);
    assert_eq!(err, Err(EditError::TooFewVertices(2)));

    let id = map
        .add_area(AreaKind::NoGo, vec![Vec2::ZERO, Vec2::X, Vec2::Y])
        .expect("Bereich");
    assert_eq!(map.areas[&id].name, "a1");
}

#[test]
fn test_path_group_rejects_edge_already_grouped() {
    let (mut map, a, b) = two_points();
    let e = map
        .add_edge(a, b, EdgeKind::DoubleLine, WHITE, 1.0)
        .expect("Kante");
    let g1 = map.add_path_group("Lager").expect("Gruppe");
    let g2 = map.add_path_group("Halle").expect("Gruppe");

    map.add_path_to_path_group(g1, e).expect("erste Zuordnung");
    assert_eq!(
        map.add_path_to_path_group(g2, e),
        Err(EditError::PathAlreadyGrouped(e))
    );
    assert_eq!(map.path_groups[&g1].paths[0].description, "n1 <--> n2");

    // Netzwerkgruppen erlauben Mehrfachzuordnung
    let n1 = map.add_network_group("Netz A", None).expect("Netz");
    let n2 = map.add_network_group("Netz B", None).expect("Netz");
    assert!(map.add_path_to_network_group(n1, e).is_ok());
    assert!(map.add_path_to_network_group(n2, e).is_ok());
}

#[test]
fn test_visibility_cascade() {
    let mut map = TopologyMap::new();
    let a = map.add_point(PointKind::Node, Vec2::ZERO);
    let b = map.add_point(PointKind::Node, Vec2::X * 10.0);
    let c = map.add_point(PointKind::Node, Vec2::Y * 10.0);
    let lonely = map.add_point(PointKind::Station, Vec2::ONE * 50.0);
    let ab = map
        .add_edge(a, b, EdgeKind::SingleLine, WHITE, 1.0)
        .expect("ab");
    let bc = map
        .add_edge(b, c, EdgeKind::SingleLine, WHITE, 1.0)
        .expect("bc");

    let visible = map.add_network_group("sichtbar", None).expect("g");
    let hidden = map.add_network_group("versteckt", None).expect("g");
    map.add_path_to_network_group(visible, ab).expect("claim");
    map.add_path_to_network_group(hidden, ab).expect("claim");
    map.add_path_to_network_group(hidden, bc).expect("claim");
    map.set_network_group_visible(hidden, false).expect("toggle");

    let vis = map.visibility();
    // Eine unsichtbare Gruppe genügt zum Ausblenden
    assert!(vis.hidden_edges.contains(&ab));
    assert!(vis.hidden_edges.contains(&bc));
    assert!(vis.hidden_points.contains(&a));
    assert!(vis.hidden_points.contains(&c));
    assert!(!vis.hidden_points.contains(&lonely));
}

#[test]
fn test_from_data_recovers_counters() {
    let (mut map, a, b) = two_points();
    map.add_edge(a, b, EdgeKind::SingleLine, WHITE, 1.0)
        .expect("Kante");
    let data = map.to_data();

    let mut restored = TopologyMap::from_data(&data);
    let next = restored.add_point(PointKind::Node, Vec2::ONE);
    assert_eq!(restored.points[&next].name, "n3");
    assert!(next > b);
    let next_edge = restored
        .add_edge(b, a, EdgeKind::SingleLine, WHITE, 1.0)
        .expect("Kante");
    assert_eq!(restored.edges[&next_edge].name, "e2");
}

#[test]
fn test_nearest_edge_uses_bezier_geometry() {
    let (mut map, a, b) = two_points();
    let e = map
        .add_edge(a, b, EdgeKind::SingleBezier, WHITE, 1.0)
        .expect("Kante");
    let patch = EdgePatch {
        cp1: Some(Some(Vec2::new(30.0, 60.0))),
        cp2: Some(Some(Vec2::new(70.0, 60.0))),
        ..Default::default()
    };
    map.update_edge(e, &patch).expect("Steuerpunkte");

    // Kurvenscheitel liegt bei y = 45, weit weg von der Sehne
    assert!(map.nearest_edge(Vec2::new(50.0, 45.0), 2.0).is_some());
    assert!(map.nearest_edge(Vec2::new(50.0, 0.0), 2.0).is_none());
}

#[test]
fn test_bezier_edges_get_default_control_points() {
    let (mut map, a, b) = two_points();
    let e = map
        .add_edge(a, b, EdgeKind::DoubleBezier, WHITE, 1.0)
        .expect("Kante");
    assert!(map.edges[&e].cp1.is_some());
    assert!(map.edges[&e].cp2.is_some());

    // Geladene Kante ohne Steuerpunkte bekommt ebenfalls Standardwerte
    let mut data = map.to_data();
    data.lines[0].cp1 = None;
    data.lines[0].cp2 = None;
    let restored = TopologyMap::from_data(&data);
    assert!(restored.edges[&e].cp1.is_some());
    assert!(restored.edge_curve(&restored.edges[&e]).is_some());
}

#[test]
fn test_from_data_drops_ids_beyond_range_and_keeps_allocating() {
    let mut data = TopologyData::default();
    data.points.push(MapPoint::new(7, "n1".to_string(), PointKind::Node, Vec2::ZERO));
    data.points.push(MapPoint::new(
        u64::MAX,
        "n2".to_string(),
        PointKind::Node,
        Vec2::X,
    ));

    let mut map = TopologyMap::from_data(&data);

    assert_eq!(map.point_count(), 1);
    assert!(map.points.contains_key(&7));
    let next = map.add_point(PointKind::Node, Vec2::Y);
    assert_eq!(next, 8);
    assert!(next <= crate::core::MAX_ENTITY_ID);
}
