use super::{harness_with_two_nodes, Harness};
use approx::assert_relative_eq;
use base64::Engine;
use glam::Vec2;
use std::path::PathBuf;
use topomap_editor::core::TopologyData;
use topomap_editor::{
    AppIntent, EdgeKind, EditorTool, MapFileRecord, MapInfo, PointKind, TopologyMap,
};

fn temp_map_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "topomap_editor_{}_{}.json",
        tag,
        std::process::id()
    ))
}

fn png_base64(width: u32, height: u32) -> String {
    let img = image::GrayImage::from_pixel(width, height, image::Luma([200u8]));
    let mut bytes = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut bytes),
        image::ImageFormat::Png,
    )
    .expect("PNG kodieren");
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

fn sample_topology() -> TopologyData {
    let mut topology = TopologyMap::new();
    let a = topology.add_point(PointKind::Node, Vec2::new(0.0, 0.0));
    let b = topology.add_point(PointKind::Station, Vec2::new(40.0, 30.0));
    topology
        .add_edge(a, b, EdgeKind::DoubleLine, [1.0; 4], 2.0)
        .expect("Kante");
    topology.to_data()
}

#[test]
fn test_save_and_reload_preserves_topology_and_counters() {
    let path = temp_map_path("roundtrip");
    let mut h = harness_with_two_nodes();
    h.tool(EditorTool::DrawEdge(EdgeKind::SingleLine));
    h.click(0.0, 0.0);
    h.click(100.0, 0.0);
    h.send(AppIntent::SaveAsPathSelected {
        path: path.to_string_lossy().into_owned(),
    });
    let saved = h.state.topology.to_data();

    let mut reloaded = Harness::new();
    reloaded.send(AppIntent::MapFileSelected {
        path: path.to_string_lossy().into_owned(),
    });
    let _ = std::fs::remove_file(&path);

    assert_eq!(reloaded.state.topology.to_data(), saved);
    assert!(!reloaded.state.can_undo());
    assert_eq!(
        reloaded.state.ui.current_file_path.as_deref(),
        Some(path.to_string_lossy().as_ref())
    );

    // Zähler werden aus den Namen rekonstruiert
    reloaded.tool(EditorTool::PlacePoint(PointKind::Node));
    reloaded.click(300.0, 300.0);
    reloaded.point_named("n3");
}

#[test]
fn test_loading_record_derives_map_info_from_raster() {
    let mut h = Harness::new();
    let record = MapFileRecord {
        id: "map-7".to_string(),
        name: "Lager Nord".to_string(),
        topology_data: sample_topology(),
        grayscale_data: Some(png_base64(40, 20)),
        map_info: MapInfo {
            resolution: 0.05,
            ..Default::default()
        },
        ..Default::default()
    };

    h.send(AppIntent::MapRecordReceived {
        record: Box::new(record),
    });

    let raster = h.state.raster.as_ref().expect("Raster dekodiert");
    assert_eq!((raster.width, raster.height), (40, 20));
    let info = &h.state.document.map_info;
    assert_relative_eq!(info.width, 2.0, epsilon = 1e-9);
    assert_relative_eq!(info.height, 1.0, epsilon = 1e-9);
    assert_eq!(info.scale_ratio_label(), "1 : 5");
    assert_eq!(h.state.point_count(), 2);
    assert_eq!(h.state.edge_count(), 1);
}

#[test]
fn test_broken_raster_leaves_layer_blank() {
    let mut h = Harness::new();
    let record = MapFileRecord {
        name: "Defekt".to_string(),
        topology_data: sample_topology(),
        grayscale_data: Some("data:image/png;base64,####".to_string()),
        ..Default::default()
    };

    h.send(AppIntent::MapRecordReceived {
        record: Box::new(record),
    });

    assert!(h.state.raster.is_none());
    assert_eq!(h.state.point_count(), 2);
}

#[test]
fn test_loading_resets_history_selection_and_tools() {
    let mut h = harness_with_two_nodes();
    h.tool(EditorTool::DrawEdge(EdgeKind::SingleLine));
    h.click(0.0, 0.0);
    assert!(h.state.editor.connection.is_active());
    assert!(h.state.can_undo());

    h.send(AppIntent::MapRecordReceived {
        record: Box::new(MapFileRecord {
            topology_data: sample_topology(),
            ..Default::default()
        }),
    });

    assert!(!h.state.can_undo());
    assert!(h.state.selection.is_empty());
    assert!(!h.state.editor.connection.is_active());
}

#[test]
fn test_strokes_survive_save_and_reload() {
    let path = temp_map_path("strokes");
    let mut h = Harness::new();
    h.tool(EditorTool::Brush);
    h.drag(Vec2::new(0.0, 0.0), Vec2::new(30.0, 0.0), false);
    h.tool(EditorTool::Eraser);
    h.click(15.0, 0.0);
    h.send(AppIntent::SaveAsPathSelected {
        path: path.to_string_lossy().into_owned(),
    });

    let mut reloaded = Harness::new();
    reloaded.send(AppIntent::MapFileSelected {
        path: path.to_string_lossy().into_owned(),
    });
    let _ = std::fs::remove_file(&path);

    assert_eq!(reloaded.state.strokes.committed().len(), 2);
    let scene = reloaded.controller.build_render_scene(&reloaded.state);
    assert_eq!(scene.strokes.len(), 2);
}
