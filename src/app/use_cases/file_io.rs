//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use crate::app::state::{MapDocument, NotificationLevel};
use crate::app::AppState;
use crate::core::{MapFileRecord, MapInfo, RasterLayer, Rect, StrokeLayer, TopologyMap};
use std::path::Path;
use std::sync::Arc;

/// Lädt eine Kartendatei in den AppState und merkt sich den Pfad.
pub fn load_map_file(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let record = MapFileRecord::load_from_file(Path::new(&path))?;
    apply_record(state, record);
    state.ui.current_file_path = Some(path);
    Ok(())
}

/// Übernimmt einen Kartendatensatz als neues Dokument.
///
/// Zähler werden aus den Namen rekonstruiert, History und offene
/// Werkzeugeingaben verworfen. Ein nicht dekodierbares Raster lässt die
/// Rasterebene leer.
pub fn apply_record(state: &mut AppState, record: MapFileRecord) {
    let topology = TopologyMap::from_data(&record.topology_data);
    let strokes = record.topology_data.strokes.clone().unwrap_or_default();
    let raster = record
        .grayscale_data
        .as_deref()
        .and_then(RasterLayer::decode_or_blank);

    let mut map_info = record.map_info;
    if let Some(layer) = &raster {
        if map_info.width <= 0.0 && map_info.resolution > 0.0 {
            map_info = MapInfo::from_raster(
                map_info.map_name.clone(),
                layer.width,
                layer.height,
                map_info.resolution,
                (map_info.origin_x, map_info.origin_y),
            );
        }
    }

    log::info!(
        "Karte '{}' übernommen: {} Punkte, {} Kanten, {} Bereiche, {} Striche (Maßstab {})",
        record.name,
        topology.point_count(),
        topology.edge_count(),
        topology.area_count(),
        strokes.len(),
        map_info.scale_ratio_label()
    );
    let dangling = topology.dangling_edges().len();
    if dangling > 0 {
        log::warn!("{} Kanten verweisen auf fehlende Punkte", dangling);
    }

    state.topology = Arc::new(topology);
    state.strokes = StrokeLayer::from_strokes(strokes);
    state.raster = raster.map(Arc::new);
    state.document = MapDocument {
        id: record.id,
        name: record.name,
        thumbnail: record.thumbnail,
        status: record.status,
        format: record.format,
        grayscale_data: record.grayscale_data,
        map_info,
    };
    state.selection.clear();
    state.editor.connection.cancel();
    state.editor.area_draft.cancel();
    state.editor.drag = None;
    state.history.clear();
    state.stroke_history.clear();

    center_on_content(state);
    let message = format!("Karte '{}' geladen", state.document.name);
    state.ui.notify(NotificationLevel::Info, message);
}

/// Zentriert die Ansicht auf die Bounding-Box aller Punkte.
fn center_on_content(state: &mut AppState) {
    let bounds = Rect::bounding(state.topology.points.values().map(|p| p.position));
    if let Some(bounds) = bounds {
        super::camera::center_on(state, bounds.center());
    }
}

/// Baut den speicherbaren Datensatz aus dem aktuellen Zustand.
pub fn build_record(state: &AppState) -> MapFileRecord {
    let mut topology_data = state.topology.to_data();
    let strokes = state.strokes.committed();
    if !strokes.is_empty() {
        topology_data.strokes = Some(strokes.as_ref().clone());
    }
    let doc = &state.document;
    MapFileRecord {
        id: doc.id.clone(),
        name: doc.name.clone(),
        thumbnail: doc.thumbnail.clone(),
        status: doc.status.clone(),
        format: doc.format.clone(),
        topology_data,
        grayscale_data: doc.grayscale_data.clone(),
        map_info: doc.map_info.clone(),
    }
}

/// Speichert unter `path` oder, falls `None`, unter dem zuletzt genutzten Pfad.
pub fn save_map_file(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    let Some(path) = path.or_else(|| state.ui.current_file_path.clone()) else {
        anyhow::bail!("Kein Speicherpfad bekannt");
    };
    build_record(state).save_to_file(Path::new(&path))?;
    state.ui.current_file_path = Some(path.clone());
    state
        .ui
        .notify(NotificationLevel::Info, format!("Gespeichert: {path}"));
    Ok(())
}
