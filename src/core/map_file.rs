//! Persistiertes Kartenformat (`MapFileRecord`, camelCase-JSON).

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::{Area, Edge, MapPoint, NetworkGroup, PathGroup, Stroke};

/// Höchste ID, die aus einer Kartendatei übernommen wird (ganzzahlig exakt in JSON-Zahlen).
///
/// Entitäten mit größerer ID werden beim Laden verworfen; neue IDs bleiben
/// dadurch immer unterhalb von `u64::MAX`.
pub const MAX_ENTITY_ID: u64 = (1 << 53) - 1;

/// Prüft eine geladene ID gegen [`MAX_ENTITY_ID`] und protokolliert Verwerfungen.
pub(crate) fn accept_loaded_id(kind: &str, id: u64) -> bool {
    if id > MAX_ENTITY_ID {
        log::warn!("{} mit ID {} übersteigt den ID-Bereich und wird verworfen", kind, id);
        return false;
    }
    true
}

/// Topologie-Anteil eines Kartendatensatzes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologyData {
    #[serde(default)]
    pub points: Vec<MapPoint>,
    #[serde(default)]
    pub lines: Vec<Edge>,
    #[serde(default)]
    pub areas: Vec<Area>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strokes: Option<Vec<Stroke>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub network_groups: Vec<NetworkGroup>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path_groups: Vec<PathGroup>,
}

/// Georeferenz und Ausdehnung der Karte
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapInfo {
    pub map_name: String,
    pub origin_x: f64,
    pub origin_y: f64,
    pub direction: f64,
    /// Breite in Metern (Pixel × Auflösung)
    pub width: f64,
    /// Höhe in Metern (Pixel × Auflösung)
    pub height: f64,
    /// Meter pro Pixel
    pub resolution: f64,
}

impl MapInfo {
    /// Leitet die Ausdehnung aus Rasterpixeln und Auflösung ab.
    pub fn from_raster(
        map_name: impl Into<String>,
        pixel_width: u32,
        pixel_height: u32,
        resolution: f64,
        origin: (f64, f64),
    ) -> Self {
        Self {
            map_name: map_name.into(),
            origin_x: origin.0,
            origin_y: origin.1,
            direction: 0.0,
            width: pixel_width as f64 * resolution,
            height: pixel_height as f64 * resolution,
            resolution,
        }
    }

    /// Maßstabszahl `N` in `1 : N` (= `round(resolution · 100)`).
    pub fn scale_ratio(&self) -> u64 {
        (self.resolution * 100.0).round().max(0.0) as u64
    }

    pub fn scale_ratio_label(&self) -> String {
        format!("1 : {}", self.scale_ratio())
    }
}

/// Vollständiger Kartendatensatz wie er gespeichert und ausgetauscht wird
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapFileRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub format: String,
    #[serde(default)]
    pub topology_data: TopologyData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grayscale_data: Option<String>,
    #[serde(default)]
    pub map_info: MapInfo,
}

impl MapFileRecord {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Lädt einen Datensatz aus einer JSON-Datei.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Kartendatei nicht lesbar: {}", path.display()))?;
        let record = Self::from_json(&text)
            .with_context(|| format!("Kartendatei fehlerhaft: {}", path.display()))?;
        log::info!(
            "Karte '{}' geladen: {} Punkte, {} Kanten, {} Bereiche",
            record.name,
            record.topology_data.points.len(),
            record.topology_data.lines.len(),
            record.topology_data.areas.len()
        );
        Ok(record)
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let json = self.to_json_pretty()?;
        std::fs::write(path, json)
            .with_context(|| format!("Kartendatei nicht schreibbar: {}", path.display()))?;
        log::info!("Karte gespeichert nach: {}", path.display());
        Ok(())
    }
}
