//! Polygonale Funktionsbereiche (Arbeits-, Sperr-, Geschwindigkeitszonen).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{self, Rect};

/// Art eines Bereichs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AreaKind {
    /// Arbeitsbereich
    #[default]
    WorkZone,
    /// Sperrzone
    NoGo,
    /// Geschwindigkeitszone
    SpeedZone,
    /// Zone mit eigenem Netzwerk und Roboterzuordnung
    MultiNetwork,
}

/// Farbschema für Bereiche inklusive Geschwindigkeitsbändern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AreaColorScheme {
    pub work_zone: [f32; 4],
    pub no_go: [f32; 4],
    pub multi_network: [f32; 4],
    pub speed_slow: [f32; 4],
    pub speed_medium: [f32; 4],
    pub speed_fast: [f32; 4],
    /// Grenze langsam → mittel (m/s)
    pub speed_band_slow: f32,
    /// Grenze mittel → schnell (m/s)
    pub speed_band_fast: f32,
    /// Deckkraft der Füllung relativ zur Randfarbe
    pub fill_alpha: f32,
}

impl Default for AreaColorScheme {
    fn default() -> Self {
        Self {
            work_zone: [0.25, 0.55, 0.95, 1.0],
            no_go: [0.9, 0.2, 0.2, 1.0],
            multi_network: [0.6, 0.35, 0.85, 1.0],
            speed_slow: [0.95, 0.75, 0.1, 1.0],
            speed_medium: [0.95, 0.5, 0.1, 1.0],
            speed_fast: [0.2, 0.75, 0.3, 1.0],
            speed_band_slow: 0.5,
            speed_band_fast: 1.0,
            fill_alpha: 0.3,
        }
    }
}

impl AreaColorScheme {
    /// Bandfarbe für eine Geschwindigkeitszone; ohne Angabe gilt das schnelle Band.
    pub fn speed_color(&self, speed: Option<f32>) -> [f32; 4] {
        match speed {
            Some(v) if v < self.speed_band_slow => self.speed_slow,
            Some(v) if v < self.speed_band_fast => self.speed_medium,
            _ => self.speed_fast,
        }
    }
}

/// Ein polygonaler Bereich
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub id: u64,
    /// Anzeigename (`a<n>`)
    pub name: String,
    /// Geordnete Eckpunkte, implizit geschlossen
    #[serde(with = "super::serde_xy::vec")]
    pub vertices: Vec<Vec2>,
    #[serde(rename = "type")]
    pub kind: AreaKind,
    /// Höchstgeschwindigkeit (nur Geschwindigkeitszonen)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f32>,
    /// Zugeordnete Netzwerkgruppe (nur Multi-Netzwerk)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_group_id: Option<u64>,
    /// Zugeordneter Roboter (nur Multi-Netzwerk)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub robot_id: Option<String>,
}

impl Area {
    /// Mindestanzahl an Eckpunkten.
    pub const MIN_VERTICES: usize = 3;

    pub fn new(id: u64, name: impl Into<String>, kind: AreaKind, vertices: Vec<Vec2>) -> Self {
        Self {
            id,
            name: name.into(),
            vertices,
            kind,
            speed: None,
            network_group_id: None,
            robot_id: None,
        }
    }

    /// Randfarbe, abgeleitet aus Art und ggf. Geschwindigkeitsband.
    pub fn stroke_color(&self, scheme: &AreaColorScheme) -> [f32; 4] {
        match self.kind {
            AreaKind::WorkZone => scheme.work_zone,
            AreaKind::NoGo => scheme.no_go,
            AreaKind::MultiNetwork => scheme.multi_network,
            AreaKind::SpeedZone => scheme.speed_color(self.speed),
        }
    }

    /// Füllfarbe (Randfarbe mit reduzierter Deckkraft).
    pub fn fill_color(&self, scheme: &AreaColorScheme) -> [f32; 4] {
        let [r, g, b, a] = self.stroke_color(scheme);
        [r, g, b, a * scheme.fill_alpha]
    }

    pub fn contains(&self, p: Vec2) -> bool {
        geometry::point_in_polygon(p, &self.vertices)
    }

    pub fn bounds(&self) -> Option<Rect> {
        Rect::bounding(self.vertices.iter().copied())
    }
}

/// Teiländerung eines Bereichs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AreaPatch {
    pub name: Option<String>,
    pub kind: Option<AreaKind>,
    pub vertices: Option<Vec<Vec2>>,
    pub speed: Option<Option<f32>>,
    pub network_group_id: Option<Option<u64>>,
    pub robot_id: Option<Option<String>>,
}

impl AreaPatch {
    pub(crate) fn apply_to(&self, area: &mut Area) {
        if let Some(name) = &self.name {
            area.name = name.clone();
        }
        if let Some(kind) = self.kind {
            area.kind = kind;
        }
        if let Some(vertices) = &self.vertices {
            area.vertices = vertices.clone();
        }
        if let Some(speed) = self.speed {
            area.speed = speed;
        }
        if let Some(group) = self.network_group_id {
            area.network_group_id = group;
        }
        if let Some(robot) = &self.robot_id {
            area.robot_id = robot.clone();
        }
        // Zonen-spezifische Felder nur dort behalten, wo sie Sinn ergeben
        if area.kind != AreaKind::SpeedZone {
            area.speed = None;
        }
        if area.kind != AreaKind::MultiNetwork {
            area.network_group_id = None;
            area.robot_id = None;
        }
    }
}
