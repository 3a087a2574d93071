//! Repräsentiert eine Kante (Pfad) zwischen zwei Punkten.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Art der Kante
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EdgeKind {
    /// Gerade Einbahn-Kante
    #[default]
    SingleLine,
    /// Gerade Kante in beide Richtungen
    DoubleLine,
    /// Kubische Bézier-Kante, einseitig
    SingleBezier,
    /// Kubische Bézier-Kante, beidseitig
    DoubleBezier,
}

impl EdgeKind {
    /// Alle Kanten-Arten in Werkzeug-Reihenfolge.
    pub const ALL: [EdgeKind; 4] = [
        EdgeKind::SingleLine,
        EdgeKind::DoubleLine,
        EdgeKind::SingleBezier,
        EdgeKind::DoubleBezier,
    ];

    /// Befahrbar in beide Richtungen?
    pub fn is_bidirectional(self) -> bool {
        matches!(self, EdgeKind::DoubleLine | EdgeKind::DoubleBezier)
    }

    /// Gekrümmte Kante mit Steuerpunkten?
    pub fn is_bezier(self) -> bool {
        matches!(self, EdgeKind::SingleBezier | EdgeKind::DoubleBezier)
    }

    /// Pfeil-Glyphe für Beschreibungen (`-->` bzw. `<-->`).
    pub fn arrow_glyph(self) -> &'static str {
        if self.is_bidirectional() {
            "<-->"
        } else {
            "-->"
        }
    }
}

/// Optionale Fahrprofil-Attribute einer Kante
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MotionProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_expansion_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverse: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approach_angle: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_linear_velocity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_angular_velocity: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_linear_acceleration: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_angular_acceleration: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_linear_deceleration: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_distance_precision: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_angle_precision: Option<f32>,
}

/// Eine Kante zwischen zwei Punkten
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// Eindeutige ID
    pub id: u64,
    /// Anzeigename (`e<n>`)
    pub name: String,
    /// Start-Punkt-ID (Referenz, kein Besitz)
    pub start_point_id: u64,
    /// End-Punkt-ID (Referenz, kein Besitz)
    pub end_point_id: u64,
    /// Art der Kante
    #[serde(rename = "type")]
    pub kind: EdgeKind,
    /// Darstellungsfarbe (RGBA)
    pub color: [f32; 4],
    /// Linienstärke
    pub width: f32,
    /// Erster Bézier-Steuerpunkt
    #[serde(default, with = "super::serde_xy::option", skip_serializing_if = "Option::is_none")]
    pub cp1: Option<Vec2>,
    /// Zweiter Bézier-Steuerpunkt
    #[serde(default, with = "super::serde_xy::option", skip_serializing_if = "Option::is_none")]
    pub cp2: Option<Vec2>,
    /// Euklidische Länge zum Erstellzeitpunkt (wird nicht automatisch nachgeführt)
    #[serde(default)]
    pub length: f32,
    /// Fahrprofil
    #[serde(flatten)]
    pub profile: MotionProfile,
}

impl Edge {
    /// Erstellt eine neue Kante; die Länge wird aus den Endpunkt-Positionen berechnet.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u64,
        name: impl Into<String>,
        start_point_id: u64,
        end_point_id: u64,
        kind: EdgeKind,
        start_pos: Vec2,
        end_pos: Vec2,
        color: [f32; 4],
        width: f32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            start_point_id,
            end_point_id,
            kind,
            color,
            width,
            cp1: None,
            cp2: None,
            length: start_pos.distance(end_pos),
            profile: MotionProfile::default(),
        }
    }

    /// Verbindet diese Kante die beiden Punkte (richtungsunabhängig)?
    pub fn connects(&self, a: u64, b: u64) -> bool {
        (self.start_point_id == a && self.end_point_id == b)
            || (self.start_point_id == b && self.end_point_id == a)
    }

    /// Referenziert diese Kante den Punkt als Start oder Ende?
    pub fn touches(&self, point_id: u64) -> bool {
        self.start_point_id == point_id || self.end_point_id == point_id
    }

    /// Berechnet die Länge neu (Aufrufer entscheiden, wann das nötig ist).
    pub fn recompute_length(&mut self, start_pos: Vec2, end_pos: Vec2) {
        self.length = start_pos.distance(end_pos);
    }

    /// Ergänzt fehlende Steuerpunkte einer Bézier-Kante mit Standardwerten.
    pub fn ensure_control_points(&mut self, start_pos: Vec2, end_pos: Vec2, offset_px: f32, scale: f32) {
        if !self.kind.is_bezier() || (self.cp1.is_some() && self.cp2.is_some()) {
            return;
        }
        let (cp1, cp2) = super::bezier::default_control_points(start_pos, end_pos, offset_px, scale);
        self.cp1.get_or_insert(cp1);
        self.cp2.get_or_insert(cp2);
    }
}

/// Teiländerung einer Kante
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgePatch {
    pub name: Option<String>,
    pub kind: Option<EdgeKind>,
    pub color: Option<[f32; 4]>,
    pub width: Option<f32>,
    pub cp1: Option<Option<Vec2>>,
    pub cp2: Option<Option<Vec2>>,
    pub profile: Option<MotionProfile>,
}

impl EdgePatch {
    pub(crate) fn apply_to(&self, edge: &mut Edge) {
        if let Some(name) = &self.name {
            edge.name = name.clone();
        }
        if let Some(kind) = self.kind {
            edge.kind = kind;
        }
        if let Some(color) = self.color {
            edge.color = color;
        }
        if let Some(width) = self.width {
            edge.width = width;
        }
        if let Some(cp1) = self.cp1 {
            edge.cp1 = cp1;
        }
        if let Some(cp2) = self.cp2 {
            edge.cp2 = cp2;
        }
        if let Some(profile) = &self.profile {
            edge.profile = profile.clone();
        }
    }
}
