//! Repräsentiert einen Punkt (Knoten/Station) der Topologie.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Rolle eines Punkts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PointKind {
    /// Normaler Wegknoten
    #[default]
    Node,
    /// Arbeitsstation
    Station,
    /// Andockpunkt
    Dock,
    /// Ladepunkt
    Charge,
    /// Temporärer Haltepunkt
    TempStop,
}

impl PointKind {
    /// Alle Rollen in Werkzeug-Reihenfolge.
    pub const ALL: [PointKind; 5] = [
        PointKind::Node,
        PointKind::Station,
        PointKind::Dock,
        PointKind::Charge,
        PointKind::TempStop,
    ];

    /// Namens-Präfix für automatisch vergebene Anzeigenamen.
    pub fn name_prefix(self) -> &'static str {
        match self {
            PointKind::Node => "n",
            PointKind::Station => "s",
            PointKind::Dock => "d",
            PointKind::Charge => "c",
            PointKind::TempStop => "m",
        }
    }
}

/// Rollenspezifische Zusatzattribute (Aufzug, Automatiktür, Roboter-Zuordnung)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PointAttributes {
    /// Gebundener Aufzug
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevator_id: Option<String>,
    /// Gebundene Automatiktür
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_door_id: Option<String>,
    /// Zugeordnete Roboter
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub robot_ids: Vec<String>,
}

/// Ein Punkt der Topologie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapPoint {
    /// Eindeutige ID
    pub id: u64,
    /// Anzeigename (z.B. `n3`, `s12`)
    pub name: String,
    /// Rolle des Punkts
    #[serde(rename = "type")]
    pub kind: PointKind,
    /// Position in Canvas-Koordinaten
    #[serde(with = "super::serde_xy")]
    pub position: Vec2,
    /// Ausrichtung in Grad, normiert auf [-180, 180]
    #[serde(default)]
    pub direction: f32,
    /// Punkt deaktiviert
    #[serde(default)]
    pub disabled: bool,
    /// Wenden an diesem Punkt verboten
    #[serde(default)]
    pub no_u_turn: bool,
    /// Optionale Rollen-Attribute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<PointAttributes>,
}

impl MapPoint {
    /// Erstellt einen neuen Punkt mit Standardwerten
    pub fn new(id: u64, name: impl Into<String>, kind: PointKind, position: Vec2) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            position,
            direction: 0.0,
            disabled: false,
            no_u_turn: false,
            attributes: None,
        }
    }
}

/// Normiert einen Winkel in Grad auf das Intervall [-180, 180].
pub fn normalize_degrees(angle: f32) -> f32 {
    let mut a = angle % 360.0;
    if a > 180.0 {
        a -= 360.0;
    } else if a < -180.0 {
        a += 360.0;
    }
    a
}

/// Teiländerung eines Punkts (nur gesetzte Felder werden übernommen)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointPatch {
    pub name: Option<String>,
    pub kind: Option<PointKind>,
    pub position: Option<Vec2>,
    pub direction: Option<f32>,
    pub disabled: Option<bool>,
    pub no_u_turn: Option<bool>,
    pub attributes: Option<Option<PointAttributes>>,
}

impl PointPatch {
    /// Überträgt alle gesetzten Felder auf den Punkt (Name wird separat geprüft).
    pub(crate) fn apply_to(&self, point: &mut MapPoint) {
        if let Some(name) = &self.name {
            point.name = name.clone();
        }
        if let Some(kind) = self.kind {
            point.kind = kind;
        }
        if let Some(position) = self.position {
            point.position = position;
        }
        if let Some(direction) = self.direction {
            point.direction = normalize_degrees(direction);
        }
        if let Some(disabled) = self.disabled {
            point.disabled = disabled;
        }
        if let Some(no_u_turn) = self.no_u_turn {
            point.no_u_turn = no_u_turn;
        }
        if let Some(attributes) = &self.attributes {
            point.attributes = attributes.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn normalize_degrees_wraps_into_range() {
        assert_relative_eq!(normalize_degrees(190.0), -170.0);
        assert_relative_eq!(normalize_degrees(-190.0), 170.0);
        assert_relative_eq!(normalize_degrees(540.0), 180.0);
        assert_relative_eq!(normalize_degrees(45.0), 45.0);
    }

    #[test]
    fn point_serializes_position_as_object() {
        let point = MapPoint::new(7, "n7", PointKind::Station, Vec2::new(1.5, -2.0));
        let json = serde_json::to_value(&point).expect("serialisierbar");
        assert_eq!(json["position"]["x"], 1.5);
        assert_eq!(json["position"]["y"], -2.0);
        assert_eq!(json["type"], "station");
        assert_eq!(json["noUTurn"], false);
    }
}
