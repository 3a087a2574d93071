//! Netzwerk- und Pfadgruppen.
//!
//! Gruppen halten Stubs (Momentaufnahmen von ID, Name, Beschreibung zum
//! Einfügezeitpunkt), keine Referenzen auf die Entitäten selbst.

use serde::{Deserialize, Serialize};

use super::{Edge, MapPoint};

/// Momentaufnahme eines Punkts in einer Gruppe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStub {
    pub id: u64,
    pub name: String,
}

impl From<&MapPoint> for NodeStub {
    fn from(point: &MapPoint) -> Self {
        Self {
            id: point.id,
            name: point.name.clone(),
        }
    }
}

/// Momentaufnahme einer Kante in einer Gruppe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStub {
    pub id: u64,
    pub name: String,
    /// `"<start> --> <end>"` bzw. `"<start> <--> <end>"`
    pub description: String,
}

impl PathStub {
    pub fn from_edge(edge: &Edge, start_name: &str, end_name: &str) -> Self {
        Self {
            id: edge.id,
            name: edge.name.clone(),
            description: format!("{} {} {}", start_name, edge.kind.arrow_glyph(), end_name),
        }
    }
}

/// Netzwerkgruppe mit Sichtbarkeit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkGroup {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_id: Option<u64>,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub nodes: Vec<NodeStub>,
    #[serde(default)]
    pub paths: Vec<PathStub>,
}

fn default_visible() -> bool {
    true
}

impl NetworkGroup {
    pub fn new(id: u64, name: impl Into<String>, area_id: Option<u64>) -> Self {
        Self {
            id,
            name: name.into(),
            area_id,
            visible: true,
            nodes: Vec::new(),
            paths: Vec::new(),
        }
    }

    pub fn claims_edge(&self, edge_id: u64) -> bool {
        self.paths.iter().any(|p| p.id == edge_id)
    }
}

/// Rein organisatorische Pfadgruppe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathGroup {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub paths: Vec<PathStub>,
}

impl PathGroup {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            paths: Vec::new(),
        }
    }

    pub fn contains_edge(&self, edge_id: u64) -> bool {
        self.paths.iter().any(|p| p.id == edge_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EdgeKind;
    use glam::Vec2;

    #[test]
    fn path_stub_describes_direction() {
        let mut edge = Edge::new(
            5,
            "e5",
            1,
            2,
            EdgeKind::SingleLine,
            Vec2::ZERO,
            Vec2::X,
            [1.0; 4],
            1.0,
        );
        assert_eq!(PathStub::from_edge(&edge, "n1", "n2").description, "n1 --> n2");

        edge.kind = EdgeKind::DoubleBezier;
        assert_eq!(PathStub::from_edge(&edge, "n1", "n2").description, "n1 <--> n2");
    }
}
