use crate::app::tools::{AreaDraft, ConnectionController, DragSession};
use crate::core::{Area, AreaKind, Edge, EdgeKind, MapPoint, PointKind};
use glam::Vec2;

/// Aktives Editor-Werkzeug
///
/// Jede Variante trägt nur die Daten, die das Werkzeug braucht.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorTool {
    /// Standard: Entitäten selektieren und verschieben
    #[default]
    Select,
    /// Punkte einer Rolle platzieren
    PlacePoint(PointKind),
    /// Kanten einer Art zeichnen (mit Verkettung)
    DrawEdge(EdgeKind),
    /// Bereiche einer Art zeichnen
    DrawArea(AreaKind),
    /// Pinsel auf der Rasterebene
    Brush,
    /// Radierer auf der Rasterebene
    Eraser,
}

impl EditorTool {
    /// Werkzeuge, die auf der Rasterebene arbeiten.
    pub fn is_raster(self) -> bool {
        matches!(self, EditorTool::Brush | EditorTool::Eraser)
    }

    pub fn edge_kind(self) -> Option<EdgeKind> {
        match self {
            EditorTool::DrawEdge(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn area_kind(self) -> Option<AreaKind> {
        match self {
            EditorTool::DrawArea(kind) => Some(kind),
            _ => None,
        }
    }
}

/// Aktive Bearbeitungsebene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveLayer {
    #[default]
    Topology,
    Raster,
}

/// Kopierte Entitäten für Einfügen
#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    pub points: Vec<MapPoint>,
    pub edges: Vec<Edge>,
    pub areas: Vec<Area>,
    /// Schwerpunkt der kopierten Positionen
    pub centroid: Vec2,
}

impl Clipboard {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.areas.is_empty()
    }
}

/// Zustand des aktuellen Editor-Werkzeugs
#[derive(Default)]
pub struct EditorToolState {
    /// Aktives Werkzeug
    pub active_tool: EditorTool,
    /// Aktive Ebene (steuert B/E-Tasten und Undo-Ziel)
    pub active_layer: ActiveLayer,
    /// Kantenwerkzeug: Start/Verkettung
    pub connection: ConnectionController,
    /// Bereichswerkzeug: gesammelte Eckpunkte
    pub area_draft: AreaDraft,
    /// Laufende Zieh-Geste
    pub drag: Option<DragSession>,
    /// Letzte Klickposition auf dem Canvas (Einfüge-Anker)
    pub last_click_canvas: Option<Vec2>,
    /// Zwischenablage
    pub clipboard: Option<Clipboard>,
}

impl EditorToolState {
    /// Erstellt den Standard-Werkzeugzustand (Select-Tool aktiv).
    pub fn new() -> Self {
        Self::default()
    }

    /// Ob ein Werkzeug gerade unbestätigte Eingaben hält.
    pub fn has_pending_input(&self) -> bool {
        self.connection.is_active() || self.area_draft.is_collecting() || self.drag.is_some()
    }
}
