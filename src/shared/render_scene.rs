//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein Renderer sie konsumiert.

use std::sync::Arc;

use glam::Vec2;

use crate::core::{AreaKind, EdgeKind, PointKind, RasterLayer, Rect, ViewTransform};

/// Ein sichtbarer Punkt
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPoint {
    pub id: u64,
    pub name: String,
    pub kind: PointKind,
    pub position: Vec2,
    /// Ausrichtung in Grad
    pub direction: f32,
    pub disabled: bool,
    pub selected: bool,
}

/// Aufgelöste Kantengeometrie
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeGeometry {
    Line { start: Vec2, end: Vec2 },
    Bezier { points: [Vec2; 4] },
}

/// Eine sichtbare Kante
#[derive(Debug, Clone, PartialEq)]
pub struct RenderEdge {
    pub id: u64,
    pub name: String,
    pub kind: EdgeKind,
    pub geometry: EdgeGeometry,
    pub color: [f32; 4],
    pub width: f32,
    pub selected: bool,
    /// Pfeilwinkel am Endpunkt (Radiant)
    pub arrow_end_angle: f32,
    /// Pfeilwinkel am Startpunkt (nur beidseitige Kanten)
    pub arrow_start_angle: Option<f32>,
    /// Ziehbare Steuerpunkte (nur selektierte Bézier-Kanten)
    pub handles: Option<[Vec2; 2]>,
}

/// Ein Bereich mit abgeleiteten Farben
#[derive(Debug, Clone, PartialEq)]
pub struct RenderArea {
    pub id: u64,
    pub name: String,
    pub kind: AreaKind,
    pub vertices: Vec<Vec2>,
    pub fill_color: [f32; 4],
    pub stroke_color: [f32; 4],
    pub selected: bool,
    pub selected_vertices: Vec<usize>,
}

/// Ein Strich in Kompositionsreihenfolge
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStroke {
    pub id: u64,
    pub points: Vec<Vec2>,
    pub radius: f32,
    pub color: [f32; 4],
    pub in_progress: bool,
}

/// Vorschau des Bereichswerkzeugs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AreaPreview {
    pub vertices: Vec<Vec2>,
    /// Schließende Kante erster ↔ letzter Eckpunkt
    pub closing_edge: Option<(Vec2, Vec2)>,
    /// Kante letzter Eckpunkt ↔ Zeiger
    pub cursor_edge: Option<(Vec2, Vec2)>,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    pub transform: ViewTransform,
    pub points: Vec<RenderPoint>,
    pub edges: Vec<RenderEdge>,
    pub areas: Vec<RenderArea>,
    pub strokes: Vec<RenderStroke>,
    /// Vorschau-Segment Start → Zeiger des Kantenwerkzeugs
    pub connection_preview: Option<(Vec2, Vec2)>,
    pub area_preview: Option<AreaPreview>,
    /// Rahmen um die aktuelle Selektion
    pub selection_box: Option<Rect>,
    /// Aufziehrechteck während der Box-Selektion
    pub rubber_band: Option<Rect>,
    pub raster: Option<Arc<RasterLayer>>,
    pub raster_layer_active: bool,
}

impl RenderScene {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.edges.is_empty() && self.areas.is_empty()
    }
}
