//! Zieh-Gesten: Startreferenz plus Ausgangspositionen der betroffenen Entitäten.
//!
//! Jede Zeigerbewegung wendet das kumulierte Delta auf die Ausgangswerte an,
//! nie schrittweise auf die Live-Positionen.

use glam::Vec2;

use crate::app::history::Snapshot;
use crate::core::Rect;

/// Welcher der beiden Steuerpunkte einer Bézier-Kante
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleSlot {
    First,
    Second,
}

/// Ziel einer Zieh-Geste
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    /// Selektierte Punkte, Endpunkte selektierter Kanten und selektierte Bereiche
    Selection,
    /// Selektierte Eckpunkte eines Bereichs
    AreaVertices { area_id: u64 },
    /// Ein Steuerpunkt einer Bézier-Kante
    BezierHandle { edge_id: u64, slot: HandleSlot },
    /// Aufziehrechteck für Box-Selektion
    BoxSelect { additive: bool },
}

/// Ausgangswerte der Steuerpunkte einer betroffenen Kante
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeControls {
    pub edge_id: u64,
    pub start_id: u64,
    pub end_id: u64,
    pub cp1: Option<Vec2>,
    pub cp2: Option<Vec2>,
}

/// Laufende Zieh-Geste
#[derive(Clone)]
pub struct DragSession {
    pub target: DragTarget,
    /// Canvas-Position beim Drücken
    pub start_canvas: Vec2,
    /// Letzte Canvas-Position
    pub current_canvas: Vec2,
    /// Ausgangspositionen der bewegten Punkte
    pub initial_points: Vec<(u64, Vec2)>,
    /// Ausgangs-Steuerpunkte aller Kanten, deren Geometrie mitläuft
    pub initial_edges: Vec<EdgeControls>,
    /// Ausgangs-Eckpunkte der bewegten Bereiche
    pub initial_areas: Vec<(u64, Vec<Vec2>)>,
    /// Selektionsrahmen beim Drücken
    pub initial_box: Option<Rect>,
    /// Zustand vor der Geste (wird beim Loslassen einmalig aufgezeichnet)
    pub snapshot: Snapshot,
}

impl DragSession {
    pub fn new(target: DragTarget, start_canvas: Vec2, snapshot: Snapshot) -> Self {
        Self {
            target,
            start_canvas,
            current_canvas: start_canvas,
            initial_points: Vec::new(),
            initial_edges: Vec::new(),
            initial_areas: Vec::new(),
            initial_box: None,
            snapshot,
        }
    }

    /// Kumuliertes Delta seit dem Drücken.
    pub fn delta(&self) -> Vec2 {
        self.current_canvas - self.start_canvas
    }

    /// Ob die Geste gegenüber dem Drücken eine Änderung hinterlässt.
    pub fn has_effect(&self) -> bool {
        self.delta() != Vec2::ZERO
    }

    /// Aufziehrechteck (nur bei Box-Selektion).
    pub fn rubber_band(&self) -> Option<Rect> {
        match self.target {
            DragTarget::BoxSelect { .. } => {
                Some(Rect::from_corners(self.start_canvas, self.current_canvas))
            }
            _ => None,
        }
    }

    /// Ausgangsposition eines bewegten Punkts.
    pub fn initial_position(&self, point_id: u64) -> Option<Vec2> {
        self.initial_points
            .iter()
            .find(|(id, _)| *id == point_id)
            .map(|(_, pos)| *pos)
    }
}
