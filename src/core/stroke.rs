//! Pinsel- und Radierer-Striche auf der Rasterebene.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Art eines Strichs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StrokeKind {
    Brush,
    Eraser,
}

/// Radierer-Striche werden deckend weiß gezeichnet.
pub const ERASER_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Ein abgeschlossener (unveränderlicher) oder laufender Strich
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stroke {
    pub id: u64,
    #[serde(with = "super::serde_xy::vec")]
    pub points: Vec<Vec2>,
    #[serde(rename = "type")]
    pub kind: StrokeKind,
    /// Zeitstempel in Millisekunden (Kompositionsreihenfolge)
    pub timestamp: u64,
    pub radius: f32,
}

impl Stroke {
    /// Zeichenfarbe: Pinselfarbe bzw. deckendes Weiß beim Radierer.
    pub fn render_color(&self, brush_color: [f32; 4]) -> [f32; 4] {
        match self.kind {
            StrokeKind::Brush => brush_color,
            StrokeKind::Eraser => ERASER_COLOR,
        }
    }
}

/// Strichebene: abgeschlossene Striche plus optional ein laufender Strich.
///
/// Die abgeschlossene Liste liegt hinter einem `Arc`, damit Snapshots der
/// Strich-History O(1) bleiben.
#[derive(Debug, Clone, Default)]
pub struct StrokeLayer {
    committed: Arc<Vec<Stroke>>,
    in_progress: Option<Stroke>,
    next_id: u64,
}

impl StrokeLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Übernimmt geladene Striche (IDs werden fortgesetzt).
    pub fn from_strokes(strokes: Vec<Stroke>) -> Self {
        let strokes: Vec<Stroke> = strokes
            .into_iter()
            .filter(|s| super::map_file::accept_loaded_id("Strich", s.id))
            .collect();
        let next_id = strokes.iter().map(|s| s.id).max().unwrap_or(0);
        Self {
            committed: Arc::new(strokes),
            in_progress: None,
            next_id,
        }
    }

    pub fn committed(&self) -> &Arc<Vec<Stroke>> {
        &self.committed
    }

    /// Ersetzt die abgeschlossene Liste (Undo/Redo).
    pub fn restore(&mut self, strokes: Arc<Vec<Stroke>>) {
        self.committed = strokes;
        self.in_progress = None;
    }

    pub fn in_progress(&self) -> Option<&Stroke> {
        self.in_progress.as_ref()
    }

    pub fn is_drawing(&self) -> bool {
        self.in_progress.is_some()
    }

    /// Startet einen neuen Strich; ein laufender Strich wird verworfen.
    pub fn begin(&mut self, kind: StrokeKind, pos: Vec2, radius: f32, timestamp: u64) {
        self.next_id += 1;
        self.in_progress = Some(Stroke {
            id: self.next_id,
            points: vec![pos],
            kind,
            timestamp,
            radius,
        });
    }

    /// Hängt einen Punkt an den laufenden Strich an.
    pub fn extend(&mut self, pos: Vec2) -> bool {
        match self.in_progress.as_mut() {
            Some(stroke) => {
                if stroke.points.last() != Some(&pos) {
                    stroke.points.push(pos);
                }
                true
            }
            None => false,
        }
    }

    /// Schließt den laufenden Strich ab und gibt dessen ID zurück.
    pub fn commit(&mut self) -> Option<u64> {
        let stroke = self.in_progress.take()?;
        let id = stroke.id;
        Arc::make_mut(&mut self.committed).push(stroke);
        Some(id)
    }

    pub fn abort(&mut self) {
        self.in_progress = None;
    }

    /// Kompositionsreihenfolge: abgeschlossene Striche nach Zeitstempel,
    /// danach der laufende Strich.
    pub fn composition_order(&self) -> Vec<&Stroke> {
        let mut ordered: Vec<&Stroke> = self.committed.iter().collect();
        ordered.sort_by_key(|s| (s.timestamp, s.id));
        ordered.extend(self.in_progress.iter());
        ordered
    }
}
