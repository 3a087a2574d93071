//! Zustandsautomat des Bereichswerkzeugs (Eckpunkte sammeln, abschließen, abbrechen).

use glam::Vec2;

use crate::core::Area;
use crate::shared::AreaPreview;

/// Gesammelte Eckpunkte eines entstehenden Bereichs.
#[derive(Debug, Clone, Default)]
pub struct AreaDraft {
    vertices: Vec<Vec2>,
    pointer: Option<Vec2>,
}

impl AreaDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collecting-Phase: mindestens ein Eckpunkt gesetzt.
    pub fn is_collecting(&self) -> bool {
        !self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Hängt einen Eckpunkt an. Ein Doppelklick liefert dieselbe Position
    /// zweimal; ein identischer Folgepunkt wird daher übersprungen.
    pub fn push_vertex(&mut self, pos: Vec2) -> bool {
        if self.vertices.last() == Some(&pos) {
            return false;
        }
        self.vertices.push(pos);
        true
    }

    pub fn can_complete(&self) -> bool {
        self.vertices.len() >= Area::MIN_VERTICES
    }

    /// Übernimmt die Eckpunkte und setzt den Entwurf zurück.
    pub fn take_vertices(&mut self) -> Vec<Vec2> {
        self.pointer = None;
        std::mem::take(&mut self.vertices)
    }

    pub fn cancel(&mut self) {
        self.vertices.clear();
        self.pointer = None;
    }

    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.pointer = Some(pos);
    }

    /// Schließende Kante und Zeiger-Kante für die Vorschau.
    pub fn preview(&self) -> Option<AreaPreview> {
        let first = *self.vertices.first()?;
        let last = *self.vertices.last()?;
        Some(AreaPreview {
            vertices: self.vertices.clone(),
            closing_edge: (self.vertices.len() >= 2).then_some((first, last)),
            cursor_edge: self.pointer.map(|p| (last, p)),
        })
    }
}
