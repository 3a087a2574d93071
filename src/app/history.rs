use super::SelectionState;
use crate::core::{Stroke, TopologyMap};
use std::sync::Arc;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1),
/// der eigentliche Klon der Topologie passiert erst beim nächsten
/// `Arc::make_mut()` in einem Use-Case. Namenszähler und ID-Zähler liegen in
/// der Topologie und werden damit mit wiederhergestellt.
#[derive(Clone)]
pub struct Snapshot {
    /// Topologie inklusive Bereiche, Gruppen und Zähler
    pub topology: Arc<TopologyMap>,
    /// Selektionszustand zum Zeitpunkt des Snapshots
    pub selection: SelectionState,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            topology: state.topology.clone(),
            selection: state.selection.clone(),
        }
    }

    /// Stellt den Snapshot wieder her (O(1) Arc-Zuweisung).
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.topology = self.topology;
        state.selection = self.selection;
    }
}

/// Snapshot der abgeschlossenen Striche (eigene, unabhängige History).
pub type StrokeSnapshot = Arc<Vec<Stroke>>;

/// Lineare Undo/Redo-History mit zwei Stapeln.
///
/// Neue Einträge verwerfen den Redo-Stapel; bei voller Kapazität fällt der
/// älteste Eintrag heraus.
pub struct EditHistory<T> {
    undo_stack: Vec<T>,
    redo_stack: Vec<T>,
    max_depth: usize,
}

impl<T> Default for EditHistory<T> {
    fn default() -> Self {
        Self::new_with_capacity(crate::shared::options::HISTORY_CAPACITY)
    }
}

impl<T> EditHistory<T> {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Nimmt einen vorab gebauten Snapshot auf (Zustand VOR der Mutation).
    pub fn record_snapshot(&mut self, snap: T) {
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Anzahl rückgängig machbarer Schritte (= Position in der History).
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn capacity(&self) -> usize {
        self.max_depth
    }

    /// Ändert die Kapazität; überzählige älteste Einträge fallen weg.
    pub fn set_capacity(&mut self, max_depth: usize) {
        self.max_depth = max_depth.max(1);
        let overflow = self.undo_stack.len().saturating_sub(self.max_depth);
        self.undo_stack.drain(..overflow);
        let overflow = self.redo_stack.len().saturating_sub(self.max_depth);
        self.redo_stack.drain(..overflow);
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Pop undo stack and push `current` onto redo stack; returns the snapshot to apply.
    pub fn pop_undo_with_current(&mut self, current: T) -> Option<T> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Pop redo stack and push `current` onto undo stack; returns the snapshot to apply.
    pub fn pop_redo_with_current(&mut self, current: T) -> Option<T> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }
}
