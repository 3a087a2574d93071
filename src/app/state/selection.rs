use crate::core::Rect;
use indexmap::IndexSet;

/// Auswahlbezogener Anwendungszustand
///
/// Punkte, Kanten und Bereiche schließen sich bei Klick-Selektion gegenseitig
/// aus; Eckpunkte dürfen zusammen mit ihrem Bereich selektiert sein.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Selektierte Punkt-IDs in Auswahlreihenfolge
    pub point_ids: IndexSet<u64>,
    /// Selektierte Kanten-IDs
    pub edge_ids: IndexSet<u64>,
    /// Selektierte Bereichs-IDs
    pub area_ids: IndexSet<u64>,
    /// Eckpunkt-Indizes des (einzigen) selektierten Bereichs
    pub vertex_indices: IndexSet<usize>,
    /// Ziehbarer Rahmen nach Box-Selektion
    pub selection_box: Option<Rect>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.point_ids.is_empty() && self.edge_ids.is_empty() && self.area_ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.point_ids.clear();
        self.edge_ids.clear();
        self.area_ids.clear();
        self.vertex_indices.clear();
        self.selection_box = None;
    }

    /// Selektiert einen Punkt. Additiv schaltet die Mitgliedschaft um.
    pub fn pick_point(&mut self, id: u64, additive: bool) {
        self.edge_ids.clear();
        self.area_ids.clear();
        self.vertex_indices.clear();
        self.selection_box = None;
        if additive {
            if !self.point_ids.shift_remove(&id) {
                self.point_ids.insert(id);
            }
        } else {
            self.point_ids.clear();
            self.point_ids.insert(id);
        }
    }

    /// Selektiert eine Kante. Additiv schaltet die Mitgliedschaft um.
    pub fn pick_edge(&mut self, id: u64, additive: bool) {
        self.point_ids.clear();
        self.area_ids.clear();
        self.vertex_indices.clear();
        self.selection_box = None;
        if additive {
            if !self.edge_ids.shift_remove(&id) {
                self.edge_ids.insert(id);
            }
        } else {
            self.edge_ids.clear();
            self.edge_ids.insert(id);
        }
    }

    /// Selektiert einen Bereich. Additiv schaltet die Mitgliedschaft um.
    pub fn pick_area(&mut self, id: u64, additive: bool) {
        self.point_ids.clear();
        self.edge_ids.clear();
        self.vertex_indices.clear();
        self.selection_box = None;
        if additive {
            if !self.area_ids.shift_remove(&id) {
                self.area_ids.insert(id);
            }
        } else {
            self.area_ids.clear();
            self.area_ids.insert(id);
        }
    }

    /// Selektiert einen Eckpunkt; der Bereich wird dabei alleiniger Bereich.
    pub fn pick_vertex(&mut self, area_id: u64, index: usize, additive: bool) {
        let same_area = self.area_ids.len() == 1 && self.area_ids.contains(&area_id);
        if !same_area {
            self.pick_area(area_id, false);
        }
        if additive && same_area {
            if !self.vertex_indices.shift_remove(&index) {
                self.vertex_indices.insert(index);
            }
        } else {
            self.vertex_indices.clear();
            self.vertex_indices.insert(index);
        }
    }

    /// Der Bereich, dessen Eckpunkte gerade bearbeitet werden können.
    pub fn single_area(&self) -> Option<u64> {
        if self.area_ids.len() == 1 {
            self.area_ids.first().copied()
        } else {
            None
        }
    }

    pub fn total_count(&self) -> usize {
        self.point_ids.len() + self.edge_ids.len() + self.area_ids.len()
    }
}
