//! Zustandsautomat des Kantenwerkzeugs mit fortlaufender Verkettung.

use glam::Vec2;

use crate::core::TopologyMap;

/// Phase des Kantenwerkzeugs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionPhase {
    /// Kein Startpunkt gewählt
    #[default]
    Idle,
    /// Startpunkt gewählt, wartet auf den Endpunkt
    AwaitingNext { start: u64 },
    /// Mindestens eine Kante erzeugt; letzter Endpunkt ist neuer Start
    Chaining { start: u64 },
}

/// Ergebnis eines Punkt-Klicks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStep {
    /// Punkt wurde neuer Startpunkt
    Started(u64),
    /// Kante `start → end` soll erzeugt werden
    Connect { start: u64, end: u64 },
    /// Klick auf den Startpunkt selbst: wird ignoriert
    Ignored,
}

/// Kantenwerkzeug: hält Startpunkt und Vorschau-Zeiger.
#[derive(Debug, Clone, Default)]
pub struct ConnectionController {
    phase: ConnectionPhase,
    pointer: Option<Vec2>,
}

impl ConnectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ConnectionPhase {
        self.phase
    }

    /// Aktueller Startpunkt (AwaitingNext oder Chaining).
    pub fn start(&self) -> Option<u64> {
        match self.phase {
            ConnectionPhase::Idle => None,
            ConnectionPhase::AwaitingNext { start } | ConnectionPhase::Chaining { start } => {
                Some(start)
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase != ConnectionPhase::Idle
    }

    /// Verarbeitet einen Klick auf einen (existierenden oder neu erzeugten) Punkt.
    pub fn click_point(&mut self, point_id: u64) -> ConnectionStep {
        match self.start() {
            None => {
                self.phase = ConnectionPhase::AwaitingNext { start: point_id };
                ConnectionStep::Started(point_id)
            }
            Some(start) if start == point_id => ConnectionStep::Ignored,
            Some(start) => ConnectionStep::Connect {
                start,
                end: point_id,
            },
        }
    }

    /// Kante wurde erzeugt: Endpunkt wird Start der nächsten Kante.
    pub fn edge_created(&mut self, end: u64) {
        self.phase = ConnectionPhase::Chaining { start: end };
    }

    /// Startet neu bei einem Punkt (z.B. wenn der alte Start nicht mehr existiert).
    pub fn restart(&mut self, point_id: u64) {
        self.phase = ConnectionPhase::AwaitingNext { start: point_id };
    }

    /// Verwirft die offene Verbindung; erzeugte Kanten bleiben bestehen.
    pub fn cancel(&mut self) {
        self.phase = ConnectionPhase::Idle;
        self.pointer = None;
    }

    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.pointer = Some(pos);
    }

    /// Vorschau-Segment Startpunkt → Zeiger.
    pub fn preview(&self, topology: &TopologyMap) -> Option<(Vec2, Vec2)> {
        let start = topology.point_position(self.start()?)?;
        Some((start, self.pointer?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_click_starts_second_connects() {
        let mut ctrl = ConnectionController::new();
        assert_eq!(ctrl.click_point(1), ConnectionStep::Started(1));
        assert_eq!(
            ctrl.click_point(2),
            ConnectionStep::Connect { start: 1, end: 2 }
        );
        ctrl.edge_created(2);
        assert_eq!(ctrl.phase(), ConnectionPhase::Chaining { start: 2 });
        assert_eq!(
            ctrl.click_point(3),
            ConnectionStep::Connect { start: 2, end: 3 }
        );
    }

    #[test]
    fn clicking_start_again_is_ignored() {
        let mut ctrl = ConnectionController::new();
        ctrl.click_point(4);
        assert_eq!(ctrl.click_point(4), ConnectionStep::Ignored);
        assert_eq!(ctrl.start(), Some(4));
    }

    #[test]
    fn rejected_connection_keeps_start() {
        let mut ctrl = ConnectionController::new();
        ctrl.click_point(1);
        let _ = ctrl.click_point(2);
        // kein edge_created → Start bleibt
        assert_eq!(ctrl.phase(), ConnectionPhase::AwaitingNext { start: 1 });
    }

    #[test]
    fn cancel_returns_to_idle_and_drops_preview() {
        let mut ctrl = ConnectionController::new();
        ctrl.click_point(1);
        ctrl.pointer_moved(Vec2::new(3.0, 4.0));
        ctrl.cancel();
        assert!(!ctrl.is_active());
        assert!(ctrl.preview(&TopologyMap::new()).is_none());
    }
}
