//! Unter-Zustandsautomaten der Editor-Werkzeuge.
//!
//! Die Automaten halten nur unbestätigte Eingaben; Mutationen der Topologie
//! passieren ausschließlich in den Use-Cases.

/// Bereichswerkzeug: Eckpunkte sammeln und abschließen.
mod area_draft;
/// Kantenwerkzeug mit fortlaufender Verkettung.
mod connection;
/// Zieh-Gesten mit Ausgangs-Snapshot.
mod drag;

pub use area_draft::AreaDraft;
pub use connection::{ConnectionController, ConnectionPhase, ConnectionStep};
pub use drag::{DragSession, DragTarget, EdgeControls, HandleSlot};
