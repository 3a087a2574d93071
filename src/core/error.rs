//! Typisierte Ablehnungsgründe für Editier-Operationen.
//!
//! Alle Fehler sind "weich": die Anfrage wird abgelehnt, der Zustand bleibt
//! unverändert und die Meldung landet als Benachrichtigung in der UI.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    #[error("Kante {start} {arrow} {end} existiert bereits")]
    DuplicateEdge {
        start: String,
        end: String,
        arrow: &'static str,
    },
    #[error("Start- und Endpunkt sind identisch (Punkt {0})")]
    SelfLoop(u64),
    #[error("Punkt {0} existiert nicht")]
    UnknownPoint(u64),
    #[error("Kante {0} existiert nicht")]
    UnknownEdge(u64),
    #[error("Bereich {0} existiert nicht")]
    UnknownArea(u64),
    #[error("Gruppe {0} existiert nicht")]
    UnknownGroup(u64),
    #[error("Ein Bereich benötigt mindestens 3 Eckpunkte (aktuell {0})")]
    TooFewVertices(usize),
    #[error("Name '{0}' ist bereits vergeben")]
    NameTaken(String),
    #[error("Name darf nicht leer sein")]
    EmptyName,
    #[error("Pfad {0} ist bereits einer Pfadgruppe zugeordnet")]
    PathAlreadyGrouped(u64),
}
