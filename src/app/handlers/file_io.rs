//! Handler für Datei-Operationen (Öffnen, Übernehmen, Speichern).

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::MapFileRecord;

/// Lädt eine Kartendatei aus dem übergebenen Pfad.
pub fn load(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::load_map_file(state, path)
}

/// Übernimmt einen bereits geparsten Kartendatensatz.
pub fn load_record(state: &mut AppState, record: MapFileRecord) {
    use_cases::file_io::apply_record(state, record);
}

/// Speichert die Karte.
///
/// `None` speichert unter dem aktuell bekannten Pfad.
/// `Some(p)` speichert explizit unter dem neuen Pfad `p`.
pub fn save(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    use_cases::file_io::save_map_file(state, path)
}
