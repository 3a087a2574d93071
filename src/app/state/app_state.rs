use crate::app::history::{EditHistory, Snapshot, StrokeSnapshot};
use crate::app::CommandLog;
use crate::core::{MapInfo, RasterLayer, StrokeLayer, TopologyMap};
use crate::shared::EditorOptions;
use std::sync::Arc;

use super::{EditorToolState, SelectionState, UiState, ViewState};

/// Metadaten des geladenen Kartendatensatzes (ohne Topologie und Striche)
#[derive(Debug, Clone, Default)]
pub struct MapDocument {
    pub id: String,
    pub name: String,
    pub thumbnail: Option<String>,
    pub status: String,
    pub format: String,
    /// Original-Rasterdaten (base64), werden unverändert zurückgeschrieben
    pub grayscale_data: Option<String>,
    pub map_info: MapInfo,
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuelle Topologie (Arc für O(1)-Snapshots)
    pub topology: Arc<TopologyMap>,
    /// Pinsel-/Radierer-Striche über dem Raster
    pub strokes: StrokeLayer,
    /// Dekodiertes Hintergrundraster (None = leer)
    pub raster: Option<Arc<RasterLayer>>,
    /// Metadaten des Kartendatensatzes
    pub document: MapDocument,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Selection-State
    pub selection: SelectionState,
    /// Editor-Werkzeug-State
    pub editor: EditorToolState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History der Topologie (Snapshot-basiert)
    pub history: EditHistory<Snapshot>,
    /// Unabhängige Undo/Redo-History der Striche
    pub stroke_history: EditHistory<StrokeSnapshot>,
    /// Laufzeit-Optionen (Farben, Größen, Radien)
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit vorgegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            topology: Arc::new(TopologyMap::new()),
            strokes: StrokeLayer::new(),
            raster: None,
            document: MapDocument::default(),
            view: ViewState::new(),
            ui: UiState::new(),
            selection: SelectionState::new(),
            editor: EditorToolState::new(),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(options.history_capacity),
            stroke_history: EditHistory::new_with_capacity(options.stroke_history_capacity),
            options,
        }
    }

    /// Gibt die Anzahl der Punkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.topology.point_count()
    }

    /// Gibt die Anzahl der Kanten zurück (für UI-Anzeige)
    pub fn edge_count(&self) -> usize {
        self.topology.edge_count()
    }

    pub fn area_count(&self) -> usize {
        self.topology.area_count()
    }

    /// Undo/Redo helpers
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    /// Reduziert Boilerplate in mutierenden Use-Cases.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }

    /// Sichert die abgeschlossenen Striche vor einer Änderung.
    pub fn record_stroke_snapshot(&mut self) {
        let snap = self.strokes.committed().clone();
        self.stroke_history.record_snapshot(snap);
    }

    /// Schreibzugriff auf die Topologie (klont nur, wenn ein Snapshot sie teilt).
    pub fn topology_mut(&mut self) -> &mut TopologyMap {
        Arc::make_mut(&mut self.topology)
    }

    /// Aktueller Zoom-Faktor.
    pub fn scale(&self) -> f32 {
        self.view.transform.scale
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
