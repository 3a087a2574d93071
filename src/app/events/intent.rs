use super::super::state::{ActiveLayer, EditorTool, EntityRef};
use crate::core::{AreaPatch, EdgePatch, MapFileRecord, PointPatch};
use crate::shared::EditorOptions;
use glam::Vec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Zeiger-Positionen sind bereits in Canvas-Koordinaten umgerechnet;
/// Zoom- und Pan-Werte bleiben in Bildschirmkoordinaten.
#[derive(Debug, Clone)]
pub enum AppIntent {
    // ── Datei ───────────────────────────────────────────────────
    /// Kartendatei wurde ausgewählt (Laden)
    MapFileSelected { path: String },
    /// Bereits geparster Kartendatensatz (z.B. aus der Dateiverwaltung)
    MapRecordReceived { record: Box<MapFileRecord> },
    /// Unter aktuellem Pfad speichern
    SaveRequested,
    /// Speicherpfad wurde ausgewählt
    SaveAsPathSelected { path: String },

    // ── Ansicht ─────────────────────────────────────────────────
    /// Viewport-Lage oder -Größe hat sich geändert
    ViewportResized { origin: Vec2, size: Vec2 },
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Mausrad (positive Rasten = hinein) um einen Bildschirmpunkt
    WheelZoom { ticks: f32, focus_screen: Vec2 },
    /// Zwei-Finger-Pinch mit aufeinanderfolgenden Fingerabständen
    PinchZoom {
        previous_distance: f32,
        current_distance: f32,
    },
    /// Ansicht 1:1 mit Bildschirm-Delta verschieben
    CameraPan { screen_delta: Vec2 },
    /// Ansicht auf eine Entität zentrieren
    CenterOnEntityRequested { entity: EntityRef },
    /// Zoom und Verschiebung zurücksetzen
    ResetViewRequested,

    // ── Zeiger ──────────────────────────────────────────────────
    /// Einfacher Klick (ctrl/cmd = additiv, shift = Kante teilen)
    CanvasClicked {
        canvas_pos: Vec2,
        additive: bool,
        shift: bool,
        time_ms: u64,
    },
    /// Doppelklick
    CanvasDoubleClicked { canvas_pos: Vec2 },
    /// Rechtsklick
    CanvasRightClicked { canvas_pos: Vec2 },
    /// Zieh-Geste beginnt (Schwelle überschritten)
    DragStarted {
        canvas_pos: Vec2,
        additive: bool,
        time_ms: u64,
    },
    /// Zieh-Geste läuft
    DragUpdated { canvas_pos: Vec2 },
    /// Zieh-Geste endet
    DragEnded,
    /// Zeigerbewegung ohne Taste (gedrosselt, nur für Vorschauen)
    PointerMoved { canvas_pos: Vec2 },

    // ── Tastatur ────────────────────────────────────────────────
    EscapePressed,
    EnterPressed,
    /// Aktuelle Selektion löschen
    DeleteSelectedRequested,
    /// Selektion in Einheitsrichtung verschieben
    NudgeRequested { direction: Vec2 },
    /// Selektion um einen Schritt drehen
    RotateRequested { clockwise: bool },
    UndoRequested,
    RedoRequested,
    CopyRequested,
    PasteRequested,
    /// Editor-Werkzeug wechseln
    SetEditorToolRequested { tool: EditorTool },
    /// Bearbeitungsebene wechseln
    SetActiveLayerRequested { layer: ActiveLayer },

    // ── Eigenschaften ───────────────────────────────────────────
    UpdatePointRequested { id: u64, patch: PointPatch },
    UpdateEdgeRequested { id: u64, patch: EdgePatch },
    UpdateAreaRequested { id: u64, patch: AreaPatch },
    /// Eigenschaften-Editor schließen
    PropertiesClosed,
    /// Kontextmenü schließen
    ContextMenuClosed,

    // ── Gruppen ─────────────────────────────────────────────────
    CreateNetworkGroupRequested { name: String, area_id: Option<u64> },
    CreatePathGroupRequested { name: String },
    /// Selektierte Kanten einer Netzwerkgruppe hinzufügen
    AddSelectedPathsToNetworkGroup { group_id: u64 },
    /// Selektierte Punkte einer Netzwerkgruppe hinzufügen
    AddSelectedPointsToNetworkGroup { group_id: u64 },
    /// Selektierte Kanten einer Pfadgruppe hinzufügen
    AddSelectedPathsToPathGroup { group_id: u64 },
    NetworkGroupVisibilityChanged { group_id: u64, visible: bool },
    RemoveGroupRequested { group_id: u64 },

    // ── Optionen & Meldungen ────────────────────────────────────
    /// Optionen wurden geändert
    OptionsChanged { options: Box<EditorOptions> },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Alle Meldungen verwerfen
    NotificationsDismissed,
}
