use super::super::state::{ActiveLayer, EditorTool, EntityRef};
use crate::app::tools::DragTarget;
use crate::core::{AreaKind, AreaPatch, EdgeKind, EdgePatch, MapFileRecord, PointKind, PointPatch};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    // ── Datei ───────────────────────────────────────────────────
    /// Kartendatei von Pfad laden
    LoadMapFile { path: String },
    /// Kartendatensatz übernehmen
    LoadMapRecord { record: Box<MapFileRecord> },
    /// Kartendatei speichern (None = aktueller Pfad)
    SaveMapFile { path: Option<String> },

    // ── Ansicht ─────────────────────────────────────────────────
    SetViewport { origin: Vec2, size: Vec2 },
    /// Um ganze Zoom-Stufen zoomen, optional um einen Bildschirmpunkt
    ZoomSteps {
        steps: f32,
        focus_screen: Option<Vec2>,
    },
    PinchZoom {
        previous_distance: f32,
        current_distance: f32,
    },
    PanView { screen_delta: Vec2 },
    /// Canvas-Position in die Viewport-Mitte legen
    CenterOn { canvas_pos: Vec2 },
    ResetView,

    // ── Selektion ───────────────────────────────────────────────
    SelectPoint { id: u64, additive: bool },
    SelectEdge { id: u64, additive: bool },
    SelectArea { id: u64, additive: bool },
    SelectAreaVertex {
        area_id: u64,
        index: usize,
        additive: bool,
    },
    /// Box-Selektion über ein Rechteck
    SelectInRect { min: Vec2, max: Vec2, additive: bool },
    ClearSelection,

    // ── Werkzeuge ───────────────────────────────────────────────
    /// Editor-Werkzeug wechseln (bricht offene Eingaben ab)
    SetEditorTool { tool: EditorTool },
    SetActiveLayer { layer: ActiveLayer },
    /// Klickposition merken (Einfüge-Anker)
    RecordClick { canvas_pos: Vec2 },
    /// Vorschau-Zeiger der Zeichenwerkzeuge aktualisieren
    UpdatePointer { canvas_pos: Vec2 },

    // ── Editing ─────────────────────────────────────────────────
    AddPoint { kind: PointKind, canvas_pos: Vec2 },
    /// Kantenwerkzeug: existierenden Punkt anklicken
    ConnectPoint { point_id: u64, kind: EdgeKind },
    /// Kantenwerkzeug: Punkt auf leerem Canvas erzeugen und anklicken
    ConnectNewPoint { canvas_pos: Vec2, kind: EdgeKind },
    /// Offene Verbindung verwerfen
    CancelConnection,
    AddAreaVertex { canvas_pos: Vec2 },
    /// Bereich aus gesammelten Eckpunkten erzeugen
    CompleteArea { kind: AreaKind },
    /// Gesammelte Eckpunkte verwerfen
    CancelArea,
    /// Neuen Punkt auf einer Kante einfügen und die Kante teilen
    SplitEdge { edge_id: u64, canvas_pos: Vec2 },
    /// Selektion löschen (Punkte, sonst Kanten, sonst Bereiche)
    DeleteSelection,
    NudgeSelection { delta: Vec2 },
    /// Selektion um ihren Schwerpunkt drehen (Grad, positiv = Uhrzeigersinn)
    RotateSelection { degrees: f32 },
    CopySelection,
    /// Zwischenablage um einen Versatz verschoben einfügen
    PasteClipboard { offset: Vec2 },
    UpdatePoint { id: u64, patch: PointPatch },
    UpdateEdge { id: u64, patch: EdgePatch },
    UpdateArea { id: u64, patch: AreaPatch },

    // ── Ziehen ──────────────────────────────────────────────────
    BeginDrag { target: DragTarget, canvas_pos: Vec2 },
    UpdateDrag { canvas_pos: Vec2 },
    EndDrag,
    /// Laufende Geste verwerfen, Ausgangszustand wiederherstellen
    CancelDrag,

    // ── Raster ──────────────────────────────────────────────────
    BeginStroke { canvas_pos: Vec2, time_ms: u64 },
    ExtendStroke { canvas_pos: Vec2 },
    CommitStroke,
    UndoStroke,
    RedoStroke,

    // ── Gruppen ─────────────────────────────────────────────────
    CreateNetworkGroup { name: String, area_id: Option<u64> },
    CreatePathGroup { name: String },
    AddPathsToNetworkGroup { group_id: u64, edge_ids: Vec<u64> },
    AddPointsToNetworkGroup { group_id: u64, point_ids: Vec<u64> },
    AddPathsToPathGroup { group_id: u64, edge_ids: Vec<u64> },
    SetNetworkGroupVisible { group_id: u64, visible: bool },
    RemoveGroup { group_id: u64 },

    // ── Dialoge ─────────────────────────────────────────────────
    OpenProperties { target: EntityRef },
    CloseProperties,
    OpenContextMenu { canvas_pos: Vec2 },
    CloseContextMenu,
    DismissNotifications,
    ApplyOptions { options: Box<EditorOptions> },
    ResetOptions,

    // ── History ─────────────────────────────────────────────────
    Undo,
    Redo,
}
