//! Zentrale Konfiguration für den Topologie-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::{AreaColorScheme, EdgeKind};

// ── Ansicht ─────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor
pub const VIEW_SCALE_MIN: f32 = 0.1;
/// Maximaler Zoom-Faktor
pub const VIEW_SCALE_MAX: f32 = 3.0;
/// Zoom-Änderung pro Raste/Klick
pub const VIEW_ZOOM_STEP: f32 = 0.1;

// ── Punkte & Selektion ─────────────────────────────────────────────

/// Darstellungsradius eines Punkts (Canvas-Einheiten)
pub const POINT_RADIUS: f32 = 6.0;
/// Pick-Radius für Punkte in Pixeln
pub const PICK_RADIUS_PX: f32 = 10.0;
/// Toleranz für Kanten-Treffer in Pixeln
pub const EDGE_HIT_TOLERANCE_PX: f32 = 6.0;
/// Zusatzabstand des Selektionsrahmens
pub const SELECTION_PADDING: f32 = 4.0;
/// Pick-Radius für Bézier-Griffe und Bereichsecken in Pixeln
pub const HANDLE_PICK_RADIUS_PX: f32 = 8.0;

// ── Editing ─────────────────────────────────────────────────────────

/// Schrittweite der Pfeiltasten (Canvas-Einheiten)
pub const NUDGE_STEP: f32 = 1.0;
/// Drehwinkel pro R-Tastendruck (Grad)
pub const ROTATION_STEP_DEG: f32 = 90.0;
/// Pixel-Versatz der Standard-Steuerpunkte
pub const BEZIER_HANDLE_OFFSET_PX: f32 = crate::core::bezier::DEFAULT_HANDLE_OFFSET_PX;
/// Bewegung in Pixeln, ab der ein Druck als Ziehen gilt
pub const DRAG_THRESHOLD_PX: f32 = 3.0;
/// Drossel-Intervall für Vorschau-Zeigerpositionen (ms)
pub const POINTER_THROTTLE_MS: u64 = 16;

// ── History ─────────────────────────────────────────────────────────

pub const HISTORY_CAPACITY: usize = 50;
pub const STROKE_HISTORY_CAPACITY: usize = 50;

// ── Raster ──────────────────────────────────────────────────────────

pub const BRUSH_RADIUS: f32 = 4.0;
pub const ERASER_RADIUS: f32 = 10.0;
pub const BRUSH_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

// ── Kanten ──────────────────────────────────────────────────────────

pub const EDGE_WIDTH: f32 = 2.0;
pub const EDGE_COLOR_SINGLE_LINE: [f32; 4] = [0.2, 0.6, 1.0, 1.0];
pub const EDGE_COLOR_DOUBLE_LINE: [f32; 4] = [0.2, 0.8, 0.4, 1.0];
pub const EDGE_COLOR_SINGLE_BEZIER: [f32; 4] = [1.0, 0.6, 0.1, 1.0];
pub const EDGE_COLOR_DOUBLE_BEZIER: [f32; 4] = [0.8, 0.3, 0.9, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als TOML neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Ansicht ─────────────────────────────────────────────────
    pub view_scale_min: f32,
    pub view_scale_max: f32,
    pub view_zoom_step: f32,

    // ── Punkte & Selektion ──────────────────────────────────────
    pub point_radius: f32,
    pub pick_radius_px: f32,
    pub edge_hit_tolerance_px: f32,
    pub selection_padding: f32,
    pub handle_pick_radius_px: f32,

    // ── Editing ─────────────────────────────────────────────────
    pub nudge_step: f32,
    pub rotation_step_deg: f32,
    pub bezier_handle_offset_px: f32,
    pub drag_threshold_px: f32,
    pub pointer_throttle_ms: u64,

    // ── History ─────────────────────────────────────────────────
    pub history_capacity: usize,
    pub stroke_history_capacity: usize,

    // ── Raster ──────────────────────────────────────────────────
    pub brush_radius: f32,
    pub eraser_radius: f32,
    pub brush_color: [f32; 4],

    // ── Kanten ──────────────────────────────────────────────────
    pub edge_width: f32,
    pub edge_color_single_line: [f32; 4],
    pub edge_color_double_line: [f32; 4],
    pub edge_color_single_bezier: [f32; 4],
    pub edge_color_double_bezier: [f32; 4],

    // ── Bereiche ────────────────────────────────────────────────
    pub area_colors: AreaColorScheme,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            view_scale_min: VIEW_SCALE_MIN,
            view_scale_max: VIEW_SCALE_MAX,
            view_zoom_step: VIEW_ZOOM_STEP,

            point_radius: POINT_RADIUS,
            pick_radius_px: PICK_RADIUS_PX,
            edge_hit_tolerance_px: EDGE_HIT_TOLERANCE_PX,
            selection_padding: SELECTION_PADDING,
            handle_pick_radius_px: HANDLE_PICK_RADIUS_PX,

            nudge_step: NUDGE_STEP,
            rotation_step_deg: ROTATION_STEP_DEG,
            bezier_handle_offset_px: BEZIER_HANDLE_OFFSET_PX,
            drag_threshold_px: DRAG_THRESHOLD_PX,
            pointer_throttle_ms: POINTER_THROTTLE_MS,

            history_capacity: HISTORY_CAPACITY,
            stroke_history_capacity: STROKE_HISTORY_CAPACITY,

            brush_radius: BRUSH_RADIUS,
            eraser_radius: ERASER_RADIUS,
            brush_color: BRUSH_COLOR,

            edge_width: EDGE_WIDTH,
            edge_color_single_line: EDGE_COLOR_SINGLE_LINE,
            edge_color_double_line: EDGE_COLOR_DOUBLE_LINE,
            edge_color_single_bezier: EDGE_COLOR_SINGLE_BEZIER,
            edge_color_double_bezier: EDGE_COLOR_DOUBLE_BEZIER,

            area_colors: AreaColorScheme::default(),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Fehlt die Datei, werden Standardwerte verwendet.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert die Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Pfad zur Konfigurationsdatei (neben der Binary).
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("topomap-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("topomap_editor.toml")
    }

    /// Standardfarbe für neue Kanten einer Art.
    pub fn edge_color(&self, kind: EdgeKind) -> [f32; 4] {
        match kind {
            EdgeKind::SingleLine => self.edge_color_single_line,
            EdgeKind::DoubleLine => self.edge_color_double_line,
            EdgeKind::SingleBezier => self.edge_color_single_bezier,
            EdgeKind::DoubleBezier => self.edge_color_double_bezier,
        }
    }

    /// Pick-Radius in Canvas-Einheiten beim aktuellen Zoom.
    pub fn pick_radius(&self, scale: f32) -> f32 {
        self.pick_radius_px / scale.max(f32::EPSILON)
    }

    /// Kanten-Toleranz in Canvas-Einheiten beim aktuellen Zoom.
    pub fn edge_tolerance(&self, scale: f32) -> f32 {
        self.edge_hit_tolerance_px / scale.max(f32::EPSILON)
    }

    /// Griff-Pick-Radius in Canvas-Einheiten beim aktuellen Zoom.
    pub fn handle_radius(&self, scale: f32) -> f32 {
        self.handle_pick_radius_px / scale.max(f32::EPSILON)
    }
}
