//! Koordinatentransformation zwischen Bildschirm und Canvas (Pan und Zoom).

use glam::Vec2;

/// Skalierung und Verschiebung der Canvas-Ansicht
///
/// `canvas = (screen − viewport_origin) / scale − offset`
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTransform {
    /// Zoom-Faktor
    pub scale: f32,
    /// Verschiebung in Canvas-Einheiten
    pub offset: Vec2,
    /// Linke obere Ecke des Viewports in Bildschirmkoordinaten
    pub viewport_origin: Vec2,
    /// Viewport-Größe in Pixeln
    pub viewport_size: Vec2,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewTransform {
    /// Minimaler Zoom-Faktor.
    pub const SCALE_MIN: f32 = 0.1;
    /// Maximaler Zoom-Faktor.
    pub const SCALE_MAX: f32 = 3.0;
    /// Zoom-Änderung pro Mausrad-Raste oder Klick.
    pub const ZOOM_STEP: f32 = 0.1;

    pub fn new() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
            viewport_origin: Vec2::ZERO,
            viewport_size: Vec2::ZERO,
        }
    }

    pub fn screen_to_canvas(&self, screen: Vec2) -> Vec2 {
        (screen - self.viewport_origin) / self.scale - self.offset
    }

    pub fn canvas_to_screen(&self, canvas: Vec2) -> Vec2 {
        (canvas + self.offset) * self.scale + self.viewport_origin
    }

    /// Setzt den Zoom (geklemmt); ein optionaler Fokuspunkt bleibt auf dem Bildschirm fix.
    pub fn set_scale(&mut self, scale: f32, min: f32, max: f32, focus_screen: Option<Vec2>) {
        let new_scale = scale.clamp(min, max);
        if let Some(focus) = focus_screen {
            let anchor = self.screen_to_canvas(focus);
            self.offset = (focus - self.viewport_origin) / new_scale - anchor;
        }
        self.scale = new_scale;
    }

    /// Zoomt um ganze Stufen (positiv = hinein).
    pub fn zoom_steps(&mut self, steps: f32, step: f32, min: f32, max: f32, focus: Option<Vec2>) {
        self.set_scale(self.scale + steps * step, min, max, focus);
    }

    /// Pinch-Zoom: Faktor aus dem Verhältnis aufeinanderfolgender Fingerabstände.
    pub fn pinch(&mut self, previous_distance: f32, current_distance: f32, min: f32, max: f32) {
        if previous_distance <= f32::EPSILON {
            return;
        }
        let ratio = current_distance / previous_distance;
        self.set_scale(self.scale * ratio, min, max, None);
    }

    /// Verschiebt die Ansicht 1:1 mit einer Bildschirm-Bewegung.
    pub fn pan_screen(&mut self, screen_delta: Vec2) {
        self.offset += screen_delta / self.scale;
    }

    /// Platziert eine Canvas-Position in der Viewport-Mitte.
    pub fn center_on(&mut self, canvas_pos: Vec2) {
        self.offset = self.viewport_size / (2.0 * self.scale) - canvas_pos;
    }

    /// Setzt Zoom und Verschiebung zurück (Viewport bleibt).
    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.offset = Vec2::ZERO;
    }
}
