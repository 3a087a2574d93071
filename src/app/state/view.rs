use crate::core::ViewTransform;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Pan/Zoom zwischen Bildschirm und Canvas
    pub transform: ViewTransform,
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            transform: ViewTransform::new(),
        }
    }
}
