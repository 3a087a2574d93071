//! Use-Case-Funktionen für Selektion und Ziehen.
//!
//! Aufgeteilt nach Selektionsmodus:
//! - `pick` — Treffertest und Einzelklick-Selektion
//! - `rect` — Rechteck-Selektion (Box-Drag)
//! - `drag` — Ziehen von Selektion, Eckpunkten und Bézier-Griffen
//! - `helpers` — Gemeinsame Hilfsfunktionen
mod drag;
mod helpers;
mod pick;
mod rect;

pub use drag::{begin_drag, cancel_drag, end_drag, update_drag};
pub use helpers::{clear_selection, selection_bounds};
pub use pick::{
    hit_edge, hit_point, hit_test, select_area, select_area_vertex, select_edge, select_point,
    selection_box_contains, Hit,
};
pub use rect::select_in_rect;
