//! Gemeinsame Hilfsfunktionen für Selektionslogik.

use crate::app::use_cases::editing::transform::moved_point_ids;
use crate::app::AppState;
use crate::core::Rect;

/// Löscht die aktuelle Selektion explizit.
pub fn clear_selection(state: &mut AppState) {
    state.selection.clear();
}

/// Ziehbarer Rahmen um die Selektion.
///
/// Umschließt die Mittelpunkte selektierter Punkte (inklusive Endpunkte
/// selektierter Kanten), erweitert um Punktradius plus Polsterung.
pub fn selection_bounds(state: &AppState) -> Option<Rect> {
    let topology = &state.topology;
    let positions = moved_point_ids(state)
        .into_iter()
        .filter_map(|id| topology.point_position(id));
    let margin = state.options.point_radius + state.options.selection_padding;
    Rect::bounding(positions).map(|rect| rect.expand(margin))
}
