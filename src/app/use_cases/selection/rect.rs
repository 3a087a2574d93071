//! Use-Case: Rechteck-Selektion (Box-Drag).

use crate::app::AppState;
use crate::core::{bezier, geometry, Rect};
use glam::Vec2;

use super::helpers::selection_bounds;

/// Stützstellen, mit denen Bézier-Kanten gegen das Rechteck getestet werden
const BEZIER_TEST_SEGMENTS: usize = 24;

/// Selektiert Punkte und Kanten im Rechteck (inkl. Rand).
///
/// Ein Punkt zählt, wenn sein Mittelpunkt im Rechteck liegt. Eine Kante
/// zählt, wenn beide Endpunkte innen liegen oder ihr Verlauf eine der vier
/// Rechteckseiten schneidet. Danach wird der Selektionsrahmen gesetzt.
pub fn select_in_rect(state: &mut AppState, corner_a: Vec2, corner_b: Vec2, additive: bool) {
    let rect = Rect::from_corners(corner_a, corner_b);
    let topology = &state.topology;
    let visibility = topology.visibility();

    let point_hits: Vec<u64> = topology
        .points_in_rect(rect.min, rect.max)
        .into_iter()
        .filter(|id| !visibility.hidden_points.contains(id))
        .collect();

    let edge_hits: Vec<u64> = topology
        .edges
        .values()
        .filter(|e| !visibility.hidden_edges.contains(&e.id))
        .filter(|e| {
            let Some((a, b)) = topology.edge_endpoints(e) else {
                return false;
            };
            if rect.contains(a) && rect.contains(b) {
                return true;
            }
            match topology.edge_curve(e) {
                Some(curve) if e.kind.is_bezier() => bezier::flatten(&curve, BEZIER_TEST_SEGMENTS)
                    .windows(2)
                    .any(|w| geometry::segment_crosses_rect(w[0], w[1], &rect)),
                _ => geometry::segment_crosses_rect(a, b, &rect),
            }
        })
        .map(|e| e.id)
        .collect();

    let selection = &mut state.selection;
    if !additive {
        selection.clear();
    }
    selection.area_ids.clear();
    selection.vertex_indices.clear();
    selection.point_ids.extend(point_hits);
    selection.edge_ids.extend(edge_hits);

    state.selection.selection_box = selection_bounds(state);

    log::debug!(
        "Box-Selektion: {} Punkte, {} Kanten",
        state.selection.point_ids.len(),
        state.selection.edge_ids.len()
    );
}
