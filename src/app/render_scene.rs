//! Builder für Render-Szenen aus dem AppState.

use crate::app::state::ActiveLayer;
use crate::app::AppState;
use crate::core::{bezier, Edge, TopologyMap, Visibility};
use crate::shared::{
    EdgeGeometry, RenderArea, RenderEdge, RenderPoint, RenderScene, RenderStroke,
};

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Ausgeblendete Gruppenmitglieder und Kanten ohne Endpunkt fehlen in der
/// Szene; Striche liegen in Kompositionsreihenfolge vor.
pub fn build(state: &AppState) -> RenderScene {
    let topology = &state.topology;
    let selection = &state.selection;
    let visibility = topology.visibility();

    let points = topology
        .points
        .values()
        .filter(|p| !visibility.hidden_points.contains(&p.id))
        .map(|p| RenderPoint {
            id: p.id,
            name: p.name.clone(),
            kind: p.kind,
            position: p.position,
            direction: p.direction,
            disabled: p.disabled,
            selected: selection.point_ids.contains(&p.id),
        })
        .collect();

    let edges = build_edges(state, topology, &visibility);

    let scheme = &state.options.area_colors;
    let areas = topology
        .areas
        .values()
        .map(|a| {
            let selected = selection.area_ids.contains(&a.id);
            RenderArea {
                id: a.id,
                name: a.name.clone(),
                kind: a.kind,
                vertices: a.vertices.clone(),
                fill_color: a.fill_color(scheme),
                stroke_color: a.stroke_color(scheme),
                selected,
                selected_vertices: if selected {
                    selection.vertex_indices.iter().copied().collect()
                } else {
                    Vec::new()
                },
            }
        })
        .collect();

    let brush_color = state.options.brush_color;
    let committed = state.strokes.committed().len();
    let strokes = state
        .strokes
        .composition_order()
        .into_iter()
        .enumerate()
        .map(|(i, s)| RenderStroke {
            id: s.id,
            points: s.points.clone(),
            radius: s.radius,
            color: s.render_color(brush_color),
            in_progress: i >= committed,
        })
        .collect();

    RenderScene {
        transform: state.view.transform.clone(),
        points,
        edges,
        areas,
        strokes,
        connection_preview: state.editor.connection.preview(topology),
        area_preview: state.editor.area_draft.preview(),
        selection_box: selection.selection_box,
        rubber_band: state.editor.drag.as_ref().and_then(|d| d.rubber_band()),
        raster: state.raster.clone(),
        raster_layer_active: state.editor.active_layer == ActiveLayer::Raster,
    }
}

fn build_edges(state: &AppState, topology: &TopologyMap, visibility: &Visibility) -> Vec<RenderEdge> {
    topology
        .edges
        .values()
        .filter(|e| !visibility.hidden_edges.contains(&e.id))
        .filter_map(|e| render_edge(state, topology, e))
        .collect()
}

/// Löst die Geometrie einer Kante auf; hängende Kanten liefern `None`.
fn render_edge(state: &AppState, topology: &TopologyMap, edge: &Edge) -> Option<RenderEdge> {
    let (a, b) = topology.edge_endpoints(edge)?;
    let selected = state.selection.edge_ids.contains(&edge.id);

    let (geometry, end_angle, start_angle, handles) = match topology.edge_curve(edge) {
        Some(c) => {
            let reversed = [c[3], c[2], c[1], c[0]];
            (
                EdgeGeometry::Bezier { points: c },
                bezier::end_angle(&c),
                bezier::end_angle(&reversed),
                selected.then_some([c[1], c[2]]),
            )
        }
        None => {
            let d = b - a;
            (
                EdgeGeometry::Line { start: a, end: b },
                d.y.atan2(d.x),
                (-d.y).atan2(-d.x),
                None,
            )
        }
    };

    Some(RenderEdge {
        id: edge.id,
        name: edge.name.clone(),
        kind: edge.kind,
        geometry,
        color: edge.color,
        width: edge.width,
        selected,
        arrow_end_angle: end_angle,
        arrow_start_angle: edge.kind.is_bidirectional().then_some(start_angle),
        handles,
    })
}
