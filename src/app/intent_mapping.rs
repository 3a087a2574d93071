//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier fällt die Werkzeug-Entscheidung: welches Werkzeug aktiv ist und was
//! unter dem Zeiger liegt, bestimmt die erzeugten Commands.

use super::state::{ActiveLayer, EditorTool, EntityRef};
use super::tools::DragTarget;
use super::use_cases::camera::entity_focus;
use super::use_cases::selection::{hit_test, selection_box_contains, Hit};
use super::{AppCommand, AppIntent, AppState};
use glam::Vec2;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::MapFileSelected { path } => vec![AppCommand::LoadMapFile { path }],
        AppIntent::MapRecordReceived { record } => vec![AppCommand::LoadMapRecord { record }],
        AppIntent::SaveRequested => vec![AppCommand::SaveMapFile { path: None }],
        AppIntent::SaveAsPathSelected { path } => {
            vec![AppCommand::SaveMapFile { path: Some(path) }]
        }

        AppIntent::ViewportResized { origin, size } => {
            vec![AppCommand::SetViewport { origin, size }]
        }
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomSteps {
            steps: 1.0,
            focus_screen: None,
        }],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomSteps {
            steps: -1.0,
            focus_screen: None,
        }],
        AppIntent::WheelZoom {
            ticks,
            focus_screen,
        } => vec![AppCommand::ZoomSteps {
            steps: ticks,
            focus_screen: Some(focus_screen),
        }],
        AppIntent::PinchZoom {
            previous_distance,
            current_distance,
        } => vec![AppCommand::PinchZoom {
            previous_distance,
            current_distance,
        }],
        AppIntent::CameraPan { screen_delta } => vec![AppCommand::PanView { screen_delta }],
        AppIntent::CenterOnEntityRequested { entity } => match entity_focus(state, entity) {
            Some(canvas_pos) => vec![AppCommand::CenterOn { canvas_pos }],
            None => {
                log::debug!("Zentrieren: {:?} existiert nicht", entity);
                Vec::new()
            }
        },
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],

        AppIntent::CanvasClicked {
            canvas_pos,
            additive,
            shift,
            time_ms,
        } => map_click(state, canvas_pos, additive, shift, time_ms),
        AppIntent::CanvasDoubleClicked { canvas_pos } => map_double_click(state, canvas_pos),
        AppIntent::CanvasRightClicked { canvas_pos } => map_right_click(state, canvas_pos),
        AppIntent::DragStarted {
            canvas_pos,
            additive,
            time_ms,
        } => map_drag_start(state, canvas_pos, additive, time_ms),
        AppIntent::DragUpdated { canvas_pos } => {
            if state.editor.drag.is_some() {
                vec![AppCommand::UpdateDrag { canvas_pos }]
            } else if state.strokes.is_drawing() {
                vec![AppCommand::ExtendStroke { canvas_pos }]
            } else {
                vec![AppCommand::UpdatePointer { canvas_pos }]
            }
        }
        AppIntent::DragEnded => {
            if state.editor.drag.is_some() {
                vec![AppCommand::EndDrag]
            } else if state.strokes.is_drawing() {
                vec![AppCommand::CommitStroke]
            } else {
                Vec::new()
            }
        }
        AppIntent::PointerMoved { canvas_pos } => vec![AppCommand::UpdatePointer { canvas_pos }],

        AppIntent::EscapePressed => map_escape(state),
        AppIntent::EnterPressed => match state.editor.active_tool {
            EditorTool::DrawArea(kind) => vec![AppCommand::CompleteArea { kind }],
            _ => Vec::new(),
        },
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelection],
        AppIntent::NudgeRequested { direction } => vec![AppCommand::NudgeSelection {
            delta: direction * state.options.nudge_step,
        }],
        AppIntent::RotateRequested { clockwise } => {
            let step = state.options.rotation_step_deg;
            vec![AppCommand::RotateSelection {
                degrees: if clockwise { step } else { -step },
            }]
        }
        AppIntent::UndoRequested => match state.editor.active_layer {
            ActiveLayer::Raster => vec![AppCommand::UndoStroke],
            ActiveLayer::Topology => vec![AppCommand::Undo],
        },
        AppIntent::RedoRequested => match state.editor.active_layer {
            ActiveLayer::Raster => vec![AppCommand::RedoStroke],
            ActiveLayer::Topology => vec![AppCommand::Redo],
        },
        AppIntent::CopyRequested => vec![AppCommand::CopySelection],
        AppIntent::PasteRequested => match paste_offset(state) {
            Some(offset) => vec![AppCommand::PasteClipboard { offset }],
            None => {
                log::debug!("Einfügen: Zwischenablage leer");
                Vec::new()
            }
        },
        AppIntent::SetEditorToolRequested { tool } => vec![AppCommand::SetEditorTool { tool }],
        AppIntent::SetActiveLayerRequested { layer } => vec![AppCommand::SetActiveLayer { layer }],

        AppIntent::UpdatePointRequested { id, patch } => vec![AppCommand::UpdatePoint { id, patch }],
        AppIntent::UpdateEdgeRequested { id, patch } => vec![AppCommand::UpdateEdge { id, patch }],
        AppIntent::UpdateAreaRequested { id, patch } => vec![AppCommand::UpdateArea { id, patch }],
        AppIntent::PropertiesClosed => vec![AppCommand::CloseProperties],
        AppIntent::ContextMenuClosed => vec![AppCommand::CloseContextMenu],

        AppIntent::CreateNetworkGroupRequested { name, area_id } => {
            vec![AppCommand::CreateNetworkGroup { name, area_id }]
        }
        AppIntent::CreatePathGroupRequested { name } => {
            vec![AppCommand::CreatePathGroup { name }]
        }
        AppIntent::AddSelectedPathsToNetworkGroup { group_id } => {
            vec![AppCommand::AddPathsToNetworkGroup {
                group_id,
                edge_ids: state.selection.edge_ids.iter().copied().collect(),
            }]
        }
        AppIntent::AddSelectedPointsToNetworkGroup { group_id } => {
            vec![AppCommand::AddPointsToNetworkGroup {
                group_id,
                point_ids: state.selection.point_ids.iter().copied().collect(),
            }]
        }
        AppIntent::AddSelectedPathsToPathGroup { group_id } => {
            vec![AppCommand::AddPathsToPathGroup {
                group_id,
                edge_ids: state.selection.edge_ids.iter().copied().collect(),
            }]
        }
        AppIntent::NetworkGroupVisibilityChanged { group_id, visible } => {
            vec![AppCommand::SetNetworkGroupVisible { group_id, visible }]
        }
        AppIntent::RemoveGroupRequested { group_id } => vec![AppCommand::RemoveGroup { group_id }],

        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::NotificationsDismissed => vec![AppCommand::DismissNotifications],
    }
}

/// Linksklick: Werkzeugaktion an der Klickposition.
fn map_click(
    state: &AppState,
    canvas_pos: Vec2,
    additive: bool,
    shift: bool,
    time_ms: u64,
) -> Vec<AppCommand> {
    let mut commands = vec![AppCommand::RecordClick { canvas_pos }];
    if state.ui.context_menu.is_some() {
        commands.push(AppCommand::CloseContextMenu);
    }

    match state.editor.active_tool {
        EditorTool::Select => match hit_test(state, canvas_pos) {
            // Griffe werden nur gezogen
            Some(Hit::Handle { .. }) => {}
            Some(Hit::AreaVertex { area_id, index }) => {
                commands.push(AppCommand::SelectAreaVertex {
                    area_id,
                    index,
                    additive,
                })
            }
            Some(Hit::Point(id)) => commands.push(AppCommand::SelectPoint { id, additive }),
            Some(Hit::Edge(edge_id)) if shift => commands.push(AppCommand::SplitEdge {
                edge_id,
                canvas_pos,
            }),
            Some(Hit::Edge(id)) => commands.push(AppCommand::SelectEdge { id, additive }),
            Some(Hit::Area(id)) => commands.push(AppCommand::SelectArea { id, additive }),
            None => {
                if !additive && !selection_box_contains(state, canvas_pos) {
                    commands.push(AppCommand::ClearSelection);
                }
            }
        },
        EditorTool::PlacePoint(kind) => match hit_test(state, canvas_pos) {
            Some(Hit::Edge(edge_id)) if shift => commands.push(AppCommand::SplitEdge {
                edge_id,
                canvas_pos,
            }),
            _ => commands.push(AppCommand::AddPoint { kind, canvas_pos }),
        },
        EditorTool::DrawEdge(kind) => match hit_test(state, canvas_pos) {
            Some(Hit::Point(point_id)) => commands.push(AppCommand::ConnectPoint { point_id, kind }),
            _ => commands.push(AppCommand::ConnectNewPoint { canvas_pos, kind }),
        },
        EditorTool::DrawArea(_) => commands.push(AppCommand::AddAreaVertex { canvas_pos }),
        EditorTool::Brush | EditorTool::Eraser => {
            // Einzelklick malt einen Punkt
            commands.push(AppCommand::BeginStroke { canvas_pos, time_ms });
            commands.push(AppCommand::CommitStroke);
        }
    }
    commands
}

/// Doppelklick: Zeichnung abschließen oder Eigenschaften öffnen.
fn map_double_click(state: &AppState, canvas_pos: Vec2) -> Vec<AppCommand> {
    match state.editor.active_tool {
        EditorTool::DrawArea(kind) if state.editor.area_draft.is_collecting() => {
            vec![AppCommand::CompleteArea { kind }]
        }
        EditorTool::DrawEdge(_) if state.editor.connection.is_active() => {
            vec![AppCommand::CancelConnection]
        }
        EditorTool::Select => match hit_entity(state, canvas_pos) {
            Some(target) => vec![AppCommand::OpenProperties { target }],
            None => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Rechtsklick: Zeichnung abschließen oder Kontextmenü über der Selektion.
fn map_right_click(state: &AppState, canvas_pos: Vec2) -> Vec<AppCommand> {
    match state.editor.active_tool {
        EditorTool::DrawArea(kind) if state.editor.area_draft.is_collecting() => {
            return vec![AppCommand::CompleteArea { kind }];
        }
        EditorTool::DrawEdge(_) if state.editor.connection.is_active() => {
            return vec![AppCommand::CancelConnection];
        }
        _ => {}
    }

    if selection_box_contains(state, canvas_pos) {
        return vec![AppCommand::OpenContextMenu { canvas_pos }];
    }
    match hit_entity(state, canvas_pos) {
        Some(entity) if is_selected(state, entity) => {
            vec![AppCommand::OpenContextMenu { canvas_pos }]
        }
        Some(entity) => vec![
            select_command(entity, false),
            AppCommand::OpenContextMenu { canvas_pos },
        ],
        None => vec![AppCommand::CloseContextMenu],
    }
}

/// Beginn einer Zieh-Geste: Ziel nach Trefferpriorität wählen.
fn map_drag_start(
    state: &AppState,
    canvas_pos: Vec2,
    additive: bool,
    time_ms: u64,
) -> Vec<AppCommand> {
    let tool = state.editor.active_tool;
    if tool.is_raster() {
        return vec![AppCommand::BeginStroke { canvas_pos, time_ms }];
    }
    if tool != EditorTool::Select {
        return Vec::new();
    }

    let begin = |target| AppCommand::BeginDrag { target, canvas_pos };
    match hit_test(state, canvas_pos) {
        Some(Hit::Handle { edge_id, slot }) => {
            return vec![begin(DragTarget::BezierHandle { edge_id, slot })];
        }
        Some(Hit::AreaVertex { area_id, index }) => {
            let mut commands = Vec::new();
            if !state.selection.vertex_indices.contains(&index) {
                commands.push(AppCommand::SelectAreaVertex {
                    area_id,
                    index,
                    additive,
                });
            }
            commands.push(begin(DragTarget::AreaVertices { area_id }));
            return commands;
        }
        _ => {}
    }

    if selection_box_contains(state, canvas_pos) {
        return vec![begin(DragTarget::Selection)];
    }

    match hit_entity(state, canvas_pos) {
        Some(entity) if is_selected(state, entity) => vec![begin(DragTarget::Selection)],
        Some(entity) => vec![select_command(entity, additive), begin(DragTarget::Selection)],
        None => vec![begin(DragTarget::BoxSelect { additive })],
    }
}

/// Escape bricht schrittweise ab: offene Zeichnung, Verbindung, Menüs, Selektion, Werkzeug.
fn map_escape(state: &AppState) -> Vec<AppCommand> {
    let editor = &state.editor;
    if editor.area_draft.is_collecting() {
        return match editor.active_tool.area_kind() {
            Some(kind) if editor.area_draft.can_complete() => {
                vec![AppCommand::CompleteArea { kind }]
            }
            _ => vec![AppCommand::CancelArea],
        };
    }
    if editor.connection.is_active() {
        return vec![AppCommand::CancelConnection];
    }
    if editor.drag.is_some() {
        return vec![AppCommand::CancelDrag];
    }
    if state.ui.context_menu.is_some() {
        return vec![AppCommand::CloseContextMenu];
    }
    if state.ui.property_target.is_some() {
        return vec![AppCommand::CloseProperties];
    }
    if !state.selection.is_empty() {
        return vec![AppCommand::ClearSelection];
    }
    if editor.active_tool != EditorTool::Select {
        return vec![AppCommand::SetEditorTool {
            tool: EditorTool::Select,
        }];
    }
    Vec::new()
}

/// Versatz beim Einfügen: letzte Klickposition minus Schwerpunkt der Kopie.
///
/// Ohne Klick seit dem Kopieren wird um vier Punktradien versetzt.
fn paste_offset(state: &AppState) -> Option<Vec2> {
    let clipboard = state.editor.clipboard.as_ref().filter(|c| !c.is_empty())?;
    let offset = match state.editor.last_click_canvas {
        Some(click) if click != clipboard.centroid => click - clipboard.centroid,
        _ => Vec2::splat(state.options.point_radius * 4.0),
    };
    Some(offset)
}

/// Entität unter dem Zeiger (Griffe und Eckpunkte zählen zum Bereich/zur Kante).
fn hit_entity(state: &AppState, canvas_pos: Vec2) -> Option<EntityRef> {
    match hit_test(state, canvas_pos)? {
        Hit::Handle { edge_id, .. } | Hit::Edge(edge_id) => Some(EntityRef::Edge(edge_id)),
        Hit::AreaVertex { area_id, .. } | Hit::Area(area_id) => Some(EntityRef::Area(area_id)),
        Hit::Point(id) => Some(EntityRef::Point(id)),
    }
}

fn is_selected(state: &AppState, entity: EntityRef) -> bool {
    let sel = &state.selection;
    match entity {
        EntityRef::Point(id) => sel.point_ids.contains(&id),
        EntityRef::Edge(id) => sel.edge_ids.contains(&id),
        EntityRef::Area(id) => sel.area_ids.contains(&id),
    }
}

fn select_command(entity: EntityRef, additive: bool) -> AppCommand {
    match entity {
        EntityRef::Point(id) => AppCommand::SelectPoint { id, additive },
        EntityRef::Edge(id) => AppCommand::SelectEdge { id, additive },
        EntityRef::Area(id) => AppCommand::SelectArea { id, additive },
    }
}
