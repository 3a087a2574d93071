//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert Eingabe-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Datei-I/O ===
            AppCommand::LoadMapFile { path } => handlers::file_io::load(state, path)?,
            AppCommand::LoadMapRecord { record } => handlers::file_io::load_record(state, *record),
            AppCommand::SaveMapFile { path } => handlers::file_io::save(state, path)?,

            // === Ansicht ===
            AppCommand::SetViewport { origin, size } => {
                handlers::view::set_viewport(state, origin, size)
            }
            AppCommand::ZoomSteps {
                steps,
                focus_screen,
            } => handlers::view::zoom_steps(state, steps, focus_screen),
            AppCommand::PinchZoom {
                previous_distance,
                current_distance,
            } => handlers::view::pinch(state, previous_distance, current_distance),
            AppCommand::PanView { screen_delta } => handlers::view::pan(state, screen_delta),
            AppCommand::CenterOn { canvas_pos } => handlers::view::center_on(state, canvas_pos),
            AppCommand::ResetView => handlers::view::reset_view(state),

            // === Selektion ===
            AppCommand::SelectPoint { id, additive } => {
                handlers::selection::select_point(state, id, additive)
            }
            AppCommand::SelectEdge { id, additive } => {
                handlers::selection::select_edge(state, id, additive)
            }
            AppCommand::SelectArea { id, additive } => {
                handlers::selection::select_area(state, id, additive)
            }
            AppCommand::SelectAreaVertex {
                area_id,
                index,
                additive,
            } => handlers::selection::select_area_vertex(state, area_id, index, additive),
            AppCommand::SelectInRect { min, max, additive } => {
                handlers::selection::select_in_rect(state, min, max, additive)
            }
            AppCommand::ClearSelection => handlers::selection::clear(state),

            // === Werkzeuge ===
            AppCommand::SetEditorTool { tool } => handlers::editing::set_editor_tool(state, tool),
            AppCommand::SetActiveLayer { layer } => {
                handlers::editing::set_active_layer(state, layer)
            }
            AppCommand::RecordClick { canvas_pos } => {
                handlers::editing::record_click(state, canvas_pos)
            }
            AppCommand::UpdatePointer { canvas_pos } => {
                handlers::editing::update_pointer(state, canvas_pos)
            }

            // === Editing ===
            AppCommand::AddPoint { kind, canvas_pos } => {
                handlers::editing::add_point(state, kind, canvas_pos)
            }
            AppCommand::ConnectPoint { point_id, kind } => {
                handlers::editing::connect_point(state, point_id, kind)
            }
            AppCommand::ConnectNewPoint { canvas_pos, kind } => {
                handlers::editing::connect_new_point(state, canvas_pos, kind)
            }
            AppCommand::CancelConnection => handlers::editing::cancel_connection(state),
            AppCommand::AddAreaVertex { canvas_pos } => {
                handlers::editing::add_area_vertex(state, canvas_pos)
            }
            AppCommand::CompleteArea { kind } => handlers::editing::complete_area(state, kind),
            AppCommand::CancelArea => handlers::editing::cancel_area(state),
            AppCommand::SplitEdge {
                edge_id,
                canvas_pos,
            } => handlers::editing::split_edge(state, edge_id, canvas_pos),
            AppCommand::DeleteSelection => handlers::editing::delete_selection(state),
            AppCommand::NudgeSelection { delta } => {
                handlers::editing::nudge_selection(state, delta)
            }
            AppCommand::RotateSelection { degrees } => {
                handlers::editing::rotate_selection(state, degrees)
            }
            AppCommand::CopySelection => handlers::editing::copy_selection(state),
            AppCommand::PasteClipboard { offset } => {
                handlers::editing::paste_clipboard(state, offset)
            }
            AppCommand::UpdatePoint { id, patch } => {
                handlers::editing::update_point(state, id, &patch)
            }
            AppCommand::UpdateEdge { id, patch } => handlers::editing::update_edge(state, id, &patch),
            AppCommand::UpdateArea { id, patch } => handlers::editing::update_area(state, id, &patch),

            // === Ziehen ===
            AppCommand::BeginDrag { target, canvas_pos } => {
                handlers::selection::begin_drag(state, target, canvas_pos)
            }
            AppCommand::UpdateDrag { canvas_pos } => {
                handlers::selection::update_drag(state, canvas_pos)
            }
            AppCommand::EndDrag => handlers::selection::end_drag(state),
            AppCommand::CancelDrag => handlers::selection::cancel_drag(state),

            // === Raster ===
            AppCommand::BeginStroke {
                canvas_pos,
                time_ms,
            } => handlers::raster::begin_stroke(state, canvas_pos, time_ms),
            AppCommand::ExtendStroke { canvas_pos } => {
                handlers::raster::extend_stroke(state, canvas_pos)
            }
            AppCommand::CommitStroke => handlers::raster::commit_stroke(state),
            AppCommand::UndoStroke => handlers::raster::undo_stroke(state),
            AppCommand::RedoStroke => handlers::raster::redo_stroke(state),

            // === Gruppen ===
            AppCommand::CreateNetworkGroup { name, area_id } => {
                handlers::groups::create_network_group(state, &name, area_id)
            }
            AppCommand::CreatePathGroup { name } => {
                handlers::groups::create_path_group(state, &name)
            }
            AppCommand::AddPathsToNetworkGroup { group_id, edge_ids } => {
                handlers::groups::add_paths_to_network_group(state, group_id, &edge_ids)
            }
            AppCommand::AddPointsToNetworkGroup {
                group_id,
                point_ids,
            } => handlers::groups::add_points_to_network_group(state, group_id, &point_ids),
            AppCommand::AddPathsToPathGroup { group_id, edge_ids } => {
                handlers::groups::add_paths_to_path_group(state, group_id, &edge_ids)
            }
            AppCommand::SetNetworkGroupVisible { group_id, visible } => {
                handlers::groups::set_network_group_visible(state, group_id, visible)
            }
            AppCommand::RemoveGroup { group_id } => handlers::groups::remove_group(state, group_id),

            // === Dialoge ===
            AppCommand::OpenProperties { target } => {
                handlers::dialog::open_properties(state, target)
            }
            AppCommand::CloseProperties => handlers::dialog::close_properties(state),
            AppCommand::OpenContextMenu { canvas_pos } => {
                handlers::dialog::open_context_menu(state, canvas_pos)
            }
            AppCommand::CloseContextMenu => handlers::dialog::close_context_menu(state),
            AppCommand::DismissNotifications => handlers::dialog::dismiss_notifications(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, *options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
