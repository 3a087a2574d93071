//! Handler für Netzwerk- und Pfadgruppen.

use crate::app::use_cases;
use crate::app::AppState;

pub fn create_network_group(state: &mut AppState, name: &str, area_id: Option<u64>) {
    use_cases::groups::create_network_group(state, name, area_id);
}

pub fn create_path_group(state: &mut AppState, name: &str) {
    use_cases::groups::create_path_group(state, name);
}

pub fn add_paths_to_network_group(state: &mut AppState, group_id: u64, edge_ids: &[u64]) {
    use_cases::groups::add_paths_to_network_group(state, group_id, edge_ids);
}

pub fn add_points_to_network_group(state: &mut AppState, group_id: u64, point_ids: &[u64]) {
    use_cases::groups::add_points_to_network_group(state, group_id, point_ids);
}

pub fn add_paths_to_path_group(state: &mut AppState, group_id: u64, edge_ids: &[u64]) {
    use_cases::groups::add_paths_to_path_group(state, group_id, edge_ids);
}

pub fn set_network_group_visible(state: &mut AppState, group_id: u64, visible: bool) {
    use_cases::groups::set_network_group_visible(state, group_id, visible);
}

pub fn remove_group(state: &mut AppState, group_id: u64) {
    use_cases::groups::remove_group(state, group_id);
}
