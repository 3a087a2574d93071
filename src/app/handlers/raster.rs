//! Handler für Striche auf der Rasterebene und deren eigene History.

use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

pub fn begin_stroke(state: &mut AppState, canvas_pos: Vec2, time_ms: u64) {
    use_cases::raster::begin_stroke(state, canvas_pos, time_ms);
}

pub fn extend_stroke(state: &mut AppState, canvas_pos: Vec2) {
    use_cases::raster::extend_stroke(state, canvas_pos);
}

pub fn commit_stroke(state: &mut AppState) {
    use_cases::raster::commit_stroke(state);
}

pub fn undo_stroke(state: &mut AppState) {
    use_cases::raster::undo_stroke(state);
}

pub fn redo_stroke(state: &mut AppState) {
    use_cases::raster::redo_stroke(state);
}
