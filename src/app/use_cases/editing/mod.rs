//! Use-Case-Funktionen für das Editieren der Topologie.
//!
//! Aufgeteilt nach Operation:
//! - `add_point` — Neuen Punkt hinzufügen
//! - `connect` — Kantenwerkzeug mit Verkettung
//! - `area` — Bereichsentwurf abschließen/verwerfen
//! - `update` — Teiländerungen aus dem Eigenschaften-Dialog
//! - `delete` — Selektion löschen
//! - `split` — Kante teilen
//! - `clipboard` — Kopieren und Einfügen
//! - `transform` — Nudge, Rotation und gemeinsame Transformationshelfer
mod add_point;
mod area;
mod clipboard;
mod connect;
mod delete;
mod split;
pub(crate) mod transform;
mod update;

pub use add_point::add_point;
pub use area::{add_area_vertex, cancel_area, complete_area};
pub use clipboard::{copy_selection, paste_clipboard};
pub use connect::{cancel_connection, connect_new_point, connect_point};
pub use delete::delete_selection;
pub use split::split_edge;
pub use transform::{nudge_selection, rotate_selection};
pub use update::{update_area, update_edge, update_point};
