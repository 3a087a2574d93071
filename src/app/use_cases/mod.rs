//! Use-Cases der Application-Layer-Orchestrierung.

pub mod camera;
pub mod editing;
pub mod file_io;
pub mod groups;
pub mod raster;
pub mod selection;
