//! Cave map generation split into one submodule per pipeline stage.

pub mod config;
pub mod connect;
pub mod grid;
pub mod model;
pub mod noise;
pub mod passage;
pub mod regions;
pub mod room;
pub mod smoothing;

mod generator;
mod seed;

pub use config::GeneratorConfig;
pub use connect::{Bridge, connect_all, nearest_bridge};
pub use generator::MapGenerator;
pub use grid::Grid;
pub use model::GeneratedMap;
pub use noise::random_fill;
pub use passage::{carve_passage, line_path, stamp_disk};
pub use regions::{Region, extract_regions, remove_undersized_regions};
pub use room::{Room, RoomId, RoomSet};
pub use seed::runtime_seed;
pub use smoothing::smooth;

use crate::error::MapError;

pub fn generate_map(config: &GeneratorConfig) -> Result<GeneratedMap, MapError> {
    MapGenerator::new(config.clone())?.generate()
}
