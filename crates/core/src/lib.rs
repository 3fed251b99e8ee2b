//! Seeded cave map generation: noise, cellular-automaton smoothing, region
//! filtering and nearest-pair room connection on a 2D tile grid.

pub mod error;
pub mod mapgen;
pub mod types;

pub use error::MapError;
pub use mapgen::{GeneratedMap, GeneratorConfig, Grid, MapGenerator, Room, generate_map};
pub use types::*;
