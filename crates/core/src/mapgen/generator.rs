//! Pipeline orchestration: fill, smooth, filter, extract, sort and connect.

use tracing::{debug, debug_span};

use crate::error::MapError;
use crate::types::TileKind;

use super::config::GeneratorConfig;
use super::connect::connect_all;
use super::grid::Grid;
use super::model::GeneratedMap;
use super::noise::random_fill;
use super::regions::{extract_regions, remove_undersized_regions};
use super::room::RoomSet;
use super::smoothing::smooth;

/// Owns one validated configuration. Each `generate` call builds a fresh
/// grid and room list; nothing carries over between calls.
#[derive(Clone, Debug)]
pub struct MapGenerator {
    config: GeneratorConfig,
}

impl MapGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, MapError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn generate(&self) -> Result<GeneratedMap, MapError> {
        let config = &self.config;
        let span = debug_span!(
            "generate_map",
            seed = %config.seed,
            width = config.width,
            height = config.height
        );
        let _entered = span.enter();

        let mut grid = Grid::new(config.width, config.height)?;
        random_fill(&mut grid, config.fill_percent, &config.seed);
        smooth(&mut grid, config.smoothing_iterations, config.wall_threshold);
        debug!(floor = grid.count(TileKind::Floor), "filled and smoothed");

        if config.remove_walls {
            let walls = extract_regions(&grid, TileKind::Wall);
            let removed =
                remove_undersized_regions(&mut grid, &walls, config.wall_size_threshold)?;
            debug!(regions = walls.len(), removed, "filtered wall regions");
        }

        let mut rooms = RoomSet::from_regions(extract_regions(&grid, TileKind::Floor), &grid);
        debug!(rooms = rooms.len(), "extracted rooms");

        if config.remove_rooms {
            let removed = rooms.remove_undersized(&mut grid, config.room_size_threshold)?;
            debug!(removed, remaining = rooms.len(), "filtered rooms");
        }

        rooms.sort_by_size_desc();

        if config.connect_rooms {
            let merges = connect_all(&mut rooms, &mut grid, config.passage_radius);
            debug!(merges, remaining = rooms.len(), "connected rooms");
        }

        Ok(GeneratedMap { seed: config.seed.clone(), grid, rooms: rooms.into_rooms() })
    }
}
