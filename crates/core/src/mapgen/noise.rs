//! Seeded random wall/floor split of the grid interior.

use crate::types::{Coord, TileKind};

use super::grid::Grid;
use super::seed::SeedStream;

/// Fills every non-border cell: one draw in `1..=100` per cell, `Wall` when the
/// draw is below `fill_percent`. Border cells are never written, so a fresh
/// grid keeps its solid `Wall` frame.
pub fn random_fill(grid: &mut Grid, fill_percent: u8, seed: &str) {
    let mut stream = SeedStream::from_seed(seed);
    let threshold = u32::from(fill_percent);
    let (width, height) = (grid.width() as i32, grid.height() as i32);

    for x in 1..(width - 1) {
        for y in 1..(height - 1) {
            let draw = stream.next_in_range(1, 100);
            grid[Coord { x, y }] = if draw < threshold { TileKind::Wall } else { TileKind::Floor };
        }
    }
}
