//! Cellular-automaton smoothing that turns noise into cave shapes.
//!
//! Passes update the grid in place in scan order, so a cell sees the
//! already-smoothed values of cells visited earlier in the same pass.
//! Unlike filling, smoothing visits border cells too; they only stay solid
//! because off-grid neighbours count as walls.

use crate::types::{Coord, TileKind};

use super::grid::Grid;

pub fn smooth(grid: &mut Grid, iterations: u8, wall_threshold: u8) {
    let threshold = usize::from(wall_threshold);
    for _ in 0..iterations {
        for coord in grid.coords() {
            let walls = surrounding_wall_count(grid, coord);
            if walls > threshold {
                grid[coord] = TileKind::Wall;
            } else if walls < threshold {
                grid[coord] = TileKind::Floor;
            }
        }
    }
}

/// Walls among the eight neighbours of `coord`; off-grid neighbours count.
pub(crate) fn surrounding_wall_count(grid: &Grid, coord: Coord) -> usize {
    let mut walls = 0;
    for x in (coord.x - 1)..=(coord.x + 1) {
        for y in (coord.y - 1)..=(coord.y + 1) {
            let neighbor = Coord { x, y };
            if neighbor != coord && grid.tile_or_wall(neighbor) == TileKind::Wall {
                walls += 1;
            }
        }
    }
    walls
}
