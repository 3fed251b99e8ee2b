//! Flood-fill region extraction and size-based region filtering.

use std::collections::VecDeque;

use crate::error::MapError;
use crate::types::{Coord, TileKind};

use super::grid::Grid;

/// A maximal 4-connected set of same-kind tiles, in flood-fill visit order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    pub kind: TileKind,
    pub tiles: Vec<Coord>,
}

impl Region {
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

/// Partitions every `kind` tile into regions, seeded in scan order.
pub fn extract_regions(grid: &Grid, kind: TileKind) -> Vec<Region> {
    let mut visited = vec![false; grid.width() * grid.height()];
    let mut regions = Vec::new();

    for coord in grid.coords() {
        if visited[visit_index(grid, coord)] || grid[coord] != kind {
            continue;
        }
        regions.push(flood_region(grid, coord, &mut visited));
    }

    regions
}

fn flood_region(grid: &Grid, start: Coord, visited: &mut [bool]) -> Region {
    let kind = grid[start];
    let mut tiles = Vec::new();
    let mut queue = VecDeque::from([start]);
    visited[visit_index(grid, start)] = true;

    while let Some(tile) = queue.pop_front() {
        tiles.push(tile);
        for neighbor in tile.axis_neighbors() {
            if grid.get(neighbor) != Some(kind) {
                continue;
            }
            let index = visit_index(grid, neighbor);
            if !visited[index] {
                visited[index] = true;
                queue.push_back(neighbor);
            }
        }
    }

    Region { kind, tiles }
}

fn visit_index(grid: &Grid, coord: Coord) -> usize {
    (coord.y as usize) * grid.width() + (coord.x as usize)
}

/// Flips every region smaller than `threshold` to the opposite tile kind.
/// Returns how many regions were flipped. Fails on the first region holding
/// a tile outside `grid`; regions before it stay flipped.
pub fn remove_undersized_regions(
    grid: &mut Grid,
    regions: &[Region],
    threshold: usize,
) -> Result<usize, MapError> {
    let mut removed = 0;
    for region in regions.iter().filter(|region| region.len() < threshold) {
        grid.set_all(&region.tiles, region.kind.opposite())?;
        removed += 1;
    }
    Ok(removed)
}
