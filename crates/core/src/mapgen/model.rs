//! Finished generation output handed to presentation layers.

use serde::Serialize;
use xxhash_rust::xxh3::xxh3_64;

use crate::types::{Coord, TileKind};

use super::grid::Grid;
use super::room::Room;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GeneratedMap {
    pub seed: String,
    pub grid: Grid,
    pub rooms: Vec<Room>,
}

impl GeneratedMap {
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn tile_at(&self, coord: Coord) -> TileKind {
        self.grid.tile_or_wall(coord)
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.width() as u32).to_le_bytes());
        bytes.extend((self.height() as u32).to_le_bytes());
        for coord in self.grid.coords() {
            bytes.push(match self.grid[coord] {
                TileKind::Wall => 0,
                TileKind::Floor => 1,
            });
        }

        bytes.extend((self.rooms.len() as u32).to_le_bytes());
        for room in &self.rooms {
            bytes.extend((room.tiles().len() as u32).to_le_bytes());
            for tile in room.tiles() {
                bytes.extend(tile.x.to_le_bytes());
                bytes.extend(tile.y.to_le_bytes());
            }
            bytes.extend((room.edge_tiles().len() as u32).to_le_bytes());
            for tile in room.edge_tiles() {
                bytes.extend(tile.x.to_le_bytes());
                bytes.extend(tile.y.to_le_bytes());
            }
        }

        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    /// `#` wall, `.` floor, one line per row. With `markers`, room tiles
    /// show as `o` and edge tiles as `+`.
    pub fn render_ascii(&self, markers: bool) -> String {
        let width = self.width();
        let mut cells: Vec<char> = self
            .grid
            .tiles()
            .iter()
            .map(|tile| match tile {
                TileKind::Wall => '#',
                TileKind::Floor => '.',
            })
            .collect();

        if markers {
            for room in &self.rooms {
                for tile in room.tiles() {
                    cells[(tile.y as usize) * width + (tile.x as usize)] = 'o';
                }
                for tile in room.edge_tiles() {
                    cells[(tile.y as usize) * width + (tile.x as usize)] = '+';
                }
            }
        }

        let mut out = String::with_capacity((width + 1) * self.height());
        for row in cells.chunks(width) {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}
