//! Rooms: floor regions promoted to tracked entities with edge-tile metadata.

use std::cmp::{Ordering, Reverse};

use serde::Serialize;
use slotmap::{SlotMap, new_key_type};

use crate::error::MapError;
use crate::types::{Coord, TileKind};

use super::grid::Grid;
use super::regions::Region;

new_key_type! {
    pub struct RoomId;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Room {
    tiles: Vec<Coord>,
    edge_tiles: Vec<Coord>,
    size: usize,
}

impl Room {
    pub fn from_region(region: Region, grid: &Grid) -> Self {
        let edge_tiles =
            region.tiles.iter().copied().filter(|&tile| is_edge_tile(grid, tile)).collect();
        let size = region.tiles.len();
        Self { tiles: region.tiles, edge_tiles, size }
    }

    pub fn tiles(&self) -> &[Coord] {
        &self.tiles
    }

    /// Floor tiles with at least one axis-adjacent wall, in tile order.
    pub fn edge_tiles(&self) -> &[Coord] {
        &self.edge_tiles
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Larger rooms first.
    pub fn cmp_by_size_desc(&self, other: &Self) -> Ordering {
        other.size.cmp(&self.size)
    }

    /// Takes over `other`'s tiles, edge tiles and size.
    pub fn absorb(&mut self, other: Room) {
        self.size += other.size;
        self.tiles.extend(other.tiles);
        self.edge_tiles.extend(other.edge_tiles);
    }
}

/// Scans the 3x3 neighbourhood and stops at the first axis-adjacent wall.
/// Off-grid cells count as wall.
fn is_edge_tile(grid: &Grid, tile: Coord) -> bool {
    for x in (tile.x - 1)..=(tile.x + 1) {
        for y in (tile.y - 1)..=(tile.y + 1) {
            let axis_aligned = x == tile.x || y == tile.y;
            if axis_aligned && grid.tile_or_wall(Coord { x, y }) == TileKind::Wall {
                return true;
            }
        }
    }
    false
}

/// Arena of live rooms plus their current order.
#[derive(Clone, Debug, Default)]
pub struct RoomSet {
    arena: SlotMap<RoomId, Room>,
    order: Vec<RoomId>,
}

impl RoomSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_regions(regions: Vec<Region>, grid: &Grid) -> Self {
        let mut rooms = Self::new();
        for region in regions {
            rooms.insert(Room::from_region(region, grid));
        }
        rooms
    }

    pub fn insert(&mut self, room: Room) -> RoomId {
        let id = self.arena.insert(room);
        self.order.push(id);
        id
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn ids(&self) -> &[RoomId] {
        &self.order
    }

    pub fn get(&self, id: RoomId) -> Option<&Room> {
        self.arena.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Room> {
        self.order.iter().filter_map(|&id| self.arena.get(id))
    }

    pub fn total_size(&self) -> usize {
        self.iter().map(Room::size).sum()
    }

    /// Stable sort, so equal-sized rooms keep discovery order.
    pub fn sort_by_size_desc(&mut self) {
        let arena = &self.arena;
        self.order.sort_by_key(|&id| Reverse(arena.get(id).map_or(0, Room::size)));
    }

    /// Walls over and drops every room smaller than `threshold`.
    /// Returns how many rooms were removed. If any undersized room holds a
    /// tile outside `grid`, nothing is written and the set is unchanged.
    pub fn remove_undersized(
        &mut self,
        grid: &mut Grid,
        threshold: usize,
    ) -> Result<usize, MapError> {
        let (kept, removed): (Vec<RoomId>, Vec<RoomId>) = self
            .order
            .iter()
            .partition(|&&id| self.arena.get(id).is_some_and(|room| room.size >= threshold));

        let stray = removed
            .iter()
            .filter_map(|&id| self.arena.get(id))
            .flat_map(|room| room.tiles.iter().copied())
            .find(|&tile| !grid.in_bounds(tile));
        if let Some(coord) = stray {
            return Err(MapError::OutOfBounds { coord, width: grid.width(), height: grid.height() });
        }

        for id in &removed {
            if let Some(room) = self.arena.remove(*id) {
                grid.set_all(&room.tiles, TileKind::Wall)?;
            }
        }
        self.order = kept;
        Ok(removed.len())
    }

    /// Folds `absorbed` into `survivor` and drops it from the order.
    /// Returns false when either id is stale or they are the same room.
    pub(crate) fn merge(&mut self, survivor: RoomId, absorbed: RoomId) -> bool {
        if survivor == absorbed || !self.arena.contains_key(survivor) {
            return false;
        }
        let Some(other) = self.arena.remove(absorbed) else {
            return false;
        };
        if let Some(room) = self.arena.get_mut(survivor) {
            room.absorb(other);
        }
        self.order.retain(|&id| id != absorbed);
        true
    }

    pub fn into_rooms(mut self) -> Vec<Room> {
        self.order.iter().filter_map(|&id| self.arena.remove(id)).collect()
    }
}
