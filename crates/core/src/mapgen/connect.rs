//! Nearest-pair bridging that joins every room into one.
//!
//! Each round sweeps every ordered pair of distinct rooms and every pair of
//! their edge tiles, keeping the first strict minimum of squared distance.
//! That is O(rooms^2 * edges^2) per merge and O(rooms^3 * edges^2) overall.
//! The sweep order is part of the output: changing it changes which passage
//! wins a tie, so it is kept exhaustive and fixed.

use tracing::{trace, warn};

use crate::types::Coord;

use super::grid::Grid;
use super::passage::carve_passage;
use super::room::{RoomId, RoomSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bridge {
    pub room_a: RoomId,
    pub room_b: RoomId,
    pub tile_a: Coord,
    pub tile_b: Coord,
    pub squared_distance: i64,
}

/// Closest edge-tile pair across any two distinct rooms, first found wins.
/// Rooms without edge tiles never take part.
pub fn nearest_bridge(rooms: &RoomSet) -> Option<Bridge> {
    let ids = rooms.ids().to_vec();
    let mut best: Option<Bridge> = None;

    for &room_a in &ids {
        let Some(a) = rooms.get(room_a) else { continue };
        for &room_b in &ids {
            if room_a == room_b {
                continue;
            }
            let Some(b) = rooms.get(room_b) else { continue };
            for &tile_a in a.edge_tiles() {
                for &tile_b in b.edge_tiles() {
                    let squared_distance = tile_a.squared_distance(tile_b);
                    if best.is_none_or(|bridge| squared_distance < bridge.squared_distance) {
                        best = Some(Bridge { room_a, room_b, tile_a, tile_b, squared_distance });
                    }
                }
            }
        }
    }

    best
}

/// Merges rooms pairwise until one remains, carving a passage for each merge.
/// The room found first in the sweep survives and absorbs the other.
/// Returns the number of merges performed.
pub fn connect_all(rooms: &mut RoomSet, grid: &mut Grid, radius: u8) -> usize {
    let mut merges = 0;
    while rooms.len() > 1 {
        let Some(bridge) = nearest_bridge(rooms) else {
            warn!(rooms = rooms.len(), "no remaining room pair has edge tiles; stopping early");
            break;
        };
        trace!(
            from = ?bridge.tile_a,
            to = ?bridge.tile_b,
            squared_distance = bridge.squared_distance,
            "bridging rooms"
        );
        if !rooms.merge(bridge.room_a, bridge.room_b) {
            break;
        }
        carve_passage(grid, bridge.tile_a, bridge.tile_b, radius);
        merges += 1;
    }
    merges
}
