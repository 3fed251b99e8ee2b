use serde::{Deserialize, Serialize};

/// Integer grid position. Equality and ordering are by field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn squared_distance(self, other: Self) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }

    /// Axis-aligned neighbours in the order the region flood fill visits them.
    pub fn axis_neighbors(self) -> [Self; 4] {
        [
            Self { x: self.x - 1, y: self.y },
            Self { x: self.x, y: self.y - 1 },
            Self { x: self.x, y: self.y + 1 },
            Self { x: self.x + 1, y: self.y },
        ]
    }
}

/// Cell state. `Wall` is the zero state every fresh grid starts in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileKind {
    #[default]
    Wall,
    Floor,
}

impl TileKind {
    pub fn opposite(self) -> Self {
        match self {
            Self::Wall => Self::Floor,
            Self::Floor => Self::Wall,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_neighbors_skip_diagonals() {
        let neighbors = Coord::new(4, 7).axis_neighbors();
        for neighbor in neighbors {
            let dx = neighbor.x.abs_diff(4);
            let dy = neighbor.y.abs_diff(7);
            assert_eq!(dx + dy, 1, "{neighbor:?} is not axis-adjacent");
        }
    }

    #[test]
    fn squared_distance_is_symmetric() {
        let a = Coord::new(1, 2);
        let b = Coord::new(4, 6);
        assert_eq!(a.squared_distance(b), 25);
        assert_eq!(b.squared_distance(a), 25);
        assert_eq!(a.squared_distance(a), 0);
    }

    #[test]
    fn opposite_flips_tile_kind() {
        assert_eq!(TileKind::Wall.opposite(), TileKind::Floor);
        assert_eq!(TileKind::Floor.opposite(), TileKind::Wall);
        assert_eq!(TileKind::default(), TileKind::Wall);
    }
}
