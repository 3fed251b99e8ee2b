//! Dense tile storage with bounds checking shared by every pipeline stage.

use std::ops::{Index, IndexMut};

use serde::Serialize;

use crate::error::MapError;
use crate::types::{Coord, TileKind};

/// `width x height` tiles stored row by row. A fresh grid is all `Wall`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self, MapError> {
        Self::filled(width, height, TileKind::Wall)
    }

    pub fn filled(width: usize, height: usize, kind: TileKind) -> Result<Self, MapError> {
        check_dimension("width", width)?;
        check_dimension("height", height)?;
        let len = width
            .checked_mul(height)
            .ok_or_else(|| MapError::invalid("width", "times height overflows the tile count"))?;
        Ok(Self { width, height, tiles: vec![kind; len] })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tiles(&self) -> &[TileKind] {
        &self.tiles
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    pub fn is_border(&self, coord: Coord) -> bool {
        self.in_bounds(coord)
            && (coord.x == 0
                || coord.y == 0
                || coord.x as usize == self.width - 1
                || coord.y as usize == self.height - 1)
    }

    pub fn get(&self, coord: Coord) -> Option<TileKind> {
        self.offset(coord).map(|offset| self.tiles[offset])
    }

    /// Reads a tile, treating anything off the grid as `Wall`.
    pub fn tile_or_wall(&self, coord: Coord) -> TileKind {
        self.get(coord).unwrap_or(TileKind::Wall)
    }

    pub fn set(&mut self, coord: Coord, kind: TileKind) -> Result<(), MapError> {
        let offset = self.offset(coord).ok_or(MapError::OutOfBounds {
            coord,
            width: self.width,
            height: self.height,
        })?;
        self.tiles[offset] = kind;
        Ok(())
    }

    /// Writes `kind` to every tile, or to none of them if any is off the grid.
    pub fn set_all(&mut self, tiles: &[Coord], kind: TileKind) -> Result<(), MapError> {
        if let Some(&coord) = tiles.iter().find(|&&coord| !self.in_bounds(coord)) {
            return Err(MapError::OutOfBounds { coord, width: self.width, height: self.height });
        }
        for &coord in tiles {
            self.set(coord, kind)?;
        }
        Ok(())
    }

    pub fn count(&self, kind: TileKind) -> usize {
        self.tiles.iter().filter(|&&tile| tile == kind).count()
    }

    /// Every coordinate in scan order: column by column, top to bottom
    /// within a column. All stages that depend on visit order use this.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..width).flat_map(move |x| (0..height).map(move |y| Coord { x, y }))
    }

    fn offset(&self, coord: Coord) -> Option<usize> {
        self.in_bounds(coord).then(|| (coord.y as usize) * self.width + (coord.x as usize))
    }
}

impl Index<Coord> for Grid {
    type Output = TileKind;

    fn index(&self, coord: Coord) -> &TileKind {
        match self.offset(coord) {
            Some(offset) => &self.tiles[offset],
            None => panic!("{coord:?} is outside the {}x{} grid", self.width, self.height),
        }
    }
}

impl IndexMut<Coord> for Grid {
    fn index_mut(&mut self, coord: Coord) -> &mut TileKind {
        match self.offset(coord) {
            Some(offset) => &mut self.tiles[offset],
            None => panic!("{coord:?} is outside the {}x{} grid", self.width, self.height),
        }
    }
}

fn check_dimension(field: &'static str, value: usize) -> Result<(), MapError> {
    if value == 0 {
        return Err(MapError::invalid(field, "must be positive"));
    }
    if i32::try_from(value).is_err() {
        return Err(MapError::invalid(field, format!("{value} exceeds the coordinate range")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimensions_are_rejected() {
        assert!(matches!(
            Grid::new(0, 5),
            Err(MapError::InvalidConfiguration { field: "width", .. })
        ));
        assert!(matches!(
            Grid::new(5, 0),
            Err(MapError::InvalidConfiguration { field: "height", .. })
        ));
    }

    #[test]
    fn fresh_grid_is_all_wall() {
        let grid = Grid::new(6, 4).expect("valid dimensions");
        assert_eq!(grid.count(TileKind::Wall), 24);
        assert_eq!(grid.count(TileKind::Floor), 0);
    }

    #[test]
    fn out_of_range_reads_count_as_wall_and_writes_fail() {
        let mut grid = Grid::filled(3, 3, TileKind::Floor).expect("valid dimensions");
        assert_eq!(grid.get(Coord::new(-1, 0)), None);
        assert_eq!(grid.tile_or_wall(Coord::new(3, 1)), TileKind::Wall);
        assert_eq!(grid.tile_or_wall(Coord::new(1, 1)), TileKind::Floor);

        let err = grid.set(Coord::new(1, 3), TileKind::Wall).expect_err("outside the grid");
        assert_eq!(err, MapError::OutOfBounds { coord: Coord::new(1, 3), width: 3, height: 3 });
    }

    #[test]
    fn bulk_write_is_all_or_nothing() {
        let mut grid = Grid::new(3, 3).expect("valid dimensions");
        let tiles = [Coord::new(1, 1), Coord::new(4, 1)];
        let err = grid.set_all(&tiles, TileKind::Floor).expect_err("second tile is off the grid");
        assert_eq!(err, MapError::OutOfBounds { coord: Coord::new(4, 1), width: 3, height: 3 });
        assert_eq!(grid.count(TileKind::Floor), 0);

        grid.set_all(&tiles[..1], TileKind::Floor).expect("inside the grid");
        assert_eq!(grid[Coord::new(1, 1)], TileKind::Floor);
    }

    #[test]
    fn coords_walk_columns_first() {
        let grid = Grid::new(2, 3).expect("valid dimensions");
        let order: Vec<Coord> = grid.coords().collect();
        assert_eq!(
            order,
            vec![
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(0, 2),
                Coord::new(1, 0),
                Coord::new(1, 1),
                Coord::new(1, 2),
            ]
        );
    }

    #[test]
    fn border_detection_matches_outer_ring() {
        let grid = Grid::new(4, 4).expect("valid dimensions");
        let border = grid.coords().filter(|&coord| grid.is_border(coord)).count();
        assert_eq!(border, 12);
        assert!(!grid.is_border(Coord::new(1, 2)));
        assert!(!grid.is_border(Coord::new(-1, 0)));
    }
}
