//! Passage carving: an integer line walk between two tiles, stamped with discs of floor.

use crate::types::{Coord, TileKind};

use super::grid::Grid;

pub const DEFAULT_PASSAGE_RADIUS: u8 = 1;

/// Points of the line walk from `from` towards `to`.
///
/// Steps once per iteration along the dominant axis (x wins ties), carrying a
/// gradient error that starts at half the dominant length and nudges the minor
/// axis whenever it reaches that length. The walk yields one point per step
/// and stops before `to` itself, so equal endpoints give an empty path.
pub fn line_path(from: Coord, to: Coord) -> Vec<Coord> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    let inverted = dx.abs() < dy.abs();
    let (longest, shortest, step, gradient_step) = if inverted {
        (dy.abs(), dx.abs(), dy.signum(), dx.signum())
    } else {
        (dx.abs(), dy.abs(), dx.signum(), dy.signum())
    };

    let mut line = Vec::with_capacity(longest as usize);
    let (mut x, mut y) = (from.x, from.y);
    let mut gradient_accumulation = longest / 2;

    for _ in 0..longest {
        line.push(Coord { x, y });

        if inverted {
            y += step;
        } else {
            x += step;
        }

        gradient_accumulation += shortest;
        if gradient_accumulation >= longest {
            if inverted {
                x += gradient_step;
            } else {
                y += gradient_step;
            }
            gradient_accumulation -= longest;
        }
    }

    line
}

/// Sets every in-range cell with `dx*dx + dy*dy <= radius*radius` to floor.
pub fn stamp_disk(grid: &mut Grid, center: Coord, radius: u8) {
    let r = i32::from(radius);
    for dx in -r..=r {
        for dy in -r..=r {
            if dx * dx + dy * dy > r * r {
                continue;
            }
            let target = Coord { x: center.x + dx, y: center.y + dy };
            if grid.in_bounds(target) {
                grid[target] = TileKind::Floor;
            }
        }
    }
}

/// Carves floor along the line walk from `from` to `to`. Touches the grid only.
///
/// The walk is 8-connected and stops short of `to`; a radius of at least 1
/// is needed for the carved floor to join both ends orthogonally.
pub fn carve_passage(grid: &mut Grid, from: Coord, to: Coord, radius: u8) {
    for point in line_path(from, to) {
        stamp_disk(grid, point, radius);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(points: &[(i32, i32)]) -> Vec<Coord> {
        points.iter().map(|&(x, y)| Coord::new(x, y)).collect()
    }

    #[test]
    fn shallow_line_steps_minor_axis_on_accumulated_error() {
        let path = line_path(Coord::new(0, 0), Coord::new(5, 2));
        assert_eq!(path, coords(&[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]));
    }

    #[test]
    fn steep_line_walks_along_y() {
        let path = line_path(Coord::new(0, 0), Coord::new(1, 3));
        assert_eq!(path, coords(&[(0, 0), (0, 1), (1, 2)]));
    }

    #[test]
    fn diagonal_tie_prefers_x_as_dominant_axis() {
        let path = line_path(Coord::new(0, 0), Coord::new(2, 2));
        assert_eq!(path, coords(&[(0, 0), (1, 1)]));
    }

    #[test]
    fn negative_directions_step_backwards() {
        let path = line_path(Coord::new(4, 4), Coord::new(1, 4));
        assert_eq!(path, coords(&[(4, 4), (3, 4), (2, 4)]));

        let path = line_path(Coord::new(3, 3), Coord::new(2, 0));
        assert_eq!(path, coords(&[(3, 3), (3, 2), (2, 1)]));
    }

    #[test]
    fn equal_endpoints_give_an_empty_path() {
        assert!(line_path(Coord::new(7, 7), Coord::new(7, 7)).is_empty());
    }

    #[test]
    fn line_points_are_eight_connected() {
        let path = line_path(Coord::new(2, 9), Coord::new(17, 1));
        for pair in path.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(a.x.abs_diff(b.x) <= 1 && a.y.abs_diff(b.y) <= 1, "{a:?} -> {b:?}");
        }
    }

    #[test]
    fn radius_one_disk_is_a_plus_shape() {
        let mut grid = Grid::new(5, 5).expect("valid dimensions");
        stamp_disk(&mut grid, Coord::new(2, 2), 1);
        assert_eq!(grid.count(TileKind::Floor), 5);
        assert_eq!(grid[Coord::new(1, 1)], TileKind::Wall);
        assert_eq!(grid[Coord::new(2, 1)], TileKind::Floor);
    }

    #[test]
    fn disk_is_clipped_at_the_grid_edge() {
        let mut grid = Grid::new(4, 4).expect("valid dimensions");
        stamp_disk(&mut grid, Coord::new(0, 0), 2);
        // dx, dy in 0..=2 with dx*dx + dy*dy <= 4.
        assert_eq!(grid.count(TileKind::Floor), 6);
    }

    #[test]
    fn carved_passage_covers_both_ends() {
        let mut grid = Grid::new(10, 6).expect("valid dimensions");
        carve_passage(&mut grid, Coord::new(1, 2), Coord::new(8, 3), 1);
        assert_eq!(grid[Coord::new(1, 2)], TileKind::Floor);
        assert_eq!(grid[Coord::new(8, 3)], TileKind::Floor);
    }
}
