/// Cell is a single grid square identified by its (column, row) coordinate.
/// It carries no identity beyond the coordinate: equal coordinates mean the same cell.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
pub struct Cell {
    pub column: i32,
    pub row: i32,
}

/// Moore neighborhood offsets, counter-clockwise from east in 45° steps.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

impl Cell {
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Cell displaced by (dx, dy). Wraps at the i32 limits so the
    /// neighborhood stays defined for every coordinate.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            column: self.column.wrapping_add(dx),
            row: self.row.wrapping_add(dy),
        }
    }

    /// The eight cells sharing an edge or a corner with this one,
    /// always in `MOORE_OFFSETS` order.
    pub fn neighbors(self) -> [Cell; 8] {
        MOORE_OFFSETS.map(|(dx, dy)| self.offset(dx, dy))
    }
}

impl From<(i32, i32)> for Cell {
    fn from((column, row): (i32, i32)) -> Self {
        Self::new(column, row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_moore(cell: Cell) {
        let neighbors = cell.neighbors();
        let unique: HashSet<_> = neighbors.iter().copied().collect();
        assert_eq!(unique.len(), 8, "neighbors of {cell:?} must be distinct");

        for n in neighbors {
            let dx = (n.column - cell.column).abs();
            let dy = (n.row - cell.row).abs();
            assert!(dx <= 1 && dy <= 1, "{n:?} is not adjacent to {cell:?}");
            assert!(dx == 1 || dy == 1, "{n:?} equals {cell:?}");
        }
    }

    #[test]
    fn test_moore_neighborhood_at_origin() {
        assert_moore(Cell::new(0, 0));
    }

    #[test]
    fn test_moore_neighborhood_negative_coordinates() {
        assert_moore(Cell::new(-17, -3));
        assert_moore(Cell::new(40, -80));
    }

    #[test]
    fn test_neighbor_order_is_fixed() {
        let n = Cell::new(5, 5).neighbors();
        assert_eq!(n[0], Cell::new(6, 5));
        assert_eq!(n[2], Cell::new(5, 6));
        assert_eq!(n[4], Cell::new(4, 5));
        assert_eq!(n[6], Cell::new(5, 4));
        assert_eq!(Cell::new(5, 5).neighbors(), n);
    }

    #[test]
    fn test_offsets_match_rounded_angles() {
        for (j, &(dx, dy)) in MOORE_OFFSETS.iter().enumerate() {
            let angle = std::f64::consts::FRAC_PI_4 * j as f64;
            assert_eq!(angle.cos().round() as i32, dx);
            assert_eq!(angle.sin().round() as i32, dy);
        }
    }

    #[test]
    fn test_neighbors_defined_at_extremes() {
        let corner = Cell::new(i32::MAX, i32::MIN);
        let unique: HashSet<_> = corner.neighbors().into_iter().collect();
        assert_eq!(unique.len(), 8);
    }
}
