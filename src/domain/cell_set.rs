use std::collections::HashSet;
use std::collections::hash_set;

use rand::Rng;
use rayon::prelude::*;

use super::{BirthWindow, Cell};

/// CellSet owns the sparse set of live cells.
/// Only live coordinates are stored, so the grid has no fixed extent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellSet {
    cells: HashSet<Cell>,
}

impl CellSet {
    /// Create an empty set (no live cells)
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Membership test, O(1) expected
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Mark a cell live. Returns false if it already was.
    pub fn insert(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    /// Mark a cell dead. Returns false if it already was.
    pub fn remove(&mut self, cell: Cell) -> bool {
        self.cells.remove(&cell)
    }

    /// Moore neighborhood of `cell`, whether or not it is live
    pub fn neighbors(&self, cell: Cell) -> [Cell; 8] {
        cell.neighbors()
    }

    /// Count of live Moore neighbors, in [0, 8]
    pub fn population(&self, cell: Cell) -> u8 {
        cell.neighbors()
            .into_iter()
            .filter(|n| self.contains(*n))
            .count() as u8
    }

    pub fn iter(&self) -> hash_set::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Parallel iteration over live cells
    pub fn par_iter(&self) -> rayon::collections::hash_set::Iter<'_, Cell> {
        self.cells.par_iter()
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Replace the contents with random cells inside `window`,
    /// each alive with probability `fill`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, window: BirthWindow, fill: f64, rng: &mut R) {
        let fill = if fill.is_nan() { 0.0 } else { fill.clamp(0.0, 1.0) };
        self.cells.clear();
        for row in window.min..=window.max {
            for column in window.min..=window.max {
                if rng.random_bool(fill) {
                    self.cells.insert(Cell::new(column, row));
                }
            }
        }
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<Cell> for CellSet {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = &'a Cell;
    type IntoIter = hash_set::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn set(cells: &[(i32, i32)]) -> CellSet {
        cells.iter().map(|&c| Cell::from(c)).collect()
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut cells = CellSet::new();
        assert!(cells.insert(Cell::new(1, 2)));
        assert!(!cells.insert(Cell::new(1, 2)));
        assert_eq!(cells.len(), 1);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cells = set(&[(0, 0)]);
        assert!(cells.remove(Cell::new(0, 0)));
        assert!(!cells.remove(Cell::new(0, 0)));
        assert!(cells.is_empty());
    }

    #[test]
    fn test_population_counts_live_neighbors_only() {
        let cells = set(&[(0, 0), (1, 0), (2, 0), (5, 5)]);
        assert_eq!(cells.population(Cell::new(1, 1)), 3);
        assert_eq!(cells.population(Cell::new(1, 0)), 2);
        assert_eq!(cells.population(Cell::new(5, 5)), 0);
    }

    #[test]
    fn test_population_full_ring() {
        let center = Cell::new(-4, 9);
        let cells: CellSet = center.neighbors().into_iter().collect();
        assert_eq!(cells.population(center), 8);
    }

    #[test]
    fn test_randomize_stays_in_window() {
        let mut rng = StdRng::seed_from_u64(7);
        let window = BirthWindow::new(0, 20);
        let mut cells = set(&[(-50, -50)]);
        cells.randomize(window, 0.5, &mut rng);

        assert!(!cells.is_empty());
        assert!(cells.iter().all(|c| window.contains(*c)));
    }

    #[test]
    fn test_randomize_fill_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let window = BirthWindow::new(0, 9);
        let mut cells = CellSet::new();

        cells.randomize(window, 1.5, &mut rng);
        assert_eq!(cells.len(), 100);

        cells.randomize(window, -1.0, &mut rng);
        assert!(cells.is_empty());
    }
}
