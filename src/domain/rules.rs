use serde::{Deserialize, Serialize};

use super::Cell;

/// Conway's Game of Life (B3/S23)
/// A live cell survives with 2 or 3 live neighbors,
/// a dead cell is born with exactly 3.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConwayRule;

impl ConwayRule {
    pub const fn survives(self, population: u8) -> bool {
        1 < population && population < 4
    }

    pub const fn is_born(self, population: u8) -> bool {
        population == 3
    }
}

/// Square coordinate window that births are confined to.
/// Both bounds are inclusive and apply to column and row alike.
/// Live cells outside the window are never clipped; they just can't reproduce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthWindow {
    pub min: i32,
    pub max: i32,
}

impl BirthWindow {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub const fn contains(self, cell: Cell) -> bool {
        self.min <= cell.column
            && cell.column <= self.max
            && self.min <= cell.row
            && cell.row <= self.max
    }
}

impl Default for BirthWindow {
    fn default() -> Self {
        Self::new(0, 80)
    }
}
