use crate::domain::{Cell, CellSet};

use super::GridConfig;

/// Which pointer button is held during a drag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointerButton {
    #[default]
    None,
    /// Paints cells
    Primary,
    /// Erases cells
    Secondary,
}

/// A change made to the cell set by the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edit {
    Painted(Cell),
    Erased(Cell),
}

/// InteractionController turns pointer movement into cell edits.
///
/// Each (cell, button) pair is acted on once when it is entered; lingering in
/// the same square does nothing until the pointer leaves or the button changes.
#[derive(Clone, Copy, Debug, Default)]
pub struct InteractionController {
    last: Option<(Cell, PointerButton)>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grid square under viewport point (x, y). y grows downward on screen,
    /// rows grow upward, so row 0 is the bottom of the viewport.
    pub fn cell_at(x: f32, y: f32, grid: &GridConfig) -> Cell {
        let size = grid.cell_size();
        Cell::new(
            (x / size).floor() as i32,
            ((grid.height() - y) / size).floor() as i32,
        )
    }

    pub fn pointer_drag(
        &mut self,
        cells: &mut CellSet,
        grid: &GridConfig,
        x: f32,
        y: f32,
        button: PointerButton,
    ) -> Option<Edit> {
        if button == PointerButton::None {
            self.last = None;
            return None;
        }

        let cell = Self::cell_at(x, y, grid);
        if self.last == Some((cell, button)) {
            return None;
        }
        self.last = Some((cell, button));

        match button {
            PointerButton::Primary if cells.insert(cell) => Some(Edit::Painted(cell)),
            PointerButton::Secondary if cells.remove(cell) => Some(Edit::Erased(cell)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> GridConfig {
        // 20 px squares, 400 px tall
        GridConfig::new(20, 400.0, 400.0)
    }

    #[test]
    fn test_cell_at_flips_y() {
        let grid = grid();
        assert_eq!(InteractionController::cell_at(0.0, 399.0, &grid), Cell::new(0, 0));
        assert_eq!(InteractionController::cell_at(45.0, 0.5, &grid), Cell::new(2, 19));
    }

    #[test]
    fn test_cell_at_floors_negative() {
        let grid = grid();
        assert_eq!(InteractionController::cell_at(-1.0, 401.0, &grid), Cell::new(-1, -1));
    }

    #[test]
    fn test_primary_paints_secondary_erases() {
        let grid = grid();
        let mut cells = CellSet::new();
        let mut input = InteractionController::new();

        let painted = input.pointer_drag(&mut cells, &grid, 10.0, 390.0, PointerButton::Primary);
        assert_eq!(painted, Some(Edit::Painted(Cell::new(0, 0))));
        assert!(cells.contains(Cell::new(0, 0)));

        let erased = input.pointer_drag(&mut cells, &grid, 10.0, 390.0, PointerButton::Secondary);
        assert_eq!(erased, Some(Edit::Erased(Cell::new(0, 0))));
        assert!(cells.is_empty());
    }

    #[test]
    fn test_no_effect_without_button() {
        let grid = grid();
        let mut cells = CellSet::new();
        let mut input = InteractionController::new();
        assert_eq!(input.pointer_drag(&mut cells, &grid, 10.0, 10.0, PointerButton::None), None);
        assert!(cells.is_empty());
    }

    #[test]
    fn test_drag_paints_each_entered_cell() {
        let grid = grid();
        let mut cells = CellSet::new();
        let mut input = InteractionController::new();
        for x in [1.0, 5.0, 21.0, 25.0, 41.0] {
            input.pointer_drag(&mut cells, &grid, x, 390.0, PointerButton::Primary);
        }
        let expected: CellSet = (0..3).map(|c| Cell::new(c, 0)).collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn test_painting_live_cell_is_noop() {
        let grid = grid();
        let mut cells: CellSet = [Cell::new(0, 0)].into_iter().collect();
        let mut input = InteractionController::new();
        assert_eq!(input.pointer_drag(&mut cells, &grid, 1.0, 399.0, PointerButton::Primary), None);
        assert_eq!(cells.len(), 1);
    }

    #[test]
    fn test_release_allows_repaint_of_same_cell() {
        let grid = grid();
        let mut cells = CellSet::new();
        let mut input = InteractionController::new();
        input.pointer_drag(&mut cells, &grid, 1.0, 399.0, PointerButton::Primary);
        cells.clear();
        input.pointer_drag(&mut cells, &grid, 1.0, 399.0, PointerButton::None);
        let again = input.pointer_drag(&mut cells, &grid, 1.0, 399.0, PointerButton::Primary);
        assert_eq!(again, Some(Edit::Painted(Cell::new(0, 0))));
    }
}
