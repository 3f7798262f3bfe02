//! Flat vertex geometry for the two draw primitives.
//!
//! Output is a sequence of interleaved `x, y` f32 pairs in a y-up coordinate
//! system with the origin at the bottom-left of the viewport.

use crate::domain::{Cell, CellSet};

/// Floats per vertex (x, y)
pub const COMPONENTS: usize = 2;
/// One line segment, two endpoints
pub const FLOATS_PER_LINE: usize = 2 * COMPONENTS;
/// Two triangles sharing a diagonal
pub const FLOATS_PER_QUAD: usize = 6 * COMPONENTS;
/// Stand-in for an empty cell buffer so the sink never gets a zero-size upload
pub const EMPTY_PLACEHOLDER: [f32; 2] = [0.0, 0.0];

/// One horizontal and one vertical line per division, offset by `i * cell_size`.
/// Always `8 * density` floats.
pub fn build_grid_lines(density: u32, cell_size: f32, width: f32, height: f32) -> Vec<f32> {
    let mut vertices = Vec::with_capacity(density as usize * 2 * FLOATS_PER_LINE);
    for i in 0..density {
        let offset = i as f32 * cell_size;
        vertices.extend_from_slice(&[0.0, offset, width, offset]);
        vertices.extend_from_slice(&[offset, 0.0, offset, height]);
    }
    vertices
}

/// A filled square per live cell, `12 * cells.len()` floats,
/// or `EMPTY_PLACEHOLDER` when nothing is alive.
pub fn build_cell_quads(cells: &CellSet, cell_size: f32) -> Vec<f32> {
    if cells.is_empty() {
        return EMPTY_PLACEHOLDER.to_vec();
    }

    // Hash order depends on insertion history; sort so equal sets give equal buffers
    let mut sorted: Vec<Cell> = cells.iter().copied().collect();
    sorted.sort_unstable();

    let mut vertices = Vec::with_capacity(sorted.len() * FLOATS_PER_QUAD);
    for cell in sorted {
        let x = cell.column as f32 * cell_size;
        let y = cell.row as f32 * cell_size;
        let (right, top) = (x + cell_size, y + cell_size);
        vertices.extend_from_slice(&[
            x, y, right, y, right, top, // lower-right triangle
            right, top, x, top, x, y, // upper-left triangle
        ]);
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_line_count_depends_on_density_only() {
        for density in [1, 20, 50, 80] {
            assert_eq!(build_grid_lines(density, 10.0, 500.0, 300.0).len(), 8 * density as usize);
            assert_eq!(build_grid_lines(density, 3.5, 100.0, 900.0).len(), 8 * density as usize);
        }
    }

    #[test]
    fn test_grid_lines_span_viewport() {
        let lines = build_grid_lines(2, 25.0, 50.0, 40.0);
        assert_eq!(
            lines,
            vec![
                0.0, 0.0, 50.0, 0.0, 0.0, 0.0, 0.0, 40.0, // i = 0
                0.0, 25.0, 50.0, 25.0, 25.0, 0.0, 25.0, 40.0, // i = 1
            ]
        );
    }

    #[test]
    fn test_empty_cells_emit_placeholder() {
        assert_eq!(build_cell_quads(&CellSet::new(), 10.0), vec![0.0, 0.0]);
    }

    #[test]
    fn test_quad_size_per_cell() {
        let cells: CellSet = (0..7).map(|i| Cell::new(i, -i)).collect();
        assert_eq!(build_cell_quads(&cells, 4.0).len(), 12 * 7);
    }

    #[test]
    fn test_quad_position_and_side() {
        let cells: CellSet = [Cell::new(2, 3)].into_iter().collect();
        let quad = build_cell_quads(&cells, 10.0);
        assert_eq!(
            quad,
            vec![20.0, 30.0, 30.0, 30.0, 30.0, 40.0, 30.0, 40.0, 20.0, 40.0, 20.0, 30.0]
        );
    }

    #[test]
    fn test_quads_are_deterministic() {
        let a: CellSet = [(5, 1), (0, 0), (-3, 2)].into_iter().map(Cell::from).collect();
        let b: CellSet = [(-3, 2), (5, 1), (0, 0)].into_iter().map(Cell::from).collect();
        assert_eq!(build_cell_quads(&a, 8.0), build_cell_quads(&b, 8.0));
    }
}
