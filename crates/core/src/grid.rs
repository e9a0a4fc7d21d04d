//! Grid module - the well's locked cells
//!
//! The grid is 10 columns x 22 rows stored as a flat array, row-major with row 0
//! at the bottom (`index = y * WIDTH + x`). Every cell holds a [`ShapeKind`];
//! `Empty` means unoccupied.

use arrayvec::ArrayVec;

use crate::types::{ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the grid
pub const GRID_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by one compaction pass, bottom to top
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [ShapeKind; GRID_SIZE],
}

impl Grid {
    /// Create an all-empty grid
    pub fn new() -> Self {
        Self {
            cells: [ShapeKind::Empty; GRID_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if Self::in_bounds(x, y) {
            Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
        } else {
            None
        }
    }

    pub fn in_bounds(x: i8, y: i8) -> bool {
        x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get the cell at (x, y), or None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<ShapeKind> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set the cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, kind: ShapeKind) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = kind;
                true
            }
            None => false,
        }
    }

    /// In bounds and unoccupied
    pub fn is_vacant(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(ShapeKind::Empty))
    }

    /// In bounds and occupied
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(kind) if !kind.is_empty())
    }

    /// Cells of row `y`, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `y` is not below the board height. [`Grid::is_row_full`] and
    /// [`Grid::get`] are the checked alternatives.
    pub fn row(&self, y: usize) -> &[ShapeKind] {
        assert!(
            y < BOARD_HEIGHT as usize,
            "row {} is outside the {}-row grid",
            y,
            BOARD_HEIGHT
        );
        let width = BOARD_WIDTH as usize;
        &self.cells[y * width..(y + 1) * width]
    }

    /// A row is full when none of its cells is empty
    pub fn is_row_full(&self, y: usize) -> bool {
        y < BOARD_HEIGHT as usize && self.row(y).iter().all(|cell| !cell.is_empty())
    }

    /// Remove every full row and compact the rows above it downward.
    ///
    /// Two pointers walk up from the bottom: `read_y` visits each original row
    /// exactly once and `write_y` is where the next surviving row lands, so
    /// adjacent or scattered full rows are all removed in one pass. The rows
    /// vacated at the top are reset to empty.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = 0usize;

        for read_y in 0..BOARD_HEIGHT as usize {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
                continue;
            }
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
            write_y += 1;
        }

        self.cells[write_y * width..].fill(ShapeKind::Empty);
        cleared
    }

    /// Number of occupied rows (rows with at least one filled cell)
    pub fn occupied_rows(&self) -> usize {
        (0..BOARD_HEIGHT as usize)
            .filter(|&y| self.row(y).iter().any(|cell| !cell.is_empty()))
            .count()
    }

    pub fn cells(&self) -> &[ShapeKind] {
        &self.cells
    }

    pub fn clear(&mut self) {
        self.cells.fill(ShapeKind::Empty);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_row(grid: &mut Grid, y: i8, kind: ShapeKind) {
        for x in 0..BOARD_WIDTH as i8 {
            grid.set(x, y, kind);
        }
    }

    #[test]
    fn test_grid_index_calculation() {
        assert_eq!(Grid::index(0, 0), Some(0));
        assert_eq!(Grid::index(9, 0), Some(9));
        assert_eq!(Grid::index(0, 1), Some(10));
        assert_eq!(Grid::index(9, 21), Some(219));
        assert_eq!(Grid::index(-1, 0), None);
        assert_eq!(Grid::index(10, 0), None);
        assert_eq!(Grid::index(0, 22), None);
    }

    #[test]
    fn test_clear_keeps_rows_below() {
        let mut grid = Grid::new();
        grid.set(3, 0, ShapeKind::T);
        fill_row(&mut grid, 1, ShapeKind::Line);
        grid.set(4, 2, ShapeKind::S);

        let cleared = grid.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[1]);
        assert_eq!(grid.get(3, 0), Some(ShapeKind::T));
        assert_eq!(grid.get(4, 1), Some(ShapeKind::S));
        assert_eq!(grid.get(4, 2), Some(ShapeKind::Empty));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_row_out_of_range_panics() {
        let grid = Grid::new();
        grid.row(BOARD_HEIGHT as usize);
    }

    #[test]
    fn test_clear_top_row_leaves_empty_top() {
        let mut grid = Grid::new();
        fill_row(&mut grid, 21, ShapeKind::Z);

        let cleared = grid.clear_full_rows();
        assert_eq!(cleared.len(), 1);
        assert!(grid.row(21).iter().all(|c| c.is_empty()));
    }

    #[test]
    fn test_clear_many_rows_beyond_four() {
        let mut grid = Grid::new();
        for y in 0..6 {
            fill_row(&mut grid, y, ShapeKind::Square);
        }
        grid.set(0, 6, ShapeKind::L);

        let cleared = grid.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(grid.get(0, 0), Some(ShapeKind::L));
        assert_eq!(grid.occupied_rows(), 1);
    }

    mod prop {
        use super::fill_row;
        use crate::grid::{Grid, GRID_SIZE};
        use crate::types::{ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn clearing_keeps_surviving_rows_in_order(
                full in prop::collection::vec(any::<bool>(), BOARD_HEIGHT as usize),
                marks in prop::collection::vec(0i8..BOARD_WIDTH as i8, BOARD_HEIGHT as usize),
            ) {
                let mut grid = Grid::new();
                let mut expected = Vec::new();
                for y in 0..BOARD_HEIGHT as usize {
                    if full[y] {
                        fill_row(&mut grid, y as i8, ShapeKind::T);
                    } else {
                        grid.set(marks[y], y as i8, ShapeKind::L);
                        expected.push(marks[y]);
                    }
                }

                let cleared = grid.clear_full_rows();
                prop_assert_eq!(cleared.len(), full.iter().filter(|&&f| f).count());
                prop_assert_eq!(grid.cells().len(), GRID_SIZE);

                for y in 0..BOARD_HEIGHT as usize {
                    let row = grid.row(y);
                    match expected.get(y) {
                        Some(&x) => {
                            prop_assert_eq!(row[x as usize], ShapeKind::L);
                            prop_assert_eq!(row.iter().filter(|c| !c.is_empty()).count(), 1);
                        }
                        None => prop_assert!(row.iter().all(|c| c.is_empty())),
                    }
                }
            }
        }
    }
}
