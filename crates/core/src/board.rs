//! Board module - manages the game grid
//!
//! The board is a `columns x rows` grid where each cell is either empty or
//! filled with the color of the shape that locked there. Storage is a single
//! flat vector allocated once at construction; the dimensions never change.
//!
//! Coordinates: (x, y) where x is the column (left to right) and y is the row
//! (top to bottom). Signed coordinates are accepted everywhere so callers can
//! probe positions just outside the grid; those are simply out of bounds.

use arrayvec::ArrayVec;

use crate::types::{Cell, Rgb};

/// The game board using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    columns: u16,
    rows: u16,
    /// Flat array of cells, row-major order (y * columns + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(columns: u16, rows: u16) -> Self {
        Self {
            columns,
            rows,
            cells: vec![None; usize::from(columns) * usize::from(rows)],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * usize::from(self.columns) + (x as usize))
    }

    /// Number of columns (board width)
    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// Number of rows (board height)
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is valid (within bounds and empty)
    pub fn is_valid(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i16, y: i16) -> bool {
        x < 0 || x >= self.columns as i16 || y < 0 || y >= self.rows as i16
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= usize::from(self.rows) {
            return false;
        }
        let width = usize::from(self.columns);
        let start = y * width;
        self.cells[start..start + width].iter().all(|cell| cell.is_some())
    }

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    ///
    /// A single lock can complete at most four rows (the height of a shape),
    /// so the result never needs to allocate.
    pub fn clear_full_rows(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared_rows = ArrayVec::new();
        let width = usize::from(self.columns);
        let mut write_y = usize::from(self.rows);

        // Scan from bottom to top
        for read_y in (0..usize::from(self.rows)).rev() {
            if self.is_row_full(read_y) {
                if cleared_rows.try_push(read_y).is_err() {
                    log::warn!("more than four full rows at once; row {read_y} left in place");
                    write_y -= 1;
                    self.move_row(read_y, write_y, width);
                }
            } else {
                write_y -= 1;
                self.move_row(read_y, write_y, width);
            }
        }

        // Clear the remaining rows at the top
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared_rows
    }

    fn move_row(&mut self, from: usize, to: usize, width: usize) {
        if from != to {
            let src_start = from * width;
            self.cells
                .copy_within(src_start..src_start + width, to * width);
        }
    }

    /// Lock cells of one color onto the board
    /// Returns true if successful, false if any cell is out of bounds or occupied
    pub fn lock_cells(&mut self, cells: &[(i16, i16)], color: Rgb) -> bool {
        if !cells.iter().all(|&(x, y)| self.is_valid(x, y)) {
            return false;
        }

        for &(x, y) in cells {
            self.set(x, y, Some(color));
        }

        true
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of filled cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Convert to 2D vector for testing/display
    #[cfg(test)]
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks(usize::from(self.columns))
            .map(|row| row.to_vec())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_COLUMNS, crate::types::DEFAULT_ROWS)
    }
}
