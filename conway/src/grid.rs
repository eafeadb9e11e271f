// grid.rs - Board storage for Conway's Game of Life

use thiserror::Error;

// One row and two character columns of margin on every side
const MARGIN_ROWS: usize = 2;
const MARGIN_COLS: usize = 2;
const CHARS_PER_CELL: usize = 2;

/// Largest board side a viewport can produce.
pub const MAX_SIDE: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfRange { row: usize, col: usize, rows: usize, cols: usize },
}

/// Display area measured in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub height: usize,
    pub width: usize,
}

impl Viewport {
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }
}

/// Fixed-size board of live/dead cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates an all-dead grid. Zero dimensions are raised to 1.
    ///
    /// # Panics
    /// If `rows * cols` overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        let Some(len) = rows.checked_mul(cols) else {
            panic!("{rows}x{cols} grid does not fit in memory");
        };
        Self { rows, cols, cells: vec![false; len] }
    }

    /// Sizes an empty grid to fit the viewport: `height - 2` rows and
    /// `width / 2 - 2` columns, never smaller than 1x1 and never larger
    /// than [`MAX_SIDE`] on either side.
    pub fn for_viewport(viewport: Viewport) -> Self {
        let rows = viewport.height.saturating_sub(MARGIN_ROWS).min(MAX_SIDE);
        let cols = (viewport.width / CHARS_PER_CELL).saturating_sub(MARGIN_COLS).min(MAX_SIDE);
        Self::new(rows, cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn check(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row < self.rows && col < self.cols {
            Ok(())
        } else {
            Err(GridError::OutOfRange { row, col, rows: self.rows, cols: self.cols })
        }
    }

    fn index(&self, row: usize, col: usize) -> usize {
        if let Err(err) = self.check(row, col) {
            panic!("{err}");
        }
        row * self.cols + col
    }

    /// # Panics
    /// If `(row, col)` is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let idx = self.index(row, col);
        self.cells[idx] = alive;
    }

    pub fn toggle(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        self.cells[idx] = !self.cells[idx];
    }

    pub fn is_any_alive(&self) -> bool {
        self.cells.iter().any(|&alive| alive)
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.cols)
    }
}
