// editor.rs - Cursor-driven painting of the seed grid

use log::{debug, trace};

use crate::display::{Cursor, KeyEvent};
use crate::grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditStatus {
    Editing,
    /// Seed is done; take it with [`SeedEditor::into_grid`].
    Seeded,
    Aborted,
}

#[derive(Debug)]
pub struct SeedEditor {
    grid: Grid,
    cursor: Cursor,
}

impl SeedEditor {
    pub fn new(grid: Grid) -> Self {
        Self { grid, cursor: Cursor::default() }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Hands the seed over by value, ending the edit.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> EditStatus {
        let Cursor { row, col } = self.cursor;
        match key {
            KeyEvent::Up => self.cursor.row = row.saturating_sub(1),
            KeyEvent::Down => self.cursor.row = (row + 1).min(self.grid.rows() - 1),
            KeyEvent::Left => self.cursor.col = col.saturating_sub(1),
            KeyEvent::Right => self.cursor.col = (col + 1).min(self.grid.cols() - 1),
            KeyEvent::Toggle => {
                self.grid.toggle(row, col);
                trace!("toggled ({row}, {col}) -> {}", self.grid.get(row, col));
            }
            KeyEvent::Confirm => {
                debug!("seed finished with {} live cells", self.grid.live_count());
                return EditStatus::Seeded;
            }
            KeyEvent::Quit => {
                debug!("seed editing aborted");
                return EditStatus::Aborted;
            }
            KeyEvent::Restart | KeyEvent::Other => {}
        }
        EditStatus::Editing
    }
}
