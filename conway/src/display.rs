// display.rs - The narrow interface the game draws and reads keys through

use crate::grid::Grid;

/// Logical keys. Mapping raw input onto these is the frontend's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    Up,
    Down,
    Left,
    Right,
    Toggle,
    Confirm,
    Quit,
    Restart,
    Other,
}

/// Board position of the editing cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

pub trait Display {
    /// Draws the board. Live and dead cells must look different, and the
    /// cursor, when given, gets a third style drawn over its cell.
    fn render(&mut self, grid: &Grid, cursor: Option<Cursor>) -> anyhow::Result<()>;

    /// Welcome text or the end-of-life prompt.
    fn show_message(&mut self, text: &str) -> anyhow::Result<()>;

    fn show_status(&mut self, generation: u64, population: usize) -> anyhow::Result<()>;
}

pub trait KeySource {
    /// Blocks until one logical key is available.
    fn read_key(&mut self) -> anyhow::Result<KeyEvent>;
}
