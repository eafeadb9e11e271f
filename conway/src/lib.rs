//! Conway's Game of Life on a bounded board, with a cursor-driven seed
//! editor and keypress-paced stepping.
//!
//! The crate knows nothing about windows or terminals. Frontends implement
//! [`Display`] (and [`KeySource`] when they can block for input) and drive a
//! [`Session`].

pub mod config;
pub mod display;
pub mod editor;
pub mod grid;
pub mod rules;
pub mod session;
pub mod simulation;

pub use config::Config;
pub use display::{Cursor, Display, KeyEvent, KeySource};
pub use editor::{EditStatus, SeedEditor};
pub use grid::{Grid, GridError, Viewport};
pub use rules::{count_live_neighbors, next_generation};
pub use session::{Flow, Phase, Session};
pub use simulation::{SimState, Simulation};

use anyhow::Context;
use log::info;

/// Blocking driver: present, wait for one key, apply it, until the player
/// quits from the end-of-life prompt.
pub fn run<T: Display + KeySource>(io: &mut T, viewport: Viewport) -> anyhow::Result<()> {
    let mut session = Session::new(viewport);
    loop {
        session.present(io).context("failed to draw the board")?;
        let key = io.read_key().context("failed to read a key")?;
        if session.handle_key(key) == Flow::Exit {
            info!("session finished");
            return Ok(());
        }
    }
}
