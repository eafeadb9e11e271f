// simulation.rs - User-paced generation stepping

use log::{debug, info};

use crate::display::KeyEvent;
use crate::grid::Grid;
use crate::rules::next_generation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimState {
    Running,
    /// Every cell is dead.
    Ended,
    QuitRequested,
}

#[derive(Debug)]
pub struct Simulation {
    grid: Grid,
    generation: u64,
    state: SimState,
}

impl Simulation {
    /// Takes ownership of the seed. An empty seed is `Ended` immediately.
    pub fn new(seed: Grid) -> Self {
        let state = if seed.is_any_alive() { SimState::Running } else { SimState::Ended };
        info!("simulation starts with {} live cells", seed.live_count());
        Self { grid: seed, generation: 0, state }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    /// One key, one generation. `Quit` stops without advancing; any other
    /// key advances. Keys after the run has stopped are ignored.
    pub fn step(&mut self, key: KeyEvent) -> SimState {
        if self.state != SimState::Running {
            return self.state;
        }
        if key == KeyEvent::Quit {
            debug!("quit requested at generation {}", self.generation);
            self.state = SimState::QuitRequested;
            return self.state;
        }

        self.grid = next_generation(&self.grid);
        self.generation += 1;
        if !self.grid.is_any_alive() {
            info!("life died out after {} generations", self.generation);
            self.state = SimState::Ended;
        }
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn blinker() -> Grid {
        let mut grid = Grid::new(3, 3);
        for col in 0..3 {
            grid.set(1, col, true);
        }
        grid
    }

    #[test]
    fn empty_seed_ends_at_once() {
        let sim = Simulation::new(Grid::new(4, 4));
        assert_eq!(sim.state(), SimState::Ended);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn any_key_advances() {
        let mut sim = Simulation::new(blinker());
        assert_eq!(sim.step(KeyEvent::Other), SimState::Running);
        assert_eq!(sim.step(KeyEvent::Toggle), SimState::Running);
        assert_eq!(sim.generation(), 2);
        assert_eq!(sim.grid(), &blinker());
    }

    #[test]
    fn quit_keeps_current_generation() {
        let mut sim = Simulation::new(blinker());
        sim.step(KeyEvent::Confirm);
        let before = sim.grid().clone();

        assert_eq!(sim.step(KeyEvent::Quit), SimState::QuitRequested);
        assert_eq!(sim.grid(), &before);
        assert_eq!(sim.generation(), 1);

        // Stopped runs stay stopped
        assert_eq!(sim.step(KeyEvent::Other), SimState::QuitRequested);
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn ends_exactly_when_grid_dies() {
        // Two adjacent cells: each has one neighbor, both die in one step
        let mut seed = Grid::new(3, 3);
        seed.set(0, 0, true);
        seed.set(0, 1, true);

        let mut sim = Simulation::new(seed);
        assert_eq!(sim.state(), SimState::Running);
        assert_eq!(sim.step(KeyEvent::Other), SimState::Ended);
        assert!(!sim.grid().is_any_alive());
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn still_life_runs_until_quit() {
        let mut block = Grid::new(4, 4);
        for (r, c) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
            block.set(r, c, true);
        }
        let mut sim = Simulation::new(block);
        for _ in 0..50 {
            assert_eq!(sim.step(KeyEvent::Other), SimState::Running);
        }
        assert_eq!(sim.step(KeyEvent::Quit), SimState::QuitRequested);
    }
}
