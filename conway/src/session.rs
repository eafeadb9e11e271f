// session.rs - Welcome, edit, simulate, restart: one game process

use log::{debug, info};

use crate::display::{Display, KeyEvent};
use crate::editor::{EditStatus, SeedEditor};
use crate::grid::{Grid, Viewport};
use crate::simulation::{SimState, Simulation};

pub const WELCOME: &str = "\
Welcome to the Game of Life.

Rules:
    Live and dead cells sit on the board.
    A cell with three live neighbours is alive on the next step.
    A cell with two live neighbours stays as it is.
    Every other cell dies or stays dead.

Next you paint the first living cells:
    <Up> <Down> <Left> <Right>   move the cursor
    <A>                          toggle the cell under the cursor
    <S>                          start the simulation
    <Q>                          quit

During the simulation any key advances one generation, <Q> stops.

Press any key to continue.";

pub const FINISHED: &str = "Life has died out. Press R for new life or Q to quit.";

/// Whether the caller should keep feeding keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug)]
pub enum Phase {
    Welcome,
    Editing(SeedEditor),
    Running(Simulation),
    /// Holds the last board so it can stay visible under the prompt.
    Finished(Grid),
    Exited,
}

#[derive(Debug)]
pub struct Session {
    viewport: Viewport,
    phase: Phase,
}

impl Session {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport, phase: Phase::Welcome }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Only the next freshly created grid picks up the new size.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            debug!("viewport now {}x{}", viewport.height, viewport.width);
            self.viewport = viewport;
        }
    }

    fn start_editing(&self) -> Phase {
        let grid = Grid::for_viewport(self.viewport);
        info!("new seed grid {}x{}", grid.rows(), grid.cols());
        Phase::Editing(SeedEditor::new(grid))
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        let phase = std::mem::replace(&mut self.phase, Phase::Exited);
        self.phase = match phase {
            Phase::Welcome => self.start_editing(),
            Phase::Editing(mut editor) => match editor.handle_key(key) {
                EditStatus::Editing => Phase::Editing(editor),
                EditStatus::Seeded => Self::simulate(editor.into_grid()),
                EditStatus::Aborted => Phase::Finished(editor.into_grid()),
            },
            Phase::Running(mut sim) => match sim.step(key) {
                SimState::Running => Phase::Running(sim),
                SimState::Ended | SimState::QuitRequested => Phase::Finished(sim.grid().clone()),
            },
            Phase::Finished(grid) => match key {
                KeyEvent::Restart => self.start_editing(),
                KeyEvent::Quit => {
                    info!("exiting");
                    Phase::Exited
                }
                _ => Phase::Finished(grid),
            },
            Phase::Exited => Phase::Exited,
        };

        match self.phase {
            Phase::Exited => Flow::Exit,
            _ => Flow::Continue,
        }
    }

    fn simulate(seed: Grid) -> Phase {
        let sim = Simulation::new(seed);
        match sim.state() {
            SimState::Running => Phase::Running(sim),
            SimState::Ended | SimState::QuitRequested => Phase::Finished(sim.grid().clone()),
        }
    }

    /// Draws the current phase through the collaborator.
    pub fn present(&self, display: &mut impl Display) -> anyhow::Result<()> {
        match &self.phase {
            Phase::Welcome => display.show_message(WELCOME),
            Phase::Editing(editor) => display.render(editor.grid(), Some(editor.cursor())),
            Phase::Running(sim) => {
                display.render(sim.grid(), None)?;
                display.show_status(sim.generation(), sim.grid().live_count())
            }
            Phase::Finished(grid) => {
                display.render(grid, None)?;
                display.show_message(FINISHED)
            }
            Phase::Exited => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;
    use crate::display::KeyEvent::*;

    fn session(keys: &[KeyEvent]) -> Session {
        let mut session = Session::new(Viewport::new(5, 10));
        for &key in keys {
            assert_eq!(session.handle_key(key), Flow::Continue, "after {key:?}");
        }
        session
    }

    #[test]
    fn any_key_leaves_welcome() {
        let session = session(&[Other]);
        match session.phase() {
            Phase::Editing(editor) => {
                // 5 - 2 rows, 10 / 2 - 2 cols
                assert_eq!((editor.grid().rows(), editor.grid().cols()), (3, 3));
            }
            other => panic!("expected editing, got {other:?}"),
        }
    }

    #[test]
    fn empty_seed_goes_to_prompt() {
        let session = session(&[Other, Confirm]);
        assert!(matches!(session.phase(), Phase::Finished(grid) if !grid.is_any_alive()));
    }

    #[test]
    fn abort_goes_to_prompt_without_simulating() {
        let session = session(&[Other, Toggle, Quit]);
        match session.phase() {
            Phase::Finished(grid) => assert!(grid.get(0, 0)),
            other => panic!("expected finished, got {other:?}"),
        }
    }

    #[test]
    fn blinker_runs_until_quit() {
        let session = session(&[Other, Down, Toggle, Right, Toggle, Right, Toggle, Confirm]);
        let Phase::Running(sim) = session.phase() else {
            panic!("expected running, got {:?}", session.phase());
        };
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.grid().live_count(), 3);

        let mut session = session;
        session.handle_key(Other);
        let Phase::Running(sim) = session.phase() else { panic!("blinker died") };
        assert!(sim.grid().get(0, 1) && sim.grid().get(1, 1) && sim.grid().get(2, 1));

        session.handle_key(Quit);
        assert!(matches!(session.phase(), Phase::Finished(_)));
    }

    #[test]
    fn prompt_ignores_other_keys() {
        let session = session(&[Other, Confirm, Other, Up, Toggle, Confirm]);
        assert!(matches!(session.phase(), Phase::Finished(_)));
    }

    #[test]
    fn restart_uses_latest_viewport() {
        let mut session = session(&[Other, Toggle, Quit]);
        session.set_viewport(Viewport::new(12, 30));
        assert_eq!(session.handle_key(Restart), Flow::Continue);
        match session.phase() {
            Phase::Editing(editor) => {
                assert_eq!((editor.grid().rows(), editor.grid().cols()), (10, 13));
                assert!(!editor.grid().is_any_alive());
            }
            other => panic!("expected editing, got {other:?}"),
        }
    }

    #[test]
    fn quit_at_prompt_exits() {
        let mut session = session(&[Other, Quit]);
        assert_eq!(session.handle_key(Quit), Flow::Exit);
        assert!(matches!(session.phase(), Phase::Exited));
        assert_eq!(session.handle_key(Restart), Flow::Exit);
    }
}
