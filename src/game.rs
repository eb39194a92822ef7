use core::fmt;
use rand::Rng;

use crate::{
    common::{Coordinates, FlagOutcome, GameStatus, GridError, RevealOutcome},
    grid::Grid,
    params::GameParameters,
};

/// A player's move after the opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Reveal(Coordinates),
    Flag(Coordinates),
}

/// What a move did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Safe reveal; `cleared` counts cells uncovered, zero for a repeat.
    Revealed { cleared: usize },
    MineHit,
    Flag(FlagOutcome),
}

/// Errors returned by a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A move was made before the opening reveal.
    NotOpened,
    /// The opening reveal was already made.
    AlreadyOpened,
    /// The game has ended with the given status.
    GameOver(GameStatus),
    Grid(GridError),
}

impl From<GridError> for GameError {
    fn from(err: GridError) -> Self {
        GameError::Grid(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NotOpened => write!(f, "reveal a cell before anything else"),
            GameError::AlreadyOpened => write!(f, "the opening move was already made"),
            GameError::GameOver(status) => write!(f, "game is over ({:?})", status),
            GameError::Grid(e) => write!(f, "{}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}

/// One game: the grid, its parameters and the random source used to seed it.
pub struct Game<R> {
    params: GameParameters,
    grid: Grid,
    rng: R,
}

impl<R: Rng> Game<R> {
    /// Create a game with a covered, mine-free grid.
    pub fn new(params: GameParameters, rng: R) -> Result<Self, GameError> {
        let grid = Grid::new(params.width(), params.height())?;
        Ok(Self { params, grid, rng })
    }

    pub fn params(&self) -> &GameParameters {
        &self.params
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> GameStatus {
        self.grid.status()
    }

    /// Whether the opening move has seeded the grid.
    pub fn is_opened(&self) -> bool {
        self.grid.is_seeded()
    }

    /// Make the first move: seed mines around `at` and reveal the opening.
    pub fn open(&mut self, at: Coordinates) -> Result<GameStatus, GameError> {
        if self.grid.is_seeded() {
            return Err(GameError::AlreadyOpened);
        }
        let mines = self
            .grid
            .seed(at, self.params.frequency(), &mut self.rng)?;
        log::info!(
            "opened at {}: {} mouthbreathers, {} cells revealed",
            at,
            mines,
            self.grid.revealed_count()
        );
        Ok(self.finish_turn())
    }

    /// Apply one move after the opening.
    pub fn play(&mut self, action: Action) -> Result<Outcome, GameError> {
        if !self.grid.is_seeded() {
            return Err(GameError::NotOpened);
        }
        let status = self.grid.status();
        if status != GameStatus::InProgress {
            return Err(GameError::GameOver(status));
        }
        let at = match action {
            Action::Reveal(at) | Action::Flag(at) => at,
        };
        if !self.grid.in_bounds(at) {
            return Err(GridError::OutOfBounds(at).into());
        }

        let outcome = match action {
            Action::Reveal(at) => {
                let before = self.grid.revealed_count();
                match self.grid.reveal(at) {
                    RevealOutcome::MineHit => Outcome::MineHit,
                    RevealOutcome::Safe => Outcome::Revealed {
                        cleared: self.grid.revealed_count() - before,
                    },
                }
            }
            Action::Flag(at) => Outcome::Flag(self.grid.flag(at)),
        };
        self.finish_turn();
        Ok(outcome)
    }

    fn finish_turn(&self) -> GameStatus {
        let status = self.grid.status();
        match status {
            GameStatus::Lost => {
                log::info!("game lost after {} reveals", self.grid.revealed_count())
            }
            GameStatus::Won => log::info!("game won with {} mines", self.grid.mine_count()),
            GameStatus::InProgress => {}
        }
        status
    }
}
