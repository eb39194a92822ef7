//! Common types: coordinates, operation outcomes and grid errors.

use core::fmt;

/// A position on the grid, 1-based: `x` is the column, `y` the storage row
/// (row 1 is the bottom row when displayed in the standard order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinates {
    pub x: usize,
    pub y: usize,
}

impl Coordinates {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Result of revealing a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Nothing exploded. Also returned for no-op reveals.
    Safe,
    /// The cell held a mouthbreather.
    MineHit,
}

/// Result of toggling a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagOutcome {
    Flagged,
    Unflagged,
    /// Revealed cells keep their glyph and cannot be flagged.
    AlreadyRevealed,
    OutOfBounds,
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Errors returned by grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Width or height outside the accepted range.
    InvalidSize { width: usize, height: usize },
    /// Coordinate lies outside `[1, width] x [1, height]`.
    OutOfBounds(Coordinates),
    /// Mines were already placed on this grid.
    AlreadySeeded,
    /// Frequency is not a finite fraction in `[0, 1]`.
    InvalidFrequency,
    /// More mines requested than cells available for them.
    TooManyMines { requested: usize, available: usize },
    /// The same cell was listed twice in a mine layout.
    DuplicateMine(Coordinates),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidSize { width, height } => {
                write!(f, "grid size {}x{} is out of range", width, height)
            }
            GridError::OutOfBounds(c) => write!(f, "coordinate {} is off the grid", c),
            GridError::AlreadySeeded => write!(f, "mines have already been placed"),
            GridError::InvalidFrequency => write!(f, "mine frequency must be between 0 and 1"),
            GridError::TooManyMines {
                requested,
                available,
            } => write!(
                f,
                "cannot place {} mines in {} free cells",
                requested, available
            ),
            GridError::DuplicateMine(c) => write!(f, "mine listed twice at {}", c),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}
