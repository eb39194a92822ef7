//! Grid engine: cell storage, mine seeding, neighbor queries, reveal with
//! flood-clear, flagging and win/loss bookkeeping.
//!
//! Only playable cells are stored. Coordinates are 1-based, so column 0 and
//! row 0 (where the renderer puts the axis labels) are always out of bounds.

use alloc::vec;
use alloc::vec::Vec;
use rand::Rng;

use crate::common::{Coordinates, FlagOutcome, GameStatus, GridError, RevealOutcome};
use crate::config::{SIZE_LIMIT, SIZE_MINIMUM};
use crate::params::mine_count;

/// The eight compass directions as `(dx, dy)` steps.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// What a cell holds underneath its cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MineState {
    /// A mouthbreather.
    Mine,
    /// No mine; carries the number of adjacent mines.
    Clear(u8),
}

/// Semantic state of one playable cell. Glyphs are derived at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    contents: MineState,
    revealed: bool,
    flagged: bool,
}

impl Cell {
    const COVERED: Cell = Cell {
        contents: MineState::Clear(0),
        revealed: false,
        flagged: false,
    };

    pub fn contents(&self) -> MineState {
        self.contents
    }

    pub fn is_mine(&self) -> bool {
        self.contents == MineState::Mine
    }

    /// Adjacent mine count, or `None` for a mine.
    pub fn adjacent_mines(&self) -> Option<u8> {
        match self.contents {
            MineState::Mine => None,
            MineState::Clear(n) => Some(n),
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_flagged(&self) -> bool {
        self.flagged
    }
}

/// A fixed-size minesweeper board.
#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    revealed: usize,
    mines: usize,
    seeded: bool,
    detonated: Option<Coordinates>,
}

impl Grid {
    /// Build a covered grid with no mines. Both sides must be within
    /// `[SIZE_MINIMUM, SIZE_LIMIT]`.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        let valid = SIZE_MINIMUM..=SIZE_LIMIT;
        if !valid.contains(&width) || !valid.contains(&height) {
            return Err(GridError::InvalidSize { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::COVERED; width * height],
            revealed: 0,
            mines: 0,
            seeded: false,
            detonated: None,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of playable cells.
    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    /// Cells revealed so far. Never decreases.
    pub fn revealed_count(&self) -> usize {
        self.revealed
    }

    /// Mines placed; zero until the grid is seeded.
    pub fn mine_count(&self) -> usize {
        self.mines
    }

    pub fn flagged_count(&self) -> usize {
        self.cells.iter().filter(|c| c.flagged).count()
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// The mine that ended the game, if any.
    pub fn detonated(&self) -> Option<Coordinates> {
        self.detonated
    }

    pub fn in_bounds(&self, at: Coordinates) -> bool {
        (1..=self.width).contains(&at.x) && (1..=self.height).contains(&at.y)
    }

    fn index(&self, at: Coordinates) -> Option<usize> {
        self.in_bounds(at)
            .then(|| (at.y - 1) * self.width + (at.x - 1))
    }

    pub fn cell(&self, at: Coordinates) -> Option<&Cell> {
        self.index(at).map(|i| &self.cells[i])
    }

    /// Every playable coordinate, row by row from storage row 1.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinates> + '_ {
        (1..=self.height).flat_map(move |y| (1..=self.width).map(move |x| Coordinates::new(x, y)))
    }

    /// In-bounds neighbors of `at`: 3 at a corner, 5 along an edge, 8 inside.
    /// An out-of-bounds `at` has no neighbors.
    pub fn neighbors(&self, at: Coordinates) -> Vec<Coordinates> {
        if !self.in_bounds(at) {
            return Vec::new();
        }
        DIRECTIONS
            .iter()
            .filter_map(|&(dx, dy)| {
                let x = at.x.checked_add_signed(dx)?;
                let y = at.y.checked_add_signed(dy)?;
                let c = Coordinates::new(x, y);
                self.in_bounds(c).then_some(c)
            })
            .collect()
    }

    /// Install a fixed mine layout and compute adjacent counts. The layout is
    /// checked in full before anything is written.
    pub fn place_mines(&mut self, mines: &[Coordinates]) -> Result<usize, GridError> {
        if self.seeded {
            return Err(GridError::AlreadySeeded);
        }
        let mut taken = vec![false; self.cells.len()];
        for &at in mines {
            let i = self.index(at).ok_or(GridError::OutOfBounds(at))?;
            if taken[i] {
                return Err(GridError::DuplicateMine(at));
            }
            taken[i] = true;
        }

        for &at in mines {
            if let Some(i) = self.index(at) {
                self.cells[i].contents = MineState::Mine;
            }
            for n in self.neighbors(at) {
                if let Some(j) = self.index(n) {
                    if let MineState::Clear(count) = &mut self.cells[j].contents {
                        *count += 1;
                    }
                }
            }
        }
        self.mines = mines.len();
        self.seeded = true;
        Ok(self.mines)
    }

    /// Place `round(width * height * frequency)` mines at random, keeping
    /// `avoid` and its neighbors clear, then reveal that opening area.
    ///
    /// Returns the number of mines placed.
    pub fn seed<R: Rng>(
        &mut self,
        avoid: Coordinates,
        frequency: f64,
        rng: &mut R,
    ) -> Result<usize, GridError> {
        if self.seeded {
            return Err(GridError::AlreadySeeded);
        }
        if !self.in_bounds(avoid) {
            return Err(GridError::OutOfBounds(avoid));
        }
        if !(0.0..=1.0).contains(&frequency) {
            return Err(GridError::InvalidFrequency);
        }

        let mut opening = self.neighbors(avoid);
        opening.push(avoid);
        let requested = mine_count(self.width, self.height, frequency);
        let available = self.cells.len() - opening.len();
        if requested > available {
            return Err(GridError::TooManyMines {
                requested,
                available,
            });
        }

        let mut taken = vec![false; self.cells.len()];
        for &at in &opening {
            if let Some(i) = self.index(at) {
                taken[i] = true;
            }
        }
        let mut mines = Vec::with_capacity(requested);
        while mines.len() < requested {
            let candidate = Coordinates::new(
                rng.random_range(1..=self.width),
                rng.random_range(1..=self.height),
            );
            let Some(i) = self.index(candidate) else {
                continue;
            };
            if taken[i] {
                continue;
            }
            taken[i] = true;
            mines.push(candidate);
        }

        self.place_mines(&mines)?;
        log::debug!(
            "seeded {} mouthbreathers on a {}x{} grid, avoiding {}",
            requested,
            self.width,
            self.height,
            avoid
        );

        for at in opening {
            self.reveal(at);
        }
        Ok(requested)
    }

    /// Reveal the cell at `at`. Revealing a zero-count cell clears its whole
    /// connected zero region plus the numbered border around it.
    ///
    /// Out-of-bounds and already revealed cells are left alone and report
    /// [`RevealOutcome::Safe`].
    pub fn reveal(&mut self, at: Coordinates) -> RevealOutcome {
        let Some(start) = self.index(at) else {
            return RevealOutcome::Safe;
        };
        if self.cells[start].revealed {
            return RevealOutcome::Safe;
        }
        if self.cells[start].is_mine() {
            self.uncover(start);
            self.detonated = Some(at);
            log::info!("mouthbreather hit at {}", at);
            return RevealOutcome::MineHit;
        }

        let before = self.revealed;
        let mut pending = vec![at];
        while let Some(next) = pending.pop() {
            let Some(i) = self.index(next) else {
                continue;
            };
            if self.cells[i].revealed {
                continue;
            }
            self.uncover(i);
            if self.cells[i].contents == MineState::Clear(0) {
                let covered = self
                    .neighbors(next)
                    .into_iter()
                    .filter(|&n| self.cell(n).is_some_and(|c| !c.revealed));
                pending.extend(covered);
            }
        }
        log::trace!("revealing {} cleared {} cells", at, self.revealed - before);
        RevealOutcome::Safe
    }

    fn uncover(&mut self, i: usize) {
        let cell = &mut self.cells[i];
        cell.revealed = true;
        cell.flagged = false;
        self.revealed += 1;
    }

    /// Toggle the flag on a covered cell.
    pub fn flag(&mut self, at: Coordinates) -> FlagOutcome {
        let Some(i) = self.index(at) else {
            return FlagOutcome::OutOfBounds;
        };
        let cell = &mut self.cells[i];
        if cell.revealed {
            return FlagOutcome::AlreadyRevealed;
        }
        cell.flagged = !cell.flagged;
        if cell.flagged {
            FlagOutcome::Flagged
        } else {
            FlagOutcome::Unflagged
        }
    }

    /// Cells still to reveal before the game is won.
    pub fn safe_cells_remaining(&self) -> usize {
        (self.cells.len() - self.mines).saturating_sub(self.revealed)
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.detonated.is_some() {
            GameStatus::Lost
        } else if self.seeded && self.revealed == self.cells.len() - self.mines {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }
}
