//! Fixed limits, defaults and symbols for the game.

/// Largest accepted width or height. Bounds the memory a board can take.
pub const SIZE_LIMIT: usize = 511;
/// Smallest accepted width or height.
pub const SIZE_MINIMUM: usize = 5;
pub const DEFAULT_SIZE: usize = 5;
pub const DEFAULT_FREQUENCY: f64 = 0.2;

/// Cells kept free of mines around the opening move (the center plus its
/// eight neighbors).
pub const OPENING_AREA: usize = 9;

pub const UNKNOWN_CELL_SYMBOL: &str = ".";
pub const MOUTHBREATHER_CELL_SYMBOL: &str = ":O";
pub const WARNING_CELL_SYMBOL: &str = "+";
pub const CLEARED_CELL_SYMBOL: &str = " ";
pub const CELL_SEPARATOR: char = '|';
