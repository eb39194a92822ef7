//! Text rendering of a grid: glyphs are derived from cell state here and
//! nowhere else.

use alloc::string::{String, ToString};
use core::fmt::{self, Write};

use crate::common::{Coordinates, GameStatus};
use crate::config::{
    CELL_SEPARATOR, CLEARED_CELL_SYMBOL, MOUTHBREATHER_CELL_SYMBOL, UNKNOWN_CELL_SYMBOL,
    WARNING_CELL_SYMBOL,
};
use crate::coords::{number_to_letter, row_label};
use crate::grid::{Cell, Grid, MineState};

/// What a cell looks like to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Unknown,
    Mine,
    Flag,
    Blank,
    Count(u8),
}

impl Glyph {
    pub fn of(cell: &Cell) -> Self {
        if cell.is_revealed() {
            match cell.contents() {
                MineState::Mine => Glyph::Mine,
                MineState::Clear(0) => Glyph::Blank,
                MineState::Clear(n) => Glyph::Count(n),
            }
        } else if cell.is_flagged() {
            Glyph::Flag
        } else {
            Glyph::Unknown
        }
    }
}

impl fmt::Display for Glyph {
    // `pad` so that width and alignment flags center the symbol.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Glyph::Unknown => f.pad(UNKNOWN_CELL_SYMBOL),
            Glyph::Mine => f.pad(MOUTHBREATHER_CELL_SYMBOL),
            Glyph::Flag => f.pad(WARNING_CELL_SYMBOL),
            Glyph::Blank => f.pad(CLEARED_CELL_SYMBOL),
            Glyph::Count(n) => {
                let mut buf = [0u8; 4];
                f.pad(char::from(b'0' + n).encode_utf8(&mut buf))
            }
        }
    }
}

/// Which end of storage is drawn first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowOrder {
    /// Storage row 1 at the bottom, row `A` at the top.
    #[default]
    Standard,
    /// Storage row 1 at the top.
    Inverted,
}

/// Glyph for one coordinate, `None` off the grid. Once the grid is lost
/// every mine is shown, covered or not.
pub fn glyph_at(grid: &Grid, at: Coordinates) -> Option<Glyph> {
    let cell = grid.cell(at)?;
    if grid.status() == GameStatus::Lost && cell.is_mine() {
        return Some(Glyph::Mine);
    }
    Some(Glyph::of(cell))
}

/// Pad `text` to `width` columns; an odd leftover space goes on the left.
fn write_centered<W: Write>(out: &mut W, text: &str, width: usize) -> fmt::Result {
    let spare = width.saturating_sub(text.chars().count());
    let left = (spare + 1) / 2;
    write!(out, "{:left$}{}{:right$}", "", text, "", right = spare - left)
}

/// Characters every cell is padded to: enough for the widest column
/// number, the longest row label and the widest symbol.
pub fn cell_width(width: usize, height: usize) -> usize {
    let mut digits = 1;
    let mut n = width;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    [
        digits,
        number_to_letter(height).len(),
        UNKNOWN_CELL_SYMBOL.len(),
        MOUTHBREATHER_CELL_SYMBOL.len(),
        WARNING_CELL_SYMBOL.len(),
    ]
    .into_iter()
    .max()
    .unwrap_or(1)
}

/// Draw the whole grid: a header of column numbers, then one line per row
/// led by its letter label.
pub fn render(grid: &Grid, order: RowOrder) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_grid(&mut out, grid, order);
    out
}

fn write_grid<W: Write>(out: &mut W, grid: &Grid, order: RowOrder) -> fmt::Result {
    let w = cell_width(grid.width(), grid.height());
    let cell = |out: &mut W, text: &str| -> fmt::Result {
        write_centered(out, text, w)?;
        out.write_char(CELL_SEPARATOR)
    };

    cell(out, "")?;
    for x in 1..=grid.width() {
        cell(out, &x.to_string())?;
    }
    writeln!(out)?;

    let mut draw_row = |y: usize| -> fmt::Result {
        cell(out, &row_label(y, grid.height()))?;
        for x in 1..=grid.width() {
            let glyph = glyph_at(grid, Coordinates::new(x, y)).unwrap_or(Glyph::Unknown);
            cell(out, &glyph.to_string())?;
        }
        writeln!(out)
    };
    match order {
        RowOrder::Standard => (1..=grid.height()).rev().try_for_each(&mut draw_row),
        RowOrder::Inverted => (1..=grid.height()).try_for_each(&mut draw_row),
    }
}
