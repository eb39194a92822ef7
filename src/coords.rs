//! Spreadsheet-style row labels and player coordinate parsing.
//!
//! Rows are named with bijective base-26 letters (`A`..`Z`, `AA`, `AB`, ...)
//! and columns with plain numbers. Label `A` names the top displayed row,
//! which is the highest storage row of the grid.

use alloc::string::String;
use core::fmt;

use crate::common::Coordinates;

/// Reasons a typed coordinate was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Column text is not a number.
    InvalidColumn(String),
    /// Column number is outside `[1, width]`.
    ColumnOutOfRange { column: usize, width: usize },
    /// Row text is not made of letters only.
    InvalidRow(String),
    /// Row label names a row past the bottom of the grid.
    RowOutOfRange { row: String, height: usize },
    /// Not enough pieces on the line.
    MissingCoordinate,
    /// Leading word is not a known command.
    UnknownCommand(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::InvalidColumn(s) => {
                write!(f, "cannot convert x coordinate '{}' to a number", s)
            }
            InputError::ColumnOutOfRange { column, width } => {
                write!(f, "invalid x coordinate {} (expected 1-{})", column, width)
            }
            InputError::InvalidRow(s) => write!(f, "invalid y coordinate '{}'", s),
            InputError::RowOutOfRange { row, height } => write!(
                f,
                "invalid y coordinate {} (expected A-{})",
                row,
                number_to_letter(*height)
            ),
            InputError::MissingCoordinate => write!(f, "expected a coordinate like '3 B'"),
            InputError::UnknownCommand(s) => write!(f, "unknown command '{}'", s),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InputError {}

/// Convert a 1-based number to its letter label: 1 -> `A`, 26 -> `Z`,
/// 27 -> `AA`. Zero has no label and yields an empty string.
pub fn number_to_letter(number: usize) -> String {
    let mut reversed = String::new();
    let mut n = number;
    while n > 0 {
        n -= 1;
        reversed.push((b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    reversed.chars().rev().collect()
}

/// Convert a letter label back to its number. Lowercase letters are read as
/// uppercase. Returns `None` for empty input, any non-letter, or a label too
/// large to represent.
pub fn letter_to_number(letters: &str) -> Option<usize> {
    if letters.is_empty() {
        return None;
    }
    letters.chars().try_fold(0usize, |acc, ch| {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        let digit = (ch.to_ascii_uppercase() as u8 - b'A') as usize + 1;
        acc.checked_mul(26)?.checked_add(digit)
    })
}

/// Storage row for the row labelled `label_number` on a grid `height` rows tall.
pub fn display_row_to_storage(label_number: usize, height: usize) -> usize {
    height + 1 - label_number
}

/// Label number for storage row `y`. Inverse of [`display_row_to_storage`].
pub fn storage_row_to_display(y: usize, height: usize) -> usize {
    height + 1 - y
}

/// Letter label shown next to storage row `y`.
pub fn row_label(y: usize, height: usize) -> String {
    number_to_letter(storage_row_to_display(y, height))
}

/// Parse a typed column number and row label into grid coordinates.
pub fn parse_coordinate(
    column: &str,
    row: &str,
    width: usize,
    height: usize,
) -> Result<Coordinates, InputError> {
    let x: usize = column
        .trim()
        .parse()
        .map_err(|_| InputError::InvalidColumn(column.into()))?;
    if x == 0 || x > width {
        return Err(InputError::ColumnOutOfRange { column: x, width });
    }
    let label = letter_to_number(row.trim()).ok_or_else(|| InputError::InvalidRow(row.into()))?;
    if label > height {
        return Err(InputError::RowOutOfRange {
            row: row.trim().to_ascii_uppercase(),
            height,
        });
    }
    Ok(Coordinates::new(x, display_row_to_storage(label, height)))
}

/// Format grid coordinates the way the player types them, e.g. `3 B`.
pub fn format_coordinate(at: Coordinates, height: usize) -> String {
    let mut out = alloc::format!("{} ", at.x);
    out.push_str(&row_label(at.y, height));
    out
}
