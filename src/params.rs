//! Board size and mine frequency, validated before a grid is built.

use alloc::string::String;
use core::fmt;

use crate::config::{
    DEFAULT_FREQUENCY, DEFAULT_SIZE, OPENING_AREA, SIZE_LIMIT, SIZE_MINIMUM,
};

/// Why a set of parameters was refused.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// Only one of width and height was supplied.
    MissingDimension,
    /// More values than width, height and frequency.
    TooManyArguments(usize),
    /// A size value is not an integer.
    NotAnInteger(String),
    /// The frequency value is not a number.
    NotANumber(String),
    TooLarge { width: usize, height: usize },
    TooSmall { width: usize, height: usize },
    /// Frequency outside `(0, 1]`.
    FrequencyOutOfRange(f64),
    /// The board cannot fit this many mines outside the opening area.
    TooCrowded { mines: usize, free_cells: usize },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterError::MissingDimension => {
                write!(f, "both a width and a height are needed")
            }
            ParameterError::TooManyArguments(n) => {
                write!(f, "expected at most 3 values (width height [frequency]), got {}", n)
            }
            ParameterError::NotAnInteger(s) => {
                write!(f, "cannot convert '{}' to an integer", s)
            }
            ParameterError::NotANumber(s) => write!(f, "cannot convert '{}' to a number", s),
            ParameterError::TooLarge { width, height } => write!(
                f,
                "size {}x{} is too large (limit {})",
                width, height, SIZE_LIMIT
            ),
            ParameterError::TooSmall { width, height } => write!(
                f,
                "size {}x{} is too small (minimum {})",
                width, height, SIZE_MINIMUM
            ),
            ParameterError::FrequencyOutOfRange(freq) => write!(
                f,
                "frequency {} is unacceptable, apply yourself (expected 0 < f <= 1)",
                freq
            ),
            ParameterError::TooCrowded { mines, free_cells } => write!(
                f,
                "{} mines do not fit in the {} cells outside the opening",
                mines, free_cells
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParameterError {}

/// Validated game settings. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameParameters {
    width: usize,
    height: usize,
    frequency: f64,
}

impl Default for GameParameters {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            frequency: DEFAULT_FREQUENCY,
        }
    }
}

impl GameParameters {
    /// Validate one set of values.
    pub fn new(width: usize, height: usize, frequency: f64) -> Result<Self, ParameterError> {
        if width > SIZE_LIMIT || height > SIZE_LIMIT {
            return Err(ParameterError::TooLarge { width, height });
        }
        if width < SIZE_MINIMUM || height < SIZE_MINIMUM {
            return Err(ParameterError::TooSmall { width, height });
        }
        // NaN fails both comparisons and is rejected here too.
        if !(frequency > 0.0 && frequency <= 1.0) {
            return Err(ParameterError::FrequencyOutOfRange(frequency));
        }
        let params = Self {
            width,
            height,
            frequency,
        };
        let free_cells = width * height - OPENING_AREA;
        let mines = params.mine_count();
        if mines > free_cells {
            return Err(ParameterError::TooCrowded { mines, free_cells });
        }
        Ok(params)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Number of mines seeding will place: `round(width * height * frequency)`.
    pub fn mine_count(&self) -> usize {
        mine_count(self.width, self.height, self.frequency)
    }
}

pub(crate) fn mine_count(width: usize, height: usize, frequency: f64) -> usize {
    libm::round((width * height) as f64 * frequency) as usize
}

/// Turn raw command-line values into parameters.
///
/// With no size given the defaults are used silently. Any failure also
/// yields the defaults, together with the error that caused the fallback.
pub fn resolve_parameters(
    width: Option<&str>,
    height: Option<&str>,
    frequency: Option<&str>,
) -> (GameParameters, Option<ParameterError>) {
    match try_resolve(width, height, frequency) {
        Ok(params) => (params, None),
        Err(err) => {
            log::warn!("falling back to default parameters: {}", err);
            (GameParameters::default(), Some(err))
        }
    }
}

/// Resolve a positional argument list `[WIDTH HEIGHT [FREQUENCY]]`. A
/// wrong number of values falls back to the defaults like any other error.
pub fn resolve_arguments<S: AsRef<str>>(values: &[S]) -> (GameParameters, Option<ParameterError>) {
    match values {
        [] => resolve_parameters(None, None, None),
        [w] => resolve_parameters(Some(w.as_ref()), None, None),
        [w, h] => resolve_parameters(Some(w.as_ref()), Some(h.as_ref()), None),
        [w, h, f] => resolve_parameters(Some(w.as_ref()), Some(h.as_ref()), Some(f.as_ref())),
        _ => {
            let err = ParameterError::TooManyArguments(values.len());
            log::warn!("falling back to default parameters: {}", err);
            (GameParameters::default(), Some(err))
        }
    }
}

fn try_resolve(
    width: Option<&str>,
    height: Option<&str>,
    frequency: Option<&str>,
) -> Result<GameParameters, ParameterError> {
    let (width, height) = match (width, height) {
        (None, None) if frequency.is_none() => return Ok(GameParameters::default()),
        (Some(w), Some(h)) => (parse_size(w)?, parse_size(h)?),
        _ => return Err(ParameterError::MissingDimension),
    };
    let frequency = match frequency {
        Some(f) => f
            .trim()
            .parse::<f64>()
            .map_err(|_| ParameterError::NotANumber(f.into()))?,
        None => DEFAULT_FREQUENCY,
    };
    GameParameters::new(width, height, frequency)
}

fn parse_size(text: &str) -> Result<usize, ParameterError> {
    text.trim()
        .parse::<usize>()
        .map_err(|_| ParameterError::NotAnInteger(text.into()))
}
