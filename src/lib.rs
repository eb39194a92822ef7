#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
pub mod coords;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod params;
pub mod render;

pub use common::*;
pub use config::*;
pub use coords::{letter_to_number, number_to_letter, parse_coordinate, InputError};
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use params::*;
pub use render::{render, Glyph, RowOrder};
