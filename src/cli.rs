#![cfg(feature = "std")]

use std::io::{BufRead, Write};
use std::string::String;

use rand::Rng;

use crate::{
    common::{Coordinates, FlagOutcome, GameStatus},
    coords::{format_coordinate, parse_coordinate, InputError},
    game::{Action, Game, GameError, Outcome},
    render::{render, RowOrder},
};

pub const WELCOME: &str = "welcome to mouthbreather, a minesweeper like game, except you are \
marking out a room full of mouthbreathers";
pub const WIN_MESSAGE: &str = "the world thanks you!";
pub const LOSS_MESSAGE: &str = "their wicked breath haunts you";

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Reveal(Coordinates),
    Flag(Coordinates),
    Quit,
}

/// Parse `X ROW`, `s X ROW`, `f X ROW` or `q`.
pub fn parse_command(line: &str, width: usize, height: usize) -> Result<Command, InputError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        [] => Err(InputError::MissingCoordinate),
        [cmd] if is_quit(cmd) => Ok(Command::Quit),
        [x, y] => parse_coordinate(x, y, width, height).map(Command::Reveal),
        [cmd, x, y] => match cmd.to_ascii_lowercase().as_str() {
            "s" | "select" | "r" | "reveal" => {
                parse_coordinate(x, y, width, height).map(Command::Reveal)
            }
            "f" | "flag" => parse_coordinate(x, y, width, height).map(Command::Flag),
            _ => Err(InputError::UnknownCommand((*cmd).into())),
        },
        _ => Err(InputError::MissingCoordinate),
    }
}

fn is_quit(word: &str) -> bool {
    matches!(word.to_ascii_lowercase().as_str(), "q" | "quit" | "exit")
}

/// Print `prompt` and read one line. `None` at end of input.
fn prompt<I: BufRead, O: Write>(
    input: &mut I,
    output: &mut O,
    prompt: &str,
) -> std::io::Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        return Ok(None);
    }
    Ok(Some(line))
}

/// Run one game over the given reader and writer until it is won, lost,
/// quit, or input runs out. Returns the final status.
pub fn run<G, I, O>(
    game: &mut Game<G>,
    order: RowOrder,
    mut input: I,
    mut output: O,
) -> anyhow::Result<GameStatus>
where
    G: Rng,
    I: BufRead,
    O: Write,
{
    let (width, height) = (game.grid().width(), game.grid().height());
    writeln!(output, "{}", WELCOME)?;
    write!(output, "{}", render(game.grid(), order))?;

    while !game.is_opened() {
        let Some(line) = prompt(&mut input, &mut output, "(x y): ")? else {
            return Ok(game.status());
        };
        match parse_command(&line, width, height) {
            Ok(Command::Quit) => return Ok(game.status()),
            Ok(Command::Reveal(at)) => {
                game.open(at).map_err(|e| anyhow::anyhow!(e))?;
            }
            Ok(Command::Flag(_)) => writeln!(output, "{}", GameError::NotOpened)?,
            Err(e) => writeln!(output, "{}", e)?,
        }
    }
    write!(output, "{}", render(game.grid(), order))?;

    while game.status() == GameStatus::InProgress {
        writeln!(
            output,
            "{} mouthbreathers, {} flagged, {} cells left",
            game.grid().mine_count(),
            game.grid().flagged_count(),
            game.grid().safe_cells_remaining()
        )?;
        let Some(line) = prompt(&mut input, &mut output, "reveal (x y) or flag (f x y): ")?
        else {
            return Ok(game.status());
        };
        let action = match parse_command(&line, width, height) {
            Ok(Command::Quit) => return Ok(game.status()),
            Ok(Command::Reveal(at)) => Action::Reveal(at),
            Ok(Command::Flag(at)) => Action::Flag(at),
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };
        match game.play(action) {
            Ok(Outcome::Flag(FlagOutcome::AlreadyRevealed)) => {
                if let Action::Flag(at) = action {
                    writeln!(
                        output,
                        "{} is already revealed",
                        format_coordinate(at, height)
                    )?;
                }
            }
            Ok(outcome) => log::debug!("{:?} -> {:?}", action, outcome),
            Err(GameError::Grid(e)) => writeln!(output, "{}", e)?,
            Err(e) => return Err(anyhow::anyhow!(e)),
        }
        write!(output, "{}", render(game.grid(), order))?;
    }

    let status = game.status();
    match status {
        GameStatus::Won => writeln!(output, "{}", WIN_MESSAGE)?,
        GameStatus::Lost => writeln!(output, "{}", LOSS_MESSAGE)?,
        GameStatus::InProgress => {}
    }
    Ok(status)
}
