use std::io;

use clap::Parser;
use mouthbreather::{cli, init_logging, resolve_arguments, Game, RowOrder};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// WIDTH HEIGHT [FREQUENCY]: columns and rows (5-511) and the fraction
    /// of cells holding a mouthbreather, in (0, 1]. Invalid values fall back
    /// to a 5x5 board at 0.2.
    #[arg(allow_negative_numbers = true, value_name = "VALUES")]
    values: Vec<String>,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Draw the first storage row at the top instead of the bottom.
    #[arg(long)]
    invert_rows: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Cli::parse();

    let (params, fallback) = resolve_arguments(&args.values);
    if let Some(err) = fallback {
        eprintln!(
            "{}; using defaults ({}x{}, frequency {})",
            err,
            params.width(),
            params.height(),
            params.frequency()
        );
    }

    if let Some(s) = args.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let rng = if let Some(s) = args.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let order = if args.invert_rows {
        RowOrder::Inverted
    } else {
        RowOrder::Standard
    };
    let mut game = Game::new(params, rng).map_err(|e| anyhow::anyhow!(e))?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    cli::run(&mut game, order, stdin.lock(), stdout.lock())?;
    Ok(())
}
