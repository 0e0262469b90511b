//! Quindici console application.
//!
//! This is the process entry point: it parses command-line options, builds
//! the two players, and hands control to the interactive loop.

use std::{io, path::PathBuf, process::ExitCode};

use clap::{Parser, ValueEnum};
use quindici_core::Parity;
use quindici_game::{GameSession, Player, save};
use rand::{SeedableRng, rngs::StdRng};

mod app;
mod command;
mod render;

/// Who sits in the second seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Opponent {
    /// A second human at the same console.
    Human,
    /// A uniform-random computer player.
    Computer,
}

/// Numerical tic-tac-toe: make a row, column, or diagonal sum to 15.
#[derive(Debug, Parser)]
#[command(name = "quindici", version, about)]
struct Options {
    /// Name of the first player (odd numbers).
    #[arg(long, default_value = "Player 1")]
    p1_name: String,

    /// Name of the second player (even numbers).
    #[arg(long, default_value = "Player 2")]
    p2_name: String,

    /// Who plays the even numbers.
    #[arg(long, value_enum, default_value_t = Opponent::Computer)]
    opponent: Opponent,

    /// Seed for the computer player's random moves.
    #[arg(long)]
    seed: Option<u64>,

    /// Resume from a saved game instead of starting fresh.
    #[arg(long)]
    load: Option<PathBuf>,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let Options {
        p1_name,
        p2_name,
        opponent,
        seed,
        load,
    } = Options::parse();

    let players = [
        Player::human(p1_name, Parity::Odd),
        match opponent {
            Opponent::Human => Player::human(p2_name, Parity::Even),
            Opponent::Computer => Player::computer(p2_name, Parity::Even),
        },
    ];

    let mut session = match &load {
        Some(path) => match save::read_file(path, &players) {
            Ok(session) => session,
            Err(err) => {
                eprintln!("Failed to load {}: {err}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => GameSession::new(players),
    };

    let mut rng = seed.map_or_else(
        || StdRng::from_rng(&mut rand::rng()),
        StdRng::seed_from_u64,
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    match app::run(&mut session, &mut rng, &mut input, &mut output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("I/O error: {err}");
            ExitCode::FAILURE
        }
    }
}
