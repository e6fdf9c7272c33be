//! Black Box entry point
//!
//! Plays a short scripted game against a seeded random layout and prints
//! each shot with the board it left behind. Set `RUST_LOG=debug` to see the
//! ray engine's own log lines.

use std::time::{SystemTime, UNIX_EPOCH};

use black_box::sim::{GameSession, GuessResult, ShotResult};
use black_box::Settings;

const DEMO_ATOMS: usize = 4;

fn main() {
    env_logger::init();

    let seed = std::env::var("BLACK_BOX_SEED")
        .ok()
        .and_then(|raw| parse_seed(&raw))
        .unwrap_or_else(clock_seed);
    log::info!("Black Box starting with seed: {}", seed);

    let mut game = match GameSession::random(Settings::default(), DEMO_ATOMS, seed) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Could not set up board: {}", e);
            std::process::exit(1);
        }
    };

    // Sweep the top edge, then the left edge
    let side = game.grid().side();
    let shots = (1..side - 1)
        .map(|col| (0, col))
        .chain((1..side - 1).map(|row| (row, 0)));
    for (row, col) in shots {
        let result = game.shoot(row, col);
        match result {
            ShotResult::InsufficientPoints => {
                println!("\nOut of points for shots at ({row}, {col})");
                break;
            }
            ShotResult::InvalidOrigin => continue,
            ShotResult::Hit => println!("\nRay from ({row}, {col}): hit"),
            ShotResult::Exit(pos) if pos.row == row && pos.col == col => {
                println!("\nRay from ({row}, {col}): reflected")
            }
            ShotResult::Exit(pos) => println!("\nRay from ({row}, {col}): exits at {pos}"),
        }
        println!("{}", game.render());
        println!("score: {}", game.score());
    }

    // Reveal: guess every atom plus one empty cell
    let atoms: Vec<_> = game.grid().atoms().collect();
    for pos in atoms {
        if game.guess_atom(pos.row, pos.col) == GuessResult::InsufficientPoints {
            break;
        }
    }
    let miss = game.guess_atom(1, 1);
    println!("\nGuess at (1, 1): {:?}", miss);
    println!(
        "Final score: {}, atoms remaining: {}, solved: {}",
        game.score(),
        game.atoms_remaining(),
        game.is_solved()
    );
}

/// Parse a `BLACK_BOX_SEED` value, warning when it is not a `u64`.
fn parse_seed(raw: &str) -> Option<u64> {
    match raw.trim().parse::<u64>() {
        Ok(seed) => Some(seed),
        Err(e) => {
            log::warn!("Ignoring BLACK_BOX_SEED={:?}: {}", raw, e);
            None
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
