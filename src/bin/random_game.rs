//! Plays one seeded random game and prints the final board and its PGN.
//!
//! Run with:
//! `cargo run --bin random_game`
//! `cargo run --bin random_game -- --seed 7 --max-plies 300`
//! `cargo run --bin random_game -- --ascii` for a plain-letter board.
//! `RUST_LOG=debug cargo run --bin random_game` for per-move logs.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use plum_rules::game::chess_game::ChessGame;
use plum_rules::game::game_config::GameConfig;
use plum_rules::game_state::chess_types::Side;
use plum_rules::utils::pgn::write_pgn;
use plum_rules::utils::random_play::play_random_game;
use plum_rules::utils::render_game_state::{render_board, render_board_ascii};

const DEFAULT_SEED: u64 = 1234;
const DEFAULT_MAX_PLIES: usize = 200;

fn arg_value<T: std::str::FromStr>(args: &[String], flag: &str) -> Result<Option<T>, String> {
    match args.iter().position(|a| a == flag) {
        None => Ok(None),
        Some(idx) => {
            let raw = args
                .get(idx + 1)
                .ok_or_else(|| format!("{flag} needs a value"))?;
            raw.parse::<T>()
                .map(Some)
                .map_err(|_| format!("invalid value for {flag}: {raw}"))
        }
    }
}

fn main() -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let seed = arg_value::<u64>(&args, "--seed")?.unwrap_or(DEFAULT_SEED);
    let max_plies = arg_value::<usize>(&args, "--max-plies")?.unwrap_or(DEFAULT_MAX_PLIES);
    let ascii = args.iter().any(|a| a == "--ascii");

    let config = GameConfig::from_env();
    info!(seed, max_plies, ?config, "playing random game");

    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = ChessGame::with_config(config);
    game.start();
    let outcome = play_random_game(&mut game, &mut rng, max_plies).map_err(|e| e.to_string())?;

    info!(
        plies = outcome.plies,
        state = ?outcome.final_state,
        checkmated = ?outcome.checkmated,
        stalemated = outcome.stalemated,
        "game finished"
    );

    let mut headers = BTreeMap::new();
    headers.insert("Event".to_owned(), format!("Random game (seed {seed})"));
    headers.insert("White".to_owned(), "Random".to_owned());
    headers.insert("Black".to_owned(), "Random".to_owned());

    let board = if ascii {
        render_board_ascii(game.board())
    } else {
        render_board(game.board())
    };
    println!("{board}\n");
    println!("White lost: {}", game.format_captured_pieces(Side::White));
    println!("Black lost: {}\n", game.format_captured_pieces(Side::Black));
    print!("{}", write_pgn(game.move_history(), game.game_state(), &headers));
    Ok(())
}
