//! Uniform random play over the legal commands of a game.
//!
//! Useful for smoke-testing the legality engine and for demo output.

use rand::prelude::IndexedRandom;
use rand::Rng;
use tracing::debug;

use crate::chess_errors::ChessErrors;
use crate::game::chess_game::ChessGame;
use crate::game_state::chess_types::{GameState, Side};
use crate::moves::move_descriptions::CandidateMove;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomGameOutcome {
    pub plies: usize,
    pub final_state: GameState,
    /// Side left without a legal move while in check, if any.
    pub checkmated: Option<Side>,
    pub stalemated: bool,
}

/// Picks one of the side to move's legal commands uniformly.
pub fn random_legal_command<R>(game: &ChessGame, rng: &mut R) -> Option<CandidateMove>
where
    R: Rng + ?Sized,
{
    game.legal_commands().choose(rng).copied()
}

/// Plays random legal commands until the side to move has none or
/// `max_plies` half-moves were played. Checkmate and stalemate end the game;
/// hitting the ply limit leaves it in progress.
pub fn play_random_game<R>(
    game: &mut ChessGame,
    rng: &mut R,
    max_plies: usize,
) -> Result<RandomGameOutcome, ChessErrors>
where
    R: Rng + ?Sized,
{
    let mut plies = 0;
    let mut checkmated = None;
    let mut stalemated = false;

    while plies < max_plies && game.game_state() == GameState::InProgress {
        let Some(command) = random_legal_command(game, rng) else {
            let side = game.side_to_move();
            if game.is_checkmate(side) {
                checkmated = Some(side);
                game.end_game(Some(side.opposite()))?;
            } else {
                stalemated = true;
                game.end_game(None)?;
            }
            break;
        };
        game.apply(command)?;
        plies += 1;
    }

    if checkmated.is_none() && game.game_state().is_terminal() {
        // Ended by the game itself (auto end on checkmate).
        checkmated = Some(game.side_to_move());
    }

    debug!(plies, state = ?game.game_state(), "random game finished");
    Ok(RandomGameOutcome {
        plies,
        final_state: game.game_state(),
        checkmated,
        stalemated,
    })
}
