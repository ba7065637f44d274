//! Crate root module declarations for the Plum Rules chess rules engine.
//!
//! This file exposes the board model, the pseudo-legal move generators, the
//! legality engine, the game orchestrator, and the notation/interchange
//! helpers so binaries, benches, and presentation layers can import stable
//! module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_castling;
    pub mod perft;
}

pub mod game {
    pub mod captured_pieces;
    pub mod chess_game;
    pub mod game_config;
    pub mod game_events;
}

pub mod utils {
    pub mod algebraic;
    pub mod pgn;
    pub mod random_play;
    pub mod render_game_state;
    pub mod standard_notation;
}
