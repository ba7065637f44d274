//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type returned by the board model, the
//! legality engine, and the game orchestrator. Every variant carries enough
//! context (squares, sides, wings, offending text) to render a useful message
//! for the presentation layer.
//!
//! Usage guidelines:
//! - Commands on `ChessGame` validate everything before mutating, so an `Err`
//!   always means nothing changed and no events were emitted.
//! - Callers that only care about the broad category should match on
//!   [`ChessErrors::kind`] instead of individual variants.

use thiserror::Error;

use crate::game_state::chess_types::{GameState, Side, Square, Wing};

/// Broad classification of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The operation is not allowed in the current game state (wrong phase,
    /// wrong side to move, castling no longer available).
    InvalidState,
    /// The operation referenced something that does not exist or is not
    /// legal (empty square, illegal destination, malformed square text).
    InvalidArgument,
}

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// A command or query that needs a running game was issued in another
    /// state.
    ///
    /// Payload: the state the game was actually in.
    #[error("game is not in progress (state is {0:?})")]
    GameNotInProgress(GameState),

    /// A piece of the side that is not on move was asked to move.
    #[error("it is {expected}'s move, not {found}'s")]
    NotSideToMove { expected: Side, found: Side },

    /// The castling right for this side and wing was already revoked.
    #[error("{0} has no {1} castling rights")]
    NoCastlingRights(Side, Wing),

    /// Rights are still set but the castle is not currently possible
    /// (pieces missing or in the way, king in check or passing through an
    /// attacked square).
    #[error("{0} cannot castle {1} in this position")]
    InvalidCastle(Side, Wing),

    /// The referenced square holds no piece.
    #[error("no piece on {0}")]
    NoPieceAt(Square),

    /// The destination is not among the legal moves of the piece.
    #[error("{from}->{to} is not legal")]
    IllegalMove { from: Square, to: Square },

    /// The move would capture a piece of the moving side.
    #[error("cannot capture own piece on {0}")]
    CannotCaptureOwnPiece(Square),

    /// An explicit capture square was supplied that does not correspond to
    /// an en-passant capture onto `to`.
    #[error("{capture} is not a valid capture square for a move to {to}")]
    InvalidCaptureSquare { to: Square, capture: Square },

    /// Square text could not be parsed.
    ///
    /// Payload: the text as given.
    #[error("invalid square {0:?}")]
    InvalidSquare(String),

    /// File or rank index outside `0..=7`.
    #[error("invalid file/rank index ({0}, {1})")]
    InvalidFileOrRank(u8, u8),

    /// A move token matched no legal move in the current position.
    #[error("no legal move matches {0:?}")]
    UnknownNotation(String),

    /// PGN text could not be parsed.
    #[error("invalid PGN: {0}")]
    InvalidPgn(String),
}

impl ChessErrors {
    /// Classifies the error into one of the two failure kinds.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChessErrors::GameNotInProgress(_)
            | ChessErrors::NotSideToMove { .. }
            | ChessErrors::NoCastlingRights(..)
            | ChessErrors::InvalidCastle(..) => ErrorKind::InvalidState,
            ChessErrors::NoPieceAt(_)
            | ChessErrors::IllegalMove { .. }
            | ChessErrors::CannotCaptureOwnPiece(_)
            | ChessErrors::InvalidCaptureSquare { .. }
            | ChessErrors::InvalidSquare(_)
            | ChessErrors::InvalidFileOrRank(..)
            | ChessErrors::UnknownNotation(_)
            | ChessErrors::InvalidPgn(_) => ErrorKind::InvalidArgument,
        }
    }
}
