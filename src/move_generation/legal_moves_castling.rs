//! Castling validity.
//!
//! Board geometry and king safety only; whether the side still holds the
//! right to castle on a wing is tracked by the caller in `CastlingRights`.

use tracing::trace;

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{castle_king_destination, king_home, rook_home};
use crate::game_state::chess_types::{CastlingRights, Piece, PieceType, Side, Square, Wing};
use crate::move_generation::legal_move_checks::{
    any_blocking, in_check, is_square_attacked, tile_sequence,
};

/// True if `side` could castle on `wing` in this position, rights aside:
/// king and rook on their home squares, nothing between them, the king not
/// in check, and no square of the king's path attacked.
pub fn castle_valid(board: &Board, side: Side, wing: Wing) -> bool {
    let king_from = king_home(side);
    let rook_from = rook_home(side, wing);

    if board.piece_at(king_from) != Some(Piece::new(PieceType::King, side))
        || board.piece_at(rook_from) != Some(Piece::new(PieceType::Rook, side))
    {
        return false;
    }
    if any_blocking(board, king_from, rook_from) || in_check(board, side) {
        return false;
    }

    let king_to = castle_king_destination(side, wing);
    let path = tile_sequence(king_from, king_to).unwrap_or_default();
    let attacked = path
        .iter()
        .find(|sq| is_square_attacked(board, **sq, side.opposite()));
    if let Some(square) = attacked {
        trace!(%side, %wing, %square, "castle path attacked");
        return false;
    }
    true
}

/// Castles available to `side`, queenside first, each paired with the king's
/// landing square.
pub fn castling_moves(board: &Board, rights: &CastlingRights, side: Side) -> Vec<(Wing, Square)> {
    [Wing::Queenside, Wing::Kingside]
        .into_iter()
        .filter(|wing| rights.allowed(side, *wing) && castle_valid(board, side, *wing))
        .map(|wing| (wing, castle_king_destination(side, wing)))
        .collect()
}
