use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::{bishop_moves, bishop_reaches};
use crate::moves::rook_moves::{rook_moves, rook_reaches};

/// Rook lines followed by bishop diagonals, ignoring occupancy.
pub fn queen_moves(square: Square) -> Vec<Square> {
    let mut out = rook_moves(square);
    out.extend(bishop_moves(square));
    out
}

#[inline]
pub fn queen_reaches(from: Square, to: Square) -> bool {
    rook_reaches(from, to) || bishop_reaches(from, to)
}
