use crate::game_state::chess_types::{Piece, PieceType, Square};
use crate::moves::bishop_moves::{bishop_moves, bishop_reaches};
use crate::moves::king_moves::{king_moves, king_reaches};
use crate::moves::knight_moves::{knight_moves, knight_reaches};
use crate::moves::pawn_moves::{pawn_attacks, pawn_moves};
use crate::moves::queen_moves::{queen_moves, queen_reaches};
use crate::moves::rook_moves::{rook_moves, rook_reaches};

/// Pseudo-legal destinations for `piece` standing on `square`. For pawns this
/// is only the forward pushes; diagonal captures come from `pawn_captures`.
pub fn candidate_squares(piece: Piece, square: Square) -> Vec<Square> {
    match piece.piece_type {
        PieceType::Knight => knight_moves(square),
        PieceType::Bishop => bishop_moves(square),
        PieceType::Rook => rook_moves(square),
        PieceType::Queen => queen_moves(square),
        PieceType::King => king_moves(square),
        PieceType::Pawn => pawn_moves(piece.side, square),
    }
}

/// Geometric threat of `piece` on `from` against `to`, ignoring blockers.
/// Pawns threaten diagonally forward only.
pub fn threatens_geometrically(piece: Piece, from: Square, to: Square) -> bool {
    match piece.piece_type {
        PieceType::Knight => knight_reaches(from, to),
        PieceType::Bishop => bishop_reaches(from, to),
        PieceType::Rook => rook_reaches(from, to),
        PieceType::Queen => queen_reaches(from, to),
        PieceType::King => king_reaches(from, to),
        PieceType::Pawn => pawn_attacks(piece.side, from, to),
    }
}
