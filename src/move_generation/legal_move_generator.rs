//! Legal destination generation for a single piece.
//!
//! Pipeline: pseudo-legal candidates from `moves`, then occupancy and
//! line-of-sight filters, then the own-king-safety filter played out on a
//! duplicate board. Candidate order from the generators is preserved.

use tracing::trace;

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceType, Square};
use crate::move_generation::legal_move_checks::{any_blocking, king_would_be_in_check};
use crate::move_generation::legal_move_shared::candidate_squares;
use crate::moves::move_descriptions::{ChessMove, EnPassantCapture};
use crate::moves::pawn_moves::{pawn_captures, pawn_moves};

/// Legal destinations of the piece on `square`, en passant and castling
/// excluded.
pub fn legal_moves(board: &Board, square: Square) -> Result<Vec<Square>, ChessErrors> {
    let piece = board.piece_at(square).ok_or(ChessErrors::NoPieceAt(square))?;
    let side = piece.side;
    let enemy = side.opposite();

    let candidates: Vec<Square> = if piece.piece_type == PieceType::Pawn {
        let mut out: Vec<Square> = pawn_moves(side, square)
            .into_iter()
            .filter(|to| !board.is_occupied(*to) && !any_blocking(board, square, *to))
            .collect();
        out.extend(
            pawn_captures(side, square)
                .into_iter()
                .filter(|to| board.occupied_by(enemy, *to)),
        );
        out
    } else {
        let slider = piece.piece_type.is_slider();
        candidate_squares(piece, square)
            .into_iter()
            .filter(|to| !slider || !any_blocking(board, square, *to))
            .filter(|to| !board.occupied_by(side, *to))
            .collect()
    };

    Ok(candidates
        .into_iter()
        .filter(|to| {
            let exposed = king_would_be_in_check(board, side, square, *to, None);
            if exposed {
                trace!(from = %square, to = %to, "dropping move that exposes own king");
            }
            !exposed
        })
        .collect())
}

/// En-passant captures available to the pawn on `square`, given the most
/// recent half-move. Empty for anything but a pawn.
pub fn en_passant_moves(
    board: &Board,
    square: Square,
    last_move: Option<&ChessMove>,
) -> Vec<EnPassantCapture> {
    let Some(piece) = board.piece_at(square) else {
        return Vec::new();
    };
    let Some(last) = last_move else {
        return Vec::new();
    };
    if piece.piece_type != PieceType::Pawn
        || last.side() != piece.side.opposite()
        || !last.is_double_pawn_push()
    {
        return Vec::new();
    }

    pawn_captures(piece.side, square)
        .into_iter()
        .filter(|to| !board.is_occupied(*to))
        .filter_map(|to| {
            // The bypassing pawn sits beside us: destination file, our rank.
            let captured = to.offset(0, -piece.side.forward())?;
            let bypassed = last.to == captured && board.piece_at(captured) == Some(last.piece);
            bypassed.then_some(EnPassantCapture { to, captured })
        })
        .filter(|ep| !king_would_be_in_check(board, piece.side, square, ep.to, Some(ep.captured)))
        .collect()
}

/// Minimal prefix distinguishing the piece on `from` from other pieces of the
/// same side and type that could also legally reach `to`.
///
/// Empty when no rival exists; the rank digit when a rival shares the file;
/// the file letter when a rival shares the rank or when no rival shares
/// either; the full square when rivals share both.
pub fn disambiguate(board: &Board, from: Square, to: Square) -> Result<String, ChessErrors> {
    let piece = board.piece_at(from).ok_or(ChessErrors::NoPieceAt(from))?;

    let rivals: Vec<Square> = board
        .pieces_of(piece.side)
        .into_iter()
        .filter(|(p, sq)| *p == piece && *sq != from)
        .filter(|(_, sq)| {
            legal_moves(board, *sq)
                .map(|moves| moves.contains(&to))
                .unwrap_or(false)
        })
        .map(|(_, sq)| sq)
        .collect();

    if rivals.is_empty() {
        return Ok(String::new());
    }

    let same_file = rivals.iter().any(|sq| sq.file() == from.file());
    let same_rank = rivals.iter().any(|sq| sq.rank() == from.rank());

    Ok(match (same_file, same_rank) {
        (true, true) => from.to_string(),
        (true, false) => from.rank_char().to_string(),
        _ => from.file_char().to_string(),
    })
}
