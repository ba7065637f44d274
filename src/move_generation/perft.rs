//! Perft: exhaustive legal move tree counting.
//!
//! Walks every legal continuation to a fixed depth using the same legality
//! engine the game orchestrator uses, and tallies leaf nodes by move kind.
//! Known node counts from the starting position validate the engine end to
//! end.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{king_home, revoke_rights_for_move};
use crate::game_state::chess_types::{CastlingRights, Piece, PieceType, Side, Square};
use crate::move_generation::legal_move_apply::{apply_castle_to_board, apply_move_to_board};
use crate::move_generation::legal_move_checks::{in_check, is_checkmate};
use crate::move_generation::legal_move_generator::{en_passant_moves, legal_moves};
use crate::move_generation::legal_moves_castling::castling_moves;
use crate::moves::move_descriptions::{ChessMove, MoveKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Everything the legality engine needs to enumerate a side's moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerftPosition {
    pub board: Board,
    pub side_to_move: Side,
    pub castling_rights: CastlingRights,
    pub last_move: Option<ChessMove>,
}

impl PerftPosition {
    pub fn new_game() -> Self {
        Self {
            board: Board::new_game(),
            side_to_move: Side::White,
            castling_rights: CastlingRights::all(),
            last_move: None,
        }
    }

    /// Every position reachable in one half-move: regular moves and en
    /// passant per piece in board order, then castles.
    pub fn successors(&self) -> Result<Vec<PerftPosition>, ChessErrors> {
        let side = self.side_to_move;
        let mut out = Vec::new();

        for (piece, from) in self.board.pieces_of(side) {
            for to in legal_moves(&self.board, from)? {
                let kind = if self.board.is_occupied(to) {
                    MoveKind::Capture
                } else {
                    MoveKind::Normal
                };
                out.push(self.play(ChessMove::new(piece, from, to, kind), None)?);
            }
            if piece.piece_type == PieceType::Pawn {
                for ep in en_passant_moves(&self.board, from, self.last_move.as_ref()) {
                    let mv = ChessMove::new(piece, from, ep.to, MoveKind::EnPassant);
                    out.push(self.play(mv, Some(ep.captured))?);
                }
            }
        }

        for (wing, king_to) in castling_moves(&self.board, &self.castling_rights, side) {
            let mut next = self.clone();
            apply_castle_to_board(&mut next.board, side, wing)?;
            next.castling_rights.revoke_side(side);
            next.side_to_move = side.opposite();
            next.last_move = Some(ChessMove::new(
                Piece::new(PieceType::King, side),
                king_home(side),
                king_to,
                MoveKind::castle(wing),
            ));
            out.push(next);
        }

        Ok(out)
    }

    fn play(
        &self,
        mv: ChessMove,
        capture_square: Option<Square>,
    ) -> Result<PerftPosition, ChessErrors> {
        let mut next = self.clone();
        apply_move_to_board(&mut next.board, mv.from, mv.to, capture_square)?;
        revoke_rights_for_move(&mut next.castling_rights, mv.piece, mv.from);
        next.side_to_move = self.side_to_move.opposite();
        next.last_move = Some(mv);
        Ok(next)
    }

    fn leaf_counts(&self) -> PerftCounts {
        let mut counts = PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
        if let Some(mv) = &self.last_move {
            if mv.kind.is_capture() {
                counts.captures += 1;
            }
            if mv.kind == MoveKind::EnPassant {
                counts.en_passant += 1;
            }
            if mv.kind.is_castle() {
                counts.castles += 1;
            }
        }
        if in_check(&self.board, self.side_to_move) {
            counts.checks += 1;
            if is_checkmate(&self.board, self.side_to_move, self.last_move.as_ref()) {
                counts.checkmates += 1;
            }
        }
        counts
    }
}

/// Counts the leaves `depth` half-moves below `position`.
pub fn perft(position: &PerftPosition, depth: u8) -> Result<PerftCounts, ChessErrors> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }
    let mut total = PerftCounts::default();
    perft_recurse(position, depth, &mut total)?;
    Ok(total)
}

fn perft_recurse(
    position: &PerftPosition,
    depth: u8,
    counts: &mut PerftCounts,
) -> Result<(), ChessErrors> {
    for child in position.successors()? {
        if depth == 1 {
            counts.merge(child.leaf_counts());
        } else {
            perft_recurse(&child, depth - 1, counts)?;
        }
    }
    Ok(())
}

/// Leaf count below each root move, keyed by "FROM-TO" text. Handy for
/// narrowing down a count mismatch.
pub fn perft_divide(
    position: &PerftPosition,
    depth: u8,
) -> Result<Vec<(String, usize)>, ChessErrors> {
    let mut out = Vec::new();
    for child in position.successors()? {
        let label = child
            .last_move
            .as_ref()
            .map(|mv| format!("{}-{}", mv.from, mv.to))
            .unwrap_or_default();
        let nodes = perft(&child, depth.saturating_sub(1))?.nodes;
        out.push((label, nodes));
    }
    Ok(out)
}
