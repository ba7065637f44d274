//! Move records and move commands.
//!
//! `ChessMove` is what ends up in the game history: immutable once built,
//! carrying everything the notation formatter needs. `CandidateMove` is a
//! command a player may issue, as offered by the legality engine.

use crate::game_state::chess_types::{Piece, PieceType, Side, Square, Wing};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Normal,
    Capture,
    EnPassant,
    QueensideCastle,
    KingsideCastle,
}

impl MoveKind {
    #[inline]
    pub const fn is_capture(self) -> bool {
        matches!(self, MoveKind::Capture | MoveKind::EnPassant)
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self, MoveKind::QueensideCastle | MoveKind::KingsideCastle)
    }

    #[inline]
    pub const fn castle(wing: Wing) -> Self {
        match wing {
            Wing::Queenside => MoveKind::QueensideCastle,
            Wing::Kingside => MoveKind::KingsideCastle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckKind {
    #[default]
    None,
    Check,
    Checkmate,
}

/// One half-move of the game history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessMove {
    pub piece: Piece,
    /// For castles, the king's origin square.
    pub from: Square,
    /// For castles, the king's destination square.
    pub to: Square,
    pub kind: MoveKind,
    pub check: CheckKind,
    pub promotion: Option<PieceType>,
    /// File letter, rank digit, or full square distinguishing this piece from
    /// others of its type that could reach `to`; empty when unambiguous.
    pub disambiguation: String,
}

impl ChessMove {
    pub fn new(piece: Piece, from: Square, to: Square, kind: MoveKind) -> Self {
        Self {
            piece,
            from,
            to,
            kind,
            check: CheckKind::None,
            promotion: None,
            disambiguation: String::new(),
        }
    }

    pub fn with_check(mut self, check: CheckKind) -> Self {
        self.check = check;
        self
    }

    pub fn with_disambiguation(mut self, disambiguation: impl Into<String>) -> Self {
        self.disambiguation = disambiguation.into();
        self
    }

    pub fn with_promotion(mut self, promotion: PieceType) -> Self {
        self.promotion = Some(promotion);
        self
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.piece.side
    }

    /// True for a pawn advancing two ranks in one move.
    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece.piece_type == PieceType::Pawn
            && !self.kind.is_castle()
            && self.from.file() == self.to.file()
            && self.from.rank_distance(self.to) == 2
    }
}

/// An en-passant capture: the destination the pawn moves to and the square
/// of the pawn it removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnPassantCapture {
    pub to: Square,
    pub captured: Square,
}

/// A command the side to move may issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateMove {
    Regular {
        from: Square,
        to: Square,
        capture_square: Option<Square>,
    },
    Castle {
        side: Side,
        wing: Wing,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_push_detection() {
        let e2 = Square::parse("E2").unwrap();
        let e4 = Square::parse("E4").unwrap();
        let e3 = Square::parse("E3").unwrap();
        assert!(ChessMove::new(Piece::WHITE_PAWN, e2, e4, MoveKind::Normal).is_double_pawn_push());
        assert!(!ChessMove::new(Piece::WHITE_PAWN, e2, e3, MoveKind::Normal).is_double_pawn_push());
        assert!(!ChessMove::new(Piece::WHITE_ROOK, e2, e4, MoveKind::Normal).is_double_pawn_push());
    }

    #[test]
    fn builders_fill_optional_fields() {
        let b1 = Square::parse("B1").unwrap();
        let d2 = Square::parse("D2").unwrap();
        let mv = ChessMove::new(Piece::BLACK_KNIGHT, b1, d2, MoveKind::Normal)
            .with_check(CheckKind::Check)
            .with_disambiguation("B");
        assert_eq!(mv.check, CheckKind::Check);
        assert_eq!(mv.disambiguation, "B");
        assert_eq!(mv.promotion, None);
        assert_eq!(mv.side(), Side::Black);
        assert!(MoveKind::EnPassant.is_capture());
        assert!(MoveKind::castle(Wing::Kingside).is_castle());
    }
}
