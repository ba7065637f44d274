//! Standard algebraic notation for recorded moves.

use crate::game::game_config::CastleNotation;
use crate::game_state::chess_types::PieceType;
use crate::moves::move_descriptions::{CheckKind, ChessMove, MoveKind};

/// Fixed token for a castle. Castles never carry a check suffix.
pub fn castle_token(kind: MoveKind, notation: CastleNotation) -> Option<&'static str> {
    match (kind, notation) {
        (MoveKind::KingsideCastle, CastleNotation::Zeros) => Some("0-0"),
        (MoveKind::QueensideCastle, CastleNotation::Zeros) => Some("0-0-0"),
        (MoveKind::KingsideCastle, CastleNotation::Letters) => Some("O-O"),
        (MoveKind::QueensideCastle, CastleNotation::Letters) => Some("O-O-O"),
        _ => None,
    }
}

fn check_suffix(check: CheckKind) -> &'static str {
    match check {
        CheckKind::None => "",
        CheckKind::Check => "+",
        CheckKind::Checkmate => "#",
    }
}

/// Renders one half-move ("Nbd7", "exf6", "Rd8#", "0-0").
pub fn format_move(mv: &ChessMove, notation: CastleNotation) -> String {
    let mut out = String::with_capacity(8);

    if let Some(token) = castle_token(mv.kind, notation) {
        out.push_str(token);
        return out;
    }

    match mv.piece.piece_type.notation_letter() {
        Some(letter) => {
            out.push(letter);
            out.push_str(&mv.disambiguation.to_ascii_lowercase());
        }
        None if mv.kind.is_capture() => out.push(mv.from.file_char().to_ascii_lowercase()),
        None => {}
    }

    if mv.kind.is_capture() {
        out.push('x');
    }
    out.push_str(&mv.to.to_string().to_ascii_lowercase());

    if let Some(letter) = mv.promotion.and_then(PieceType::notation_letter) {
        out.push('=');
        out.push(letter);
    }

    out.push_str(check_suffix(mv.check));
    out
}

/// One token per half-move, in play order.
pub fn format_history<'a, I>(moves: I, notation: CastleNotation) -> Vec<String>
where
    I: IntoIterator<Item = &'a ChessMove>,
{
    moves.into_iter().map(|mv| format_move(mv, notation)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, Square};

    fn sq(text: &str) -> Square {
        Square::parse(text).expect("test square should parse")
    }

    #[test]
    fn pieces_and_pawns() {
        let nf3 = ChessMove::new(Piece::WHITE_KNIGHT, sq("G1"), sq("F3"), MoveKind::Normal);
        assert_eq!(format_move(&nf3, CastleNotation::Zeros), "Nf3");

        let e4 = ChessMove::new(Piece::WHITE_PAWN, sq("E2"), sq("E4"), MoveKind::Normal);
        assert_eq!(format_move(&e4, CastleNotation::Zeros), "e4");

        let exd5 = ChessMove::new(Piece::WHITE_PAWN, sq("E4"), sq("D5"), MoveKind::Capture);
        assert_eq!(format_move(&exd5, CastleNotation::Zeros), "exd5");

        let exf6 = ChessMove::new(Piece::WHITE_PAWN, sq("E5"), sq("F6"), MoveKind::EnPassant);
        assert_eq!(format_move(&exf6, CastleNotation::Zeros), "exf6");
    }

    #[test]
    fn disambiguation_checks_and_promotion() {
        let nbd7 = ChessMove::new(Piece::BLACK_KNIGHT, sq("B8"), sq("D7"), MoveKind::Normal)
            .with_disambiguation("B");
        assert_eq!(format_move(&nbd7, CastleNotation::Zeros), "Nbd7");

        let rfe8 = ChessMove::new(Piece::BLACK_ROOK, sq("F8"), sq("E8"), MoveKind::Normal)
            .with_disambiguation("F")
            .with_check(CheckKind::Check);
        assert_eq!(format_move(&rfe8, CastleNotation::Zeros), "Rfe8+");

        let rd8 = ChessMove::new(Piece::WHITE_ROOK, sq("D1"), sq("D8"), MoveKind::Normal)
            .with_check(CheckKind::Checkmate);
        assert_eq!(format_move(&rd8, CastleNotation::Zeros), "Rd8#");

        let n1 = ChessMove::new(Piece::WHITE_ROOK, sq("A1"), sq("A3"), MoveKind::Capture)
            .with_disambiguation("A1");
        assert_eq!(format_move(&n1, CastleNotation::Zeros), "Ra1xa3");

        let promo = ChessMove::new(Piece::WHITE_PAWN, sq("B7"), sq("A8"), MoveKind::Capture)
            .with_promotion(PieceType::Queen)
            .with_check(CheckKind::Check);
        assert_eq!(format_move(&promo, CastleNotation::Zeros), "bxa8=Q+");
    }

    #[test]
    fn castles_ignore_check_marks() {
        let short = ChessMove::new(
            Piece::WHITE_KING,
            sq("E1"),
            sq("G1"),
            MoveKind::KingsideCastle,
        );
        let long = ChessMove::new(
            Piece::BLACK_KING,
            sq("E8"),
            sq("C8"),
            MoveKind::QueensideCastle,
        )
        .with_check(CheckKind::Check);
        let mating = short.clone().with_check(CheckKind::Checkmate);

        assert_eq!(format_move(&mating, CastleNotation::Zeros), "0-0");
        assert_eq!(
            format_history([&short, &long], CastleNotation::Zeros),
            vec!["0-0", "0-0-0"]
        );
        assert_eq!(
            format_history([&short, &long], CastleNotation::Letters),
            vec!["O-O", "O-O-O"]
        );
    }
}
