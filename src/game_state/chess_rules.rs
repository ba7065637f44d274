//! Canonical chess-rule constants.
//!
//! Starting placement and the fixed home squares that castling depends on.

use crate::game_state::chess_types::{CastlingRights, Piece, PieceType, Side, Square, Wing};

/// Back-rank piece order from the A file to the H file.
pub const BACK_RANK_ORDER: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

const KING_HOME_FILE: u8 = 4;
const QUEENSIDE_ROOK_FILE: u8 = 0;
const KINGSIDE_ROOK_FILE: u8 = 7;

/// The 32 pieces of the standard starting position.
pub fn starting_position() -> Vec<(Piece, Square)> {
    let mut out = Vec::with_capacity(32);
    for side in [Side::White, Side::Black] {
        for (file, piece_type) in BACK_RANK_ORDER.iter().enumerate() {
            out.push((
                Piece::new(*piece_type, side),
                home_square(file as u8, side.back_rank()),
            ));
        }
        for file in 0..8 {
            out.push((
                Piece::new(PieceType::Pawn, side),
                home_square(file, side.pawn_start_rank()),
            ));
        }
    }
    out
}

/// Square the king of `side` starts on (E1 / E8).
#[inline]
pub fn king_home(side: Side) -> Square {
    home_square(KING_HOME_FILE, side.back_rank())
}

/// Square the rook of `side` on `wing` starts on (A1 / H1 / A8 / H8).
#[inline]
pub fn rook_home(side: Side, wing: Wing) -> Square {
    let file = match wing {
        Wing::Queenside => QUEENSIDE_ROOK_FILE,
        Wing::Kingside => KINGSIDE_ROOK_FILE,
    };
    home_square(file, side.back_rank())
}

/// Where the king lands when castling (C / G file).
#[inline]
pub fn castle_king_destination(side: Side, wing: Wing) -> Square {
    let file = match wing {
        Wing::Queenside => 2,
        Wing::Kingside => 6,
    };
    home_square(file, side.back_rank())
}

/// Where the rook lands when castling (D / F file).
#[inline]
pub fn castle_rook_destination(side: Side, wing: Wing) -> Square {
    let file = match wing {
        Wing::Queenside => 3,
        Wing::Kingside => 5,
    };
    home_square(file, side.back_rank())
}

/// Which castling wing, if any, a rook standing on `square` guards.
pub fn rook_home_wing(side: Side, square: Square) -> Option<Wing> {
    [Wing::Queenside, Wing::Kingside]
        .into_iter()
        .find(|wing| rook_home(side, *wing) == square)
}

/// Clears the castling rights forfeited by `piece` leaving `from`: a king
/// move clears both wings, a rook leaving its home square clears that wing.
/// Returns true if any flag changed.
pub fn revoke_rights_for_move(rights: &mut CastlingRights, piece: Piece, from: Square) -> bool {
    let before = *rights;
    match piece.piece_type {
        PieceType::King => rights.revoke_side(piece.side),
        PieceType::Rook => {
            if let Some(wing) = rook_home_wing(piece.side, from) {
                rights.revoke(piece.side, wing);
            }
        }
        _ => {}
    }
    *rights != before
}

#[inline]
fn home_square(file: u8, rank: u8) -> Square {
    Square::new_unchecked(file, rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_squares() {
        assert_eq!(king_home(Side::White).to_string(), "E1");
        assert_eq!(king_home(Side::Black).to_string(), "E8");
        assert_eq!(rook_home(Side::White, Wing::Queenside).to_string(), "A1");
        assert_eq!(rook_home(Side::Black, Wing::Kingside).to_string(), "H8");
        assert_eq!(castle_king_destination(Side::Black, Wing::Queenside).to_string(), "C8");
        assert_eq!(castle_rook_destination(Side::White, Wing::Kingside).to_string(), "F1");
    }

    #[test]
    fn starting_position_has_32_pieces() {
        let pieces = starting_position();
        assert_eq!(pieces.len(), 32);
        assert!(pieces
            .iter()
            .any(|(p, sq)| *p == Piece::WHITE_QUEEN && sq.to_string() == "D1"));
        assert!(pieces
            .iter()
            .any(|(p, sq)| *p == Piece::BLACK_KING && sq.to_string() == "E8"));
    }

    #[test]
    fn moving_pieces_forfeit_rights() {
        let mut rights = CastlingRights::all();
        let a8 = Square::parse("A8").unwrap();
        let a5 = Square::parse("A5").unwrap();
        assert!(!revoke_rights_for_move(&mut rights, Piece::BLACK_ROOK, a5));
        assert!(revoke_rights_for_move(&mut rights, Piece::BLACK_ROOK, a8));
        assert!(!rights.allowed(Side::Black, Wing::Queenside));
        assert!(rights.allowed(Side::Black, Wing::Kingside));

        assert!(revoke_rights_for_move(&mut rights, Piece::WHITE_KING, a5));
        assert!(!rights.allowed(Side::White, Wing::Kingside));
        assert!(!revoke_rights_for_move(&mut rights, Piece::WHITE_KING, a5));
    }

    #[test]
    fn rook_wings() {
        let h1 = Square::parse("H1").unwrap();
        assert_eq!(rook_home_wing(Side::White, h1), Some(Wing::Kingside));
        assert_eq!(rook_home_wing(Side::Black, h1), None);
    }
}
