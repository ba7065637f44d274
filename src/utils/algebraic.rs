//! Square text interchange.
//!
//! Squares cross the engine boundary as two-character strings: a file letter
//! followed by a rank digit ("E4"). Parsing accepts either letter case,
//! rendering is always uppercase.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Square;

/// Convert "E4"-style text to a square.
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0].to_ascii_uppercase();
    let rank = bytes[1];

    if !(b'A'..=b'H').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidSquare(square.to_owned()));
    }

    Square::from_file_rank(file - b'A', rank - b'1')
}

/// Convert a square to its uppercase text form ("E4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let mut out = String::with_capacity(2);
    out.push(square.file_char());
    out.push(square.rank_char());
    out
}
