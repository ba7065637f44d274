//! Terminal-oriented Unicode board renderer.
//!
//! Debug view of a `Board`, rank 8 at the top, files labelled on both edges.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;

const EMPTY_SQUARE: char = '·';

/// Render the board to a Unicode string for terminal output.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            let square = Square::new_unchecked(file, rank);
            match board.piece_at(square) {
                Some(piece) => out.push(piece.glyph()),
                None => out.push(EMPTY_SQUARE),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

/// ASCII variant using piece letters, uppercase for White.
pub fn render_board_ascii(board: &Board) -> String {
    (0..8u8)
        .rev()
        .map(|rank| {
            (0..8u8)
                .map(|file| {
                    board
                        .piece_at(Square::new_unchecked(file, rank))
                        .map_or('.', |piece| piece.letter())
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
