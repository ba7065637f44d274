//! Captured-piece bookkeeping.
//!
//! Counts are kept per side for the pieces that side has LOST, so each side's
//! display is drawn in its own glyphs.

use crate::game_state::chess_types::{Piece, PieceType, Side};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedPieces {
    // [side][piece type]
    counts: [[u8; 6]; 2],
}

impl CapturedPieces {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `piece` was taken off the board.
    pub fn record(&mut self, piece: Piece) {
        let slot = &mut self.counts[piece.side.index()][piece.piece_type.index()];
        *slot = slot.saturating_add(1);
    }

    pub fn count(&self, side: Side, piece_type: PieceType) -> u8 {
        self.counts[side.index()][piece_type.index()]
    }

    /// Number of `side`'s pieces captured so far.
    pub fn total(&self, side: Side) -> u32 {
        self.counts[side.index()].iter().map(|c| u32::from(*c)).sum()
    }

    /// Material value `side` has lost.
    pub fn material_lost(&self, side: Side) -> u32 {
        PieceType::ALL
            .iter()
            .filter_map(|pt| {
                pt.material_value()
                    .map(|value| u32::from(value) * u32::from(self.count(side, *pt)))
            })
            .sum()
    }

    pub fn clear(&mut self) {
        self.counts = [[0; 6]; 2];
    }

    /// Glyphs of `side`'s lost pieces, most valuable type first, one glyph
    /// per piece, types separated by a space ("♕ ♙♙").
    pub fn format(&self, side: Side) -> String {
        let mut types: Vec<PieceType> = PieceType::ALL
            .into_iter()
            .filter(|pt| self.count(side, *pt) > 0)
            .collect();
        // Stable sort keeps PieceType order between equal values.
        types.sort_by_key(|pt| std::cmp::Reverse(pt.material_value().unwrap_or(0)));

        types
            .into_iter()
            .map(|pt| {
                let glyph = Piece::new(pt, side).glyph();
                std::iter::repeat(glyph)
                    .take(usize::from(self.count(side, pt)))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
