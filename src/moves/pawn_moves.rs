use crate::game_state::chess_types::{Side, Square};

/// Forward pawn steps ignoring occupancy: the double step first (only from the
/// side's starting rank), then the single step.
pub fn pawn_moves(side: Side, square: Square) -> Vec<Square> {
    let forward = side.forward();
    let mut out = Vec::with_capacity(2);
    if square.rank() == side.pawn_start_rank() {
        if let Some(double) = square.offset(0, 2 * forward) {
            out.push(double);
        }
    }
    if let Some(single) = square.offset(0, forward) {
        out.push(single);
    }
    out
}

/// The two diagonal-forward squares, toward the H file first.
pub fn pawn_captures(side: Side, square: Square) -> Vec<Square> {
    let forward = side.forward();
    [1, -1]
        .into_iter()
        .filter_map(|d_file| square.offset(d_file, forward))
        .collect()
}

/// True if a pawn of `side` on `from` attacks `to`.
#[inline]
pub fn pawn_attacks(side: Side, from: Square, to: Square) -> bool {
    from.file_distance(to) == 1 && to.rank() as i8 - from.rank() as i8 == side.forward()
}
