use crate::game_state::chess_types::Square;

/// (file, rank) offsets, clockwise starting from (+1, +2).
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Squares a knight on `square` reaches, ignoring occupancy.
pub fn knight_moves(square: Square) -> Vec<Square> {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|(d_file, d_rank)| square.offset(*d_file, *d_rank))
        .collect()
}

/// True if `to` is a knight's jump away from `from`.
#[inline]
pub fn knight_reaches(from: Square, to: Square) -> bool {
    let fd = from.file_distance(to);
    let rd = from.rank_distance(to);
    fd.abs_diff(rd) == 1 && fd + rd == 3
}
