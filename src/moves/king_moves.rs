use crate::game_state::chess_types::Square;

/// Clockwise from north-east: NE, E, SE, S, SW, W, NW, N.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
];

/// Adjacent squares, clipped to the board, ignoring occupancy.
pub fn king_moves(square: Square) -> Vec<Square> {
    KING_OFFSETS
        .iter()
        .filter_map(|(d_file, d_rank)| square.offset(*d_file, *d_rank))
        .collect()
}

#[inline]
pub fn king_reaches(from: Square, to: Square) -> bool {
    from != to && from.file_distance(to) <= 1 && from.rank_distance(to) <= 1
}
