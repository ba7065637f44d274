use crate::game_state::chess_types::Square;

/// Positive file, negative file, positive rank, negative rank.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// Every square along each rook line to the board edge, nearest first,
/// ignoring occupancy.
pub fn rook_moves(square: Square) -> Vec<Square> {
    ROOK_DIRECTIONS
        .iter()
        .flat_map(|(d_file, d_rank)| trace_ray(square, *d_file, *d_rank))
        .collect()
}

/// True if `to` shares a file or rank with `from` (and differs from it).
#[inline]
pub fn rook_reaches(from: Square, to: Square) -> bool {
    from != to && (from.file() == to.file() || from.rank() == to.rank())
}

/// Squares from `square` (exclusive) stepping by `(file_step, rank_step)`
/// until the edge of the board.
pub fn trace_ray(square: Square, file_step: i8, rank_step: i8) -> Vec<Square> {
    let mut out = Vec::with_capacity(7);
    let mut current = square;
    while let Some(next) = current.offset(file_step, rank_step) {
        out.push(next);
        current = next;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{rook_moves, rook_reaches};
    use crate::game_state::chess_types::Square;

    fn names(squares: Vec<Square>) -> Vec<String> {
        squares.into_iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn rook_rays_from_e5() {
        assert_eq!(
            names(rook_moves(Square::parse("E5").unwrap())),
            vec![
                "F5", "G5", "H5", "D5", "C5", "B5", "A5", "E6", "E7", "E8", "E4", "E3", "E2",
                "E1"
            ]
        );
    }

    #[test]
    fn rook_rays_from_corner() {
        assert_eq!(
            names(rook_moves(Square::parse("A1").unwrap())),
            vec![
                "B1", "C1", "D1", "E1", "F1", "G1", "H1", "A2", "A3", "A4", "A5", "A6", "A7",
                "A8"
            ]
        );
    }

    #[test]
    fn rook_reach_geometry() {
        let a1 = Square::parse("A1").unwrap();
        assert!(rook_reaches(a1, Square::parse("A5").unwrap()));
        assert!(rook_reaches(a1, Square::parse("F1").unwrap()));
        assert!(!rook_reaches(a1, Square::parse("B5").unwrap()));
        assert!(!rook_reaches(a1, a1));
    }
}
