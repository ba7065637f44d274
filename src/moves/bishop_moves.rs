use crate::game_state::chess_types::Square;
use crate::moves::rook_moves::trace_ray;

/// (+file,+rank), (+file,-rank), (-file,+rank), (-file,-rank).
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Every square along each diagonal to the board edge, nearest first,
/// ignoring occupancy.
pub fn bishop_moves(square: Square) -> Vec<Square> {
    BISHOP_DIRECTIONS
        .iter()
        .flat_map(|(d_file, d_rank)| trace_ray(square, *d_file, *d_rank))
        .collect()
}

/// True if `to` lies on a diagonal through `from` (and differs from it).
#[inline]
pub fn bishop_reaches(from: Square, to: Square) -> bool {
    let fd = from.file_distance(to);
    fd > 0 && fd == from.rank_distance(to)
}

#[cfg(test)]
mod tests {
    use super::{bishop_moves, bishop_reaches};
    use crate::game_state::chess_types::Square;

    fn names(squares: Vec<Square>) -> Vec<String> {
        squares.into_iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bishop_rays_from_e5() {
        assert_eq!(
            names(bishop_moves(Square::parse("E5").unwrap())),
            vec!["F6", "G7", "H8", "F4", "G3", "H2", "D6", "C7", "B8", "D4", "C3", "B2", "A1"]
        );
    }

    #[test]
    fn bishop_rays_from_corner() {
        assert_eq!(
            names(bishop_moves(Square::parse("A8").unwrap())),
            vec!["B7", "C6", "D5", "E4", "F3", "G2", "H1"]
        );
    }

    #[test]
    fn bishop_reach_geometry() {
        let a1 = Square::parse("A1").unwrap();
        assert!(bishop_reaches(a1, Square::parse("G7").unwrap()));
        assert!(bishop_reaches(a1, Square::parse("E5").unwrap()));
        assert!(!bishop_reaches(a1, Square::parse("G8").unwrap()));
    }
}
