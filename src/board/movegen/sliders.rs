use super::super::grid::Board;
use super::super::types::{Color, MoveList, Square};

pub(crate) const ROOK_DIRECTIONS: &[(isize, isize)] = &[(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const BISHOP_DIRECTIONS: &[(isize, isize)] = &[(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const QUEEN_DIRECTIONS: &[(isize, isize)] = &[
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Board {
    /// Shared walker for rook, bishop, and queen rays. Each ray continues
    /// over empty squares, includes the first opposing piece as a capture,
    /// and stops without including a friendly piece or the board edge.
    pub(crate) fn slider_moves(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        for &(d_rank, d_file) in directions {
            let mut current = from;
            while let Some(to) = current.offset(d_rank, d_file) {
                match self.color_on(to) {
                    None => {
                        moves.push(self.create_move(from, to));
                        current = to;
                    }
                    Some(target_color) if target_color != color => {
                        moves.push(self.create_move(from, to));
                        break;
                    }
                    Some(_) => break,
                }
            }
        }
    }
}
