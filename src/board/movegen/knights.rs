use super::super::grid::Board;
use super::super::types::{Color, MoveList, Square};

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

impl Board {
    /// Knight jumps: in bounds and not occupied by a friendly piece.
    pub(crate) fn knight_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for (d_rank, d_file) in KNIGHT_OFFSETS {
            if let Some(to) = from.offset(d_rank, d_file) {
                if self.color_on(to) != Some(color) {
                    moves.push(self.create_move(from, to));
                }
            }
        }
    }
}
