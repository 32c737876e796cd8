use super::super::grid::Board;
use super::super::types::{Color, MoveList, Piece, Square};

const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Board {
    /// King steps: one square in each direction, blocked only by friendly
    /// occupancy. No castling.
    pub(crate) fn king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        for (d_rank, d_file) in KING_OFFSETS {
            if let Some(to) = from.offset(d_rank, d_file) {
                if self.color_on(to) != Some(color) {
                    moves.push(self.create_move(from, to));
                }
            }
        }
    }

    pub(crate) fn find_king(&self, color: Color) -> Option<Square> {
        for rank in 0..8 {
            for file in 0..8 {
                let sq = Square(rank, file);
                if self.piece_at(sq) == Some((color, Piece::King)) {
                    return Some(sq);
                }
            }
        }
        None
    }
}
