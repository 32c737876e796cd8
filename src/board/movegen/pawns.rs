use super::super::grid::Board;
use super::super::types::{Color, MoveList, Square};

impl Board {
    /// Pawn pushes and diagonal captures. No en passant and no promotion:
    /// a pawn on the last rank generates nothing.
    pub(crate) fn pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();
        let rank = from.0 as isize;
        let file = from.1 as isize;

        let forward_rank = rank + dir;
        if !(0..8).contains(&forward_rank) {
            return;
        }

        let forward = Square(forward_rank as usize, from.1);
        if self.is_empty(forward) {
            moves.push(self.create_move(from, forward));
            if from.0 == color.pawn_start_rank() {
                let double = Square((rank + 2 * dir) as usize, from.1);
                if self.is_empty(double) {
                    moves.push(self.create_move(from, double));
                }
            }
        }

        for d_file in [-1, 1] {
            let capture_file = file + d_file;
            if (0..8).contains(&capture_file) {
                let target = Square(forward_rank as usize, capture_file as usize);
                if let Some(target_color) = self.color_on(target) {
                    if target_color != color {
                        moves.push(self.create_move(from, target));
                    }
                }
            }
        }
    }
}
