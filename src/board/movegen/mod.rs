//! Pseudo-legal move generation.
//!
//! One generator per piece kind, each appending board-geometry-valid moves
//! without regard to check. The legality filter in [`super::Game`] removes
//! moves that would expose the mover's king.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::grid::Board;
use super::types::{Color, MoveList, Piece, Square};

impl Board {
    /// All pseudo-legal moves for `color`: every square is scanned and each
    /// piece of that color dispatches to its generator.
    #[must_use]
    pub fn pseudo_legal_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        for rank in 0..8 {
            for file in 0..8 {
                let from = Square(rank, file);
                if let Some((c, piece)) = self.piece_at(from) {
                    if c == color {
                        self.piece_moves(from, color, piece, &mut moves);
                    }
                }
            }
        }
        moves
    }

    /// Dispatch from piece kind to its generator. Exhaustive over the six
    /// kinds, so a new kind cannot be silently skipped.
    pub(crate) fn piece_moves(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        moves: &mut MoveList,
    ) {
        match piece {
            Piece::Pawn => self.pawn_moves(from, color, moves),
            Piece::Knight => self.knight_moves(from, color, moves),
            Piece::Bishop => self.slider_moves(from, color, sliders::BISHOP_DIRECTIONS, moves),
            Piece::Rook => self.slider_moves(from, color, sliders::ROOK_DIRECTIONS, moves),
            Piece::Queen => self.slider_moves(from, color, sliders::QUEEN_DIRECTIONS, moves),
            Piece::King => self.king_moves(from, color, moves),
        }
    }

    /// Whether `square` is the destination of any pseudo-legal move by
    /// `by`. Attacks are discovered by exhaustive move simulation; there is
    /// no separate attack-map structure.
    #[must_use]
    pub fn square_attacked(&self, square: Square, by: Color) -> bool {
        self.pseudo_legal_moves(by).iter().any(|m| m.to() == square)
    }
}
