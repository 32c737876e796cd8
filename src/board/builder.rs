//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece; there is no position
//! serialization format in this crate.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, GameBuilder, Piece, Square};
//!
//! let game = GameBuilder::new()
//!     .piece(Square(0, 4), Color::White, Piece::King)
//!     .piece(Square(7, 4), Color::Black, Piece::King)
//!     .piece(Square(1, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(game.side_to_move(), Color::White);
//! ```

use super::error::PositionError;
use super::grid::Board;
use super::state::Game;
use super::types::{Color, Piece, Square};

/// A fluent builder for constructing [`Game`] positions.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    /// Create a new empty position builder.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, &piece) in back_rank.iter().enumerate() {
            builder.pieces.push((Square(0, file), Color::White, piece));
            builder.pieces.push((Square(7, file), Color::Black, piece));
            builder
                .pieces
                .push((Square(1, file), Color::White, Piece::Pawn));
            builder
                .pieces
                .push((Square(6, file), Color::Black, Piece::Pawn));
        }
        builder
    }

    /// Place a piece on the board, replacing anything already there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Build the game, validating that each color has exactly one king.
    pub fn build(self) -> Result<Game, PositionError> {
        let mut board = Board::empty();
        let mut kings: [Option<Square>; 2] = [None, None];

        for (square, color, piece) in self.pieces {
            board.set_piece(square, color, piece);
            if piece == Piece::King {
                if kings[color.index()].is_some() {
                    return Err(PositionError::DuplicateKing { color });
                }
                kings[color.index()] = Some(square);
            }
        }

        let white_king = kings[Color::White.index()].ok_or(PositionError::MissingKing {
            color: Color::White,
        })?;
        let black_king = kings[Color::Black.index()].ok_or(PositionError::MissingKing {
            color: Color::Black,
        })?;

        Ok(Game::from_parts(
            board,
            self.side_to_move,
            [white_king, black_king],
        ))
    }
}
