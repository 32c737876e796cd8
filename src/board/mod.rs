//! Chess board representation and game rules.
//!
//! Uses an 8x8 mailbox grid with per-piece pseudo-legal move generation.
//! Legality is decided by a make/probe/unmake protocol: each candidate is
//! applied to the live game, the mover's king is tested for attack, and the
//! move is reversed. Castling, en passant, promotion, and draw rules are
//! outside this crate's rule set.
//!
//! # Example
//! ```
//! use chess_rules::board::Game;
//!
//! let mut game = Game::new();
//! let moves = game.legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod builder;
mod error;
mod grid;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::GameBuilder;
pub use error::{PositionError, SquareError};
pub use grid::Board;
pub use state::Game;
pub use types::{Color, Move, MoveList, Piece, Square};
