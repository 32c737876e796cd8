pub mod board;

pub use board::{Board, Color, Game, GameBuilder, Move, Piece, Square};
