//! Error types for board operations.

use std::fmt;

use super::types::Color;

/// Error type for square construction and parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for invalid position setups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// A color has no king on the board
    MissingKing { color: Color },
    /// A color has more than one king on the board
    DuplicateKing { color: Color },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::MissingKing { color } => {
                write!(f, "{color} has no king on the board")
            }
            PositionError::DuplicateKing { color } => {
                write!(f, "{color} has more than one king on the board")
            }
        }
    }
}

impl std::error::Error for PositionError {}
