//! Game state: board, side to move, move log, and the legality filter.

use super::grid::Board;
use super::types::{Color, Move, MoveList, Piece, Square};

/// A chess game: the board, whose turn it is, the move log (which doubles
/// as the undo stack), cached king squares, and terminal-state flags.
///
/// `make_move` performs no legality check; it trusts its caller to supply
/// a move selected from [`Game::legal_moves`] (or a pseudo-legal move
/// during internal probing). Callers wanting safety go through the
/// legality filter.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    log: Vec<Move>,
    king_squares: [Square; 2],
    checkmate: bool,
    stalemate: bool,
}

impl Game {
    /// A new game from the standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            side_to_move: Color::White,
            log: Vec::new(),
            king_squares: [Square(0, 4), Square(7, 4)],
            checkmate: false,
            stalemate: false,
        }
    }

    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        king_squares: [Square; 2],
    ) -> Self {
        debug_assert_eq!(board.find_king(Color::White), Some(king_squares[0]));
        debug_assert_eq!(board.find_king(Color::Black), Some(king_squares[1]));
        Game {
            board,
            side_to_move,
            log: Vec::new(),
            king_squares,
            checkmate: false,
            stalemate: false,
        }
    }

    /// Read-only view of the board, for rendering.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// True when the side to move has no legal moves and is in check.
    /// Refreshed by [`Game::legal_moves`].
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// True when the side to move has no legal moves and is not in check.
    /// Refreshed by [`Game::legal_moves`].
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    /// The applied moves, oldest first.
    #[must_use]
    pub fn log(&self) -> &[Move] {
        &self.log
    }

    /// Number of plies played.
    #[must_use]
    pub fn ply(&self) -> usize {
        self.log.len()
    }

    /// The cached square of `color`'s king. Kept in sync by both
    /// `make_move` and `undo_move`.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// Apply a move: clear the origin, place the moved piece, append to
    /// the log, flip the turn, and track the king square on king moves.
    pub fn make_move(&mut self, mv: Move) {
        self.board.clear_square(mv.from());
        self.board.set_piece(mv.to(), mv.color(), mv.piece());
        if mv.piece() == Piece::King {
            self.king_squares[mv.color().index()] = mv.to();
        }
        self.log.push(mv);
        self.side_to_move = self.side_to_move.opponent();
    }

    /// Reverse the most recent move, restoring the board, turn, and king
    /// cache. A no-op returning `None` when nothing has been played.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.log.pop()?;
        self.board.set_piece(mv.from(), mv.color(), mv.piece());
        match mv.captured() {
            Some(captured) => {
                self.board
                    .set_piece(mv.to(), mv.color().opponent(), captured)
            }
            None => self.board.clear_square(mv.to()),
        }
        if mv.piece() == Piece::King {
            self.king_squares[mv.color().index()] = mv.from();
        }
        self.side_to_move = self.side_to_move.opponent();
        Some(mv)
    }

    /// Whether the side to move is in check.
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.color_in_check(self.side_to_move)
    }

    /// Whether `color`'s king square is attacked by the opponent.
    #[must_use]
    pub fn color_in_check(&self, color: Color) -> bool {
        self.board
            .square_attacked(self.king_square(color), color.opponent())
    }

    /// The moves legal for the side to move.
    ///
    /// Each pseudo-legal candidate is applied to the live game, the
    /// mover's king is tested for attack, and the move is undone; only
    /// candidates that leave the king safe survive. The position is never
    /// copied: the make/undo pair explores every hypothetical in place.
    ///
    /// As a side effect the checkmate/stalemate flags are refreshed: an
    /// empty result sets exactly one of them, a non-empty result clears
    /// both.
    pub fn legal_moves(&mut self) -> MoveList {
        let mover = self.side_to_move;
        let candidates = self.board.pseudo_legal_moves(mover);
        let mut legal = MoveList::new();
        for mv in candidates.iter() {
            self.make_move(*mv);
            let exposed = self.color_in_check(mover);
            self.undo_move();
            if !exposed {
                legal.push(*mv);
            }
        }

        if legal.is_empty() {
            let checked = self.in_check();
            self.checkmate = checked;
            self.stalemate = !checked;
            #[cfg(feature = "logging")]
            log::debug!(
                "no legal moves for {}: {}",
                mover,
                if checked { "checkmate" } else { "stalemate" }
            );
        } else {
            self.checkmate = false;
            self.stalemate = false;
        }
        legal
    }

    /// Match two selected squares against the current legal-move list.
    /// This is the pairing step a presentation layer performs between two
    /// clicks and a `make_move` call.
    pub fn find_move(&mut self, from: Square, to: Square) -> Option<Move> {
        self.legal_moves()
            .iter()
            .copied()
            .find(|m| m.from() == from && m.to() == to)
    }

    /// Count leaf nodes of the legal-move tree to `depth` plies.
    ///
    /// Exercises the full generate/filter/make/undo pipeline; terminal
    /// flags are saved and restored so a walk does not clobber them.
    pub fn perft(&mut self, depth: usize) -> u64 {
        let (checkmate, stalemate) = (self.checkmate, self.stalemate);
        let nodes = self.perft_inner(depth);
        self.checkmate = checkmate;
        self.stalemate = stalemate;
        nodes
    }

    fn perft_inner(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut nodes = 0;
        for mv in moves.iter() {
            self.make_move(*mv);
            nodes += self.perft_inner(depth - 1);
            self.undo_move();
        }
        nodes
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
