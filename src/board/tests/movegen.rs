//! Pseudo-legal generator tests.

use crate::board::{Board, Color, Piece, Square};

fn lone_piece(square: Square, color: Color, piece: Piece) -> Board {
    let mut board = Board::empty();
    board.set_piece(square, color, piece);
    board
}

#[test]
fn rook_on_open_board_has_fourteen_destinations() {
    let board = lone_piece(Square(4, 4), Color::White, Piece::Rook);
    assert_eq!(board.pseudo_legal_moves(Color::White).len(), 14);
}

#[test]
fn bishop_on_open_board_has_thirteen_destinations() {
    let board = lone_piece(Square(4, 4), Color::White, Piece::Bishop);
    assert_eq!(board.pseudo_legal_moves(Color::White).len(), 13);
}

#[test]
fn queen_on_open_board_has_twentyseven_destinations() {
    let board = lone_piece(Square(4, 4), Color::White, Piece::Queen);
    assert_eq!(board.pseudo_legal_moves(Color::White).len(), 27);
}

#[test]
fn knight_in_corner_has_two_destinations() {
    let board = lone_piece(Square(0, 0), Color::White, Piece::Knight);
    let moves = board.pseudo_legal_moves(Color::White);
    assert_eq!(moves.len(), 2);
    let destinations: Vec<Square> = moves.iter().map(|m| m.to()).collect();
    assert!(destinations.contains(&Square(2, 1)));
    assert!(destinations.contains(&Square(1, 2)));
}

#[test]
fn knight_in_center_has_eight_destinations() {
    let board = lone_piece(Square(4, 4), Color::White, Piece::Knight);
    assert_eq!(board.pseudo_legal_moves(Color::White).len(), 8);
}

#[test]
fn knight_blocked_only_by_friendly_pieces() {
    let mut board = lone_piece(Square(0, 0), Color::White, Piece::Knight);
    board.set_piece(Square(2, 1), Color::White, Piece::Pawn);
    board.set_piece(Square(1, 2), Color::Black, Piece::Pawn);

    // Knight destinations: the friendly square is gone, the capture stays.
    let moves = board.pseudo_legal_moves(Color::White);
    let knight_moves: Vec<_> = moves
        .iter()
        .filter(|m| m.from() == Square(0, 0))
        .collect();
    assert_eq!(knight_moves.len(), 1);
    assert_eq!(knight_moves[0].to(), Square(1, 2));
    assert!(knight_moves[0].is_capture());
}

#[test]
fn king_in_center_has_eight_destinations() {
    let board = lone_piece(Square(4, 4), Color::White, Piece::King);
    assert_eq!(board.pseudo_legal_moves(Color::White).len(), 8);
}

#[test]
fn king_in_corner_has_three_destinations() {
    let board = lone_piece(Square(7, 7), Color::Black, Piece::King);
    assert_eq!(board.pseudo_legal_moves(Color::Black).len(), 3);
}

#[test]
fn pawn_single_and_double_push_from_start_rank() {
    let board = lone_piece(Square(1, 4), Color::White, Piece::Pawn);
    let moves = board.pseudo_legal_moves(Color::White);
    assert_eq!(moves.len(), 2);
    let destinations: Vec<Square> = moves.iter().map(|m| m.to()).collect();
    assert!(destinations.contains(&Square(2, 4)));
    assert!(destinations.contains(&Square(3, 4)));
}

#[test]
fn pawn_double_push_needs_both_squares_empty() {
    let mut board = lone_piece(Square(1, 4), Color::White, Piece::Pawn);
    board.set_piece(Square(3, 4), Color::Black, Piece::Knight);
    assert_eq!(board.pseudo_legal_moves(Color::White).len(), 1);

    board.set_piece(Square(2, 4), Color::Black, Piece::Knight);
    assert_eq!(board.pseudo_legal_moves(Color::White).len(), 0);
}

#[test]
fn pawn_away_from_start_rank_pushes_one_square() {
    let board = lone_piece(Square(3, 4), Color::White, Piece::Pawn);
    let moves = board.pseudo_legal_moves(Color::White);
    assert_eq!(moves.len(), 1);
    assert_eq!(moves.as_slice()[0].to(), Square(4, 4));
}

#[test]
fn pawn_captures_diagonally_only_opposing_pieces() {
    let mut board = lone_piece(Square(1, 4), Color::White, Piece::Pawn);
    board.set_piece(Square(2, 3), Color::Black, Piece::Knight);
    board.set_piece(Square(2, 5), Color::White, Piece::Knight);

    let moves = board.pseudo_legal_moves(Color::White);
    let pawn_moves: Vec<_> = moves
        .iter()
        .filter(|m| m.from() == Square(1, 4))
        .collect();
    // push, double push, and one capture; the friendly diagonal is skipped
    assert_eq!(pawn_moves.len(), 3);
    assert!(pawn_moves
        .iter()
        .any(|m| m.to() == Square(2, 3) && m.is_capture()));
    assert!(!pawn_moves.iter().any(|m| m.to() == Square(2, 5)));
}

#[test]
fn pawn_on_edge_file_probes_one_diagonal() {
    let mut board = lone_piece(Square(1, 0), Color::White, Piece::Pawn);
    board.set_piece(Square(2, 1), Color::Black, Piece::Rook);
    let moves = board.pseudo_legal_moves(Color::White);
    assert_eq!(moves.len(), 3); // push, double push, capture
}

#[test]
fn black_pawn_advances_toward_rank_zero() {
    let board = lone_piece(Square(6, 4), Color::Black, Piece::Pawn);
    let moves = board.pseudo_legal_moves(Color::Black);
    assert_eq!(moves.len(), 2);
    let destinations: Vec<Square> = moves.iter().map(|m| m.to()).collect();
    assert!(destinations.contains(&Square(5, 4)));
    assert!(destinations.contains(&Square(4, 4)));
}

#[test]
fn pawn_on_last_rank_generates_nothing() {
    let board = lone_piece(Square(7, 3), Color::White, Piece::Pawn);
    assert!(board.pseudo_legal_moves(Color::White).is_empty());
}

#[test]
fn slider_rays_stop_at_blockers() {
    let mut board = lone_piece(Square(4, 4), Color::White, Piece::Rook);
    board.set_piece(Square(4, 6), Color::White, Piece::Pawn);
    board.set_piece(Square(4, 2), Color::Black, Piece::Pawn);

    let moves = board.pseudo_legal_moves(Color::White);
    let rook_moves: Vec<_> = moves
        .iter()
        .filter(|m| m.from() == Square(4, 4))
        .collect();
    // 3 up + 4 down + 1 right (stopped short of the friendly pawn)
    // + 2 left (including the capture)
    assert_eq!(rook_moves.len(), 10);
    assert!(rook_moves
        .iter()
        .any(|m| m.to() == Square(4, 2) && m.is_capture()));
    assert!(!rook_moves.iter().any(|m| m.to() == Square(4, 6)));
    assert!(!rook_moves.iter().any(|m| m.to() == Square(4, 1)));
}

#[test]
fn starting_position_has_twenty_pseudo_legal_moves_per_side() {
    let board = Board::new();
    assert_eq!(board.pseudo_legal_moves(Color::White).len(), 20);
    assert_eq!(board.pseudo_legal_moves(Color::Black).len(), 20);
}

#[test]
fn attack_test_matches_move_destinations() {
    let board = lone_piece(Square(0, 0), Color::White, Piece::Rook);
    assert!(board.square_attacked(Square(0, 7), Color::White));
    assert!(board.square_attacked(Square(7, 0), Color::White));
    assert!(!board.square_attacked(Square(1, 1), Color::White));

    // Attack discovery is move simulation: a pawn's push destination
    // counts, an empty diagonal does not.
    let board = lone_piece(Square(1, 4), Color::White, Piece::Pawn);
    assert!(board.square_attacked(Square(2, 4), Color::White));
    assert!(!board.square_attacked(Square(2, 3), Color::White));
}
