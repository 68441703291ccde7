//! Pseudo-legal move generation for every piece on the board.
//!
//! Generation is check-agnostic: it only knows movement patterns and current
//! occupancy. Because a single move can open or close rays for every slider
//! on the board, regeneration always covers the whole board.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::piece::Piece;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::king_moves::KING_OFFSETS;
use crate::moves::knight_moves::KNIGHT_OFFSETS;
use crate::moves::leaping_moves::leap;
use crate::moves::move_set::MoveSet;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::QUEEN_DIRECTIONS;
use crate::moves::rook_moves::ROOK_DIRECTIONS;
use crate::moves::sliding_moves::walk_rays;

/// How a piece kind produces its destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementPattern {
    Slide(&'static [(i8, i8)]),
    Leap(&'static [(i8, i8)]),
    Pawn,
}

/// Indexed by [`PieceKind::index`].
pub const MOVEMENT_PATTERNS: [MovementPattern; 6] = [
    MovementPattern::Pawn,
    MovementPattern::Leap(&KNIGHT_OFFSETS),
    MovementPattern::Slide(&BISHOP_DIRECTIONS),
    MovementPattern::Slide(&ROOK_DIRECTIONS),
    MovementPattern::Slide(&QUEEN_DIRECTIONS),
    MovementPattern::Leap(&KING_OFFSETS),
];

#[inline]
pub fn movement_pattern(kind: PieceKind) -> MovementPattern {
    MOVEMENT_PATTERNS[kind.index()]
}

/// Destinations of `piece` given the current occupancy of `board`.
pub fn generate_move_set(board: &Board, piece: &Piece) -> MoveSet {
    match movement_pattern(piece.kind) {
        MovementPattern::Slide(directions) => walk_rays(board, piece, directions),
        MovementPattern::Leap(offsets) => leap(board, piece, offsets),
        MovementPattern::Pawn => pawn_moves(board, piece),
    }
}

/// Replaces the cached move-set of every piece on the board.
pub fn regenerate_all(board: &mut Board) {
    let view: &Board = board;
    let fresh: Vec<(Square, MoveSet)> = view
        .pieces()
        .map(|piece| (piece.square, generate_move_set(view, piece)))
        .collect();

    for (square, move_set) in fresh {
        board.set_move_set(square, move_set);
    }
}
