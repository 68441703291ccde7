//! End-of-game detection: check, checkmate and the draw rules.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::NO_CAPTURE_DRAW_LIMIT;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::is_move_legal;
use crate::move_generation::legal_move_checks::{attackers_of, checked_king};
use crate::move_generation::legal_move_generator::has_any_legal_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    /// Only the two kings remain.
    BareKings,
    Stalemate,
    /// [`NO_CAPTURE_DRAW_LIMIT`] plies without a capture.
    NoCaptureLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check(Color),
    Checkmate { loser: Color },
    Draw(DrawReason),
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Draw(_))
    }
}

/// Status of the position. White's king is inspected before black's, and the
/// draw rules are only consulted when neither king is in check.
pub fn game_status(board: &mut Board) -> GameStatus {
    if let Some(color) = checked_king(board) {
        return if is_checkmate(board, color) {
            GameStatus::Checkmate { loser: color }
        } else {
            GameStatus::Check(color)
        };
    }

    match draw_reason(board) {
        Some(reason) => GameStatus::Draw(reason),
        None => GameStatus::Ongoing,
    }
}

/// Whether the king of `color` is checkmated. A king that is not in check is
/// never mated.
///
/// Escapes are tried in order: capturing a sole attacker, interposing on the
/// line of a sole non-knight attacker, then moving the king.
pub fn is_checkmate(board: &mut Board, color: Color) -> bool {
    let king_square = board.king_square(color);
    let attackers: Vec<(Square, PieceKind)> = attackers_of(board, king_square, Some(color))
        .into_iter()
        .map(|piece| (piece.square, piece.kind))
        .collect();

    match attackers.as_slice() {
        [] => return false,
        [(attacker_square, attacker_kind)] => {
            if can_capture(board, color, *attacker_square) {
                return false;
            }
            if *attacker_kind != PieceKind::Knight
                && can_interpose(board, color, *attacker_square, king_square)
            {
                return false;
            }
        }
        _ => {}
    }

    !king_can_move(board, color)
}

/// Draw rule in force for the side to move, assuming no king is in check.
pub fn draw_reason(board: &mut Board) -> Option<DrawReason> {
    if board.piece_count() == 2 {
        return Some(DrawReason::BareKings);
    }
    let side_to_move = board.side_to_move();
    if !has_any_legal_move(board, side_to_move) {
        return Some(DrawReason::Stalemate);
    }
    if board.no_capture_count() >= NO_CAPTURE_DRAW_LIMIT {
        return Some(DrawReason::NoCaptureLimit);
    }
    None
}

fn can_capture(board: &mut Board, color: Color, attacker_square: Square) -> bool {
    let defenders: Vec<Square> = board
        .pieces_of(color)
        .filter(|piece| piece.move_set().has_capture(attacker_square))
        .map(|piece| piece.square)
        .collect();

    defenders
        .into_iter()
        .any(|source| is_move_legal(board, source, attacker_square))
}

/// Unaligned attacker and king have no squares between them, so nothing can
/// be interposed.
fn can_interpose(board: &mut Board, color: Color, attacker_square: Square, king_square: Square) -> bool {
    let between = attacker_square.squares_between(king_square);
    let blockers: Vec<(Square, Square)> = board
        .pieces_of(color)
        .filter(|piece| piece.kind != PieceKind::King)
        .flat_map(|piece| {
            between
                .iter()
                .filter(|square| piece.move_set().has_quiet(**square))
                .map(|square| (piece.square, *square))
                .collect::<Vec<_>>()
        })
        .collect();

    blockers
        .into_iter()
        .any(|(source, target)| is_move_legal(board, source, target))
}

fn king_can_move(board: &mut Board, color: Color) -> bool {
    let king_square = board.king_square(color);
    let destinations: Vec<Square> = match board.occupant_at(king_square) {
        Some(king) => king.move_set().destinations().collect(),
        None => return false,
    };

    destinations
        .into_iter()
        .any(|target| is_move_legal(board, king_square, target))
}
