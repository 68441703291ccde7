//! Full legal move enumeration.
//!
//! Walks every cached pseudo-legal destination of one side and keeps those
//! that pass the trial legality filter, then appends legal castles.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_generation::castling::validate_castle;
use crate::move_generation::legal_move_apply::is_move_legal;
use crate::moves::move_intent::MoveIntent;

const CASTLE_SIDES: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

/// Every legal move of `color`, quiet moves of a piece before its captures.
pub fn legal_moves(board: &mut Board, color: Color) -> Vec<MoveIntent> {
    let mut legal = Vec::with_capacity(64);

    for candidate in pseudo_legal_moves(board, color) {
        if let MoveIntent::Standard { source, target, .. } = candidate {
            if is_move_legal(board, source, target) {
                legal.push(candidate);
            }
        }
    }

    for side in CASTLE_SIDES {
        if validate_castle(board, color, side).is_ok() {
            legal.push(MoveIntent::Castle { side, color });
        }
    }

    legal
}

/// Stops at the first legal move found.
pub fn has_any_legal_move(board: &mut Board, color: Color) -> bool {
    for candidate in pseudo_legal_moves(board, color) {
        if let MoveIntent::Standard { source, target, .. } = candidate {
            if is_move_legal(board, source, target) {
                return true;
            }
        }
    }

    CASTLE_SIDES
        .into_iter()
        .any(|side| validate_castle(board, color, side).is_ok())
}

/// Standard moves read from the cached move-sets, collected up front since
/// the trial filter needs the board mutably.
fn pseudo_legal_moves(board: &Board, color: Color) -> Vec<MoveIntent> {
    let mut out = Vec::with_capacity(64);

    for piece in board.pieces_of(color) {
        let moves = piece.move_set();
        let quiet = moves.quiet().iter().map(|target| (*target, false));
        let captures = moves.captures().iter().map(|target| (*target, true));

        for (target, is_capture) in quiet.chain(captures) {
            out.push(MoveIntent::Standard {
                source: piece.square,
                target,
                kind: piece.kind,
                color,
                is_capture,
            });
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::{has_any_legal_move, legal_moves};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{CastleSide, Color};
    use crate::moves::move_intent::MoveIntent;

    #[test]
    fn starting_position_has_twenty_legal_moves() {
        let mut board = Board::new_game();
        let moves = legal_moves(&mut board, Color::White);
        assert_eq!(moves.len(), 20);
        assert!(moves.iter().all(|intent| !intent.is_capture()));
        assert!(has_any_legal_move(&mut board, Color::Black));
    }

    #[test]
    fn pinned_pieces_and_checks_prune_moves() {
        let mut board =
            Board::from_fen("4k3/8/8/8/4r3/8/3B4/R3K3 w Q - 0 1").expect("FEN should parse");
        let moves = legal_moves(&mut board, Color::White);

        // In check from e4: no castle, bishop must block on e3.
        assert!(!moves.iter().any(|intent| matches!(intent, MoveIntent::Castle { .. })));
        let rendered: Vec<String> = moves.iter().map(|intent| intent.to_string()).collect();
        assert!(rendered.contains(&"Bd2e3".to_owned()));
        assert!(!rendered.contains(&"Bd2c3".to_owned()));
        assert!(rendered.contains(&"Ke1f2".to_owned()));
        assert!(!rendered.contains(&"Ke1e2".to_owned()));
    }

    #[test]
    fn castles_are_listed_when_legal() {
        let mut board =
            Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").expect("FEN should parse");
        let moves = legal_moves(&mut board, Color::Black);
        for side in [CastleSide::KingSide, CastleSide::QueenSide] {
            assert!(moves.contains(&MoveIntent::Castle {
                side,
                color: Color::Black
            }));
        }
    }

    #[test]
    fn stalemated_side_has_no_moves() {
        let mut board = Board::from_fen("k7/2Q5/1K6/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        assert!(legal_moves(&mut board, Color::Black).is_empty());
        assert!(!has_any_legal_move(&mut board, Color::Black));
    }
}
