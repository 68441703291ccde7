//! Validated application of move intents.
//!
//! Legality is established by trial: the move is applied to the live board,
//! move-sets are regenerated, the mover's king is inspected and the board is
//! reverted. The exclusive borrow on [`Board`] keeps these trials from
//! interleaving.

use crate::chess_errors::{IllegalMove, ImpossibleMove, MoveError};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{castle_files, KING_START_FILE};
use crate::game_state::chess_types::*;
use crate::game_state::undo_state::{UndoKind, UndoState};
use crate::move_generation::castling::validate_castle;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::moves::move_intent::MoveIntent;

/// Whether moving the piece on `source` to `target` keeps its own king safe.
///
/// The board is observably unchanged afterwards, move-sets included.
pub fn is_move_legal(board: &mut Board, source: Square, target: Square) -> bool {
    let Some(color) = board.occupant_at(source).map(|piece| piece.color) else {
        return false;
    };
    let Some(trial) = board.relocate(source, target) else {
        return false;
    };
    board.regenerate_moves();

    let legal = !is_king_in_check(board, color);

    board.revert(trial);
    board.regenerate_moves();
    legal
}

/// Validates `intent` against the position and commits it.
///
/// Nothing is mutated when an error is returned.
pub fn make_move(board: &mut Board, intent: MoveIntent) -> Result<UndoState, MoveError> {
    let color = intent.color();
    if color != board.side_to_move() {
        return Err(ImpossibleMove::NotSideToMove { color }.into());
    }

    match intent {
        MoveIntent::Castle { side, color } => validate_castle(board, color, side)?,
        MoveIntent::Standard {
            source,
            target,
            kind,
            color,
            is_capture,
        } => {
            check_reachable(board, source, target, kind, color, is_capture)?;
            if !is_move_legal(board, source, target) {
                return Err(IllegalMove::LeavesKingInCheck(color).into());
            }
        }
    }

    Ok(commit_move(board, intent))
}

/// Structural checks on a standard intent, in the order they are reported.
fn check_reachable(
    board: &Board,
    source: Square,
    target: Square,
    kind: PieceKind,
    color: Color,
    is_capture: bool,
) -> Result<(), ImpossibleMove> {
    let piece = board
        .occupant_at(source)
        .ok_or(ImpossibleMove::EmptySource(source))?;

    if piece.color != color {
        return Err(ImpossibleMove::WrongColor {
            square: source,
            found: piece.color,
        });
    }
    if piece.kind != kind {
        return Err(ImpossibleMove::WrongKind {
            square: source,
            expected: kind,
            found: piece.kind,
        });
    }

    let moves = piece.move_set();
    let (declared, other) = if is_capture {
        (moves.has_capture(target), moves.has_quiet(target))
    } else {
        (moves.has_quiet(target), moves.has_capture(target))
    };

    match (declared, other) {
        (true, _) => Ok(()),
        (false, true) => Err(ImpossibleMove::CaptureFlagMismatch { target }),
        (false, false) => Err(ImpossibleMove::Unreachable {
            kind,
            origin: source,
            target,
        }),
    }
}

/// Commits `intent` without validation and returns the record that undoes it.
///
/// Callers must have established legality, as `make_move` and the legal move
/// enumeration do.
pub fn commit_move(board: &mut Board, intent: MoveIntent) -> UndoState {
    let prev_last_mover = board.last_mover();
    let prev_no_capture_count = board.no_capture_count();

    let kind = match intent {
        MoveIntent::Standard {
            source,
            target,
            color,
            ..
        } => {
            let prev_has_moved = board
                .occupant_at(source)
                .is_some_and(|piece| piece.has_moved);
            let captured = board.apply_move(source, target);
            board.record_turn(color, captured.is_some());
            UndoKind::Standard {
                source,
                target,
                captured,
                prev_has_moved,
            }
        }
        MoveIntent::Castle { side, color } => {
            board.apply_castle(side, color);
            board.record_turn(color, false);
            UndoKind::Castle { color, side }
        }
    };

    board.regenerate_moves();

    UndoState {
        kind,
        prev_last_mover,
        prev_no_capture_count,
    }
}

/// Restores the board to its state before the move recorded in `undo`.
pub fn unmake_move(board: &mut Board, undo: UndoState) {
    match undo.kind {
        UndoKind::Standard {
            source,
            target,
            captured,
            prev_has_moved,
        } => {
            board.relocate(target, source);
            if let Some(piece) = board.piece_mut(source) {
                piece.has_moved = prev_has_moved;
            }
            if let Some(captured) = captured {
                board.put(target, captured);
            }
        }
        UndoKind::Castle { color, side } => {
            let rank = color.back_rank();
            let files = castle_files(side);
            let home_squares = [
                (files.king_to, KING_START_FILE),
                (files.rook_to, files.rook_from),
            ];
            for (from, to) in home_squares {
                let (from, to) = (Square::new(from, rank), Square::new(to, rank));
                board.relocate(from, to);
                if let Some(piece) = board.piece_mut(to) {
                    piece.has_moved = false;
                }
            }
        }
    }

    board.restore_turn(undo.prev_last_mover, undo.prev_no_capture_count);
    board.regenerate_moves();
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::{is_move_legal, make_move, unmake_move};
    use crate::chess_errors::{IllegalMove, ImpossibleMove, MoveError};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{CastleSide, Color, PieceKind, Square};
    use crate::move_generation::legal_move_generator::legal_moves;
    use crate::moves::move_intent::MoveIntent;
    use crate::utils::algebraic::algebraic_to_square;
    use crate::utils::long_algebraic::parse_move;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("valid square")
    }

    fn play(board: &mut Board, text: &str) -> Result<(), MoveError> {
        let intent = parse_move(text, board.side_to_move()).expect("test move should parse");
        make_move(board, intent).map(|_| ())
    }

    #[test]
    fn trial_legality_leaves_board_untouched() {
        let mut board =
            Board::from_fen("4k3/8/8/8/4r3/8/4B3/4K3 w - - 0 1").expect("FEN should parse");
        let before = board.clone();

        // Pinned bishop.
        assert!(!is_move_legal(&mut board, sq("e2"), sq("d3")));
        assert_eq!(board, before);

        assert!(is_move_legal(&mut board, sq("e1"), sq("d1")));
        assert_eq!(board, before);
    }

    #[test]
    fn structural_rejections_come_before_legality() {
        let mut board = Board::new_game();
        let before = board.clone();

        assert_eq!(
            play(&mut board, "e3e4"),
            Err(ImpossibleMove::EmptySource(sq("e3")).into())
        );
        assert_eq!(
            play(&mut board, "Ne2e4"),
            Err(ImpossibleMove::WrongKind {
                square: sq("e2"),
                expected: PieceKind::Knight,
                found: PieceKind::Pawn,
            }
            .into())
        );
        assert_eq!(
            play(&mut board, "e7e5"),
            Err(ImpossibleMove::WrongColor {
                square: sq("e7"),
                found: Color::Black,
            }
            .into())
        );
        assert_eq!(
            play(&mut board, "e2e5"),
            Err(ImpossibleMove::Unreachable {
                kind: PieceKind::Pawn,
                origin: sq("e2"),
                target: sq("e5"),
            }
            .into())
        );
        assert_eq!(
            play(&mut board, "e2xe4"),
            Err(ImpossibleMove::CaptureFlagMismatch { target: sq("e4") }.into())
        );

        let black_intent = parse_move("e7e5", Color::Black).expect("should parse");
        assert_eq!(
            make_move(&mut board, black_intent).map(|_| ()),
            Err(ImpossibleMove::NotSideToMove {
                color: Color::Black
            }
            .into())
        );

        assert_eq!(board, before);
    }

    #[test]
    fn exposing_the_king_is_illegal() {
        let mut board =
            Board::from_fen("4k3/8/8/8/4r3/8/4B3/4K3 w - - 0 1").expect("FEN should parse");
        let before = board.clone();

        assert_eq!(
            play(&mut board, "Be2d3"),
            Err(IllegalMove::LeavesKingInCheck(Color::White).into())
        );
        assert_eq!(board, before);

        play(&mut board, "Ke1d2").expect("king step is legal");
        assert_eq!(board.side_to_move(), Color::Black);
    }

    #[test]
    fn knight_from_b1_reaches_a3_and_c3_only() {
        let mut board = Board::new_game();
        let knight = board.occupant_at(sq("b1")).expect("knight on b1");
        let quiet = knight.move_set().quiet();
        assert_eq!(quiet.len(), 2);
        assert!(quiet.contains(&sq("a3")) && quiet.contains(&sq("c3")));

        play(&mut board, "Nb1c3").expect("knight move is legal");
        let knight = board.occupant_at(sq("c3")).expect("knight on c3");
        assert!(knight.has_moved);
        assert!(board.is_vacant(sq("b1")));
        assert_eq!(board.no_capture_count(), 1);
    }

    #[test]
    fn capture_resets_counter_and_removes_piece() {
        let mut board = Board::new_game();
        for text in ["e2e4", "d7d5", "Ng1f3", "Ng8f6"] {
            play(&mut board, text).expect("opening move is legal");
        }
        assert_eq!(board.no_capture_count(), 4);

        play(&mut board, "Pe4xd5").expect("pawn capture is legal");
        assert_eq!(board.no_capture_count(), 0);
        assert_eq!(board.piece_count(), 31);
        assert_eq!(board.pieces_of(Color::Black).count(), 15);
    }

    #[test]
    fn castle_commits_and_unmakes() {
        let mut board =
            Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 3 1").expect("FEN should parse");
        let before = board.clone();

        let undo = make_move(
            &mut board,
            MoveIntent::Castle {
                side: CastleSide::KingSide,
                color: Color::White,
            },
        )
        .expect("castle is legal");
        assert_eq!(board.king_square(Color::White), sq("g1"));
        assert_eq!(
            board.occupant_at(sq("f1")).map(|piece| piece.kind),
            Some(PieceKind::Rook)
        );
        assert_eq!(board.no_capture_count(), 4);

        unmake_move(&mut board, undo);
        assert_eq!(board, before);
    }

    #[test]
    fn random_playouts_unmake_exactly() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..8 {
            let mut board = Board::new_game();
            let start = board.clone();
            let mut history = Vec::new();

            for _ in 0..40 {
                let color = board.side_to_move();
                let moves = legal_moves(&mut board, color);
                if moves.is_empty() {
                    break;
                }
                let intent = moves[rng.random_range(0..moves.len())];
                let snapshot = board.clone();
                let undo = make_move(&mut board, intent).expect("generated moves are legal");
                history.push((undo, snapshot));
            }

            while let Some((undo, snapshot)) = history.pop() {
                unmake_move(&mut board, undo);
                assert_eq!(board, snapshot);
            }
            assert_eq!(board, start);
        }
    }
}
