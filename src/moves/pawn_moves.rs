use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::moves::move_set::MoveSet;

/// Forward steps are quiet-only, diagonal steps are capture-only.
///
/// The two-square step needs an unmoved pawn with both the intermediate and
/// the destination square empty. There is no en passant and no promotion.
pub fn pawn_moves(board: &Board, piece: &Piece) -> MoveSet {
    let mut moves = MoveSet::new();
    let forward = piece.color.pawn_direction();

    if let Some(single) = piece.square.offset(0, forward) {
        if board.is_vacant(single) {
            moves.push_quiet(single);

            if !piece.has_moved {
                if let Some(double) = piece.square.offset(0, 2 * forward) {
                    if board.is_vacant(double) {
                        moves.push_quiet(double);
                    }
                }
            }
        }
    }

    for target in piece.pawn_diagonals().into_iter().flatten() {
        if let Some(occupant) = board.occupant_at(target) {
            if occupant.color != piece.color {
                moves.push_capture(target);
            }
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Square;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("valid square")
    }

    #[test]
    fn unmoved_pawns_step_one_or_two() {
        let board = Board::new_game();
        let white = board.occupant_at(sq("e2")).expect("pawn on e2").move_set();
        assert_eq!(white.quiet(), &[sq("e3"), sq("e4")]);
        assert!(white.captures().is_empty());

        let black = board.occupant_at(sq("d7")).expect("pawn on d7").move_set();
        assert_eq!(black.quiet(), &[sq("d6"), sq("d5")]);
    }

    #[test]
    fn moved_pawn_steps_only_once() {
        // e3 is off the start rank, so the FEN import marks it as moved.
        let board = Board::from_fen("4k3/8/8/8/8/4P3/8/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(board.occupant_at(sq("e3")).expect("pawn on e3").move_set().quiet(), &[sq("e4")]);
    }

    #[test]
    fn double_step_needs_both_squares_empty() {
        let blocked_far = Board::from_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(
            blocked_far.occupant_at(sq("e2")).expect("pawn on e2").move_set().quiet(),
            &[sq("e3")]
        );

        let blocked_near = Board::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1").expect("FEN should parse");
        assert!(blocked_near.occupant_at(sq("e2")).expect("pawn on e2").move_set().quiet().is_empty());
    }

    #[test]
    fn pawn_captures_diagonally_only() {
        let board = Board::from_fen("4k3/8/8/3p1p2/4p3/4P3/8/4K3 w - - 0 1").expect("FEN should parse");
        let moves = board.occupant_at(sq("e4")).expect("black pawn on e4").move_set();

        // Black pawn on e4 is blocked by e3 and cannot capture forward.
        assert!(moves.quiet().is_empty());
        assert!(moves.captures().is_empty());

        let white = board.occupant_at(sq("e3")).expect("white pawn on e3").move_set();
        assert!(white.quiet().is_empty());
        assert!(white.captures().is_empty());
    }

    #[test]
    fn pawn_captures_opponents_on_diagonals() {
        let board = Board::from_fen("4k3/8/8/3p1P2/4P3/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let moves = board.occupant_at(sq("e4")).expect("pawn on e4").move_set();

        assert_eq!(moves.quiet(), &[sq("e5")]);
        assert_eq!(moves.captures(), &[sq("d5")]);
    }

    #[test]
    fn pawn_on_last_rank_is_stuck() {
        let board = Board::from_fen("P3k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(board.occupant_at(sq("a8")).expect("pawn on a8").move_set().is_empty());
    }
}
