//! Ray walking shared by rooks, bishops and queens.

use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::moves::move_set::MoveSet;

/// Walks every ray from the piece's square, one square at a time.
///
/// Empty squares are quiet and the ray continues; the first opponent is a
/// capture and ends the ray; a friendly piece ends the ray unrecorded.
pub fn walk_rays(board: &Board, piece: &Piece, directions: &[(i8, i8)]) -> MoveSet {
    let mut moves = MoveSet::new();

    for &(file_step, rank_step) in directions {
        let mut cursor = piece.square.offset(file_step, rank_step);

        while let Some(target) = cursor {
            match board.occupant_at(target) {
                None => moves.push_quiet(target),
                Some(occupant) => {
                    if occupant.color != piece.color {
                        moves.push_capture(target);
                    }
                    break;
                }
            }
            cursor = target.offset(file_step, rank_step);
        }
    }

    moves
}
