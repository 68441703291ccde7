//! Fixed-offset destinations shared by knights and kings.

use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::moves::move_set::MoveSet;

/// Tests each offset independently: off-board and friendly squares are
/// dropped, empty squares are quiet, opponent squares are captures.
pub fn leap(board: &Board, piece: &Piece, offsets: &[(i8, i8)]) -> MoveSet {
    let mut moves = MoveSet::new();

    for &(d_file, d_rank) in offsets {
        let Some(target) = piece.square.offset(d_file, d_rank) else {
            continue;
        };
        match board.occupant_at(target) {
            None => moves.push_quiet(target),
            Some(occupant) if occupant.color != piece.color => moves.push_capture(target),
            Some(_) => {}
        }
    }

    moves
}
