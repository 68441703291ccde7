//! Castling preconditions.

use crate::chess_errors::IllegalMove;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{castle_files, KING_START_FILE};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;

/// Checks every precondition of a castle by `color` on `side`:
/// king and rook unmoved on their home squares, the squares between them
/// empty, and none of the squares the king stands on, crosses or lands on
/// attacked by the opponent.
pub fn validate_castle(board: &Board, color: Color, side: CastleSide) -> Result<(), IllegalMove> {
    let rank = color.back_rank();
    let files = castle_files(side);

    let king = board
        .occupant_at(Square::new(KING_START_FILE, rank))
        .filter(|piece| piece.kind == PieceKind::King && piece.color == color)
        .ok_or(IllegalMove::CastleKingMissing { side })?;
    let rook = board
        .occupant_at(Square::new(files.rook_from, rank))
        .filter(|piece| piece.kind == PieceKind::Rook && piece.color == color)
        .ok_or(IllegalMove::CastleRookMissing { side })?;

    if king.has_moved || rook.has_moved {
        return Err(IllegalMove::CastlePieceMoved { side });
    }

    for &file in files.must_be_empty {
        let square = Square::new(file, rank);
        if !board.is_vacant(square) {
            return Err(IllegalMove::CastlePathBlocked { side, square });
        }
    }

    for file in files.king_path {
        let square = Square::new(file, rank);
        if is_square_attacked(board, square, color.opposite()) {
            return Err(IllegalMove::CastleThroughAttack { side, square });
        }
    }

    Ok(())
}
