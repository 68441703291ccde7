//! Attack and check detection over cached move-sets.
//!
//! All queries read the move-sets stored on the pieces, so they are only
//! meaningful right after a full regeneration.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::piece::Piece;

/// Whether `piece` threatens `target`.
///
/// Non-pawns threaten every square in either list of their move-set. Pawns
/// only threaten what is in their capture list, never straight ahead.
pub fn threatens(piece: &Piece, target: Square) -> bool {
    let moves = piece.move_set();
    match piece.kind {
        PieceKind::Pawn => moves.has_capture(target),
        _ => moves.contains(target),
    }
}

/// Every piece, other than those of `exclude`, that threatens `target`.
pub fn attackers_of(board: &Board, target: Square, exclude: Option<Color>) -> Vec<&Piece> {
    board
        .pieces()
        .filter(|piece| Some(piece.color) != exclude)
        .filter(|piece| threatens(piece, target))
        .collect()
}

#[inline]
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    board
        .pieces_of(attacker_color)
        .any(|piece| threatens(piece, square))
}

#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    is_square_attacked(board, board.king_square(color), color.opposite())
}

/// The king currently in check, inspecting white first.
pub fn checked_king(board: &Board) -> Option<Color> {
    Color::ALL
        .into_iter()
        .find(|color| is_king_in_check(board, *color))
}

#[cfg(test)]
mod tests {
    use super::{attackers_of, checked_king, is_king_in_check, is_square_attacked};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, PieceKind, Square};
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("valid square")
    }

    #[test]
    fn attackers_agree_with_check() {
        let board = Board::from_fen("4k3/8/8/1b6/8/8/8/4K2R w - - 0 1").expect("FEN should parse");
        let attackers = attackers_of(&board, board.king_square(Color::White), Some(Color::White));

        assert_eq!(attackers.len(), 0);
        assert!(!is_king_in_check(&board, Color::White));

        let board = Board::from_fen("4k3/8/8/1b6/8/8/8/R3K3 w - - 0 1").expect("FEN should parse");
        let attackers = attackers_of(&board, sq("e1"), Some(Color::White));
        assert!(attackers.is_empty());

        let board = Board::from_fen("4k3/8/8/8/1b6/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let attackers = attackers_of(&board, sq("e1"), Some(Color::White));
        assert_eq!(attackers.len(), 1);
        assert_eq!(attackers[0].kind, PieceKind::Bishop);
        assert!(is_king_in_check(&board, Color::White));
        assert_eq!(checked_king(&board), Some(Color::White));
    }

    #[test]
    fn blocked_rays_do_not_attack() {
        let board = Board::from_fen("4r1k1/8/8/8/8/8/4P3/4K3 w - - 0 1").expect("FEN should parse");
        assert!(!is_king_in_check(&board, Color::White));
        assert!(is_square_attacked(&board, sq("e2"), Color::Black));
        assert_eq!(checked_king(&board), None);
    }

    #[test]
    fn pawns_attack_diagonally_only() {
        let board = Board::from_fen("4k3/8/8/4p3/8/8/8/4K3 w - - 0 1").expect("FEN should parse");

        // Straight ahead is a quiet move, never a threat.
        assert!(!is_square_attacked(&board, sq("e4"), Color::Black));
        // Nothing to capture on the diagonals yet.
        assert!(attackers_of(&board, sq("d4"), Some(Color::White)).is_empty());
        assert!(!is_square_attacked(&board, sq("f4"), Color::Black));

        let board = Board::from_fen("4k3/8/8/4p3/3N4/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let attackers = attackers_of(&board, sq("d4"), Some(Color::White));
        assert_eq!(attackers.len(), 1);
        assert_eq!(attackers[0].kind, PieceKind::Pawn);

        let board = Board::from_fen("4k3/8/8/4p3/3K4/8/8/8 w - - 0 1").expect("FEN should parse");
        assert!(is_king_in_check(&board, Color::White));
    }

    #[test]
    fn knights_jump_over_blockers() {
        let board =
            Board::from_fen("4k3/8/8/8/8/3n4/3PPP2/4K3 w - - 0 1").expect("FEN should parse");
        let attackers = attackers_of(&board, sq("e1"), Some(Color::White));
        assert_eq!(attackers.len(), 1);
        assert_eq!(attackers[0].kind, PieceKind::Knight);
    }

    #[test]
    fn exclude_none_counts_both_sides() {
        let board = Board::from_fen("4k3/8/8/8/3r4/8/3R4/4K3 w - - 0 1").expect("FEN should parse");
        // d3 sits between the two rooks.
        let attackers = attackers_of(&board, sq("d3"), None);
        assert_eq!(attackers.len(), 2);
        assert_eq!(attackers_of(&board, sq("d3"), Some(Color::Black)).len(), 1);
    }
}
