//! Perft: leaf counts of the legal move tree, walked with make/unmake.

use crate::game_state::board::Board;
use crate::move_generation::game_status::is_checkmate;
use crate::move_generation::legal_move_apply::{commit_move, unmake_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::legal_moves;
use crate::moves::move_intent::MoveIntent;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub castles: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.castles += rhs.castles;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Number of leaf nodes `depth` plies below the current position.
pub fn perft(board: &mut Board, depth: u8) -> usize {
    if depth == 0 {
        return 1;
    }

    let color = board.side_to_move();
    let moves = legal_moves(board, color);
    if depth == 1 {
        return moves.len();
    }

    let mut nodes = 0;
    for intent in moves {
        let undo = commit_move(board, intent);
        nodes += perft(board, depth - 1);
        unmake_move(board, undo);
    }
    nodes
}

/// Leaf counts of each root move, for comparing against a reference engine.
pub fn perft_divide(board: &mut Board, depth: u8) -> Vec<(MoveIntent, usize)> {
    if depth == 0 {
        return Vec::new();
    }

    let color = board.side_to_move();
    let moves = legal_moves(board, color);
    let mut out = Vec::with_capacity(moves.len());
    for intent in moves {
        let undo = commit_move(board, intent);
        out.push((intent, perft(board, depth - 1)));
        unmake_move(board, undo);
    }
    out
}

/// Like [`perft`], also classifying the move that reaches each leaf.
pub fn perft_counts(board: &mut Board, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let color = board.side_to_move();
    let mut total = PerftCounts::default();
    for intent in legal_moves(board, color) {
        let undo = commit_move(board, intent);
        if depth == 1 {
            total.merge(classify_leaf(board, intent));
        } else {
            total.merge(perft_counts(board, depth - 1));
        }
        unmake_move(board, undo);
    }
    total
}

fn classify_leaf(board: &mut Board, intent: MoveIntent) -> PerftCounts {
    let defender = board.side_to_move();
    let gives_check = is_king_in_check(board, defender);

    PerftCounts {
        nodes: 1,
        captures: usize::from(intent.is_capture()),
        castles: usize::from(matches!(intent, MoveIntent::Castle { .. })),
        checks: usize::from(gives_check),
        checkmates: usize::from(gives_check && is_checkmate(board, defender)),
    }
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_counts, perft_divide, PerftCounts};
    use crate::game_state::board::Board;

    const KIWIPETE_FEN: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const POSITION_3_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let mut board = Board::new_game();
        assert_eq!(perft(&mut board, 0), 1);
        assert_eq!(
            perft_counts(&mut board, 0),
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn starting_position_node_counts() {
        let mut board = Board::new_game();
        let before = board.clone();

        assert_eq!(perft(&mut board, 1), 20);
        assert_eq!(perft(&mut board, 2), 400);
        assert_eq!(perft(&mut board, 3), 8902);
        assert_eq!(board, before);
    }

    #[test]
    fn starting_position_leaf_metrics() {
        let mut board = Board::new_game();
        assert_eq!(
            perft_counts(&mut board, 3),
            PerftCounts {
                nodes: 8902,
                captures: 34,
                castles: 0,
                checks: 12,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn kiwipete_includes_both_castles() {
        let mut board = Board::from_fen(KIWIPETE_FEN).expect("FEN should parse");
        assert_eq!(
            perft_counts(&mut board, 1),
            PerftCounts {
                nodes: 48,
                captures: 8,
                castles: 2,
                checks: 0,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn sparse_endgame_node_counts() {
        let mut board = Board::from_fen(POSITION_3_FEN).expect("FEN should parse");
        assert_eq!(perft(&mut board, 1), 14);
        assert_eq!(
            perft_counts(&mut board, 2),
            PerftCounts {
                nodes: 191,
                captures: 14,
                castles: 0,
                checks: 10,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut board = Board::new_game();
        let divided = perft_divide(&mut board, 2);
        assert_eq!(divided.len(), 20);
        assert!(divided.iter().all(|(_, nodes)| *nodes == 20));
        assert_eq!(divided.iter().map(|(_, nodes)| nodes).sum::<usize>(), 400);
    }
}
