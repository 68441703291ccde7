pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (-1, 1),
    (1, 1),
    (-1, -1),
    (1, -1),
];

#[cfg(test)]
mod tests {
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Square;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(name: &str) -> Square {
        algebraic_to_square(name).expect("valid square")
    }

    #[test]
    fn queen_combines_rook_and_bishop_rays() {
        let board = Board::from_fen("k7/8/8/8/3Q4/8/8/K7 w - - 0 1").expect("FEN should parse");
        let moves = board.occupant_at(sq("d4")).expect("queen on d4").move_set();
        // 14 orthogonal + 13 diagonal, minus a1 held by the friendly king.
        assert_eq!(moves.quiet().len(), 26);
    }

    #[test]
    fn each_ray_contributes_at_most_one_capture() {
        let board =
            Board::from_fen("3r3k/8/1p3p2/8/1p1Q1p2/8/1p1p1p2/K7 w - - 0 1").expect("FEN should parse");
        let moves = board.occupant_at(sq("d4")).expect("queen on d4").move_set();

        assert_eq!(moves.captures().len(), 8);
        assert!(moves.has_capture(sq("d8")));
        assert!(!moves.contains(sq("a4")));
        assert!(!moves.contains(sq("a7")));
    }
}
