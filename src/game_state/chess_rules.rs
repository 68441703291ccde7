//! Canonical chess-rule constants.
//!
//! Static rule literals: the initial back-rank layout, the castling files and
//! the no-capture draw limit.

use crate::game_state::chess_types::{CastleSide, PieceKind};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank layout from file a to file h, identical for both colors.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Consecutive plies without a capture that end the game in a draw.
pub const NO_CAPTURE_DRAW_LIMIT: u16 = 50;

pub const KING_START_FILE: u8 = 4;

/// File layout of one castling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastleFiles {
    pub rook_from: u8,
    pub king_to: u8,
    pub rook_to: u8,
    /// Files strictly between king and rook, all of which must be empty.
    pub must_be_empty: &'static [u8],
    /// Files the king stands on, crosses and lands on; none may be attacked.
    pub king_path: [u8; 3],
}

pub const KING_SIDE_CASTLE: CastleFiles = CastleFiles {
    rook_from: 7,
    king_to: 6,
    rook_to: 5,
    must_be_empty: &[5, 6],
    king_path: [4, 5, 6],
};

pub const QUEEN_SIDE_CASTLE: CastleFiles = CastleFiles {
    rook_from: 0,
    king_to: 2,
    rook_to: 3,
    must_be_empty: &[3, 2, 1],
    king_path: [4, 3, 2],
};

#[inline]
pub const fn castle_files(side: CastleSide) -> &'static CastleFiles {
    match side {
        CastleSide::KingSide => &KING_SIDE_CASTLE,
        CastleSide::QueenSide => &QUEEN_SIDE_CASTLE,
    }
}
