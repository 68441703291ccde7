use crate::game_state::chess_types::{CastleSide, Color, Square};
use crate::game_state::piece::Piece;

/// Minimal delta recorded before a trial relocation.
///
/// Restoring it puts the source and target squares back exactly as they were,
/// including the displaced occupant. `has_moved` is never touched by a trial.
#[derive(Debug)]
pub struct TrialMove {
    pub source: Square,
    pub target: Square,
    pub displaced: Option<Piece>,
}

/// Single undo record for `make_move` / `unmake_move`.
#[derive(Debug, Clone)]
pub struct UndoState {
    pub kind: UndoKind,
    pub prev_last_mover: Color,
    pub prev_no_capture_count: u16,
}

#[derive(Debug, Clone)]
pub enum UndoKind {
    Standard {
        source: Square,
        target: Square,
        captured: Option<Piece>,
        prev_has_moved: bool,
    },
    /// Castling requires both pieces to be unmoved, so reverting resets them.
    Castle { color: Color, side: CastleSide },
}
