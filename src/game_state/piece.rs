use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::moves::move_set::MoveSet;

/// A piece on the board together with its cached destinations.
///
/// The cached move-set is only meaningful right after a full regeneration
/// pass over the board; any mutation leaves it stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub square: Square,
    pub has_moved: bool,
    move_set: MoveSet,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind, square: Square) -> Self {
        Self {
            color,
            kind,
            square,
            has_moved: false,
            move_set: MoveSet::default(),
        }
    }

    pub fn with_has_moved(mut self, has_moved: bool) -> Self {
        self.has_moved = has_moved;
        self
    }

    #[inline]
    pub fn move_set(&self) -> &MoveSet {
        &self.move_set
    }

    pub(crate) fn set_move_set(&mut self, move_set: MoveSet) {
        self.move_set = move_set;
    }

    /// Forward diagonals of a pawn, whether or not anything stands there.
    pub fn pawn_diagonals(&self) -> [Option<Square>; 2] {
        let forward = self.color.pawn_direction();
        [self.square.offset(-1, forward), self.square.offset(1, forward)]
    }

    /// Unicode glyph used by the board renderer.
    pub fn symbol(&self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::King) => '♔',
            (Color::Black, PieceKind::Pawn) => '♟',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::King) => '♚',
        }
    }
}
