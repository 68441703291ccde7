//! Structured move intents handed to the legality engine.

use std::fmt;

use crate::game_state::chess_types::{CastleSide, Color, PieceKind, Square};

/// A parsed move as declared by the player. Declared kind and color are only
/// trusted once they match the actual occupant of `source`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveIntent {
    Standard {
        source: Square,
        target: Square,
        kind: PieceKind,
        color: Color,
        is_capture: bool,
    },
    Castle {
        side: CastleSide,
        color: Color,
    },
}

impl MoveIntent {
    #[inline]
    pub fn color(&self) -> Color {
        match self {
            MoveIntent::Standard { color, .. } | MoveIntent::Castle { color, .. } => *color,
        }
    }

    pub fn is_capture(&self) -> bool {
        matches!(self, MoveIntent::Standard { is_capture: true, .. })
    }
}

/// Long algebraic form: `Ng1f3`, `Pe4xd5`, `O-O-O`.
impl fmt::Display for MoveIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveIntent::Standard {
                source,
                target,
                kind,
                is_capture,
                ..
            } => write!(
                f,
                "{}{}{}{}",
                kind.letter(),
                source,
                if *is_capture { "x" } else { "" },
                target
            ),
            MoveIntent::Castle {
                side: CastleSide::KingSide,
                ..
            } => f.write_str("O-O"),
            MoveIntent::Castle {
                side: CastleSide::QueenSide,
                ..
            } => f.write_str("O-O-O"),
        }
    }
}
