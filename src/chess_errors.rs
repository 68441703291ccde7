//! Errors used throughout the arbiter.
//!
//! Every rejection is recoverable: none of the operations returning these
//! errors mutate the live board before failing. The split mirrors what a
//! caller has to tell the player:
//! - `NotationError`: the text could not be read as a move at all.
//! - `MoveError::Impossible`: the intent is well-formed but structurally
//!   impossible (empty source, wrong piece, unreachable target, ...).
//! - `MoveError::Illegal`: the move is reachable but breaks a rule, either by
//!   leaving the mover's king attacked or by failing a castling precondition.
//! - `SetupError` / `SaveLoadError`: positions coming from FEN or from disk.
//!
//! `ChessError` wraps all of them for the interactive session.

use std::path::PathBuf;

use thiserror::Error;

use crate::game_state::chess_types::{CastleSide, Color, PieceKind, Square};

/// Malformed move text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("empty move")]
    Empty,

    /// A square token that is not `a1`..`h8`.
    #[error("invalid square `{0}`")]
    InvalidSquare(String),

    #[error("unknown piece letter `{0}`")]
    UnknownPiece(char),

    /// Input that does not follow `[piece]<from>[x]<to>` or a castle token.
    #[error("cannot read `{0}` as a move")]
    Malformed(String),
}

/// A well-formed intent that does not correspond to any pseudo-legal move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImpossibleMove {
    #[error("no piece on {0}")]
    EmptySource(Square),

    #[error("{color} does not move now")]
    NotSideToMove { color: Color },

    #[error("the piece on {square} is a {found}, not a {expected}")]
    WrongKind {
        square: Square,
        expected: PieceKind,
        found: PieceKind,
    },

    #[error("the piece on {square} belongs to {found}")]
    WrongColor { square: Square, found: Color },

    #[error("{kind} on {origin} cannot reach {target}")]
    Unreachable {
        kind: PieceKind,
        origin: Square,
        target: Square,
    },

    /// Capture marker present on a quiet move, or missing on a capture.
    #[error("capture marker does not match the occupant of {target}")]
    CaptureFlagMismatch { target: Square },
}

/// A pseudo-legal intent that violates a rule of play.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("the move would leave the {0} king in check")]
    LeavesKingInCheck(Color),

    #[error("{side} castle needs the king on its home square")]
    CastleKingMissing { side: CastleSide },

    #[error("{side} castle needs the rook on its home square")]
    CastleRookMissing { side: CastleSide },

    #[error("{side} castle is not allowed after the king or rook has moved")]
    CastlePieceMoved { side: CastleSide },

    #[error("{side} castle is blocked on {square}")]
    CastlePathBlocked { side: CastleSide, square: Square },

    /// Covers castling out of, through and into check.
    #[error("{side} castle passes through attacked square {square}")]
    CastleThroughAttack { side: CastleSide, square: Square },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("impossible move: {0}")]
    Impossible(#[from] ImpossibleMove),

    #[error("illegal move: {0}")]
    Illegal(#[from] IllegalMove),
}

/// Invalid position description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("two pieces placed on {0}")]
    SquareOccupied(Square),

    #[error("{color} has {found} kings, expected exactly one")]
    KingCount { color: Color, found: usize },

    #[error("invalid FEN: {0}")]
    InvalidFen(String),
}

#[derive(Debug, Error)]
pub enum SaveLoadError {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    /// JSON parsed but the position it describes is inconsistent.
    #[error("snapshot is corrupt: {0}")]
    Corrupt(String),

    #[error("snapshot describes an invalid position: {0}")]
    Setup(#[from] SetupError),
}

/// Umbrella error surfaced by the interactive session.
#[derive(Debug, Error)]
pub enum ChessError {
    #[error(transparent)]
    Notation(#[from] NotationError),

    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    SaveLoad(#[from] SaveLoadError),

    #[error(transparent)]
    Setup(#[from] SetupError),

    /// A move was submitted after checkmate or a draw.
    #[error("the game is over")]
    GameOver,
}
