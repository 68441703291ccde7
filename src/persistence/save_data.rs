//! JSON save files.
//!
//! A save file is a complete [`BoardSnapshot`]: every cell of the grid, the
//! last mover and the no-capture counter, stamped with the UTC time it was
//! written. Loading always produces a fresh [`Board`]; a failed load never
//! touches the game in progress.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::chess_errors::SaveLoadError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::piece::Piece;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub color: Color,
    pub kind: PieceKind,
    pub square: Square,
    pub has_moved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub saved_at: DateTime<Utc>,
    /// `[rank][file]`, rank 1 first.
    pub grid: [[Option<PieceSnapshot>; 8]; 8],
    pub last_mover: Color,
    pub no_capture_count: u16,
}

impl BoardSnapshot {
    pub fn capture(board: &Board) -> Self {
        let mut grid: [[Option<PieceSnapshot>; 8]; 8] = Default::default();
        for piece in board.pieces() {
            grid[piece.square.rank() as usize][piece.square.file() as usize] = Some(PieceSnapshot {
                color: piece.color,
                kind: piece.kind,
                square: piece.square,
                has_moved: piece.has_moved,
            });
        }

        Self {
            saved_at: Utc::now(),
            grid,
            last_mover: board.last_mover(),
            no_capture_count: board.no_capture_count(),
        }
    }

    /// Rebuilds a board, rejecting pieces filed under the wrong cell and
    /// positions without exactly one king per side.
    pub fn restore(&self) -> Result<Board, SaveLoadError> {
        let mut pieces = Vec::with_capacity(32);

        for (rank, row) in self.grid.iter().enumerate() {
            for (file, cell) in row.iter().enumerate() {
                let Some(snapshot) = cell else {
                    continue;
                };
                let expected = Square::new(file as u8, rank as u8);
                if snapshot.square != expected {
                    return Err(SaveLoadError::Corrupt(format!(
                        "piece stored in {expected} claims square {:?}",
                        snapshot.square
                    )));
                }
                pieces.push(
                    Piece::new(snapshot.color, snapshot.kind, expected).with_has_moved(snapshot.has_moved),
                );
            }
        }

        Ok(Board::from_pieces(pieces, self.last_mover, self.no_capture_count)?)
    }
}

pub fn save_to_file(board: &Board, path: &Path) -> Result<BoardSnapshot, SaveLoadError> {
    let snapshot = BoardSnapshot::capture(board);
    let json_data = serde_json::to_string_pretty(&snapshot)?;
    fs::write(path, json_data).map_err(|source| SaveLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(snapshot)
}

pub fn load_from_file(path: &Path) -> Result<Board, SaveLoadError> {
    let json_data = fs::read_to_string(path).map_err(|source| SaveLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let snapshot: BoardSnapshot = serde_json::from_str(&json_data)?;
    snapshot.restore()
}
