//! One interactive game: the board, its status and the session commands.

use std::path::PathBuf;

use crate::chess_errors::ChessError;
use crate::game_state::board::Board;
use crate::move_generation::game_status::{game_status, GameStatus};
use crate::move_generation::legal_move_apply::make_move;
use crate::moves::move_intent::MoveIntent;
use crate::persistence::save_data::{load_from_file, save_to_file};
use crate::session::config::SessionConfig;
use crate::utils::long_algebraic::parse_move;

/// What an accepted input did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Moved { intent: MoveIntent, status: GameStatus },
    Saved(PathBuf),
    Loaded(PathBuf),
    NewGame,
}

#[derive(Debug)]
pub struct GameSession {
    board: Board,
    status: GameStatus,
    config: SessionConfig,
}

impl GameSession {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_board(Board::new_game(), config)
    }

    pub fn with_board(mut board: Board, config: SessionConfig) -> Self {
        let status = game_status(&mut board);
        Self {
            board,
            status,
            config,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Handles one line of player input: `save`, `load`, `new`, or a move in
    /// long algebraic notation for the side to move.
    ///
    /// On error the board is exactly as it was before the call.
    pub fn submit(&mut self, input: &str) -> Result<TurnOutcome, ChessError> {
        match input.trim() {
            "save" => {
                save_to_file(&self.board, &self.config.save_file)?;
                Ok(TurnOutcome::Saved(self.config.save_file.clone()))
            }
            "load" => {
                let board = load_from_file(&self.config.save_file)?;
                self.replace_board(board);
                Ok(TurnOutcome::Loaded(self.config.save_file.clone()))
            }
            "new" => {
                self.replace_board(Board::new_game());
                Ok(TurnOutcome::NewGame)
            }
            text => {
                if self.status.is_over() {
                    return Err(ChessError::GameOver);
                }
                let intent = parse_move(text, self.board.side_to_move())?;
                make_move(&mut self.board, intent)?;
                self.status = game_status(&mut self.board);
                Ok(TurnOutcome::Moved {
                    intent,
                    status: self.status,
                })
            }
        }
    }

    fn replace_board(&mut self, board: Board) {
        self.board = board;
        self.status = game_status(&mut self.board);
    }
}
