//! Crate root module declarations for the chess arbiter.
//!
//! The crate is a rules engine for standard chess: board state, per-piece move
//! generation, attack detection, legality filtering by trial application,
//! castling validation and checkmate/stalemate/draw detection. Around that core
//! sit the notation interpreter, FEN and JSON persistence, and the game session
//! used by the terminal binary.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod piece;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod leaping_moves;
    pub mod move_intent;
    pub mod move_set;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod castling;
    pub mod game_status;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
}

pub mod persistence {
    pub mod save_data;
}

pub mod session {
    pub mod config;
    pub mod game_session;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}
