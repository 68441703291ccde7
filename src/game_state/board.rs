//! Mailbox board state.
//!
//! `Board` owns every piece on an 8×8 grid, tracks where both kings stand,
//! which side moved last and how many plies passed without a capture. Its
//! mutators perform no validation: legality is established beforehand by the
//! move-generation layer, which also regenerates every cached move-set after
//! each mutation.

use std::fmt;

use crate::chess_errors::SetupError;
use crate::game_state::chess_rules::{castle_files, BACK_RANK_LAYOUT, KING_START_FILE};
use crate::game_state::chess_types::{CastleSide, Color, PieceKind, Square};
use crate::game_state::piece::Piece;
use crate::game_state::undo_state::TrialMove;
use crate::move_generation::move_generator::regenerate_all;
use crate::moves::move_set::MoveSet;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_game_state::render_board;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    // [rank][file]
    grid: [[Option<Piece>; 8]; 8],
    king_squares: [Square; 2],
    last_mover: Color,
    no_capture_count: u16,
}

impl Board {
    /// Standard initial setup. Black counts as the last mover so white opens.
    pub fn new_game() -> Self {
        let mut grid: [[Option<Piece>; 8]; 8] = Default::default();

        for color in Color::ALL {
            let back_rank = color.back_rank();
            let pawn_rank = color.pawn_start_rank();
            for (file, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                let file = file as u8;
                grid[back_rank as usize][file as usize] =
                    Some(Piece::new(color, *kind, Square::new(file, back_rank)));
                grid[pawn_rank as usize][file as usize] =
                    Some(Piece::new(color, PieceKind::Pawn, Square::new(file, pawn_rank)));
            }
        }

        let mut board = Self {
            grid,
            king_squares: [
                Square::new(KING_START_FILE, Color::White.back_rank()),
                Square::new(KING_START_FILE, Color::Black.back_rank()),
            ],
            last_mover: Color::Black,
            no_capture_count: 0,
        };
        board.regenerate_moves();
        board
    }

    /// Builds a board from loose pieces, checking that no square is used twice
    /// and that each side has exactly one king.
    pub fn from_pieces<I>(pieces: I, last_mover: Color, no_capture_count: u16) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = Piece>,
    {
        let mut grid: [[Option<Piece>; 8]; 8] = Default::default();
        let mut kings: [Vec<Square>; 2] = [Vec::new(), Vec::new()];

        for piece in pieces {
            let slot = &mut grid[piece.square.rank() as usize][piece.square.file() as usize];
            if slot.is_some() {
                return Err(SetupError::SquareOccupied(piece.square));
            }
            if piece.kind == PieceKind::King {
                kings[piece.color.index()].push(piece.square);
            }
            *slot = Some(piece);
        }

        let mut king_squares = [Square::new(0, 0); 2];
        for color in Color::ALL {
            match kings[color.index()].as_slice() {
                [square] => king_squares[color.index()] = *square,
                found => {
                    return Err(SetupError::KingCount {
                        color,
                        found: found.len(),
                    })
                }
            }
        }

        let mut board = Self {
            grid,
            king_squares,
            last_mover,
            no_capture_count,
        };
        board.regenerate_moves();
        Ok(board)
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, SetupError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn occupant_at(&self, square: Square) -> Option<&Piece> {
        self.grid[square.rank() as usize][square.file() as usize].as_ref()
    }

    #[inline]
    pub fn is_vacant(&self, square: Square) -> bool {
        self.occupant_at(square).is_none()
    }

    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.grid.iter().flatten().flatten()
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(move |piece| piece.color == color)
    }

    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn last_mover(&self) -> Color {
        self.last_mover
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.last_mover.opposite()
    }

    #[inline]
    pub fn no_capture_count(&self) -> u16 {
        self.no_capture_count
    }

    /// Moves the piece on `source` to `target` and marks it as moved.
    ///
    /// Whatever stood on `target` is removed from the grid and returned.
    /// Nothing happens when `source` is empty.
    pub fn apply_move(&mut self, source: Square, target: Square) -> Option<Piece> {
        if self.is_vacant(source) {
            return None;
        }
        let displaced = self.shift(source, target);
        if let Some(piece) = self.slot_mut(target).as_mut() {
            piece.has_moved = true;
        }
        displaced
    }

    /// Relocates king and rook of `color` to their post-castle squares.
    pub fn apply_castle(&mut self, side: CastleSide, color: Color) {
        let rank = color.back_rank();
        let files = castle_files(side);
        self.apply_move(Square::new(KING_START_FILE, rank), Square::new(files.king_to, rank));
        self.apply_move(Square::new(files.rook_from, rank), Square::new(files.rook_to, rank));
    }

    /// Trial relocation for the legality filter: `has_moved` is left alone and
    /// the returned delta restores both squares through [`Board::revert`].
    pub fn relocate(&mut self, source: Square, target: Square) -> Option<TrialMove> {
        if self.is_vacant(source) {
            return None;
        }
        let displaced = self.shift(source, target);
        Some(TrialMove {
            source,
            target,
            displaced,
        })
    }

    pub fn revert(&mut self, trial: TrialMove) {
        if let Some(piece) = self.slot_mut(trial.target).take() {
            self.put(trial.source, piece);
        }
        if let Some(displaced) = trial.displaced {
            self.put(trial.target, displaced);
        }
    }

    /// Turn bookkeeping after an accepted move.
    pub fn record_turn(&mut self, mover: Color, captured: bool) {
        self.last_mover = mover;
        self.no_capture_count = if captured {
            0
        } else {
            self.no_capture_count.saturating_add(1)
        };
    }

    pub fn regenerate_moves(&mut self) {
        regenerate_all(self);
    }

    pub(crate) fn restore_turn(&mut self, last_mover: Color, no_capture_count: u16) {
        self.last_mover = last_mover;
        self.no_capture_count = no_capture_count;
    }

    pub(crate) fn set_move_set(&mut self, square: Square, move_set: MoveSet) {
        if let Some(piece) = self.slot_mut(square).as_mut() {
            piece.set_move_set(move_set);
        }
    }

    pub(crate) fn piece_mut(&mut self, square: Square) -> Option<&mut Piece> {
        self.slot_mut(square).as_mut()
    }

    /// Places `piece` on `square` (updating its square field), returning the
    /// previous occupant.
    pub(crate) fn put(&mut self, square: Square, mut piece: Piece) -> Option<Piece> {
        piece.square = square;
        if piece.kind == PieceKind::King {
            self.king_squares[piece.color.index()] = square;
        }
        self.slot_mut(square).replace(piece)
    }

    fn shift(&mut self, source: Square, target: Square) -> Option<Piece> {
        match self.slot_mut(source).take() {
            Some(piece) => self.put(target, piece),
            None => None,
        }
    }

    #[inline]
    fn slot_mut(&mut self, square: Square) -> &mut Option<Piece> {
        &mut self.grid[square.rank() as usize][square.file() as usize]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new_game()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}
