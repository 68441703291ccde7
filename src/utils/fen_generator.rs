use crate::game_state::board::Board;
use crate::game_state::chess_rules::{castle_files, KING_START_FILE};
use crate::game_state::chess_types::*;
use crate::game_state::piece::Piece;

/// FEN of `board`. En passant is always `-` and the fullmove number `1`,
/// since the board tracks neither.
pub fn generate_fen(board: &Board) -> String {
    let side_to_move = match board.side_to_move() {
        Color::White => "w",
        Color::Black => "b",
    };

    format!(
        "{} {} {} - {} 1",
        generate_board_field(board),
        side_to_move,
        generate_castling_field(board),
        board.no_capture_count()
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            if let Some(piece) = board.occupant_at(Square::new(file, rank)) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece_to_fen_char(piece));
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn piece_to_fen_char(piece: &Piece) -> char {
    let letter = piece.kind.letter();
    match piece.color {
        Color::White => letter,
        Color::Black => letter.to_ascii_lowercase(),
    }
}

/// A right is written when the king and the matching rook are both unmoved on
/// their home squares.
fn generate_castling_field(board: &Board) -> String {
    let mut out = String::new();

    for color in Color::ALL {
        for side in [CastleSide::KingSide, CastleSide::QueenSide] {
            if !castle_pieces_unmoved(board, color, side) {
                continue;
            }
            let letter = match side {
                CastleSide::KingSide => 'K',
                CastleSide::QueenSide => 'Q',
            };
            out.push(match color {
                Color::White => letter,
                Color::Black => letter.to_ascii_lowercase(),
            });
        }
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

fn castle_pieces_unmoved(board: &Board, color: Color, side: CastleSide) -> bool {
    let rank = color.back_rank();
    let unmoved = |file: u8, kind: PieceKind| {
        board
            .occupant_at(Square::new(file, rank))
            .is_some_and(|piece| piece.kind == kind && piece.color == color && !piece.has_moved)
    };
    unmoved(KING_START_FILE, PieceKind::King) && unmoved(castle_files(side).rook_from, PieceKind::Rook)
}
