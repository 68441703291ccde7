//! FEN-to-Board parser.
//!
//! Builds a fully-populated [`Board`] from a Forsyth-Edwards Notation string.
//! The board keeps no castling-rights or en-passant fields, so those FEN
//! fields are folded into per-piece `has_moved` flags: a castling right marks
//! the matching king and rook as unmoved, and pawns count as unmoved only on
//! their starting rank.

use crate::chess_errors::SetupError;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{castle_files, BACK_RANK_LAYOUT, KING_START_FILE};
use crate::game_state::chess_types::*;
use crate::game_state::piece::Piece;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<Board, SetupError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side-to-move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| invalid("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| invalid("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut pieces = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let rights = parse_castling_rights(castling_part)?;
    // Validated, then dropped: the rules engine has no en passant.
    parse_en_passant_square(en_passant_part)?;
    let halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("invalid halfmove clock: {halfmove_part}")))?;
    fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("invalid fullmove number: {fullmove_part}")))?;

    for (color, side) in rights {
        grant_castle(&mut pieces, color, side)?;
    }

    Board::from_pieces(pieces, side_to_move.opposite(), halfmove_clock)
}

fn invalid(reason: &str) -> SetupError {
    SetupError::InvalidFen(reason.to_owned())
}

/// Pieces of the placement field. Kings and rooks start with
/// `has_moved == true` until a castling right says otherwise; other pieces
/// count as unmoved only on their initial square.
fn parse_board(board_part: &str) -> Result<Vec<Piece>, SetupError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut pieces = Vec::new();
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(invalid("board rank has too many files"));
                }
                continue;
            }

            let (color, kind) = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("invalid piece character '{ch}' in board layout")))?;

            if file >= 8 {
                return Err(invalid("board rank has too many files"));
            }

            let square = Square::new(file, rank);
            let unmoved = match kind {
                PieceKind::Pawn => rank == color.pawn_start_rank(),
                PieceKind::King | PieceKind::Rook => false,
                _ => rank == color.back_rank() && BACK_RANK_LAYOUT[file as usize] == kind,
            };
            pieces.push(Piece::new(color, kind, square).with_has_moved(!unmoved));
            file += 1;
        }

        if file != 8 {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    Ok(pieces)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, SetupError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(&format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<Vec<(Color, CastleSide)>, SetupError> {
    if castling_part == "-" {
        return Ok(Vec::new());
    }

    castling_part
        .chars()
        .map(|ch| match ch {
            'K' => Ok((Color::White, CastleSide::KingSide)),
            'Q' => Ok((Color::White, CastleSide::QueenSide)),
            'k' => Ok((Color::Black, CastleSide::KingSide)),
            'q' => Ok((Color::Black, CastleSide::QueenSide)),
            _ => Err(invalid(&format!("invalid castling rights character: {ch}"))),
        })
        .collect()
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, SetupError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part)
        .map(Some)
        .map_err(|_| invalid(&format!("invalid en-passant square: {en_passant_part}")))
}

/// Marks the king and rook backing a castling right as unmoved.
fn grant_castle(pieces: &mut [Piece], color: Color, side: CastleSide) -> Result<(), SetupError> {
    let rank = color.back_rank();
    let homes = [
        (PieceKind::King, Square::new(KING_START_FILE, rank)),
        (PieceKind::Rook, Square::new(castle_files(side).rook_from, rank)),
    ];

    for (kind, home) in homes {
        let piece = pieces
            .iter_mut()
            .find(|piece| piece.square == home && piece.kind == kind && piece.color == color)
            .ok_or_else(|| invalid(&format!("{color} {side} castling right without {kind} on {home}")))?;
        piece.has_moved = false;
    }

    Ok(())
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    Some((color, PieceKind::from_letter(ch)?))
}
