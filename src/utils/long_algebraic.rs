//! Long algebraic move text, as typed by the player.
//!
//! Grammar: an optional piece letter (`R N B Q K P`, absent means pawn), the
//! source square, an optional `x` marking a capture and the target square,
//! for example `e2e4`, `Ng1f3` or `Pe4xd5`. Castles are written `O-O` /
//! `O-O-O` (digits `0-0` / `0-0-0` are accepted too).

use crate::chess_errors::NotationError;
use crate::game_state::chess_types::{CastleSide, Color, PieceKind};
use crate::moves::move_intent::MoveIntent;
use crate::utils::algebraic::algebraic_to_square;

/// Parse `text` as a move by `color`. No board is consulted: the declared
/// kind and capture flag are checked later against the position.
pub fn parse_move(text: &str, color: Color) -> Result<MoveIntent, NotationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(NotationError::Empty);
    }

    if let Some(side) = parse_castle(text) {
        return Ok(MoveIntent::Castle { side, color });
    }

    let malformed = || NotationError::Malformed(text.to_owned());
    if !text.is_ascii() {
        return Err(malformed());
    }

    let mut rest = text;
    let mut kind = PieceKind::Pawn;
    if let Some(first) = rest.chars().next() {
        if first.is_ascii_uppercase() {
            kind = PieceKind::from_letter(first).ok_or(NotationError::UnknownPiece(first))?;
            rest = &rest[1..];
        }
    }

    let (source, is_capture, target) = match rest.len() {
        4 => (&rest[0..2], false, &rest[2..4]),
        5 if &rest[2..3] == "x" => (&rest[0..2], true, &rest[3..5]),
        _ => return Err(malformed()),
    };

    Ok(MoveIntent::Standard {
        source: algebraic_to_square(source)?,
        target: algebraic_to_square(target)?,
        kind,
        color,
        is_capture,
    })
}

fn parse_castle(text: &str) -> Option<CastleSide> {
    match text {
        "O-O" | "0-0" => Some(CastleSide::KingSide),
        "O-O-O" | "0-0-0" => Some(CastleSide::QueenSide),
        _ => None,
    }
}
