//! Cached destinations of a single piece.
//!
//! Quiet and capturing destinations are kept as two separate sequences:
//! attack detection ignores pawn quiet steps and interposition only looks at
//! quiet reachability, so both lists are queried on their own.

use crate::game_state::chess_types::Square;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSet {
    quiet: Vec<Square>,
    captures: Vec<Square>,
}

impl MoveSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn quiet(&self) -> &[Square] {
        &self.quiet
    }

    #[inline]
    pub fn captures(&self) -> &[Square] {
        &self.captures
    }

    pub fn has_quiet(&self, square: Square) -> bool {
        self.quiet.contains(&square)
    }

    pub fn has_capture(&self, square: Square) -> bool {
        self.captures.contains(&square)
    }

    pub fn contains(&self, square: Square) -> bool {
        self.has_quiet(square) || self.has_capture(square)
    }

    /// Quiet destinations followed by capturing ones.
    pub fn destinations(&self) -> impl Iterator<Item = Square> + '_ {
        self.quiet.iter().chain(self.captures.iter()).copied()
    }

    pub fn len(&self) -> usize {
        self.quiet.len() + self.captures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quiet.is_empty() && self.captures.is_empty()
    }

    pub(crate) fn push_quiet(&mut self, square: Square) {
        debug_assert!(!self.captures.contains(&square));
        self.quiet.push(square);
    }

    pub(crate) fn push_capture(&mut self, square: Square) {
        debug_assert!(!self.quiet.contains(&square));
        self.captures.push(square);
    }
}
