//! Move value type and its textual form.
//!
//! A move is either a pass or a step between two squares. Steps print as
//! `b2-c3`; a pass prints as `-`.

use std::fmt;
use std::str::FromStr;

use crate::errors::AtaxxError;
use crate::game_state::ataxx_types::Square;

/// Token used for a pass in move text.
pub const PASS_TOKEN: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Pass,
    Step { from: Square, to: Square },
}

impl Move {
    #[inline]
    pub const fn step(from: Square, to: Square) -> Self {
        Move::Step { from, to }
    }

    #[inline]
    pub const fn is_pass(self) -> bool {
        matches!(self, Move::Pass)
    }

    /// A step to an adjacent square; the source piece stays.
    #[inline]
    pub fn is_extend(self) -> bool {
        match self {
            Move::Step { from, to } => from.distance(to) == 1,
            Move::Pass => false,
        }
    }

    /// A step of distance two; the source square is vacated.
    #[inline]
    pub fn is_jump(self) -> bool {
        match self {
            Move::Step { from, to } => from.distance(to) == 2,
            Move::Pass => false,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Pass => write!(f, "{PASS_TOKEN}"),
            Move::Step { from, to } => write!(f, "{from}-{to}"),
        }
    }
}

impl FromStr for Move {
    type Err = AtaxxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == PASS_TOKEN {
            return Ok(Move::Pass);
        }
        let (from, to) = trimmed
            .split_once('-')
            .ok_or_else(|| AtaxxError::InvalidMoveText(s.to_owned()))?;
        let from = from
            .parse::<Square>()
            .map_err(|_| AtaxxError::InvalidMoveText(s.to_owned()))?;
        let to = to
            .parse::<Square>()
            .map_err(|_| AtaxxError::InvalidMoveText(s.to_owned()))?;
        Ok(Move::step(from, to))
    }
}
