//! Canonical Ataxx rule constants.

/// Standard starting position in board-layout notation: Red on `a7` and
/// `g1`, Blue on `a1` and `g7`, Red to move.
pub const STARTING_LAYOUT: &str = "b-----r/-------/-------/-------/-------/-------/r-----b r";

/// Consecutive jumps (with no intervening extend) that end the game.
pub const JUMP_LIMIT: u16 = 25;

/// Largest row/column offset of a single step.
pub const STEP_REACH: i8 = 2;
