//! Pluggable board evaluation interfaces and the baseline implementation.
//!
//! Search remains modular by delegating static position scoring to this
//! trait, allowing alternate heuristics to be swapped without altering
//! search code.

use crate::game_state::ataxx_types::{Color, GameResult};
use crate::game_state::board::Board;

/// Magnitude of a decided game (positive for Red, negative for Blue),
/// before the remaining-depth bonus is added.
pub const WINNING_VALUE: i32 = i32::MAX - 20;

pub trait BoardScorer {
    /// Static value of `board`.
    ///
    /// Decided positions score `+win_bonus` for a Red win, `-win_bonus` for a
    /// Blue win, and `0` for a draw.
    fn score<B: Board + ?Sized>(&self, board: &B, win_bonus: i32) -> i32;
}

/// Piece-count differential from the point of view of the side to move.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceDifferentialScorer;

impl PieceDifferentialScorer {
    #[inline]
    pub const fn terminal_score(result: GameResult, win_bonus: i32) -> i32 {
        match result {
            GameResult::Winner(Color::Red) => win_bonus,
            GameResult::Winner(Color::Blue) => -win_bonus,
            GameResult::Draw => 0,
        }
    }

    /// Signed material balance for `mover` against its opponent.
    #[inline]
    pub fn material_balance(mover_count: u32, opponent_count: u32) -> i32 {
        mover_count as i32 - opponent_count as i32
    }
}

impl BoardScorer for PieceDifferentialScorer {
    fn score<B: Board + ?Sized>(&self, board: &B, win_bonus: i32) -> i32 {
        if let Some(result) = board.winner() {
            return Self::terminal_score(result, win_bonus);
        }
        let mover = board.color_to_move();
        Self::material_balance(board.piece_count(mover), board.piece_count(mover.opposite()))
    }
}
