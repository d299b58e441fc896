//! Board abstraction consumed by move generation and search.
//!
//! The search never looks at a concrete board type. Anything that can answer
//! these queries and apply/undo moves in strict LIFO order can be searched.

use crate::errors::AtaxxError;
use crate::game_state::ataxx_types::{Cell, Color, GameResult, Square};
use crate::moves::ataxx_move::Move;

pub trait Board {
    fn occupant(&self, square: Square) -> Cell;

    fn color_to_move(&self) -> Color;

    /// Whether `mv` may be played by the side to move.
    fn is_legal_move(&self, mv: Move) -> bool;

    /// Apply `mv` and push it onto the undo history.
    fn make_move(&mut self, mv: Move) -> Result<(), AtaxxError>;

    /// Reverse the most recently applied move.
    fn undo(&mut self) -> Result<(), AtaxxError>;

    /// `None` while the game is undecided.
    fn winner(&self) -> Option<GameResult>;

    fn piece_count(&self, color: Color) -> u32;

    /// Whether `color` has any step available, regardless of whose turn it is.
    fn has_any_legal_move(&self, color: Color) -> bool;
}
