//! Errors used throughout the Ataxx engine.
//!
//! `AtaxxError` is the single error type returned by board mutation, text
//! parsing, and search. Parsing variants are recoverable input problems;
//! the board and search variants indicate a broken caller contract and are
//! surfaced immediately rather than retried.

use thiserror::Error;

use crate::game_state::ataxx_types::Color;

/// Unified error type for the Ataxx engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AtaxxError {
    /// The search was asked for a move by a color with no legal move.
    #[error("no legal moves available for the side to move")]
    NoLegalMoves,

    /// The search was asked to move for a color whose turn it is not.
    #[error("{0} is not the side to move")]
    NotToMove(Color),

    /// A move was applied that the board rejects.
    ///
    /// Payload: the move text and the board's reason.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// `undo` was called with an empty history.
    #[error("cannot undo: move history is empty")]
    EmptyUndoHistory,

    /// Search depth outside the supported range.
    #[error("search depth {0} is outside the supported range")]
    InvalidDepth(u8),

    /// A square such as `b2` could not be parsed.
    #[error("invalid square: {0}")]
    InvalidSquare(String),

    /// A move such as `b2-c3` could not be parsed.
    #[error("invalid move text: {0}")]
    InvalidMoveText(String),

    /// An engine option name or value was not recognized.
    #[error("invalid engine option: {0}")]
    InvalidOption(String),

    /// A board layout string was malformed.
    #[error("invalid board layout: {0}")]
    InvalidLayout(String),

    /// A game record could not be parsed or replayed.
    #[error("invalid game record: {0}")]
    InvalidGameRecord(String),
}
