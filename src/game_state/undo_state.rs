use crate::game_state::ataxx_types::*;
use crate::moves::ataxx_move::Move;

/// Single undo record for `make_move` / `undo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    /// Cells the move changed, with their previous contents.
    pub changed_cells: Vec<(Square, Cell)>,

    pub prev_side_to_move: Color,
    pub prev_consecutive_jumps: u16,
}
