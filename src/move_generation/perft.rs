//! Perft node counting for move-generator validation and benchmarking.
//!
//! Walks the full tree to a fixed depth with make/undo on a single board.
//! A position with no steps is counted as a leaf (`stuck`); passes are not
//! expanded.

use crate::errors::AtaxxError;
use crate::game_state::board::Board;
use crate::move_generation::move_generator::generate_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub extends: usize,
    pub jumps: usize,
    pub stuck: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.extends += rhs.extends;
        self.jumps += rhs.jumps;
        self.stuck += rhs.stuck;
    }
}

pub fn perft<B: Board>(board: &mut B, depth: u8) -> Result<PerftCounts, AtaxxError> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let moves = generate_legal_moves(&*board);
    if moves.is_empty() {
        return Ok(PerftCounts {
            nodes: 1,
            stuck: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in moves {
        board.make_move(mv)?;
        let child = perft(board, depth - 1);
        board.undo()?;
        let mut child = child?;

        if depth == 1 {
            if mv.is_jump() {
                child.jumps += 1;
            } else {
                child.extends += 1;
            }
        }
        total.merge(child);
    }

    Ok(total)
}
