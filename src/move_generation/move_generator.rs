//! Legal-move enumeration for the side to move.
//!
//! Order is fixed so that search tie-breaks are reproducible: source cells
//! in row-major order, then the 24 displacements with the row offset as the
//! outer loop and the column offset as the inner loop, both ascending.

use crate::game_state::ataxx_rules::STEP_REACH;
use crate::game_state::ataxx_types::Square;
use crate::game_state::board::Board;
use crate::moves::ataxx_move::Move;

/// Number of non-zero displacements within `STEP_REACH`.
pub const NUM_DISPLACEMENTS: usize = 24;

/// `(d_row, d_col)` pairs in enumeration order.
pub const DISPLACEMENTS: [(i8, i8); NUM_DISPLACEMENTS] = build_displacements();

const fn build_displacements() -> [(i8, i8); NUM_DISPLACEMENTS] {
    let mut out = [(0i8, 0i8); NUM_DISPLACEMENTS];
    let mut n = 0;
    let mut d_row = -STEP_REACH;
    while d_row <= STEP_REACH {
        let mut d_col = -STEP_REACH;
        while d_col <= STEP_REACH {
            if d_row != 0 || d_col != 0 {
                out[n] = (d_row, d_col);
                n += 1;
            }
            d_col += 1;
        }
        d_row += 1;
    }
    out
}

/// All legal steps for the color the board reports as to move.
///
/// An empty result means the side to move must pass (or the game is over);
/// a pass is never included.
pub fn generate_legal_moves<B: Board + ?Sized>(board: &B) -> Vec<Move> {
    let mover = board.color_to_move();
    let mut moves = Vec::new();

    for from in Square::all() {
        if !board.occupant(from).holds(mover) {
            continue;
        }
        for &(d_row, d_col) in &DISPLACEMENTS {
            let Some(to) = from.offset(d_row, d_col) else {
                continue;
            };
            let candidate = Move::step(from, to);
            if board.is_legal_move(candidate) {
                moves.push(candidate);
            }
        }
    }

    moves
}
