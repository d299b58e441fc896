//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and the match
//! runner's output.

use crate::game_state::ataxx_types::*;
use crate::game_state::board::Board;

/// Render the board as text, one row per line from `a` down to `g`.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  1 2 3 4 5 6 7\n");

    for row in 0..BOARD_SIDE {
        out.push(char::from(b'a' + row));
        out.push(' ');

        for col in 0..BOARD_SIDE {
            let ch = match Square::new(row, col).map(|sq| game_state.occupant(sq)) {
                Some(Cell::Piece(Color::Red)) => 'r',
                Some(Cell::Piece(Color::Blue)) => 'b',
                Some(Cell::Blocked) => 'X',
                Some(Cell::Empty) | None => '·',
            };
            out.push(ch);

            if col < BOARD_SIDE - 1 {
                out.push(' ');
            }
        }

        out.push('\n');
    }

    out.push_str(&format!(
        "{} to move, red {} blue {}",
        game_state.color_to_move(),
        game_state.piece_count(Color::Red),
        game_state.piece_count(Color::Blue)
    ));

    out
}
