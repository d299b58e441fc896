//! Compact board-layout notation, in the spirit of FEN.
//!
//! Seven `/`-separated ranks for rows `a`..`g`, each holding seven cells for
//! columns `1`..`7`: `r` Red, `b` Blue, `-` empty, `X` blocked. A space and
//! the side to move (`r` or `b`) follow.

use crate::errors::AtaxxError;
use crate::game_state::ataxx_types::*;
use crate::game_state::board::Board;

pub fn parse_layout(layout: &str) -> Result<GameState, AtaxxError> {
    let mut parts = layout.split_whitespace();
    let ranks = parts
        .next()
        .ok_or_else(|| AtaxxError::InvalidLayout("empty layout".to_owned()))?;
    let side = parts
        .next()
        .ok_or_else(|| AtaxxError::InvalidLayout(format!("missing side to move: {layout}")))?;
    if parts.next().is_some() {
        return Err(AtaxxError::InvalidLayout(format!(
            "unexpected trailing fields: {layout}"
        )));
    }

    let mut state = GameState::new_empty();
    state.set_side_to_move(match side {
        "r" => Color::Red,
        "b" => Color::Blue,
        other => {
            return Err(AtaxxError::InvalidLayout(format!(
                "invalid side to move: {other}"
            )))
        }
    });

    let rows: Vec<&str> = ranks.split('/').collect();
    if rows.len() != BOARD_SIDE as usize {
        return Err(AtaxxError::InvalidLayout(format!(
            "expected {BOARD_SIDE} ranks, found {}",
            rows.len()
        )));
    }

    for (row, rank) in rows.iter().enumerate() {
        if rank.chars().count() != BOARD_SIDE as usize {
            return Err(AtaxxError::InvalidLayout(format!(
                "rank {} must have {BOARD_SIDE} cells: {rank}",
                char::from(b'a' + row as u8)
            )));
        }
        for (col, ch) in rank.chars().enumerate() {
            let cell = match ch {
                'r' => Cell::Piece(Color::Red),
                'b' => Cell::Piece(Color::Blue),
                '-' => Cell::Empty,
                'X' => Cell::Blocked,
                other => {
                    return Err(AtaxxError::InvalidLayout(format!(
                        "invalid cell character: {other}"
                    )))
                }
            };
            let square = Square::new(row as u8, col as u8)
                .ok_or_else(|| AtaxxError::InvalidLayout(format!("cell out of range: {row},{col}")))?;
            state.set_cell(square, cell);
        }
    }

    Ok(state)
}

pub fn generate_layout(game_state: &GameState) -> String {
    let mut out = String::with_capacity(NUM_SQUARES + BOARD_SIDE as usize + 2);
    for square in Square::all() {
        if square.col() == 0 && square.row() > 0 {
            out.push('/');
        }
        out.push(match game_state.occupant(square) {
            Cell::Piece(color) => color.to_char(),
            Cell::Empty => '-',
            Cell::Blocked => 'X',
        });
    }
    out.push(' ');
    out.push(game_state.color_to_move().to_char());
    out
}
