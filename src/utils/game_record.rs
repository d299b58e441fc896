//! Game record read/write utilities.
//!
//! A PGN-like text form: `[Key "Value"]` header lines, a blank line, then
//! numbered move text ending in a result token. Passes appear as `-`. A
//! `Layout` header is written when the game did not start from the standard
//! position. Every move is replayed and validated on read and on write.

use std::collections::BTreeMap;

use chrono::Local;

use crate::errors::AtaxxError;
use crate::game_state::ataxx_rules::STARTING_LAYOUT;
use crate::game_state::board::Board;
use crate::game_state::game_state::GameState;
use crate::moves::ataxx_move::Move;

#[derive(Debug, Clone)]
pub struct GameRecord {
    pub headers: BTreeMap<String, String>,
    pub initial_state: GameState,
    pub moves: Vec<Move>,
    pub final_state: GameState,
    pub result: String,
}

/// Write a record with default headers, dated today.
pub fn write_game_record(
    initial_state: &GameState,
    moves: &[Move],
    red: &str,
    blue: &str,
    result: &str,
) -> Result<String, AtaxxError> {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "PlumAtaxx Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert(
        "Date".to_owned(),
        Local::now().format("%Y.%m.%d").to_string(),
    );
    headers.insert("Red".to_owned(), red.to_owned());
    headers.insert("Blue".to_owned(), blue.to_owned());
    headers.insert("Result".to_owned(), normalize_result(result).to_owned());

    let layout = initial_state.get_layout();
    if layout != STARTING_LAYOUT {
        headers.insert("Layout".to_owned(), layout);
    }

    write_game_record_with_headers(initial_state, moves, &headers)
}

pub fn write_game_record_with_headers(
    initial_state: &GameState,
    moves: &[Move],
    headers: &BTreeMap<String, String>,
) -> Result<String, AtaxxError> {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_value(value)));
    }
    out.push('\n');

    let mut state = initial_state.clone();
    let mut movetext_parts = Vec::<String>::with_capacity(moves.len() + 1);
    for (ply, mv) in moves.iter().enumerate() {
        state.make_move(*mv)?;
        if ply % 2 == 0 {
            movetext_parts.push(format!("{}. {}", (ply / 2) + 1, mv));
        } else {
            movetext_parts.push(mv.to_string());
        }
    }

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    Ok(out)
}

pub fn read_game_record(text: &str) -> Result<GameRecord, AtaxxError> {
    let mut headers = BTreeMap::<String, String>::new();
    let mut movetext_lines = Vec::<&str>::new();

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('[') {
            let (k, v) = parse_header_line(trimmed)?;
            headers.insert(k, v);
        } else {
            movetext_lines.push(trimmed);
        }
    }

    let initial_state = match headers.get("Layout") {
        Some(layout) => GameState::from_layout(layout)?,
        None => GameState::new_game(),
    };

    let mut state = initial_state.clone();
    let mut moves = Vec::<Move>::new();
    let mut result = "*".to_owned();

    for token in movetext_lines.join(" ").split_whitespace() {
        if is_move_number_token(token) {
            continue;
        }
        if is_result_token(token) {
            result = token.to_owned();
            break;
        }

        let mv: Move = token.parse()?;
        state
            .make_move(mv)
            .map_err(|e| AtaxxError::InvalidGameRecord(format!("move {}: {e}", moves.len() + 1)))?;
        moves.push(mv);
    }

    if let Some(header_result) = headers.get("Result") {
        result = normalize_result(header_result).to_owned();
    }

    Ok(GameRecord {
        headers,
        initial_state,
        moves,
        final_state: state,
        result,
    })
}

fn parse_header_line(line: &str) -> Result<(String, String), AtaxxError> {
    if !line.starts_with('[') || !line.ends_with(']') {
        return Err(AtaxxError::InvalidGameRecord(format!(
            "invalid header line: {line}"
        )));
    }
    let inner = &line[1..line.len() - 1];
    let (key, value_raw) = inner
        .split_once(' ')
        .ok_or_else(|| AtaxxError::InvalidGameRecord(format!("invalid header: {line}")))?;
    let value_raw = value_raw.trim();

    if !value_raw.starts_with('"') || !value_raw.ends_with('"') || value_raw.len() < 2 {
        return Err(AtaxxError::InvalidGameRecord(format!(
            "invalid quoted header value: {line}"
        )));
    }
    let value = value_raw[1..value_raw.len() - 1].replace("\\\"", "\"");
    Ok((key.trim().to_owned(), value))
}

fn is_move_number_token(token: &str) -> bool {
    token.ends_with('.')
        && token.len() > 1
        && token.trim_end_matches('.').chars().all(|c| c.is_ascii_digit())
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

fn normalize_result(result: &str) -> &str {
    if is_result_token(result) {
        result
    } else {
        "*"
    }
}

fn escape_value(value: &str) -> String {
    value.replace('"', "\\\"")
}
