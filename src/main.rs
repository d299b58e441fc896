//! Plays one engine-vs-engine Ataxx game and prints the record.
//!
//! `cargo run --release -- --seed 7 --depth 4 --opening 2`
//! Set `RUST_LOG=plum_ataxx=info` to see each reported move.

use plum_ataxx::engines::engine_minimax::MinimaxEngine;
use plum_ataxx::engines::engine_trait::Engine;
use plum_ataxx::errors::AtaxxError;
use plum_ataxx::game_state::ataxx_types::Color;
use plum_ataxx::search::minimax::MAX_DEPTH;
use plum_ataxx::utils::engine_match_harness::{play_engine_match, MatchConfig};
use plum_ataxx::utils::game_record::write_game_record;
use plum_ataxx::utils::render_game_state::render_game_state;
use tracing_subscriber::EnvFilter;

struct Args {
    seed: u64,
    depth: u8,
    opening: u8,
}

fn parse_args() -> Result<Args, AtaxxError> {
    let mut args = Args {
        seed: 0,
        depth: MAX_DEPTH,
        opening: 0,
    };
    let mut it = std::env::args().skip(1);
    while let Some(flag) = it.next() {
        let value = it
            .next()
            .ok_or_else(|| AtaxxError::InvalidOption(format!("{flag} needs a value")))?;
        let bad = || AtaxxError::InvalidOption(format!("{flag}={value}"));
        match flag.as_str() {
            "--seed" => args.seed = value.parse().map_err(|_| bad())?,
            "--depth" => args.depth = value.parse().map_err(|_| bad())?,
            "--opening" => args.opening = value.parse().map_err(|_| bad())?,
            other => return Err(AtaxxError::InvalidOption(other.to_owned())),
        }
    }
    Ok(args)
}

fn main() -> Result<(), AtaxxError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = parse_args()?;

    let red = MinimaxEngine::new(Color::Red, args.seed).with_depth(args.depth);
    let blue = MinimaxEngine::new(Color::Blue, args.seed).with_depth(args.depth);
    let red_name = red.name().to_owned();
    let blue_name = blue.name().to_owned();

    let result = play_engine_match(
        Box::new(red),
        Box::new(blue),
        args.seed,
        MatchConfig {
            opening_random_plies: args.opening,
            ..MatchConfig::default()
        },
    )?;

    println!("{}", render_game_state(&result.final_state));
    println!("outcome: {:?}", result.outcome);
    println!(
        "{}",
        write_game_record(
            &result.initial_state,
            &result.played_moves,
            &red_name,
            &blue_name,
            result.outcome.result_token(),
        )?
    );
    Ok(())
}
