//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --verbose`

use plum_ataxx::engines::engine_minimax::MinimaxEngine;
use plum_ataxx::engines::engine_random::RandomEngine;
use plum_ataxx::engines::engine_trait::Engine;
use plum_ataxx::errors::AtaxxError;
use plum_ataxx::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

// Use 'cargo run --release --bin engine_match_series -- --verbose' to run this
fn main() -> Result<(), AtaxxError> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    // Customize these two lines to experiment with different engines/depths.
    let player1 = |color| Box::new(MinimaxEngine::new(color, 1234).with_depth(3)) as Box<dyn Engine>;
    let player2 = |_| Box::new(RandomEngine::new(4321)) as Box<dyn Engine>;

    let stats = play_engine_match_series(
        player1,
        player2,
        MatchSeriesConfig {
            games: 10,
            base_seed: 1234,
            per_game: MatchConfig {
                max_plies: 300,
                opening_random_plies: 4,
                ..MatchConfig::default()
            },
            verbose,
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
