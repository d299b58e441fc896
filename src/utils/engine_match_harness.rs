//! Minimal head-to-head engine match harness for local testing.
//!
//! This module is the game orchestrator: it runs two `Engine`
//! implementations against each other on a live `GameState`, applies the
//! moves they return, reports passes for a side that cannot move, and
//! stops when the game is decided or the ply budget runs out. An optional
//! seeded random opening prefix varies the games of a series.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;
use tracing::{debug, info};

use crate::engines::engine_trait::{Engine, GoParams};
use crate::errors::AtaxxError;
use crate::game_state::ataxx_types::{Color, GameResult};
use crate::game_state::board::Board;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::generate_legal_moves;
use crate::moves::ataxx_move::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    RedWin,
    BlueWin,
    Draw,
    DrawMaxPlies,
}

impl MatchOutcome {
    fn from_result(result: GameResult) -> Self {
        match result {
            GameResult::Winner(Color::Red) => MatchOutcome::RedWin,
            GameResult::Winner(Color::Blue) => MatchOutcome::BlueWin,
            GameResult::Draw => MatchOutcome::Draw,
        }
    }

    /// Result token used in game records: `1-0`, `0-1`, `1/2-1/2`, or `*`.
    pub fn result_token(self) -> &'static str {
        match self {
            MatchOutcome::RedWin => "1-0",
            MatchOutcome::BlueWin => "0-1",
            MatchOutcome::Draw => "1/2-1/2",
            MatchOutcome::DrawMaxPlies => "*",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, color: Color },
    Draw,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_random_plies: u8,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 400,
            opening_random_plies: 0,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    /// Position the engines started from, after any random opening.
    pub initial_state: GameState,
    pub final_state: GameState,
    pub opening_moves: Vec<Move>,
    pub played_moves: Vec<Move>,
    pub red_move_count: u32,
    pub blue_move_count: u32,
    pub red_passes: u32,
    pub blue_passes: u32,
    pub red_total_time_ns: u128,
    pub blue_total_time_ns: u128,
}

impl MatchResult {
    fn new(state: GameState, opening_moves: Vec<Move>) -> Self {
        Self {
            outcome: MatchOutcome::DrawMaxPlies,
            initial_state: state.clone(),
            final_state: state,
            opening_moves,
            played_moves: Vec::new(),
            red_move_count: 0,
            blue_move_count: 0,
            red_passes: 0,
            blue_passes: 0,
            red_total_time_ns: 0,
            blue_total_time_ns: 0,
        }
    }

    /// Played moves as space-separated move text.
    pub fn moves_text(&self) -> String {
        self.played_moves
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig {
                opening_random_plies: 4,
                ..MatchConfig::default()
            },
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
    pub overall_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3} overall_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
            self.overall_avg_move_time_ms
        )
    }
}

/// Play a single seeded engine-vs-engine match from the standard start.
///
/// `engine_red` moves first. `seed` drives the random opening plies only.
pub fn play_engine_match(
    mut engine_red: Box<dyn Engine>,
    mut engine_blue: Box<dyn Engine>,
    seed: u64,
    config: MatchConfig,
) -> Result<MatchResult, AtaxxError> {
    let (state, opening_moves) =
        apply_seeded_random_opening(&GameState::new_game(), seed, config.opening_random_plies)?;
    play_from_state(state, opening_moves, &mut engine_red, &mut engine_blue, &config)
}

/// Play a match from a caller-provided state, without random opening plies.
pub fn play_engine_match_from_state(
    mut engine_red: Box<dyn Engine>,
    mut engine_blue: Box<dyn Engine>,
    start_state: GameState,
    config: MatchConfig,
) -> Result<MatchResult, AtaxxError> {
    play_from_state(
        start_state,
        Vec::new(),
        &mut engine_red,
        &mut engine_blue,
        &config,
    )
}

fn play_from_state(
    mut state: GameState,
    opening_moves: Vec<Move>,
    engine_red: &mut Box<dyn Engine>,
    engine_blue: &mut Box<dyn Engine>,
    config: &MatchConfig,
) -> Result<MatchResult, AtaxxError> {
    engine_red.new_game();
    engine_blue.new_game();

    let mut result = MatchResult::new(state.clone(), opening_moves);

    for ply in 0..config.max_plies {
        if let Some(game_result) = state.winner() {
            result.outcome = MatchOutcome::from_result(game_result);
            break;
        }

        let mover = state.color_to_move();

        // The engine is never asked for a move it cannot make.
        if !state.has_any_legal_move(mover) {
            info!(ply, color = %mover, "pass reported");
            state.make_move(Move::Pass)?;
            result.played_moves.push(Move::Pass);
            match mover {
                Color::Red => result.red_passes += 1,
                Color::Blue => result.blue_passes += 1,
            }
            continue;
        }

        let engine = match mover {
            Color::Red => &mut *engine_red,
            Color::Blue => &mut *engine_blue,
        };
        let started = Instant::now();
        let out = engine.choose_move(&state, &config.go_params)?;
        let elapsed_ns = started.elapsed().as_nanos();

        for line in &out.info_lines {
            debug!(engine = engine.name(), "{line}");
        }

        match mover {
            Color::Red => {
                result.red_move_count = result.red_move_count.saturating_add(1);
                result.red_total_time_ns = result.red_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Blue => {
                result.blue_move_count = result.blue_move_count.saturating_add(1);
                result.blue_total_time_ns = result.blue_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let chosen = out.best_move.ok_or(AtaxxError::NoLegalMoves)?;
        if chosen.is_pass() || !state.is_legal_move(chosen) {
            return Err(AtaxxError::IllegalMove(format!(
                "{} returned {chosen} for {mover}",
                engine.name()
            )));
        }

        info!(ply, color = %mover, mv = %chosen, "move reported");
        state.make_move(chosen)?;
        result.played_moves.push(chosen);
    }

    if result.outcome == MatchOutcome::DrawMaxPlies {
        if let Some(game_result) = state.winner() {
            result.outcome = MatchOutcome::from_result(game_result);
        }
    }

    result.final_state = state;
    Ok(result)
}

/// Play up to `plies` uniformly random moves from `state`, seeded by `seed`.
///
/// Stops early if the game is decided. Passes when the mover is stuck.
pub fn apply_seeded_random_opening(
    state: &GameState,
    seed: u64,
    plies: u8,
) -> Result<(GameState, Vec<Move>), AtaxxError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut next = state.clone();
    let mut moves = Vec::with_capacity(usize::from(plies));

    for _ in 0..plies {
        if next.winner().is_some() {
            break;
        }
        let legal = generate_legal_moves(&next);
        let mv = legal.as_slice().choose(&mut rng).copied().unwrap_or(Move::Pass);
        next.make_move(mv)?;
        moves.push(mv);
    }

    Ok((next, moves))
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player 1 plays Red in even-numbered games and Blue in odd-numbered ones.
/// Factories receive the color their engine will play.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> Result<MatchSeriesStats, AtaxxError>
where
    F1: Fn(Color) -> Box<dyn Engine>,
    F2: Fn(Color) -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };

    for i in 0..config.games {
        let player1_is_red = i % 2 == 0;
        let seed = config.base_seed.wrapping_add(u64::from(i));
        if config.verbose {
            let (red, blue) = if player1_is_red {
                ("Player1", "Player2")
            } else {
                ("Player2", "Player1")
            };
            println!(
                "[series] game {}/{} seed={} red={} blue={}",
                i + 1,
                config.games,
                seed,
                red,
                blue
            );
        }

        let result = if player1_is_red {
            play_engine_match(
                player1_factory(Color::Red),
                player2_factory(Color::Blue),
                seed,
                config.per_game.clone(),
            )?
        } else {
            play_engine_match(
                player2_factory(Color::Red),
                player1_factory(Color::Blue),
                seed,
                config.per_game.clone(),
            )?
        };

        let (p1_moves, p2_moves, p1_time, p2_time) = if player1_is_red {
            (
                result.red_move_count,
                result.blue_move_count,
                result.red_total_time_ns,
                result.blue_total_time_ns,
            )
        } else {
            (
                result.blue_move_count,
                result.red_move_count,
                result.blue_total_time_ns,
                result.red_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_time);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_time);

        let winner_color = match result.outcome {
            MatchOutcome::RedWin => Some(Color::Red),
            MatchOutcome::BlueWin => Some(Color::Blue),
            MatchOutcome::Draw | MatchOutcome::DrawMaxPlies => None,
        };
        let mapped = match winner_color {
            Some(color) => {
                let player1_won = (color == Color::Red) == player1_is_red;
                let player = if player1_won {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWin { player, color }
            }
            None => {
                stats.draws += 1;
                if result.outcome == MatchOutcome::Draw {
                    SeriesOutcome::Draw
                } else {
                    SeriesOutcome::DrawMaxPlies
                }
            }
        };
        stats.outcomes.push(mapped);

        if config.verbose {
            println!(
                "[series] game {}/{} result={:?} moves={} p1_wins={} p2_wins={} draws={}\n",
                i + 1,
                config.games,
                mapped,
                result.moves_text(),
                stats.player1_wins,
                stats.player2_wins,
                stats.draws
            );
        }
    }

    stats.player1_avg_move_time_ms = avg_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms = avg_ms(stats.player2_total_time_ns, stats.player2_moves);
    stats.overall_avg_move_time_ms = avg_ms(
        stats.player1_total_time_ns + stats.player2_total_time_ns,
        stats.player1_moves + stats.player2_moves,
    );

    Ok(stats)
}

fn avg_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64 / f64::from(moves)) / 1_000_000.0
    }
}
