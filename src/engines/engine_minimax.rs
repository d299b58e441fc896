//! Fixed-depth alpha-beta engine.
//!
//! Plays one color. Each turn it snapshots the live board and searches the
//! copy; when its color has no step it reports a pass without searching.

use std::time::Instant;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::AtaxxError;
use crate::game_state::ataxx_types::Color;
use crate::game_state::board::Board;
use crate::game_state::game_state::GameState;
use crate::moves::ataxx_move::Move;
use crate::search::board_scoring::PieceDifferentialScorer;
use crate::search::minimax::{find_move, SearchConfig, SearchResult, MAX_SUPPORTED_DEPTH};

pub struct MinimaxEngine {
    color: Color,
    /// Reserved for randomized tie-breaking; the search itself is deterministic.
    seed: u64,
    config: SearchConfig,
    scorer: PieceDifferentialScorer,
}

impl MinimaxEngine {
    pub fn new(color: Color, seed: u64) -> Self {
        Self {
            color,
            seed,
            config: SearchConfig::default(),
            scorer: PieceDifferentialScorer,
        }
    }

    pub fn with_depth(mut self, max_depth: u8) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Search a copy of `board` for this engine's color.
    pub fn find_move<B: Board + Clone>(&self, board: &B) -> Result<SearchResult, AtaxxError> {
        find_move(board, self.color, &self.scorer, self.config)
    }
}

/// Choose a move for `color` on `board` at `max_depth`.
///
/// Deterministic for a fixed argument tuple. Fails with
/// `AtaxxError::NoLegalMoves` when `color` cannot move; callers check
/// `has_any_legal_move` first and pass instead.
pub fn choose_move<B: Board + Clone>(
    board: &B,
    color: Color,
    seed: u64,
    max_depth: u8,
) -> Result<Move, AtaxxError> {
    MinimaxEngine::new(color, seed)
        .with_depth(max_depth)
        .find_move(board)?
        .best_move
        .ok_or(AtaxxError::NoLegalMoves)
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "PlumAtaxx Minimax"
    }

    fn author(&self) -> &str {
        "plum_ataxx"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), AtaxxError> {
        match name {
            "Depth" => {
                let depth = value
                    .trim()
                    .parse::<u8>()
                    .map_err(|_| AtaxxError::InvalidOption(format!("Depth={value}")))?;
                if depth > MAX_SUPPORTED_DEPTH {
                    return Err(AtaxxError::InvalidDepth(depth));
                }
                self.config.max_depth = depth;
                Ok(())
            }
            "Seed" => {
                self.seed = value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| AtaxxError::InvalidOption(format!("Seed={value}")))?;
                Ok(())
            }
            other => Err(AtaxxError::InvalidOption(other.to_owned())),
        }
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> Result<EngineOutput, AtaxxError> {
        let mut out = EngineOutput::default();

        if game_state.winner().is_some() {
            out.info_lines
                .push("info string minimax_engine game_over".to_owned());
            return Ok(out);
        }
        if game_state.color_to_move() != self.color {
            return Err(AtaxxError::NotToMove(self.color));
        }
        if !game_state.has_any_legal_move(self.color) {
            out.info_lines
                .push("info string minimax_engine no_legal_moves pass".to_owned());
            out.best_move = Some(Move::Pass);
            return Ok(out);
        }

        let config = SearchConfig {
            max_depth: params.depth.unwrap_or(self.config.max_depth),
        };
        let started = Instant::now();
        let result = find_move(game_state, self.color, &self.scorer, config)?;
        let elapsed_ms = started.elapsed().as_millis();

        out.info_lines.push(format!(
            "info depth {} score {} nodes {} time {} seed {}",
            result.depth, result.value, result.nodes, elapsed_ms, self.seed
        ));
        out.best_move = result.best_move;
        out.score = Some(result.value);
        Ok(out)
    }
}
