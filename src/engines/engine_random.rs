//! Seeded random-move engine.
//!
//! Selects uniformly from legal moves and is primarily used as a baseline
//! opponent and for randomized opening plies.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::AtaxxError;
use crate::game_state::board::Board;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::generate_legal_moves;
use crate::moves::ataxx_move::Move;

pub struct RandomEngine {
    seed: u64,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "PlumAtaxx Random"
    }

    fn author(&self) -> &str {
        "plum_ataxx"
    }

    fn new_game(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), AtaxxError> {
        match name {
            "Seed" => {
                self.seed = value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| AtaxxError::InvalidOption(format!("Seed={value}")))?;
                self.rng = StdRng::seed_from_u64(self.seed);
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
        let legal_moves = generate_legal_moves(game_state);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        if let Some(depth) = params.depth {
            out.info_lines.push(format!(
                "info string random_engine requested_depth {}",
                depth
            ));
        }

        if game_state.winner().is_some() {
            return Ok(out);
        }

        out.best_move = Some(
            legal_moves
                .as_slice()
                .choose(&mut self.rng)
                .copied()
                .unwrap_or(Move::Pass),
        );
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_choices() {
        let game = GameState::new_game();
        let mut a = RandomEngine::new(11);
        let mut b = RandomEngine::new(11);
        for _ in 0..5 {
            let ma = a.choose_move(&game, &GoParams::default()).expect("engine should answer");
            let mb = b.choose_move(&game, &GoParams::default()).expect("engine should answer");
            assert_eq!(ma.best_move, mb.best_move);
            let chosen = ma.best_move.expect("a move should be chosen");
            assert!(game.is_legal_move(chosen));
        }
    }

    #[test]
    fn new_game_replays_the_same_sequence() {
        let game = GameState::new_game();
        let mut engine = RandomEngine::new(4);
        let first: Vec<_> = (0..4)
            .map(|_| engine.choose_move(&game, &GoParams::default()).map(|o| o.best_move))
            .collect::<Result<_, _>>()
            .expect("engine should answer");
        engine.new_game();
        let second: Vec<_> = (0..4)
            .map(|_| engine.choose_move(&game, &GoParams::default()).map(|o| o.best_move))
            .collect::<Result<_, _>>()
            .expect("engine should answer");
        assert_eq!(first, second);
    }

    #[test]
    fn stuck_side_passes() {
        let game = GameState::from_layout("bXX----/XXX----/XXX----/-------/-------/-------/-----rr b")
            .expect("layout should parse");
        let mut engine = RandomEngine::new(0);
        let out = engine.choose_move(&game, &GoParams::default()).expect("engine should answer");
        assert_eq!(out.best_move, Some(Move::Pass));
    }
}
