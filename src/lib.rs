//! Crate root module declarations for the Plum Ataxx engine project.
//!
//! This file exposes the top-level subsystems (game state, moves, move
//! generation, search, engines, and utility helpers) so binaries, tests,
//! benches, and external tooling can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod ataxx_rules;
    pub mod ataxx_types;
    pub mod board;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod ataxx_move;
}

pub mod move_generation {
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod board_layout;
    pub mod engine_match_harness;
    pub mod game_record;
    pub mod render_game_state;
}
