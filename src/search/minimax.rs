//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! Values are always from Red's point of view at the root: a `Maximize` ply
//! raises `alpha`, a `Minimize` ply lowers `beta`, and the sense flips at
//! every level. Leaves are scored by a `BoardScorer` with a win bonus of
//! `WINNING_VALUE + remaining_depth`, so quicker wins (and slower losses)
//! are preferred.
//!
//! The search works on one board, mutated in place. Every child is visited
//! through `with_move`, which undoes the move before returning on every path,
//! so the board is back in its starting state whenever a node returns.

use tracing::{debug, trace_span};

use crate::errors::AtaxxError;
use crate::game_state::ataxx_types::Color;
use crate::game_state::board::Board;
use crate::move_generation::move_generator::generate_legal_moves;
use crate::moves::ataxx_move::Move;
use crate::search::board_scoring::{BoardScorer, WINNING_VALUE};

/// Default search depth in plies.
pub const MAX_DEPTH: u8 = 4;

/// Deepest search whose win bonus still fits in an `i32`.
pub const MAX_SUPPORTED_DEPTH: u8 = (i32::MAX - WINNING_VALUE) as u8;

/// A magnitude greater than any position value.
pub const INFTY: i32 = i32::MAX;

/// Whether a ply maximizes or minimizes the backed-up value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Maximize,
    Minimize,
}

impl Sense {
    /// Red maximizes, Blue minimizes.
    #[inline]
    pub const fn for_color(color: Color) -> Self {
        match color {
            Color::Red => Sense::Maximize,
            Color::Blue => Sense::Minimize,
        }
    }

    #[inline]
    pub const fn flipped(self) -> Self {
        match self {
            Sense::Maximize => Sense::Minimize,
            Sense::Minimize => Sense::Maximize,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` when the root had no legal step or the game was already over.
    pub best_move: Option<Move>,
    pub value: i32,
    pub depth: u8,
    pub nodes: u64,
}

/// Apply `mv`, run `f` on the resulting board, and undo `mv` before
/// returning `f`'s result.
pub fn with_move<B, T, F>(board: &mut B, mv: Move, f: F) -> Result<T, AtaxxError>
where
    B: Board + ?Sized,
    F: FnOnce(&mut B) -> Result<T, AtaxxError>,
{
    board.make_move(mv)?;
    let out = f(board);
    board.undo()?;
    out
}

struct Searcher<'s, S: BoardScorer> {
    scorer: &'s S,
    best_move: Option<Move>,
    nodes: u64,
}

impl<S: BoardScorer> Searcher<'_, S> {
    #[inline]
    fn static_score<B: Board + ?Sized>(&self, board: &B, depth: u8) -> i32 {
        self.scorer.score(board, WINNING_VALUE + i32::from(depth))
    }

    /// Value of `board` searched `depth` plies deep, recording the move that
    /// sets the returned bound in `best_move` iff `save_move`.
    fn min_max<B: Board + ?Sized>(
        &mut self,
        board: &mut B,
        depth: u8,
        save_move: bool,
        sense: Sense,
        mut alpha: i32,
        mut beta: i32,
    ) -> Result<i32, AtaxxError> {
        self.nodes += 1;

        if depth == 0 || board.winner().is_some() {
            return Ok(self.static_score(&*board, depth));
        }

        let moves = generate_legal_moves(&*board);
        if moves.is_empty() {
            // The side to move is stuck but the game goes on; score it as a leaf.
            return Ok(self.static_score(&*board, depth));
        }

        for mv in moves {
            let value = with_move(board, mv, |child| {
                self.min_max(child, depth - 1, false, sense.flipped(), alpha, beta)
            })?;

            match sense {
                Sense::Maximize => {
                    if value > alpha {
                        alpha = value;
                        if save_move {
                            self.best_move = Some(mv);
                        }
                    }
                }
                Sense::Minimize => {
                    if value < beta {
                        beta = value;
                        if save_move {
                            self.best_move = Some(mv);
                        }
                    }
                }
            }

            if alpha >= beta {
                break;
            }
        }

        Ok(match sense {
            Sense::Maximize => alpha,
            Sense::Minimize => beta,
        })
    }
}

/// Search `board` in place to `depth` plies with a full window.
///
/// The board is restored before this returns successfully.
pub fn search<B, S>(
    board: &mut B,
    scorer: &S,
    depth: u8,
    sense: Sense,
) -> Result<SearchResult, AtaxxError>
where
    B: Board + ?Sized,
    S: BoardScorer,
{
    if depth > MAX_SUPPORTED_DEPTH {
        return Err(AtaxxError::InvalidDepth(depth));
    }

    let _span = trace_span!("search_root", depth).entered();

    let mut searcher = Searcher {
        scorer,
        best_move: None,
        nodes: 0,
    };
    let value = searcher.min_max(board, depth, true, sense, -INFTY, INFTY)?;

    debug!(
        value,
        nodes = searcher.nodes,
        best_move = %searcher.best_move.map_or_else(|| "none".to_owned(), |m| m.to_string()),
        "search complete"
    );

    Ok(SearchResult {
        best_move: searcher.best_move,
        value,
        depth,
        nodes: searcher.nodes,
    })
}

/// Find a move for `color` on a private copy of `board`.
///
/// `color` must be the side to move and must have a legal step; callers
/// report a pass instead when `has_any_legal_move` is false.
pub fn find_move<B, S>(
    board: &B,
    color: Color,
    scorer: &S,
    config: SearchConfig,
) -> Result<SearchResult, AtaxxError>
where
    B: Board + Clone,
    S: BoardScorer,
{
    if config.max_depth > MAX_SUPPORTED_DEPTH {
        return Err(AtaxxError::InvalidDepth(config.max_depth));
    }
    if board.color_to_move() != color {
        return Err(AtaxxError::NotToMove(color));
    }
    if !board.has_any_legal_move(color) {
        return Err(AtaxxError::NoLegalMoves);
    }

    let mut snapshot = board.clone();
    search(&mut snapshot, scorer, config.max_depth, Sense::for_color(color))
}

#[cfg(test)]
mod tests {
    use rand::prelude::IndexedRandom;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::game_state::ataxx_types::{GameResult, GameState, Square};
    use crate::search::board_scoring::PieceDifferentialScorer;

    fn mv(text: &str) -> Move {
        text.parse().expect("move should parse")
    }

    /// Plain minimax over the same tree, without bounds.
    fn full_width<B: Board>(
        board: &mut B,
        depth: u8,
        sense: Sense,
        nodes: &mut u64,
    ) -> (i32, Option<Move>) {
        *nodes += 1;
        let scorer = PieceDifferentialScorer;
        let bonus = WINNING_VALUE + i32::from(depth);
        if depth == 0 || board.winner().is_some() {
            return (scorer.score(&*board, bonus), None);
        }
        let moves = generate_legal_moves(&*board);
        if moves.is_empty() {
            return (scorer.score(&*board, bonus), None);
        }

        let mut best = match sense {
            Sense::Maximize => -INFTY,
            Sense::Minimize => INFTY,
        };
        let mut best_move = None;
        for m in moves {
            board.make_move(m).expect("generated move should apply");
            let (value, _) = full_width(board, depth - 1, sense.flipped(), nodes);
            board.undo().expect("undo should succeed");
            let better = match sense {
                Sense::Maximize => value > best,
                Sense::Minimize => value < best,
            };
            if better {
                best = value;
                best_move = Some(m);
            }
        }
        (best, best_move)
    }

    fn random_position(seed: u64, plies: usize) -> GameState {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = GameState::new_game();
        for _ in 0..plies {
            if game.winner().is_some() {
                break;
            }
            let moves = generate_legal_moves(&game);
            let next = moves.as_slice().choose(&mut rng).copied().unwrap_or(Move::Pass);
            game.make_move(next).expect("random move should apply");
        }
        game
    }

    /// Counts make/undo calls passing through to a real board.
    #[derive(Clone)]
    struct CountingBoard {
        inner: GameState,
        makes: u64,
        undos: u64,
        max_outstanding: u64,
    }

    impl Board for CountingBoard {
        fn occupant(&self, square: Square) -> crate::game_state::ataxx_types::Cell {
            self.inner.occupant(square)
        }
        fn color_to_move(&self) -> Color {
            self.inner.color_to_move()
        }
        fn is_legal_move(&self, mv: Move) -> bool {
            self.inner.is_legal_move(mv)
        }
        fn make_move(&mut self, mv: Move) -> Result<(), AtaxxError> {
            self.makes += 1;
            self.max_outstanding = self.max_outstanding.max(self.makes - self.undos);
            self.inner.make_move(mv)
        }
        fn undo(&mut self) -> Result<(), AtaxxError> {
            self.undos += 1;
            self.inner.undo()
        }
        fn winner(&self) -> Option<GameResult> {
            self.inner.winner()
        }
        fn piece_count(&self, color: Color) -> u32 {
            self.inner.piece_count(color)
        }
        fn has_any_legal_move(&self, color: Color) -> bool {
            self.inner.has_any_legal_move(color)
        }
    }

    #[test]
    fn depth_one_from_start_takes_first_best_move() {
        let mut game = GameState::new_game();
        let result = search(&mut game, &PieceDifferentialScorer, 1, Sense::Maximize)
            .expect("search should run");
        // Jumps leave the counts level (0 for Blue to move); extends give -1.
        assert_eq!(result.value, 0);
        assert_eq!(result.best_move, Some(mv("a7-a5")));
    }

    #[test]
    fn depth_one_for_blue_minimizes() {
        let mut game = GameState::new_game();
        game.set_side_to_move(Color::Blue);
        let result = search(&mut game, &PieceDifferentialScorer, 1, Sense::Minimize)
            .expect("search should run");
        assert_eq!(result.value, -1);
        assert_eq!(result.best_move, Some(mv("a1-a2")));
    }

    #[test]
    fn sooner_wins_score_higher() {
        let game = GameState::from_layout("r-b----/-------/-------/-------/-------/-------/------- r")
            .expect("layout should parse");

        let shallow = search(&mut game.clone(), &PieceDifferentialScorer, 2, Sense::Maximize)
            .expect("search should run");
        let deep = search(&mut game.clone(), &PieceDifferentialScorer, 3, Sense::Maximize)
            .expect("search should run");

        assert_eq!(shallow.value, WINNING_VALUE + 1);
        assert_eq!(deep.value, WINNING_VALUE + 2);
        assert!(deep.value > shallow.value);
        assert_eq!(shallow.best_move, Some(mv("a1-a2")));
        assert_eq!(deep.best_move, Some(mv("a1-a2")));
    }

    #[test]
    fn blue_win_is_negative() {
        let mut game = GameState::from_layout("b-r----/-------/-------/-------/-------/-------/------- b")
            .expect("layout should parse");
        let result = search(&mut game, &PieceDifferentialScorer, 2, Sense::Minimize)
            .expect("search should run");
        assert_eq!(result.value, -(WINNING_VALUE + 1));
        assert_eq!(result.best_move, Some(mv("a1-a2")));
    }

    #[test]
    fn decided_root_returns_static_value_without_move() {
        let mut game = GameState::from_layout("r------/-------/-------/-------/-------/-------/------- b")
            .expect("layout should parse");
        let result = search(&mut game, &PieceDifferentialScorer, 3, Sense::Minimize)
            .expect("search should run");
        assert_eq!(result.value, WINNING_VALUE + 3);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn stuck_node_is_scored_statically() {
        let mut game = GameState::from_layout("bXX----/XXX----/XXX----/-------/-------/-------/-----rr b")
            .expect("layout should parse");
        assert_eq!(game.winner(), None);
        let result = search(&mut game, &PieceDifferentialScorer, 3, Sense::Minimize)
            .expect("search should run");
        assert_eq!(result.value, 1 - 2);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn pruning_matches_full_width_minimax() {
        for (seed, plies) in [(0u64, 0usize), (1, 4), (2, 7), (3, 10), (4, 13)] {
            let game = random_position(seed, plies);
            let sense = Sense::for_color(game.color_to_move());
            for depth in 1..=3u8 {
                let mut pruned_board = game.clone();
                let pruned = search(&mut pruned_board, &PieceDifferentialScorer, depth, sense)
                    .expect("search should run");

                let mut full_nodes = 0u64;
                let (value, best) = full_width(&mut game.clone(), depth, sense, &mut full_nodes);

                assert_eq!(pruned.value, value, "value seed {seed} depth {depth}");
                assert_eq!(pruned.best_move, best, "move seed {seed} depth {depth}");
                assert!(pruned.nodes <= full_nodes);
                assert_eq!(pruned_board, game);
            }
        }
    }

    #[test]
    fn pruning_skips_work_at_depth_three() {
        let mut game = GameState::new_game();
        let pruned = search(&mut game, &PieceDifferentialScorer, 3, Sense::Maximize)
            .expect("search should run");
        let mut full_nodes = 0u64;
        full_width(&mut GameState::new_game(), 3, Sense::Maximize, &mut full_nodes);
        assert!(pruned.nodes < full_nodes);
    }

    #[test]
    fn every_make_is_paired_with_an_undo() {
        let mut board = CountingBoard {
            inner: random_position(9, 6),
            makes: 0,
            undos: 0,
            max_outstanding: 0,
        };
        let before = board.inner.clone();
        let sense = Sense::for_color(board.color_to_move());
        search(&mut board, &PieceDifferentialScorer, 3, sense).expect("search should run");

        assert!(board.makes > 0);
        assert_eq!(board.makes, board.undos);
        assert!(board.max_outstanding <= 3);
        assert_eq!(board.inner, before);
    }

    #[test]
    fn find_move_leaves_caller_board_untouched() {
        let game = random_position(5, 8);
        let before = game.clone();
        let color = game.color_to_move();
        let result = find_move(&game, color, &PieceDifferentialScorer, SearchConfig::default())
            .expect("search should run");
        assert!(result.best_move.is_some());
        assert_eq!(result.depth, MAX_DEPTH);
        assert_eq!(game, before);
    }

    #[test]
    fn find_move_rejects_broken_preconditions() {
        let game = GameState::new_game();
        let scorer = PieceDifferentialScorer;

        let err = find_move(&game, Color::Blue, &scorer, SearchConfig::default())
            .expect_err("blue is not to move");
        assert_eq!(err, AtaxxError::NotToMove(Color::Blue));

        let err = find_move(&game, Color::Red, &scorer, SearchConfig { max_depth: 21 })
            .expect_err("depth should be rejected");
        assert_eq!(err, AtaxxError::InvalidDepth(21));

        let stuck = GameState::from_layout("bXX----/XXX----/XXX----/-------/-------/-------/-----rr b")
            .expect("layout should parse");
        let err = find_move(&stuck, Color::Blue, &scorer, SearchConfig::default())
            .expect_err("blue cannot move");
        assert_eq!(err, AtaxxError::NoLegalMoves);
    }

    #[test]
    fn with_move_undoes_when_child_fails() {
        let mut game = GameState::new_game();
        let before = game.clone();
        let out: Result<(), AtaxxError> =
            with_move(&mut game, mv("a7-a6"), |_| Err(AtaxxError::NoLegalMoves));
        assert_eq!(out, Err(AtaxxError::NoLegalMoves));
        assert_eq!(game, before);
    }
}
