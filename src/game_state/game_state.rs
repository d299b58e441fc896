//! Core incremental board state representation.
//!
//! `GameState` stores the 7×7 cell array, the side to move, cached piece
//! counts, the consecutive-jump counter, and the undo stack used by
//! make/undo style search.

use crate::errors::AtaxxError;
use crate::game_state::ataxx_rules::{JUMP_LIMIT, STEP_REACH};
use crate::game_state::ataxx_types::*;
use crate::game_state::board::Board;
use crate::moves::ataxx_move::Move;
use crate::utils::board_layout::{generate_layout, parse_layout};

/// Incremental game state optimized for fast move making/undoing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) cells: [Cell; NUM_SQUARES],
    pub(crate) side_to_move: Color,

    // Kept in sync with `cells` by `put`.
    piece_counts: [u32; 2],

    consecutive_jumps: u16,

    undo_stack: Vec<UndoState>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            cells: [Cell::Empty; NUM_SQUARES],
            side_to_move: Color::Red,
            piece_counts: [0; 2],
            consecutive_jumps: 0,
            undo_stack: Vec::new(),
        }
    }
}

impl GameState {
    /// An empty board with Red to move.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// The standard starting position.
    pub fn new_game() -> Self {
        let mut state = Self::new_empty();
        for (row, col, color) in [
            (0, 6, Color::Red),
            (6, 0, Color::Red),
            (0, 0, Color::Blue),
            (6, 6, Color::Blue),
        ] {
            if let Some(square) = Square::new(row, col) {
                state.put(square, Cell::Piece(color));
            }
        }
        state
    }

    #[inline]
    pub fn from_layout(layout: &str) -> Result<Self, AtaxxError> {
        parse_layout(layout)
    }

    #[inline]
    pub fn get_layout(&self) -> String {
        generate_layout(self)
    }

    /// Overwrite one cell during setup. Does not touch the undo history.
    pub fn set_cell(&mut self, square: Square, cell: Cell) {
        self.put(square, cell);
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Block `square` and its reflections across the board's center lines.
    ///
    /// Only allowed before any move has been made, and only on empty cells.
    pub fn set_block(&mut self, square: Square) -> Result<(), AtaxxError> {
        if !self.undo_stack.is_empty() {
            return Err(AtaxxError::IllegalMove(format!(
                "cannot place a block on {square} after play has started"
            )));
        }
        let last = BOARD_SIDE - 1;
        let reflections = [
            (square.row(), square.col()),
            (last - square.row(), square.col()),
            (square.row(), last - square.col()),
            (last - square.row(), last - square.col()),
        ];
        let targets: Vec<Square> = reflections
            .into_iter()
            .filter_map(|(row, col)| Square::new(row, col))
            .collect();
        if let Some(occupied) = targets
            .iter()
            .find(|sq| matches!(self.cells[sq.index()], Cell::Piece(_)))
        {
            return Err(AtaxxError::IllegalMove(format!(
                "cannot place a block on occupied square {occupied}"
            )));
        }
        for target in targets {
            self.put(target, Cell::Blocked);
        }
        Ok(())
    }

    #[inline]
    pub fn consecutive_jumps(&self) -> u16 {
        self.consecutive_jumps
    }

    /// Number of moves currently on the undo stack.
    #[inline]
    pub fn ply(&self) -> usize {
        self.undo_stack.len()
    }

    #[inline]
    pub fn history(&self) -> &[UndoState] {
        &self.undo_stack
    }

    /// Moves applied so far, oldest first.
    pub fn moves_played(&self) -> impl Iterator<Item = Move> + '_ {
        self.undo_stack.iter().map(|undo| undo.mv)
    }

    /// Set a cell and keep the cached piece counts consistent.
    fn put(&mut self, square: Square, cell: Cell) {
        let idx = square.index();
        if let Cell::Piece(old) = self.cells[idx] {
            self.piece_counts[old.index()] -= 1;
        }
        if let Cell::Piece(new) = cell {
            self.piece_counts[new.index()] += 1;
        }
        self.cells[idx] = cell;
    }

    fn step_is_legal(&self, color: Color, from: Square, to: Square) -> bool {
        self.cells[from.index()].holds(color)
            && self.cells[to.index()].is_empty()
            && (1..=2).contains(&from.distance(to))
    }

    fn has_step_from(&self, color: Color, from: Square) -> bool {
        (-STEP_REACH..=STEP_REACH).any(|d_row| {
            (-STEP_REACH..=STEP_REACH).any(|d_col| {
                from.offset(d_row, d_col)
                    .is_some_and(|to| self.step_is_legal(color, from, to))
            })
        })
    }
}

impl Board for GameState {
    #[inline]
    fn occupant(&self, square: Square) -> Cell {
        self.cells[square.index()]
    }

    #[inline]
    fn color_to_move(&self) -> Color {
        self.side_to_move
    }

    fn is_legal_move(&self, mv: Move) -> bool {
        match mv {
            Move::Pass => !self.has_any_legal_move(self.side_to_move) && self.winner().is_none(),
            Move::Step { from, to } => self.step_is_legal(self.side_to_move, from, to),
        }
    }

    fn make_move(&mut self, mv: Move) -> Result<(), AtaxxError> {
        if !self.is_legal_move(mv) {
            return Err(AtaxxError::IllegalMove(format!(
                "{mv} for {}",
                self.side_to_move
            )));
        }

        let mover = self.side_to_move;
        let mut undo = UndoState {
            mv,
            changed_cells: Vec::new(),
            prev_side_to_move: mover,
            prev_consecutive_jumps: self.consecutive_jumps,
        };

        if let Move::Step { from, to } = mv {
            if mv.is_jump() {
                undo.changed_cells.push((from, self.cells[from.index()]));
                self.put(from, Cell::Empty);
                self.consecutive_jumps = self.consecutive_jumps.saturating_add(1);
            } else {
                self.consecutive_jumps = 0;
            }

            undo.changed_cells.push((to, self.cells[to.index()]));
            self.put(to, Cell::Piece(mover));

            let enemy = Cell::Piece(mover.opposite());
            for neighbor in to.neighbors() {
                if self.cells[neighbor.index()] == enemy {
                    undo.changed_cells.push((neighbor, enemy));
                    self.put(neighbor, Cell::Piece(mover));
                }
            }
        }

        self.side_to_move = mover.opposite();
        self.undo_stack.push(undo);
        Ok(())
    }

    fn undo(&mut self) -> Result<(), AtaxxError> {
        let undo = self.undo_stack.pop().ok_or(AtaxxError::EmptyUndoHistory)?;
        for &(square, cell) in undo.changed_cells.iter().rev() {
            self.put(square, cell);
        }
        self.side_to_move = undo.prev_side_to_move;
        self.consecutive_jumps = undo.prev_consecutive_jumps;
        Ok(())
    }

    fn winner(&self) -> Option<GameResult> {
        let red = self.piece_counts[Color::Red.index()];
        let blue = self.piece_counts[Color::Blue.index()];

        let finished = red == 0
            || blue == 0
            || self.consecutive_jumps >= JUMP_LIMIT
            || (!self.has_any_legal_move(Color::Red) && !self.has_any_legal_move(Color::Blue));
        if !finished {
            return None;
        }

        Some(match red.cmp(&blue) {
            std::cmp::Ordering::Greater => GameResult::Winner(Color::Red),
            std::cmp::Ordering::Less => GameResult::Winner(Color::Blue),
            std::cmp::Ordering::Equal => GameResult::Draw,
        })
    }

    #[inline]
    fn piece_count(&self, color: Color) -> u32 {
        self.piece_counts[color.index()]
    }

    fn has_any_legal_move(&self, color: Color) -> bool {
        Square::all().any(|from| self.has_step_from(color, from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(text: &str) -> Square {
        text.parse().expect("square should parse")
    }

    fn mv(text: &str) -> Move {
        text.parse().expect("move should parse")
    }

    #[test]
    fn new_game_has_two_pieces_each_and_red_to_move() {
        let game = GameState::new_game();
        assert_eq!(game.piece_count(Color::Red), 2);
        assert_eq!(game.piece_count(Color::Blue), 2);
        assert_eq!(game.color_to_move(), Color::Red);
        assert_eq!(game.occupant(sq("a7")), Cell::Piece(Color::Red));
        assert_eq!(game.occupant(sq("g1")), Cell::Piece(Color::Red));
        assert_eq!(game.occupant(sq("a1")), Cell::Piece(Color::Blue));
        assert_eq!(game.occupant(sq("g7")), Cell::Piece(Color::Blue));
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn extend_keeps_source_and_jump_vacates_it() {
        let mut game = GameState::new_game();
        game.make_move(mv("a7-b6")).expect("extend should apply");
        assert_eq!(game.occupant(sq("a7")), Cell::Piece(Color::Red));
        assert_eq!(game.occupant(sq("b6")), Cell::Piece(Color::Red));
        assert_eq!(game.piece_count(Color::Red), 3);
        assert_eq!(game.consecutive_jumps(), 0);

        game.make_move(mv("a1-c3")).expect("jump should apply");
        assert_eq!(game.occupant(sq("a1")), Cell::Empty);
        assert_eq!(game.occupant(sq("c3")), Cell::Piece(Color::Blue));
        assert_eq!(game.consecutive_jumps(), 1);
        assert_eq!(game.color_to_move(), Color::Red);
    }

    #[test]
    fn step_flips_adjacent_enemy_pieces() {
        let mut game = GameState::from_layout("r-b----/-b-----/-------/-------/-------/-------/------b r")
            .expect("layout should parse");
        game.make_move(mv("a1-a2")).expect("extend should apply");
        assert_eq!(game.occupant(sq("a3")), Cell::Piece(Color::Red));
        assert_eq!(game.occupant(sq("b2")), Cell::Piece(Color::Red));
        assert_eq!(game.piece_count(Color::Red), 4);
        assert_eq!(game.piece_count(Color::Blue), 1);
    }

    #[test]
    fn undo_restores_exact_previous_state() {
        let mut game = GameState::from_layout("r-b----/-b-----/-------/-------/-------/-------/------b r")
            .expect("layout should parse");
        let before = game.clone();
        game.make_move(mv("a1-a2")).expect("extend should apply");
        game.make_move(mv("g7-e5")).expect("jump should apply");
        game.undo().expect("undo should succeed");
        game.undo().expect("undo should succeed");
        assert_eq!(game, before);
    }

    #[test]
    fn undo_on_empty_history_errors() {
        let mut game = GameState::new_game();
        assert_eq!(game.undo(), Err(AtaxxError::EmptyUndoHistory));
    }

    #[test]
    fn illegal_moves_are_rejected() {
        let mut game = GameState::new_game();
        // Blue piece while Red is to move.
        assert!(game.make_move(mv("a1-a2")).is_err());
        // Too far.
        assert!(game.make_move(mv("a7-a4")).is_err());
        // Pass while moves exist.
        assert!(game.make_move(Move::Pass).is_err());
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn capturing_every_enemy_piece_wins() {
        let mut game = GameState::from_layout("r-b----/-------/-------/-------/-------/-------/------- r")
            .expect("layout should parse");
        game.make_move(mv("a1-a2")).expect("extend should apply");
        assert_eq!(game.winner(), Some(GameResult::Winner(Color::Red)));
    }

    #[test]
    fn pass_is_legal_only_when_stuck() {
        // Blue at a1 is walled in by blocks; Red still has room.
        let mut game = GameState::from_layout("bXX----/XXX----/XXX----/-------/-------/-------/------r b")
            .expect("layout should parse");
        assert!(!game.has_any_legal_move(Color::Blue));
        assert!(game.is_legal_move(Move::Pass));
        game.make_move(Move::Pass).expect("pass should apply");
        assert_eq!(game.color_to_move(), Color::Red);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn jump_limit_ends_game_by_count() {
        let mut game = GameState::new_game();
        game.consecutive_jumps = JUMP_LIMIT;
        assert_eq!(game.winner(), Some(GameResult::Draw));
    }

    #[test]
    fn set_block_places_reflections() {
        let mut game = GameState::new_game();
        game.set_block(sq("b2")).expect("block should place");
        for text in ["b2", "f2", "b6", "f6"] {
            assert_eq!(game.occupant(sq(text)), Cell::Blocked, "{text}");
        }
        assert!(game.set_block(sq("a1")).is_err());
    }
}
