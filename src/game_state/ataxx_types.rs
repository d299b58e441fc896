//! Core value types shared by the board, move generation, and search.

use std::fmt;
use std::str::FromStr;

use crate::errors::AtaxxError;

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Number of rows and of columns on the board.
pub const BOARD_SIDE: u8 = 7;
/// Number of cells on the board.
pub const NUM_SQUARES: usize = (BOARD_SIDE as usize) * (BOARD_SIDE as usize);

/// Player color. Red is the maximizing color and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Blue => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }

    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Blue => 'b',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Blue => write!(f, "Blue"),
        }
    }
}

/// Contents of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Blocked,
    Piece(Color),
}

impl Cell {
    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    pub fn holds(self, color: Color) -> bool {
        self == Cell::Piece(color)
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Winner(Color),
    Draw,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Winner(Color::Red) => write!(f, "1-0"),
            GameResult::Winner(Color::Blue) => write!(f, "0-1"),
            GameResult::Draw => write!(f, "1/2-1/2"),
        }
    }
}

/// A cell coordinate. Rows are lettered `a`..`g`, columns are `1`..`7`.
///
/// Always in bounds: the only constructors check the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIDE && col < BOARD_SIDE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Row-major index into a `NUM_SQUARES` array.
    #[inline]
    pub const fn index(self) -> usize {
        (self.row as usize) * (BOARD_SIDE as usize) + self.col as usize
    }

    #[inline]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < NUM_SQUARES {
            Some(Self {
                row: (index / BOARD_SIDE as usize) as u8,
                col: (index % BOARD_SIDE as usize) as u8,
            })
        } else {
            None
        }
    }

    /// The square displaced by `(d_row, d_col)`, if it stays on the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = i16::from(self.row) + i16::from(d_row);
        let col = i16::from(self.col) + i16::from(d_col);
        if (0..i16::from(BOARD_SIDE)).contains(&row) && (0..i16::from(BOARD_SIDE)).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Chebyshev distance: 1 for an extend, 2 for a jump.
    #[inline]
    pub fn distance(self, other: Square) -> u8 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// All squares in row-major order (`a1`, `a2`, ..., `g7`).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES).filter_map(Square::from_index)
    }

    /// The up-to-eight squares adjacent to this one.
    pub fn neighbors(self) -> impl Iterator<Item = Square> {
        (-1i8..=1)
            .flat_map(|dr| (-1i8..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(move |(dr, dc)| self.offset(dr, dc))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'a' + self.row),
            char::from(b'1' + self.col)
        )
    }
}

impl FromStr for Square {
    type Err = AtaxxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(AtaxxError::InvalidSquare(s.to_owned()));
        }
        let row = bytes[0].wrapping_sub(b'a');
        let col = bytes[1].wrapping_sub(b'1');
        Square::new(row, col).ok_or_else(|| AtaxxError::InvalidSquare(s.to_owned()))
    }
}
