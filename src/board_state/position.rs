//! One-based board coordinates.
//!
//! A `Position` is a plain (row, column) pair. Row 1 is White's back rank and
//! column 1 is the `a` file. Out-of-range values are allowed so that move
//! generation can form candidate squares before bounds checking them.

use std::fmt;

use crate::board_state::chess_rules::BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: i8,
    column: i8,
}

impl Position {
    #[inline]
    pub const fn new(row: i8, column: i8) -> Self {
        Self { row, column }
    }

    /// Which row this position is in; 1 codes for the bottom (White) row.
    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    /// Which column this position is in; 1 codes for the left (`a`) column.
    #[inline]
    pub const fn column(self) -> i8 {
        self.column
    }

    /// Translates the position without any bounds checking.
    ///
    /// Coordinates saturate at the `i8` limits, which are far off the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_column: i8) -> Self {
        Self::new(self.row.saturating_add(d_row), self.column.saturating_add(d_column))
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 1 && self.row <= BOARD_SIZE && self.column >= 1 && self.column <= BOARD_SIZE
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.row, self.column)
    }
}
