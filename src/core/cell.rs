//! Board cell states.
//!
//! A cell is either `Empty` or holds exactly one color. The set of colors is
//! fixed at compile time; which of them appear in new rows is decided by the
//! engine's palette (see `EngineConfig`).

use serde::{Deserialize, Serialize};

/// State of a single board position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No color. Cleared cells and fresh boards hold this.
    #[default]
    Empty,
    Red,
    Blue,
    Green,
    Orange,
    Purple,
}

impl Cell {
    /// Every non-empty cell, in declaration order.
    ///
    /// This is the default palette for new rows.
    pub const COLORS: [Cell; 5] = [Cell::Red, Cell::Blue, Cell::Green, Cell::Orange, Cell::Purple];

    /// Check if this cell holds no color.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Single-character symbol used when printing boards.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Blue => 'B',
            Cell::Green => 'G',
            Cell::Orange => 'O',
            Cell::Purple => 'P',
        }
    }

    /// Parse a symbol produced by [`Cell::symbol`].
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '.' => Some(Cell::Empty),
            'R' => Some(Cell::Red),
            'B' => Some(Cell::Blue),
            'G' => Some(Cell::Green),
            'O' => Some(Cell::Orange),
            'P' => Some(Cell::Purple),
            _ => None,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
