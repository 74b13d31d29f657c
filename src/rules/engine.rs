//! Rules trait for puzzle variants.
//!
//! A variant owns its board and implements three operations:
//! - Whether the game has ended
//! - One animation tick
//! - The response to a player click
//!
//! Renderers and input layers drive a variant only through this trait plus
//! its read-only accessors.

use crate::core::EngineError;

/// What a single click did to the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickOutcome {
    /// Cells transitioned from a color to empty (equal to the score gained).
    pub cleared: u32,
    /// Fully empty rows removed by the collapse pass.
    pub collapsed_rows: u32,
}

impl ClickOutcome {
    /// Check if the click left the board untouched.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.cleared == 0 && self.collapsed_rows == 0
    }
}

/// Rules trait.
///
/// ## Implementation Notes
///
/// - `is_game_over`: Re-evaluated from the board on every call, never cached
/// - `advance`: Must do nothing once the game is over
/// - `process_click`: Validate the row before the column
pub trait PuzzleRules {
    /// Check if the game has reached its terminal condition.
    fn is_game_over(&self) -> bool;

    /// Advance the simulation by one tick.
    fn advance(&mut self);

    /// Respond to the player selecting `(row, col)`.
    ///
    /// Indices are signed because they come straight from input coordinates.
    fn process_click(&mut self, row: isize, col: isize) -> Result<ClickOutcome, EngineError>;

    /// Run ticks until the game ends or `max_ticks` have elapsed.
    ///
    /// Returns the number of ticks that were applied.
    fn advance_until_over(&mut self, max_ticks: usize) -> usize {
        let mut ticks = 0;
        while ticks < max_ticks && !self.is_game_over() {
            self.advance();
            ticks += 1;
        }
        ticks
    }
}
