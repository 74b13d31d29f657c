//! The clear-cell puzzle.
//!
//! - Every tick pushes the board down one row and injects a random row on top
//! - Clicking a colored cell clears it and every touching cell of the same
//!   color, diagonals included, scoring one point per cell
//! - Rows emptied by a click collapse, pulling the rows beneath them up
//! - The game ends when anything occupies the bottom row

mod game;

pub use game::BoardEngine;
