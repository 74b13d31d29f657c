//! Rules trait for puzzle variants.
//!
//! Variants implement `PuzzleRules` to define:
//! - The terminal condition
//! - What one tick does to the board
//! - How a click clears cells
//!
//! Callers drive any variant through this trait without knowing its rules.

pub mod engine;

pub use engine::{ClickOutcome, PuzzleRules};
