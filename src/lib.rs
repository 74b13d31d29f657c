//! # clear-cell
//!
//! A deterministic engine for the clear-cell puzzle: a board of colored cells
//! that fills from the top one random row per tick, and a player who clears
//! same-colored clusters by clicking them.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: The RNG is injected at construction. The same seed
//!    and the same clicks always produce the same game.
//!
//! 2. **Rules Behind a Trait**: Variants implement `PuzzleRules`; rendering
//!    and input layers never reach into board storage.
//!
//! 3. **Configuration Over Convention**: Board size and palette come from
//!    `EngineConfig`.
//!
//! ## Example
//!
//! ```
//! use clear_cell::{BoardEngine, GameRng, PuzzleRules};
//!
//! let mut game = BoardEngine::new(8, 6, GameRng::new(42)).unwrap();
//! game.advance();
//!
//! let outcome = game.process_click(0, 2).unwrap();
//! assert!(outcome.cleared >= 1);
//! assert_eq!(game.score(), u64::from(outcome.cleared));
//! ```
//!
//! ## Modules
//!
//! - `core`: Cells, grid storage, RNG, configuration, errors
//! - `rules`: `PuzzleRules` trait and click outcomes
//! - `games`: Puzzle variants (`clear_cell`)

pub mod core;
pub mod rules;
pub mod games;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Cell, EngineConfig, EngineError, GameRng, Grid};

pub use crate::rules::{ClickOutcome, PuzzleRules};

pub use crate::games::clear_cell::BoardEngine;
