//! Core types: cells, the grid, RNG, configuration and errors.
//!
//! These are shared by every puzzle variant. Variants live in `games` and
//! implement `rules::PuzzleRules`.

pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub mod rng;

pub use cell::Cell;
pub use config::EngineConfig;
pub use error::EngineError;
pub use grid::{Grid, Neighbors};
pub use rng::GameRng;
