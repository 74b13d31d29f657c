//! Engine configuration.
//!
//! Callers describe a board with `EngineConfig` and hand it to
//! `BoardEngine::with_config`:
//!
//! ```
//! use clear_cell::core::{Cell, EngineConfig};
//!
//! let config = EngineConfig::new(10, 8).with_palette([Cell::Red, Cell::Blue]);
//! assert!(config.validate().is_ok());
//! ```
//!
//! The palette lists the colors new rows are drawn from. Each entry is equally
//! likely, so repeating a color makes it more frequent.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::error::EngineError;

/// Board dimensions and row palette.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Number of rows (at least 1).
    pub rows: usize,

    /// Number of columns (at least 1).
    pub cols: usize,

    /// Colors drawn for new rows. Must be non-empty and exclude `Cell::Empty`.
    pub palette: Vec<Cell>,
}

impl EngineConfig {
    /// Create a configuration with the default five-color palette.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            palette: Cell::COLORS.to_vec(),
        }
    }

    /// Replace the palette.
    #[must_use]
    pub fn with_palette(mut self, palette: impl IntoIterator<Item = Cell>) -> Self {
        self.palette = palette.into_iter().collect();
        self
    }

    /// Check that the configuration describes a playable board.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(EngineError::InvalidDimension {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.palette.is_empty() {
            return Err(EngineError::EmptyPalette);
        }
        if self.palette.iter().any(|c| c.is_empty()) {
            return Err(EngineError::EmptyInPalette);
        }
        Ok(())
    }
}
