//! Engine errors.
//!
//! Every error is a caller-input validation failure reported synchronously;
//! none of them leave the engine in a modified state.

/// Errors returned by engine construction and board access.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid board dimensions {rows}x{cols}: rows and cols must be at least 1")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("invalid row index {row} (board has {rows} rows)")]
    InvalidRow { row: isize, rows: usize },

    #[error("invalid column index {col} (board has {cols} columns)")]
    InvalidColumn { col: isize, cols: usize },

    #[error("palette must contain at least one color")]
    EmptyPalette,

    #[error("palette must not contain the empty cell")]
    EmptyInPalette,
}
