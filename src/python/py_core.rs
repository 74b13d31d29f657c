//! Core type bindings for Python.

use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

use crate::core::{Cell, EngineError};

/// Convert an engine error into the matching Python exception.
///
/// Bad coordinates raise `IndexError`; bad dimensions or palettes raise
/// `ValueError`.
pub fn engine_err(err: EngineError) -> PyErr {
    match err {
        EngineError::InvalidRow { .. } | EngineError::InvalidColumn { .. } => {
            PyIndexError::new_err(err.to_string())
        }
        EngineError::InvalidDimension { .. }
        | EngineError::EmptyPalette
        | EngineError::EmptyInPalette => PyValueError::new_err(err.to_string()),
    }
}

/// Python wrapper for Cell.
#[pyclass(name = "Cell")]
#[derive(Clone, Debug)]
pub struct PyCell(pub Cell);

#[pymethods]
impl PyCell {
    /// Create a cell from its symbol ('.', 'R', 'B', 'G', 'O', 'P').
    #[new]
    fn new(symbol: char) -> PyResult<Self> {
        Cell::from_symbol(symbol)
            .map(Self)
            .ok_or_else(|| PyValueError::new_err(format!("unknown cell symbol {symbol:?}")))
    }

    /// Get the cell's symbol.
    #[getter]
    fn symbol(&self) -> char {
        self.0.symbol()
    }

    /// Numeric code (0 for empty), matching `BoardEngine.board_array`.
    #[getter]
    fn code(&self) -> u8 {
        self.0 as u8
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn __repr__(&self) -> String {
        format!("Cell('{}')", self.0.symbol())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0 as u64
    }
}
