//! Game bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Cell, EngineConfig, GameRng};
use crate::games::clear_cell::BoardEngine;
use crate::rules::PuzzleRules;

use super::py_core::{engine_err, PyCell};

/// Python wrapper for BoardEngine.
///
/// A clear-cell board driven by a render/input loop on the Python side.
#[pyclass(name = "BoardEngine")]
pub struct PyBoardEngine {
    engine: BoardEngine,
}

#[pymethods]
impl PyBoardEngine {
    /// Create a new board.
    ///
    /// # Arguments
    /// - rows: Number of rows (at least 1)
    /// - cols: Number of columns (at least 1)
    /// - seed: RNG seed for reproducible rows; omit for a random game
    /// - palette: Cell symbols new rows are drawn from, e.g. "RGB"
    #[new]
    #[pyo3(signature = (rows, cols, seed = None, palette = None))]
    fn new(rows: usize, cols: usize, seed: Option<u64>, palette: Option<String>) -> PyResult<Self> {
        let mut config = EngineConfig::new(rows, cols);
        if let Some(symbols) = palette {
            let cells = symbols
                .chars()
                .map(|ch| {
                    Cell::from_symbol(ch)
                        .ok_or_else(|| PyValueError::new_err(format!("unknown cell symbol {ch:?}")))
                })
                .collect::<PyResult<Vec<_>>>()?;
            config = config.with_palette(cells);
        }

        let rng = seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let engine = BoardEngine::with_config(config, rng).map_err(engine_err)?;
        Ok(Self { engine })
    }

    /// Advance one tick.
    fn advance(&mut self) {
        self.engine.advance();
    }

    /// Click a cell. Returns (cells cleared, rows collapsed).
    ///
    /// Raises IndexError for coordinates off the board.
    fn process_click(&mut self, row: isize, col: isize) -> PyResult<(u32, u32)> {
        let outcome = self.engine.process_click(row, col).map_err(engine_err)?;
        Ok((outcome.cleared, outcome.collapsed_rows))
    }

    /// Check if the game is over.
    fn is_game_over(&self) -> bool {
        self.engine.is_game_over()
    }

    /// Get a single cell.
    fn board_cell(&self, row: usize, col: usize) -> Option<PyCell> {
        self.engine.board_cell(row, col).map(PyCell)
    }

    /// Get the board as a (rows, cols) uint8 array of cell codes.
    fn board_array<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u8>>> {
        let codes: Vec<u8> = self.engine.grid().iter().map(|c| c as u8).collect();
        PyArray1::from_vec_bound(py, codes)
            .reshape([self.engine.rows(), self.engine.cols()])
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    #[getter]
    fn rows(&self) -> usize {
        self.engine.rows()
    }

    #[getter]
    fn cols(&self) -> usize {
        self.engine.cols()
    }

    #[getter]
    fn score(&self) -> u64 {
        self.engine.score()
    }

    #[getter]
    fn ticks(&self) -> u64 {
        self.engine.ticks()
    }

    fn __str__(&self) -> String {
        self.engine.to_string()
    }

    fn __repr__(&self) -> String {
        let status = if self.engine.is_game_over() {
            "over"
        } else {
            "playing"
        };
        format!(
            "BoardEngine({}x{}, score={}, status={})",
            self.engine.rows(),
            self.engine.cols(),
            self.engine.score(),
            status
        )
    }
}
