//! Python bindings for the clear-cell engine.
//!
//! Lets a Python front end (pygame, a notebook, a test harness) drive the
//! board while all rules stay in Rust.
//!
//! # Quick Start
//!
//! ```python
//! import clear_cell as cc
//!
//! game = cc.BoardEngine(rows=12, cols=8, seed=42)
//!
//! while not game.is_game_over():
//!     game.advance()
//!     cleared, collapsed = game.process_click(0, 3)
//!
//! print(game.score)
//! print(game.board_array())
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// clear_cell: the clear-cell puzzle engine.
#[pymodule]
fn clear_cell(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCell>()?;
    m.add_class::<PyBoardEngine>()?;

    Ok(())
}
