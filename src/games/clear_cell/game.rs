//! Clear-cell board engine.

use log::{debug, trace};

use crate::core::{Cell, EngineConfig, EngineError, GameRng, Grid};
use crate::rules::{ClickOutcome, PuzzleRules};

/// Clear-cell game state: the board, the score and the row RNG.
///
/// Row 0 is the top of the board and row `rows - 1` the bottom. New rows
/// enter at the top on every tick; the game ends as soon as anything reaches
/// the bottom row.
#[derive(Clone, Debug)]
pub struct BoardEngine {
    grid: Grid,
    palette: Vec<Cell>,
    rng: GameRng,
    score: u64,
    ticks: u64,
}

impl BoardEngine {
    /// Create an empty board using the default five-color palette.
    pub fn new(rows: usize, cols: usize, rng: GameRng) -> Result<Self, EngineError> {
        Self::with_config(EngineConfig::new(rows, cols), rng)
    }

    /// Create an empty board from a configuration.
    pub fn with_config(config: EngineConfig, rng: GameRng) -> Result<Self, EngineError> {
        config.validate()?;
        debug!(
            "new clear-cell board {}x{} (palette {}, seed {})",
            config.rows,
            config.cols,
            config.palette.len(),
            rng.seed()
        );

        Ok(Self {
            grid: Grid::new(config.rows, config.cols),
            palette: config.palette,
            rng,
            score: 0,
            ticks: 0,
        })
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Get a cell, or `None` when out of bounds.
    #[must_use]
    pub fn board_cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid.get(row, col)
    }

    /// Read-only view of the whole board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Points scored so far (one per cleared cell).
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Number of ticks that actually moved the board.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Colors new rows are drawn from.
    #[must_use]
    pub fn palette(&self) -> &[Cell] {
        &self.palette
    }

    /// Overwrite a single cell. Used to set up boards.
    ///
    /// Does not touch the score and does not collapse rows.
    pub fn set_board_cell(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), EngineError> {
        let (row, col) = self.checked_position(signed(row), signed(col))?;
        self.grid.set(row, col, cell);
        Ok(())
    }

    /// Map signed input coordinates onto the board, row first.
    fn checked_position(&self, row: isize, col: isize) -> Result<(usize, usize), EngineError> {
        let rows = self.rows();
        let cols = self.cols();

        let r = usize::try_from(row)
            .ok()
            .filter(|&r| r < rows)
            .ok_or(EngineError::InvalidRow { row, rows })?;
        let c = usize::try_from(col)
            .ok()
            .filter(|&c| c < cols)
            .ok_or(EngineError::InvalidColumn { col, cols })?;

        Ok((r, c))
    }

    /// Draw one palette color.
    fn random_color(&mut self) -> Cell {
        let index = self.rng.gen_range_usize(0..self.palette.len());
        self.palette[index]
    }

    /// Clear the target and every same-colored neighbor. Returns cells cleared.
    fn clear_around(&mut self, row: usize, col: usize, color: Cell) -> u32 {
        let mut cleared = 0;

        for (r, c) in self.grid.neighbors(row, col) {
            if self.grid.get(r, c) == Some(color) {
                self.grid.set(r, c, Cell::Empty);
                cleared += 1;
            }
        }

        self.grid.set(row, col, Cell::Empty);
        cleared + 1
    }

    /// Remove fully empty rows above the bottom row, scanning upward.
    ///
    /// An empty row with nothing but empty rows beneath it is left in place;
    /// collapsing it would not change the board.
    fn collapse_empty_rows(&mut self) -> u32 {
        let bottom = self.rows() - 1;
        let mut occupied_below = !self.grid.row_is_empty(bottom);
        let mut collapsed = 0;

        for row in (0..bottom).rev() {
            if !self.grid.row_is_empty(row) {
                occupied_below = true;
            } else if occupied_below {
                self.grid.collapse_row(row);
                collapsed += 1;
            }
        }

        collapsed
    }
}

impl PuzzleRules for BoardEngine {
    fn is_game_over(&self) -> bool {
        !self.grid.row_is_empty(self.rows() - 1)
    }

    fn advance(&mut self) {
        if self.is_game_over() {
            return;
        }

        // Bottom-up so each row is copied before it is overwritten.
        for row in (0..self.rows() - 1).rev() {
            if !self.grid.row_is_empty(row) {
                self.grid.copy_row(row, row + 1);
            }
        }

        for col in 0..self.cols() {
            let color = self.random_color();
            self.grid.set(0, col, color);
        }

        self.ticks += 1;
        trace!("tick {}: new top row {:?}", self.ticks, self.grid.row(0));

        if self.is_game_over() {
            debug!("game over after {} ticks, score {}", self.ticks, self.score);
        }
    }

    fn process_click(&mut self, row: isize, col: isize) -> Result<ClickOutcome, EngineError> {
        let (row, col) = self.checked_position(row, col)?;

        let color = self.grid.get(row, col).unwrap_or_default();
        if color.is_empty() {
            return Ok(ClickOutcome::default());
        }

        let cleared = self.clear_around(row, col, color);
        self.score += u64::from(cleared);
        let collapsed_rows = self.collapse_empty_rows();

        trace!(
            "click ({row}, {col}) {color:?}: cleared {cleared}, collapsed {collapsed_rows}, score {}",
            self.score
        );

        Ok(ClickOutcome {
            cleared,
            collapsed_rows,
        })
    }
}

impl std::fmt::Display for BoardEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows() {
            for cell in self.grid.row(row) {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn signed(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}
