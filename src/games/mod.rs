//! Puzzle variants built on the core grid.

pub mod clear_cell;
