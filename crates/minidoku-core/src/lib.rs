//! Core engine for a small Sudoku game.
//!
//! The crate exposes three pieces to a presentation layer:
//!
//! - [`Grid`]: a fixed 9x9 board of cells, each holding a value in `0..=9`
//!   (0 = blank) and a per-cell validity flag for conflict display.
//! - [`Generator`]: produces a starting puzzle by filling each 3x3 block
//!   with its own shuffled permutation of 1-9, then blanking 30-50 cells.
//! - [`Grid::validate`]: scans all 9 rows, 9 columns and 9 blocks for
//!   duplicate non-blank values and marks the offending cells.
//!
//! Everything is synchronous and single-threaded; the only non-determinism
//! is the generator's random source, which is seedable for tests.

mod generator;
mod grid;
mod validate;

pub use generator::Generator;
pub use grid::{Cell, Grid, GridError, Position, BLOCK_SIZE, EMPTY, GRID_SIZE};
pub use validate::{LineRef, ValidationReport};
