use crate::grid::{Grid, Position, BLOCK_SIZE, EMPTY, GRID_SIZE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One of the 27 units checked for duplicates: a row, a column, or a 3x3
/// block identified by its top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineRef {
    Row(usize),
    Col(usize),
    Block { row: usize, col: usize },
}

impl LineRef {
    /// The 9 positions belonging to this line.
    pub fn cells(self) -> [Position; 9] {
        match self {
            LineRef::Row(row) => std::array::from_fn(|col| Position::new(row, col)),
            LineRef::Col(col) => std::array::from_fn(|row| Position::new(row, col)),
            LineRef::Block { row, col } => std::array::from_fn(|i| {
                Position::new(row + i / BLOCK_SIZE, col + i % BLOCK_SIZE)
            }),
        }
    }
}

/// All 27 lines: 9 rows, 9 columns, 9 blocks.
fn all_lines() -> impl Iterator<Item = LineRef> {
    let rows = (0..GRID_SIZE).map(LineRef::Row);
    let cols = (0..GRID_SIZE).map(LineRef::Col);
    let blocks = (0..GRID_SIZE).map(|i| LineRef::Block {
        row: i / BLOCK_SIZE * BLOCK_SIZE,
        col: i % BLOCK_SIZE * BLOCK_SIZE,
    });
    rows.chain(cols).chain(blocks)
}

/// Outcome of a full-board validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True iff all 27 lines are free of duplicate non-blank values.
    pub is_valid: bool,
    /// Every line that contained a duplicate.
    pub invalid_lines: Vec<LineRef>,
}

impl ValidationReport {
    /// The set of (row, col) coordinates belonging to any invalid line.
    pub fn invalid_cells(&self) -> BTreeSet<(usize, usize)> {
        self.invalid_lines
            .iter()
            .flat_map(|line| line.cells())
            .map(|pos| (pos.row, pos.col))
            .collect()
    }
}

impl Grid {
    /// Check all rows, columns and blocks for duplicate non-blank values.
    ///
    /// Starts by resetting every cell's validity flag, so conflicts fixed
    /// since the last pass are un-marked. Each failing line marks all 9 of
    /// its cells invalid. The only side effect is that flag mutation;
    /// surfacing the result is the presentation layer's job.
    pub fn validate(&mut self) -> ValidationReport {
        self.reset_validity();

        let mut invalid_lines = Vec::new();
        for line in all_lines() {
            if !self.line_is_valid(line) {
                for pos in line.cells() {
                    self.cell_mut(pos).valid = false;
                }
                invalid_lines.push(line);
            }
        }

        ValidationReport {
            is_valid: invalid_lines.is_empty(),
            invalid_lines,
        }
    }

    /// A line passes iff its non-blank values are pairwise distinct.
    fn line_is_valid(&self, line: LineRef) -> bool {
        let mut seen: u16 = 0;
        for pos in line.cells() {
            let value = self.get(pos);
            if value == EMPTY {
                continue;
            }
            let bit = 1u16 << value;
            if seen & bit != 0 {
                return false;
            }
            seen |= bit;
        }
        true
    }
}
