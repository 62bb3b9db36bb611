use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Side length of the board.
pub const GRID_SIZE: usize = 9;
/// Side length of one 3x3 block.
pub const BLOCK_SIZE: usize = 3;
/// Cell value that denotes a blank.
pub const EMPTY: u8 = 0;

/// Errors raised at the edit boundary.
///
/// All of these are caller-contract violations: they are rejected
/// synchronously and never retried. The grid is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("coordinate ({row}, {col}) is outside the 9x9 board")]
    InvalidCoordinate { row: usize, col: usize },
    #[error("value {0} is outside 0..=9")]
    InvalidValue(u8),
    #[error("input {0:?} is not a single digit 1-9 or empty")]
    InvalidInput(String),
}

/// A (row, col) coordinate on the board, both in `0..9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// All 81 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| Self::new(row, col)))
    }

    /// Top-left corner of the 3x3 block containing this position.
    pub fn block_origin(self) -> Self {
        Self::new(
            self.row / BLOCK_SIZE * BLOCK_SIZE,
            self.col / BLOCK_SIZE * BLOCK_SIZE,
        )
    }

    fn in_bounds(self) -> bool {
        self.row < GRID_SIZE && self.col < GRID_SIZE
    }
}

/// A single board cell.
///
/// `valid` is presentation state, not puzzle truth: it records whether the
/// cell currently participates in a detected duplicate. It defaults to true
/// and is cleared only by [`Grid::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) value: u8,
    pub(crate) valid: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            value: EMPTY,
            valid: true,
        }
    }
}

impl Cell {
    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn is_blank(&self) -> bool {
        self.value == EMPTY
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// A fixed 9x9 board. Exactly 81 cells, never resized.
///
/// The presentation layer owns one `Grid` for the duration of a game and
/// replaces it wholesale on "new game".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// An empty board: every cell blank and marked valid.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::default(); GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Wrap a raw value matrix into a grid with all validity flags set.
    pub(crate) fn from_values(values: [[u8; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut grid = Self::new();
        for pos in Position::all() {
            grid.cells[pos.row][pos.col].value = values[pos.row][pos.col];
        }
        grid
    }

    /// The cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds; read access is expected to go
    /// through positions the caller already validated.
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.row][pos.col]
    }

    pub(crate) fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        &mut self.cells[pos.row][pos.col]
    }

    /// The value at `pos`, `EMPTY` for a blank.
    pub fn get(&self, pos: Position) -> u8 {
        self.cells[pos.row][pos.col].value
    }

    /// Set the value at `pos`. Fails fast instead of clamping: an
    /// out-of-range coordinate or value leaves the grid untouched.
    pub fn set(&mut self, pos: Position, value: u8) -> Result<(), GridError> {
        if !pos.in_bounds() {
            return Err(GridError::InvalidCoordinate {
                row: pos.row,
                col: pos.col,
            });
        }
        if value > 9 {
            return Err(GridError::InvalidValue(value));
        }
        self.cells[pos.row][pos.col].value = value;
        Ok(())
    }

    /// Set every cell's validity flag back to true, so a fresh validation
    /// pass only marks conflicts that are still present.
    pub fn reset_validity(&mut self) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                cell.valid = true;
            }
        }
    }

    /// Number of blank cells on the board.
    pub fn blank_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_blank())
            .count()
    }

    /// Apply a raw text edit to one cell.
    ///
    /// Accepts a single digit `1`-`9`, or the empty string to clear the
    /// cell; an accepted edit also resets that cell's validity flag. Any
    /// other input is rejected with [`GridError::InvalidInput`] and the
    /// caller reverts its displayed text to the stored value.
    pub fn apply_edit(&mut self, pos: Position, raw: &str) -> Result<(), GridError> {
        if !pos.in_bounds() {
            return Err(GridError::InvalidCoordinate {
                row: pos.row,
                col: pos.col,
            });
        }
        let value = if raw.is_empty() {
            EMPTY
        } else {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(c @ '1'..='9'), None) => c as u8 - b'0',
                _ => return Err(GridError::InvalidInput(raw.to_string())),
            }
        };
        let cell = &mut self.cells[pos.row][pos.col];
        cell.value = value;
        cell.valid = true;
        Ok(())
    }

    /// Parse a grid from an 81-character string, row-major, with `.` or `0`
    /// for blanks. Returns `None` on any other shape.
    pub fn from_string(s: &str) -> Option<Self> {
        let mut values = [[EMPTY; GRID_SIZE]; GRID_SIZE];
        let mut count = 0;
        for (i, ch) in s.chars().enumerate() {
            if i >= GRID_SIZE * GRID_SIZE {
                return None;
            }
            values[i / GRID_SIZE][i % GRID_SIZE] = match ch {
                '.' | '0' => EMPTY,
                '1'..='9' => ch as u8 - b'0',
                _ => return None,
            };
            count += 1;
        }
        if count != GRID_SIZE * GRID_SIZE {
            return None;
        }
        Some(Self::from_values(values))
    }

    /// Compact 81-character form of the board, `.` for blanks.
    pub fn to_string_compact(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(|cell| {
                if cell.is_blank() {
                    '.'
                } else {
                    (b'0' + cell.value) as char
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_blank_and_valid() {
        let grid = Grid::new();
        assert_eq!(grid.blank_count(), 81);
        for pos in Position::all() {
            assert!(grid.cell(pos).is_valid());
        }
    }

    #[test]
    fn set_rejects_out_of_range_coordinate() {
        let mut grid = Grid::new();
        assert_eq!(
            grid.set(Position::new(9, 0), 5),
            Err(GridError::InvalidCoordinate { row: 9, col: 0 })
        );
        assert_eq!(
            grid.set(Position::new(0, 42), 5),
            Err(GridError::InvalidCoordinate { row: 0, col: 42 })
        );
        // The board must not have grown or wrapped.
        assert_eq!(grid, Grid::new());
    }

    #[test]
    fn set_rejects_out_of_range_value() {
        let mut grid = Grid::new();
        assert_eq!(grid.set(Position::new(0, 0), 10), Err(GridError::InvalidValue(10)));
        assert!(grid.cell(Position::new(0, 0)).is_blank());
    }

    #[test]
    fn set_accepts_zero_as_clear() {
        let mut grid = Grid::new();
        grid.set(Position::new(4, 4), 7).unwrap();
        grid.set(Position::new(4, 4), 0).unwrap();
        assert!(grid.cell(Position::new(4, 4)).is_blank());
    }

    #[test]
    fn apply_edit_accepts_digits_and_empty() {
        let mut grid = Grid::new();
        let pos = Position::new(2, 3);

        grid.apply_edit(pos, "9").unwrap();
        assert_eq!(grid.get(pos), 9);

        grid.apply_edit(pos, "").unwrap();
        assert!(grid.cell(pos).is_blank());
    }

    #[test]
    fn apply_edit_rejects_everything_else() {
        let mut grid = Grid::new();
        let pos = Position::new(0, 0);
        grid.set(pos, 4).unwrap();

        for raw in ["0", "a", "12", " ", "x9", "99"] {
            assert_eq!(
                grid.apply_edit(pos, raw),
                Err(GridError::InvalidInput(raw.to_string())),
                "input {raw:?} should be rejected"
            );
            // Rejected edits leave the stored value alone.
            assert_eq!(grid.get(pos), 4);
        }
    }

    #[test]
    fn apply_edit_resets_the_cell_flag() {
        let mut grid = Grid::new();
        let pos = Position::new(1, 1);
        grid.cell_mut(pos).valid = false;
        grid.apply_edit(pos, "3").unwrap();
        assert!(grid.cell(pos).is_valid());
    }

    #[test]
    fn reset_validity_clears_every_flag() {
        let mut grid = Grid::new();
        for pos in Position::all() {
            grid.cell_mut(pos).valid = false;
        }
        grid.reset_validity();
        assert!(Position::all().all(|pos| grid.cell(pos).is_valid()));
    }

    #[test]
    fn from_string_rejects_bad_shapes() {
        assert!(Grid::from_string("123").is_none());
        assert!(Grid::from_string(&"x".repeat(81)).is_none());
        assert!(Grid::from_string(&".".repeat(82)).is_none());
    }

    #[test]
    fn from_string_places_values() {
        let mut s = ".".repeat(81);
        s.replace_range(0..1, "5");
        s.replace_range(80..81, "9");
        let grid = Grid::from_string(&s).unwrap();
        assert_eq!(grid.get(Position::new(0, 0)), 5);
        assert_eq!(grid.get(Position::new(8, 8)), 9);
        assert_eq!(grid.blank_count(), 79);
    }

    #[test]
    fn block_origin_maps_into_corners() {
        assert_eq!(Position::new(4, 7).block_origin(), Position::new(3, 6));
        assert_eq!(Position::new(0, 2).block_origin(), Position::new(0, 0));
        assert_eq!(Position::new(8, 8).block_origin(), Position::new(6, 6));
    }
}
