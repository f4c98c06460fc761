//! Board state and the single placement mutation path.

use crate::rules;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Board width. Storage is fixed at 3x3; the scan logic in [`crate::rules`]
/// is written generally over this constant.
pub const WIDTH: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = WIDTH * WIDTH;

/// A side placing marks: the human player or the computer opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The human player (moves first).
    Player,
    /// The computer opponent.
    Computer,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Computer,
            Side::Computer => Side::Player,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a side's mark.
    Occupied(Side),
}

/// Error rejecting a placement. The board is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// The index is outside the board.
    #[display("cell {_0} is out of bounds (must be 0-8)")]
    OutOfBounds(usize),
    /// The target cell is already occupied.
    #[display("cell {_0} is already occupied")]
    Occupied(usize),
    /// The game outcome is already decided.
    #[display("the game is already decided")]
    Decided,
    /// The same side attempted two consecutive placements.
    #[display("{_0:?} placed the previous mark")]
    OutOfTurn(Side),
}

impl std::error::Error for PlaceError {}

/// 3x3 board, cells in row-major order.
///
/// Once a cell transitions away from [`Cell::Empty`] it never reverts
/// except through [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELLS],
    filled: usize,
    latest: Option<Side>,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELLS],
            filled: 0,
            latest: None,
        }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at the given index is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn filled(&self) -> usize {
        self.filled
    }

    /// The side that placed the most recent mark, if any.
    pub fn latest(&self) -> Option<Side> {
        self.latest
    }

    /// True iff every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.filled == CELLS
    }

    /// Iterates over the indices of currently empty cells.
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
    }

    /// Places a mark for `side` at `index`.
    ///
    /// This is the only mutation path besides [`Board::reset`]. On any
    /// rejection the board is left unchanged.
    ///
    /// # Errors
    ///
    /// - [`PlaceError::OutOfBounds`] if `index` is not on the board.
    /// - [`PlaceError::Occupied`] if the target cell is non-empty.
    /// - [`PlaceError::Decided`] if the outcome is already decided.
    /// - [`PlaceError::OutOfTurn`] if `side` also placed the previous mark.
    #[instrument(skip(self))]
    pub fn place(&mut self, index: usize, side: Side) -> Result<(), PlaceError> {
        if index >= CELLS {
            return Err(PlaceError::OutOfBounds(index));
        }
        if !self.is_empty(index) {
            return Err(PlaceError::Occupied(index));
        }
        if rules::evaluate(self).is_decided() {
            return Err(PlaceError::Decided);
        }
        if self.latest == Some(side) {
            return Err(PlaceError::OutOfTurn(side));
        }
        self.cells[index] = Cell::Occupied(side);
        self.filled += 1;
        self.latest = Some(side);
        Ok(())
    }

    /// Resets every cell to empty, clearing the fill count and latest side.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELLS];
        self.filled = 0;
        self.latest = None;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
