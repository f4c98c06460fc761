//! Outcome evaluation: rows, then columns, then diagonals, then tie.

mod draw;
mod win;

pub use draw::is_tie;
pub use win::winning_line;

use crate::board::{Board, Side, WIDTH};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Derived status of a game. Recomputed after each move, never stored
/// on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// A side completed a line.
    Won {
        /// The winning side.
        winner: Side,
        /// Cell indices of the first matching line in scan order.
        line: [usize; WIDTH],
    },
    /// Board full with no winner.
    Tie,
}

impl Outcome {
    /// True iff the game is over (won or tied).
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner, if the game was won.
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::Won { winner, .. } => Some(*winner),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Won { winner, .. } => write!(f, "{winner:?} wins"),
            Outcome::Tie => write!(f, "tie"),
        }
    }
}

/// Evaluates the board, scanning rows before columns before diagonals.
///
/// The first fully matching line in scan order is reported; a legal
/// game stops on the first win, so at most one line can matter.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((winner, line)) = win::winning_line(board) {
        return Outcome::Won { winner, line };
    }
    if board.is_full() {
        return Outcome::Tie;
    }
    Outcome::InProgress
}
