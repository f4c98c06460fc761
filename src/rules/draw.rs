//! Tie detection.

use super::win::winning_line;
use crate::board::Board;
use tracing::instrument;

/// True iff the board is full and no line of equal marks exists.
#[instrument(skip(board))]
pub fn is_tie(board: &Board) -> bool {
    board.is_full() && winning_line(board).is_none()
}
