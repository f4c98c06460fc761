//! History consistency: accepted moves match the board exactly.

use super::Invariant;
use crate::board::{CELLS, Cell};
use crate::controller::TurnController;

/// The move history has one entry per occupied cell, no duplicate
/// indices, and each entry matches the mark on the board.
pub struct HistoryConsistent;

impl Invariant<TurnController> for HistoryConsistent {
    fn holds(game: &TurnController) -> bool {
        let history = game.history();
        if history.len() != game.board().filled() {
            return false;
        }
        let mut seen = [false; CELLS];
        for record in history {
            if record.index >= CELLS || seen[record.index] {
                return false;
            }
            seen[record.index] = true;
            if game.board().get(record.index) != Some(Cell::Occupied(record.side)) {
                return false;
            }
        }
        true
    }

    fn description() -> &'static str {
        "history matches the board cell for cell with no duplicates"
    }
}
