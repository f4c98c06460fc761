//! Mark balance: placement counts per side stay consistent.

use super::Invariant;
use crate::board::{Cell, Side};
use crate::controller::TurnController;

/// The player moves first and turns strictly alternate, so the count
/// of player cells minus computer cells is always 0 or 1, and the
/// last-placed side matches that difference.
pub struct MarkBalance;

impl Invariant<TurnController> for MarkBalance {
    fn holds(game: &TurnController) -> bool {
        let mut player = 0usize;
        let mut computer = 0usize;
        for cell in game.board().cells() {
            match cell {
                Cell::Occupied(Side::Player) => player += 1,
                Cell::Occupied(Side::Computer) => computer += 1,
                Cell::Empty => {}
            }
        }
        match game.board().latest() {
            None => player == 0 && computer == 0,
            Some(Side::Player) => player == computer + 1,
            Some(Side::Computer) => player == computer,
        }
    }

    fn description() -> &'static str {
        "player cells minus computer cells is 0 or 1, matching the last mover"
    }
}
