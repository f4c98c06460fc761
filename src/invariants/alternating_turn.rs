//! Alternating turns: player, computer, player, computer, ...

use super::Invariant;
use crate::board::Side;
use crate::controller::{TurnController, TurnState};

/// The accepted-move history alternates sides starting with the
/// player, and the turn state matches the history parity while the
/// game is undecided.
pub struct AlternatingTurn;

impl Invariant<TurnController> for AlternatingTurn {
    fn holds(game: &TurnController) -> bool {
        let history = game.history();
        if let Some(first) = history.first()
            && first.side != Side::Player
        {
            return false;
        }
        for pair in history.windows(2) {
            if pair[0].side == pair[1].side {
                return false;
            }
        }
        match game.turn() {
            TurnState::AwaitingPlayer => history.len() % 2 == 0,
            TurnState::AwaitingComputer => history.len() % 2 == 1,
            TurnState::Decided => true,
        }
    }

    fn description() -> &'static str {
        "moves alternate sides, player first, with turn state matching parity"
    }
}
