//! Events the core emits toward the view layer.

use crate::board::Side;
use crate::rules::Outcome;
use crate::score::Score;
use crate::symbols::Symbol;
use serde::{Deserialize, Serialize};

/// Feedback cue the view maps to one of three sounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cue {
    /// The player won.
    Win,
    /// The board filled with no winner.
    Tie,
    /// The computer won.
    Loss,
}

impl Cue {
    /// The cue for a decided outcome, `None` while in progress.
    pub fn for_outcome(outcome: &Outcome) -> Option<Cue> {
        match outcome {
            Outcome::InProgress => None,
            Outcome::Won { winner, .. } => match winner {
                Side::Player => Some(Cue::Win),
                Side::Computer => Some(Cue::Loss),
            },
            Outcome::Tie => Some(Cue::Tie),
        }
    }
}

/// Outbound notification from the core to the view layer.
///
/// The core never renders; the view applies these in order. Events are
/// serde-serializable so a remote or recorded view sees a plain tagged
/// JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameEvent {
    /// A cell was filled; render `symbol` at `index`.
    CellFilled {
        /// Linear cell index, `row * 3 + col`.
        index: usize,
        /// The side that placed the mark.
        side: Side,
        /// The literal mark to render.
        symbol: Symbol,
    },
    /// The game was decided. The winning line inside `outcome` lets the
    /// view dim non-winning cells; `cue` selects the feedback sound.
    GameDecided {
        /// The decided outcome.
        outcome: Outcome,
        /// Feedback cue for the outcome.
        cue: Cue,
        /// Score after any win was recorded.
        score: Score,
    },
    /// The board was reset; clear all rendered marks.
    BoardCleared,
}
