//! Literal marks rendered for each side.

use crate::board::Side;
use serde::{Deserialize, Serialize};

/// The literal mark a side plays as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// The cross mark.
    X,
    /// The circle mark.
    O,
}

impl Symbol {
    /// The mark as a single character.
    pub fn as_char(self) -> char {
        match self {
            Symbol::X => 'X',
            Symbol::O => 'O',
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Which mark each side plays as. Defaults to X for the player and O
/// for the computer.
///
/// Reassignment is owned by the turn controller, which only permits it
/// between games: cells record sides rather than marks, but the view
/// contract renders marks, so swapping mid-game would relabel marks
/// already on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbols {
    /// Mark the human player places.
    pub player: Symbol,
    /// Mark the computer places.
    pub computer: Symbol,
}

impl Symbols {
    /// The mark the given side plays as.
    pub fn for_side(&self, side: Side) -> Symbol {
        match side {
            Side::Player => self.player,
            Side::Computer => self.computer,
        }
    }
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            player: Symbol::X,
            computer: Symbol::O,
        }
    }
}
