//! Noughts - tic-tac-toe game core
//!
//! Board state, win detection, and turn sequencing for a two-player
//! game of human against a random-move opponent on a fixed 3x3 grid.
//!
//! # Architecture
//!
//! - **Board**: cell states and the single placement mutation path,
//!   enforcing alternating turns
//! - **Rules**: pure outcome evaluation scanning rows, columns, and
//!   diagonals for a winning line
//! - **Controller**: the turn state machine sequencing player and
//!   computer moves, tracking score across games
//! - **Session**: async command loop applying the computer's reply
//!   after a configurable delay
//! - **Events**: the boundary toward an external view layer, which
//!   renders marks and plays feedback cues but owns no game state
//!
//! # Example
//!
//! ```
//! use noughts::{TurnController, TurnState};
//!
//! let mut game = TurnController::with_seed(7);
//! game.request_player_move(4)?;
//! assert_eq!(game.turn(), TurnState::AwaitingComputer);
//! game.computer_move()?;
//! assert_eq!(game.turn(), TurnState::AwaitingPlayer);
//! # Ok::<(), noughts::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod ai;
mod board;
mod controller;
mod events;
mod invariants;
mod rules;
mod score;
mod session;
mod symbols;

// Crate-level exports - board
pub use board::{Board, CELLS, Cell, PlaceError, Side, WIDTH};

// Crate-level exports - rules
pub use rules::{Outcome, evaluate, is_tie, winning_line};

// Crate-level exports - turn controller
pub use controller::{MoveError, MoveRecord, TurnController, TurnState};

// Crate-level exports - opponent
pub use ai::pick_move;

// Crate-level exports - view boundary
pub use events::{Cue, GameEvent};
pub use score::Score;
pub use session::{Command, GameSession};
pub use symbols::{Symbol, Symbols};
