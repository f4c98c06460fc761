//! Turn sequencing between the human player and the computer opponent.

use crate::ai;
use crate::board::{Board, PlaceError, Side};
use crate::events::{Cue, GameEvent};
use crate::rules::{self, Outcome};
use crate::score::Score;
use crate::symbols::{Symbol, Symbols};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, instrument, warn};

/// Whose move the controller is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnState {
    /// Waiting on a player move request from the view.
    AwaitingPlayer,
    /// A computer move is pending; player requests are rejected.
    AwaitingComputer,
    /// The outcome is decided; terminal until [`TurnController::restart`].
    Decided,
}

/// A placement the controller accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Cell index of the placement.
    pub index: usize,
    /// The side that placed.
    pub side: Side,
}

/// Error rejecting a move request or configuration change. State is
/// left unchanged; the view layer is expected to ignore these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is outside the board.
    #[display("cell {_0} is out of bounds (must be 0-8)")]
    OutOfBounds(usize),
    /// The target cell is already occupied.
    #[display("cell {_0} is already occupied")]
    Occupied(usize),
    /// The game outcome is already decided.
    #[display("the game is already decided")]
    GameOver,
    /// The side moved out of turn order.
    #[display("it is not {_0:?}'s turn")]
    OutOfTurn(Side),
    /// A computer move is still pending.
    #[display("waiting on the computer's move")]
    ComputerPending,
    /// Symbols can only change between games.
    #[display("symbols can only change while the board is empty")]
    SymbolsLocked,
    /// Both sides were assigned the same mark.
    #[display("both sides cannot play the same symbol")]
    IdenticalSymbols,
}

impl std::error::Error for MoveError {}

impl From<PlaceError> for MoveError {
    fn from(err: PlaceError) -> Self {
        match err {
            PlaceError::OutOfBounds(index) => MoveError::OutOfBounds(index),
            PlaceError::Occupied(index) => MoveError::Occupied(index),
            PlaceError::Decided => MoveError::GameOver,
            PlaceError::OutOfTurn(side) => MoveError::OutOfTurn(side),
        }
    }
}

/// Sequences human and computer moves over a [`Board`].
///
/// The controller owns all game state and is the only mutation path:
/// single-threaded, every operation runs to completion. Move selection
/// for the opponent is synchronous; the session driver owns any delay
/// before [`TurnController::computer_move`] is applied.
#[derive(Debug)]
pub struct TurnController {
    board: Board,
    turn: TurnState,
    score: Score,
    symbols: Symbols,
    history: Vec<MoveRecord>,
    rng: SmallRng,
    events: Option<UnboundedSender<GameEvent>>,
}

impl TurnController {
    /// Creates a controller with an entropy-seeded opponent.
    pub fn new() -> Self {
        Self::from_rng(SmallRng::from_entropy())
    }

    /// Creates a controller with a deterministic opponent.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    fn from_rng(rng: SmallRng) -> Self {
        Self {
            board: Board::new(),
            turn: TurnState::AwaitingPlayer,
            score: Score::default(),
            symbols: Symbols::default(),
            history: Vec::new(),
            rng,
            events: None,
        }
    }

    /// Attaches an event sink for the view layer.
    pub fn with_events(mut self, events: UnboundedSender<GameEvent>) -> Self {
        self.events = Some(events);
        self
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose move the controller is waiting on.
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// Session score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Current mark assignment.
    pub fn symbols(&self) -> Symbols {
        self.symbols
    }

    /// Accepted placements, in order.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// The derived outcome of the current board.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(&self.board)
    }

    /// Handles a player move request from the view.
    ///
    /// # Errors
    ///
    /// Rejected without mutation when a computer move is pending, the
    /// game is decided, or the board refuses the placement.
    #[instrument(skip(self))]
    pub fn request_player_move(&mut self, index: usize) -> Result<Outcome, MoveError> {
        match self.turn {
            TurnState::AwaitingPlayer => {}
            TurnState::AwaitingComputer => return Err(MoveError::ComputerPending),
            TurnState::Decided => return Err(MoveError::GameOver),
        }
        self.apply(index, Side::Player)
    }

    /// Applies the pending computer move at a uniformly random empty cell.
    ///
    /// # Errors
    ///
    /// Rejected unless the controller is in [`TurnState::AwaitingComputer`].
    #[instrument(skip(self))]
    pub fn computer_move(&mut self) -> Result<Outcome, MoveError> {
        match self.turn {
            TurnState::AwaitingComputer => {}
            TurnState::AwaitingPlayer => return Err(MoveError::OutOfTurn(Side::Computer)),
            TurnState::Decided => return Err(MoveError::GameOver),
        }
        let Some(index) = ai::pick_move(&self.board, &mut self.rng) else {
            // Unreachable in practice: a full board decides the game
            // before a computer move is ever scheduled.
            warn!("no empty cell for the computer; ignoring");
            return Ok(self.outcome());
        };
        self.apply(index, Side::Computer)
    }

    /// Resets the board for a new game, leaving the score untouched.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board.reset();
        self.history.clear();
        self.turn = TurnState::AwaitingPlayer;
        self.emit(GameEvent::BoardCleared);
        info!(score = ?self.score, "board reset for a new game");
    }

    /// Reassigns which literal mark each side plays as.
    ///
    /// # Errors
    ///
    /// Rejected mid-game ([`MoveError::SymbolsLocked`]) or when both
    /// sides share a mark ([`MoveError::IdenticalSymbols`]).
    #[instrument(skip(self))]
    pub fn swap_symbols(&mut self, player: Symbol, computer: Symbol) -> Result<(), MoveError> {
        if self.board.filled() != 0 {
            return Err(MoveError::SymbolsLocked);
        }
        if player == computer {
            return Err(MoveError::IdenticalSymbols);
        }
        info!(?player, ?computer, "symbols reassigned");
        self.symbols = Symbols { player, computer };
        Ok(())
    }

    fn apply(&mut self, index: usize, side: Side) -> Result<Outcome, MoveError> {
        self.board.place(index, side)?;
        self.history.push(MoveRecord { index, side });
        self.emit(GameEvent::CellFilled {
            index,
            side,
            symbol: self.symbols.for_side(side),
        });

        let outcome = rules::evaluate(&self.board);
        match outcome {
            Outcome::InProgress => {
                self.turn = match side {
                    Side::Player => TurnState::AwaitingComputer,
                    Side::Computer => TurnState::AwaitingPlayer,
                };
                debug!(index, ?side, turn = ?self.turn, "move accepted");
            }
            _ => {
                if let Some(winner) = outcome.winner() {
                    self.score.record(winner);
                }
                self.turn = TurnState::Decided;
                info!(%outcome, score = ?self.score, "game decided");
                if let Some(cue) = Cue::for_outcome(&outcome) {
                    self.emit(GameEvent::GameDecided {
                        outcome,
                        cue,
                        score: self.score,
                    });
                }
            }
        }

        self.assert_invariants();
        Ok(outcome)
    }

    fn emit(&self, event: GameEvent) {
        if let Some(events) = &self.events
            && events.send(event).is_err()
        {
            debug!("event listener dropped");
        }
    }

    fn assert_invariants(&self) {
        #[cfg(debug_assertions)]
        {
            use crate::invariants::{ControllerInvariants, InvariantSet};
            if let Err(violations) = ControllerInvariants::check(self) {
                panic!("game invariants violated: {violations:?}");
            }
        }
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}
