//! Async driver wiring view commands to the turn controller.

use crate::controller::{TurnController, TurnState};
use crate::symbols::Symbol;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::time;
use tracing::{debug, info, instrument, warn};

/// Inbound command from the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// A pointer/tap event on the cell at the given index.
    PlayerMove(usize),
    /// Start a new game; the score carries over.
    Restart,
    /// Reassign which mark each side plays as (between games only).
    SwapSymbols {
        /// Mark for the human player.
        player: Symbol,
        /// Mark for the computer.
        computer: Symbol,
    },
    /// End the session.
    Quit,
}

/// Drives a [`TurnController`] from a command stream.
///
/// Commands run to completion one at a time, so no player move can
/// interleave with a pending computer move. After an accepted player
/// move the driver sleeps the configured delay (possibly zero) and
/// applies the computer's reply; the delay never blocks the thread.
/// Rejected commands are logged and dropped, matching the view-layer
/// contract that invalid input does nothing.
#[derive(Debug)]
pub struct GameSession {
    controller: TurnController,
    delay: Duration,
    commands: UnboundedReceiver<Command>,
}

impl GameSession {
    /// Creates a session around a controller, returning the sender the
    /// view uses to submit commands.
    pub fn new(controller: TurnController, delay: Duration) -> (Self, UnboundedSender<Command>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                controller,
                delay,
                commands: rx,
            },
            tx,
        )
    }

    /// Runs until [`Command::Quit`] or the command stream closes,
    /// returning the controller with its final score.
    #[instrument(skip(self))]
    pub async fn run(mut self) -> TurnController {
        info!(delay_ms = self.delay.as_millis() as u64, "session started");
        while let Some(command) = self.commands.recv().await {
            match command {
                Command::PlayerMove(index) => self.player_move(index).await,
                Command::Restart => self.controller.restart(),
                Command::SwapSymbols { player, computer } => {
                    if let Err(err) = self.controller.swap_symbols(player, computer) {
                        warn!(%err, "symbol swap rejected");
                    }
                }
                Command::Quit => break,
            }
        }
        info!(score = ?self.controller.score(), "session ended");
        self.controller
    }

    async fn player_move(&mut self, index: usize) {
        if let Err(err) = self.controller.request_player_move(index) {
            debug!(index, %err, "player move rejected");
            return;
        }
        if self.controller.turn() != TurnState::AwaitingComputer {
            return;
        }
        if !self.delay.is_zero() {
            time::sleep(self.delay).await;
        }
        if let Err(err) = self.controller.computer_move() {
            warn!(%err, "computer move rejected");
        }
    }
}
