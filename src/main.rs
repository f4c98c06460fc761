//! Terminal stand-in for the view layer: reads cell numbers from
//! stdin, mirrors engine events into a rendered grid, and prints the
//! feedback cue and score when a game is decided.

use anyhow::Result;
use clap::Parser;
use noughts::{
    CELLS, Command, Cue, GameEvent, GameSession, Outcome, Symbol, TurnController, WIDTH,
};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing_subscriber::EnvFilter;

/// Play tic-tac-toe against a random-move opponent.
#[derive(Debug, Parser)]
#[command(name = "noughts", version, about)]
struct Cli {
    /// Delay before the computer replies, in milliseconds.
    #[arg(long, default_value_t = 300)]
    delay_ms: u64,

    /// Seed the opponent for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let controller = match cli.seed {
        Some(seed) => TurnController::with_seed(seed),
        None => TurnController::new(),
    }
    .with_events(event_tx);

    let (session, commands) = GameSession::new(controller, Duration::from_millis(cli.delay_ms));
    let session_task = tokio::spawn(session.run());
    let view_task = tokio::spawn(render_events(event_rx));

    println!("Cells are numbered 1-9. 'r' restarts, 's' swaps symbols, 'q' quits.");
    let mut swapped = false;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "" => {}
            "q" | "quit" => break,
            "r" | "restart" => commands.send(Command::Restart)?,
            "s" | "swap" => {
                swapped = !swapped;
                let (player, computer) = if swapped {
                    (Symbol::O, Symbol::X)
                } else {
                    (Symbol::X, Symbol::O)
                };
                commands.send(Command::SwapSymbols { player, computer })?;
            }
            input => match input.parse::<usize>() {
                Ok(cell @ 1..=CELLS) => commands.send(Command::PlayerMove(cell - 1))?,
                _ => println!("enter a cell number 1-9, 'r', 's', or 'q'"),
            },
        }
    }

    commands.send(Command::Quit)?;
    let controller = session_task.await?;
    view_task.abort();
    let score = controller.score();
    println!(
        "Final score - you {} : {} computer",
        score.player(),
        score.computer()
    );
    Ok(())
}

/// Applies engine events to a local mirror of the board, the terminal
/// analog of the DOM adapter the engine expects.
struct CliView {
    cells: [Option<Symbol>; CELLS],
    dimmed: [bool; CELLS],
}

impl CliView {
    fn new() -> Self {
        Self {
            cells: [None; CELLS],
            dimmed: [false; CELLS],
        }
    }

    fn apply(&mut self, event: GameEvent) {
        match event {
            GameEvent::CellFilled { index, symbol, .. } => {
                self.cells[index] = Some(symbol);
                self.print();
            }
            GameEvent::GameDecided {
                outcome,
                cue,
                score,
            } => {
                if let Outcome::Won { line, .. } = outcome {
                    for index in 0..CELLS {
                        self.dimmed[index] = !line.contains(&index);
                    }
                } else {
                    self.dimmed = [true; CELLS];
                }
                self.print();
                match cue {
                    Cue::Win => println!("You win!"),
                    Cue::Loss => println!("You lose."),
                    Cue::Tie => println!("Tie game."),
                }
                println!(
                    "Score - you {} : {} computer ('r' for a new game)",
                    score.player(),
                    score.computer()
                );
            }
            GameEvent::BoardCleared => {
                *self = Self::new();
                self.print();
            }
        }
    }

    fn print(&self) {
        let mut out = String::new();
        for row in 0..WIDTH {
            for col in 0..WIDTH {
                let index = row * WIDTH + col;
                let mark = match self.cells[index] {
                    // Dimmed marks render lowercase, the terminal
                    // analog of reduced opacity.
                    Some(symbol) if self.dimmed[index] => symbol.as_char().to_ascii_lowercase(),
                    Some(symbol) => symbol.as_char(),
                    None => char::from_digit((index + 1) as u32, 10).unwrap_or('?'),
                };
                out.push(mark);
                if col < WIDTH - 1 {
                    out.push('|');
                }
            }
            if row < WIDTH - 1 {
                out.push_str("\n-+-+-");
            }
            out.push('\n');
        }
        println!("{out}");
    }
}

async fn render_events(mut events: UnboundedReceiver<GameEvent>) {
    let mut view = CliView::new();
    while let Some(event) = events.recv().await {
        view.apply(event);
    }
}
