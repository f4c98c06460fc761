//! Tests for the turn controller state machine.

use noughts::{
    Cue, GameEvent, MoveError, Outcome, Side, Symbol, TurnController, TurnState, CELLS,
};
use tokio::sync::mpsc;

/// Plays the first-empty-cell strategy until the game is decided.
fn play_until_decided(game: &mut TurnController) -> Outcome {
    loop {
        let index = game
            .board()
            .empty_indices()
            .next()
            .expect("undecided game has an empty cell");
        let outcome = game.request_player_move(index).expect("valid player move");
        if outcome.is_decided() {
            return outcome;
        }
        let outcome = game.computer_move().expect("valid computer move");
        if outcome.is_decided() {
            return outcome;
        }
    }
}

#[test]
fn test_player_moves_first_then_computer() {
    let mut game = TurnController::with_seed(1);
    assert_eq!(game.turn(), TurnState::AwaitingPlayer);

    game.request_player_move(4).unwrap();
    assert_eq!(game.turn(), TurnState::AwaitingComputer);
    assert_eq!(game.board().filled(), 1);

    game.computer_move().unwrap();
    assert_eq!(game.turn(), TurnState::AwaitingPlayer);
    assert_eq!(game.board().filled(), 2);
}

#[test]
fn test_player_move_rejected_while_computer_pending() {
    let mut game = TurnController::with_seed(1);
    game.request_player_move(4).unwrap();

    let result = game.request_player_move(0);
    assert_eq!(result, Err(MoveError::ComputerPending));
    assert_eq!(game.board().filled(), 1);
}

#[test]
fn test_computer_move_rejected_on_player_turn() {
    let mut game = TurnController::with_seed(1);
    assert_eq!(
        game.computer_move(),
        Err(MoveError::OutOfTurn(Side::Computer))
    );
}

#[test]
fn test_occupied_and_out_of_bounds_rejected() {
    let mut game = TurnController::with_seed(1);
    game.request_player_move(4).unwrap();
    game.computer_move().unwrap();

    assert_eq!(game.request_player_move(4), Err(MoveError::Occupied(4)));
    assert_eq!(
        game.request_player_move(CELLS),
        Err(MoveError::OutOfBounds(CELLS))
    );
    assert_eq!(game.board().filled(), 2);
}

#[test]
fn test_every_game_decides_within_nine_placements() {
    for seed in 0..20 {
        let mut game = TurnController::with_seed(seed);
        let outcome = play_until_decided(&mut game);
        assert!(outcome.is_decided());
        assert!(game.board().filled() <= CELLS);
        assert_eq!(game.turn(), TurnState::Decided);

        // The score reflects exactly this one game.
        let score = game.score();
        match outcome.winner() {
            Some(Side::Player) => assert_eq!((score.player(), score.computer()), (1, 0)),
            Some(Side::Computer) => assert_eq!((score.player(), score.computer()), (0, 1)),
            None => assert_eq!((score.player(), score.computer()), (0, 0)),
        }
    }
}

#[test]
fn test_moves_rejected_after_decision() {
    let mut game = TurnController::with_seed(0);
    play_until_decided(&mut game);

    let empty = game.board().empty_indices().next();
    if let Some(index) = empty {
        assert_eq!(game.request_player_move(index), Err(MoveError::GameOver));
    }
    assert_eq!(game.computer_move(), Err(MoveError::GameOver));
}

#[test]
fn test_restart_clears_board_and_preserves_score() {
    let mut game = TurnController::with_seed(0);
    play_until_decided(&mut game);
    let score = game.score();

    game.restart();
    assert_eq!(game.turn(), TurnState::AwaitingPlayer);
    assert_eq!(game.board().filled(), 0);
    assert!(game.history().is_empty());
    assert_eq!(game.outcome(), Outcome::InProgress);
    assert_eq!(game.score(), score);

    // A fresh game is playable.
    game.request_player_move(4).unwrap();
    assert_eq!(game.board().filled(), 1);
}

#[test]
fn test_symbol_swap_only_between_games() {
    let mut game = TurnController::with_seed(0);
    assert_eq!(
        game.swap_symbols(Symbol::X, Symbol::X),
        Err(MoveError::IdenticalSymbols)
    );
    game.swap_symbols(Symbol::O, Symbol::X).unwrap();
    assert_eq!(game.symbols().for_side(Side::Player), Symbol::O);

    game.request_player_move(4).unwrap();
    assert_eq!(
        game.swap_symbols(Symbol::X, Symbol::O),
        Err(MoveError::SymbolsLocked)
    );

    game.restart();
    game.swap_symbols(Symbol::X, Symbol::O).unwrap();
    assert_eq!(game.symbols().for_side(Side::Player), Symbol::X);
}

#[test]
fn test_events_arrive_in_placement_order_and_end_with_decision() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut game = TurnController::with_seed(6).with_events(tx);
    let outcome = play_until_decided(&mut game);

    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }

    let filled: Vec<_> = events
        .iter()
        .filter(|event| matches!(event, GameEvent::CellFilled { .. }))
        .collect();
    assert_eq!(filled.len(), game.board().filled());

    // First event is the player's opening mark with the default symbol.
    assert_eq!(
        events.first(),
        Some(&GameEvent::CellFilled {
            index: 0,
            side: Side::Player,
            symbol: Symbol::X,
        })
    );

    // Last event announces the decision with the matching cue.
    let expected_cue = match outcome.winner() {
        Some(Side::Player) => Cue::Win,
        Some(Side::Computer) => Cue::Loss,
        None => Cue::Tie,
    };
    match events.last() {
        Some(GameEvent::GameDecided {
            outcome: decided,
            cue,
            score,
        }) => {
            assert_eq!(*decided, outcome);
            assert_eq!(*cue, expected_cue);
            assert_eq!(*score, game.score());
        }
        other => panic!("expected GameDecided, got {other:?}"),
    }
}

#[test]
fn test_restart_emits_board_cleared() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut game = TurnController::with_seed(6).with_events(tx);
    game.request_player_move(4).unwrap();
    game.restart();

    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    assert_eq!(events.last(), Some(&GameEvent::BoardCleared));
}
