//! Game flow tests through the public facade

use proptest::prelude::*;

use tetris_panel::core::{GameConfig, GameEvent, OverlayController, Playfield, Tetris};
use tetris_panel::types::{GameCommand, PieceKind};

fn started(seed: u32) -> Tetris {
    let mut game = Tetris::new(GameConfig::new(20, 10, 1.0, seed).unwrap());
    game.start();
    game
}

fn spawned_kinds(seed: u32, count: usize) -> Vec<PieceKind> {
    let mut game = started(seed);
    let mut kinds = Vec::with_capacity(count);
    for _ in 0..count {
        kinds.push(game.current_shape().unwrap().kind);
        game.apply(GameCommand::HardDrop);
        if game.game_over() {
            break;
        }
    }
    kinds
}

#[test]
fn test_same_seed_same_sequence() {
    assert_eq!(spawned_kinds(7, 12), spawned_kinds(7, 12));
}

#[test]
fn test_first_bag_has_every_kind_once() {
    let mut kinds = spawned_kinds(99, 7);
    kinds.sort_by_key(|k| *k as u8);
    kinds.dedup();
    assert_eq!(kinds.len(), 7);
}

#[test]
fn test_stacking_until_game_over_then_restart() {
    let mut game = started(3);
    let mut overlays = OverlayController::new();

    let mut drops = 0;
    while !game.game_over() {
        game.apply(GameCommand::HardDrop);
        drops += 1;
        assert!(drops < 200, "board never filled");
    }

    let events = game.drain_events();
    let score = game.score();
    assert!(events.contains(&GameEvent::GameOver { score }));
    for event in &events {
        overlays.handle_event(event);
    }
    assert!(overlays.is_game_over_visible());
    assert_eq!(overlays.active().unwrap().lines[1], format!("Score: {score}"));

    // Nothing but restart gets the game going again.
    for command in [
        GameCommand::MoveLeft,
        GameCommand::HardDrop,
        GameCommand::TogglePause,
    ] {
        assert!(!game.apply(command));
    }
    assert!(!game.tick(5_000));
    assert!(game.game_over());

    game.apply(GameCommand::Restart);
    for event in game.drain_events() {
        overlays.handle_event(&event);
    }
    assert!(!game.game_over());
    assert!(!overlays.is_game_over_visible());
    assert_eq!(game.board().occupied_count(), 0);
    assert!(game.current_shape().is_some());
}

#[test]
fn test_gravity_eventually_locks_a_shape() {
    let mut game = started(1);
    let mut elapsed = 0;
    while game.board().occupied_count() == 0 {
        game.tick(16);
        elapsed += 16;
        assert!(elapsed < 60_000, "shape never locked");
    }
    assert_eq!(game.board().occupied_count(), 4);
    assert!(game
        .drain_events()
        .contains(&GameEvent::Locked { lines_cleared: 0 }));
}

fn command() -> impl Strategy<Value = GameCommand> {
    prop::sample::select(vec![
        GameCommand::MoveLeft,
        GameCommand::MoveRight,
        GameCommand::SoftDrop,
        GameCommand::HardDrop,
        GameCommand::RotateCw,
        GameCommand::RotateCcw,
        GameCommand::TogglePause,
        GameCommand::ExitToMenu,
    ])
}

proptest! {
    #[test]
    fn score_never_decreases_without_restart(
        seed in any::<u32>(),
        steps in prop::collection::vec((command(), 0u32..200), 1..300),
    ) {
        let mut game = started(seed);
        let mut last_score = 0;
        let mut last_lines = 0;

        for (command, ms) in steps {
            game.apply(command);
            game.tick(ms);

            prop_assert!(game.score() >= last_score);
            prop_assert!(game.lines() >= last_lines);
            last_score = game.score();
            last_lines = game.lines();

            let cells = usize::from(game.rows()) * usize::from(game.columns());
            prop_assert!(game.board().occupied_count() <= cells);
            if let Some(shape) = game.current_shape() {
                if !game.game_over() {
                    prop_assert!(shape.fits(game.board()));
                }
            }
        }
    }
}
