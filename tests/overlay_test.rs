//! Overlay controller properties

use proptest::prelude::*;

use tetris_panel::core::{GameConfig, GameEvent, OverlayController, OverlayKind, Tetris};
use tetris_panel::types::GameCommand;

fn non_restart_event() -> impl Strategy<Value = GameEvent> {
    prop_oneof![
        Just(GameEvent::Paused),
        Just(GameEvent::Resumed),
        (0u32..5).prop_map(|lines_cleared| GameEvent::Locked { lines_cleared }),
        any::<u32>().prop_map(|score| GameEvent::GameOver { score }),
    ]
}

fn pump(game: &mut Tetris, overlays: &mut OverlayController) {
    for event in game.drain_events() {
        overlays.handle_event(&event);
    }
}

#[test]
fn test_pause_key_twice_restores_visibility() {
    let mut game = Tetris::new(GameConfig::default());
    game.start();
    let mut overlays = OverlayController::new();
    let before = overlays.active();

    game.apply(GameCommand::TogglePause);
    pump(&mut game, &mut overlays);
    assert_eq!(overlays.active().map(|o| o.kind), Some(OverlayKind::Paused));

    game.apply(GameCommand::TogglePause);
    pump(&mut game, &mut overlays);
    assert_eq!(overlays.active(), before);
}

#[test]
fn test_game_over_beats_paused() {
    let mut overlays = OverlayController::new();
    overlays.set_paused(true);
    overlays.show_game_over(120);

    let overlay = overlays.active().unwrap();
    assert_eq!(overlay.kind, OverlayKind::GameOver);
    assert_eq!(
        overlay.lines,
        vec!["GAME OVER", "Score: 120", "Space: Restart", "esc: Main Menu"]
    );
    assert!(overlays.is_paused_visible());
}

#[test]
fn test_restart_hides_paused_too() {
    let mut game = Tetris::new(GameConfig::default());
    game.start();
    let mut overlays = OverlayController::new();

    game.apply(GameCommand::TogglePause);
    game.apply(GameCommand::Restart);
    pump(&mut game, &mut overlays);

    assert!(!game.paused());
    assert_eq!(overlays.active(), None);
}

proptest! {
    #[test]
    fn toggling_pause_twice_is_identity(
        prefix in prop::collection::vec(non_restart_event(), 0..20),
    ) {
        let mut overlays = OverlayController::new();
        for event in &prefix {
            overlays.handle_event(event);
        }
        let before = overlays.active();

        let paused = overlays.is_paused_visible();
        overlays.set_paused(!paused);
        overlays.set_paused(paused);

        prop_assert_eq!(overlays.active(), before);
    }

    #[test]
    fn game_over_is_removed_only_by_restart(
        score in any::<u32>(),
        events in prop::collection::vec(non_restart_event(), 0..40),
    ) {
        let mut overlays = OverlayController::new();
        overlays.handle_event(&GameEvent::GameOver { score });

        for event in &events {
            overlays.handle_event(event);
            prop_assert!(overlays.is_game_over_visible());
            prop_assert_eq!(overlays.active().map(|o| o.kind), Some(OverlayKind::GameOver));
        }

        overlays.handle_event(&GameEvent::Restarted);
        prop_assert!(!overlays.is_game_over_visible());
        prop_assert_eq!(overlays.active(), None);
    }
}
