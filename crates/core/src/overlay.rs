//! Overlay controller - visibility of the paused and game-over messages.
//!
//! Two independent flags drive one overlay each. Pausing shows the paused
//! overlay and resuming hides it. Game over shows the game-over overlay with
//! the final score, and only an explicit restart hides it again.

use crate::game::GameEvent;
use crate::types::Rgba;

/// Which overlay is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Paused,
    GameOver,
}

/// A text overlay ready to be drawn above the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    pub kind: OverlayKind,
    pub lines: Vec<String>,
    pub background: Rgba,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayController {
    paused: bool,
    game_over: bool,
    final_score: u32,
}

impl OverlayController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_paused_visible(&self) -> bool {
        self.paused
    }

    pub fn is_game_over_visible(&self) -> bool {
        self.game_over
    }

    /// Show or hide the paused overlay to match the game's pause flag.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn show_game_over(&mut self, score: u32) {
        self.game_over = true;
        self.final_score = score;
    }

    /// Hide every overlay for a fresh board.
    pub fn restart(&mut self) {
        self.paused = false;
        self.game_over = false;
        self.final_score = 0;
    }

    pub fn handle_event(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::Paused => self.set_paused(true),
            GameEvent::Resumed => self.set_paused(false),
            GameEvent::GameOver { score } => self.show_game_over(score),
            GameEvent::Restarted => self.restart(),
            GameEvent::Locked { .. } => {}
        }
    }

    /// The overlay to draw, if any. Game over wins over paused.
    pub fn active(&self) -> Option<Overlay> {
        if self.game_over {
            Some(Overlay {
                kind: OverlayKind::GameOver,
                lines: vec![
                    "GAME OVER".to_string(),
                    format!("Score: {}", self.final_score),
                    "Space: Restart".to_string(),
                    "esc: Main Menu".to_string(),
                ],
                background: Rgba::new(200, 200, 200, 180),
            })
        } else if self.paused {
            Some(Overlay {
                kind: OverlayKind::Paused,
                lines: vec!["Paused".to_string()],
                background: Rgba::new(200, 200, 200, 100),
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        let overlays = OverlayController::new();
        assert_eq!(overlays.active(), None);
    }

    #[test]
    fn pause_and_resume_events_toggle_the_label() {
        let mut overlays = OverlayController::new();
        overlays.handle_event(&GameEvent::Paused);
        assert_eq!(overlays.active().unwrap().kind, OverlayKind::Paused);
        assert_eq!(overlays.active().unwrap().lines, vec!["Paused"]);

        overlays.handle_event(&GameEvent::Resumed);
        assert!(!overlays.is_paused_visible());
        assert_eq!(overlays.active(), None);
    }

    #[test]
    fn game_over_text_carries_final_score() {
        let mut overlays = OverlayController::new();
        overlays.handle_event(&GameEvent::GameOver { score: 340 });

        let overlay = overlays.active().unwrap();
        assert_eq!(overlay.kind, OverlayKind::GameOver);
        assert_eq!(overlay.lines[1], "Score: 340");
        assert_eq!(overlay.background.a, 180);
    }

    #[test]
    fn game_over_survives_everything_but_restart() {
        let mut overlays = OverlayController::new();
        overlays.show_game_over(10);

        for event in [
            GameEvent::Paused,
            GameEvent::Resumed,
            GameEvent::Locked { lines_cleared: 2 },
        ] {
            overlays.handle_event(&event);
            assert!(overlays.is_game_over_visible(), "{event:?}");
        }

        overlays.handle_event(&GameEvent::Restarted);
        assert!(!overlays.is_game_over_visible());
        assert_eq!(overlays.active(), None);
    }
}
