//! Screen flow: the start menu and the running game.
//!
//! [`App`] owns the game, its overlay controller and the terminal view. The
//! binary feeds it key events and fixed ticks and asks it to draw.

use crossterm::event::{KeyCode, KeyEvent};

use crate::core::{GameConfig, OverlayController, Tetris};
use crate::input::{is_press, map_key, should_quit};
use crate::render::GamePanel;
use crate::term::{FrameBuffer, GameView, Viewport};
use crate::types::GameCommand;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
}

/// What the host loop should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    screen: Screen,
    game: Tetris,
    overlays: OverlayController,
    view: GameView,
}

impl App {
    pub fn new(config: GameConfig, cell_size: u32) -> Self {
        Self {
            screen: Screen::Menu,
            game: Tetris::new(config),
            overlays: OverlayController::new(),
            view: GameView::new(GamePanel::new(cell_size)),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn game(&self) -> &Tetris {
        &self.game
    }

    pub fn overlays(&self) -> &OverlayController {
        &self.overlays
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if !is_press(&key) {
            return Flow::Continue;
        }
        if should_quit(key) {
            return Flow::Quit;
        }

        match self.screen {
            Screen::Menu => {
                if key.code == KeyCode::Enter {
                    self.play();
                }
            }
            Screen::Playing => match map_key(key, self.game.game_over()) {
                Some(GameCommand::ExitToMenu) => {
                    log::info!("back to menu, score {}", self.game.score());
                    self.screen = Screen::Menu;
                }
                Some(command) => {
                    self.game.apply(command);
                    self.sync_overlays();
                }
                None => {}
            },
        }
        Flow::Continue
    }

    /// Advance the game by one fixed step. The menu does not tick.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.screen != Screen::Playing {
            return;
        }
        self.game.tick(elapsed_ms);
        self.sync_overlays();
    }

    pub fn render_into(&mut self, viewport: Viewport, fb: &mut FrameBuffer) {
        match self.screen {
            Screen::Menu => self.view.render_menu(viewport, fb),
            Screen::Playing => {
                let overlay = self.overlays.active();
                self.view.render_into(&self.game, overlay.as_ref(), viewport, fb);
            }
        }
    }

    /// Leave the menu with a fresh board. The first game starts, later ones restart.
    fn play(&mut self) {
        if self.game.started() {
            self.game.restart();
        } else {
            self.game.start();
        }
        self.screen = Screen::Playing;
        self.sync_overlays();
    }

    fn sync_overlays(&mut self) {
        for event in self.game.drain_events() {
            log::debug!("game event: {event:?}");
            self.overlays.handle_event(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn app() -> App {
        App::new(GameConfig::default(), 2)
    }

    #[test]
    fn starts_on_the_menu_without_ticking() {
        let mut app = app();
        assert_eq!(app.screen(), Screen::Menu);
        app.tick(10_000);
        assert!(!app.game().started());
    }

    #[test]
    fn enter_starts_and_escape_returns() {
        let mut app = app();
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.screen(), Screen::Playing);
        assert!(app.game().started());

        app.handle_key(press(KeyCode::Esc));
        assert_eq!(app.screen(), Screen::Menu);
    }

    #[test]
    fn pause_key_drives_the_overlay() {
        let mut app = app();
        app.handle_key(press(KeyCode::Enter));
        app.handle_key(press(KeyCode::Char('p')));
        assert!(app.overlays().is_paused_visible());
        app.handle_key(press(KeyCode::Char('p')));
        assert!(!app.overlays().is_paused_visible());
    }

    #[test]
    fn releases_are_ignored_and_q_quits() {
        let mut app = app();
        let mut release = press(KeyCode::Enter);
        release.kind = KeyEventKind::Release;
        assert_eq!(app.handle_key(release), Flow::Continue);
        assert_eq!(app.screen(), Screen::Menu);

        assert_eq!(app.handle_key(press(KeyCode::Char('q'))), Flow::Quit);
        assert_eq!(
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Flow::Quit
        );
    }

    #[test]
    fn replaying_from_the_menu_clears_the_board() {
        let mut app = app();
        app.handle_key(press(KeyCode::Enter));
        app.handle_key(press(KeyCode::Char(' ')));
        assert_eq!(app.game().board().occupied_count(), 4);

        app.handle_key(press(KeyCode::Esc));
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.game().board().occupied_count(), 0);
        assert_eq!(app.game().score(), 0);
    }
}
