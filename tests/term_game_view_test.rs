//! Terminal presentation tests - half-block mapping, overlays and the app flow

use crossterm::event::{KeyCode, KeyEvent};

use tetris_panel::core::{GameConfig, OverlayController, Tetris};
use tetris_panel::render::GamePanel;
use tetris_panel::term::{FrameBuffer, GameView, Viewport};
use tetris_panel::types::{GameCommand, Rgb};
use tetris_panel::{App, Screen};

const VIEWPORT: Viewport = Viewport {
    width: 80,
    height: 24,
};

fn row_text(fb: &FrameBuffer, y: u16) -> String {
    (0..fb.width())
        .map(|x| fb.get(x, y).map(|c| c.ch).unwrap_or(' '))
        .collect()
}

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height()).map(|y| row_text(fb, y) + "\n").collect()
}

#[test]
fn locked_cell_shows_its_bevel_colors() {
    let mut game = Tetris::new(GameConfig::default());
    game.start();
    game.set_current_shape(None);
    let color = Rgb::new(100, 100, 100);
    game.board_mut().set(0, 19, Some(color));

    let mut view = GameView::new(GamePanel::new(2));
    let fb = view.render(&game, None, VIEWPORT);
    let frame = view.board_frame(&game, VIEWPORT);

    // Row 19 is pixel rows 38-39, terminal row 19 inside the border. A 2px
    // cell is bright on its left column and dark on its right one.
    let left = fb.get(frame.x + 1, frame.y + 1 + 19).unwrap();
    let right = fb.get(frame.x + 2, frame.y + 1 + 19).unwrap();
    assert_eq!((left.style.fg, left.style.bg), (color.brighter(), color.brighter()));
    assert_eq!((right.style.fg, right.style.bg), (color.darker(), color.darker()));
}

#[test]
fn side_panel_reports_score_and_next_piece() {
    let mut game = Tetris::new(GameConfig::default());
    game.start();
    let mut view = GameView::default();
    let fb = view.render(&game, None, VIEWPORT);
    let text = screen_text(&fb);

    for label in ["SCORE", "LEVEL", "LINES", "NEXT"] {
        assert!(text.contains(label), "missing {label}");
    }
    assert!(text.contains(game.next_piece().letter()));
}

#[test]
fn game_over_overlay_lines_are_drawn_in_order() {
    let mut game = Tetris::new(GameConfig::default());
    game.start();
    while !game.game_over() {
        game.apply(GameCommand::HardDrop);
    }
    let mut overlays = OverlayController::new();
    for event in game.drain_events() {
        overlays.handle_event(&event);
    }
    let overlay = overlays.active().unwrap();

    let mut view = GameView::default();
    let fb = view.render(&game, Some(&overlay), VIEWPORT);
    let frame = view.board_frame(&game, VIEWPORT);

    // Line i is centered on pixel row 4 + 2 * (i + 1), two pixels per terminal row.
    for (i, line) in overlay.lines.iter().enumerate() {
        let row = row_text(&fb, frame.y + 1 + 3 + i as u16);
        assert!(row.contains(line.as_str()), "line {i}: {row:?}");
    }
}

#[test]
fn app_switches_between_menu_and_board() {
    let mut app = App::new(GameConfig::default(), 2);
    let mut fb = FrameBuffer::new(0, 0);

    app.render_into(VIEWPORT, &mut fb);
    assert!(screen_text(&fb).contains("Enter: Play"));

    app.handle_key(KeyEvent::from(KeyCode::Enter));
    assert_eq!(app.screen(), Screen::Playing);
    app.render_into(VIEWPORT, &mut fb);
    let text = screen_text(&fb);
    assert!(text.contains('┌'));
    assert!(!text.contains("Enter: Play"));

    app.handle_key(KeyEvent::from(KeyCode::Char('p')));
    app.render_into(VIEWPORT, &mut fb);
    assert!(screen_text(&fb).contains("Paused"));
}
