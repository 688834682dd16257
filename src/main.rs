//! Terminal Tetris runner (default binary).
//!
//! Fixed 16ms ticks, crossterm for input and a diffing framebuffer renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};

use tetris_panel::term::{FrameBuffer, TerminalRenderer};
use tetris_panel::types::TICK_MS;
use tetris_panel::{App, Args, Flow};

fn main() -> Result<()> {
    let args = Args::parse();
    args.init_logging()?;
    let config = args.game_config()?;
    log::info!(
        "starting: {}x{} board, speed {}, seed {}, cell size {}",
        config.columns(),
        config.rows(),
        config.speed(),
        config.seed(),
        args.cell_size
    );

    let mut app = App::new(config, args.cell_size);
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let restored = term.exit();
    if let Err(err) = &result {
        log::error!("exiting with error: {err:#}");
    }
    result.and(restored)
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let tick_duration = Duration::from_millis(u64::from(TICK_MS));
    let mut last_tick = Instant::now();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let viewport = term.viewport()?;
        app.render_into(viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if app.handle_key(key) == Flow::Quit {
                        log::info!("quit requested");
                        return Ok(());
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            app.tick(TICK_MS);
        }
    }
}
