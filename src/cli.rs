//! Command line and environment configuration.

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Env, Target};

use crate::core::GameConfig;
use crate::types::{DEFAULT_CELL_SIZE, DEFAULT_COLUMNS, DEFAULT_ROWS};

#[derive(Parser, Debug, Clone)]
#[command(name = "tetris-panel", version, about = "Falling-block puzzle in the terminal")]
pub struct Args {
    /// Board height in cells
    #[arg(long, env = "TETRIS_ROWS", default_value_t = DEFAULT_ROWS)]
    pub rows: u16,

    /// Board width in cells
    #[arg(long, env = "TETRIS_COLUMNS", default_value_t = DEFAULT_COLUMNS)]
    pub columns: u16,

    /// Gravity multiplier; 2.0 falls twice as fast
    #[arg(long, env = "TETRIS_SPEED", default_value_t = 1.0)]
    pub speed: f32,

    /// Seed for the piece sequence
    #[arg(long, env = "TETRIS_SEED", default_value_t = 1)]
    pub seed: u32,

    /// Pixels per board cell (one pixel is one terminal column, half a row)
    #[arg(
        long,
        env = "TETRIS_CELL_SIZE",
        default_value_t = DEFAULT_CELL_SIZE,
        value_parser = clap::value_parser!(u32).range(2..=8)
    )]
    pub cell_size: u32,

    /// Write logs here; nothing is logged without it
    #[arg(long, env = "TETRIS_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn game_config(&self) -> Result<GameConfig> {
        GameConfig::new(self.rows, self.columns, self.speed, self.seed)
            .context("invalid game configuration")
    }

    /// Send `log` output to the log file, filtered by `RUST_LOG` (default `info`).
    ///
    /// The terminal is in raw mode while playing, so logs never go to stderr.
    pub fn init_logging(&self) -> Result<()> {
        let Some(path) = &self.log_file else {
            return Ok(());
        };

        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        env_logger::Builder::from_env(Env::default().default_filter_or("info"))
            .target(Target::Pipe(Box::new(file)))
            .try_init()
            .context("logger already initialised")?;
        Ok(())
    }
}
