//! Game configuration - board size, gravity speed and RNG seed.

use thiserror::Error;

use crate::types::{DEFAULT_COLUMNS, DEFAULT_ROWS, MAX_DIMENSION, MIN_DIMENSION};

/// Rejected configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{axis} must be between {min} and {max}, got {value}")]
    Dimension {
        axis: &'static str,
        value: u16,
        min: u16,
        max: u16,
    },
    #[error("speed must be a finite number greater than zero, got {0}")]
    Speed(f32),
}

/// Validated settings for one game.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    rows: u16,
    columns: u16,
    speed: f32,
    seed: u32,
}

impl GameConfig {
    pub fn new(rows: u16, columns: u16, speed: f32, seed: u32) -> Result<Self, ConfigError> {
        check_dimension("rows", rows)?;
        check_dimension("columns", columns)?;
        if !speed.is_finite() || speed <= 0.0 {
            return Err(ConfigError::Speed(speed));
        }

        Ok(Self {
            rows,
            columns,
            speed,
            seed,
        })
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    /// Gravity multiplier (1.0 = classic speed)
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            columns: DEFAULT_COLUMNS,
            speed: 1.0,
            seed: 1,
        }
    }
}

fn check_dimension(axis: &'static str, value: u16) -> Result<(), ConfigError> {
    if (MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Dimension {
            axis,
            value,
            min: MIN_DIMENSION,
            max: MAX_DIMENSION,
        })
    }
}
