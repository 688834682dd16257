//! Game state module - the complete game for one board
//!
//! Ties together the board, the falling shape, the piece queue and scoring.
//! It handles gravity and lock delay on a fixed tick, player commands, line
//! clears, pause, game over and restart. UI layers observe it through the
//! [`Playfield`] trait and the [`GameEvent`]s it queues.

use crate::board::Board;
use crate::config::GameConfig;
use crate::playfield::Playfield;
use crate::pieces::try_rotate;
use crate::rng::PieceQueue;
use crate::scoring::{calculate_level, calculate_line_score, scaled_drop_interval_ms};
use crate::shape::Shape;
use crate::types::*;

/// State transitions that UI layers react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A shape merged into the board.
    Locked { lines_cleared: u32 },
    Paused,
    Resumed,
    /// A new shape collided at spawn. `score` is final for this board.
    GameOver { score: u32 },
    Restarted,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Tetris {
    config: GameConfig,
    board: Board,
    current: Option<Shape>,
    queue: PieceQueue,
    next: PieceKind,
    score: u32,
    level: u32,
    lines: u32,
    drop_timer_ms: u32,
    lock_timer_ms: u32,
    lock_reset_count: u8,
    paused: bool,
    game_over: bool,
    started: bool,
    events: Vec<GameEvent>,
}

impl Tetris {
    /// Create a new game; call [`Tetris::start`] to spawn the first shape
    pub fn new(config: GameConfig) -> Self {
        let queue = PieceQueue::new(config.seed());
        let next = queue.peek();

        Self {
            board: Board::new(config.columns(), config.rows()),
            config,
            current: None,
            queue,
            next,
            score: 0,
            level: 0,
            lines: 0,
            drop_timer_ms: 0,
            lock_timer_ms: 0,
            lock_reset_count: 0,
            paused: false,
            game_over: false,
            started: false,
            events: Vec::new(),
        }
    }

    /// Start the game and spawn the first shape
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_shape();
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Kind of the shape that spawns after the current one locks
    pub fn next_piece(&self) -> PieceKind {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for setting up positions
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Take all events queued since the last call, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Current gravity interval
    pub fn drop_interval_ms(&self) -> u32 {
        scaled_drop_interval_ms(self.level, self.config.speed())
    }

    /// Row the current shape would land on (its reference `y`)
    pub fn ghost_y(&self) -> Option<i16> {
        let shape = self.current?;
        Some(shape.y + shape.drop_distance(&self.board))
    }

    /// Spawn the next shape; a collision at spawn ends the game
    fn spawn_shape(&mut self) -> bool {
        let kind = self.queue.draw();
        self.next = self.queue.peek();
        let shape = Shape::spawn(kind, self.board.columns());

        self.drop_timer_ms = 0;
        self.lock_timer_ms = 0;
        self.lock_reset_count = 0;

        if !shape.fits(&self.board) {
            self.current = None;
            self.game_over = true;
            self.events.push(GameEvent::GameOver { score: self.score });
            log::info!("game over with score {}", self.score);
            return false;
        }

        self.current = Some(shape);
        true
    }

    /// Try to move the current shape
    pub fn try_move(&mut self, dx: i16, dy: i16) -> bool {
        let Some(shape) = self.current else {
            return false;
        };

        let moved = shape.shifted(dx, dy);
        if !moved.fits(&self.board) {
            return false;
        }
        self.current = Some(moved);

        if dy != 0 {
            // Falling to a new row starts a fresh lock delay.
            self.lock_timer_ms = 0;
        } else if moved.is_grounded(&self.board) {
            self.reset_lock_timer();
        }
        true
    }

    /// Try to rotate the current shape with SRS wall kicks
    pub fn try_rotate(&mut self, clockwise: bool) -> bool {
        let Some(shape) = self.current else {
            return false;
        };

        if shape.kind == PieceKind::O {
            return false;
        }

        let board = &self.board;
        let Some((rotation, (dx, dy))) = try_rotate(
            shape.kind,
            shape.rotation,
            shape.x,
            shape.y,
            clockwise,
            |x, y| board.is_valid(x, y),
        ) else {
            return false;
        };

        self.current = Some(Shape {
            rotation,
            ..shape.shifted(dx, dy)
        });
        self.reset_lock_timer();
        true
    }

    fn reset_lock_timer(&mut self) {
        if self.lock_reset_count < LOCK_RESET_LIMIT {
            self.lock_timer_ms = 0;
            self.lock_reset_count += 1;
        }
    }

    /// Drop the current shape to the lowest valid row and lock it
    pub fn hard_drop(&mut self) -> bool {
        let Some(shape) = self.current else {
            return false;
        };

        self.current = Some(shape.shifted(0, shape.drop_distance(&self.board)));
        self.lock_shape();
        true
    }

    /// Merge the current shape into the board, clear lines and spawn the next one
    pub fn lock_shape(&mut self) {
        let Some(shape) = self.current.take() else {
            return;
        };

        if !self.board.lock_cells(&shape.cells(), shape.color) {
            log::warn!("shape {:?} overlapped the board while locking", shape.kind);
        }

        let cleared = self.board.clear_full_rows().len();
        if cleared > 0 {
            self.lines += cleared as u32;
            self.score = self
                .score
                .saturating_add(calculate_line_score(cleared, self.level));
            self.level = calculate_level(self.lines);
            log::debug!(
                "cleared {cleared} line(s): score {} level {}",
                self.score,
                self.level
            );
        }

        self.events.push(GameEvent::Locked {
            lines_cleared: cleared as u32,
        });
        self.spawn_shape();
    }

    /// Flip the pause flag; refused before start and after game over
    pub fn toggle_pause(&mut self) -> bool {
        if !self.started || self.game_over {
            return false;
        }

        self.paused = !self.paused;
        self.events.push(if self.paused {
            GameEvent::Paused
        } else {
            GameEvent::Resumed
        });
        true
    }

    /// Clear the board and start over; the piece sequence continues
    pub fn restart(&mut self) {
        self.board.clear();
        self.current = None;
        self.score = 0;
        self.level = 0;
        self.lines = 0;
        self.paused = false;
        self.game_over = false;
        self.started = true;
        self.events.push(GameEvent::Restarted);
        log::info!("game restarted");
        self.spawn_shape();
    }

    /// Main game tick - apply gravity and lock delay
    ///
    /// Returns true when the current shape moved or locked.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.paused || self.game_over || !self.started {
            return false;
        }

        let Some(shape) = self.current else {
            return false;
        };

        if shape.is_grounded(&self.board) {
            self.lock_timer_ms = self.lock_timer_ms.saturating_add(elapsed_ms);
            if self.lock_timer_ms >= LOCK_DELAY_MS {
                self.lock_shape();
                return true;
            }
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms >= self.drop_interval_ms() {
            self.drop_timer_ms = 0;
            return self.try_move(0, 1);
        }
        false
    }

    /// Apply a player command
    ///
    /// Movement is ignored while paused or after game over. `ExitToMenu` is
    /// for the host and is never consumed here.
    pub fn apply(&mut self, command: GameCommand) -> bool {
        match command {
            GameCommand::TogglePause => return self.toggle_pause(),
            GameCommand::Restart => {
                self.restart();
                return true;
            }
            GameCommand::ExitToMenu => return false,
            _ => {}
        }

        if self.paused || self.game_over || !self.started {
            return false;
        }

        match command {
            GameCommand::MoveLeft => self.try_move(-1, 0),
            GameCommand::MoveRight => self.try_move(1, 0),
            GameCommand::SoftDrop => self.try_move(0, 1),
            GameCommand::HardDrop => self.hard_drop(),
            GameCommand::RotateCw => self.try_rotate(true),
            GameCommand::RotateCcw => self.try_rotate(false),
            GameCommand::TogglePause | GameCommand::Restart | GameCommand::ExitToMenu => false,
        }
    }

    /// Replace the current shape (for setting up positions)
    pub fn set_current_shape(&mut self, shape: Option<Shape>) {
        self.current = shape;
    }
}

impl Playfield for Tetris {
    fn rows(&self) -> u16 {
        self.board.rows()
    }

    fn columns(&self) -> u16 {
        self.board.columns()
    }

    fn cell_at(&self, row: u16, column: u16) -> Cell {
        self.board.cell_at(row, column)
    }

    fn current_shape(&self) -> Option<Shape> {
        self.current
    }
}

impl Default for Tetris {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
