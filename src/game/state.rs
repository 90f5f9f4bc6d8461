use super::config::GameConfig;
use super::direction::Direction;
use std::collections::VecDeque;
use std::time::Duration;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Step one cell in `direction`, wrapping around a `size`×`size` torus
    pub fn wrapped_step(&self, direction: Direction, size: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: (self.x + dx).rem_euclid(size),
            y: (self.y + dy).rem_euclid(size),
        }
    }
}

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Idle,
    Running,
    Paused,
    GameOver,
}

/// Complete state of one game
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Body segments, head at the front
    pub body: VecDeque<Position>,
    /// Direction applied on the last tick
    pub direction: Direction,
    /// Direction to apply on the next tick
    pub pending: Direction,
    pub food: Position,
    pub score: u32,
    pub interval: Duration,
    pub status: GameStatus,
}

impl GameState {
    /// State shown before the first game starts
    pub fn initial(config: &GameConfig) -> Self {
        Self {
            body: config.initial_body.iter().copied().collect(),
            direction: config.initial_direction,
            pending: config.initial_direction,
            food: config.initial_food,
            score: 0,
            interval: config.initial_interval,
            status: GameStatus::Idle,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        // The body is never empty: ticks always push before popping
        self.body.front().copied().unwrap_or(Position::new(0, 0))
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    pub fn is_running(&self) -> bool {
        self.status == GameStatus::Running
    }
}
