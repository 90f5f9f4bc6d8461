use super::direction::Direction;
use super::state::Position;
use std::time::Duration;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Side length of the square, wrapping grid
    pub grid_size: i32,
    /// Body at reset, head first
    pub initial_body: Vec<Position>,
    /// Direction at reset (both active and pending)
    pub initial_direction: Direction,
    /// Food cell shown before the first game; every reset places food randomly
    pub initial_food: Position,
    /// Tick interval at reset
    pub initial_interval: Duration,
    /// Amount the interval shrinks per food eaten
    pub speedup_step: Duration,
    /// The interval never drops below this
    pub min_interval: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            initial_body: vec![
                Position::new(8, 10),
                Position::new(7, 10),
                Position::new(6, 10),
            ],
            initial_direction: Direction::Right,
            initial_food: Position::new(12, 10),
            initial_interval: Duration::from_millis(110),
            speedup_step: Duration::from_millis(2),
            min_interval: Duration::from_millis(60),
        }
    }
}

impl GameConfig {
    /// Number of cells on the board
    pub fn cell_count(&self) -> usize {
        (self.grid_size * self.grid_size) as usize
    }

    /// Interval after one more food, clamped at the floor
    pub fn next_interval(&self, current: Duration) -> Duration {
        current.saturating_sub(self.speedup_step).max(self.min_interval)
    }
}
