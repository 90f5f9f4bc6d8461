use super::{
    config::GameConfig,
    direction::Direction,
    state::{GameState, GameStatus, Position},
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

/// Result of a game tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game is not running; nothing moved
    Skipped,
    /// The snake moved one cell
    Moved,
    /// The snake ate food and grew
    Ate { score: u32 },
    /// The head ran into the body; the game is over
    Collided { score: u32 },
    /// The snake filled every cell; no room for food, the game is over
    BoardFull { score: u32 },
}

impl TickOutcome {
    /// Final score if this tick ended the game
    pub fn final_score(&self) -> Option<u32> {
        match self {
            TickOutcome::Collided { score } | TickOutcome::BoardFull { score } => Some(*score),
            _ => None,
        }
    }
}

/// The game engine that owns the state and applies all game rules
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    rng: StdRng,
}

impl GameEngine {
    /// Create an idle engine with an entropy-seeded generator
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an idle engine with a deterministic food sequence
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, rng: StdRng) -> Self {
        let state = GameState::initial(&config);
        Self { config, state, rng }
    }

    /// Create an engine positioned at an arbitrary state
    pub fn with_state(config: GameConfig, state: GameState, seed: u64) -> Self {
        Self {
            config,
            state,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.state.status
    }

    /// Begin a fresh game from `Idle` or `GameOver`. Returns false otherwise.
    pub fn start(&mut self) -> bool {
        match self.state.status {
            GameStatus::Idle | GameStatus::GameOver => {
                self.reset_running();
                true
            }
            GameStatus::Running | GameStatus::Paused => false,
        }
    }

    /// Fully reset and run. A game that never started stays `Idle`.
    pub fn restart(&mut self) -> bool {
        if self.state.status == GameStatus::Idle {
            return false;
        }
        self.reset_running();
        true
    }

    pub fn pause(&mut self) -> bool {
        if self.state.status == GameStatus::Running {
            self.state.status = GameStatus::Paused;
            true
        } else {
            false
        }
    }

    pub fn resume(&mut self) -> bool {
        if self.state.status == GameStatus::Paused {
            self.state.status = GameStatus::Running;
            true
        } else {
            false
        }
    }

    /// Pause when running, resume when paused; otherwise no effect
    pub fn toggle_pause(&mut self) -> bool {
        self.pause() || self.resume()
    }

    /// Queue a direction for the next tick.
    ///
    /// An exact reversal of the active direction is ignored. Returns whether
    /// the pending direction changed.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(self.state.direction) {
            debug!("Ignoring reversal {:?} -> {:?}", self.state.direction, direction);
            return false;
        }
        let changed = self.state.pending != direction;
        self.state.pending = direction;
        changed
    }

    /// Advance the simulation by one step
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.status != GameStatus::Running {
            return TickOutcome::Skipped;
        }

        if !self.state.pending.is_opposite(self.state.direction) {
            self.state.direction = self.state.pending;
        }

        let new_head = self
            .state
            .head()
            .wrapped_step(self.state.direction, self.config.grid_size);

        // The tail cell counts even though it would move away this tick
        if self.state.occupies(new_head) {
            self.state.status = GameStatus::GameOver;
            debug!("Collision at {:?} with score {}", new_head, self.state.score);
            return TickOutcome::Collided {
                score: self.state.score,
            };
        }

        self.state.body.push_front(new_head);

        if new_head != self.state.food {
            self.state.body.pop_back();
            return TickOutcome::Moved;
        }

        self.state.score += 1;
        self.state.interval = self.config.next_interval(self.state.interval);

        match self.free_cell() {
            Some(food) => {
                self.state.food = food;
                TickOutcome::Ate {
                    score: self.state.score,
                }
            }
            None => {
                self.state.status = GameStatus::GameOver;
                TickOutcome::BoardFull {
                    score: self.state.score,
                }
            }
        }
    }

    fn reset_running(&mut self) {
        let mut state = GameState::initial(&self.config);
        state.status = GameStatus::Running;
        self.state = state;
        if let Some(food) = self.free_cell() {
            self.state.food = food;
        }
        debug!("Game reset, food at {:?}", self.state.food);
    }

    /// Pick a random cell not covered by the body, by rejection sampling
    fn free_cell(&mut self) -> Option<Position> {
        if self.state.len() >= self.config.cell_count() {
            return None;
        }

        loop {
            let x = self.rng.gen_range(0..self.config.grid_size);
            let y = self.rng.gen_range(0..self.config.grid_size);
            let pos = Position::new(x, y);

            if !self.state.occupies(pos) {
                return Some(pos);
            }
        }
    }
}
