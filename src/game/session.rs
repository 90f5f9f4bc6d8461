use super::{Direction, GameConfig, GameEngine, GameState, GameStatus, TickOutcome};
use crate::storage::Storage;
use std::time::Duration;
use tracing::info;

/// A game engine bound to the persisted high score
pub struct GameSession {
    engine: GameEngine,
    storage: Storage,
    high_score: u32,
}

impl GameSession {
    pub fn new(storage: Storage) -> Self {
        Self::with_engine(GameEngine::new(GameConfig::default()), storage)
    }

    pub fn with_engine(engine: GameEngine, storage: Storage) -> Self {
        let high_score = storage.high_score();
        Self {
            engine,
            storage,
            high_score,
        }
    }

    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    pub fn config(&self) -> &GameConfig {
        self.engine.config()
    }

    pub fn status(&self) -> GameStatus {
        self.engine.status()
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Tick period while running; `None` means no timer should exist
    pub fn tick_interval(&self) -> Option<Duration> {
        let state = self.engine.state();
        state.is_running().then_some(state.interval)
    }

    pub fn start(&mut self) -> bool {
        let started = self.engine.start();
        if started {
            info!("Game started");
        }
        started
    }

    pub fn restart(&mut self) -> bool {
        let restarted = self.engine.restart();
        if restarted {
            info!("Game restarted");
        }
        restarted
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.engine.toggle_pause()
    }

    pub fn steer(&mut self, direction: Direction) -> bool {
        self.engine.steer(direction)
    }

    /// Advance one tick, persisting the high score when the game ends
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.engine.tick();
        if let Some(score) = outcome.final_score() {
            self.high_score = self.storage.record_score(score);
            info!("Game over with score {} (high score {})", score, self.high_score);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;
    use crate::storage::HIGH_SCORE_KEY;

    fn colliding_session(storage: Storage, score: u32) -> GameSession {
        let config = GameConfig::default();
        let mut state = GameState::initial(&config);
        state.body = [(5, 5), (6, 5), (6, 6), (5, 6), (4, 6)]
            .iter()
            .map(|&(x, y)| Position::new(x, y))
            .collect();
        state.direction = Direction::Down;
        state.pending = Direction::Down;
        state.score = score;
        state.status = GameStatus::Running;
        GameSession::with_engine(GameEngine::with_state(config, state, 1), storage)
    }

    #[test]
    fn test_loads_stored_high_score() {
        let storage = Storage::in_memory();
        storage.set(HIGH_SCORE_KEY, "17").unwrap();

        let session = GameSession::new(storage);
        assert_eq!(session.high_score(), 17);
    }

    #[test]
    fn test_game_over_persists_new_high_score() {
        let storage = Storage::in_memory();
        let mut session = colliding_session(storage.clone(), 6);

        assert_eq!(session.tick(), TickOutcome::Collided { score: 6 });
        assert_eq!(session.high_score(), 6);
        assert_eq!(storage.get(HIGH_SCORE_KEY), Some("6".to_string()));
    }

    #[test]
    fn test_game_over_keeps_higher_stored_score() {
        let storage = Storage::in_memory();
        storage.set(HIGH_SCORE_KEY, "10").unwrap();
        let mut session = colliding_session(storage.clone(), 4);

        session.tick();
        assert_eq!(session.high_score(), 10);
        assert_eq!(storage.high_score(), 10);
    }

    #[test]
    fn test_tick_interval_only_while_running() {
        let mut session = GameSession::new(Storage::in_memory());
        assert_eq!(session.tick_interval(), None);

        session.start();
        assert_eq!(session.tick_interval(), Some(Duration::from_millis(110)));

        session.toggle_pause();
        assert_eq!(session.tick_interval(), None);
    }

    #[test]
    fn test_tick_interval_cleared_on_game_over() {
        let mut session = colliding_session(Storage::in_memory(), 0);
        session.tick();
        assert_eq!(session.status(), GameStatus::GameOver);
        assert_eq!(session.tick_interval(), None);
    }
}
