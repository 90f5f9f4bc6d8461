//! Snake game on a wrapping grid.
//!
//! The engine holds no I/O: it is driven by `tick` and `steer` calls from the
//! UI loop. `GameSession` adds high-score persistence on top.

pub mod config;
pub mod direction;
pub mod engine;
pub mod session;
pub mod state;

pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, TickOutcome};
pub use session::GameSession;
pub use state::{GameState, GameStatus, Position};
