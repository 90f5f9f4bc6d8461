//! Terminal presentation layer.
//!
//! `App` owns all UI state and turns key actions into state changes; the
//! render functions draw it with ratatui. Nothing here blocks: the contact
//! request runs elsewhere and reports back through `App::contact_finished`.

pub mod app;
pub mod game_view;
pub mod input;
pub mod notice;
pub mod render;
pub mod sections;
pub mod ticker;
pub mod tui;

pub use app::{App, Section};
pub use input::{map_key, InputMode, KeyAction};
pub use notice::{Notice, NoticeBoard, AUTO_HIDE};
pub use render::render;
pub use ticker::TickTimer;
