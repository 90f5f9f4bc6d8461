pub mod config;
pub mod contact;
pub mod game;
pub mod i18n;
pub mod profile;
pub mod storage;
pub mod ui;
