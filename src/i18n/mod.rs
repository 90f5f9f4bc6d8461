//! Internationalization (i18n) module for bilingual content.
//!
//! All language-related logic, the bundled dictionaries and the lookup layer
//! live here.
//!
//! # Architecture
//!
//! - `language`: the closed set of supported languages and locale detection
//! - `dictionary`: JSON translation trees and dotted-key lookup
//! - `store`: the bundled English and Finnish dictionaries (singleton)
//! - `context`: the active language with `t` / `get_translation` / `set_language`
//! - `validator`: consistency checks between the two dictionaries
//! - `metrics`: lookup hit/miss counters
//!
//! # Example
//!
//! ```rust,ignore
//! use portfolio::i18n::{Language, LanguageContext};
//! use portfolio::storage::Storage;
//!
//! let mut ctx = LanguageContext::load(Storage::in_memory(), None);
//! ctx.set_language(Language::Finnish);
//! assert_eq!(ctx.t("nav.projects"), "Projektit");
//! assert_eq!(ctx.t("nav.unknown"), "nav.unknown");
//! ```

mod context;
mod dictionary;
mod language;
mod metrics;
mod store;
mod validator;

pub use context::{resolve_initial, LanguageContext};
pub use dictionary::Dictionary;
pub use language::Language;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use store::TranslationStore;
pub use validator::{TranslationValidator, ValidationReport};
