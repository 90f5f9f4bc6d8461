//! Translation store: single source of truth for the bundled dictionaries.
//!
//! Both dictionaries are compiled into the binary and parsed on first access.
//! The store uses a singleton pattern with `OnceLock` so every lookup shares
//! the same parsed trees.

use crate::i18n::{Dictionary, Language};
use std::sync::OnceLock;
use tracing::error;

const ENGLISH_SOURCE: &str = include_str!("../../locales/en.json");
const FINNISH_SOURCE: &str = include_str!("../../locales/fi.json");

/// The parsed dictionaries for every supported language.
pub struct TranslationStore {
    english: Dictionary,
    finnish: Dictionary,
}

/// Global store instance (initialized lazily)
static STORE: OnceLock<TranslationStore> = OnceLock::new();

impl TranslationStore {
    /// Get the global translation store.
    ///
    /// A bundled dictionary that fails to parse is replaced by an empty one, so
    /// every lookup in that language falls back instead of failing.
    pub fn get() -> &'static TranslationStore {
        STORE.get_or_init(|| TranslationStore {
            english: parse_bundled(Language::English, ENGLISH_SOURCE),
            finnish: parse_bundled(Language::Finnish, FINNISH_SOURCE),
        })
    }

    /// The dictionary for a language.
    pub fn dictionary(&self, language: Language) -> &Dictionary {
        match language {
            Language::English => &self.english,
            Language::Finnish => &self.finnish,
        }
    }
}

fn parse_bundled(language: Language, source: &str) -> Dictionary {
    Dictionary::from_json(source).unwrap_or_else(|e| {
        error!("Bundled {} dictionary is invalid: {}", language.name(), e);
        Dictionary::empty()
    })
}
