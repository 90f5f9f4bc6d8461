//! Language context: the active language plus lookup functions.
//!
//! One `LanguageContext` is created at startup and handed to the presentation
//! layer. `set_language` is its only mutation; persisting the choice is the
//! side effect of that call.

use crate::i18n::{Dictionary, Language, TranslationMetrics, TranslationStore};
use crate::storage::{Storage, LANGUAGE_KEY};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

pub struct LanguageContext {
    language: Language,
    storage: Storage,
}

impl LanguageContext {
    /// Build the context, resolving the initial language.
    ///
    /// Resolution order: the stored preference, then `hint` (an explicit
    /// override from configuration), then the process locale, then English.
    pub fn load(storage: Storage, hint: Option<Language>) -> Self {
        let stored = storage.get(LANGUAGE_KEY);
        let language = resolve_initial(stored.as_deref(), hint, Language::detect());
        info!("Active language: {}", language.name());

        Self { language, storage }
    }

    /// Build a context with a fixed language, ignoring storage contents.
    pub fn with_language(storage: Storage, language: Language) -> Self {
        Self { language, storage }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Switch the active language and persist the choice.
    ///
    /// Never fails: a storage error is logged and the switch still applies to
    /// the running session.
    pub fn set_language(&mut self, language: Language) {
        if language != self.language {
            TranslationMetrics::global().record_language_switch();
        }
        self.language = language;

        if let Err(e) = self.storage.set(LANGUAGE_KEY, language.code()) {
            warn!("Failed to persist language preference: {}", e);
        }
        info!("Language set to {}", language.name());
    }

    /// Translate a dotted key. Returns the key itself when no string is found.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        match self.dictionary().text(key) {
            Some(text) => {
                TranslationMetrics::global().record_hit();
                text
            }
            None => {
                TranslationMetrics::global().record_miss();
                debug!("Missing translation for '{}' ({})", key, self.language);
                key
            }
        }
    }

    /// Translate a dotted key and fill `{placeholder}` tokens.
    ///
    /// Placeholders without a matching argument are left as-is.
    pub fn t_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.t(key).to_string(), |text, (name, value)| {
                text.replace(&format!("{{{}}}", name), value)
            })
    }

    /// Look up a subtree (or leaf) by dotted key. `None` on miss.
    pub fn get_translation(&self, key: &str) -> Option<&'static Value> {
        let value = self.dictionary().lookup(key);
        match value {
            Some(_) => TranslationMetrics::global().record_hit(),
            None => TranslationMetrics::global().record_miss(),
        }
        value
    }

    /// Deserialize a repeating content list (e.g. `projects.items`).
    ///
    /// Missing keys and entries of the wrong shape yield an empty list.
    pub fn items<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let Some(value) = self.get_translation(key) else {
            return Vec::new();
        };

        match serde_json::from_value(value.clone()) {
            Ok(items) => items,
            Err(e) => {
                warn!("Translation '{}' has an unexpected shape: {}", key, e);
                Vec::new()
            }
        }
    }

    fn dictionary(&self) -> &'static Dictionary {
        TranslationStore::get().dictionary(self.language)
    }
}

/// Pick the starting language from the stored value, a hint and the locale.
///
/// An invalid stored value is ignored rather than trusted.
pub fn resolve_initial(
    stored: Option<&str>,
    hint: Option<Language>,
    locale: Option<Language>,
) -> Language {
    stored
        .and_then(|code| Language::from_code(code).ok())
        .or(hint)
        .or(locale)
        .unwrap_or_default()
}
