//! Language type: the two supported content languages.
//!
//! The set of languages is closed, so invalid values are ruled out at the type
//! level. Conversion from untrusted strings (stored preferences, environment)
//! goes through `from_code` / `from_locale`.

use anyhow::{bail, Result};
use std::fmt;

/// Environment variables consulted for the user's locale, in POSIX precedence order.
const LOCALE_VARS: [&str; 4] = ["LANGUAGE", "LC_ALL", "LC_MESSAGES", "LANG"];

/// A supported content language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// English, the canonical language and the default.
    #[default]
    English,
    /// Finnish.
    Finnish,
}

impl Language {
    /// Every supported language, in menu order.
    pub const ALL: [Language; 2] = [Language::English, Language::Finnish];

    /// Create a Language from a language code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code ("en" or "fi")
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is supported
    /// * `Err` for any other input, including the empty string
    pub fn from_code(code: &str) -> Result<Language> {
        match code {
            "en" => Ok(Language::English),
            "fi" => Ok(Language::Finnish),
            "" => bail!("Empty language code"),
            other => bail!("Unknown language code: '{}'", other),
        }
    }

    /// Map a locale tag such as `fi_FI.UTF-8` or `en-US` to a language.
    ///
    /// Finnish locales select Finnish; any other non-empty locale selects
    /// English. Returns `None` only for an empty tag.
    pub fn from_locale(locale: &str) -> Option<Language> {
        let locale = locale.trim();
        if locale.is_empty() {
            return None;
        }

        if locale.to_lowercase().starts_with("fi") {
            Some(Language::Finnish)
        } else {
            Some(Language::English)
        }
    }

    /// Detect the language from the process locale.
    ///
    /// The first non-empty variable of `LANGUAGE`, `LC_ALL`, `LC_MESSAGES`,
    /// `LANG` is the effective locale. `LANGUAGE` may hold a colon-separated
    /// list; only its first entry counts.
    pub fn detect() -> Option<Language> {
        LOCALE_VARS.iter().find_map(|var| {
            let value = std::env::var(var).ok()?;
            let first = value.split(':').next().unwrap_or_default();
            Language::from_locale(first)
        })
    }

    /// ISO 639-1 code, also the value persisted in storage.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Finnish => "fi",
        }
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Finnish => "Finnish",
        }
    }

    /// Name of the language in the language itself, as shown in the menu.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Finnish => "Suomi",
        }
    }

    /// The other language.
    pub fn toggled(&self) -> Language {
        match self {
            Language::English => Language::Finnish,
            Language::Finnish => Language::English,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
