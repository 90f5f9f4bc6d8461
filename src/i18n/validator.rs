//! Dictionary consistency validation.
//!
//! The two dictionaries must mirror each other: every key path present in one
//! is present in the other, and each pair of leaves carries the same
//! interpolation placeholders (`{name}`). URLs embedded in text should also
//! survive translation unchanged.

use crate::i18n::Dictionary;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a dictionary pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Structural problems that break lookups or interpolation
    pub errors: Vec<String>,

    /// Non-critical issues worth a look
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for a canonical dictionary and its translation.
pub struct TranslationValidator;

// Regex patterns for extraction (cached for performance)
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();
static URL_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Compare a translated dictionary against the canonical one.
    ///
    /// Errors:
    /// - a leaf path exists on only one side
    /// - a leaf pair has different placeholder sets
    ///
    /// Warnings:
    /// - a translated leaf is empty
    /// - a leaf pair embeds different URLs
    pub fn validate(canonical: &Dictionary, translated: &Dictionary) -> ValidationReport {
        let mut report = ValidationReport::new();

        let canonical_paths: BTreeSet<String> = canonical.leaf_paths().into_iter().collect();
        let translated_paths: BTreeSet<String> = translated.leaf_paths().into_iter().collect();

        for path in canonical_paths.difference(&translated_paths) {
            report.errors.push(format!("Missing in translation: {}", path));
        }
        for path in translated_paths.difference(&canonical_paths) {
            report.errors.push(format!("Not in canonical dictionary: {}", path));
        }

        for path in canonical_paths.intersection(&translated_paths) {
            let (Some(original), Some(translation)) = (canonical.text(path), translated.text(path))
            else {
                continue;
            };

            let orig_placeholders = Self::extract_placeholders(original);
            let trans_placeholders = Self::extract_placeholders(translation);
            if orig_placeholders != trans_placeholders {
                report.errors.push(format!(
                    "Placeholder mismatch at {}: canonical has {:?}, translation has {:?}",
                    path, orig_placeholders, trans_placeholders
                ));
            }

            if translation.trim().is_empty() && !original.trim().is_empty() {
                report.warnings.push(format!("Empty translation at {}", path));
            }

            let orig_urls = Self::extract_urls(original);
            let trans_urls = Self::extract_urls(translation);
            if orig_urls != trans_urls {
                report.warnings.push(format!(
                    "URL mismatch at {}: canonical has {} URLs, translation has {} URLs",
                    path,
                    orig_urls.len(),
                    trans_urls.len()
                ));
            }
        }

        report
    }

    /// Extract the set of `{placeholder}` names from text
    pub fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX
            .get_or_init(|| Regex::new(r"\{([a-zA-Z][a-zA-Z0-9_]*)\}").expect("valid regex"));

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
            .collect()
    }

    /// Extract all URLs from text
    fn extract_urls(text: &str) -> Vec<String> {
        let regex = URL_REGEX.get_or_init(|| Regex::new(r"https?://[^\s)\]]+").expect("valid regex"));

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Language, TranslationStore};
    use serde_json::json;

    // ==================== Placeholder Extraction Tests ====================

    #[test]
    fn test_extract_placeholders_single() {
        let placeholders = TranslationValidator::extract_placeholders("Final score: {score}");
        assert_eq!(placeholders.len(), 1);
        assert!(placeholders.contains("score"));
    }

    #[test]
    fn test_extract_placeholders_multiple_and_repeated() {
        let placeholders =
            TranslationValidator::extract_placeholders("{name} lives in {location}, {name}");
        assert_eq!(placeholders.len(), 2);
    }

    #[test]
    fn test_extract_placeholders_ignores_non_identifiers() {
        assert!(TranslationValidator::extract_placeholders("{} and { spaced } and {1x}").is_empty());
    }

    // ==================== URL Extraction Tests ====================

    #[test]
    fn test_extract_urls() {
        let urls = TranslationValidator::extract_urls("See https://example.com/a and (http://x.y)");
        assert_eq!(urls, vec!["https://example.com/a", "http://x.y"]);
    }

    // ==================== validate Tests ====================

    #[test]
    fn test_validate_clean_pair() {
        let en = Dictionary::new(json!({ "game": { "over": "Score: {score}" } }));
        let fi = Dictionary::new(json!({ "game": { "over": "Pisteet: {score}" } }));

        let report = TranslationValidator::validate(&en, &fi);
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_validate_missing_key_is_error() {
        let en = Dictionary::new(json!({ "nav": { "a": "A", "b": "B" } }));
        let fi = Dictionary::new(json!({ "nav": { "a": "A" } }));

        let report = TranslationValidator::validate(&en, &fi);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("nav.b"));
    }

    #[test]
    fn test_validate_extra_key_is_error() {
        let en = Dictionary::new(json!({ "nav": { "a": "A" } }));
        let fi = Dictionary::new(json!({ "nav": { "a": "A", "c": "C" } }));

        let report = TranslationValidator::validate(&en, &fi);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("Not in canonical"));
    }

    #[test]
    fn test_validate_sequence_length_mismatch_is_error() {
        let en = Dictionary::new(json!({ "items": [{ "t": "a" }, { "t": "b" }] }));
        let fi = Dictionary::new(json!({ "items": [{ "t": "a" }] }));

        let report = TranslationValidator::validate(&en, &fi);
        assert!(report.errors.iter().any(|e| e.contains("items.1.t")));
    }

    #[test]
    fn test_validate_placeholder_mismatch_is_error() {
        let en = Dictionary::new(json!({ "greeting": "Hi, I'm {name}." }));
        let fi = Dictionary::new(json!({ "greeting": "Hei, olen {nimi}." }));

        let report = TranslationValidator::validate(&en, &fi);
        assert!(report.has_errors());
        assert!(report.errors[0].contains("greeting"));
    }

    #[test]
    fn test_validate_empty_translation_is_warning() {
        let en = Dictionary::new(json!({ "footer": "All rights reserved." }));
        let fi = Dictionary::new(json!({ "footer": "" }));

        let report = TranslationValidator::validate(&en, &fi);
        assert!(!report.has_errors());
        assert!(report.has_warnings());
    }

    #[test]
    fn test_validate_url_mismatch_is_warning() {
        let en = Dictionary::new(json!({ "link": "Form at https://example.com/form" }));
        let fi = Dictionary::new(json!({ "link": "Lomake" }));

        let report = TranslationValidator::validate(&en, &fi);
        assert!(!report.has_errors());
        assert!(report.warnings[0].contains("URL mismatch"));
    }

    #[test]
    fn test_bundled_dictionaries_validate_cleanly() {
        let store = TranslationStore::get();
        let report = TranslationValidator::validate(
            store.dictionary(Language::English),
            store.dictionary(Language::Finnish),
        );
        assert!(report.is_clean(), "{:?}", report);
    }
}
