//! Lookup metrics.
//!
//! Counts how often dotted-key lookups resolve and how often they fall back.
//! A fallback is never an error, so these counters are the only place a
//! missing translation becomes visible.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Lookup counters. One global instance backs every `LanguageContext`.
pub struct TranslationMetrics {
    /// Lookups that found a value of the requested shape
    hits: AtomicUsize,

    /// Lookups that fell back (key returned, or `None`)
    misses: AtomicUsize,

    /// Explicit language changes
    language_switches: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<TranslationMetrics> = OnceLock::new();

impl TranslationMetrics {
    /// Create a detached set of counters, all zero.
    pub fn new() -> Self {
        Self {
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
            language_switches: AtomicUsize::new(0),
        }
    }

    /// Get the global metrics instance used by every `LanguageContext`.
    pub fn global() -> &'static TranslationMetrics {
        METRICS.get_or_init(TranslationMetrics::new)
    }

    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_language_switch(&self) {
        self.language_switches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn language_switches(&self) -> usize {
        self.language_switches.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.hits();
        let misses = self.misses();
        let total = hits + misses;
        let hit_rate = if total > 0 {
            (hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            hits,
            misses,
            hit_rate,
            language_switches: self.language_switches(),
        }
    }
}

impl Default for TranslationMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of the lookup counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub hits: usize,
    pub misses: usize,

    /// Hit rate as a percentage (0-100)
    pub hit_rate: f64,

    pub language_switches: usize,
}
