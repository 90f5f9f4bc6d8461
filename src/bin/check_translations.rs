//! Checks that the bundled dictionaries mirror each other
//!
//! Usage:
//!   cargo run --bin check-translations              # Fail on errors
//!   cargo run --bin check-translations -- --strict  # Fail on warnings too

use anyhow::{bail, Result};
use portfolio::i18n::{Language, TranslationStore, TranslationValidator};
use tracing::{info, warn};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let strict = std::env::args().any(|arg| arg == "--strict");

    let store = TranslationStore::get();
    let canonical = store.dictionary(Language::English);
    let translated = store.dictionary(Language::Finnish);
    info!(
        "Comparing {} English and {} Finnish strings",
        canonical.leaf_paths().len(),
        translated.leaf_paths().len()
    );

    let report = TranslationValidator::validate(canonical, translated);

    for error in &report.errors {
        println!("error: {}", error);
    }
    for warning in &report.warnings {
        println!("warning: {}", warning);
    }

    if report.has_errors() {
        bail!("{} translation error(s)", report.errors.len());
    }
    if strict && report.has_warnings() {
        bail!("{} translation warning(s) in strict mode", report.warnings.len());
    }
    if report.has_warnings() {
        warn!("{} warning(s)", report.warnings.len());
    } else {
        println!("Dictionaries are consistent");
    }
    Ok(())
}
