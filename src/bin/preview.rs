//! Preview binary - prints every portfolio section as plain text
//!
//! Usage:
//!   cargo run --bin preview                # Language from PORTFOLIO_LANG or the locale
//!   cargo run --bin preview -- --lang fi   # Force a language
//!
//! Nothing is read from or written to the storage file.

use anyhow::{Context, Result};
use portfolio::config::Config;
use portfolio::game::GameSession;
use portfolio::i18n::{resolve_initial, Language, LanguageContext};
use portfolio::storage::Storage;
use portfolio::ui::sections::{footer_line, plain_text, section_lines};
use portfolio::ui::{App, Section};
use tracing::info;

fn language_arg(args: &[String]) -> Result<Option<Language>> {
    match args.iter().position(|arg| arg == "--lang") {
        Some(i) => {
            let code = args.get(i + 1).context("--lang needs a value (en or fi)")?;
            Ok(Some(Language::from_code(code)?))
        }
        None => Ok(None),
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load environment from .env file
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();
    let config = Config::from_env()?;
    let language = match language_arg(&args)? {
        Some(language) => language,
        None => resolve_initial(None, config.language_override, Language::detect()),
    };
    info!("Previewing in {}", language.name());

    let storage = Storage::in_memory();
    let app = App::new(
        LanguageContext::with_language(storage.clone(), language),
        GameSession::new(storage),
        config.resume_path.clone(),
        config.resume_file(),
    );

    for section in Section::ALL {
        let title = app.language.t(section.nav_key());
        println!("{}", "=".repeat(60));
        println!("{}", title.to_uppercase());
        println!("{}", "=".repeat(60));
        println!("{}", plain_text(&section_lines(section, &app)));
        println!();
    }
    println!("{}", plain_text(&[footer_line(&app)]));

    Ok(())
}
