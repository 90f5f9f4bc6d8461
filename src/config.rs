use crate::contact::DEFAULT_ENDPOINT;
use crate::i18n::Language;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Résumé file served next to the portfolio
pub const RESUME_PATH: &str = "/Satyam_Arora_CV_English.pdf";

#[derive(Debug, Clone)]
pub struct Config {
    // Contact
    pub contact_endpoint: String,

    // Storage
    pub data_dir: PathBuf,
    pub log_file: PathBuf,

    // Assets
    pub asset_dir: PathBuf,
    pub resume_path: String,

    // Language
    pub language_override: Option<Language>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let data_dir = std::env::var("PORTFOLIO_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        Ok(Self {
            // Contact
            contact_endpoint: std::env::var("CONTACT_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),

            // Storage
            log_file: std::env::var("PORTFOLIO_LOG_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| data_dir.join("portfolio.log")),
            data_dir,

            // Assets
            asset_dir: std::env::var("PORTFOLIO_ASSET_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("public")),
            resume_path: RESUME_PATH.to_string(),

            // Language
            language_override: match std::env::var("PORTFOLIO_LANG") {
                Ok(code) if !code.trim().is_empty() => Some(
                    Language::from_code(&code).context("PORTFOLIO_LANG must be 'en' or 'fi'")?,
                ),
                _ => None,
            },
        })
    }

    /// Local file backing the résumé link
    pub fn resume_file(&self) -> PathBuf {
        self.asset_dir.join(self.resume_path.trim_start_matches('/'))
    }
}
