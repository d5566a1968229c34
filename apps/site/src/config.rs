use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_FACT_API_URL: &str = "https://api.bootprint.space/all/earth";

/// Application configuration loaded from environment variables.
/// Every variable has a default, so a bare checkout serves the bundled `site/`.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory holding `partials/`, `data/projects.json` and `static/`.
    pub site_root: PathBuf,
    /// JSON file backing the per-visitor key-value store.
    pub storage_path: PathBuf,
    pub fact_api_url: String,
    /// Animation capability, decided once at startup.
    pub animations: bool,
    pub message_max_len: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            site_root: PathBuf::from(env_or("SITE_ROOT", "site")),
            storage_path: PathBuf::from(env_or("STORAGE_PATH", ".portfolio/storage.json")),
            fact_api_url: env_or("FACT_API_URL", DEFAULT_FACT_API_URL),
            animations: parse_flag(&env_or("ENABLE_ANIMATIONS", "true"))
                .context("ENABLE_ANIMATIONS must be true/false")?,
            message_max_len: env_or("MESSAGE_MAX_LEN", "1000")
                .parse::<usize>()
                .context("MESSAGE_MAX_LEN must be a positive integer")?,
        })
    }

    /// Configuration rooted at `site_root`, used by router tests.
    #[cfg(test)]
    pub fn for_site(site_root: impl Into<PathBuf>) -> Self {
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            site_root: site_root.into(),
            storage_path: PathBuf::from("unused.json"),
            fact_api_url: "http://127.0.0.1:9/all/earth".to_string(),
            animations: true,
            message_max_len: 1000,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("unrecognized flag value '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag_accepts_common_spellings() {
        assert!(parse_flag("true").unwrap());
        assert!(parse_flag(" ON ").unwrap());
        assert!(!parse_flag("0").unwrap());
        assert!(!parse_flag("no").unwrap());
    }

    #[test]
    fn test_parse_flag_rejects_garbage() {
        assert!(parse_flag("maybe").is_err());
    }
}
