use anyhow::{Context, Result};

/// Default request body cap: 10 MiB.
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Service configuration loaded from environment variables.
///
/// Only transport concerns live here; the BRF style sheet is fixed in code.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_upload_bytes: parse_upload_limit(optional_env("MAX_UPLOAD_BYTES"))?,
        })
    }
}

fn parse_upload_limit(raw: Option<String>) -> Result<usize> {
    match raw {
        Some(v) => v
            .trim()
            .parse::<usize>()
            .context("MAX_UPLOAD_BYTES must be a byte count"),
        None => Ok(DEFAULT_MAX_UPLOAD_BYTES),
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
