use anyhow::{ensure, Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Max generation attempts per extraction request (malformed-output retries).
    pub extraction_max_attempts: u32,
    /// Per-call deadline for generation requests, in seconds.
    pub generation_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            extraction_max_attempts: positive_u32(
                "EXTRACTION_MAX_ATTEMPTS",
                &std::env::var("EXTRACTION_MAX_ATTEMPTS").unwrap_or_else(|_| "2".to_string()),
            )?,
            generation_timeout_secs: positive_u64(
                "GENERATION_TIMEOUT_SECS",
                &std::env::var("GENERATION_TIMEOUT_SECS").unwrap_or_else(|_| "60".to_string()),
            )?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Parses a numeric knob that must be at least 1.
fn positive_u32(name: &str, raw: &str) -> Result<u32> {
    let value = raw
        .parse::<u32>()
        .with_context(|| format!("{name} must be a positive integer"))?;
    ensure!(value > 0, "{name} must be a positive integer, got 0");
    Ok(value)
}

fn positive_u64(name: &str, raw: &str) -> Result<u64> {
    let value = raw
        .parse::<u64>()
        .with_context(|| format!("{name} must be a positive integer"))?;
    ensure!(value > 0, "{name} must be a positive integer, got 0");
    Ok(value)
}
