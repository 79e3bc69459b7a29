//! Environment-based application configuration.
//!
//! All variables are optional and default to values that work against the
//! live site, so a bare `coinaf scrape` run needs no `.env` at all.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Site origin listing and detail URLs are built from.
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Directory `show`/`report` resolve bare CSV file names against.
    pub data_dir: PathBuf,
    pub log_level: String,
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable holds an unparseable value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a set variable holds an unparseable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The parsing logic is decoupled from the actual environment so it can be
/// tested with a pure `HashMap` lookup instead of `set_var`/`remove_var`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default =
        |var: &str, default: &str| lookup(var).unwrap_or_else(|_| default.to_owned());

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_owned(),
            reason: e.to_string(),
        })
    };

    let base_url = or_default("COINAF_BASE_URL", "https://sn.coinafrique.com");
    let request_timeout_secs = parse_u64("COINAF_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("COINAF_USER_AGENT", "coinaf/0.1 (category-scraper)");
    let data_dir = PathBuf::from(or_default("COINAF_DATA_DIR", "./data"));
    let log_level = or_default("COINAF_LOG_LEVEL", "info");

    Ok(AppConfig {
        base_url,
        request_timeout_secs,
        user_agent,
        data_dir,
        log_level,
    })
}
