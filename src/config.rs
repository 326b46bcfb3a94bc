//! Runtime configuration: `.env` / bundled `config.env` loading and the
//! settings the client reads from the environment.

use anyhow::{Context, bail};
use once_cell::sync::OnceCell;
use reqwest::Url;
use std::str::FromStr;
use tracing::Level;

/// Bundled config for builds that ship without a `.env` (wasm, mobile)
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const API_URL_VAR: &str = "CALIBRATION_API_URL";
pub const LOG_LEVEL_VAR: &str = "CALIBRATION_LOG";

static CURRENT: OnceCell<ClientConfig> = OnceCell::new();

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub api_base_url: Url,
    pub log_level: Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            log_level: Level::INFO,
        }
    }
}

/// A configuration plus the problems hit while building it. Invalid values
/// fall back to defaults so the interface still starts.
pub struct LoadedConfig {
    pub config: ClientConfig,
    pub problems: Vec<anyhow::Error>,
}

impl ClientConfig {
    pub fn from_env() -> LoadedConfig {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> LoadedConfig {
        let mut config = ClientConfig::default();
        let mut problems = Vec::new();

        if let Some(raw) = lookup(API_URL_VAR) {
            match parse_api_url(&raw) {
                Ok(url) => config.api_base_url = url,
                Err(err) => problems.push(err),
            }
        }
        if let Some(raw) = lookup(LOG_LEVEL_VAR) {
            match Level::from_str(raw.trim()).with_context(|| format!("{LOG_LEVEL_VAR}={raw:?}")) {
                Ok(level) => config.log_level = level,
                Err(err) => problems.push(err),
            }
        }

        LoadedConfig { config, problems }
    }
}

fn parse_api_url(raw: &str) -> anyhow::Result<Url> {
    let url = Url::parse(raw.trim())
        .with_context(|| format!("{API_URL_VAR}={raw:?} is not a valid URL"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("{API_URL_VAR}={raw:?} must use http or https");
    }
    Ok(url)
}

/// Stores the configuration the interface reads on mount. Only the first
/// call has an effect.
pub fn install(config: ClientConfig) {
    let _ = CURRENT.set(config);
}

pub fn current() -> ClientConfig {
    CURRENT.get().cloned().unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_dotenv() {
    // First try to load from .env file (desktop dev)
    if dotenvy::dotenv().is_ok() {
        return;
    }

    // Fall back to bundled config (mobile builds)
    load_bundled_config();
}

#[cfg(target_arch = "wasm32")]
pub fn load_dotenv() {
    load_bundled_config();
}

fn load_bundled_config() {
    for (key, value) in parse_env_lines(BUNDLED_CONFIG) {
        // Only set if not already set (allow env override)
        if std::env::var(key).is_err() {
            // SAFETY: called from `main` before the runtime spawns any threads
            unsafe {
                std::env::set_var(key, value);
            }
        }
    }
}

/// `KEY=VALUE` pairs, skipping blank lines and `#` comments.
fn parse_env_lines(source: &str) -> impl Iterator<Item = (&str, &str)> {
    source.lines().filter_map(|line| {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }
        let (key, value) = line.split_once('=')?;
        Some((key.trim(), value.trim()))
    })
}
