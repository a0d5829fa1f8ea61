//! Configuration parsing – reads a KEY=VALUE file (`coalwatch.conf`).
//!
//! Everything has a default, so a missing file is not an error.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{info, warn};

use crate::clock::ClockSource;
use crate::event::parse_event_date;
use crate::locale::Locale;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "COALWATCH_CONF";

/// Server-side application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Language of every label in the UI.
    pub locale: Locale,
    /// Pins "today" for the calendar, e.g. for demos against the sample data.
    pub today: Option<NaiveDate>,
    /// Default tracing filter when `RUST_LOG` is not set.
    pub log_filter: String,
    /// Directory with static assets (map image, favicon).
    pub assets_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            locale: Locale::default(),
            today: None,
            log_filter: "coalwatch_web=info,coalwatch_common=info,tower_http=info".into(),
            assets_dir: PathBuf::from("public"),
        }
    }
}

impl Config {
    /// Default config path.
    pub fn default_path() -> &'static str {
        "/etc/coalwatch/coalwatch.conf"
    }

    pub fn clock(&self) -> ClockSource {
        ClockSource::from_override(self.today)
    }
}

/// Config path from the first CLI argument, then `COALWATCH_CONF`, then the
/// default location.
pub fn resolve_path(cli_arg: Option<String>) -> PathBuf {
    cli_arg
        .or_else(|| std::env::var(CONFIG_ENV).ok())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(Config::default_path()))
}

/// Load `path` if it exists, defaults otherwise.
pub fn load_or_default(path: &Path) -> Result<Config> {
    if path.exists() {
        load(path)
    } else {
        info!("No config at {}, using defaults", path.display());
        Ok(Config::default())
    }
}

/// Parse a `KEY=VALUE` configuration file.
///
/// Lines starting with `#` are comments.  Values may be optionally
/// double-quoted.  Unknown keys are silently ignored.
pub fn load(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read config: {}", path.display()))?;

    let config = parse_config(&text).with_context(|| format!("Invalid config: {}", path.display()))?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Build a [`Config`] from the text of a config file.
pub fn parse_config(text: &str) -> Result<Config> {
    let map = parse_conf(text);
    let get = |key: &str| -> Option<String> { map.get(key).cloned().filter(|v| !v.is_empty()) };
    let defaults = Config::default();

    let locale = match get("LOCALE") {
        Some(v) => v.parse::<Locale>()?,
        None => defaults.locale,
    };

    let today = match get("TODAY") {
        Some(v) => Some(parse_event_date(&v).context("TODAY must be YYYY-MM-DD")?),
        None => None,
    };
    if let Some(date) = today {
        warn!("Calendar clock pinned to {date}");
    }

    Ok(Config {
        locale,
        today,
        log_filter: get("LOG_FILTER").unwrap_or(defaults.log_filter),
        assets_dir: get("ASSETS_DIR").map(PathBuf::from).unwrap_or(defaults.assets_dir),
    })
}

/// Parse `KEY=VALUE` lines into a map, stripping optional double-quotes.
fn parse_conf(text: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, val)) = line.split_once('=') {
            let key = key.trim();
            let val = val.trim().trim_matches('"');
            map.insert(key.to_string(), val.to_string());
        }
    }
    map
}

// ─── tests ───────────────────────────────────────────────────────────────
