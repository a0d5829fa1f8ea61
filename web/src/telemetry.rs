//! Tracing setup for the server binary.
//!
//! The subscriber is installed before the config file is read so that config
//! loading is logged; `LOG_FILTER` from the file is applied afterwards through
//! a reload handle.

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

use coalwatch_common::config::Config;

/// Handle to swap the active filter once the config is known.
pub struct LogFilter {
    handle: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

/// Install the global subscriber. `RUST_LOG` wins when set; otherwise the
/// built-in default filter is used until [`LogFilter::apply`] is called.
pub fn init() -> LogFilter {
    let env_filter = EnvFilter::try_from_default_env().ok();
    let from_env = env_filter.is_some();
    let initial = env_filter.unwrap_or_else(|| EnvFilter::new(Config::default().log_filter));
    let (filter, handle) = reload::Layer::new(initial);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    LogFilter { handle, from_env }
}

impl LogFilter {
    /// Switch to the config's `LOG_FILTER`, unless `RUST_LOG` already decided.
    pub fn apply(&self, config: &Config) -> anyhow::Result<()> {
        if let Some(directives) = configured_filter(self.from_env, config) {
            self.handle
                .reload(EnvFilter::new(directives))
                .context("Cannot apply LOG_FILTER")?;
            tracing::debug!(filter = directives, "Log filter reloaded");
        }
        Ok(())
    }
}

fn configured_filter(from_env: bool, config: &Config) -> Option<&str> {
    let changed = config.log_filter != Config::default().log_filter;
    (!from_env && changed).then_some(config.log_filter.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_filter() {
        let custom = Config {
            log_filter: "coalwatch_web=debug".into(),
            ..Config::default()
        };
        assert_eq!(configured_filter(false, &custom), Some("coalwatch_web=debug"));
        // RUST_LOG takes precedence over the file
        assert_eq!(configured_filter(true, &custom), None);
        // Nothing to swap when the file keeps the default
        assert_eq!(configured_filter(false, &Config::default()), None);
    }

    #[test]
    fn test_default_filter_covers_config_loading() {
        assert!(Config::default().log_filter.contains("coalwatch_common=info"));
    }
}
