//! Structured logging setup.
//!
//! Installs a `tracing-subscriber` fmt subscriber whose level comes from
//! the configured priority. `RUST_LOG` directives, when present, take
//! precedence. Output goes to standard out or, when a log file is
//! configured, is appended to that file.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::{ProtocolError, Result};

const RUST_LOG_ENV: &str = "RUST_LOG";

fn build_filter(config: &ServerConfig) -> EnvFilter {
    let default = LevelFilter::from_level(config.tracing_level());
    match std::env::var(RUST_LOG_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::builder()
            .with_default_directive(default.into())
            .parse_lossy(directives),
        _ => EnvFilter::default().add_directive(default.into()),
    }
}

/// Install the global subscriber.
///
/// Returns `Ok(false)` if a subscriber was already installed, which is
/// common in tests.
pub fn init(config: &ServerConfig) -> Result<bool> {
    let filter = build_filter(config);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let installed = match config.logfile.as_deref() {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| {
                    ProtocolError::ConfigError(format!("Failed to open log file {path}: {e}"))
                })?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
                .is_ok()
        }
        None => builder.try_init().is_ok(),
    };

    if installed {
        info!(level = %config.tracing_level(), "logging initialised");
    }
    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogPriority;

    #[test]
    fn test_debug_mode_overrides_priority() {
        let mut config = ServerConfig::default();
        config.log_level = LogPriority::High;
        assert_eq!(config.tracing_level(), tracing::Level::WARN);
        config.debug_mode = true;
        assert_eq!(config.tracing_level(), tracing::Level::TRACE);
    }

    #[test]
    fn test_init_twice_is_harmless() {
        let config = ServerConfig::default();
        let _ = init(&config).expect("first init");
        assert!(!init(&config).expect("second init"));
    }
}
