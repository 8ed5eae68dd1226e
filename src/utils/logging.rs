//! # Logging
//!
//! Installs a `tracing-subscriber` formatter from [`LoggingConfig`].
//!
//! Dump lines produced through [`crate::utils::dump::TracingSink`] are `DEBUG`
//! events, so `log_level` must be `debug` or lower for them to appear.

use crate::config::LoggingConfig;
use tracing::level_filters::LevelFilter;

/// Initialize the global subscriber, writing to stderr.
///
/// Returns `false` if a global subscriber was already installed; the existing
/// one is kept.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(LevelFilter::from_level(config.log_level))
        .with_ansi(false)
        .with_target(false);

    let installed = if config.json_format {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    };

    if installed {
        tracing::debug!(app = %config.app_name, "Logging initialized");
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_harmless() {
        let config = LoggingConfig::default();
        let _ = init_logging(&config);
        assert!(!init_logging(&config));
    }
}
