//! Logging initialization.

use std::str::FromStr;

use agrimandi_configs::LoggingSettings;
use log::LevelFilter;

/// Initializes the global logger from configuration.
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    let level = LevelFilter::from_str(&settings.level)
        .map_err(|_| anyhow::anyhow!("Invalid log level '{}'", settings.level))?;

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(if settings.log_to_console {
            level
        } else {
            LevelFilter::Off
        })
        .format_timestamp_millis()
        .parse_default_env();

    builder.try_init()?;
    Ok(())
}
