//! ==============================================================================
//! logging.rs - tracing subscriber setup
//! ==============================================================================
//!
//! diagnostics go to stderr through `tracing`. stdout stays reserved for the
//! progress lines printed by main.rs, so the output can be piped or diffed.
//!
//! ==============================================================================

use crate::config::LoggingConfig;
use anyhow::anyhow;
use tracing::Level;

/// Parses a level name ("trace", "debug", "info", "warn", "error").
pub fn parse_level(name: &str) -> anyhow::Result<Level> {
    name.trim()
        .parse::<Level>()
        .map_err(|e| anyhow!("unknown log level '{}': {}", name, e))
}

/// Install the global fmt subscriber. Returns `false` when one was already
/// installed, in which case this call changes nothing.
pub fn init(config: &LoggingConfig) -> bool {
    let parsed = parse_level(&config.level);
    let level = *parsed.as_ref().unwrap_or(&Level::INFO);

    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if installed {
        if let Err(e) = parsed {
            tracing::warn!("{}, using info", e);
        }
    }
    installed
}
