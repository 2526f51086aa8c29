//! ==============================================================================
//! error.rs - configuration error taxonomy
//! ==============================================================================
//!
//! purpose:
//!     typed errors returned by `GeneratorConfig::validate`.
//!     generation itself cannot fail once a config has been validated, so this
//!     is the only error type the library defines. file and parse failures in
//!     the binary stay as `anyhow` errors.
//!
//! ==============================================================================

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("sensor type '{name}' has an empty or non-finite range [{min}, {max}]")]
    EmptyRange { name: String, min: f64, max: f64 },

    #[error("sensor type '{name}' has invalid noise variation {variation}")]
    InvalidVariation { name: String, variation: f64 },

    #[error("sensor type '{name}' range bound {bound} has more than two decimals")]
    RangePrecision { name: String, bound: f64 },

    #[error("num_days must be at least 1")]
    ZeroDays,

    #[error("num_days must be at most {max}, got {days}")]
    TooManyDays { days: u32, max: u32 },

    #[error("readings_per_hour must be between 1 and 60, got {0}")]
    InvalidReadingsPerHour(u32),

    #[error("at least one location is required")]
    NoLocations,

    #[error("at least one sensor type is required")]
    NoSensorTypes,

    #[error("sensor type '{0}' is defined more than once")]
    DuplicateSensorType(String),
}
