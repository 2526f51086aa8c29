//! ==============================================================================
//! config.rs - generator configuration
//! ==============================================================================
//!
//! purpose:
//!     defines the schema for `generator.toml`.
//!     loads configuration from file or falls back to the built-in defaults,
//!     which reproduce the fixed week-long corpus.
//!
//! structure:
//!     - GeneratorConfig: time span, sampling rate, locations, sensor types.
//!     - SensorTypeConfig: unit label, valid range and noise amplitude per type.
//!     - LoggingConfig: max level for the tracing subscriber.
//!
//! ==============================================================================

use crate::error::ConfigError;
use crate::generator::round2;
use anyhow::Context;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub const DEFAULT_NUM_DAYS: u32 = 7;
pub const DEFAULT_READINGS_PER_HOUR: u32 = 6;
/// one leap year; keeps the time window and the reading buffer bounded
pub const MAX_NUM_DAYS: u32 = 366;
pub const DEFAULT_LOCATIONS: [&str; 4] =
    ["warehouse_a", "warehouse_b", "production_line_1", "cold_storage"];

/// Root configuration structure
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    pub num_days: u32,
    pub readings_per_hour: u32,
    pub locations: Vec<String>,
    pub sensor_types: Vec<SensorTypeConfig>,
    /// fixed rng seed; `None` draws from os entropy
    pub seed: Option<u64>,
    pub logging: LoggingConfig,
}

/// Closed interval of valid values for one sensor type.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SensorTypeConfig {
    pub name: String,
    pub unit: String,
    pub range: ValueRange,
    /// half-width of the uniform noise band
    pub variation: f64,
}

impl SensorTypeConfig {
    pub fn new(name: &str, unit: &str, range: ValueRange, variation: f64) -> Self {
        Self {
            name: name.to_string(),
            unit: unit.to_string(),
            range,
            variation,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string() }
    }
}

/// Where the active configuration came from.
#[derive(Debug, Clone)]
pub enum ConfigOrigin {
    File(PathBuf),
    /// a config file was found but rejected; defaults are in use
    Fallback { path: PathBuf, reason: String },
    Defaults,
}

impl GeneratorConfig {
    /// Load configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to load config {}", path.display()))
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: GeneratorConfig =
            toml::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load with default fallback
    ///
    /// Nothing is logged here: the subscriber is configured from the result,
    /// so the caller reports the origin once logging is up.
    pub fn load_or_default() -> (Self, ConfigOrigin) {
        let paths = [
            PathBuf::from("config").join("generator.toml"),
            PathBuf::from("..").join("config").join("generator.toml"),
        ];

        for path in paths {
            if path.exists() {
                return match Self::load(&path) {
                    Ok(config) => (config, ConfigOrigin::File(path)),
                    Err(e) => (
                        Self::default(),
                        ConfigOrigin::Fallback { path, reason: format!("{:#}", e) },
                    ),
                };
            }
        }

        (Self::default(), ConfigOrigin::Defaults)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_days == 0 {
            return Err(ConfigError::ZeroDays);
        }
        if self.num_days > MAX_NUM_DAYS {
            return Err(ConfigError::TooManyDays { days: self.num_days, max: MAX_NUM_DAYS });
        }
        if !(1..=60).contains(&self.readings_per_hour) {
            return Err(ConfigError::InvalidReadingsPerHour(self.readings_per_hour));
        }
        if self.locations.is_empty() {
            return Err(ConfigError::NoLocations);
        }
        if self.sensor_types.is_empty() {
            return Err(ConfigError::NoSensorTypes);
        }

        let mut seen = HashSet::new();
        for sensor in &self.sensor_types {
            if !seen.insert(sensor.name.as_str()) {
                return Err(ConfigError::DuplicateSensorType(sensor.name.clone()));
            }
            let ValueRange { min, max } = sensor.range;
            if !min.is_finite() || !max.is_finite() || min > max {
                return Err(ConfigError::EmptyRange { name: sensor.name.clone(), min, max });
            }
            // published values are rounded to cents; bounds must survive that
            if let Some(bound) = [min, max].into_iter().find(|b| round2(*b) != *b) {
                return Err(ConfigError::RangePrecision { name: sensor.name.clone(), bound });
            }
            if !sensor.variation.is_finite() || sensor.variation < 0.0 {
                return Err(ConfigError::InvalidVariation {
                    name: sensor.name.clone(),
                    variation: sensor.variation,
                });
            }
        }
        Ok(())
    }

    /// Minutes between consecutive readings of one sensor.
    pub fn step_minutes(&self) -> i64 {
        i64::from(60 / self.readings_per_hour)
    }

    /// Readings produced per (location, sensor type) series.
    pub fn readings_per_series(&self) -> usize {
        let steps = i64::from(self.num_days) * 24 * 60 / self.step_minutes();
        steps as usize + 1
    }

    pub fn expected_total(&self) -> usize {
        self.readings_per_series() * self.locations.len() * self.sensor_types.len()
    }

    pub fn sensor_type_names(&self) -> Vec<String> {
        self.sensor_types.iter().map(|s| s.name.clone()).collect()
    }

    /// Log configuration summary
    pub fn log_summary(&self) {
        tracing::info!(
            num_days = self.num_days,
            readings_per_hour = self.readings_per_hour,
            locations = self.locations.len(),
            sensor_types = self.sensor_types.len(),
            seed = ?self.seed,
            "generator configuration"
        );
        for sensor in &self.sensor_types {
            tracing::debug!(
                "[CONFIG] {} [{}] range {}..{} +/-{}",
                sensor.name,
                sensor.unit,
                sensor.range.min,
                sensor.range.max,
                sensor.variation
            );
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_days: DEFAULT_NUM_DAYS,
            readings_per_hour: DEFAULT_READINGS_PER_HOUR,
            locations: DEFAULT_LOCATIONS.iter().map(|l| l.to_string()).collect(),
            sensor_types: vec![
                SensorTypeConfig::new("temperature", "°C", ValueRange::new(15.0, 35.0), 2.0),
                SensorTypeConfig::new("humidity", "%", ValueRange::new(30.0, 70.0), 5.0),
                SensorTypeConfig::new("vibration", "g", ValueRange::new(0.01, 0.5), 0.05),
                SensorTypeConfig::new("power", "W", ValueRange::new(1000.0, 5000.0), 200.0),
                SensorTypeConfig::new("pressure", "kPa", ValueRange::new(95.0, 110.0), 1.0),
            ],
            seed: None,
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_fixed_corpus() {
        let config = GeneratorConfig::default();

        assert_eq!(config.num_days, 7);
        assert_eq!(config.readings_per_hour, 6);
        assert_eq!(config.locations.len(), 4);
        assert_eq!(
            config.sensor_type_names(),
            ["temperature", "humidity", "vibration", "power", "pressure"]
        );
        assert_eq!(config.step_minutes(), 10);
        assert_eq!(config.readings_per_series(), 1009);
        assert_eq!(config.expected_total(), 20_180);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn example_file_matches_defaults() {
        let example = include_str!("../config/generator.example.toml");
        assert_eq!(GeneratorConfig::from_toml(example).unwrap(), GeneratorConfig::default());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = GeneratorConfig::from_toml("num_days = 2\nseed = 9\n").unwrap();

        assert_eq!(config.num_days, 2);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.readings_per_hour, DEFAULT_READINGS_PER_HOUR);
        assert_eq!(config.sensor_types.len(), 5);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn toml_sensor_types_replace_defaults() {
        let toml = r#"
            locations = ["lab"]

            [logging]
            level = "debug"

            [[sensor_types]]
            name = "co2"
            unit = "ppm"
            range = { min = 400.0, max = 2000.0 }
            variation = 25.0
        "#;
        let config = GeneratorConfig::from_toml(toml).unwrap();

        assert_eq!(config.locations, ["lab"]);
        assert_eq!(config.sensor_type_names(), ["co2"]);
        assert_eq!(config.sensor_types[0].range, ValueRange::new(400.0, 2000.0));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn invalid_toml_is_rejected() {
        assert!(GeneratorConfig::from_toml("num_days = \"seven\"").is_err());
        assert!(GeneratorConfig::from_toml("readings_per_hour = 0").is_err());
        assert!(GeneratorConfig::from_toml("num_days = 100000000").is_err());
    }

    #[test]
    fn cent_bounds_are_accepted() {
        let mut config = GeneratorConfig::default();
        config.sensor_types[2].range = ValueRange::new(0.01, 0.99);
        config.sensor_types[3].range = ValueRange::new(-40.25, 1234.5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_reports_each_problem() {
        let base = GeneratorConfig::default();

        let mut c = base.clone();
        c.num_days = 0;
        assert_eq!(c.validate(), Err(ConfigError::ZeroDays));

        let mut c = base.clone();
        c.num_days = MAX_NUM_DAYS + 1;
        assert_eq!(
            c.validate(),
            Err(ConfigError::TooManyDays { days: MAX_NUM_DAYS + 1, max: MAX_NUM_DAYS })
        );

        let mut c = base.clone();
        c.num_days = MAX_NUM_DAYS;
        assert!(c.validate().is_ok());

        let mut c = base.clone();
        c.readings_per_hour = 61;
        assert_eq!(c.validate(), Err(ConfigError::InvalidReadingsPerHour(61)));

        let mut c = base.clone();
        c.locations.clear();
        assert_eq!(c.validate(), Err(ConfigError::NoLocations));

        let mut c = base.clone();
        c.sensor_types.clear();
        assert_eq!(c.validate(), Err(ConfigError::NoSensorTypes));

        let mut c = base.clone();
        c.sensor_types.push(c.sensor_types[0].clone());
        assert_eq!(
            c.validate(),
            Err(ConfigError::DuplicateSensorType("temperature".to_string()))
        );

        let mut c = base.clone();
        c.sensor_types[1].range = ValueRange::new(70.0, 30.0);
        assert!(matches!(c.validate(), Err(ConfigError::EmptyRange { .. })));

        let mut c = base.clone();
        c.sensor_types[2].range = ValueRange::new(0.001, 0.004);
        assert_eq!(
            c.validate(),
            Err(ConfigError::RangePrecision { name: "vibration".to_string(), bound: 0.001 })
        );

        let mut c = base;
        c.sensor_types[2].variation = -0.1;
        assert!(matches!(c.validate(), Err(ConfigError::InvalidVariation { .. })));
    }

    #[test]
    fn step_uses_integer_division() {
        let config = GeneratorConfig { readings_per_hour: 7, ..GeneratorConfig::default() };

        // 60 / 7 = 8 minutes, 7 * 24 * 60 / 8 = 1260 steps
        assert_eq!(config.step_minutes(), 8);
        assert_eq!(config.readings_per_series(), 1261);
    }

    #[test]
    fn range_clamps_and_contains() {
        let range = ValueRange::new(0.01, 0.5);

        assert_eq!(range.clamp(-1.0), 0.01);
        assert_eq!(range.clamp(0.7), 0.5);
        assert_eq!(range.clamp(0.2), 0.2);
        assert!(range.contains(0.5));
        assert!(!range.contains(0.51));
    }
}
