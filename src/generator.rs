//! ==============================================================================
//! generator.rs - synthetic time-series generator
//! ==============================================================================
//!
//! purpose:
//!     builds the full dataset: one series per (location, sensor type) pair,
//!     sampled at a fixed step from `end_time - num_days` up to and including
//!     `end_time`.
//!
//! value model:
//!
//! ```text
//!     value = clamp(base * diurnal(hour) + noise, min, max)
//!
//!     - base:    drawn once per series, uniform over [min, max]
//!     - diurnal: sin(hour/24 * 2π - π/2) * 0.4 + 0.8
//!                0.4x at midnight, 1.2x at noon
//!     - noise:   uniform over [-variation, +variation], per reading
//! ```
//!
//! relationships:
//!     - reads: config.rs (GeneratorConfig)
//!     - produces: domain.rs (Dataset, Reading, Metadata)
//!     - used by: main.rs
//!
//! the random source and the end instant are parameters so that a seeded rng
//! and a fixed clock reproduce a dataset exactly.
//!
//! ==============================================================================

use crate::config::{GeneratorConfig, SensorTypeConfig};
use crate::domain::{Dataset, Metadata, Reading, Status};
use chrono::{DateTime, Duration, Timelike, Utc};
use rand::Rng;
use std::f64::consts::PI;

pub const TEMPERATURE: &str = "temperature";

// temperature thresholds, degrees celsius
const ALERT_HIGH: f64 = 30.0;
const ALERT_LOW: f64 = 18.0;
const WARNING_HIGH: f64 = 28.0;
const WARNING_LOW: f64 = 20.0;

/// Generates a dataset ending at the current instant.
pub fn generate_now<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Dataset {
    generate(config, Utc::now(), rng)
}

/// Generates every series for `config`, ending at `end_time`.
///
/// `config` must have passed [`GeneratorConfig::validate`]: an inverted range
/// would make the uniform draws panic, an oversized `num_days` would overflow
/// the window, and a bound finer than cents could round out of range.
pub fn generate<R: Rng>(
    config: &GeneratorConfig,
    end_time: DateTime<Utc>,
    rng: &mut R,
) -> Dataset {
    let start_time = end_time - Duration::days(i64::from(config.num_days));
    let step = Duration::minutes(config.step_minutes());

    let mut readings = Vec::with_capacity(config.expected_total());

    // one id per (location, type) pair: temperature_1, humidity_2, ...
    let mut sequence: u32 = 1;
    for location in &config.locations {
        for sensor in &config.sensor_types {
            let window = Window { start: start_time, end: end_time, step };
            push_series(&mut readings, location, sensor, sequence, window, rng);
            sequence += 1;
        }
    }

    tracing::debug!(
        series = sequence - 1,
        readings = readings.len(),
        "generation finished"
    );

    Dataset {
        metadata: Metadata {
            total_readings: readings.len(),
            start_time,
            end_time,
            locations: config.locations.clone(),
            sensor_types: config.sensor_type_names(),
        },
        sensor_readings: readings,
    }
}

#[derive(Clone, Copy)]
struct Window {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    step: Duration,
}

fn push_series<R: Rng>(
    out: &mut Vec<Reading>,
    location: &str,
    sensor: &SensorTypeConfig,
    sequence: u32,
    window: Window,
    rng: &mut R,
) {
    let range = sensor.range;
    let sensor_id = format!("{}_{}", sensor.name, sequence);
    let base_value = rng.random_range(range.min..=range.max);

    tracing::debug!(%sensor_id, location, base_value, "generating series");

    let mut cursor = window.start;
    while cursor <= window.end {
        let noise = rng.random_range(-sensor.variation..=sensor.variation);
        let raw = base_value * daily_variation(cursor.hour()) + noise;
        let value = round2(range.clamp(raw));

        out.push(Reading {
            sensor_id: sensor_id.clone(),
            sensor_type: sensor.name.clone(),
            value,
            unit: sensor.unit.clone(),
            timestamp: cursor,
            location: location.to_string(),
            status: classify_status(&sensor.name, value),
        });

        cursor += window.step;
    }
}

/// Diurnal multiplier for an hour of day (0..=23).
pub fn daily_variation(hour: u32) -> f64 {
    ((f64::from(hour) / 24.0) * 2.0 * PI - PI / 2.0).sin() * 0.4 + 0.8
}

/// Only temperature carries warning/alert bands; everything else is normal.
pub fn classify_status(sensor_type: &str, value: f64) -> Status {
    if sensor_type != TEMPERATURE {
        return Status::Normal;
    }

    if value > ALERT_HIGH || value < ALERT_LOW {
        Status::Alert
    } else if value > WARNING_HIGH || value < WARNING_LOW {
        Status::Warning
    } else {
        Status::Normal
    }
}

/// Rounds to cents. Monotone, so a value inside a cent-aligned range stays inside.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
