//! Synthetic IoT sensor data.
//!
//! [`generator::generate`] walks every (location, sensor type) pair over a
//! fixed time window and returns a [`Dataset`]; [`writer::write_dataset`]
//! persists it as JSON.

pub mod config;
pub mod domain;
pub mod error;
pub mod generator;
pub mod logging;
pub mod writer;

pub use config::{GeneratorConfig, SensorTypeConfig, ValueRange};
pub use domain::{Dataset, Metadata, Reading, Status, StatusCounts};
pub use error::ConfigError;
pub use generator::{generate, generate_now};
pub use writer::{write_dataset, DEFAULT_OUTPUT_FILE};
