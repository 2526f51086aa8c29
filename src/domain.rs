use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// health classification attached to every reading
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Normal,
    Warning,
    Alert,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Normal => "normal",
            Status::Warning => "warning",
            Status::Alert => "alert",
        };
        f.write_str(s)
    }
}

/// one synthetic data point
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Reading {
    /// "{type}_{sequence}", e.g. "temperature_1"
    pub sensor_id: String,

    #[serde(rename = "type")]
    pub sensor_type: String,

    /// clamped to the type's range, rounded to 2 decimals
    pub value: f64,

    pub unit: String,

    #[serde(with = "iso_utc")]
    pub timestamp: DateTime<Utc>,

    pub location: String,

    pub status: Status,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Metadata {
    pub total_readings: usize,
    #[serde(with = "iso_utc")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "iso_utc")]
    pub end_time: DateTime<Utc>,
    pub locations: Vec<String>,
    pub sensor_types: Vec<String>,
}

/// the complete generation result, serialized as the output document
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Dataset {
    /// locations outer, sensor types middle, time inner
    pub sensor_readings: Vec<Reading>,
    pub metadata: Metadata,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub normal: usize,
    pub warning: usize,
    pub alert: usize,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.sensor_readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sensor_readings.is_empty()
    }

    /// The time series of a single sensor, in generation order.
    pub fn readings_for<'a>(&'a self, sensor_id: &'a str) -> impl Iterator<Item = &'a Reading> + 'a {
        self.sensor_readings
            .iter()
            .filter(move |r| r.sensor_id == sensor_id)
    }

    pub fn status_counts(&self) -> StatusCounts {
        self.sensor_readings
            .iter()
            .fold(StatusCounts::default(), |mut counts, r| {
                match r.status {
                    Status::Normal => counts.normal += 1,
                    Status::Warning => counts.warning += 1,
                    Status::Alert => counts.alert += 1,
                }
                counts
            })
    }
}

/// Formats an instant as ISO-8601 with microseconds and exactly one `Z`.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

mod iso_utc {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_timestamp(ts))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
