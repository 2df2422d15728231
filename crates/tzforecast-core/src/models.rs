//! Core data types for tzforecast.
//!
//! This module defines the primary types used throughout the library:
//! - [`Sample`] - One raw 3-hour forecast point
//! - [`Degrees`] - A truncated whole-degree Fahrenheit temperature
//! - [`HourlyEntry`] - One row of the hourly view
//! - [`DailyEntry`] - One aggregated day of the daily view
//! - [`HourlyPolicy`] - How the hourly view handles short input
//! - [`MergePolicy`] - How a colder sample narrows an existing day
//! - [`ForecastViews`] - Both views computed from one sample sequence

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// Number of samples the hourly view shows.
pub const HOURLY_SAMPLES: usize = 8;

/// One raw forecast point as delivered by the forecast source.
///
/// Samples arrive in ascending timestamp order; the daily fold relies on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// UTC timestamp, `YYYY-MM-DD HH:MM:SS`.
    pub timestamp_utc: String,
    /// Minimum temperature in degrees Fahrenheit.
    pub temp_min: f64,
    /// Maximum temperature in degrees Fahrenheit.
    pub temp_max: f64,
    /// Condition icon code (e.g. `10d`).
    pub icon_code: String,
}

impl Sample {
    pub fn new(
        timestamp_utc: impl Into<String>,
        temp_min: f64,
        temp_max: f64,
        icon_code: impl Into<String>,
    ) -> Self {
        Self {
            timestamp_utc: timestamp_utc.into(),
            temp_min,
            temp_max,
            icon_code: icon_code.into(),
        }
    }
}

/// A whole-degree Fahrenheit temperature.
///
/// The fractional part is dropped toward zero, so `-0.5` keeps its sign and
/// renders as `-0°F`. Displays and serializes as the label, e.g. `42°F`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Degrees(f64);

impl Degrees {
    /// Truncate a raw reading to whole degrees.
    pub fn truncate(raw: f64) -> Self {
        Degrees(raw.trunc())
    }

    /// Numeric value of the label.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°F", self.0)
    }
}

impl Serialize for Degrees {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One row of the hourly view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyEntry {
    /// Local clock time, e.g. `9:00 PM`.
    pub local_time: String,
    /// Local date label, e.g. `Jan 6`.
    pub local_date: String,
    pub icon_id: i32,
    pub temp_min: Degrees,
    pub temp_max: Degrees,
}

/// One aggregated day of the daily view, keyed by `date`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyEntry {
    /// Local date label, e.g. `Jan 14`.
    pub date: String,
    pub icon_id: i32,
    pub min_temp: Degrees,
    pub max_temp: Degrees,
}

/// How the hourly view handles fewer than [`HOURLY_SAMPLES`] samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HourlyPolicy {
    /// Fail with [`crate::ForecastError::InsufficientData`].
    #[default]
    Strict,
    /// Return as many entries as there are samples.
    Clamp,
}

impl fmt::Display for HourlyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HourlyPolicy::Strict => write!(f, "strict"),
            HourlyPolicy::Clamp => write!(f, "clamp"),
        }
    }
}

/// What a day's max becomes when a colder sample arrives whose max does not
/// exceed the day's current max.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum MergePolicy {
    /// The day's previous min becomes its max. Legacy behavior.
    #[default]
    #[serde(rename = "reuse_min")]
    ReuseMinAsMax,
    /// The day's previous max is kept.
    #[serde(rename = "keep_max")]
    KeepMax,
}

impl fmt::Display for MergePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergePolicy::ReuseMinAsMax => write!(f, "reuse_min"),
            MergePolicy::KeepMax => write!(f, "keep_max"),
        }
    }
}

/// Options for [`crate::aggregate::build_views`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewOptions {
    pub hourly: HourlyPolicy,
    pub merge: MergePolicy,
}

/// Both views computed from one sample sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastViews {
    pub hourly: Vec<HourlyEntry>,
    pub daily: Vec<DailyEntry>,
}
