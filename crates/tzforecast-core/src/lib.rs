//! # tzforecast-core
//!
//! Fixed-offset hourly and daily forecast views for Rust.
//!
//! This library turns a sequence of 3-hour UTC forecast samples into the two
//! views a weather screen shows: the next eight samples with local clock
//! labels, and one min/max/icon entry per local calendar day.
//!
//! ## Features
//!
//! - **Fixed offset**: Local labels use a constant UTC-6 shift; no DST.
//! - **Daily fold**: Samples merge into their local day in arrival order with
//!   order-sensitive min/max rules and a configurable [`MergePolicy`].
//! - **Hourly slice**: Strict or clamping behavior for short input.
//! - **Forecast documents**: Reads the OpenWeatherMap forecast JSON shape.
//!
//! ## Example
//!
//! ```rust
//! use tzforecast_core::prelude::*;
//!
//! let samples = vec![
//!     Sample::new("2023-01-14 12:00:00", 40.0, 60.0, "01d"),
//!     Sample::new("2023-01-14 15:00:00", 35.0, 70.0, "10d"),
//! ];
//!
//! let daily = build_daily(&samples, &DefaultIconResolver, MergePolicy::default()).unwrap();
//!
//! assert_eq!(daily[0].date, "Jan 14");
//! assert_eq!(daily[0].min_temp.to_string(), "35°F");
//! assert_eq!(daily[0].max_temp.to_string(), "70°F");
//! ```

pub mod aggregate;
pub mod error;
pub mod icon;
pub mod models;
pub mod normalize;
pub mod place;
pub mod source;

// Re-export commonly used types at the crate root
pub use aggregate::{build_daily, build_hourly, build_views};
pub use error::{ForecastError, Result};
pub use icon::{DefaultIconResolver, IconResolver, WeatherIcon};
pub use models::{
    DailyEntry, Degrees, ForecastViews, HOURLY_SAMPLES, HourlyEntry, HourlyPolicy, MergePolicy,
    Sample, ViewOptions,
};
pub use normalize::{to_local_date, to_local_time};
pub use source::ForecastDocument;

/// Prelude module for convenient imports.
///
/// ```
/// use tzforecast_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::aggregate::{build_daily, build_hourly, build_views};
    pub use crate::error::{ForecastError, Result};
    pub use crate::icon::{DefaultIconResolver, IconResolver};
    pub use crate::models::*;
    pub use crate::normalize::{to_local_date, to_local_time};
    pub use crate::place::{CityPlaceResolver, PlaceResolver, place_label};
    pub use crate::source::ForecastDocument;
}
