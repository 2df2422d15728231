//! Hourly and daily view construction.
//!
//! The hourly view is the first [`HOURLY_SAMPLES`] samples, each labeled on
//! its own. The daily view folds every sample into a per-date entry:
//!
//! 1. A sample for a new local date creates an entry from its min, max and
//!    icon.
//! 2. A sample whose min is not below the entry's min changes nothing.
//! 3. A colder sample with a higher max replaces min, max and icon.
//! 4. A colder sample without a higher max replaces the min; the max follows
//!    the [`MergePolicy`]. The icon is kept.
//!
//! Comparisons read the entry's truncated whole-degree values. Every change
//! moves the entry to the end of the output, so the daily view is in
//! last-update order rather than calendar order.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::error::{ForecastError, Result};
use crate::icon::IconResolver;
use crate::models::{
    DailyEntry, Degrees, ForecastViews, HOURLY_SAMPLES, HourlyEntry, HourlyPolicy, MergePolicy,
    Sample, ViewOptions,
};
use crate::normalize::{to_local_date, to_local_time_of_timestamp};

/// Build the hourly view from the first [`HOURLY_SAMPLES`] samples.
///
/// # Examples
///
/// ```
/// use tzforecast_core::prelude::*;
///
/// let samples: Vec<Sample> = (0..8)
///     .map(|i| Sample::new(format!("2023-01-07 {:02}:00:00", i * 3), 40.0, 50.0, "01d"))
///     .collect();
/// let hourly = build_hourly(&samples, &DefaultIconResolver, HourlyPolicy::Strict).unwrap();
///
/// assert_eq!(hourly.len(), 8);
/// assert_eq!(hourly[0].local_time, "6:00 PM");
/// assert_eq!(hourly[0].local_date, "Jan 6");
/// ```
pub fn build_hourly<R>(
    samples: &[Sample],
    icons: &R,
    policy: HourlyPolicy,
) -> Result<Vec<HourlyEntry>>
where
    R: IconResolver + ?Sized,
{
    if policy == HourlyPolicy::Strict && samples.len() < HOURLY_SAMPLES {
        return Err(ForecastError::InsufficientData {
            needed: HOURLY_SAMPLES,
            available: samples.len(),
        });
    }

    samples
        .iter()
        .take(HOURLY_SAMPLES)
        .map(|sample| hourly_entry(sample, icons))
        .collect()
}

fn hourly_entry<R>(sample: &Sample, icons: &R) -> Result<HourlyEntry>
where
    R: IconResolver + ?Sized,
{
    Ok(HourlyEntry {
        local_time: to_local_time_of_timestamp(&sample.timestamp_utc)?,
        local_date: to_local_date(&sample.timestamp_utc)?,
        icon_id: icons.resolve(&sample.icon_code),
        temp_min: Degrees::truncate(sample.temp_min),
        temp_max: Degrees::truncate(sample.temp_max),
    })
}

/// Build the daily view by folding every sample into its local date.
///
/// A malformed timestamp aborts the whole fold; no partial view is returned.
pub fn build_daily<R>(samples: &[Sample], icons: &R, policy: MergePolicy) -> Result<Vec<DailyEntry>>
where
    R: IconResolver + ?Sized,
{
    let mut days = DayIndex::default();

    for sample in samples {
        let date = to_local_date(&sample.timestamp_utc)?;

        let updated = match days.get(&date) {
            None => {
                debug!(%date, ts = %sample.timestamp_utc, "new day");
                Some(DailyEntry {
                    date,
                    icon_id: icons.resolve(&sample.icon_code),
                    min_temp: Degrees::truncate(sample.temp_min),
                    max_temp: Degrees::truncate(sample.temp_max),
                })
            }
            Some(existing) => merge_sample(existing, sample, icons, policy),
        };

        if let Some(entry) = updated {
            days.push(entry);
        }
    }

    Ok(days.into_entries())
}

/// Fold one sample into an existing day. `None` leaves the day untouched.
fn merge_sample<R>(
    existing: &DailyEntry,
    sample: &Sample,
    icons: &R,
    policy: MergePolicy,
) -> Option<DailyEntry>
where
    R: IconResolver + ?Sized,
{
    if existing.min_temp.value().partial_cmp(&sample.temp_min) != Some(Ordering::Greater) {
        debug!(date = %existing.date, ts = %sample.timestamp_utc, "not colder, ignored");
        return None;
    }

    if existing.max_temp.value() < sample.temp_max {
        debug!(date = %existing.date, ts = %sample.timestamp_utc, "range replaced");
        return Some(DailyEntry {
            date: existing.date.clone(),
            icon_id: icons.resolve(&sample.icon_code),
            min_temp: Degrees::truncate(sample.temp_min),
            max_temp: Degrees::truncate(sample.temp_max),
        });
    }

    let max_temp = match policy {
        MergePolicy::ReuseMinAsMax => existing.min_temp,
        MergePolicy::KeepMax => existing.max_temp,
    };
    debug!(date = %existing.date, ts = %sample.timestamp_utc, %policy, "min lowered");
    Some(DailyEntry {
        date: existing.date.clone(),
        icon_id: existing.icon_id,
        min_temp: Degrees::truncate(sample.temp_min),
        max_temp,
    })
}

/// Build both views from one sample sequence.
pub fn build_views<R>(samples: &[Sample], icons: &R, options: ViewOptions) -> Result<ForecastViews>
where
    R: IconResolver + ?Sized,
{
    Ok(ForecastViews {
        hourly: build_hourly(samples, icons, options.hourly)?,
        daily: build_daily(samples, icons, options.merge)?,
    })
}

/// Daily entries keyed by date, ordered by last update.
#[derive(Debug, Default)]
struct DayIndex {
    entries: HashMap<String, Slot>,
    order: BTreeMap<u64, String>,
    next_seq: u64,
}

#[derive(Debug)]
struct Slot {
    seq: u64,
    entry: DailyEntry,
}

impl DayIndex {
    fn get(&self, date: &str) -> Option<&DailyEntry> {
        self.entries.get(date).map(|slot| &slot.entry)
    }

    /// Insert or replace an entry, moving it to the end of the order.
    fn push(&mut self, entry: DailyEntry) {
        let seq = self.next_seq;
        self.next_seq += 1;

        let date = entry.date.clone();
        if let Some(old) = self.entries.insert(date.clone(), Slot { seq, entry }) {
            self.order.remove(&old.seq);
        }
        self.order.insert(seq, date);
    }

    fn into_entries(mut self) -> Vec<DailyEntry> {
        self.order
            .into_values()
            .filter_map(|date| self.entries.remove(&date).map(|slot| slot.entry))
            .collect()
    }
}
