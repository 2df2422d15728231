//! Fixed-offset local date and time labels.
//!
//! Forecast timestamps arrive as UTC text (`YYYY-MM-DD HH:MM:SS`). Local
//! labels are derived by shifting the hour by [`UTC_OFFSET_HOURS`]:
//!
//! - the date label decrements the day-of-month when the shifted hour goes
//!   negative, keeping the UTC month (so the 1st can become day `0`);
//! - the time label wraps the shifted hour into `0..24` on its own and is
//!   not reconciled with the date label.
//!
//! There is no DST handling; the offset is fixed.

use std::fmt;

use chrono::{NaiveTime, Timelike};

use crate::error::{ForecastError, Result};

/// Offset from UTC applied to every timestamp, in hours.
pub const UTC_OFFSET_HOURS: i32 = -6;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Month name looked up from a two-digit month token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthLabel {
    Named(&'static str),
    /// Token outside `01`..`12`. Displays as `Invalid Month`.
    Invalid,
}

impl MonthLabel {
    /// Look up a month token such as `"01"`.
    ///
    /// ```
    /// use tzforecast_core::normalize::MonthLabel;
    ///
    /// assert_eq!(MonthLabel::from_token("03"), MonthLabel::Named("Mar"));
    /// assert_eq!(MonthLabel::from_token("13"), MonthLabel::Invalid);
    /// ```
    pub fn from_token(token: &str) -> Self {
        if token.len() != 2 || !token.bytes().all(|b| b.is_ascii_digit()) {
            return MonthLabel::Invalid;
        }
        match token.parse::<usize>() {
            Ok(n @ 1..=12) => MonthLabel::Named(MONTH_NAMES[n - 1]),
            _ => MonthLabel::Invalid,
        }
    }
}

impl fmt::Display for MonthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthLabel::Named(name) => write!(f, "{}", name),
            MonthLabel::Invalid => write!(f, "Invalid Month"),
        }
    }
}

/// Convert a UTC timestamp into a local date label such as `Jan 6`.
///
/// # Examples
///
/// ```
/// use tzforecast_core::normalize::to_local_date;
///
/// assert_eq!(to_local_date("2023-01-07 03:00:00").unwrap(), "Jan 6");
/// assert_eq!(to_local_date("2023-01-07 09:00:00").unwrap(), "Jan 7");
/// ```
pub fn to_local_date(timestamp: &str) -> Result<String> {
    let (date, time) = split_timestamp(timestamp)?;

    let mut parts = date.split('-');
    let (Some(_year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(ForecastError::ParseError(format!(
            "Invalid date '{}'. Expected YYYY-MM-DD",
            date
        )));
    };

    let mut day: i32 = day.parse().map_err(|_| {
        ForecastError::ParseError(format!("Invalid day of month '{}' in '{}'", day, date))
    })?;

    if parse_utc_hour(time)? as i32 + UTC_OFFSET_HOURS < 0 {
        day -= 1;
    }

    Ok(format!("{} {}", MonthLabel::from_token(month), day))
}

/// Convert a UTC time of day (`HH:MM:SS`) into a 12-hour local clock label.
///
/// # Examples
///
/// ```
/// use tzforecast_core::normalize::to_local_time;
///
/// assert_eq!(to_local_time("06:00:00").unwrap(), "12:00 AM");
/// assert_eq!(to_local_time("03:00:00").unwrap(), "9:00 PM");
/// ```
pub fn to_local_time(time_of_day: &str) -> Result<String> {
    let mut hour = parse_utc_hour(time_of_day.trim())? as i32 + UTC_OFFSET_HOURS;
    if hour < 0 {
        hour += 24;
    }
    Ok(clock_label(hour))
}

/// Local clock label for the time-of-day part of a full UTC timestamp.
pub fn to_local_time_of_timestamp(timestamp: &str) -> Result<String> {
    let (_, time) = split_timestamp(timestamp)?;
    to_local_time(time)
}

fn clock_label(hour: i32) -> String {
    match hour {
        0 => "12:00 AM".to_string(),
        12 => "12:00 PM".to_string(),
        13..=24 => format!("{}:00 PM", hour - 12),
        _ => format!("{}:00 AM", hour),
    }
}

fn split_timestamp(timestamp: &str) -> Result<(&str, &str)> {
    timestamp.trim().split_once(' ').ok_or_else(|| {
        ForecastError::ParseError(format!(
            "Invalid timestamp '{}'. Expected YYYY-MM-DD HH:MM:SS",
            timestamp
        ))
    })
}

fn parse_utc_hour(time: &str) -> Result<u32> {
    NaiveTime::parse_from_str(time, "%H:%M:%S")
        .map(|t| t.hour())
        .map_err(|e| {
            ForecastError::ParseError(format!(
                "Invalid time of day '{}'. Error: {}",
                time, e
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_time_boundaries() {
        assert_eq!(to_local_time("00:00:00").unwrap(), "6:00 PM");
        assert_eq!(to_local_time("06:00:00").unwrap(), "12:00 AM");
        assert_eq!(to_local_time("18:00:00").unwrap(), "12:00 PM");
    }

    #[test]
    fn local_time_three_hour_grid() {
        let labels: Vec<String> = ["00", "03", "06", "09", "12", "15", "18", "21"]
            .iter()
            .map(|h| to_local_time(&format!("{h}:00:00")).unwrap())
            .collect();
        assert_eq!(
            labels,
            [
                "6:00 PM", "9:00 PM", "12:00 AM", "3:00 AM", "6:00 AM", "9:00 AM", "12:00 PM",
                "3:00 PM"
            ]
        );
    }

    #[test]
    fn local_time_is_total_over_utc_hours() {
        for hour in 0..24 {
            let label = to_local_time(&format!("{hour:02}:00:00")).unwrap();
            assert!(
                label.ends_with(":00 AM") || label.ends_with(":00 PM"),
                "unexpected label {label} for hour {hour}"
            );
        }
    }

    #[test]
    fn local_time_rejects_malformed_input() {
        assert!(matches!(
            to_local_time("noon"),
            Err(ForecastError::ParseError(_))
        ));
        assert!(to_local_time("25:00:00").is_err());
    }

    #[test]
    fn local_date_rolls_back_before_offset() {
        assert_eq!(to_local_date("2023-01-07 03:00:00").unwrap(), "Jan 6");
        assert_eq!(to_local_date("2023-01-07 05:59:59").unwrap(), "Jan 6");
        assert_eq!(to_local_date("2023-01-07 06:00:00").unwrap(), "Jan 7");
        assert_eq!(to_local_date("2023-01-07 21:00:00").unwrap(), "Jan 7");
    }

    #[test]
    fn local_date_keeps_utc_month_on_rollover() {
        assert_eq!(to_local_date("2023-03-01 00:00:00").unwrap(), "Mar 0");
    }

    #[test]
    fn local_date_unknown_month_is_lenient() {
        assert_eq!(
            to_local_date("2023-13-10 12:00:00").unwrap(),
            "Invalid Month 10"
        );
        assert_eq!(to_local_date("2023-ab-10 12:00:00").unwrap(), "Invalid Month 10");
    }

    #[test]
    fn local_date_rejects_malformed_input() {
        assert!(to_local_date("2023-01-07").is_err());
        assert!(to_local_date("2023-01 03:00:00").is_err());
        assert!(to_local_date("2023-01-xx 03:00:00").is_err());
        assert!(to_local_date("2023-01-07 3pm").is_err());
    }

    #[test]
    fn local_time_of_full_timestamp() {
        assert_eq!(
            to_local_time_of_timestamp("2023-01-07 03:00:00").unwrap(),
            "9:00 PM"
        );
    }

    #[test]
    fn month_tokens() {
        assert_eq!(MonthLabel::from_token("01").to_string(), "Jan");
        assert_eq!(MonthLabel::from_token("12").to_string(), "Dec");
        assert_eq!(MonthLabel::from_token("00"), MonthLabel::Invalid);
        assert_eq!(MonthLabel::from_token("1"), MonthLabel::Invalid);
        assert_eq!(MonthLabel::Invalid.to_string(), "Invalid Month");
    }
}
