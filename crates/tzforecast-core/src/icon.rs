//! Condition icon lookup.
//!
//! Forecast samples carry OpenWeatherMap icon codes (`01d`, `10n`, ...). The
//! views expose a numeric icon id instead, resolved through an
//! [`IconResolver`]. Unknown codes never fail a build: they are logged and
//! mapped to the resolver's fallback id.

use tracing::warn;

use crate::error::{ForecastError, Result};

/// Icon id used when a code is not in the table.
pub const FALLBACK_ICON_ID: i32 = 0;

/// Maps a condition icon code to a presentation icon id.
pub trait IconResolver {
    /// Look up a code, reporting a [`ForecastError::LookupMiss`] if unknown.
    fn lookup(&self, code: &str) -> Result<i32>;

    /// Id substituted for unknown codes.
    fn fallback(&self) -> i32 {
        FALLBACK_ICON_ID
    }

    /// Look up a code, substituting [`IconResolver::fallback`] on a miss.
    fn resolve(&self, code: &str) -> i32 {
        match self.lookup(code) {
            Ok(id) => id,
            Err(e) => {
                warn!(code, "{}, using fallback icon", e);
                self.fallback()
            }
        }
    }
}

/// The OpenWeatherMap condition icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherIcon {
    ClearDay = 1,
    ClearNight,
    FewCloudsDay,
    FewCloudsNight,
    ScatteredCloudsDay,
    ScatteredCloudsNight,
    BrokenCloudsDay,
    BrokenCloudsNight,
    ShowerRainDay,
    ShowerRainNight,
    RainDay,
    RainNight,
    ThunderstormDay,
    ThunderstormNight,
    SnowDay,
    SnowNight,
    MistDay,
    MistNight,
}

impl WeatherIcon {
    /// Parse an icon code such as `10d`.
    pub fn from_code(code: &str) -> Result<Self> {
        let icon = match code.trim() {
            "01d" => WeatherIcon::ClearDay,
            "01n" => WeatherIcon::ClearNight,
            "02d" => WeatherIcon::FewCloudsDay,
            "02n" => WeatherIcon::FewCloudsNight,
            "03d" => WeatherIcon::ScatteredCloudsDay,
            "03n" => WeatherIcon::ScatteredCloudsNight,
            "04d" => WeatherIcon::BrokenCloudsDay,
            "04n" => WeatherIcon::BrokenCloudsNight,
            "09d" => WeatherIcon::ShowerRainDay,
            "09n" => WeatherIcon::ShowerRainNight,
            "10d" => WeatherIcon::RainDay,
            "10n" => WeatherIcon::RainNight,
            "11d" => WeatherIcon::ThunderstormDay,
            "11n" => WeatherIcon::ThunderstormNight,
            "13d" => WeatherIcon::SnowDay,
            "13n" => WeatherIcon::SnowNight,
            "50d" => WeatherIcon::MistDay,
            "50n" => WeatherIcon::MistNight,
            _ => return Err(ForecastError::LookupMiss(code.to_string())),
        };
        Ok(icon)
    }

    pub fn id(self) -> i32 {
        self as i32
    }
}

/// Resolver backed by the [`WeatherIcon`] table.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultIconResolver;

impl IconResolver for DefaultIconResolver {
    fn lookup(&self, code: &str) -> Result<i32> {
        WeatherIcon::from_code(code).map(WeatherIcon::id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_resolve() {
        let icons = DefaultIconResolver;
        assert_eq!(icons.resolve("01d"), 1);
        assert_eq!(icons.resolve("01n"), 2);
        assert_eq!(icons.resolve("10d"), 11);
        assert_eq!(icons.resolve("50n"), 18);
    }

    #[test]
    fn unknown_code_is_a_lookup_miss() {
        assert_eq!(
            WeatherIcon::from_code("99x"),
            Err(ForecastError::LookupMiss("99x".to_string()))
        );
    }

    #[test]
    fn unknown_code_resolves_to_fallback() {
        let icons = DefaultIconResolver;
        assert_eq!(icons.resolve("99x"), FALLBACK_ICON_ID);
        assert_eq!(icons.resolve(""), FALLBACK_ICON_ID);
    }

    #[test]
    fn custom_fallback() {
        struct Fixed;
        impl IconResolver for Fixed {
            fn lookup(&self, code: &str) -> Result<i32> {
                Err(ForecastError::LookupMiss(code.to_string()))
            }
            fn fallback(&self) -> i32 {
                -1
            }
        }
        assert_eq!(Fixed.resolve("01d"), -1);
    }

    #[test]
    fn ids_are_distinct() {
        let codes = [
            "01d", "01n", "02d", "02n", "03d", "03n", "04d", "04n", "09d", "09n", "10d", "10n",
            "11d", "11n", "13d", "13n", "50d", "50n",
        ];
        let mut ids: Vec<i32> = codes
            .iter()
            .map(|c| WeatherIcon::from_code(c).unwrap().id())
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), codes.len());
        assert!(!ids.contains(&FALLBACK_ICON_ID));
    }
}
