//! Forecast document reader.
//!
//! Reads the OpenWeatherMap 5-day / 3-hour forecast JSON into [`Sample`]s.
//! Only the fields the views need are modeled; everything else in the
//! document is ignored.
//!
//! ```json
//! {
//!   "city": { "name": "Chicago", "country": "US", "coord": { "lat": 41.85, "lon": -87.65 } },
//!   "list": [
//!     { "dt_txt": "2023-01-07 03:00:00",
//!       "main": { "temp_min": 38.1, "temp_max": 41.9 },
//!       "weather": [ { "icon": "01n" } ] }
//!   ]
//! }
//! ```

use serde::Deserialize;

use crate::error::{ForecastError, Result};
use crate::models::Sample;

/// A forecast response: the queried city and its sample list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastDocument {
    #[serde(default)]
    pub city: Option<City>,
    pub list: Vec<ForecastItem>,
}

/// One 3-hour entry of the forecast list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastItem {
    pub dt_txt: String,
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<Condition>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MainReadings {
    pub temp_min: f64,
    pub temp_max: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Condition {
    pub icon: String,
}

/// The city block of a forecast response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct City {
    pub name: String,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub coord: Option<Coord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coord {
    pub lat: f64,
    pub lon: f64,
}

impl ForecastDocument {
    /// Parse a forecast document from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| {
            ForecastError::ParseError(format!("Invalid forecast document. Error: {}", e))
        })
    }

    /// The document's entries as samples, in document order.
    ///
    /// The first `weather` condition supplies the icon code; an entry without
    /// one is rejected.
    pub fn samples(&self) -> Result<Vec<Sample>> {
        self.list
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let condition = item.weather.first().ok_or_else(|| {
                    ForecastError::ParseError(format!(
                        "Forecast entry {} ('{}') has no weather condition",
                        index, item.dt_txt
                    ))
                })?;
                Ok(Sample::new(
                    item.dt_txt.as_str(),
                    item.main.temp_min,
                    item.main.temp_max,
                    condition.icon.as_str(),
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOCUMENT: &str = r#"{
        "cod": "200",
        "cnt": 2,
        "list": [
            {
                "dt": 1673060400,
                "main": { "temp": 40.1, "temp_min": 38.1, "temp_max": 41.9, "humidity": 80 },
                "weather": [ { "id": 800, "main": "Clear", "icon": "01n" }, { "icon": "50n" } ],
                "dt_txt": "2023-01-07 03:00:00"
            },
            {
                "main": { "temp_min": 36.5, "temp_max": 39.0 },
                "weather": [ { "icon": "04n" } ],
                "dt_txt": "2023-01-07 06:00:00"
            }
        ],
        "city": { "id": 4887398, "name": "Chicago", "country": "US",
                  "coord": { "lat": 41.85, "lon": -87.65 }, "timezone": -21600 }
    }"#;

    #[test]
    fn parse_document() {
        let doc = ForecastDocument::from_json(DOCUMENT).unwrap();
        assert_eq!(doc.list.len(), 2);

        let city = doc.city.as_ref().unwrap();
        assert_eq!(city.name, "Chicago");
        assert_eq!(city.country.as_deref(), Some("US"));
        assert_eq!(city.coord, Some(Coord { lat: 41.85, lon: -87.65 }));
    }

    #[test]
    fn samples_use_first_condition() {
        let doc = ForecastDocument::from_json(DOCUMENT).unwrap();
        let samples = doc.samples().unwrap();

        assert_eq!(
            samples,
            vec![
                Sample::new("2023-01-07 03:00:00", 38.1, 41.9, "01n"),
                Sample::new("2023-01-07 06:00:00", 36.5, 39.0, "04n"),
            ]
        );
    }

    #[test]
    fn entry_without_condition_is_rejected() {
        let doc = ForecastDocument::from_json(
            r#"{ "list": [ { "dt_txt": "2023-01-07 03:00:00",
                             "main": { "temp_min": 1.0, "temp_max": 2.0 },
                             "weather": [] } ] }"#,
        )
        .unwrap();
        assert!(matches!(doc.samples(), Err(ForecastError::ParseError(_))));
    }

    #[test]
    fn empty_list() {
        let doc = ForecastDocument::from_json(r#"{ "list": [] }"#).unwrap();
        assert!(doc.city.is_none());
        assert!(doc.samples().unwrap().is_empty());
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        assert!(matches!(
            ForecastDocument::from_json("{ not json"),
            Err(ForecastError::ParseError(_))
        ));
        assert!(ForecastDocument::from_json(r#"{ "city": null }"#).is_err());
    }
}
