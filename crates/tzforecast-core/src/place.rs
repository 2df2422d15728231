//! Place labels for the queried location.
//!
//! Reverse geocoding belongs to the host application; this module only fixes
//! the boundary. A [`PlaceResolver`] turns coordinates into an [`Address`],
//! and [`place_label`] renders it as `locality,adminArea,countryCode`, or
//! [`UNRESOLVED_PLACE`] when nothing resolves.

use std::fmt;

use crate::source::City;

/// Label shown when coordinates cannot be resolved.
pub const UNRESOLVED_PLACE: &str = "ERROR";

/// Degrees of latitude/longitude within which a city's own coordinates
/// count as a match.
const COORD_TOLERANCE: f64 = 0.1;

/// A resolved address. Missing parts are left out of the label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub locality: String,
    pub admin_area: Option<String>,
    pub country_code: Option<String>,
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = std::iter::once(self.locality.as_str())
            .chain(self.admin_area.as_deref())
            .chain(self.country_code.as_deref())
            .collect();
        write!(f, "{}", parts.join(","))
    }
}

/// Maps coordinates to an address.
pub trait PlaceResolver {
    fn resolve(&self, lat: f64, lon: f64) -> Option<Address>;
}

/// Render the label for a coordinate pair.
pub fn place_label<R>(resolver: &R, lat: f64, lon: f64) -> String
where
    R: PlaceResolver + ?Sized,
{
    resolver
        .resolve(lat, lon)
        .map(|address| address.to_string())
        .unwrap_or_else(|| UNRESOLVED_PLACE.to_string())
}

/// Resolves from the `city` block of a forecast document.
///
/// The city matches coordinates near its own; a city without coordinates
/// matches anything.
#[derive(Debug, Clone, Default)]
pub struct CityPlaceResolver {
    city: Option<City>,
}

impl CityPlaceResolver {
    pub fn new(city: Option<City>) -> Self {
        Self { city }
    }

    /// Label for the city's own coordinates.
    pub fn label(&self) -> String {
        let (lat, lon) = self
            .city
            .as_ref()
            .and_then(|c| c.coord)
            .map_or((0.0, 0.0), |coord| (coord.lat, coord.lon));
        place_label(self, lat, lon)
    }
}

impl PlaceResolver for CityPlaceResolver {
    fn resolve(&self, lat: f64, lon: f64) -> Option<Address> {
        let city = self.city.as_ref()?;
        let too_far = city.coord.is_some_and(|coord| {
            (coord.lat - lat).abs() > COORD_TOLERANCE || (coord.lon - lon).abs() > COORD_TOLERANCE
        });
        if too_far {
            return None;
        }
        Some(Address {
            locality: city.name.clone(),
            admin_area: None,
            country_code: city.country.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Coord;

    fn chicago() -> City {
        City {
            name: "Chicago".to_string(),
            country: Some("US".to_string()),
            coord: Some(Coord {
                lat: 41.85,
                lon: -87.65,
            }),
        }
    }

    #[test]
    fn address_label() {
        let address = Address {
            locality: "Chicago".to_string(),
            admin_area: Some("Illinois".to_string()),
            country_code: Some("US".to_string()),
        };
        assert_eq!(address.to_string(), "Chicago,Illinois,US");
    }

    #[test]
    fn address_label_skips_missing_parts() {
        let address = Address {
            locality: "Chicago".to_string(),
            admin_area: None,
            country_code: Some("US".to_string()),
        };
        assert_eq!(address.to_string(), "Chicago,US");
    }

    #[test]
    fn city_resolves_near_its_coordinates() {
        let resolver = CityPlaceResolver::new(Some(chicago()));
        assert_eq!(place_label(&resolver, 41.9, -87.6), "Chicago,US");
        assert_eq!(resolver.label(), "Chicago,US");
    }

    #[test]
    fn far_coordinates_are_unresolved() {
        let resolver = CityPlaceResolver::new(Some(chicago()));
        assert_eq!(place_label(&resolver, 40.71, -74.0), UNRESOLVED_PLACE);
    }

    #[test]
    fn missing_city_is_unresolved() {
        let resolver = CityPlaceResolver::default();
        assert_eq!(place_label(&resolver, 41.85, -87.65), "ERROR");
        assert_eq!(resolver.label(), "ERROR");
    }

    #[test]
    fn city_without_coordinates_matches_anything() {
        let city = City {
            coord: None,
            ..chicago()
        };
        let resolver = CityPlaceResolver::new(Some(city));
        assert_eq!(resolver.label(), "Chicago,US");
        assert_eq!(place_label(&resolver, 0.0, 0.0), "Chicago,US");
    }
}
