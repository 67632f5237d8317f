//! Geographic location value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// A geographic location with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

/// Error type for invalid coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidCoordinates;

impl fmt::Display for InvalidCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180"
        )
    }
}

impl std::error::Error for InvalidCoordinates {}

impl GeoLocation {
    /// Create a new location with validation
    ///
    /// # Errors
    ///
    /// Returns `InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180]
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinates> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidCoordinates);
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a location without validation (for trusted sources)
    ///
    /// # Safety
    ///
    /// Caller must ensure latitude is in [-90, 90] and longitude in [-180, 180]
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parse a `"latitude,longitude"` pair string
    ///
    /// This is the wire format produced by the geocoding step and consumed
    /// by the forecast assembly step.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinatePair` if the string does not
    /// contain exactly two comma-separated numeric parts, or if the parsed
    /// values fall outside the valid ranges.
    pub fn parse_pair(pair: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidCoordinatePair(pair.to_string());

        let mut parts = pair.split(',');
        let (Some(lat), Some(lon), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };

        let latitude: f64 = lat.trim().parse().map_err(|_| invalid())?;
        let longitude: f64 = lon.trim().parse().map_err(|_| invalid())?;

        Self::new(latitude, longitude).map_err(DomainError::from)
    }

    /// Format as a `"latitude,longitude"` pair string
    #[must_use]
    pub fn to_pair(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

impl FromStr for GeoLocation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_pair(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        let loc = GeoLocation::new(48.85, 2.35).expect("valid coordinates");
        assert!((loc.latitude() - 48.85).abs() < f64::EPSILON);
        assert!((loc.longitude() - 2.35).abs() < f64::EPSILON);
    }

    #[test]
    fn test_boundary_coordinates() {
        assert!(GeoLocation::new(90.0, 180.0).is_ok());
        assert!(GeoLocation::new(-90.0, -180.0).is_ok());
        assert!(GeoLocation::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_latitude() {
        assert!(GeoLocation::new(91.0, 0.0).is_err());
        assert!(GeoLocation::new(-91.0, 0.0).is_err());
    }

    #[test]
    fn test_invalid_longitude() {
        assert!(GeoLocation::new(0.0, 181.0).is_err());
        assert!(GeoLocation::new(0.0, -181.0).is_err());
    }

    #[test]
    fn test_parse_pair() {
        let loc = GeoLocation::parse_pair("48.85,2.35").expect("valid pair");
        assert!((loc.latitude() - 48.85).abs() < f64::EPSILON);
        assert!((loc.longitude() - 2.35).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_pair_with_whitespace() {
        let loc = GeoLocation::parse_pair(" 30.27 , -97.74 ").expect("valid pair");
        assert!((loc.latitude() - 30.27).abs() < f64::EPSILON);
        assert!((loc.longitude() + 97.74).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_pair_non_numeric() {
        assert!(matches!(
            GeoLocation::parse_pair("abc"),
            Err(DomainError::InvalidCoordinatePair(_))
        ));
        assert!(matches!(
            GeoLocation::parse_pair("48.85,north"),
            Err(DomainError::InvalidCoordinatePair(_))
        ));
    }

    #[test]
    fn test_parse_pair_wrong_arity() {
        assert!(GeoLocation::parse_pair("48.85").is_err());
        assert!(GeoLocation::parse_pair("48.85,2.35,100").is_err());
        assert!(GeoLocation::parse_pair("").is_err());
    }

    #[test]
    fn test_parse_pair_out_of_range() {
        assert!(matches!(
            GeoLocation::parse_pair("123.0,2.35"),
            Err(DomainError::InvalidCoordinates(_))
        ));
    }

    #[test]
    fn test_pair_round_trip() {
        let loc = GeoLocation::new(30.2672, -97.7431).expect("valid");
        let parsed = GeoLocation::parse_pair(&loc.to_pair()).expect("round trip");
        assert_eq!(loc, parsed);
    }

    #[test]
    fn test_from_str() {
        let loc: GeoLocation = "52.52,13.405".parse().expect("valid");
        assert!((loc.latitude() - 52.52).abs() < f64::EPSILON);
    }

    #[test]
    fn test_display() {
        let loc = GeoLocation::new(52.52, 13.405).expect("valid");
        let display = format!("{loc}");
        assert!(display.contains("52.52"));
        assert!(display.contains("13.405"));
    }

    #[test]
    fn test_serialization() {
        let loc = GeoLocation::new(52.52, 13.405).expect("valid");
        let json = serde_json::to_string(&loc).expect("serialize");
        assert!(json.contains("\"latitude\":52.52"));
        assert!(json.contains("\"longitude\":13.405"));

        let deserialized: GeoLocation = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(loc, deserialized);
    }
}
