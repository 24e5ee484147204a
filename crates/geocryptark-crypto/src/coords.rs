//! Coordinate validation and the canonical text form hashed into geo-hashes.

use serde::{Deserialize, Serialize};

use crate::error::{GeoCryptError, GeoCryptResult};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub lat: f64,
    pub lng: f64,
}

impl GeoCoordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        validate_coordinates(self.lat, self.lng)
    }

    /// Fails with [`GeoCryptError::InvalidCoordinates`] when out of range.
    pub fn validate(&self) -> GeoCryptResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(GeoCryptError::InvalidCoordinates {
                lat: self.lat,
                lng: self.lng,
            })
        }
    }

    /// Canonical JSON text `{"lat":<lat>,"lng":<lng>}`.
    ///
    /// Numbers use the shortest decimal that round-trips, without a trailing
    /// `.0` on integral values, `0` for negative zero, and exponent notation
    /// below `1e-6`. The output must stay byte-identical across releases:
    /// every geo-hash depends on it.
    pub fn canonical_json(&self) -> String {
        format!(
            "{{\"lat\":{},\"lng\":{}}}",
            canonical_number(self.lat),
            canonical_number(self.lng)
        )
    }
}

impl From<(f64, f64)> for GeoCoordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

/// Latitude in [-90, 90] and longitude in [-180, 180], bounds inclusive.
/// Non-finite values are rejected.
pub fn validate_coordinates(lat: f64, lng: f64) -> bool {
    (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng)
}

fn canonical_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.abs() < 1e-6 {
        format!("{value:e}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_samples() {
        assert!(validate_coordinates(0.0, 0.0));
        assert!(validate_coordinates(90.0, 180.0));
        assert!(validate_coordinates(-90.0, -180.0));
        assert!(validate_coordinates(45.123, -120.456));
    }

    #[test]
    fn test_invalid_samples() {
        assert!(!validate_coordinates(91.0, 0.0));
        assert!(!validate_coordinates(-91.0, 0.0));
        assert!(!validate_coordinates(0.0, 181.0));
        assert!(!validate_coordinates(0.0, -181.0));
        assert!(!validate_coordinates(90.1, 0.0));
        assert!(!validate_coordinates(-90.1, 0.0));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(!validate_coordinates(f64::NAN, 0.0));
        assert!(!validate_coordinates(0.0, f64::NAN));
        assert!(!validate_coordinates(f64::INFINITY, 0.0));
        assert!(!validate_coordinates(0.0, f64::NEG_INFINITY));
    }

    #[test]
    fn test_validate_reports_offending_pair() {
        let err = GeoCoordinate::new(0.0, 181.0).validate().unwrap_err();
        match err {
            GeoCryptError::InvalidCoordinates { lat, lng } => {
                assert_eq!(lat, 0.0);
                assert_eq!(lng, 181.0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_canonical_json() {
        assert_eq!(
            GeoCoordinate::new(40.7128, -74.0060).canonical_json(),
            r#"{"lat":40.7128,"lng":-74.006}"#
        );
        assert_eq!(
            GeoCoordinate::new(90.0, -180.0).canonical_json(),
            r#"{"lat":90,"lng":-180}"#
        );
        assert_eq!(
            GeoCoordinate::new(-0.0, 0.0).canonical_json(),
            r#"{"lat":0,"lng":0}"#
        );
        assert_eq!(
            GeoCoordinate::new(1e-7, 0.000001).canonical_json(),
            r#"{"lat":1e-7,"lng":0.000001}"#
        );
        assert_eq!(
            GeoCoordinate::new(0.1 + 0.2, 2.5e-8).canonical_json(),
            r#"{"lat":0.30000000000000004,"lng":2.5e-8}"#
        );
    }

    #[test]
    fn test_serde_field_names() {
        let json = serde_json::to_string(&GeoCoordinate::new(51.5074, -0.1278)).unwrap();
        assert_eq!(json, r#"{"lat":51.5074,"lng":-0.1278}"#);

        let parsed: GeoCoordinate = serde_json::from_str(r#"{"lat":1.5,"lng":-2}"#).unwrap();
        assert_eq!(parsed, GeoCoordinate::new(1.5, -2.0));
    }
}
