//! Geo-hash: a deterministic digest binding a coordinate to the shared salt
//! and common password.
//!
//! ```text
//! geo_hash = base64(SHA-256(utf8({"lat":<lat>,"lng":<lng>} ‖ salt ‖ password)))
//! ```
//!
//! No delimiters separate the three parts. The hash is key material for the
//! per-coordinate KDF, not a key itself, and unrelated to spatial geohashes.

use crate::coords::GeoCoordinate;
use crate::encoding::to_base64;
use crate::engine::GeoCrypt;
use crate::error::GeoCryptResult;

impl GeoCrypt {
    /// Compute the geo-hash for one coordinate pair.
    ///
    /// Fails with `InvalidCoordinates` before any hashing when the pair is
    /// out of range.
    pub async fn generate_geo_hash(
        &self,
        lat: f64,
        lng: f64,
        salt: &str,
        common_password: &str,
    ) -> GeoCryptResult<String> {
        let coordinate = GeoCoordinate::new(lat, lng);
        coordinate.validate()?;

        let mut message = coordinate.canonical_json();
        message.push_str(salt);
        message.push_str(common_password);

        let digest = self.provider.sha256(message.as_bytes());
        Ok(to_base64(&digest))
    }
}
