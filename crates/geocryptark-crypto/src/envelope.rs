//! Multi-key envelope encryption
//!
//! Wire format (JSON):
//! ```text
//! {
//!   "salt": "<salt>",
//!   "data": base64(AES-GCM(session key, iv, password layer)),
//!   "iv":   base64(12-byte nonce),
//!   "keys": [ { "wrappedKey": base64(AES-GCM(PBKDF2(geo-hash, salt), keyIv, session key)),
//!               "keyIv": base64(12-byte nonce) }, ... ]
//! }
//! ```
//!
//! `keys[i]` belongs to the i-th input coordinate. The session key only ever
//! leaves memory wrapped.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::coords::GeoCoordinate;
use crate::encoding::to_base64;
use crate::engine::GeoCrypt;
use crate::error::{GeoCryptError, GeoCryptResult};

/// The session key wrapped under one coordinate's derived key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WrappedKey {
    /// Wrapped session key, ciphertext ‖ tag (base64)
    pub wrapped_key: String,
    /// Wrapping nonce (base64)
    pub key_iv: String,
}

/// Result of [`GeoCrypt::multi_key_encrypt`]; the only artifact that is
/// stored or transmitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiKeyEncryptResult {
    pub salt: String,
    /// Doubly encrypted plaintext (base64)
    pub data: String,
    /// Nonce of the session-key layer (base64)
    pub iv: String,
    /// One entry per input coordinate, in input order
    pub keys: Vec<WrappedKey>,
}

impl MultiKeyEncryptResult {
    pub fn to_json(&self) -> GeoCryptResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> GeoCryptResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(data: &str) -> GeoCryptResult<Self> {
        Ok(serde_json::from_str(data)?)
    }
}

impl GeoCrypt {
    /// Encrypt `plaintext` so that any one of `coordinates` (together with
    /// `salt` and `common_password`) unlocks it.
    ///
    /// Every coordinate is validated before any cryptographic work; the first
    /// out-of-range pair fails the whole call with `InvalidCoordinateList`.
    /// Nothing partial is ever returned.
    pub async fn multi_key_encrypt(
        &self,
        plaintext: &str,
        coordinates: &[GeoCoordinate],
        salt: &str,
        common_password: &str,
    ) -> GeoCryptResult<MultiKeyEncryptResult> {
        if let Some(bad) = coordinates.iter().find(|c| !c.is_valid()) {
            return Err(GeoCryptError::InvalidCoordinateList {
                lat: bad.lat,
                lng: bad.lng,
            });
        }
        if coordinates.is_empty() {
            warn!("multi-key encrypt with no coordinates: the result cannot be unwrapped");
        }

        let session_key = self.generate_session_key()?;

        let first_layer = self
            .encrypt_first_layer(plaintext, common_password, salt)
            .await?;
        debug!(bytes = first_layer.ciphertext.len(), "password layer encrypted");

        let second_layer = self
            .encrypt_with_key(&first_layer.ciphertext, &session_key)
            .await?;
        debug!(bytes = second_layer.ciphertext.len(), "session layer encrypted");

        let mut keys = Vec::with_capacity(coordinates.len());
        for (index, coordinate) in coordinates.iter().enumerate() {
            let geo_hash = self
                .generate_geo_hash(coordinate.lat, coordinate.lng, salt, common_password)
                .await?;
            let wrapping_key = self.derive_key(&geo_hash, salt).await?;
            let wrapped = self
                .encrypt_with_key(session_key.as_bytes(), &wrapping_key)
                .await?;

            keys.push(WrappedKey {
                wrapped_key: to_base64(&wrapped.ciphertext),
                key_iv: to_base64(&wrapped.nonce),
            });
            debug!(index, "session key wrapped");
        }

        info!(recipients = keys.len(), "multi-key encryption complete");

        Ok(MultiKeyEncryptResult {
            salt: salt.to_string(),
            data: to_base64(&second_layer.ciphertext),
            iv: to_base64(&second_layer.nonce),
            keys,
        })
    }
}
