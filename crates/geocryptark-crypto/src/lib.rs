//! geocryptark-crypto: location-gated multi-recipient envelope encryption
//!
//! A plaintext is encrypted once under a random session key, and the session
//! key is wrapped once per geographic coordinate. Anyone who knows one of the
//! coordinates, the shared salt and the common password can re-derive that
//! coordinate's wrapping key.
//!
//! Pipeline:
//! ```text
//! coordinates ─ validate (all, up front)
//! session key ← 32 random bytes
//! layer 1     = AES-256-GCM(key = PBKDF2(password ‖ salt, salt), nonce = 0^96, plaintext)
//! layer 2     = AES-256-GCM(key = session key, nonce = random, layer 1)
//! per coordinate:
//!   geo-hash  = base64(SHA-256({"lat":..,"lng":..} ‖ salt ‖ password))
//!   wrap key  = PBKDF2(geo-hash, salt)
//!   wrapped   = AES-256-GCM(key = wrap key, nonce = random, session key)
//! ```
//!
//! PBKDF2 is HMAC-SHA256 with [`PBKDF2_ITERATIONS`] rounds and a 256-bit output.
//!
//! All primitives are reached through a [`CryptoProvider`] injected into
//! [`GeoCrypt`]; [`OsCryptoProvider`] is the default.

pub mod cipher;
pub mod coords;
pub mod encoding;
pub mod engine;
pub mod envelope;
pub mod error;
pub mod geohash;
pub mod kdf;
pub mod keys;
pub mod provider;

pub use cipher::{EncryptedBlob, FIRST_LAYER_NONCE};
pub use coords::{validate_coordinates, GeoCoordinate};
pub use encoding::{from_base64, to_base64};
pub use engine::GeoCrypt;
pub use envelope::{MultiKeyEncryptResult, WrappedKey};
pub use error::{GeoCryptError, GeoCryptResult};
pub use kdf::KdfParams;
pub use keys::SymmetricKey;
pub use provider::{CryptoProvider, OsCryptoProvider};

/// Size of an AES-256 key in bytes (256-bit)
pub const KEY_SIZE: usize = 32;

/// Size of an AES-GCM nonce (96-bit)
pub const NONCE_SIZE: usize = 12;

/// Size of a GCM authentication tag
pub const TAG_SIZE: usize = 16;

/// PBKDF2-HMAC-SHA256 rounds used for every derived key.
///
/// Changing this breaks compatibility with every artifact produced so far.
pub const PBKDF2_ITERATIONS: u32 = 100_000;
