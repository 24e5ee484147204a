//! Injected cryptographic capabilities.
//!
//! Every primitive the pipeline needs goes through [`CryptoProvider`]: the
//! random source, SHA-256, PBKDF2-HMAC-SHA256 and AES-256-GCM encryption.
//! [`OsCryptoProvider`] backs them with the RustCrypto crates and the OS
//! random generator. Tests substitute recording or deterministic providers.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::error::{GeoCryptError, GeoCryptResult};
use crate::keys::SymmetricKey;
use crate::{KEY_SIZE, NONCE_SIZE};

pub trait CryptoProvider: Send + Sync {
    /// Fill `buf` with cryptographically secure random bytes.
    fn fill_random(&self, buf: &mut [u8]) -> GeoCryptResult<()>;

    fn sha256(&self, data: &[u8]) -> [u8; 32];

    /// PBKDF2-HMAC-SHA256 producing a 256-bit key.
    fn pbkdf2_sha256(
        &self,
        secret: &[u8],
        salt: &[u8],
        iterations: u32,
    ) -> GeoCryptResult<SymmetricKey>;

    /// AES-256-GCM encryption. Returns `ciphertext ‖ 16-byte tag`.
    fn aes256_gcm_encrypt(
        &self,
        key: &SymmetricKey,
        nonce: &[u8; NONCE_SIZE],
        plaintext: &[u8],
    ) -> GeoCryptResult<Vec<u8>>;
}

/// Default provider: OS randomness, `sha2`, `pbkdf2` and `aes-gcm`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsCryptoProvider;

impl CryptoProvider for OsCryptoProvider {
    fn fill_random(&self, buf: &mut [u8]) -> GeoCryptResult<()> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| GeoCryptError::Provider(format!("random source failed: {e}")))
    }

    fn sha256(&self, data: &[u8]) -> [u8; 32] {
        Sha256::digest(data).into()
    }

    fn pbkdf2_sha256(
        &self,
        secret: &[u8],
        salt: &[u8],
        iterations: u32,
    ) -> GeoCryptResult<SymmetricKey> {
        if iterations == 0 {
            return Err(GeoCryptError::Provider(
                "PBKDF2 iteration count must be non-zero".into(),
            ));
        }
        let mut key = [0u8; KEY_SIZE];
        pbkdf2::pbkdf2_hmac::<Sha256>(secret, salt, iterations, &mut key);
        Ok(SymmetricKey::from_bytes(key))
    }

    fn aes256_gcm_encrypt(
        &self,
        key: &SymmetricKey,
        nonce: &[u8; NONCE_SIZE],
        plaintext: &[u8],
    ) -> GeoCryptResult<Vec<u8>> {
        let cipher = Aes256Gcm::new(key.as_bytes().into());
        cipher
            .encrypt(Nonce::from_slice(nonce), plaintext)
            .map_err(|e| GeoCryptError::Provider(format!("AES-256-GCM encryption failed: {e}")))
    }
}
