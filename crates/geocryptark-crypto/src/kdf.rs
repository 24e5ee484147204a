//! Key derivation: PBKDF2-HMAC-SHA256 secret material → 256-bit AES key

use std::sync::Arc;

use zeroize::Zeroizing;

use crate::engine::GeoCrypt;
use crate::error::{GeoCryptError, GeoCryptResult};
use crate::keys::SymmetricKey;
use crate::PBKDF2_ITERATIONS;

/// PBKDF2 parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KdfParams {
    /// HMAC-SHA256 rounds (default: 100000)
    pub iterations: u32,
}

impl KdfParams {
    pub fn is_default(&self) -> bool {
        self.iterations == PBKDF2_ITERATIONS
    }
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            iterations: PBKDF2_ITERATIONS,
        }
    }
}

impl GeoCrypt {
    /// Derive a 256-bit key from `secret_material` with `salt` as the PBKDF2 salt.
    ///
    /// Both strings are used as their UTF-8 bytes. Derivation runs on the
    /// blocking pool, so this must be called from within a tokio runtime.
    pub async fn derive_key(
        &self,
        secret_material: &str,
        salt: &str,
    ) -> GeoCryptResult<SymmetricKey> {
        let provider = Arc::clone(&self.provider);
        let secret = Zeroizing::new(secret_material.as_bytes().to_vec());
        let salt = salt.as_bytes().to_vec();
        let iterations = self.kdf.iterations;

        tokio::task::spawn_blocking(move || provider.pbkdf2_sha256(&secret, &salt, iterations))
            .await
            .map_err(|e| GeoCryptError::Task(format!("key derivation task failed: {e}")))?
    }
}
