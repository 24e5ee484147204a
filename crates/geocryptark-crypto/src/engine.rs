//! The [`GeoCrypt`] engine: an injected provider plus KDF parameters.
//!
//! The stage operations are implemented on `GeoCrypt` in their own modules
//! (`geohash`, `kdf`, `cipher`, `envelope`).

use std::fmt;
use std::sync::Arc;

use crate::error::GeoCryptResult;
use crate::kdf::KdfParams;
use crate::keys::SymmetricKey;
use crate::provider::{CryptoProvider, OsCryptoProvider};
use crate::KEY_SIZE;

/// Entry point for all encryption operations.
///
/// Cheap to clone and safe to share between tasks: it holds no mutable state.
#[derive(Clone)]
pub struct GeoCrypt {
    pub(crate) provider: Arc<dyn CryptoProvider>,
    pub(crate) kdf: KdfParams,
}

impl GeoCrypt {
    pub fn new(provider: Arc<dyn CryptoProvider>) -> Self {
        Self {
            provider,
            kdf: KdfParams::default(),
        }
    }

    /// Override the KDF parameters.
    ///
    /// Anything other than [`KdfParams::default`] yields artifacts that are
    /// not interchangeable with default-configured peers.
    pub fn with_kdf_params(mut self, params: KdfParams) -> Self {
        if !params.is_default() {
            tracing::warn!(
                iterations = params.iterations,
                default = crate::PBKDF2_ITERATIONS,
                "non-default PBKDF2 iteration count: output is incompatible with default peers"
            );
        }
        self.kdf = params;
        self
    }

    pub fn kdf_params(&self) -> &KdfParams {
        &self.kdf
    }

    pub fn provider(&self) -> &Arc<dyn CryptoProvider> {
        &self.provider
    }

    /// Generate a fresh random 256-bit session key.
    pub fn generate_session_key(&self) -> GeoCryptResult<SymmetricKey> {
        let mut bytes = [0u8; KEY_SIZE];
        self.provider.fill_random(&mut bytes)?;
        Ok(SymmetricKey::from_bytes(bytes))
    }
}

impl Default for GeoCrypt {
    fn default() -> Self {
        Self::new(Arc::new(OsCryptoProvider))
    }
}

impl fmt::Debug for GeoCrypt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeoCrypt")
            .field("kdf", &self.kdf)
            .finish_non_exhaustive()
    }
}
