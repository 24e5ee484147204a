//! AES-256-GCM encryption: random-nonce encryption and the password layer
//!
//! Ciphertext format (binary): `[N bytes: ciphertext][16 bytes: GCM tag]`,
//! with the 12-byte nonce carried next to it in [`EncryptedBlob`].

use zeroize::Zeroizing;

use crate::engine::GeoCrypt;
use crate::error::GeoCryptResult;
use crate::keys::SymmetricKey;
use crate::NONCE_SIZE;

/// Nonce of the password layer: 96 zero bits.
///
/// The password layer key depends only on (password, salt), so encrypting two
/// plaintexts with the same password and salt reuses a (key, nonce) pair
/// under GCM. Kept as-is for compatibility with existing artifacts; use a
/// fresh salt per plaintext.
pub const FIRST_LAYER_NONCE: [u8; NONCE_SIZE] = [0u8; NONCE_SIZE];

/// Output of one AES-256-GCM encryption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedBlob {
    /// Ciphertext with the 16-byte tag appended
    pub ciphertext: Vec<u8>,
    pub nonce: [u8; NONCE_SIZE],
}

impl GeoCrypt {
    /// Encrypt `data` under `key` with a fresh random nonce.
    pub async fn encrypt_with_key(
        &self,
        data: &[u8],
        key: &SymmetricKey,
    ) -> GeoCryptResult<EncryptedBlob> {
        let mut nonce = [0u8; NONCE_SIZE];
        self.provider.fill_random(&mut nonce)?;

        let ciphertext = self.provider.aes256_gcm_encrypt(key, &nonce, data)?;
        Ok(EncryptedBlob { ciphertext, nonce })
    }

    /// Password layer: key = PBKDF2(password ‖ salt, salt), nonce = [`FIRST_LAYER_NONCE`].
    ///
    /// Deterministic for a given (plaintext, password, salt).
    pub async fn encrypt_first_layer(
        &self,
        plaintext: &str,
        password: &str,
        salt: &str,
    ) -> GeoCryptResult<EncryptedBlob> {
        let mut material = Zeroizing::new(String::with_capacity(password.len() + salt.len()));
        material.push_str(password);
        material.push_str(salt);

        let key = self.derive_key(&material, salt).await?;
        let ciphertext =
            self.provider
                .aes256_gcm_encrypt(&key, &FIRST_LAYER_NONCE, plaintext.as_bytes())?;

        Ok(EncryptedBlob {
            ciphertext,
            nonce: FIRST_LAYER_NONCE,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kdf::KdfParams;
    use crate::{from_base64, KEY_SIZE, TAG_SIZE};

    fn test_key() -> SymmetricKey {
        SymmetricKey::from_bytes([42u8; KEY_SIZE])
    }

    #[test]
    fn test_encrypted_size() {
        let engine = GeoCrypt::default();
        let blob = tokio_test::block_on(engine.encrypt_with_key(&[0u8; 1000], &test_key())).unwrap();

        // plaintext (1000) + tag (16)
        assert_eq!(blob.ciphertext.len(), 1000 + TAG_SIZE);
    }

    #[tokio::test]
    async fn test_fresh_nonce_per_call() {
        let engine = GeoCrypt::default();
        let key = test_key();
        let a = engine.encrypt_with_key(b"same data", &key).await.unwrap();
        let b = engine.encrypt_with_key(b"same data", &key).await.unwrap();

        assert_ne!(a.nonce, b.nonce, "nonces must not repeat");
        assert_ne!(a.ciphertext, b.ciphertext);
    }

    #[tokio::test]
    async fn test_encrypt_empty() {
        let engine = GeoCrypt::default();
        let blob = engine.encrypt_with_key(b"", &test_key()).await.unwrap();
        assert_eq!(blob.ciphertext.len(), TAG_SIZE);
    }

    #[tokio::test]
    async fn test_first_layer_uses_zero_nonce() {
        let engine = GeoCrypt::default().with_kdf_params(KdfParams { iterations: 1000 });
        let blob = engine
            .encrypt_first_layer("test data", "test password", "test salt")
            .await
            .unwrap();

        assert_eq!(blob.nonce, [0u8; NONCE_SIZE]);
        assert_eq!(blob.ciphertext.len(), "test data".len() + TAG_SIZE);
    }

    #[tokio::test]
    async fn test_first_layer_known_answer() {
        let engine = GeoCrypt::default().with_kdf_params(KdfParams { iterations: 1000 });
        let blob = engine
            .encrypt_first_layer("test data", "test password", "test salt")
            .await
            .unwrap();

        assert_eq!(
            blob.ciphertext,
            from_base64("nfOsVBPJsulUR7h8BWaw8SrgQ2vnhe3Ccg==").unwrap()
        );
    }

    #[tokio::test]
    async fn test_first_layer_default_iterations_known_answer() {
        let blob = GeoCrypt::default()
            .encrypt_first_layer("test data", "test password", "test salt")
            .await
            .unwrap();

        assert_eq!(
            blob.ciphertext,
            from_base64("J4ASUt5M716uyNR9MCYYxsDgbuu8Y+96EA==").unwrap()
        );
    }

    #[tokio::test]
    async fn test_first_layer_repeats_for_same_inputs() {
        let engine = GeoCrypt::default().with_kdf_params(KdfParams { iterations: 1000 });
        let a = engine.encrypt_first_layer("payload", "pw", "salt").await.unwrap();
        let b = engine.encrypt_first_layer("payload", "pw", "salt").await.unwrap();
        let c = engine.encrypt_first_layer("payload", "pw", "other salt").await.unwrap();

        assert_eq!(a, b, "zero nonce makes the password layer deterministic");
        assert_ne!(a.ciphertext, c.ciphertext);
    }
}
