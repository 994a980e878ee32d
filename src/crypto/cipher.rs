//! AES-256-GCM encryption/decryption of string payloads
//!
//! Provides reversible at-rest protection for sensitive field values. Each
//! encryption draws a fresh random nonce from the OS RNG, so encrypting the
//! same plaintext twice yields different ciphertexts. The stored form is a
//! single base64 string framing `nonce || ciphertext`.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::{
    aead::{Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use std::fmt;

use crate::config::CryptoSettings;
use crate::error::CryptoError;

use super::key::CipherKey;

/// Size of the AES-GCM nonce in bytes (96 bits)
pub const NONCE_SIZE: usize = 12;

/// A configured cipher, constructed once at process start and shared by
/// reference wherever encryption is needed
pub struct Cipher {
    inner: Aes256Gcm,
}

impl Cipher {
    /// Create a cipher from a derived key
    pub fn new(key: &CipherKey) -> Result<Self, CryptoError> {
        let inner = Aes256Gcm::new_from_slice(key.as_bytes())
            .map_err(|e| CryptoError::CipherInit(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Create a cipher from crypto settings
    pub fn from_settings(settings: &CryptoSettings) -> Result<Self, CryptoError> {
        let key = CipherKey::derive(settings.key_material())?;
        Self::new(&key)
    }

    /// Encrypt a string payload
    ///
    /// Returns base64 of `nonce || ciphertext`. A fresh nonce is generated
    /// per call; identical plaintexts do not produce identical output.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, CryptoError> {
        let mut nonce_bytes = [0u8; NONCE_SIZE];
        OsRng.fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = self
            .inner
            .encrypt(nonce, plaintext.as_bytes())
            .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;

        let mut framed = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
        framed.extend_from_slice(&nonce_bytes);
        framed.extend_from_slice(&ciphertext);
        Ok(STANDARD.encode(framed))
    }

    /// Decrypt a value produced by [`Cipher::encrypt`]
    ///
    /// Fails if the input is not valid base64, is too short to contain the
    /// nonce, was encrypted under a different key, or was tampered with.
    pub fn decrypt(&self, encoded: &str) -> Result<String, CryptoError> {
        let framed = STANDARD
            .decode(encoded)
            .map_err(|e| CryptoError::InvalidEncoding(e.to_string()))?;

        if framed.len() < NONCE_SIZE {
            return Err(CryptoError::TruncatedCiphertext {
                expected: NONCE_SIZE,
                actual: framed.len(),
            });
        }

        let (nonce_bytes, ciphertext) = framed.split_at(NONCE_SIZE);
        let nonce = Nonce::from_slice(nonce_bytes);

        let plaintext = self
            .inner
            .decrypt(nonce, ciphertext)
            .map_err(|_| CryptoError::DecryptionFailed)?;

        String::from_utf8(plaintext).map_err(|_| CryptoError::InvalidPlaintext)
    }
}

// Never expose cipher internals
impl fmt::Debug for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cipher").finish_non_exhaustive()
    }
}
