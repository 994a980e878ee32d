//! Cipher key derivation
//!
//! Derives the fixed-size AES-256 key from the configured key-material
//! string. The key material is a machine-supplied secret (not an interactive
//! passphrase), so a single SHA-256 expansion is used; there is no salt to
//! persist in this core.

use sha2::{Digest, Sha256};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::CryptoError;

/// Size of the AES-256 key in bytes
pub const KEY_SIZE: usize = 32;

/// A derived symmetric key, zeroed on drop
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct CipherKey {
    key: [u8; KEY_SIZE],
}

impl CipherKey {
    /// Derive a key from key-material
    ///
    /// Blank key material is rejected; there is no built-in default key.
    pub fn derive(key_material: &str) -> Result<Self, CryptoError> {
        if key_material.trim().is_empty() {
            return Err(CryptoError::MissingKey);
        }

        let digest = Sha256::digest(key_material.as_bytes());
        let mut key = [0u8; KEY_SIZE];
        key.copy_from_slice(&digest);
        Ok(Self { key })
    }

    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }
}

// Never print key bytes
impl fmt::Debug for CipherKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherKey").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_key() {
        let key = CipherKey::derive("test-secret").unwrap();
        assert_eq!(key.as_bytes().len(), KEY_SIZE);
    }

    #[test]
    fn test_same_material_same_key() {
        let key1 = CipherKey::derive("test-secret").unwrap();
        let key2 = CipherKey::derive("test-secret").unwrap();
        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_material_different_key() {
        let key1 = CipherKey::derive("secret-one").unwrap();
        let key2 = CipherKey::derive("secret-two").unwrap();
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_blank_material_rejected() {
        assert!(matches!(
            CipherKey::derive(""),
            Err(CryptoError::MissingKey)
        ));
        assert!(matches!(
            CipherKey::derive("   "),
            Err(CryptoError::MissingKey)
        ));
    }

    #[test]
    fn test_debug_redacts_key() {
        let key = CipherKey::derive("test-secret").unwrap();
        let debug = format!("{:?}", key);
        assert!(debug.contains("CipherKey"));
        assert!(!debug.contains("key"));
    }
}
