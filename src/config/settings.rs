//! Crypto configuration
//!
//! Key material is read from the process environment once at startup and
//! carried in an explicit settings object that is passed by reference to the
//! encryption layer. A missing or blank key is a hard error; there is no
//! built-in default key to fall back to.

use std::env;
use std::fmt;
use zeroize::Zeroizing;

use crate::error::CryptoError;

/// Environment variable holding the encryption key material
pub const ENCRYPTION_KEY_VAR: &str = "ENCRYPTION_KEY";

/// Settings for the encryption layer
pub struct CryptoSettings {
    key_material: Zeroizing<String>,
}

impl CryptoSettings {
    /// Read key material from [`ENCRYPTION_KEY_VAR`]
    pub fn from_env() -> Result<Self, CryptoError> {
        Self::from_env_var(ENCRYPTION_KEY_VAR)
    }

    /// Read key material from a named environment variable
    pub fn from_env_var(var: &str) -> Result<Self, CryptoError> {
        match env::var(var) {
            Ok(value) => Self::from_key_material(value),
            Err(_) => Err(CryptoError::MissingKey),
        }
    }

    /// Build settings from key material supplied directly
    ///
    /// Useful for tests that need distinct keys without touching the process
    /// environment.
    pub fn from_key_material(material: impl Into<String>) -> Result<Self, CryptoError> {
        let key_material = Zeroizing::new(material.into());
        if key_material.trim().is_empty() {
            return Err(CryptoError::MissingKey);
        }
        Ok(Self { key_material })
    }

    /// Get the key material
    pub fn key_material(&self) -> &str {
        &self.key_material
    }
}

// Never print key material
impl fmt::Debug for CryptoSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CryptoSettings").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_material() {
        let settings = CryptoSettings::from_key_material("a secret").unwrap();
        assert_eq!(settings.key_material(), "a secret");
    }

    #[test]
    fn test_blank_key_material_rejected() {
        assert!(matches!(
            CryptoSettings::from_key_material(""),
            Err(CryptoError::MissingKey)
        ));
        assert!(matches!(
            CryptoSettings::from_key_material("  \t"),
            Err(CryptoError::MissingKey)
        ));
    }

    #[test]
    fn test_from_env_var() {
        // Unique variable name to avoid clashing with other tests
        let var = "FINTRACK_TEST_KEY_FROM_ENV";
        env::set_var(var, "env secret");
        let settings = CryptoSettings::from_env_var(var).unwrap();
        assert_eq!(settings.key_material(), "env secret");
        env::remove_var(var);
    }

    #[test]
    fn test_missing_env_var_rejected() {
        assert!(matches!(
            CryptoSettings::from_env_var("FINTRACK_TEST_KEY_UNSET"),
            Err(CryptoError::MissingKey)
        ));
    }

    #[test]
    fn test_debug_redacts_key_material() {
        let settings = CryptoSettings::from_key_material("a secret").unwrap();
        let debug = format!("{:?}", settings);
        assert!(!debug.contains("a secret"));
    }
}
