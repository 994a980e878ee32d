//! Configuration module for fintrack
//!
//! Reads process-level configuration (encryption key material) once at
//! startup into explicit settings objects that callers inject where needed.

pub mod settings;

pub use settings::{CryptoSettings, ENCRYPTION_KEY_VAR};
