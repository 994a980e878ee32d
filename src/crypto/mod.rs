//! Cryptographic functions for fintrack
//!
//! Provides AES-256-GCM encryption of string payloads for at-rest protection,
//! keyed from process configuration.

pub mod cipher;
pub mod key;

pub use cipher::{Cipher, NONCE_SIZE};
pub use key::{CipherKey, KEY_SIZE};
