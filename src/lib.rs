//! fintrack - core library for a personal-finance application
//!
//! This crate provides the storage- and transport-agnostic core of a
//! personal-finance application: data models for users, accounts,
//! transactions, and payment reminders; field validation for user-supplied
//! input; and reversible at-rest encryption of sensitive string values.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Process configuration (encryption key material)
//! - `error`: Custom error types
//! - `models`: Core data models (users, accounts, transactions, reminders)
//! - `validation`: Stateless field validation predicates
//! - `crypto`: AES-256-GCM encryption of string payloads
//!
//! # Example
//!
//! ```rust
//! use fintrack::config::CryptoSettings;
//! use fintrack::crypto::Cipher;
//! use fintrack::validation;
//!
//! # fn main() -> Result<(), fintrack::FintrackError> {
//! assert!(validation::validate_email("alice@example.com"));
//!
//! let settings = CryptoSettings::from_key_material("a long random secret")?;
//! let cipher = Cipher::from_settings(&settings)?;
//! let stored = cipher.encrypt("routing 021000021")?;
//! assert_eq!(cipher.decrypt(&stored)?, "routing 021000021");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod crypto;
pub mod error;
pub mod models;
pub mod validation;

pub use error::{CryptoError, FintrackError, FintrackResult};
