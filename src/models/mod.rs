//! Core data models for fintrack
//!
//! Plain records representing the finance domain: users, accounts,
//! transactions, and payment reminders. They carry no storage or transport
//! logic; persistence and rendering happen in the surrounding application.

pub mod account;
pub mod ids;
pub mod money;
pub mod reminder;
pub mod transaction;
pub mod user;

pub use account::{Account, AccountType};
pub use ids::{AccountId, ReminderId, TransactionId, UserId};
pub use money::Money;
pub use reminder::PaymentReminder;
pub use transaction::{Transaction, TransactionKind};
pub use user::User;
