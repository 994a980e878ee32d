//! Field validation for user-supplied input
//!
//! Stateless predicate checks applied to form fields before the persistence
//! layer accepts them. Every function here is pure and total: invalid input
//! yields `false`, never an error or a panic.

use chrono::{DateTime, Utc};

use crate::models::Money;

/// Minimum password length
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Maximum account name length (characters)
pub const ACCOUNT_NAME_MAX_LENGTH: usize = 50;

/// Symbols accepted toward the password symbol requirement
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:'\",.<>?/";

/// Check that a string has `local@domain.tld` shape
///
/// Requires no whitespace anywhere, exactly one `@`, a non-empty local part,
/// and at least one `.` in the domain with non-empty labels on both sides.
pub fn validate_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = match parts.next() {
        Some(d) => d,
        None => return false,
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Domain needs at least one dot with non-empty labels around it
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

/// Check password strength
///
/// Requires at least [`PASSWORD_MIN_LENGTH`] characters with one uppercase
/// letter, one lowercase letter, one digit, and one symbol from
/// [`PASSWORD_SYMBOLS`].
pub fn validate_password(password: &str) -> bool {
    if password.chars().count() < PASSWORD_MIN_LENGTH {
        return false;
    }

    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| PASSWORD_SYMBOLS.contains(c));

    has_upper && has_lower && has_digit && has_symbol
}

/// Check that an account name is between 1 and 50 characters
pub fn validate_account_name(name: &str) -> bool {
    let len = name.chars().count();
    (1..=ACCOUNT_NAME_MAX_LENGTH).contains(&len)
}

/// Check that a transaction amount is strictly positive
pub fn validate_transaction_amount(amount: Money) -> bool {
    amount.is_positive()
}

/// Check a transaction amount supplied as a form field
///
/// Accepts the formats [`Money::parse`] accepts ("10.50", "$10.50", "3");
/// unparseable or non-positive input is rejected.
pub fn validate_transaction_amount_str(input: &str) -> bool {
    Money::parse(input).is_ok_and(validate_transaction_amount)
}

/// Check that a payment reminder is due strictly after the current time
pub fn validate_reminder_date(due_at: DateTime<Utc>) -> bool {
    validate_reminder_date_at(due_at, Utc::now())
}

/// Check a reminder date against an explicit clock
pub fn validate_reminder_date_at(due_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    due_at > now
}
