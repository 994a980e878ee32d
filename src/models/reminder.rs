//! Payment reminder model
//!
//! A scheduled note that a payment is due. Delivery (notifications, emails)
//! is handled by the surrounding application layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{ReminderId, UserId};
use super::money::Money;
use crate::error::{FintrackError, FintrackResult};
use crate::validation;

/// A reminder for an upcoming payment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReminder {
    /// Unique identifier
    pub id: ReminderId,

    /// Owning user
    pub user_id: UserId,

    /// What the payment is for (e.g., "Rent")
    pub description: String,

    /// Amount due
    pub amount: Money,

    /// When the payment is due
    pub due_at: DateTime<Utc>,

    /// Whether the payment has been made
    #[serde(default)]
    pub paid: bool,

    /// When the reminder was created
    pub created_at: DateTime<Utc>,

    /// When the reminder was last modified
    pub updated_at: DateTime<Utc>,
}

impl PaymentReminder {
    /// Create a new unpaid reminder
    pub fn new(
        user_id: UserId,
        description: impl Into<String>,
        amount: Money,
        due_at: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ReminderId::new(),
            user_id,
            description: description.into(),
            amount,
            due_at,
            paid: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark the reminder as paid
    pub fn mark_paid(&mut self) {
        self.paid = true;
        self.updated_at = Utc::now();
    }

    /// Check whether the reminder is overdue at the given time
    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        !self.paid && self.due_at <= now
    }

    /// Validate the record's fields
    ///
    /// The due date must be in the future when the reminder is created;
    /// amounts must be positive.
    pub fn validate(&self) -> FintrackResult<()> {
        if !validation::validate_transaction_amount(self.amount) {
            return Err(FintrackError::invalid_field(
                "amount",
                "must be greater than zero",
            ));
        }
        if !validation::validate_reminder_date(self.due_at) {
            return Err(FintrackError::invalid_field(
                "due_at",
                "must be in the future",
            ));
        }
        Ok(())
    }
}

impl fmt::Display for PaymentReminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} due {} ({})",
            self.description,
            self.due_at.format("%Y-%m-%d"),
            self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_reminder(due_at: DateTime<Utc>) -> PaymentReminder {
        PaymentReminder::new(UserId::new(), "Rent", Money::from_cents(120_000), due_at)
    }

    #[test]
    fn test_new_reminder_is_unpaid() {
        let reminder = sample_reminder(Utc::now() + Duration::days(7));
        assert!(!reminder.paid);
        assert!(reminder.validate().is_ok());
    }

    #[test]
    fn test_past_due_date_rejected() {
        let reminder = sample_reminder(Utc::now() - Duration::days(1));
        let err = reminder.validate().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("due_at"));
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        let mut reminder = sample_reminder(Utc::now() + Duration::days(7));
        reminder.amount = Money::zero();
        assert!(reminder.validate().is_err());
    }

    #[test]
    fn test_mark_paid() {
        let mut reminder = sample_reminder(Utc::now() + Duration::days(7));
        reminder.mark_paid();
        assert!(reminder.paid);
    }

    #[test]
    fn test_overdue() {
        let now = Utc::now();
        let mut reminder = sample_reminder(now + Duration::days(1));
        assert!(!reminder.is_overdue_at(now));
        assert!(reminder.is_overdue_at(now + Duration::days(2)));

        reminder.mark_paid();
        assert!(!reminder.is_overdue_at(now + Duration::days(2)));
    }

    #[test]
    fn test_serialization() {
        let reminder = sample_reminder(Utc::now() + Duration::days(7));
        let json = serde_json::to_string(&reminder).unwrap();
        let back: PaymentReminder = serde_json::from_str(&json).unwrap();
        assert_eq!(reminder.id, back.id);
        assert_eq!(reminder.due_at, back.due_at);
    }
}
