//! Account model
//!
//! Represents financial accounts (checking, savings, credit cards, cash).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, UserId};
use super::money::Money;
use crate::error::{FintrackError, FintrackResult};
use crate::validation::{self, ACCOUNT_NAME_MAX_LENGTH};

/// Type of financial account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Checking account
    #[default]
    Checking,
    /// Savings account
    Savings,
    /// Credit card
    Credit,
    /// Cash/wallet
    Cash,
}

impl AccountType {
    /// Parse an account type from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "checking" => Some(Self::Checking),
            "savings" => Some(Self::Savings),
            "credit" | "credit_card" | "creditcard" => Some(Self::Credit),
            "cash" => Some(Self::Cash),
            _ => None,
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checking => write!(f, "Checking"),
            Self::Savings => write!(f, "Savings"),
            Self::Credit => write!(f, "Credit Card"),
            Self::Cash => write!(f, "Cash"),
        }
    }
}

/// A financial account owned by a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Owning user
    pub user_id: UserId,

    /// Account name (e.g., "Chase Checking")
    pub name: String,

    /// Type of account
    #[serde(rename = "type")]
    pub account_type: AccountType,

    /// Current balance
    pub balance: Money,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// When the account was last modified
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with a zero balance
    pub fn new(user_id: UserId, name: impl Into<String>, account_type: AccountType) -> Self {
        let now = Utc::now();
        Self {
            id: AccountId::new(),
            user_id,
            name: name.into(),
            account_type,
            balance: Money::zero(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a new account with an opening balance
    pub fn with_balance(
        user_id: UserId,
        name: impl Into<String>,
        account_type: AccountType,
        balance: Money,
    ) -> Self {
        let mut account = Self::new(user_id, name, account_type);
        account.balance = balance;
        account
    }

    /// Apply a signed amount to the balance
    pub fn apply(&mut self, amount: Money) {
        self.balance += amount;
        self.updated_at = Utc::now();
    }

    /// Validate the record's fields
    pub fn validate(&self) -> FintrackResult<()> {
        if !validation::validate_account_name(&self.name) {
            return Err(FintrackError::invalid_field(
                "name",
                format!("must be 1-{} characters", ACCOUNT_NAME_MAX_LENGTH),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.account_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account() {
        let account = Account::new(UserId::new(), "Checking", AccountType::Checking);
        assert_eq!(account.name, "Checking");
        assert_eq!(account.balance, Money::zero());
        assert!(account.validate().is_ok());
    }

    #[test]
    fn test_with_balance() {
        let account = Account::with_balance(
            UserId::new(),
            "Savings",
            AccountType::Savings,
            Money::from_cents(100_000),
        );
        assert_eq!(account.balance.cents(), 100_000);
    }

    #[test]
    fn test_apply() {
        let mut account = Account::new(UserId::new(), "Cash", AccountType::Cash);
        account.apply(Money::from_cents(5000));
        account.apply(Money::from_cents(-1250));
        assert_eq!(account.balance, Money::from_cents(3750));
    }

    #[test]
    fn test_validation_bounds() {
        let mut account = Account::new(UserId::new(), "Valid Name", AccountType::Checking);
        assert!(account.validate().is_ok());

        account.name = String::new();
        assert!(account.validate().is_err());

        account.name = "a".repeat(50);
        assert!(account.validate().is_ok());

        account.name = "a".repeat(51);
        assert!(account.validate().is_err());
    }

    #[test]
    fn test_account_type_parsing() {
        assert_eq!(AccountType::parse("checking"), Some(AccountType::Checking));
        assert_eq!(AccountType::parse("SAVINGS"), Some(AccountType::Savings));
        assert_eq!(AccountType::parse("credit_card"), Some(AccountType::Credit));
        assert_eq!(AccountType::parse("invalid"), None);
    }

    #[test]
    fn test_serialization() {
        let account = Account::new(UserId::new(), "Test", AccountType::Credit);
        let json = serde_json::to_string(&account).unwrap();
        assert!(json.contains("\"type\":\"credit\""));
        let back: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(account.id, back.id);
        assert_eq!(account.account_type, back.account_type);
    }
}
