//! Transaction model
//!
//! A single dated money movement against one account and one category.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, CategoryId, TransactionId};

/// Direction of a money movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl TransactionType {
    /// Parse a transaction type from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A financial transaction
///
/// Amounts are always positive; the direction is carried by `kind`.
/// References to accounts and categories are not validated here; a lookup
/// that finds nothing renders as a placeholder rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// The account this transaction belongs to
    #[serde(rename = "accountId")]
    pub account_id: AccountId,

    /// The category this transaction is classified under
    #[serde(rename = "categoryId")]
    pub category_id: CategoryId,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Amount (always positive)
    pub amount: f64,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Free-text tags (order-preserving, duplicates permitted)
    #[serde(default)]
    pub tags: Vec<String>,

    /// Calendar date (day granularity)
    pub date: NaiveDate,

    /// When the transaction was created (set once, never mutated)
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction with `created_at` set to the current instant
    pub fn new(
        account_id: AccountId,
        category_id: CategoryId,
        kind: TransactionType,
        amount: f64,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            account_id,
            category_id,
            kind,
            amount,
            description: String::new(),
            tags: Vec::new(),
            date,
            created_at: Utc::now(),
        }
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    /// Check if this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// The amount with a sign: positive for income, negative for expense
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:.2}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.signed_amount()
        )
    }
}
