//! Account model
//!
//! Represents money holdings (cash, bank accounts, digital wallets).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;

/// Type of money holding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    /// Physical cash
    Cash,
    /// Bank account
    #[default]
    Bank,
    /// Digital wallet
    Wallet,
}

impl AccountKind {
    /// Parse an account kind from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cash" => Some(Self::Cash),
            "bank" => Some(Self::Bank),
            "wallet" => Some(Self::Wallet),
            _ => None,
        }
    }
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cash => write!(f, "Cash"),
            Self::Bank => write!(f, "Bank"),
            Self::Wallet => write!(f, "Wallet"),
        }
    }
}

/// A named money holding with a seed balance
///
/// The seed balance is stored independently of transaction history; the
/// actual balance is the seed adjusted by all income/expense transactions
/// against this account (see `insights::account_balance`). The seed is
/// immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Account name (e.g., "Bank Account")
    pub name: String,

    /// Type of holding
    #[serde(rename = "type")]
    pub kind: AccountKind,

    /// Seed balance at creation (may be negative)
    pub balance: f64,

    /// Display color (hex string)
    pub color: String,

    /// Display icon (emoji)
    pub icon: String,
}

impl Account {
    /// Create a new account
    pub fn new(name: impl Into<String>, kind: AccountKind, balance: f64) -> Self {
        Self {
            id: AccountId::new(),
            name: name.into(),
            kind,
            balance,
            color: "#3b82f6".to_string(),
            icon: "🏦".to_string(),
        }
    }

    /// Create a new account with display styling
    pub fn with_style(
        name: impl Into<String>,
        kind: AccountKind,
        balance: f64,
        color: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: AccountId::new(),
            name: name.into(),
            kind,
            balance,
            color: color.into(),
            icon: icon.into(),
        }
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}
