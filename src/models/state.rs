//! The aggregate state
//!
//! `FinanceState` is the aggregate root holding every collection plus the
//! display preferences. Values are immutable snapshots: the mutation façade
//! in `services` produces a new state from the old one, and callers swap
//! the whole value. Only the façade, the seed generator, and the
//! persistence adapter construct one.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::account::Account;
use super::budget::Budget;
use super::category::Category;
use super::currency::CurrencyCode;
use super::ids::{AccountId, BudgetId, CategoryId, TransactionId};
use super::transaction::Transaction;

/// Current schema version of the persisted document
pub const SCHEMA_VERSION: u32 = 2;

/// Display theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// The other theme
    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// The aggregate root: everything the tracker knows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceState {
    /// Schema version of the persisted document
    pub version: u32,

    /// All money holdings
    pub accounts: Vec<Account>,

    /// The category catalog
    pub categories: Vec<Category>,

    /// The full transaction history (newest-first insertion order)
    pub transactions: Vec<Transaction>,

    /// Per-category spending limits
    pub budgets: Vec<Budget>,

    /// Display theme
    pub theme: Theme,

    /// Display currency (label only, no conversion)
    pub currency: CurrencyCode,
}

impl FinanceState {
    /// Look up an account by id
    ///
    /// A missing account is not an error; callers render a placeholder.
    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Look up a category by id
    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Look up a transaction by id
    pub fn transaction(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Look up a budget by id
    pub fn budget(&self, id: BudgetId) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.id == id)
    }

    /// Look up a budget by the category it limits
    pub fn budget_for_category(&self, category_id: CategoryId) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.category_id == category_id)
    }
}
