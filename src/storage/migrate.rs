//! Schema-version migration
//!
//! The persisted document carries a version tag. When an older document is
//! loaded, each top-level collection is carried over wholesale into a
//! freshly-seeded default state, but only if it is present and non-empty;
//! an old document with zero budgets gets the default budgets back, not an
//! empty list. The theme flag carries over when present. No per-field
//! migration inside an entity is attempted.

use serde::Deserialize;

use crate::models::{
    Account, Budget, Category, FinanceState, Theme, Transaction, SCHEMA_VERSION,
};

use super::seed;

/// Permissive view of a persisted document
///
/// Every field is optional so a document from any schema version parses as
/// far as its entities allow. An entity that no longer matches the current
/// shape fails the whole parse, which the store treats as a corrupt
/// document (wholesale migration, not partial).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StateDocument {
    pub version: u32,
    pub accounts: Vec<Account>,
    pub categories: Vec<Category>,
    pub transactions: Vec<Transaction>,
    pub budgets: Vec<Budget>,
    pub theme: Option<Theme>,
    pub currency: Option<crate::models::CurrencyCode>,
}

impl StateDocument {
    /// Whether this document is already at the current schema version
    pub fn is_current(&self) -> bool {
        self.version == SCHEMA_VERSION
    }

    /// Convert a current-version document directly into state
    pub fn into_state(self) -> FinanceState {
        let defaults = seed::default_state();
        FinanceState {
            version: SCHEMA_VERSION,
            accounts: self.accounts,
            categories: self.categories,
            transactions: self.transactions,
            budgets: self.budgets,
            theme: self.theme.unwrap_or_default(),
            currency: self.currency.unwrap_or(defaults.currency),
        }
    }
}

/// Migrate an out-of-date document into a current state
///
/// Collections are kept wholesale iff non-empty; empty or missing ones fall
/// back to freshly-generated defaults. Currency deliberately resets to the
/// default.
pub fn migrate(old: StateDocument) -> FinanceState {
    let mut state = seed::default_state();

    if !old.accounts.is_empty() {
        state.accounts = old.accounts;
    }
    if !old.categories.is_empty() {
        state.categories = old.categories;
        // Fallback budgets must reference the surviving catalog, not the
        // discarded default one
        state.budgets = seed::default_budgets(&state.categories);
    }
    if !old.transactions.is_empty() {
        state.transactions = old.transactions;
    }
    if !old.budgets.is_empty() {
        state.budgets = old.budgets;
    }
    if let Some(theme) = old.theme {
        state.theme = theme;
    }

    state.version = SCHEMA_VERSION;
    state
}
