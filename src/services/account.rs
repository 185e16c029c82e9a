//! Account mutations
//!
//! The seed balance is fixed at creation; there is deliberately no patch
//! field for it. Balances move through transactions only.

use crate::models::{ids::AccountId, Account, AccountKind, FinanceState};

/// Caller-supplied fields for a new account
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub kind: AccountKind,
    /// Starting balance, immutable after creation
    pub balance: f64,
    pub color: String,
    pub icon: String,
}

/// Partial update of an existing account; the seed balance cannot change
#[derive(Debug, Clone, Default)]
pub struct AccountPatch {
    pub name: Option<String>,
    pub kind: Option<AccountKind>,
    pub color: Option<String>,
    pub icon: Option<String>,
}

/// Add an account
pub fn add_account(state: &FinanceState, input: NewAccount) -> (FinanceState, Account) {
    let account = Account::with_style(
        &input.name,
        input.kind,
        input.balance,
        &input.color,
        &input.icon,
    );

    let mut next = state.clone();
    next.accounts.push(account.clone());
    (next, account)
}

/// Apply a patch to the account with the given id; unknown ids are a no-op
pub fn update_account(state: &FinanceState, id: AccountId, patch: AccountPatch) -> FinanceState {
    let mut next = state.clone();
    if let Some(account) = next.accounts.iter_mut().find(|a| a.id == id) {
        if let Some(name) = patch.name {
            account.name = name;
        }
        if let Some(kind) = patch.kind {
            account.kind = kind;
        }
        if let Some(color) = patch.color {
            account.color = color;
        }
        if let Some(icon) = patch.icon {
            account.icon = icon;
        }
    }
    next
}

/// Remove an account together with every transaction on it
pub fn delete_account(state: &FinanceState, id: AccountId) -> FinanceState {
    let mut next = state.clone();
    next.accounts.retain(|a| a.id != id);
    next.transactions.retain(|t| t.account_id != id);
    next
}
