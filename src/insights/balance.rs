//! Balance derivation
//!
//! Balances are derived, never stored: seed balance plus income minus
//! expenses over the full history.

use crate::models::{ids::AccountId, Account, Transaction};

/// Net worth across every account
pub fn total_balance(accounts: &[Account], transactions: &[Transaction]) -> f64 {
    let seed: f64 = accounts.iter().map(|a| a.balance).sum();
    seed + transactions.iter().map(|t| t.signed_amount()).sum::<f64>()
}

/// Current balance of one account
///
/// `seed` is the account's starting balance; only transactions on that
/// account move it.
pub fn account_balance(account_id: AccountId, seed: f64, transactions: &[Transaction]) -> f64 {
    let delta: f64 = transactions
        .iter()
        .filter(|t| t.account_id == account_id)
        .map(|t| t.signed_amount())
        .sum();
    seed + delta
}
