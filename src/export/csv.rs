//! CSV Export functionality
//!
//! Exports the transaction history and account list to CSV format.

use std::collections::HashMap;
use std::io::Write;

use crate::error::{FinanceError, FinanceResult};
use crate::insights::account_balance;
use crate::models::FinanceState;

/// Export all transactions to CSV
pub fn export_transactions_csv<W: Write>(state: &FinanceState, writer: &mut W) -> FinanceResult<()> {
    // Build lookups
    let account_names: HashMap<_, _> = state
        .accounts
        .iter()
        .map(|a| (a.id, a.name.clone()))
        .collect();
    let category_names: HashMap<_, _> = state
        .categories
        .iter()
        .map(|c| (c.id, c.name.clone()))
        .collect();

    writeln!(
        writer,
        "ID,Date,Type,Account,Category,Description,Amount,Tags"
    )
    .map_err(|e| FinanceError::Export(e.to_string()))?;

    for txn in &state.transactions {
        let account_name = account_names
            .get(&txn.account_id)
            .cloned()
            .unwrap_or_else(|| "Unknown".to_string());
        let category_name = category_names
            .get(&txn.category_id)
            .cloned()
            .unwrap_or_else(|| "Unknown".to_string());

        writeln!(
            writer,
            "{},{},{},{},{},{},{:.2},{}",
            txn.id,
            txn.date,
            txn.kind,
            escape_csv(&account_name),
            escape_csv(&category_name),
            escape_csv(&txn.description),
            txn.amount,
            escape_csv(&txn.tags.join(";"))
        )
        .map_err(|e| FinanceError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Export accounts with their derived balances to CSV
pub fn export_accounts_csv<W: Write>(state: &FinanceState, writer: &mut W) -> FinanceResult<()> {
    writeln!(writer, "ID,Name,Type,Starting Balance,Current Balance")
        .map_err(|e| FinanceError::Export(e.to_string()))?;

    for account in &state.accounts {
        let current = account_balance(account.id, account.balance, &state.transactions);
        writeln!(
            writer,
            "{},{},{},{:.2},{:.2}",
            account.id,
            escape_csv(&account.name),
            account.kind,
            account.balance,
            current
        )
        .map_err(|e| FinanceError::Export(e.to_string()))?;
    }

    Ok(())
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
