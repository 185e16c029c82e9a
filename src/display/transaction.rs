//! Transaction display formatting

use crate::models::{CurrencyCode, FinanceState, Transaction};

use super::truncate;

fn signed_amount(currency: CurrencyCode, txn: &Transaction) -> String {
    let formatted = currency.format(txn.amount);
    if txn.is_income() {
        format!("+{formatted}")
    } else {
        format!("-{formatted}")
    }
}

/// Format a single transaction as a list row
pub fn format_transaction_row(state: &FinanceState, txn: &Transaction) -> String {
    let category = state
        .category(txn.category_id)
        .map(|c| c.name.as_str())
        .unwrap_or("(unknown)");
    let account = state
        .account(txn.account_id)
        .map(|a| a.name.as_str())
        .unwrap_or("(unknown)");

    format!(
        "{} {} {} {} {:>14}",
        txn.id,
        txn.date.format("%Y-%m-%d"),
        truncate(category, 18),
        truncate(account, 14),
        signed_amount(state.currency, txn)
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_list(state: &FinanceState, transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:10} {:18} {:14} {:>14}\n",
        "ID", "Date", "Category", "Account", "Amount"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(state, txn));
        output.push('\n');
    }

    output
}

/// Format one transaction's full details
pub fn format_transaction_details(state: &FinanceState, txn: &Transaction) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!(
        "Amount:      {}\n",
        signed_amount(state.currency, txn)
    ));

    if let Some(account) = state.account(txn.account_id) {
        output.push_str(&format!("Account:     {}\n", account.name));
    }
    if let Some(category) = state.category(txn.category_id) {
        output.push_str(&format!("Category:    {} {}\n", category.icon, category.name));
    }
    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }
    if !txn.tags.is_empty() {
        output.push_str(&format!("Tags:        {}\n", txn.tags.join(", ")));
    }

    output
}
