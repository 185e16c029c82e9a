//! Account display formatting

use crate::insights::{account_balance, total_balance};
use crate::models::FinanceState;

use super::truncate;

/// Format the account list with derived balances
pub fn format_account_list(state: &FinanceState) -> String {
    if state.accounts.is_empty() {
        return "No accounts found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:20} {:8} {:>14}\n",
        "ID", "Name", "Type", "Balance"
    ));
    output.push_str(&"-".repeat(58));
    output.push('\n');

    for account in &state.accounts {
        let balance = account_balance(account.id, account.balance, &state.transactions);
        output.push_str(&format!(
            "{} {} {} {:8} {:>14}\n",
            account.id,
            account.icon,
            truncate(&account.name, 18),
            account.kind.to_string(),
            state.currency.format(balance)
        ));
    }

    output.push_str(&"-".repeat(58));
    output.push('\n');
    output.push_str(&format!(
        "{:>43} {:>14}\n",
        "Total:",
        state
            .currency
            .format(total_balance(&state.accounts, &state.transactions))
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::seed;
    use chrono::NaiveDate;

    #[test]
    fn test_list_shows_derived_total() {
        let state = seed::default_state_as_of(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        let out = format_account_list(&state);
        assert!(out.contains("Bank Account"));
        assert!(out.contains("Total:"));
    }

    #[test]
    fn test_empty_account_list() {
        let mut state = seed::default_state();
        state.accounts.clear();
        assert!(format_account_list(&state).contains("No accounts found"));
    }
}
