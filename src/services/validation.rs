//! Input validation
//!
//! Validators return every problem found as a list of human-readable
//! messages; an empty list means the input is acceptable. They never
//! mutate state and never short-circuit on the first problem.

use crate::models::{
    ids::{AccountId, BudgetId, TransactionId},
    FinanceState,
};

use super::account::{AccountPatch, NewAccount};
use super::budget::{BudgetPatch, NewBudget};
use super::transaction::{NewTransaction, TransactionPatch};

/// Check a prospective transaction against the current state
pub fn validate_transaction(state: &FinanceState, input: &NewTransaction) -> Vec<String> {
    let mut problems = Vec::new();

    if input.amount <= 0.0 {
        problems.push("Amount must be greater than zero".to_string());
    }
    if !input.amount.is_finite() {
        problems.push("Amount must be a finite number".to_string());
    }

    if state.account(input.account_id).is_none() {
        problems.push(format!("Account '{}' does not exist", input.account_id));
    }

    match state.category(input.category_id) {
        None => problems.push(format!("Category '{}' does not exist", input.category_id)),
        Some(category) => {
            if category.kind != input.kind {
                problems.push(format!(
                    "Category '{}' is for {} transactions, not {}",
                    category.name, category.kind, input.kind
                ));
            }
        }
    }

    problems
}

/// Check a patch against the transaction it would produce
///
/// The patch is merged over the existing transaction and the result is
/// held to the same rules as a new one. An unknown id yields no problems;
/// the façade treats it as a no-op anyway.
pub fn validate_transaction_patch(
    state: &FinanceState,
    id: TransactionId,
    patch: &TransactionPatch,
) -> Vec<String> {
    let Some(existing) = state.transaction(id) else {
        return Vec::new();
    };
    let mut problems = Vec::new();

    let amount = patch.amount.unwrap_or(existing.amount);
    if amount <= 0.0 {
        problems.push("Amount must be greater than zero".to_string());
    }
    if !amount.is_finite() {
        problems.push("Amount must be a finite number".to_string());
    }

    let account_id = patch.account_id.unwrap_or(existing.account_id);
    if state.account(account_id).is_none() {
        problems.push(format!("Account '{}' does not exist", account_id));
    }

    let kind = patch.kind.unwrap_or(existing.kind);
    let category_id = patch.category_id.unwrap_or(existing.category_id);
    match state.category(category_id) {
        None => problems.push(format!("Category '{}' does not exist", category_id)),
        Some(category) => {
            if category.kind != kind {
                problems.push(format!(
                    "Category '{}' is for {} transactions, not {}",
                    category.name, category.kind, kind
                ));
            }
        }
    }

    problems
}

/// Check a prospective account
pub fn validate_account(state: &FinanceState, input: &NewAccount) -> Vec<String> {
    let mut problems = Vec::new();

    if input.name.trim().is_empty() {
        problems.push("Account name cannot be empty".to_string());
    }
    if state
        .accounts
        .iter()
        .any(|a| a.name.eq_ignore_ascii_case(input.name.trim()))
    {
        problems.push(format!("An account named '{}' already exists", input.name.trim()));
    }
    // Negative seeds are allowed (debt); NaN and infinities are not
    if !input.balance.is_finite() {
        problems.push("Starting balance must be a finite number".to_string());
    }

    problems
}

/// Check a patch against the account it would produce
///
/// Holds a renamed account to the same name rules as a new one, excluding
/// the account itself from the duplicate check.
pub fn validate_account_patch(
    state: &FinanceState,
    id: AccountId,
    patch: &AccountPatch,
) -> Vec<String> {
    let mut problems = Vec::new();

    if let Some(name) = &patch.name {
        if name.trim().is_empty() {
            problems.push("Account name cannot be empty".to_string());
        }
        if state
            .accounts
            .iter()
            .any(|a| a.id != id && a.name.eq_ignore_ascii_case(name.trim()))
        {
            problems.push(format!("An account named '{}' already exists", name.trim()));
        }
    }

    problems
}

/// Check a prospective budget against the current state
///
/// Budgets attach to expense categories only, at most one per category.
pub fn validate_budget(state: &FinanceState, input: &NewBudget) -> Vec<String> {
    let mut problems = Vec::new();

    if input.limit <= 0.0 || !input.limit.is_finite() {
        problems.push("Budget limit must be greater than zero".to_string());
    }

    match state.category(input.category_id) {
        None => problems.push(format!("Category '{}' does not exist", input.category_id)),
        Some(category) => {
            if !category.is_expense() {
                problems.push(format!(
                    "Category '{}' is an income category; budgets track expenses",
                    category.name
                ));
            }
            if state.budget_for_category(input.category_id).is_some() {
                problems.push(format!(
                    "Category '{}' already has a budget",
                    category.name
                ));
            }
        }
    }

    problems
}

/// Check a patch against the budget it would produce
///
/// The merged result obeys the same rules as a new budget, with the
/// budget itself excluded from the one-per-category check.
pub fn validate_budget_patch(
    state: &FinanceState,
    id: BudgetId,
    patch: &BudgetPatch,
) -> Vec<String> {
    let Some(existing) = state.budget(id) else {
        return Vec::new();
    };
    let mut problems = Vec::new();

    let limit = patch.limit.unwrap_or(existing.limit);
    if limit <= 0.0 || !limit.is_finite() {
        problems.push("Budget limit must be greater than zero".to_string());
    }

    let category_id = patch.category_id.unwrap_or(existing.category_id);
    match state.category(category_id) {
        None => problems.push(format!("Category '{}' does not exist", category_id)),
        Some(category) => {
            if !category.is_expense() {
                problems.push(format!(
                    "Category '{}' is an income category; budgets track expenses",
                    category.name
                ));
            }
            if state
                .budgets
                .iter()
                .any(|b| b.id != id && b.category_id == category_id)
            {
                problems.push(format!(
                    "Category '{}' already has a budget",
                    category.name
                ));
            }
        }
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ids::{AccountId, CategoryId},
        AccountKind, BudgetPeriod, TransactionType,
    };
    use crate::storage::seed;
    use chrono::NaiveDate;

    fn base_state() -> FinanceState {
        seed::default_state_as_of(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap())
    }

    fn valid_txn(state: &FinanceState) -> NewTransaction {
        let salary = state
            .categories
            .iter()
            .find(|c| c.name == "Salary")
            .unwrap();
        NewTransaction {
            account_id: state.accounts[0].id,
            category_id: salary.id,
            kind: TransactionType::Income,
            amount: 100.0,
            description: String::new(),
            tags: vec![],
            date: NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(),
        }
    }

    #[test]
    fn test_valid_transaction_passes() {
        let state = base_state();
        assert!(validate_transaction(&state, &valid_txn(&state)).is_empty());
    }

    #[test]
    fn test_transaction_problems_accumulate() {
        let state = base_state();
        let mut input = valid_txn(&state);
        input.amount = -5.0;
        input.account_id = AccountId::new();
        input.category_id = CategoryId::new();

        let problems = validate_transaction(&state, &input);
        assert_eq!(problems.len(), 3);
    }

    #[test]
    fn test_transaction_kind_must_match_category() {
        let state = base_state();
        let mut input = valid_txn(&state);
        input.kind = TransactionType::Expense;

        let problems = validate_transaction(&state, &input);
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("Salary"));
    }

    #[test]
    fn test_patch_cannot_break_amount_or_category_rules() {
        let state = base_state();
        let expense = state
            .transactions
            .iter()
            .find(|t| t.is_expense())
            .unwrap();
        let salary = state
            .categories
            .iter()
            .find(|c| c.name == "Salary")
            .unwrap();

        // Negative amount and an income category on an expense transaction
        let patch = TransactionPatch {
            amount: Some(-5.0),
            category_id: Some(salary.id),
            ..Default::default()
        };
        let problems = validate_transaction_patch(&state, expense.id, &patch);
        assert_eq!(problems.len(), 2);
        assert!(problems.iter().any(|p| p.contains("greater than zero")));
        assert!(problems.iter().any(|p| p.contains("Salary")));

        // Changing kind alongside the category keeps the pair consistent
        let patch = TransactionPatch {
            kind: Some(TransactionType::Income),
            category_id: Some(salary.id),
            ..Default::default()
        };
        assert!(validate_transaction_patch(&state, expense.id, &patch).is_empty());

        // Unknown id: nothing to validate, the update is a no-op anyway
        let patch = TransactionPatch {
            amount: Some(-5.0),
            ..Default::default()
        };
        assert!(validate_transaction_patch(&state, TransactionId::new(), &patch).is_empty());
    }

    #[test]
    fn test_account_patch_name_rules() {
        let state = base_state();
        let id = state.accounts[0].id;

        // Renaming to another account's name is rejected
        let patch = AccountPatch {
            name: Some("bank account".to_string()),
            ..Default::default()
        };
        assert!(!validate_account_patch(&state, id, &patch).is_empty());

        // Keeping its own name (case changed) is fine
        let patch = AccountPatch {
            name: Some("CASH".to_string()),
            ..Default::default()
        };
        assert!(validate_account_patch(&state, id, &patch).is_empty());

        // Blank rename rejected, patch without a name passes
        let patch = AccountPatch {
            name: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(!validate_account_patch(&state, id, &patch).is_empty());
        assert!(validate_account_patch(&state, id, &AccountPatch::default()).is_empty());
    }

    #[test]
    fn test_budget_patch_rules() {
        let state = base_state();
        let id = state.budgets[0].id;

        let patch = BudgetPatch {
            limit: Some(0.0),
            ..Default::default()
        };
        assert!(!validate_budget_patch(&state, id, &patch).is_empty());

        // Repointing at a category that already has another budget
        let other = state.budgets[1].category_id;
        let patch = BudgetPatch {
            category_id: Some(other),
            ..Default::default()
        };
        let problems = validate_budget_patch(&state, id, &patch);
        assert!(problems.iter().any(|p| p.contains("already has a budget")));

        // A plain limit change on its own category is fine
        let patch = BudgetPatch {
            limit: Some(750.0),
            ..Default::default()
        };
        assert!(validate_budget_patch(&state, id, &patch).is_empty());
    }

    #[test]
    fn test_account_name_rules() {
        let state = base_state();

        let blank = NewAccount {
            name: "  ".to_string(),
            kind: AccountKind::Cash,
            balance: 0.0,
            color: "#fff".to_string(),
            icon: "💵".to_string(),
        };
        assert!(!validate_account(&state, &blank).is_empty());

        let duplicate = NewAccount {
            name: "cash".to_string(),
            ..blank.clone()
        };
        let problems = validate_account(&state, &duplicate);
        assert!(problems.iter().any(|p| p.contains("already exists")));
    }

    #[test]
    fn test_budget_rules() {
        let state = base_state();

        // Income category rejected
        let salary = state
            .categories
            .iter()
            .find(|c| c.name == "Salary")
            .unwrap();
        let input = NewBudget {
            category_id: salary.id,
            limit: 100.0,
            period: BudgetPeriod::Monthly,
        };
        assert!(!validate_budget(&state, &input).is_empty());

        // One budget per category
        let food = state
            .categories
            .iter()
            .find(|c| c.name == "Food & Dining")
            .unwrap();
        let input = NewBudget {
            category_id: food.id,
            limit: 100.0,
            period: BudgetPeriod::Monthly,
        };
        let problems = validate_budget(&state, &input);
        assert!(problems.iter().any(|p| p.contains("already has a budget")));

        // Travel has no default budget; a fresh one passes
        let travel = state
            .categories
            .iter()
            .find(|c| c.name == "Travel")
            .unwrap();
        let input = NewBudget {
            category_id: travel.id,
            limit: 500.0,
            period: BudgetPeriod::Monthly,
        };
        assert!(validate_budget(&state, &input).is_empty());
    }
}
