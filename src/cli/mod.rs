//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the pure state transition layer. Every
//! handler loads the state, applies a transition, persists the result, and
//! prints. A failed save is reported but never aborts the command; the
//! in-memory result already happened.

pub mod account;
pub mod budget;
pub mod config;
pub mod export;
pub mod report;
pub mod transaction;

pub use account::{handle_account_command, AccountCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use config::{handle_config_command, ConfigCommands};
pub use export::{handle_export_command, ExportCommands};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::{Local, NaiveDate};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{
    ids::{AccountId, BudgetId, CategoryId, TransactionId},
    FinanceState,
};
use crate::storage::StateStore;

/// Persist a new state, warning on the console if the write fails
pub(crate) fn persist(store: &StateStore, state: &FinanceState) {
    if let Err(err) = store.save(state) {
        tracing::warn!(error = %err, "state not persisted");
        eprintln!("Warning: changes were applied but could not be saved: {err}");
    }
}

fn matches_id(id_string: &str, short_display: &str, input: &str) -> bool {
    // Empty input would prefix-match every id
    !input.is_empty() && (input == short_display || id_string.starts_with(input))
}

/// Resolve an account reference: name (case-insensitive), short id, or UUID
pub(crate) fn resolve_account(state: &FinanceState, input: &str) -> FinanceResult<AccountId> {
    state
        .accounts
        .iter()
        .find(|a| {
            a.name.eq_ignore_ascii_case(input)
                || matches_id(&a.id.as_uuid().to_string(), &a.id.to_string(), input)
        })
        .map(|a| a.id)
        .ok_or_else(|| FinanceError::account_not_found(input))
}

/// Resolve a category reference: name (case-insensitive), short id, or UUID
pub(crate) fn resolve_category(state: &FinanceState, input: &str) -> FinanceResult<CategoryId> {
    state
        .categories
        .iter()
        .find(|c| {
            c.name.eq_ignore_ascii_case(input)
                || matches_id(&c.id.as_uuid().to_string(), &c.id.to_string(), input)
        })
        .map(|c| c.id)
        .ok_or_else(|| FinanceError::category_not_found(input))
}

/// Resolve a transaction reference: short id or UUID
pub(crate) fn resolve_transaction(state: &FinanceState, input: &str) -> FinanceResult<TransactionId> {
    state
        .transactions
        .iter()
        .find(|t| matches_id(&t.id.as_uuid().to_string(), &t.id.to_string(), input))
        .map(|t| t.id)
        .ok_or_else(|| FinanceError::transaction_not_found(input))
}

/// Resolve a budget reference: short id, UUID, or its category's name
pub(crate) fn resolve_budget(state: &FinanceState, input: &str) -> FinanceResult<BudgetId> {
    state
        .budgets
        .iter()
        .find(|b| {
            matches_id(&b.id.as_uuid().to_string(), &b.id.to_string(), input)
                || state
                    .category(b.category_id)
                    .is_some_and(|c| c.name.eq_ignore_ascii_case(input))
        })
        .map(|b| b.id)
        .ok_or_else(|| FinanceError::budget_not_found(input))
}

/// Parse a YYYY-MM-DD date argument, defaulting to the local calendar date
pub(crate) fn parse_date_arg(input: Option<&str>) -> FinanceResult<NaiveDate> {
    match input {
        None => Ok(Local::now().date_naive()),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            FinanceError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", s))
        }),
    }
}

/// Print a validation failure list and return a single error
pub(crate) fn reject(problems: Vec<String>) -> FinanceError {
    for problem in &problems {
        eprintln!("  - {problem}");
    }
    FinanceError::Validation(format!("{} problem(s) found", problems.len()))
}
