//! State transition façade
//!
//! Every mutation is a pure function from a state to a new state; the
//! caller owns persistence. Updates targeting a missing id return the
//! input unchanged, and deleting an account also removes its transactions.

pub mod account;
pub mod budget;
pub mod settings;
pub mod transaction;
pub mod validation;

pub use account::{add_account, delete_account, update_account, AccountPatch, NewAccount};
pub use budget::{add_budget, delete_budget, update_budget, BudgetPatch, NewBudget};
pub use settings::{reset_state, set_currency, toggle_theme};
pub use transaction::{
    add_transaction, delete_transaction, update_transaction, NewTransaction, TransactionPatch,
};
pub use validation::{
    validate_account, validate_account_patch, validate_budget, validate_budget_patch,
    validate_transaction, validate_transaction_patch,
};
