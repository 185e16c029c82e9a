//! Transaction mutations

use chrono::NaiveDate;

use crate::models::{
    ids::{AccountId, CategoryId, TransactionId},
    FinanceState, Transaction, TransactionType,
};

/// Caller-supplied fields for a new transaction
///
/// The id and creation timestamp are assigned here, not by the caller.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub account_id: AccountId,
    pub category_id: CategoryId,
    pub kind: TransactionType,
    pub amount: f64,
    pub description: String,
    pub tags: Vec<String>,
    pub date: NaiveDate,
}

/// Partial update of an existing transaction; absent fields keep their value
#[derive(Debug, Clone, Default)]
pub struct TransactionPatch {
    pub account_id: Option<AccountId>,
    pub category_id: Option<CategoryId>,
    pub kind: Option<TransactionType>,
    pub amount: Option<f64>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub date: Option<NaiveDate>,
}

/// Add a transaction; the new entry goes to the front of the list
pub fn add_transaction(state: &FinanceState, input: NewTransaction) -> (FinanceState, Transaction) {
    let mut txn = Transaction::new(
        input.account_id,
        input.category_id,
        input.kind,
        input.amount,
        input.date,
    );
    txn.description = input.description;
    txn.tags = input.tags;

    let mut next = state.clone();
    next.transactions.insert(0, txn.clone());
    (next, txn)
}

/// Apply a patch to the transaction with the given id
///
/// Unknown ids leave the state untouched.
pub fn update_transaction(
    state: &FinanceState,
    id: TransactionId,
    patch: TransactionPatch,
) -> FinanceState {
    let mut next = state.clone();
    if let Some(txn) = next.transactions.iter_mut().find(|t| t.id == id) {
        if let Some(account_id) = patch.account_id {
            txn.account_id = account_id;
        }
        if let Some(category_id) = patch.category_id {
            txn.category_id = category_id;
        }
        if let Some(kind) = patch.kind {
            txn.kind = kind;
        }
        if let Some(amount) = patch.amount {
            txn.amount = amount;
        }
        if let Some(description) = patch.description {
            txn.description = description;
        }
        if let Some(tags) = patch.tags {
            txn.tags = tags;
        }
        if let Some(date) = patch.date {
            txn.date = date;
        }
    }
    next
}

/// Remove the transaction with the given id; unknown ids are a no-op
pub fn delete_transaction(state: &FinanceState, id: TransactionId) -> FinanceState {
    let mut next = state.clone();
    next.transactions.retain(|t| t.id != id);
    next
}
