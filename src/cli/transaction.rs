//! Transaction CLI commands

use clap::Subcommand;

use crate::display::{format_transaction_details, format_transaction_list};
use crate::error::{FinanceError, FinanceResult};
use crate::models::TransactionType;
use crate::query::{self, FilterOptions};
use crate::services::{self, NewTransaction, TransactionPatch};
use crate::storage::StateStore;

use super::{parse_date_arg, persist, reject, resolve_account, resolve_category, resolve_transaction};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// income or expense
        kind: String,
        /// Amount (positive)
        amount: f64,
        /// Account name or ID
        #[arg(short, long)]
        account: String,
        /// Category name or ID
        #[arg(short, long)]
        category: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Description
        #[arg(short = 'm', long, default_value = "")]
        description: String,
        /// Tags (repeatable)
        #[arg(short, long)]
        tag: Vec<String>,
    },
    /// List transactions, newest first
    List {
        /// Filter by account name or ID
        #[arg(short, long)]
        account: Option<String>,
        /// Filter by category name or ID
        #[arg(short, long)]
        category: Option<String>,
        /// Filter by type (income, expense)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// Earliest date (YYYY-MM-DD, inclusive)
        #[arg(long)]
        from: Option<String>,
        /// Latest date (YYYY-MM-DD, inclusive)
        #[arg(long)]
        to: Option<String>,
        /// Minimum amount (inclusive)
        #[arg(long)]
        min: Option<f64>,
        /// Maximum amount (inclusive)
        #[arg(long)]
        max: Option<f64>,
        /// Free-text search over description and tags
        #[arg(short, long)]
        search: Option<String>,
        /// Require one of these tags (repeatable)
        #[arg(long)]
        tag: Vec<String>,
        /// Oldest first
        #[arg(long)]
        oldest_first: bool,
    },
    /// Show one transaction
    Show {
        /// Transaction ID
        transaction: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID
        transaction: String,
        /// New amount
        #[arg(long)]
        amount: Option<f64>,
        /// New description
        #[arg(short = 'm', long)]
        description: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New account name or ID
        #[arg(short, long)]
        account: Option<String>,
        /// New category name or ID
        #[arg(short, long)]
        category: Option<String>,
        /// Replace the tag list (repeatable; pass none to clear is not supported)
        #[arg(long)]
        tag: Vec<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        transaction: String,
    },
    /// List every distinct tag in use
    Tags,
}

fn parse_txn_kind(input: &str) -> FinanceResult<TransactionType> {
    TransactionType::parse(input).ok_or_else(|| {
        FinanceError::Validation(format!(
            "Invalid transaction type: '{}'. Valid types: income, expense",
            input
        ))
    })
}

/// Handle a transaction command
pub fn handle_transaction_command(store: &StateStore, cmd: TransactionCommands) -> FinanceResult<()> {
    let state = store.load();

    match cmd {
        TransactionCommands::Add {
            kind,
            amount,
            account,
            category,
            date,
            description,
            tag,
        } => {
            let input = NewTransaction {
                account_id: resolve_account(&state, &account)?,
                category_id: resolve_category(&state, &category)?,
                kind: parse_txn_kind(&kind)?,
                amount,
                description,
                tags: tag,
                date: parse_date_arg(date.as_deref())?,
            };

            let problems = services::validate_transaction(&state, &input);
            if !problems.is_empty() {
                return Err(reject(problems));
            }

            let (next, txn) = services::add_transaction(&state, input);
            persist(store, &next);

            println!("Added {}: {}", txn.kind, next.currency.format(txn.amount));
            println!("  ID: {}", txn.id);
        }

        TransactionCommands::List {
            account,
            category,
            kind,
            from,
            to,
            min,
            max,
            search,
            tag,
            oldest_first,
        } => {
            let mut options = FilterOptions::new();
            if let Some(account) = account {
                options.account_id = Some(resolve_account(&state, &account)?);
            }
            if let Some(category) = category {
                options.category_id = Some(resolve_category(&state, &category)?);
            }
            if let Some(kind) = kind {
                options.kind = Some(parse_txn_kind(&kind)?);
            }
            if let Some(from) = from {
                options.date_from = Some(parse_date_arg(Some(&from))?);
            }
            if let Some(to) = to {
                options.date_to = Some(parse_date_arg(Some(&to))?);
            }
            options.min_amount = min;
            options.max_amount = max;
            options.search = search;
            options.tags = tag;

            let filtered = query::filter_transactions(&state.transactions, &options);
            let sorted = query::sort_by_date(&filtered, oldest_first);
            print!("{}", format_transaction_list(&state, &sorted));
        }

        TransactionCommands::Show { transaction } => {
            let id = resolve_transaction(&state, &transaction)?;
            let txn = state
                .transaction(id)
                .ok_or_else(|| FinanceError::transaction_not_found(&transaction))?;
            print!("{}", format_transaction_details(&state, txn));
        }

        TransactionCommands::Edit {
            transaction,
            amount,
            description,
            date,
            account,
            category,
            tag,
        } => {
            let id = resolve_transaction(&state, &transaction)?;

            let patch = TransactionPatch {
                account_id: account
                    .as_deref()
                    .map(|a| resolve_account(&state, a))
                    .transpose()?,
                category_id: category
                    .as_deref()
                    .map(|c| resolve_category(&state, c))
                    .transpose()?,
                kind: None,
                amount,
                description,
                tags: if tag.is_empty() { None } else { Some(tag) },
                date: date.as_deref().map(|d| parse_date_arg(Some(d))).transpose()?,
            };

            let problems = services::validate_transaction_patch(&state, id, &patch);
            if !problems.is_empty() {
                return Err(reject(problems));
            }

            let next = services::update_transaction(&state, id, patch);
            persist(store, &next);
            println!("Updated transaction: {}", id);
        }

        TransactionCommands::Delete { transaction } => {
            let id = resolve_transaction(&state, &transaction)?;
            let next = services::delete_transaction(&state, id);
            persist(store, &next);
            println!("Deleted transaction: {}", id);
        }

        TransactionCommands::Tags => {
            let tags = query::all_tags(&state.transactions);
            if tags.is_empty() {
                println!("No tags in use.");
            } else {
                for tag in tags {
                    println!("{tag}");
                }
            }
        }
    }

    Ok(())
}
