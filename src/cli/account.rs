//! Account CLI commands

use clap::Subcommand;

use crate::display::format_account_list;
use crate::error::{FinanceError, FinanceResult};
use crate::insights::account_balance;
use crate::models::AccountKind;
use crate::services::{self, AccountPatch, NewAccount};
use crate::storage::StateStore;

use super::{persist, reject, resolve_account};

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Add a new account
    Add {
        /// Account name
        name: String,
        /// Account type (cash, bank, wallet)
        #[arg(short = 't', long = "type", default_value = "bank")]
        kind: String,
        /// Starting balance
        #[arg(short, long, default_value_t = 0.0)]
        balance: f64,
        /// Display color (hex)
        #[arg(long, default_value = "#3b82f6")]
        color: String,
        /// Display icon
        #[arg(long, default_value = "💳")]
        icon: String,
    },
    /// List all accounts with derived balances
    List,
    /// Show one account
    Show {
        /// Account name or ID
        account: String,
    },
    /// Edit an account's name, type, color, or icon
    Edit {
        /// Account name or ID
        account: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New type (cash, bank, wallet)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// New color
        #[arg(long)]
        color: Option<String>,
        /// New icon
        #[arg(long)]
        icon: Option<String>,
    },
    /// Delete an account and every transaction on it
    Delete {
        /// Account name or ID
        account: String,
    },
}

fn parse_kind(input: &str) -> FinanceResult<AccountKind> {
    AccountKind::parse(input).ok_or_else(|| {
        FinanceError::Validation(format!(
            "Invalid account type: '{}'. Valid types: cash, bank, wallet",
            input
        ))
    })
}

/// Handle an account command
pub fn handle_account_command(store: &StateStore, cmd: AccountCommands) -> FinanceResult<()> {
    let state = store.load();

    match cmd {
        AccountCommands::Add {
            name,
            kind,
            balance,
            color,
            icon,
        } => {
            let input = NewAccount {
                name,
                kind: parse_kind(&kind)?,
                balance,
                color,
                icon,
            };

            let problems = services::validate_account(&state, &input);
            if !problems.is_empty() {
                return Err(reject(problems));
            }

            let (next, account) = services::add_account(&state, input);
            persist(store, &next);

            println!("Added account: {}", account.name);
            println!("  Type:             {}", account.kind);
            println!(
                "  Starting Balance: {}",
                next.currency.format(account.balance)
            );
            println!("  ID:               {}", account.id);
        }

        AccountCommands::List => {
            print!("{}", format_account_list(&state));
        }

        AccountCommands::Show { account } => {
            let id = resolve_account(&state, &account)?;
            let found = state
                .account(id)
                .ok_or_else(|| FinanceError::account_not_found(&account))?;
            let balance = account_balance(id, found.balance, &state.transactions);

            println!("Account: {} {}", found.icon, found.name);
            println!("  Type:             {}", found.kind);
            println!(
                "  Starting Balance: {}",
                state.currency.format(found.balance)
            );
            println!("  Current Balance:  {}", state.currency.format(balance));
            println!("  ID:               {}", found.id);
        }

        AccountCommands::Edit {
            account,
            name,
            kind,
            color,
            icon,
        } => {
            let id = resolve_account(&state, &account)?;

            if name.is_none() && kind.is_none() && color.is_none() && icon.is_none() {
                println!("No changes specified.");
                return Ok(());
            }

            let patch = AccountPatch {
                name,
                kind: kind.as_deref().map(parse_kind).transpose()?,
                color,
                icon,
            };

            let problems = services::validate_account_patch(&state, id, &patch);
            if !problems.is_empty() {
                return Err(reject(problems));
            }

            let next = services::update_account(&state, id, patch);
            persist(store, &next);

            if let Some(updated) = next.account(id) {
                println!("Updated account: {}", updated.name);
            }
        }

        AccountCommands::Delete { account } => {
            let id = resolve_account(&state, &account)?;
            let name = state
                .account(id)
                .map(|a| a.name.clone())
                .unwrap_or_default();
            let removed = state
                .transactions
                .iter()
                .filter(|t| t.account_id == id)
                .count();

            let next = services::delete_account(&state, id);
            persist(store, &next);

            println!("Deleted account: {} ({} transaction(s) removed)", name, removed);
        }
    }

    Ok(())
}
