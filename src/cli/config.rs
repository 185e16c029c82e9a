//! Configuration and preference CLI commands

use clap::Subcommand;

use crate::error::{FinanceError, FinanceResult};
use crate::models::CurrencyCode;
use crate::services;
use crate::storage::StateStore;

use super::persist;

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration and paths
    Show,
    /// Toggle between light and dark theme
    Theme,
    /// Set the display currency
    Currency {
        /// Currency code (INR, USD, EUR, GBP, JPY, AUD, CAD)
        code: String,
    },
}

/// Handle a config command
pub fn handle_config_command(store: &StateStore, cmd: ConfigCommands) -> FinanceResult<()> {
    let state = store.load();

    match cmd {
        ConfigCommands::Show => {
            println!("Data file: {}", store.path().display());
            println!("Theme:     {}", state.theme);
            let info = state.currency.info();
            println!("Currency:  {} ({} {})", info.code, info.symbol, info.name);
            println!("Accounts:     {}", state.accounts.len());
            println!("Categories:   {}", state.categories.len());
            println!("Transactions: {}", state.transactions.len());
            println!("Budgets:      {}", state.budgets.len());
        }

        ConfigCommands::Theme => {
            let next = services::toggle_theme(&state);
            persist(store, &next);
            println!("Theme set to {}", next.theme);
        }

        ConfigCommands::Currency { code } => {
            let currency = CurrencyCode::parse(&code).ok_or_else(|| {
                let valid: Vec<String> =
                    CurrencyCode::ALL.iter().map(|c| c.to_string()).collect();
                FinanceError::Validation(format!(
                    "Unknown currency '{}'. Supported: {}",
                    code,
                    valid.join(", ")
                ))
            })?;

            let next = services::set_currency(&state, currency);
            persist(store, &next);

            let info = currency.info();
            println!("Currency set to {} ({})", info.code, info.name);
        }
    }

    Ok(())
}
