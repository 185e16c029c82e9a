use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fintrack::cli::{
    handle_account_command, handle_budget_command, handle_config_command, handle_export_command,
    handle_report_command, handle_transaction_command, AccountCommands, BudgetCommands,
    ConfigCommands, ExportCommands, ReportCommands, TransactionCommands,
};
use fintrack::config::paths::FinancePaths;
use fintrack::services;
use fintrack::storage::StateStore;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Personal finance tracker for the terminal",
    long_about = "fintrack keeps your accounts, transactions, and budgets in a \
                  single local JSON file and derives balances, budget status, \
                  and spending insights from the transaction history."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Account management commands
    #[command(subcommand, alias = "acc")]
    Account(AccountCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Reports and insights
    #[command(subcommand)]
    Report(ReportCommands),

    /// Configuration and preferences
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Export data
    #[command(subcommand)]
    Export(ExportCommands),

    /// Discard all data and restore the seeded defaults
    Reset {
        /// Required; resetting throws away every transaction
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = FinancePaths::new()?;
    paths.ensure_directories()?;
    let store = StateStore::open(&paths);

    match cli.command {
        Some(Commands::Account(cmd)) => handle_account_command(&store, cmd)?,
        Some(Commands::Transaction(cmd)) => handle_transaction_command(&store, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&store, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&store, cmd)?,
        Some(Commands::Config(cmd)) => handle_config_command(&store, cmd)?,
        Some(Commands::Export(cmd)) => handle_export_command(&store, cmd)?,
        Some(Commands::Reset { force }) => {
            if !force {
                println!("This discards every account, transaction, and budget.");
                println!("Re-run with --force to confirm.");
            } else {
                let fresh = services::reset_state();
                store.save(&fresh)?;
                println!("Reset complete. Seeded {} accounts, {} categories, {} budgets.",
                    fresh.accounts.len(),
                    fresh.categories.len(),
                    fresh.budgets.len()
                );
            }
        }
        None => {
            println!("fintrack - Personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            println!("Run 'fintrack report summary' for a financial overview.");
        }
    }

    Ok(())
}
