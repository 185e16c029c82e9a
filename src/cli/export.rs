//! Export CLI commands

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{FinanceError, FinanceResult};
use crate::export::{export_accounts_csv, export_transactions_csv};
use crate::models::FinanceState;
use crate::storage::StateStore;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export data as CSV
    Csv {
        /// What to export (transactions, accounts)
        #[arg(default_value = "transactions")]
        what: String,
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn write_csv<W: Write>(state: &FinanceState, what: &str, writer: &mut W) -> FinanceResult<()> {
    match what {
        "transactions" => export_transactions_csv(state, writer),
        "accounts" => export_accounts_csv(state, writer),
        other => Err(FinanceError::Export(format!(
            "Unknown export target '{}'. Valid targets: transactions, accounts",
            other
        ))),
    }
}

/// Handle an export command
pub fn handle_export_command(store: &StateStore, cmd: ExportCommands) -> FinanceResult<()> {
    let state = store.load();

    match cmd {
        ExportCommands::Csv { what, output } => match output {
            Some(path) => {
                let file = File::create(&path).map_err(|e| {
                    FinanceError::Export(format!("Cannot create {}: {}", path.display(), e))
                })?;
                let mut writer = BufWriter::new(file);
                write_csv(&state, &what, &mut writer)?;
                writer
                    .flush()
                    .map_err(|e| FinanceError::Export(e.to_string()))?;
                println!("Exported {} to {}", what, path.display());
            }
            None => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                write_csv(&state, &what, &mut handle)?;
            }
        },
    }

    Ok(())
}
