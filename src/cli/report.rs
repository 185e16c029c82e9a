//! Report CLI commands

use clap::Subcommand;

use crate::display::{format_summary, format_trend_report};
use crate::error::FinanceResult;
use crate::insights::{calculate_insights, expense_trend};
use crate::storage::StateStore;

use super::parse_date_arg;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Financial overview: totals, savings rate, top categories, monthly trend
    Summary {
        /// Earliest date (YYYY-MM-DD, inclusive)
        #[arg(long)]
        from: Option<String>,
        /// Latest date (YYYY-MM-DD, inclusive)
        #[arg(long)]
        to: Option<String>,
    },
    /// Spending trend: current month versus the previous one
    Trend {
        /// How many months to examine
        #[arg(short, long, default_value_t = 3)]
        months: u32,
    },
}

/// Handle a report command
pub fn handle_report_command(store: &StateStore, cmd: ReportCommands) -> FinanceResult<()> {
    let state = store.load();

    match cmd {
        ReportCommands::Summary { from, to } => {
            let from = from.as_deref().map(|d| parse_date_arg(Some(d))).transpose()?;
            let to = to.as_deref().map(|d| parse_date_arg(Some(d))).transpose()?;

            let insights = calculate_insights(&state.transactions, from, to);
            print!("{}", format_summary(&state, &insights));
        }

        ReportCommands::Trend { months } => {
            let report = expense_trend(&state.transactions, months);
            print!("{}", format_trend_report(&state, &report));
        }
    }

    Ok(())
}
