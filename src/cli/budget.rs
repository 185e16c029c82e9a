//! Budget CLI commands

use chrono::Local;
use clap::Subcommand;

use crate::display::format_budget_list;
use crate::error::{FinanceError, FinanceResult};
use crate::insights::budget_status;
use crate::models::BudgetPeriod;
use crate::services::{self, BudgetPatch, NewBudget};
use crate::storage::StateStore;

use super::{persist, reject, resolve_budget, resolve_category};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Create a budget for an expense category
    Set {
        /// Category name or ID
        category: String,
        /// Spending limit for the period
        limit: f64,
        /// Budget period (monthly, yearly)
        #[arg(short, long, default_value = "monthly")]
        period: String,
    },
    /// List budgets with current-period consumption
    List,
    /// Show one budget's status
    Show {
        /// Budget ID or its category's name
        budget: String,
    },
    /// Change a budget's limit or period
    Edit {
        /// Budget ID or its category's name
        budget: String,
        /// New limit
        #[arg(short, long)]
        limit: Option<f64>,
        /// New period (monthly, yearly)
        #[arg(short, long)]
        period: Option<String>,
    },
    /// Delete a budget
    Delete {
        /// Budget ID or its category's name
        budget: String,
    },
}

fn parse_period(input: &str) -> FinanceResult<BudgetPeriod> {
    BudgetPeriod::parse(input).ok_or_else(|| {
        FinanceError::Validation(format!(
            "Invalid period: '{}'. Valid periods: monthly, yearly",
            input
        ))
    })
}

/// Handle a budget command
pub fn handle_budget_command(store: &StateStore, cmd: BudgetCommands) -> FinanceResult<()> {
    let state = store.load();

    match cmd {
        BudgetCommands::Set {
            category,
            limit,
            period,
        } => {
            let input = NewBudget {
                category_id: resolve_category(&state, &category)?,
                limit,
                period: parse_period(&period)?,
            };

            let problems = services::validate_budget(&state, &input);
            if !problems.is_empty() {
                return Err(reject(problems));
            }

            let (next, budget) = services::add_budget(&state, input);
            persist(store, &next);

            println!(
                "Set {} budget of {} for {}",
                budget.period,
                next.currency.format(budget.limit),
                category
            );
            println!("  ID: {}", budget.id);
        }

        BudgetCommands::List => {
            print!("{}", format_budget_list(&state, Local::now().date_naive()));
        }

        BudgetCommands::Show { budget } => {
            let id = resolve_budget(&state, &budget)?;
            let found = state
                .budget(id)
                .ok_or_else(|| FinanceError::budget_not_found(&budget))?;
            let category = state
                .category(found.category_id)
                .map(|c| c.name.as_str())
                .unwrap_or("(unknown)");
            let status = budget_status(found, &state.transactions);

            println!("Budget: {} ({})", category, found.period);
            println!("  Limit:     {}", state.currency.format(found.limit));
            println!("  Spent:     {}", state.currency.format(status.spent));
            println!("  Remaining: {}", state.currency.format(status.remaining));
            println!("  Used:      {:.1}%", status.percentage);
            if status.is_over_budget {
                println!("  Status:    OVER BUDGET");
            } else if status.is_warning {
                println!("  Status:    approaching the limit");
            } else {
                println!("  Status:    on track");
            }
        }

        BudgetCommands::Edit {
            budget,
            limit,
            period,
        } => {
            let id = resolve_budget(&state, &budget)?;

            if limit.is_none() && period.is_none() {
                println!("No changes specified.");
                return Ok(());
            }

            let patch = BudgetPatch {
                category_id: None,
                limit,
                period: period.as_deref().map(parse_period).transpose()?,
            };

            let problems = services::validate_budget_patch(&state, id, &patch);
            if !problems.is_empty() {
                return Err(reject(problems));
            }

            let next = services::update_budget(&state, id, patch);
            persist(store, &next);
            println!("Updated budget: {}", id);
        }

        BudgetCommands::Delete { budget } => {
            let id = resolve_budget(&state, &budget)?;
            let next = services::delete_budget(&state, id);
            persist(store, &next);
            println!("Deleted budget: {}", id);
        }
    }

    Ok(())
}
