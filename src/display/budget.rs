//! Budget display formatting

use chrono::NaiveDate;

use crate::insights::budget_status_as_of;
use crate::models::FinanceState;

use super::truncate;

fn progress_bar(percentage: f64, width: usize) -> String {
    let clamped = percentage.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Format every budget with its consumption as of `today`
pub fn format_budget_list(state: &FinanceState, today: NaiveDate) -> String {
    if state.budgets.is_empty() {
        return "No budgets found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:18} {:>10} {:>10} {:>7}\n",
        "ID", "Category", "Spent", "Limit", "Used"
    ));
    output.push_str(&"-".repeat(75));
    output.push('\n');

    for budget in &state.budgets {
        let status = budget_status_as_of(budget, &state.transactions, today);
        let category = state
            .category(budget.category_id)
            .map(|c| c.name.as_str())
            .unwrap_or("(unknown)");

        let marker = if status.is_over_budget {
            " OVER"
        } else if status.is_warning {
            " WARN"
        } else {
            ""
        };

        output.push_str(&format!(
            "{} {} {:>10} {:>10} {:>6.0}% {}{}\n",
            budget.id,
            truncate(category, 18),
            state.currency.format(status.spent),
            state.currency.format(budget.limit),
            status.percentage,
            progress_bar(status.percentage, 12),
            marker
        ));
    }

    output
}
