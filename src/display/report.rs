//! Report display formatting

use crate::insights::{InsightData, Trend, TrendReport};
use crate::models::FinanceState;

use super::truncate;

/// Format the financial overview
pub fn format_summary(state: &FinanceState, insights: &InsightData) -> String {
    let currency = state.currency;
    let mut output = String::new();

    output.push_str("Financial Summary\n");
    output.push_str(&"=".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "Income:       {:>14}\n",
        currency.format(insights.total_income)
    ));
    output.push_str(&format!(
        "Expenses:     {:>14}\n",
        currency.format(insights.total_expenses)
    ));
    output.push_str(&format!(
        "Net Savings:  {:>14}\n",
        currency.format(insights.net_savings)
    ));
    output.push_str(&format!(
        "Savings Rate: {:>13.1}%\n",
        insights.savings_rate
    ));

    if !insights.top_expense_categories.is_empty() {
        output.push_str("\nTop Spending Categories\n");
        output.push_str(&"-".repeat(40));
        output.push('\n');
        for share in &insights.top_expense_categories {
            let name = state
                .category(share.category_id)
                .map(|c| c.name.as_str())
                .unwrap_or("(unknown)");
            output.push_str(&format!(
                "{} {:>12} {:>5.1}%\n",
                truncate(name, 18),
                currency.format(share.amount),
                share.percentage
            ));
        }
    }

    if !insights.monthly_trend.is_empty() {
        output.push_str("\nMonthly Trend\n");
        output.push_str(&"-".repeat(40));
        output.push('\n');
        for month in &insights.monthly_trend {
            output.push_str(&format!(
                "{:9} in {:>12}  out {:>12}\n",
                month.label,
                currency.format(month.income),
                currency.format(month.expenses)
            ));
        }
    }

    output
}

/// Format the spending trend comparison
pub fn format_trend_report(state: &FinanceState, report: &TrendReport) -> String {
    let mut output = String::new();

    let direction = match report.trend {
        Trend::Up => "rising",
        Trend::Down => "falling",
        Trend::Stable => "stable",
    };
    output.push_str(&format!(
        "Spending is {} ({:+.1}% vs previous month)\n\n",
        direction, report.change_percentage
    ));

    for period in &report.periods {
        output.push_str(&format!(
            "{:04}-{:02}  {:>12}\n",
            period.year,
            period.month,
            state.currency.format(period.expenses)
        ));
    }

    output
}
