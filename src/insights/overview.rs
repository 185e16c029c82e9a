//! Financial overview
//!
//! One pass over a (optionally date-bounded) transaction window producing
//! totals, per-category breakdowns, a month-by-month trend, and the top
//! expense categories.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::models::{ids::CategoryId, Transaction, TransactionType};

/// Income and expense totals for one calendar month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTotals {
    pub year: i32,
    pub month: u32,
    /// Human-readable label, e.g. "Jan 2025"
    pub label: String,
    pub income: f64,
    pub expenses: f64,
}

/// One category's share of total expenses
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category_id: CategoryId,
    pub amount: f64,
    /// Share of total expenses, 0.0 to 100.0
    pub percentage: f64,
}

/// Aggregated view of a transaction window
#[derive(Debug, Clone, PartialEq)]
pub struct InsightData {
    pub total_income: f64,
    pub total_expenses: f64,
    /// Income minus expenses; may be negative
    pub net_savings: f64,
    /// Net savings as a percentage of income, 0 when there is no income
    pub savings_rate: f64,
    pub expenses_by_category: HashMap<CategoryId, f64>,
    pub income_by_category: HashMap<CategoryId, f64>,
    /// Chronologically ascending, one entry per month with activity
    pub monthly_trend: Vec<MonthlyTotals>,
    /// Up to five expense categories, descending by amount
    pub top_expense_categories: Vec<CategoryShare>,
}

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn month_label(year: i32, month: u32) -> String {
    let name = MONTH_NAMES
        .get(month as usize - 1)
        .copied()
        .unwrap_or("???");
    format!("{name} {year}")
}

/// Aggregate the transactions inside the inclusive date window
///
/// Both bounds are optional; `None` leaves that side open.
pub fn calculate_insights(
    transactions: &[Transaction],
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
) -> InsightData {
    let window: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| date_from.map_or(true, |from| t.date >= from))
        .filter(|t| date_to.map_or(true, |to| t.date <= to))
        .collect();

    let mut total_income = 0.0;
    let mut total_expenses = 0.0;
    let mut expenses_by_category: HashMap<CategoryId, f64> = HashMap::new();
    let mut income_by_category: HashMap<CategoryId, f64> = HashMap::new();
    let mut months: HashMap<(i32, u32), (f64, f64)> = HashMap::new();

    for txn in &window {
        let bucket = months.entry((txn.date.year(), txn.date.month())).or_default();
        match txn.kind {
            TransactionType::Income => {
                total_income += txn.amount;
                *income_by_category.entry(txn.category_id).or_default() += txn.amount;
                bucket.0 += txn.amount;
            }
            TransactionType::Expense => {
                total_expenses += txn.amount;
                *expenses_by_category.entry(txn.category_id).or_default() += txn.amount;
                bucket.1 += txn.amount;
            }
        }
    }

    let net_savings = total_income - total_expenses;
    let savings_rate = if total_income > 0.0 {
        (net_savings / total_income) * 100.0
    } else {
        0.0
    };

    // Months sort on their numeric (year, month) key, never on the label
    let mut monthly_trend: Vec<MonthlyTotals> = months
        .into_iter()
        .map(|((year, month), (income, expenses))| MonthlyTotals {
            year,
            month,
            label: month_label(year, month),
            income,
            expenses,
        })
        .collect();
    monthly_trend.sort_by_key(|m| (m.year, m.month));

    let mut top_expense_categories: Vec<CategoryShare> = expenses_by_category
        .iter()
        .map(|(&category_id, &amount)| CategoryShare {
            category_id,
            amount,
            percentage: if total_expenses > 0.0 {
                (amount / total_expenses) * 100.0
            } else {
                0.0
            },
        })
        .collect();
    top_expense_categories.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    top_expense_categories.truncate(5);

    InsightData {
        total_income,
        total_expenses,
        net_savings,
        savings_rate,
        expenses_by_category,
        income_by_category,
        monthly_trend,
        top_expense_categories,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ids::AccountId;

    fn txn(kind: TransactionType, amount: f64, date: (i32, u32, u32)) -> Transaction {
        Transaction::new(
            AccountId::new(),
            CategoryId::new(),
            kind,
            amount,
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        )
    }

    #[test]
    fn test_totals_and_savings_rate() {
        let set = vec![
            txn(TransactionType::Income, 1000.0, (2025, 5, 1)),
            txn(TransactionType::Expense, 250.0, (2025, 5, 2)),
            txn(TransactionType::Expense, 150.0, (2025, 5, 3)),
        ];

        let insights = calculate_insights(&set, None, None);
        assert_eq!(insights.total_income, 1000.0);
        assert_eq!(insights.total_expenses, 400.0);
        assert_eq!(insights.net_savings, 600.0);
        assert!((insights.savings_rate - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_savings_rate_zero_without_income() {
        let set = vec![txn(TransactionType::Expense, 100.0, (2025, 5, 1))];
        let insights = calculate_insights(&set, None, None);
        assert_eq!(insights.savings_rate, 0.0);
        assert_eq!(insights.net_savings, -100.0);
    }

    #[test]
    fn test_empty_window() {
        let insights = calculate_insights(&[], None, None);
        assert_eq!(insights.total_income, 0.0);
        assert_eq!(insights.total_expenses, 0.0);
        assert_eq!(insights.savings_rate, 0.0);
        assert!(insights.monthly_trend.is_empty());
        assert!(insights.top_expense_categories.is_empty());
    }

    #[test]
    fn test_date_window_is_inclusive() {
        let set = vec![
            txn(TransactionType::Expense, 10.0, (2025, 5, 1)),
            txn(TransactionType::Expense, 20.0, (2025, 5, 15)),
            txn(TransactionType::Expense, 40.0, (2025, 5, 31)),
        ];

        let insights = calculate_insights(
            &set,
            NaiveDate::from_ymd_opt(2025, 5, 1),
            NaiveDate::from_ymd_opt(2025, 5, 15),
        );
        assert_eq!(insights.total_expenses, 30.0);
    }

    #[test]
    fn test_monthly_trend_sorted_chronologically() {
        // December 2024 must precede January 2025 despite label ordering
        let set = vec![
            txn(TransactionType::Expense, 100.0, (2025, 1, 10)),
            txn(TransactionType::Expense, 200.0, (2024, 12, 10)),
            txn(TransactionType::Income, 500.0, (2025, 2, 1)),
        ];

        let insights = calculate_insights(&set, None, None);
        let labels: Vec<&str> = insights.monthly_trend.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["Dec 2024", "Jan 2025", "Feb 2025"]);
        assert_eq!(insights.monthly_trend[0].expenses, 200.0);
        assert_eq!(insights.monthly_trend[2].income, 500.0);
    }

    #[test]
    fn test_top_expense_categories_capped_at_five() {
        let mut set = Vec::new();
        for i in 1..=7 {
            set.push(txn(TransactionType::Expense, i as f64 * 10.0, (2025, 5, 1)));
        }

        let insights = calculate_insights(&set, None, None);
        assert_eq!(insights.top_expense_categories.len(), 5);
        // Descending by amount
        let amounts: Vec<f64> = insights
            .top_expense_categories
            .iter()
            .map(|s| s.amount)
            .collect();
        assert_eq!(amounts, vec![70.0, 60.0, 50.0, 40.0, 30.0]);

        let total_pct: f64 = insights
            .top_expense_categories
            .iter()
            .map(|s| s.percentage)
            .sum();
        assert!(total_pct <= 100.0 + 1e-9);
    }

    #[test]
    fn test_category_breakdown_accumulates() {
        let category_id = CategoryId::new();
        let mut a = txn(TransactionType::Expense, 30.0, (2025, 5, 1));
        a.category_id = category_id;
        let mut b = txn(TransactionType::Expense, 70.0, (2025, 5, 2));
        b.category_id = category_id;

        let insights = calculate_insights(&[a, b], None, None);
        assert_eq!(insights.expenses_by_category[&category_id], 100.0);
        assert_eq!(insights.top_expense_categories[0].percentage, 100.0);
    }
}
