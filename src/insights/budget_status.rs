//! Budget consumption
//!
//! Computes how much of a budget's limit the current period has consumed.
//! A monthly budget's window starts on the first of the current month, a
//! yearly one on January 1st of the current year. The window has no upper
//! bound, so a forward-dated entry inside the period already counts.

use chrono::{Datelike, Local, NaiveDate};

use crate::models::{Budget, BudgetPeriod, Transaction};

/// Consumption of one budget within its current period
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    /// Total expenses in the budget's category this period
    pub spent: f64,
    /// Limit minus spent, clamped at zero
    pub remaining: f64,
    /// Spent as a percentage of the limit; 0 when the limit is 0
    pub percentage: f64,
    /// Strictly over the limit (spending exactly the limit is not over)
    pub is_over_budget: bool,
    /// At or past 80% but not yet over
    pub is_warning: bool,
}

fn period_start(period: BudgetPeriod, today: NaiveDate) -> NaiveDate {
    match period {
        BudgetPeriod::Monthly => NaiveDate::from_ymd_opt(today.year(), today.month(), 1),
        BudgetPeriod::Yearly => NaiveDate::from_ymd_opt(today.year(), 1, 1),
    }
    .unwrap_or(today)
}

/// Evaluate a budget against the given transaction history, as of `today`
pub fn budget_status_as_of(
    budget: &Budget,
    transactions: &[Transaction],
    today: NaiveDate,
) -> BudgetStatus {
    let start = period_start(budget.period, today);

    let spent: f64 = transactions
        .iter()
        .filter(|t| t.is_expense())
        .filter(|t| t.category_id == budget.category_id)
        .filter(|t| t.date >= start)
        .map(|t| t.amount)
        .sum();

    let remaining = (budget.limit - spent).max(0.0);
    let percentage = if budget.limit > 0.0 {
        (spent / budget.limit) * 100.0
    } else {
        0.0
    };
    let is_over_budget = spent > budget.limit;
    let is_warning = percentage >= 80.0 && !is_over_budget;

    BudgetStatus {
        spent,
        remaining,
        percentage,
        is_over_budget,
        is_warning,
    }
}

/// Evaluate a budget as of the local calendar date
pub fn budget_status(budget: &Budget, transactions: &[Transaction]) -> BudgetStatus {
    budget_status_as_of(budget, transactions, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ids::{AccountId, CategoryId},
        TransactionType,
    };

    fn expense(category_id: CategoryId, amount: f64, date: NaiveDate) -> Transaction {
        Transaction::new(
            AccountId::new(),
            category_id,
            TransactionType::Expense,
            amount,
            date,
        )
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_warning_at_ninety_percent() {
        let category_id = CategoryId::new();
        let budget = Budget::new(category_id, 600.0, BudgetPeriod::Monthly);
        let txns = vec![
            expense(category_id, 300.0, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()),
            expense(category_id, 240.0, NaiveDate::from_ymd_opt(2025, 6, 10).unwrap()),
        ];

        let status = budget_status_as_of(&budget, &txns, today());
        assert_eq!(status.spent, 540.0);
        assert_eq!(status.remaining, 60.0);
        assert!((status.percentage - 90.0).abs() < 1e-9);
        assert!(status.is_warning);
        assert!(!status.is_over_budget);
    }

    #[test]
    fn test_spending_exactly_the_limit_is_not_over() {
        let category_id = CategoryId::new();
        let budget = Budget::new(category_id, 100.0, BudgetPeriod::Monthly);
        let txns = vec![expense(
            category_id,
            100.0,
            NaiveDate::from_ymd_opt(2025, 6, 5).unwrap(),
        )];

        let status = budget_status_as_of(&budget, &txns, today());
        assert!(!status.is_over_budget);
        assert!(status.is_warning);
        assert_eq!(status.remaining, 0.0);
    }

    #[test]
    fn test_over_budget_clamps_remaining() {
        let category_id = CategoryId::new();
        let budget = Budget::new(category_id, 100.0, BudgetPeriod::Monthly);
        let txns = vec![expense(
            category_id,
            150.0,
            NaiveDate::from_ymd_opt(2025, 6, 5).unwrap(),
        )];

        let status = budget_status_as_of(&budget, &txns, today());
        assert!(status.is_over_budget);
        assert!(!status.is_warning);
        assert_eq!(status.remaining, 0.0);
        assert!((status.percentage - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_window_excludes_other_periods_and_categories() {
        let category_id = CategoryId::new();
        let budget = Budget::new(category_id, 500.0, BudgetPeriod::Monthly);
        let txns = vec![
            // Previous month
            expense(category_id, 400.0, NaiveDate::from_ymd_opt(2025, 5, 30).unwrap()),
            // Other category, this month
            expense(CategoryId::new(), 99.0, NaiveDate::from_ymd_opt(2025, 6, 5).unwrap()),
            // Counted
            expense(category_id, 50.0, NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()),
        ];

        let status = budget_status_as_of(&budget, &txns, today());
        assert_eq!(status.spent, 50.0);
    }

    #[test]
    fn test_yearly_window_spans_the_year() {
        let category_id = CategoryId::new();
        let budget = Budget::new(category_id, 1000.0, BudgetPeriod::Yearly);
        let txns = vec![
            expense(category_id, 200.0, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()),
            expense(category_id, 100.0, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()),
        ];

        let status = budget_status_as_of(&budget, &txns, today());
        assert_eq!(status.spent, 200.0);
    }

    #[test]
    fn test_zero_limit_yields_zero_percentage() {
        let category_id = CategoryId::new();
        let budget = Budget::new(category_id, 0.0, BudgetPeriod::Monthly);
        let txns = vec![expense(
            category_id,
            10.0,
            NaiveDate::from_ymd_opt(2025, 6, 5).unwrap(),
        )];

        let status = budget_status_as_of(&budget, &txns, today());
        assert_eq!(status.percentage, 0.0);
        assert!(status.is_over_budget);
    }
}
