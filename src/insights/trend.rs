//! Spending trend
//!
//! Compares the current month's expenses against the previous month's and
//! classifies the direction of change.

use chrono::{Datelike, Local, NaiveDate};

use crate::models::Transaction;

/// Direction of spending change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    /// Spending rose by more than 10%
    Up,
    /// Spending fell by more than 10%
    Down,
    /// Within the ±10% band, or not enough history
    Stable,
}

/// One monthly expense total, most recent first
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPeriod {
    pub year: i32,
    pub month: u32,
    pub expenses: f64,
}

/// Outcome of the trend comparison
#[derive(Debug, Clone, PartialEq)]
pub struct TrendReport {
    pub trend: Trend,
    /// Percent change of the current month versus the previous one;
    /// 0 when the previous month had no expenses
    pub change_percentage: f64,
    /// The examined months, most recent first
    pub periods: Vec<TrendPeriod>,
}

fn months_back(year: i32, month: u32, back: u32) -> (i32, u32) {
    let total = year * 12 + month as i32 - 1 - back as i32;
    (total.div_euclid(12), (total.rem_euclid(12) + 1) as u32)
}

/// Classify the spending trend over the last `months` calendar months,
/// counted back from `today`
pub fn expense_trend_as_of(transactions: &[Transaction], months: u32, today: NaiveDate) -> TrendReport {
    let periods: Vec<TrendPeriod> = (0..months)
        .map(|back| {
            let (year, month) = months_back(today.year(), today.month(), back);
            let expenses = transactions
                .iter()
                .filter(|t| t.is_expense())
                .filter(|t| t.date.year() == year && t.date.month() == month)
                .map(|t| t.amount)
                .sum();
            TrendPeriod {
                year,
                month,
                expenses,
            }
        })
        .collect();

    if periods.len() < 2 {
        return TrendReport {
            trend: Trend::Stable,
            change_percentage: 0.0,
            periods,
        };
    }

    let current = periods[0].expenses;
    let previous = periods[1].expenses;
    let change_percentage = if previous > 0.0 {
        ((current - previous) / previous) * 100.0
    } else {
        0.0
    };

    let trend = if change_percentage > 10.0 {
        Trend::Up
    } else if change_percentage < -10.0 {
        Trend::Down
    } else {
        Trend::Stable
    };

    TrendReport {
        trend,
        change_percentage,
        periods,
    }
}

/// Classify the spending trend as of the local calendar date
pub fn expense_trend(transactions: &[Transaction], months: u32) -> TrendReport {
    expense_trend_as_of(transactions, months, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ids::{AccountId, CategoryId},
        TransactionType,
    };

    fn expense(amount: f64, date: (i32, u32, u32)) -> Transaction {
        Transaction::new(
            AccountId::new(),
            CategoryId::new(),
            TransactionType::Expense,
            amount,
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        )
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_halved_spending_is_down() {
        let txns = vec![
            expense(500.0, (2025, 6, 5)),
            expense(1000.0, (2025, 5, 20)),
        ];

        let report = expense_trend_as_of(&txns, 2, today());
        assert_eq!(report.trend, Trend::Down);
        assert!((report.change_percentage + 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_rising_spending_is_up() {
        let txns = vec![
            expense(300.0, (2025, 6, 5)),
            expense(200.0, (2025, 5, 20)),
        ];

        let report = expense_trend_as_of(&txns, 2, today());
        assert_eq!(report.trend, Trend::Up);
        assert!((report.change_percentage - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_within_band_is_stable() {
        let txns = vec![
            expense(105.0, (2025, 6, 5)),
            expense(100.0, (2025, 5, 20)),
        ];

        let report = expense_trend_as_of(&txns, 2, today());
        assert_eq!(report.trend, Trend::Stable);
    }

    #[test]
    fn test_no_previous_spending_is_stable() {
        let txns = vec![expense(999.0, (2025, 6, 5))];

        let report = expense_trend_as_of(&txns, 2, today());
        assert_eq!(report.trend, Trend::Stable);
        assert_eq!(report.change_percentage, 0.0);
    }

    #[test]
    fn test_single_period_is_stable() {
        let txns = vec![expense(100.0, (2025, 6, 5))];
        let report = expense_trend_as_of(&txns, 1, today());
        assert_eq!(report.trend, Trend::Stable);
        assert_eq!(report.periods.len(), 1);
    }

    #[test]
    fn test_year_boundary_bucketing() {
        let jan_today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let txns = vec![
            expense(50.0, (2025, 1, 5)),
            expense(200.0, (2024, 12, 20)),
        ];

        let report = expense_trend_as_of(&txns, 2, jan_today);
        assert_eq!(report.periods[1].year, 2024);
        assert_eq!(report.periods[1].month, 12);
        assert_eq!(report.trend, Trend::Down);
    }
}
