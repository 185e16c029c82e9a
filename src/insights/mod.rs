//! Aggregation engine
//!
//! Read-only derivations over the transaction history: financial overview,
//! budget consumption, account balances, and spending trend. Every function
//! takes slices and returns fresh values; nothing here touches storage.

pub mod balance;
pub mod budget_status;
pub mod overview;
pub mod trend;

pub use balance::{account_balance, total_balance};
pub use budget_status::{budget_status, budget_status_as_of, BudgetStatus};
pub use overview::{calculate_insights, CategoryShare, InsightData, MonthlyTotals};
pub use trend::{expense_trend, expense_trend_as_of, Trend, TrendReport};
