//! Core data models
//!
//! Plain data shapes with constructors and display helpers; behavior lives
//! in `query`, `insights`, and `services`.

pub mod account;
pub mod budget;
pub mod category;
pub mod currency;
pub mod ids;
pub mod state;
pub mod transaction;

pub use account::{Account, AccountKind};
pub use budget::{Budget, BudgetPeriod};
pub use category::Category;
pub use currency::{CurrencyCode, CurrencyInfo};
pub use ids::{AccountId, BudgetId, CategoryId, TransactionId};
pub use state::{FinanceState, Theme, SCHEMA_VERSION};
pub use transaction::{Transaction, TransactionType};
