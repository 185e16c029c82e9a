//! Data export

pub mod csv;

pub use csv::{export_accounts_csv, export_transactions_csv};
