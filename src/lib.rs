//! fintrack - Personal finance tracker for the terminal
//!
//! This library provides the core functionality for the fintrack CLI. It
//! keeps a single JSON document of accounts, categories, transactions, and
//! budgets, and derives everything else (balances, budget consumption,
//! spending insights) on demand.
//!
//! # Architecture
//!
//! - `config`: Path management
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, transactions, categories, budgets)
//! - `storage`: JSON file storage with seeding and schema migration
//! - `query`: Filtering and ordering of the transaction list
//! - `insights`: Aggregations derived from the transaction history
//! - `services`: Pure state transitions and input validation
//! - `export`: CSV export
//! - `display`: Terminal formatting
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::config::paths::FinancePaths;
//! use fintrack::storage::StateStore;
//!
//! let paths = FinancePaths::new()?;
//! let store = StateStore::open(&paths);
//! let state = store.load();
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod insights;
pub mod models;
pub mod query;
pub mod services;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
