//! Category model
//!
//! A classification tag for transactions, fixed to exactly one transaction
//! type: a category serves either income or expenses, never both.
//! Categories are seeded from a fixed default catalog and act as static
//! reference data; no create/delete surface is exposed.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::transaction::TransactionType;

/// A transaction classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier
    pub id: CategoryId,

    /// Category name (e.g., "Food & Dining")
    pub name: String,

    /// The transaction type this category serves
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// Display icon (emoji)
    pub icon: String,

    /// Display color (hex string)
    pub color: String,
}

impl Category {
    /// Create a new category
    pub fn new(
        name: impl Into<String>,
        kind: TransactionType,
        icon: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            kind,
            icon: icon.into(),
            color: color.into(),
        }
    }

    /// Check if this is an expense category
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.icon, self.name)
    }
}
