//! Budget model
//!
//! A spending limit on one category over a recurring period.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{BudgetId, CategoryId};

/// Recurring budget period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    /// Resets on the first day of each calendar month
    #[default]
    Monthly,
    /// Resets on the first day of each calendar year
    Yearly,
}

impl BudgetPeriod {
    /// Parse a budget period from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "monthly" => Some(Self::Monthly),
            "yearly" => Some(Self::Yearly),
            _ => None,
        }
    }
}

impl fmt::Display for BudgetPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Monthly => write!(f, "Monthly"),
            Self::Yearly => write!(f, "Yearly"),
        }
    }
}

/// A spending limit for one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Unique identifier
    pub id: BudgetId,

    /// The category this limit applies to
    #[serde(rename = "categoryId")]
    pub category_id: CategoryId,

    /// The spending limit (positive)
    pub limit: f64,

    /// How often the window resets
    pub period: BudgetPeriod,
}

impl Budget {
    /// Create a new budget
    pub fn new(category_id: CategoryId, limit: f64, period: BudgetPeriod) -> Self {
        Self {
            id: BudgetId::new(),
            category_id,
            limit,
            period,
        }
    }
}
