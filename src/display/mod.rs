//! Terminal display formatting

pub mod account;
pub mod budget;
pub mod report;
pub mod transaction;

pub use account::format_account_list;
pub use budget::format_budget_list;
pub use report::{format_summary, format_trend_report};
pub use transaction::{format_transaction_details, format_transaction_list};

/// Truncate a string to a maximum length, padding shorter ones
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
