//! Query/filter layer
//!
//! Predicate-based filtering and ordering of the transaction list. All
//! functions are read-only: they return new sequences and never mutate
//! their input.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{AccountId, CategoryId, Transaction, TransactionType};

/// Filter options for the transaction list
///
/// Every supplied option must hold (logical AND); an absent option matches
/// everything. Date and amount bounds are inclusive.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    /// Minimum date (inclusive)
    pub date_from: Option<NaiveDate>,
    /// Maximum date (inclusive)
    pub date_to: Option<NaiveDate>,
    /// Exact category
    pub category_id: Option<CategoryId>,
    /// Exact account
    pub account_id: Option<AccountId>,
    /// Exact transaction type
    pub kind: Option<TransactionType>,
    /// Minimum amount (inclusive)
    pub min_amount: Option<f64>,
    /// Maximum amount (inclusive)
    pub max_amount: Option<f64>,
    /// Case-insensitive substring match on description OR any tag
    pub search: Option<String>,
    /// Non-empty intersection with the transaction's tags; empty = no-op
    pub tags: Vec<String>,
}

impl FilterOptions {
    /// Create an empty filter (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by date range
    pub fn date_range(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_from = Some(from);
        self.date_to = Some(to);
        self
    }

    /// Filter by minimum date (inclusive)
    pub fn from(mut self, from: NaiveDate) -> Self {
        self.date_from = Some(from);
        self
    }

    /// Filter by maximum date (inclusive)
    pub fn to(mut self, to: NaiveDate) -> Self {
        self.date_to = Some(to);
        self
    }

    /// Filter by category
    pub fn category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Filter by account
    pub fn account(mut self, account_id: AccountId) -> Self {
        self.account_id = Some(account_id);
        self
    }

    /// Filter by transaction type
    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Filter by amount range (inclusive)
    pub fn amount_range(mut self, min: f64, max: f64) -> Self {
        self.min_amount = Some(min);
        self.max_amount = Some(max);
        self
    }

    /// Free-text search over description and tags
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    /// Require at least one of these tags
    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Whether a single transaction satisfies every supplied option
    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(from) = self.date_from {
            if txn.date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if txn.date > to {
                return false;
            }
        }
        if let Some(category_id) = self.category_id {
            if txn.category_id != category_id {
                return false;
            }
        }
        if let Some(account_id) = self.account_id {
            if txn.account_id != account_id {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if txn.kind != kind {
                return false;
            }
        }
        if let Some(min) = self.min_amount {
            if txn.amount < min {
                return false;
            }
        }
        if let Some(max) = self.max_amount {
            if txn.amount > max {
                return false;
            }
        }
        if let Some(query) = &self.search {
            let query = query.to_lowercase();
            let matches_description = txn.description.to_lowercase().contains(&query);
            let matches_tags = txn
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&query));
            if !matches_description && !matches_tags {
                return false;
            }
        }
        if !self.tags.is_empty() {
            let has_matching_tag = self.tags.iter().any(|tag| txn.tags.contains(tag));
            if !has_matching_tag {
                return false;
            }
        }
        true
    }
}

/// Return the transactions satisfying every supplied option, order preserved
pub fn filter_transactions(transactions: &[Transaction], options: &FilterOptions) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|t| options.matches(t))
        .cloned()
        .collect()
}

/// Stable sort on calendar date only (not creation timestamp)
///
/// Descending (most recent first) by default; ties keep their relative
/// input order because the comparator never looks past the date.
pub fn sort_by_date(transactions: &[Transaction], ascending: bool) -> Vec<Transaction> {
    let mut sorted = transactions.to_vec();
    if ascending {
        sorted.sort_by(|a, b| a.date.cmp(&b.date));
    } else {
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
    }
    sorted
}

/// Group transactions by calendar date
pub fn group_by_date(transactions: &[Transaction]) -> BTreeMap<NaiveDate, Vec<Transaction>> {
    let mut groups: BTreeMap<NaiveDate, Vec<Transaction>> = BTreeMap::new();
    for txn in transactions {
        groups.entry(txn.date).or_default().push(txn.clone());
    }
    groups
}

/// Distinct tag values across all transactions, lexicographically sorted
pub fn all_tags(transactions: &[Transaction]) -> Vec<String> {
    let mut tags: Vec<String> = transactions
        .iter()
        .flat_map(|t| t.tags.iter().cloned())
        .collect();
    tags.sort();
    tags.dedup();
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountId, CategoryId};

    fn txn(date: (i32, u32, u32), kind: TransactionType, amount: f64) -> Transaction {
        Transaction::new(
            AccountId::new(),
            CategoryId::new(),
            kind,
            amount,
            NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        )
    }

    fn sample_set() -> Vec<Transaction> {
        let mut a = txn((2025, 1, 10), TransactionType::Expense, 50.0);
        a.description = "Grocery Shopping".to_string();
        a.tags = vec!["weekly".to_string()];

        let mut b = txn((2025, 1, 20), TransactionType::Income, 500.0);
        b.description = "Freelance work".to_string();
        b.tags = vec!["client-a".to_string()];

        let mut c = txn((2025, 2, 5), TransactionType::Expense, 120.0);
        c.description = "Electricity Bill".to_string();
        c.tags = vec!["bills".to_string(), "monthly".to_string()];

        vec![a, b, c]
    }

    #[test]
    fn test_empty_filter_matches_all_order_preserved() {
        let set = sample_set();
        let filtered = filter_transactions(&set, &FilterOptions::new());
        assert_eq!(filtered, set);
    }

    #[test]
    fn test_date_range_inclusive() {
        let set = sample_set();
        let options = FilterOptions::new().date_range(
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
        );
        let filtered = filter_transactions(&set, &options);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_kind_and_amount_filters() {
        let set = sample_set();
        let filtered = filter_transactions(
            &set,
            &FilterOptions::new().kind(TransactionType::Expense),
        );
        assert_eq!(filtered.len(), 2);

        let filtered = filter_transactions(&set, &FilterOptions::new().amount_range(50.0, 120.0));
        assert_eq!(filtered.len(), 2); // both bounds inclusive
    }

    #[test]
    fn test_search_matches_description_or_tags() {
        let set = sample_set();

        let by_desc = filter_transactions(&set, &FilterOptions::new().search("GROCERY"));
        assert_eq!(by_desc.len(), 1);
        assert_eq!(by_desc[0].description, "Grocery Shopping");

        let by_tag = filter_transactions(&set, &FilterOptions::new().search("client"));
        assert_eq!(by_tag.len(), 1);
        assert_eq!(by_tag[0].description, "Freelance work");
    }

    #[test]
    fn test_tag_set_intersection() {
        let set = sample_set();
        let options = FilterOptions::new().tags(vec!["bills".to_string(), "weekly".to_string()]);
        let filtered = filter_transactions(&set, &options);
        assert_eq!(filtered.len(), 2);

        // Empty tag set is a no-op
        let filtered = filter_transactions(&set, &FilterOptions::new().tags(vec![]));
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_filters_are_a_conjunction() {
        let set = sample_set();

        // Applying two options at once equals applying them in sequence
        let combined = filter_transactions(
            &set,
            &FilterOptions::new()
                .kind(TransactionType::Expense)
                .search("bill"),
        );
        let sequential = filter_transactions(
            &filter_transactions(&set, &FilterOptions::new().kind(TransactionType::Expense)),
            &FilterOptions::new().search("bill"),
        );
        assert_eq!(combined, sequential);
        assert_eq!(combined.len(), 1);
    }

    #[test]
    fn test_sort_by_date_descending_default() {
        let set = sample_set();
        let sorted = sort_by_date(&set, false);
        assert_eq!(sorted[0].date, NaiveDate::from_ymd_opt(2025, 2, 5).unwrap());
        assert_eq!(sorted[2].date, NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());

        let ascending = sort_by_date(&sorted, true);
        assert_eq!(
            ascending[0].date,
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
        );
    }

    #[test]
    fn test_sort_is_idempotent_and_stable() {
        let set = sample_set();
        let once = sort_by_date(&set, false);
        let twice = sort_by_date(&once, false);
        assert_eq!(once, twice);

        // Two transactions on the same date keep their input order
        let mut a = txn((2025, 3, 1), TransactionType::Expense, 1.0);
        a.description = "first".to_string();
        let mut b = txn((2025, 3, 1), TransactionType::Expense, 2.0);
        b.description = "second".to_string();
        let sorted = sort_by_date(&[a, b], false);
        assert_eq!(sorted[0].description, "first");
        assert_eq!(sorted[1].description, "second");
    }

    #[test]
    fn test_group_by_date() {
        let set = sample_set();
        let groups = group_by_date(&set);
        assert_eq!(groups.len(), 3);
        assert_eq!(
            groups[&NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()].len(),
            1
        );
    }

    #[test]
    fn test_all_tags_sorted_distinct() {
        let set = sample_set();
        let tags = all_tags(&set);
        assert_eq!(tags, vec!["bills", "client-a", "monthly", "weekly"]);
    }
}
