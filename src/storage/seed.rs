//! Seeded default state
//!
//! Pure constructors that return fresh, independently-owned collections on
//! every call. Nothing here is shared or cached, so two calls can never
//! alias each other's data.

use chrono::{Days, Local, NaiveDate, NaiveTime};

use crate::models::{
    Account, AccountKind, Budget, BudgetPeriod, Category, CurrencyCode, FinanceState, Theme,
    Transaction, TransactionType, SCHEMA_VERSION,
};

/// Default money holdings (seed balances sum to 19120.75)
pub fn default_accounts() -> Vec<Account> {
    vec![
        Account::with_style("Cash", AccountKind::Cash, 2450.0, "#10b981", "💵"),
        Account::with_style("Bank Account", AccountKind::Bank, 15780.5, "#3b82f6", "🏦"),
        Account::with_style("Digital Wallet", AccountKind::Wallet, 890.25, "#8b5cf6", "📱"),
    ]
}

/// The fixed default category catalog (4 income, 8 expense)
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new("Salary", Income, "💰", "#10b981"),
        Category::new("Freelance", Income, "💻", "#06b6d4"),
        Category::new("Investments", Income, "📈", "#8b5cf6"),
        Category::new("Other Income", Income, "🎁", "#f59e0b"),
        Category::new("Food & Dining", Expense, "🍔", "#ef4444"),
        Category::new("Transportation", Expense, "🚗", "#f97316"),
        Category::new("Shopping", Expense, "🛍️", "#ec4899"),
        Category::new("Entertainment", Expense, "🎬", "#a855f7"),
        Category::new("Bills & Utilities", Expense, "📄", "#6366f1"),
        Category::new("Healthcare", Expense, "🏥", "#14b8a6"),
        Category::new("Education", Expense, "📚", "#0ea5e9"),
        Category::new("Travel", Expense, "✈️", "#f43f5e"),
    ]
}

/// Default monthly budgets, wired to the given category catalog by name
pub fn default_budgets(categories: &[Category]) -> Vec<Budget> {
    let limits = [
        ("Food & Dining", 600.0),
        ("Transportation", 300.0),
        ("Shopping", 400.0),
        ("Entertainment", 200.0),
        ("Bills & Utilities", 500.0),
    ];

    limits
        .iter()
        .filter_map(|(name, limit)| {
            categories
                .iter()
                .find(|c| c.name == *name)
                .map(|c| Budget::new(c.id, *limit, BudgetPeriod::Monthly))
        })
        .collect()
}

struct SeedTxn {
    kind: TransactionType,
    category: &'static str,
    amount: f64,
    desc: &'static str,
    account: &'static str,
    days_ago: u64,
    tags: &'static [&'static str],
}

impl SeedTxn {
    const fn row(
        kind: TransactionType,
        category: &'static str,
        amount: f64,
        desc: &'static str,
        account: &'static str,
        days_ago: u64,
        tags: &'static [&'static str],
    ) -> Self {
        Self {
            kind,
            category,
            amount,
            desc,
            account,
            days_ago,
            tags,
        }
    }
}

use TransactionType::{Expense, Income};

#[rustfmt::skip]
const SEED_TXNS: &[SeedTxn] = &[
    SeedTxn::row(Income, "Salary", 5500.0, "Monthly Salary", "Bank Account", 2, &[]),
    SeedTxn::row(Income, "Salary", 5500.0, "Monthly Salary", "Bank Account", 32, &[]),
    SeedTxn::row(Income, "Salary", 5500.0, "Monthly Salary", "Bank Account", 62, &[]),
    SeedTxn::row(Income, "Freelance", 1200.0, "Website Project", "Digital Wallet", 5, &["client-a"]),
    SeedTxn::row(Income, "Freelance", 800.0, "Logo Design", "Digital Wallet", 15, &["design"]),
    SeedTxn::row(Income, "Investments", 350.0, "Stock Dividends", "Bank Account", 10, &[]),
    SeedTxn::row(Income, "Freelance", 2000.0, "Mobile App Project", "Bank Account", 45, &["client-b"]),
    SeedTxn::row(Expense, "Food & Dining", 85.5, "Grocery Shopping", "Cash", 1, &["weekly"]),
    SeedTxn::row(Expense, "Food & Dining", 42.0, "Restaurant Dinner", "Cash", 3, &[]),
    SeedTxn::row(Expense, "Food & Dining", 28.5, "Coffee & Snacks", "Digital Wallet", 4, &[]),
    SeedTxn::row(Expense, "Food & Dining", 95.0, "Grocery Shopping", "Cash", 8, &["weekly"]),
    SeedTxn::row(Expense, "Food & Dining", 65.0, "Takeout Orders", "Digital Wallet", 12, &[]),
    SeedTxn::row(Expense, "Transportation", 55.0, "Gas Station", "Cash", 2, &[]),
    SeedTxn::row(Expense, "Transportation", 120.0, "Car Maintenance", "Bank Account", 14, &["maintenance"]),
    SeedTxn::row(Expense, "Transportation", 35.0, "Uber Rides", "Digital Wallet", 6, &[]),
    SeedTxn::row(Expense, "Shopping", 189.99, "New Headphones", "Bank Account", 7, &["electronics"]),
    SeedTxn::row(Expense, "Shopping", 75.0, "Clothing", "Cash", 11, &[]),
    SeedTxn::row(Expense, "Shopping", 250.0, "Smart Watch", "Bank Account", 25, &["electronics"]),
    SeedTxn::row(Expense, "Entertainment", 15.99, "Netflix Subscription", "Digital Wallet", 1, &["subscription"]),
    SeedTxn::row(Expense, "Entertainment", 12.99, "Spotify Premium", "Digital Wallet", 1, &["subscription"]),
    SeedTxn::row(Expense, "Entertainment", 45.0, "Movie Night", "Cash", 9, &[]),
    SeedTxn::row(Expense, "Bills & Utilities", 150.0, "Electricity Bill", "Bank Account", 5, &["bills"]),
    SeedTxn::row(Expense, "Bills & Utilities", 80.0, "Internet Bill", "Bank Account", 5, &["bills"]),
    SeedTxn::row(Expense, "Bills & Utilities", 45.0, "Phone Bill", "Bank Account", 5, &["bills"]),
    SeedTxn::row(Expense, "Healthcare", 120.0, "Doctor Visit", "Bank Account", 20, &[]),
    SeedTxn::row(Expense, "Healthcare", 35.0, "Pharmacy", "Cash", 18, &[]),
    SeedTxn::row(Expense, "Education", 49.99, "Online Course", "Digital Wallet", 22, &["learning"]),
    SeedTxn::row(Expense, "Travel", 450.0, "Weekend Trip", "Bank Account", 30, &["vacation"]),
    SeedTxn::row(Expense, "Food & Dining", 78.0, "Grocery Shopping", "Cash", 35, &["weekly"]),
    SeedTxn::row(Expense, "Transportation", 48.0, "Gas Station", "Cash", 38, &[]),
    SeedTxn::row(Expense, "Entertainment", 15.99, "Netflix Subscription", "Digital Wallet", 31, &["subscription"]),
    SeedTxn::row(Expense, "Bills & Utilities", 145.0, "Electricity Bill", "Bank Account", 35, &["bills"]),
];

/// A realistic transaction history spread over roughly the last two months,
/// dated backwards from `today`
pub fn seed_transactions(
    today: NaiveDate,
    accounts: &[Account],
    categories: &[Category],
) -> Vec<Transaction> {
    SEED_TXNS
        .iter()
        .filter_map(|seed| {
            let account = accounts.iter().find(|a| a.name == seed.account)?;
            let category = categories.iter().find(|c| c.name == seed.category)?;
            let date = today.checked_sub_days(Days::new(seed.days_ago)).unwrap_or(today);

            let mut txn = Transaction::new(account.id, category.id, seed.kind, seed.amount, date);
            txn.description = seed.desc.to_string();
            txn.tags = seed.tags.iter().map(|t| t.to_string()).collect();
            txn.created_at = date.and_time(NaiveTime::MIN).and_utc();
            Some(txn)
        })
        .collect()
}

/// Build the full seeded default state, dated relative to `today`
pub fn default_state_as_of(today: NaiveDate) -> FinanceState {
    let accounts = default_accounts();
    let categories = default_categories();
    let budgets = default_budgets(&categories);
    let transactions = seed_transactions(today, &accounts, &categories);

    FinanceState {
        version: SCHEMA_VERSION,
        accounts,
        categories,
        transactions,
        budgets,
        theme: Theme::Dark,
        currency: CurrencyCode::INR,
    }
}

/// Build the full seeded default state as of the local calendar date
pub fn default_state() -> FinanceState {
    default_state_as_of(Local::now().date_naive())
}
