//! Preference mutations and factory reset

use crate::models::{CurrencyCode, FinanceState};
use crate::storage::seed;

/// Flip between light and dark theme
pub fn toggle_theme(state: &FinanceState) -> FinanceState {
    let mut next = state.clone();
    next.theme = next.theme.toggled();
    next
}

/// Set the display currency
pub fn set_currency(state: &FinanceState, currency: CurrencyCode) -> FinanceState {
    let mut next = state.clone();
    next.currency = currency;
    next
}

/// Discard everything and return a freshly seeded default state
pub fn reset_state() -> FinanceState {
    seed::default_state()
}
