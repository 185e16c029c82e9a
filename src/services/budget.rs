//! Budget mutations

use crate::models::{
    ids::{BudgetId, CategoryId},
    Budget, BudgetPeriod, FinanceState,
};

/// Caller-supplied fields for a new budget
#[derive(Debug, Clone)]
pub struct NewBudget {
    pub category_id: CategoryId,
    pub limit: f64,
    pub period: BudgetPeriod,
}

/// Partial update of an existing budget; absent fields keep their value
#[derive(Debug, Clone, Default)]
pub struct BudgetPatch {
    pub category_id: Option<CategoryId>,
    pub limit: Option<f64>,
    pub period: Option<BudgetPeriod>,
}

/// Add a budget
pub fn add_budget(state: &FinanceState, input: NewBudget) -> (FinanceState, Budget) {
    let budget = Budget::new(input.category_id, input.limit, input.period);

    let mut next = state.clone();
    next.budgets.push(budget.clone());
    (next, budget)
}

/// Apply a patch to the budget with the given id; unknown ids are a no-op
pub fn update_budget(state: &FinanceState, id: BudgetId, patch: BudgetPatch) -> FinanceState {
    let mut next = state.clone();
    if let Some(budget) = next.budgets.iter_mut().find(|b| b.id == id) {
        if let Some(category_id) = patch.category_id {
            budget.category_id = category_id;
        }
        if let Some(limit) = patch.limit {
            budget.limit = limit;
        }
        if let Some(period) = patch.period {
            budget.period = period;
        }
    }
    next
}

/// Remove the budget with the given id; unknown ids are a no-op
pub fn delete_budget(state: &FinanceState, id: BudgetId) -> FinanceState {
    let mut next = state.clone();
    next.budgets.retain(|b| b.id != id);
    next
}
