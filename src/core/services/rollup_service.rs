//! Aggregation of budget line items into category and total rollups.

use tracing::debug;

use crate::domain::allocation::{AllocationPlan, DEFAULT_ALLOCATION};
use crate::domain::line_item::LineItem;
use crate::domain::rollup::{BudgetBreakdown, BudgetTotals, CategoryRollup};

/// Reduces line items into per-category and overall budget rollups.
///
/// Assumes ingestion-validated input: amounts are non-negative integers in
/// minor currency units.
pub struct RollupService;

impl RollupService {
    /// Aggregates with the built-in default allocation table as fallback.
    pub fn aggregate(line_items: &[LineItem], total_budget: i64) -> BudgetBreakdown {
        Self::aggregate_with_plan(line_items, total_budget, &DEFAULT_ALLOCATION)
    }

    /// Aggregates line items, seeding from `fallback` when the list is
    /// empty. The fallback never runs for a non-empty list, even when every
    /// item shares one category.
    ///
    /// Categories appear in first-seen order so rendering stays
    /// deterministic.
    pub fn aggregate_with_plan(
        line_items: &[LineItem],
        total_budget: i64,
        fallback: &AllocationPlan,
    ) -> BudgetBreakdown {
        if line_items.is_empty() {
            debug!(total_budget, "no line items, seeding from allocation plan");
            return Self::seed_from_plan(fallback, total_budget);
        }

        let mut categories: Vec<CategoryRollup> = Vec::new();
        for item in line_items {
            let idx = match categories
                .iter()
                .position(|rollup| rollup.category == item.category)
            {
                Some(idx) => idx,
                None => {
                    categories.push(CategoryRollup::empty(item.category.clone()));
                    categories.len() - 1
                }
            };
            let rollup = &mut categories[idx];
            rollup.planned += item.planned_amount;
            if item.counts_as_spent() {
                rollup.spent += item.actual_amount;
            } else {
                rollup.allocated += item.planned_amount;
            }
        }

        BudgetBreakdown {
            totals: Self::totals_over(&categories, total_budget),
            categories,
        }
    }

    fn seed_from_plan(plan: &AllocationPlan, total_budget: i64) -> BudgetBreakdown {
        let categories: Vec<CategoryRollup> = plan
            .distribute(total_budget)
            .into_iter()
            .map(|(category, share)| CategoryRollup {
                category,
                planned: share,
                allocated: share,
                spent: 0,
            })
            .collect();
        BudgetBreakdown {
            totals: Self::totals_over(&categories, total_budget),
            categories,
        }
    }

    fn totals_over(categories: &[CategoryRollup], total_budget: i64) -> BudgetTotals {
        let planned = categories.iter().map(|rollup| rollup.planned).sum();
        let allocated = categories.iter().map(|rollup| rollup.allocated).sum();
        let spent = categories.iter().map(|rollup| rollup.spent).sum();
        BudgetTotals::from_parts(planned, allocated, spent, total_budget)
    }
}
