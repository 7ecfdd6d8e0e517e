use crate::core::services::RollupService;
use crate::domain::allocation::{AllocationEntry, AllocationPlan, DEFAULT_ALLOCATION};
use crate::domain::line_item::LineItem;
use crate::domain::rollup::BudgetStatus;

fn open_item(category: &str, planned: i64) -> LineItem {
    LineItem::new(category, planned).expect("valid item")
}

fn paid_item(category: &str, planned: i64, actual: i64) -> LineItem {
    let mut item = open_item(category, planned);
    item.complete(actual).expect("valid actual");
    item
}

#[test]
fn single_category_scenario_matches_expected_rollup() {
    let items = vec![
        paid_item("venue", 500_000, 480_000),
        open_item("venue", 20_000),
    ];
    let breakdown = RollupService::aggregate(&items, 600_000);

    assert_eq!(breakdown.categories.len(), 1);
    let venue = &breakdown.categories[0];
    assert_eq!(venue.category, "venue");
    assert_eq!(venue.planned, 520_000);
    assert_eq!(venue.spent, 480_000);
    assert_eq!(venue.allocated, 20_000);

    assert_eq!(breakdown.totals.remaining, 100_000);
    assert!((breakdown.totals.percent_used - 83.333_333_333_333_33).abs() < 1e-9);
    assert_eq!(breakdown.totals.status, BudgetStatus::UnderBudget);
}

#[test]
fn categories_appear_in_first_seen_order() {
    let items = vec![
        open_item("catering", 10_000),
        open_item("venue", 50_000),
        open_item("catering", 5_000),
        open_item("flowers", 2_000),
        open_item("venue", 1_000),
    ];
    let breakdown = RollupService::aggregate(&items, 100_000);
    let order: Vec<&str> = breakdown
        .categories
        .iter()
        .map(|rollup| rollup.category.as_str())
        .collect();
    assert_eq!(order, vec!["catering", "venue", "flowers"]);
    assert_eq!(breakdown.categories[0].planned, 15_000);
    assert_eq!(breakdown.categories[1].planned, 51_000);
}

#[test]
fn incomplete_and_zero_actual_items_count_as_allocated() {
    let items = vec![
        paid_item("venue", 30_000, 28_000),
        open_item("venue", 10_000),
        // completed but nothing actually paid
        paid_item("music", 5_000, 0),
    ];
    let breakdown = RollupService::aggregate(&items, 50_000);
    assert_eq!(breakdown.totals.spent, 28_000);
    assert_eq!(breakdown.totals.allocated, 15_000);
    assert_eq!(breakdown.totals.planned, 45_000);
}

#[test]
fn empty_budget_seeds_from_default_allocation_exactly() {
    let breakdown = RollupService::aggregate(&[], 100_000);
    assert_eq!(
        breakdown.categories.len(),
        DEFAULT_ALLOCATION.entries().len()
    );
    for (rollup, entry) in breakdown.categories.iter().zip(DEFAULT_ALLOCATION.entries()) {
        assert_eq!(rollup.category, entry.category);
        assert_eq!(rollup.planned, 100_000 * entry.percent as i64 / 100);
        assert_eq!(rollup.allocated, rollup.planned);
        assert_eq!(rollup.spent, 0);
    }
    let planned_total: i64 = breakdown.categories.iter().map(|r| r.planned).sum();
    assert_eq!(planned_total, 100_000);
}

#[test]
fn fallback_never_runs_for_a_non_empty_list() {
    let items = vec![open_item("venue", 1)];
    let breakdown = RollupService::aggregate(&items, 1_000_000);
    assert_eq!(breakdown.categories.len(), 1);
    assert_eq!(breakdown.categories[0].category, "venue");
}

#[test]
fn fallback_sum_is_exact_for_awkward_budgets() {
    for total in [0_i64, 1, 99, 101, 333_333, 100_003] {
        let breakdown = RollupService::aggregate(&[], total);
        let planned_total: i64 = breakdown.categories.iter().map(|r| r.planned).sum();
        assert_eq!(planned_total, total, "total budget {}", total);
    }
}

#[test]
fn aggregation_is_idempotent() {
    let items = vec![
        paid_item("venue", 500_000, 480_000),
        open_item("catering", 20_000),
    ];
    let first = RollupService::aggregate(&items, 600_000);
    let second = RollupService::aggregate(&items, 600_000);
    assert_eq!(first, second);
}

#[test]
fn custom_plan_overrides_the_default_fallback() {
    let plan = AllocationPlan::new(vec![
        AllocationEntry::new("outreach", 70),
        AllocationEntry::new("supplies", 30),
    ])
    .expect("valid plan");
    let breakdown = RollupService::aggregate_with_plan(&[], 10_001, &plan);
    assert_eq!(breakdown.categories.len(), 2);
    let planned_total: i64 = breakdown.categories.iter().map(|r| r.planned).sum();
    assert_eq!(planned_total, 10_001);
}

#[test]
fn overspending_is_reported_not_rejected() {
    let items = vec![paid_item("venue", 40_000, 55_000)];
    let breakdown = RollupService::aggregate(&items, 50_000);
    assert_eq!(breakdown.totals.remaining, -5_000);
    assert_eq!(breakdown.totals.status, BudgetStatus::OverBudget);
    assert!(breakdown.totals.percent_used > 100.0);
}
