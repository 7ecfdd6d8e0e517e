//! Derived budget rollups. Nothing here is persisted; rollups are rebuilt
//! from line items on every aggregation.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// Aggregated planned/allocated/spent figures for one category.
pub struct CategoryRollup {
    pub category: String,
    pub planned: i64,
    pub allocated: i64,
    pub spent: i64,
}

impl CategoryRollup {
    pub fn empty(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            planned: 0,
            allocated: 0,
            spent: 0,
        }
    }

    /// Spent plus committed-but-unpaid amounts.
    pub fn committed(&self) -> i64 {
        self.spent + self.allocated
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Describes whether committed spending is aligned with the budget.
pub enum BudgetStatus {
    OnTrack,
    OverBudget,
    UnderBudget,
    Empty,
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetStatus::OnTrack => "On Track",
            BudgetStatus::OverBudget => "Over Budget",
            BudgetStatus::UnderBudget => "Under Budget",
            BudgetStatus::Empty => "Empty",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Overall totals for a budget, measured against its headline amount.
pub struct BudgetTotals {
    pub planned: i64,
    pub allocated: i64,
    pub spent: i64,
    pub remaining: i64,
    pub percent_used: f64,
    pub status: BudgetStatus,
}

impl BudgetTotals {
    /// Derives remaining/percent/status from accumulated figures.
    ///
    /// `remaining` may go negative; over-budget is a representable state,
    /// not an error. Percentage math is the only place floats appear.
    pub fn from_parts(planned: i64, allocated: i64, spent: i64, total_budget: i64) -> Self {
        let committed = spent + allocated;
        let remaining = total_budget - committed;
        let percent_used = if total_budget > 0 {
            committed as f64 / total_budget as f64 * 100.0
        } else {
            0.0
        };
        let status = if total_budget == 0 && committed == 0 {
            BudgetStatus::Empty
        } else if committed > total_budget {
            BudgetStatus::OverBudget
        } else if committed == total_budget {
            BudgetStatus::OnTrack
        } else {
            BudgetStatus::UnderBudget
        };
        Self {
            planned,
            allocated,
            spent,
            remaining,
            percent_used,
            status,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Complete rollup for a budget: per-category rows plus the totals row.
pub struct BudgetBreakdown {
    pub categories: Vec<CategoryRollup>,
    pub totals: BudgetTotals,
}
