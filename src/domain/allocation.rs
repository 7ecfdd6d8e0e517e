//! Default allocation tables used to seed a budget before any line items
//! exist.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// One category's share of a seeded budget, in whole percent.
pub struct AllocationEntry {
    pub category: String,
    pub percent: u32,
}

impl AllocationEntry {
    pub fn new(category: impl Into<String>, percent: u32) -> Self {
        Self {
            category: category.into(),
            percent,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// A closed category→percentage table whose shares sum to exactly 100.
pub struct AllocationPlan {
    entries: Vec<AllocationEntry>,
}

impl AllocationPlan {
    /// Validates and builds a plan: non-empty, unique non-blank categories,
    /// positive shares summing to 100.
    pub fn new(entries: Vec<AllocationEntry>) -> Result<Self, CoreError> {
        if entries.is_empty() {
            return Err(CoreError::Validation("allocation plan is empty".into()));
        }
        for entry in &entries {
            if entry.category.trim().is_empty() {
                return Err(CoreError::Validation(
                    "allocation category is empty".into(),
                ));
            }
            if entry.percent == 0 {
                return Err(CoreError::Validation(format!(
                    "allocation share for `{}` must be positive",
                    entry.category
                )));
            }
        }
        for (idx, entry) in entries.iter().enumerate() {
            let duplicate = entries[..idx]
                .iter()
                .any(|other| other.category.eq_ignore_ascii_case(&entry.category));
            if duplicate {
                return Err(CoreError::Validation(format!(
                    "duplicate allocation category `{}`",
                    entry.category
                )));
            }
        }
        let total: u32 = entries.iter().map(|entry| entry.percent).sum();
        if total != 100 {
            return Err(CoreError::Validation(format!(
                "allocation shares must sum to 100, got {}",
                total
            )));
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[AllocationEntry] {
        &self.entries
    }

    /// Splits `total_budget` across the plan by largest remainder, so the
    /// distributed amounts sum to `total_budget` exactly. Ties go to earlier
    /// table entries.
    pub fn distribute(&self, total_budget: i64) -> Vec<(String, i64)> {
        let mut shares: Vec<(String, i64)> = Vec::with_capacity(self.entries.len());
        let mut remainders: Vec<(usize, i64)> = Vec::with_capacity(self.entries.len());
        let mut distributed = 0_i64;
        for (idx, entry) in self.entries.iter().enumerate() {
            let exact = total_budget * entry.percent as i64;
            let share = exact / 100;
            distributed += share;
            shares.push((entry.category.clone(), share));
            remainders.push((idx, exact % 100));
        }
        let mut leftover = total_budget - distributed;
        remainders.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        for (idx, _) in remainders {
            if leftover == 0 {
                break;
            }
            shares[idx].1 += 1;
            leftover -= 1;
        }
        shares
    }
}

/// Fallback breakdown for a budget with no line items yet.
pub static DEFAULT_ALLOCATION: Lazy<AllocationPlan> = Lazy::new(|| {
    AllocationPlan::new(vec![
        AllocationEntry::new("venue", 30),
        AllocationEntry::new("catering", 25),
        AllocationEntry::new("photography", 10),
        AllocationEntry::new("flowers", 8),
        AllocationEntry::new("music", 7),
        AllocationEntry::new("attire", 5),
        AllocationEntry::new("transportation", 3),
        AllocationEntry::new("invitations", 2),
        AllocationEntry::new("other", 10),
    ])
    .expect("default allocation table is valid")
});
