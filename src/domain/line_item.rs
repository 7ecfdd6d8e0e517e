use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CoreError;

/// A single budgeted task. Amounts are integer minor currency units (cents).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LineItem {
    pub id: Uuid,
    pub category: String,
    pub planned_amount: i64,
    pub actual_amount: i64,
    pub completed: bool,
}

impl LineItem {
    /// Creates an open line item, validating category and planned amount.
    pub fn new(category: impl Into<String>, planned_amount: i64) -> Result<Self, CoreError> {
        let category = category.into();
        if category.trim().is_empty() {
            return Err(CoreError::Validation("line item category is empty".into()));
        }
        if planned_amount < 0 {
            return Err(CoreError::InvalidAmount(format!(
                "planned amount must be non-negative, got {}",
                planned_amount
            )));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            category,
            planned_amount,
            actual_amount: 0,
            completed: false,
        })
    }

    /// Marks the item completed with the amount actually paid.
    pub fn complete(&mut self, actual_amount: i64) -> Result<(), CoreError> {
        if actual_amount < 0 {
            return Err(CoreError::InvalidAmount(format!(
                "actual amount must be non-negative, got {}",
                actual_amount
            )));
        }
        self.actual_amount = actual_amount;
        self.completed = true;
        Ok(())
    }

    /// An item counts toward spent only once completed with a paid amount.
    pub fn counts_as_spent(&self) -> bool {
        self.completed && self.actual_amount > 0
    }
}
