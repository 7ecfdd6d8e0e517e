use std::result::Result as StdResult;

use thiserror::Error;
use uuid::Uuid;

use crate::domain::reservation::TimeSlotError;

/// Unified error type for domain/service/storage layers.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("End time must be after start time")]
    InvalidRange,
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Reservation not found: {0}")]
    ReservationNotFound(Uuid),
    #[error("Line item not found: {0}")]
    LineItemNotFound(Uuid),
    #[error("Time slot already reserved by {0}")]
    SlotUnavailable(Uuid),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = StdResult<T, CoreError>;

impl From<TimeSlotError> for CoreError {
    fn from(err: TimeSlotError) -> Self {
        match err {
            TimeSlotError::InvalidRange => CoreError::InvalidRange,
        }
    }
}
