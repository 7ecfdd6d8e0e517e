//! Reservation primitives: validated time slots and conflict reporting.

use std::fmt;

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// A half-open `[start, end)` booking window for a resource.
pub struct TimeSlot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeSlot {
    /// Builds a slot, rejecting empty or inverted ranges.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, TimeSlotError> {
        if end <= start {
            return Err(TimeSlotError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant < self.end
    }

    /// Half-open overlap test. Touching endpoints do not overlap; an
    /// identical slot does.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Errors that can occur when constructing [`TimeSlot`] values.
pub enum TimeSlotError {
    InvalidRange,
}

impl fmt::Display for TimeSlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeSlotError::InvalidRange => f.write_str("time slot end must be after start"),
        }
    }
}

impl std::error::Error for TimeSlotError {}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Lifecycle state of a reservation. Cancelled reservations never conflict.
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl ReservationStatus {
    /// Whether the reservation still occupies its slot.
    pub fn is_active(self) -> bool {
        !matches!(self, ReservationStatus::Cancelled)
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReservationStatus::Pending => "Pending",
            ReservationStatus::Confirmed => "Confirmed",
            ReservationStatus::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// One booked (or requested) use of a resource.
pub struct Reservation {
    pub id: Uuid,
    pub resource_id: Uuid,
    pub slot: TimeSlot,
    pub status: ReservationStatus,
}

impl Reservation {
    /// Creates a new pending reservation for the given resource and slot.
    pub fn pending(resource_id: Uuid, slot: TimeSlot) -> Self {
        Self {
            id: Uuid::new_v4(),
            resource_id,
            slot,
            status: ReservationStatus::Pending,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// Outcome of a conflict check: the first conflicting reservation, if any.
pub struct ConflictReport {
    pub conflicting_with: Option<Reservation>,
}

impl ConflictReport {
    pub fn clear() -> Self {
        Self {
            conflicting_with: None,
        }
    }

    pub fn against(reservation: Reservation) -> Self {
        Self {
            conflicting_with: Some(reservation),
        }
    }

    pub fn has_conflict(&self) -> bool {
        self.conflicting_with.is_some()
    }
}
