//! Conflict checking and booking orchestration for resource reservations.

use chrono::NaiveDateTime;
use tracing::debug;
use uuid::Uuid;

use crate::domain::reservation::{ConflictReport, Reservation, TimeSlot};
use crate::errors::Result;
use crate::storage::ReservationStore;

/// Decides whether a candidate reservation conflicts with existing bookings.
///
/// See also: [`crate::domain::reservation::TimeSlot::overlaps`] for the
/// half-open overlap semantics.
pub struct BookingService;

impl BookingService {
    /// Scans `existing` for the first active same-resource reservation whose
    /// slot overlaps the candidate's. Short-circuits on the first match.
    ///
    /// Linear in the number of existing reservations; per-resource booking
    /// counts are small enough that no index is needed.
    pub fn check_overlap(candidate: &Reservation, existing: &[Reservation]) -> ConflictReport {
        let conflict = existing.iter().find(|reservation| {
            reservation.resource_id == candidate.resource_id
                && reservation.id != candidate.id
                && reservation.is_active()
                && reservation.slot.overlaps(&candidate.slot)
        });
        match conflict {
            Some(reservation) => {
                debug!(
                    resource = %candidate.resource_id,
                    conflicting = %reservation.id,
                    "candidate slot conflicts with an existing reservation"
                );
                ConflictReport::against(reservation.clone())
            }
            None => ConflictReport::clear(),
        }
    }

    /// Advisory availability check against the store, for display before a
    /// booking is submitted. The result can go stale; the store re-checks at
    /// insert time.
    pub fn check_availability(
        store: &dyn ReservationStore,
        resource_id: Uuid,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<ConflictReport> {
        let slot = TimeSlot::new(start, end)?;
        let candidate = Reservation::pending(resource_id, slot);
        let existing = store.list_reservations(resource_id)?;
        Ok(Self::check_overlap(&candidate, &existing))
    }

    /// Validates the candidate slot and submits a pending reservation.
    ///
    /// The store performs the authoritative overlap check under its own
    /// lock, so two concurrent requests for the same slot cannot both
    /// succeed; the loser gets `CoreError::SlotUnavailable`.
    pub fn request_reservation(
        store: &dyn ReservationStore,
        resource_id: Uuid,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Reservation> {
        let slot = TimeSlot::new(start, end)?;
        let reservation = Reservation::pending(resource_id, slot);
        let accepted = store.insert_reservation(reservation)?;
        debug!(
            reservation = %accepted.id,
            resource = %accepted.resource_id,
            "reservation accepted"
        );
        Ok(accepted)
    }
}
