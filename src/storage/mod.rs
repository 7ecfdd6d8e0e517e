//! Storage seams for reservations and line items, plus an in-memory
//! implementation suitable for tests and embedding.

pub mod json_backend;

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::domain::line_item::LineItem;
use crate::domain::reservation::{Reservation, ReservationStatus};
use crate::errors::{CoreError, Result};

/// Abstraction over backends that persist reservations.
///
/// `insert_reservation` is the authoritative conflict gate: implementations
/// must make the overlap check and the write atomic (a lock here, an
/// exclusion constraint or serializable transaction in a SQL backend), so an
/// advisory pre-check going stale can never double-book a slot.
pub trait ReservationStore: Send + Sync {
    fn list_reservations(&self, resource_id: Uuid) -> Result<Vec<Reservation>>;
    fn insert_reservation(&self, reservation: Reservation) -> Result<Reservation>;
    fn confirm_reservation(&self, id: Uuid) -> Result<()>;
    fn cancel_reservation(&self, id: Uuid) -> Result<()>;
}

/// Abstraction over backends that persist budget line items.
pub trait LineItemStore: Send + Sync {
    fn list_line_items(&self, budget_id: Uuid) -> Result<Vec<LineItem>>;
    fn add_line_item(&self, budget_id: Uuid, item: LineItem) -> Result<()>;
    fn complete_line_item(&self, budget_id: Uuid, item_id: Uuid, actual_amount: i64)
        -> Result<()>;
}

/// Serializable contents of a [`MemoryStore`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSnapshot {
    #[serde(default)]
    pub reservations: Vec<Reservation>,
    #[serde(default)]
    pub line_items: HashMap<Uuid, Vec<LineItem>>,
}

/// Mutex-guarded in-memory store implementing both storage traits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<StoreSnapshot>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        Self {
            inner: Mutex::new(snapshot),
        }
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, StoreSnapshot> {
        // a poisoned lock still holds consistent data; recover it
        self.inner.lock().unwrap_or_else(|poison| poison.into_inner())
    }
}

impl ReservationStore for MemoryStore {
    fn list_reservations(&self, resource_id: Uuid) -> Result<Vec<Reservation>> {
        let state = self.lock();
        Ok(state
            .reservations
            .iter()
            .filter(|reservation| reservation.resource_id == resource_id)
            .cloned()
            .collect())
    }

    fn insert_reservation(&self, reservation: Reservation) -> Result<Reservation> {
        let mut state = self.lock();
        let conflict = state.reservations.iter().find(|existing| {
            existing.resource_id == reservation.resource_id
                && existing.is_active()
                && existing.slot.overlaps(&reservation.slot)
        });
        if let Some(existing) = conflict {
            warn!(
                resource = %reservation.resource_id,
                conflicting = %existing.id,
                "rejected reservation insert for an occupied slot"
            );
            return Err(CoreError::SlotUnavailable(existing.id));
        }
        state.reservations.push(reservation.clone());
        Ok(reservation)
    }

    fn confirm_reservation(&self, id: Uuid) -> Result<()> {
        let mut state = self.lock();
        let reservation = state
            .reservations
            .iter_mut()
            .find(|reservation| reservation.id == id)
            .ok_or(CoreError::ReservationNotFound(id))?;
        reservation.status = ReservationStatus::Confirmed;
        Ok(())
    }

    fn cancel_reservation(&self, id: Uuid) -> Result<()> {
        let mut state = self.lock();
        let reservation = state
            .reservations
            .iter_mut()
            .find(|reservation| reservation.id == id)
            .ok_or(CoreError::ReservationNotFound(id))?;
        reservation.status = ReservationStatus::Cancelled;
        Ok(())
    }
}

impl LineItemStore for MemoryStore {
    fn list_line_items(&self, budget_id: Uuid) -> Result<Vec<LineItem>> {
        let state = self.lock();
        Ok(state.line_items.get(&budget_id).cloned().unwrap_or_default())
    }

    fn add_line_item(&self, budget_id: Uuid, item: LineItem) -> Result<()> {
        let mut state = self.lock();
        state.line_items.entry(budget_id).or_default().push(item);
        Ok(())
    }

    fn complete_line_item(
        &self,
        budget_id: Uuid,
        item_id: Uuid,
        actual_amount: i64,
    ) -> Result<()> {
        let mut state = self.lock();
        let item = state
            .line_items
            .get_mut(&budget_id)
            .and_then(|items| items.iter_mut().find(|item| item.id == item_id))
            .ok_or(CoreError::LineItemNotFound(item_id))?;
        item.complete(actual_amount)
    }
}
