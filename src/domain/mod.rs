//! Pure domain models (reservations, line items, rollups, allocation plans).
//! No I/O, no storage. Only data types and the arithmetic they own.

pub mod allocation;
pub mod line_item;
pub mod reservation;
pub mod rollup;

pub use allocation::*;
pub use line_item::*;
pub use reservation::*;
pub use rollup::*;
