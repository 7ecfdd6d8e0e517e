pub mod booking_service;
pub mod rollup_service;

pub use booking_service::BookingService;
pub use rollup_service::RollupService;

#[cfg(test)]
mod tests;
