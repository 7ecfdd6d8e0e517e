#![doc(test(attr(deny(warnings))))]

//! Ministry Core offers reservation conflict checking and budget rollup
//! primitives that power room booking and event budgeting workflows.

pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Ministry Core tracing initialized.");
    });
}
