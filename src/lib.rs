#![doc(test(attr(deny(warnings))))]

//! Budget Tracker Core offers the ledger accumulator and transaction
//! persistence primitives behind a small budgeting form.

pub mod config;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Tracker tracing initialized.");
    });
}
