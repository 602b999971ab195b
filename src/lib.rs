#![doc(test(attr(deny(warnings))))]

//! Booking Wizard drives a multi-step appointment booking: pick a service and
//! a provider, then a date and a time slot, then confirm with contact details.
//! The state machine is UI-agnostic; the terminal shell in [`cli`] is one
//! rendering adapter subscribed to it.

pub mod availability;
pub mod booking;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod render;
pub mod time;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Booking Wizard tracing initialized.");
    });
}
