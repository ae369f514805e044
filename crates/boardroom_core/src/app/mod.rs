//! Application wiring for the builder UI adapter.
//!
//! # Responsibility
//! - Hold one session's state in an explicit context object.
//! - Route inbound UI events to core operations through a dispatch table.

pub mod context;
pub mod dispatch;
