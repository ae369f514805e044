//! Render projections consumed by the external UI layer.
//!
//! # Responsibility
//! - Turn core state into serializable, display-ready descriptions.
//! - Never mutate the state being rendered.

pub mod describe;
pub mod report;
