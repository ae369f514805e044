//! Core use-case services.
//!
//! # Responsibility
//! - Own the mutable builder state (layout tree, selection).
//! - Keep UI/FFI layers decoupled from tree and selection rules.

pub mod layout_service;
pub mod selection_service;
