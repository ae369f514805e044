//! Domain model for the report builder.
//!
//! # Responsibility
//! - Define the layout tree, selection and click-signal shapes.
//! - Define view mode, component palette and report widgets.
//!
//! # Invariants
//! - Every layout node is identified by a stable `NodeId`.
//! - The layout tree is append-only; nodes are never relinked.

pub mod mode;
pub mod node;
pub mod palette;
pub mod report;
pub mod selection;
