//! Core domain logic for the Boardroom report builder.
//! This crate owns the layout tree, selection rules and render descriptions;
//! painting is left to the UI layer.

pub mod app;
pub mod config;
pub mod logging;
pub mod model;
pub mod render;
pub mod service;

pub use app::context::BoardroomContext;
pub use app::dispatch::{
    BoardroomEvent, DispatchError, DispatchOutcome, EventDispatcher, EventHandler, EventKind,
};
pub use config::{BoardroomConfig, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::mode::{toggle_mode, ViewMode};
pub use model::node::{LayoutNode, NodeId, NodeKind, StyleMap, UnknownNodeKind, ROOT_DEPTH};
pub use model::palette::{ComponentPalette, PaletteError, DEFAULT_COMPONENTS};
pub use model::report::{ReportWidget, WidgetKind};
pub use model::selection::{
    ClickIdentity, ClickSignal, IdentityDecodeError, SelectedNode, Selection,
};
pub use render::describe::{
    render_description, Container, ContainerLayout, DisplayDescriptor, NodeIdentity,
    SELECTED_BACKGROUND_COLOR, STYLE_BACKGROUND_COLOR, STYLE_Z_INDEX,
};
pub use render::report::{render_report, ReportItem, ReportView};
pub use service::layout_service::{ColumnInsertOutcome, LayoutTree, LayoutTreeError};
pub use service::selection_service::{apply_toggle, most_recent_click, SelectionResolver};

/// Minimal health-check API for adapter integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
