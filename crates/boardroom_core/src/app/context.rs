//! Application context for one builder session.
//!
//! # Responsibility
//! - Own all mutable builder state: layout tree, selection, view modes.
//! - Expose the core operations the UI adapter drives.
//!
//! # Invariants
//! - Constructed once per session from `BoardroomConfig`; no process-wide
//!   mutable state lives here.
//! - Render calls never mutate state.

use crate::config::BoardroomConfig;
use crate::model::mode::ViewMode;
use crate::model::node::{LayoutNode, NodeId};
use crate::model::palette::ComponentPalette;
use crate::model::report::ReportWidget;
use crate::model::selection::{ClickSignal, Selection};
use crate::render::describe::{render_description, DisplayDescriptor};
use crate::render::report::{render_report, ReportView};
use crate::service::layout_service::{ColumnInsertOutcome, LayoutTree};
use crate::service::selection_service::SelectionResolver;
use log::info;

/// Builder state shared by every event handler.
#[derive(Debug, Clone)]
pub struct BoardroomContext {
    palette: ComponentPalette,
    report: Vec<ReportWidget>,
    layout: LayoutTree,
    selection: SelectionResolver,
    mode: ViewMode,
    report_mode: ViewMode,
}

impl Default for BoardroomContext {
    fn default() -> Self {
        Self::new(&BoardroomConfig::default())
    }
}

impl BoardroomContext {
    /// Creates an empty builder session from startup settings.
    pub fn new(config: &BoardroomConfig) -> Self {
        Self {
            palette: config.components.clone(),
            report: config.report.clone(),
            layout: LayoutTree::new(),
            selection: SelectionResolver::new(),
            mode: config.initial_mode,
            report_mode: ViewMode::Present,
        }
    }

    /// Replaces the layout tree, e.g. with one built by `LayoutTree::from_nodes`.
    ///
    /// Keeps the selection only if it still names a node of the new tree.
    pub fn with_layout(mut self, layout: LayoutTree) -> Self {
        if !layout.contains_selection(self.selection.selection()) {
            self.selection.clear();
        }
        self.layout = layout;
        self
    }

    pub fn palette(&self) -> &ComponentPalette {
        &self.palette
    }

    pub fn report_widgets(&self) -> &[ReportWidget] {
        &self.report
    }

    pub fn layout(&self) -> &LayoutTree {
        &self.layout
    }

    pub fn root_nodes(&self) -> &[LayoutNode] {
        self.layout.root_nodes()
    }

    pub fn selection(&self) -> Selection {
        self.selection.selection()
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn report_mode(&self) -> ViewMode {
        self.report_mode
    }

    /// Appends a root-level row; the selection is ignored.
    pub fn insert_row(&mut self) -> &[LayoutNode] {
        self.layout.insert_row()
    }

    /// Appends a root-level row and returns its id.
    pub fn append_row(&mut self) -> NodeId {
        self.layout.append_row()
    }

    /// Appends a column to the currently selected root-level row.
    pub fn insert_column(&mut self) -> ColumnInsertOutcome {
        let selection = self.selection.selection();
        self.layout.insert_column(selection)
    }

    /// Resolves one click batch into the new selection.
    pub fn resolve_click(&mut self, signals: &[ClickSignal]) -> Selection {
        self.selection.resolve_click(signals)
    }

    /// Flips the builder mode.
    pub fn toggle_mode(&mut self) -> ViewMode {
        self.mode = self.mode.toggled();
        info!(
            "event=mode_switched module=builder status=ok mode={}",
            self.mode
        );
        self.mode
    }

    /// Flips the report view mode.
    pub fn toggle_report_mode(&mut self) -> ViewMode {
        self.report_mode = self.report_mode.toggled();
        info!(
            "event=mode_switched module=report status=ok mode={}",
            self.report_mode
        );
        self.report_mode
    }

    /// Describes the layout tree with the current selection highlighted.
    pub fn render_description(&self) -> Vec<DisplayDescriptor> {
        render_description(self.layout.root_nodes(), self.selection.selection())
    }

    /// Describes the report view in its current mode.
    pub fn render_report(&self) -> ReportView {
        render_report(&self.report, self.report_mode)
    }
}
