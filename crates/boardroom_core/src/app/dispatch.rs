//! Event dispatch table.
//!
//! Maps each inbound UI event kind to one core operation. The adapter layer
//! feeds events one at a time; every handler runs to completion.

use crate::app::context::BoardroomContext;
use crate::model::mode::ViewMode;
use crate::model::node::NodeId;
use crate::model::selection::{ClickSignal, Selection};
use crate::service::layout_service::ColumnInsertOutcome;
use log::debug;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Discriminant of an inbound event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventKind {
    AddRow,
    AddColumn,
    SwitchMode,
    SwitchReportMode,
    ClickBatch,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AddRow => "add_row",
            Self::AddColumn => "add_col",
            Self::SwitchMode => "switch_mode",
            Self::SwitchReportMode => "switch_report_mode",
            Self::ClickBatch => "click_batch",
        }
    }
}

impl Display for EventKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One inbound UI event.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardroomEvent {
    /// "Add Row" button press.
    AddRow,
    /// "Add Col" button press.
    AddColumn,
    /// Builder "Switch Mode" button press.
    SwitchMode,
    /// Report view mode button press.
    SwitchReportMode,
    /// Click timestamps from every rendered interactive node.
    ClickBatch(Vec<ClickSignal>),
}

impl BoardroomEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            Self::AddRow => EventKind::AddRow,
            Self::AddColumn => EventKind::AddColumn,
            Self::SwitchMode => EventKind::SwitchMode,
            Self::SwitchReportMode => EventKind::SwitchReportMode,
            Self::ClickBatch(_) => EventKind::ClickBatch,
        }
    }
}

/// State change produced by one handled event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    RowInserted { row_id: NodeId },
    Column(ColumnInsertOutcome),
    ModeSwitched(ViewMode),
    ReportModeSwitched(ViewMode),
    SelectionResolved(Selection),
}

/// Errors from dispatch table registration and dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// No handler registered for this event kind.
    NoHandler(EventKind),
    /// A handler is already registered for this event kind.
    DuplicateHandler(EventKind),
    /// Handler received an event of another kind.
    PayloadMismatch {
        expected: EventKind,
        actual: EventKind,
    },
}

impl Display for DispatchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoHandler(kind) => write!(f, "no handler registered for event `{kind}`"),
            Self::DuplicateHandler(kind) => {
                write!(f, "handler already registered for event `{kind}`")
            }
            Self::PayloadMismatch { expected, actual } => write!(
                f,
                "handler for `{expected}` received event `{actual}`"
            ),
        }
    }
}

impl Error for DispatchError {}

/// Handler bound to one event kind.
pub type EventHandler =
    fn(&mut BoardroomContext, &BoardroomEvent) -> Result<DispatchOutcome, DispatchError>;

/// Explicit event-kind → handler table.
#[derive(Clone, Default)]
pub struct EventDispatcher {
    handlers: BTreeMap<EventKind, EventHandler>,
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("kinds", &self.registered_kinds())
            .finish()
    }
}

impl EventDispatcher {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table with every builder operation registered.
    pub fn with_default_handlers() -> Self {
        let mut dispatcher = Self::new();
        let defaults: [(EventKind, EventHandler); 5] = [
            (EventKind::AddRow, handle_add_row),
            (EventKind::AddColumn, handle_add_column),
            (EventKind::SwitchMode, handle_switch_mode),
            (EventKind::SwitchReportMode, handle_switch_report_mode),
            (EventKind::ClickBatch, handle_click_batch),
        ];
        for (kind, handler) in defaults {
            dispatcher.handlers.insert(kind, handler);
        }
        dispatcher
    }

    /// Registers one handler; a kind can only be bound once.
    pub fn register(
        &mut self,
        kind: EventKind,
        handler: EventHandler,
    ) -> Result<(), DispatchError> {
        if self.handlers.contains_key(&kind) {
            return Err(DispatchError::DuplicateHandler(kind));
        }
        self.handlers.insert(kind, handler);
        Ok(())
    }

    /// Returns registered kinds in stable order.
    pub fn registered_kinds(&self) -> Vec<EventKind> {
        self.handlers.keys().copied().collect()
    }

    /// Runs the handler bound to `event`'s kind.
    pub fn dispatch(
        &self,
        context: &mut BoardroomContext,
        event: &BoardroomEvent,
    ) -> Result<DispatchOutcome, DispatchError> {
        let kind = event.kind();
        let handler = self
            .handlers
            .get(&kind)
            .ok_or(DispatchError::NoHandler(kind))?;
        let outcome = handler(context, event)?;
        debug!("event=dispatch module=app status=ok kind={kind} outcome={outcome:?}");
        Ok(outcome)
    }
}

fn expect_kind(event: &BoardroomEvent, expected: EventKind) -> Result<(), DispatchError> {
    let actual = event.kind();
    if actual != expected {
        return Err(DispatchError::PayloadMismatch { expected, actual });
    }
    Ok(())
}

fn handle_add_row(
    context: &mut BoardroomContext,
    event: &BoardroomEvent,
) -> Result<DispatchOutcome, DispatchError> {
    expect_kind(event, EventKind::AddRow)?;
    Ok(DispatchOutcome::RowInserted {
        row_id: context.append_row(),
    })
}

fn handle_add_column(
    context: &mut BoardroomContext,
    event: &BoardroomEvent,
) -> Result<DispatchOutcome, DispatchError> {
    expect_kind(event, EventKind::AddColumn)?;
    Ok(DispatchOutcome::Column(context.insert_column()))
}

fn handle_switch_mode(
    context: &mut BoardroomContext,
    event: &BoardroomEvent,
) -> Result<DispatchOutcome, DispatchError> {
    expect_kind(event, EventKind::SwitchMode)?;
    Ok(DispatchOutcome::ModeSwitched(context.toggle_mode()))
}

fn handle_switch_report_mode(
    context: &mut BoardroomContext,
    event: &BoardroomEvent,
) -> Result<DispatchOutcome, DispatchError> {
    expect_kind(event, EventKind::SwitchReportMode)?;
    Ok(DispatchOutcome::ReportModeSwitched(
        context.toggle_report_mode(),
    ))
}

fn handle_click_batch(
    context: &mut BoardroomContext,
    event: &BoardroomEvent,
) -> Result<DispatchOutcome, DispatchError> {
    let BoardroomEvent::ClickBatch(signals) = event else {
        return Err(DispatchError::PayloadMismatch {
            expected: EventKind::ClickBatch,
            actual: event.kind(),
        });
    };
    Ok(DispatchOutcome::SelectionResolved(
        context.resolve_click(signals),
    ))
}
