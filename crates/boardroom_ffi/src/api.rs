//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose one builder session to Dart via FRB as an opaque handle.
//! - Translate UI events into dispatch-table calls and return JSON render
//!   instructions.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Each session serializes its events; one event runs at a time.

use boardroom_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    BoardroomConfig, BoardroomContext, BoardroomEvent, ClickSignal, ColumnInsertOutcome,
    DispatchOutcome, EventDispatcher, Selection,
};
use log::warn;
use std::sync::{Mutex, MutexGuard};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One click report gathered by the Dart layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickSignalInput {
    /// Identity string copied from a descriptor's `click_identity`.
    pub identity: String,
    /// Last click timestamp in epoch ms; `None` when never clicked.
    pub timestamp: Option<f64>,
}

/// Generic action response envelope for builder button presses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionActionResponse {
    /// Whether the operation changed state.
    pub ok: bool,
    /// Created node ID or new mode, when relevant.
    pub value: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl SessionActionResponse {
    fn success(message: impl Into<String>, value: String) -> Self {
        Self {
            ok: true,
            value: Some(value),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            value: None,
            message: message.into(),
        }
    }
}

/// Current selection as seen by Dart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResponse {
    /// `row|col|custom`, or `None` when nothing is selected.
    pub kind: Option<String>,
    pub node_id: Option<String>,
}

impl From<Selection> for SelectionResponse {
    fn from(value: Selection) -> Self {
        Self {
            kind: value.map(|selected| selected.kind.as_str().to_string()),
            node_id: value.map(|selected| selected.id.to_string()),
        }
    }
}

struct SessionState {
    context: BoardroomContext,
    dispatcher: EventDispatcher,
}

/// Opaque builder session owned by the Dart side.
#[flutter_rust_bridge::frb(opaque)]
pub struct BoardroomSession {
    state: Mutex<SessionState>,
}

impl BoardroomSession {
    /// Creates a session from optional JSON config; defaults when `None`.
    ///
    /// # FFI contract
    /// - Sync call.
    /// - Returns error message on invalid config instead of panicking.
    #[flutter_rust_bridge::frb(sync)]
    pub fn new(config_json: Option<String>) -> Result<BoardroomSession, String> {
        let config = match config_json.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => {
                BoardroomConfig::from_json_str(raw).map_err(|err| err.to_string())?
            }
            _ => BoardroomConfig::default(),
        };
        Ok(Self {
            state: Mutex::new(SessionState {
                context: BoardroomContext::new(&config),
                dispatcher: EventDispatcher::with_default_handlers(),
            }),
        })
    }

    /// Handles the "Add Row" button.
    #[flutter_rust_bridge::frb(sync)]
    pub fn add_row(&self) -> SessionActionResponse {
        match self.dispatch(BoardroomEvent::AddRow) {
            Ok(DispatchOutcome::RowInserted { row_id }) => {
                SessionActionResponse::success("Row added.", row_id.to_string())
            }
            Ok(other) => unexpected_outcome("add_row", other),
            Err(message) => SessionActionResponse::failure(message),
        }
    }

    /// Handles the "Add Col" button against the current selection.
    ///
    /// Returns `ok=false` with a reason when nothing was inserted.
    #[flutter_rust_bridge::frb(sync)]
    pub fn add_column(&self) -> SessionActionResponse {
        match self.dispatch(BoardroomEvent::AddColumn) {
            Ok(DispatchOutcome::Column(outcome)) => column_response(outcome),
            Ok(other) => unexpected_outcome("add_column", other),
            Err(message) => SessionActionResponse::failure(message),
        }
    }

    /// Handles the builder "Switch Mode" button; `value` is the new mode.
    #[flutter_rust_bridge::frb(sync)]
    pub fn switch_mode(&self) -> SessionActionResponse {
        match self.dispatch(BoardroomEvent::SwitchMode) {
            Ok(DispatchOutcome::ModeSwitched(mode)) => {
                SessionActionResponse::success(mode.builder_button_label(), mode.to_string())
            }
            Ok(other) => unexpected_outcome("switch_mode", other),
            Err(message) => SessionActionResponse::failure(message),
        }
    }

    /// Handles the report view mode button; `value` is the new mode.
    #[flutter_rust_bridge::frb(sync)]
    pub fn switch_report_mode(&self) -> SessionActionResponse {
        match self.dispatch(BoardroomEvent::SwitchReportMode) {
            Ok(DispatchOutcome::ReportModeSwitched(mode)) => {
                SessionActionResponse::success(mode.report_button_label(), mode.to_string())
            }
            Ok(other) => unexpected_outcome("switch_report_mode", other),
            Err(message) => SessionActionResponse::failure(message),
        }
    }

    /// Resolves one click batch and returns the resulting selection.
    #[flutter_rust_bridge::frb(sync)]
    pub fn click_batch(&self, signals: Vec<ClickSignalInput>) -> SelectionResponse {
        let signals = signals
            .into_iter()
            .map(|signal| {
                ClickSignal::raw(
                    signal.identity,
                    signal
                        .timestamp
                        .and_then(serde_json::Number::from_f64)
                        .map(serde_json::Value::Number),
                )
            })
            .collect::<Vec<_>>();
        match self.dispatch(BoardroomEvent::ClickBatch(signals)) {
            Ok(DispatchOutcome::SelectionResolved(selection)) => selection.into(),
            Ok(_) | Err(_) => self.lock().context.selection().into(),
        }
    }

    /// Current selection without resolving anything.
    #[flutter_rust_bridge::frb(sync)]
    pub fn selection(&self) -> SelectionResponse {
        self.lock().context.selection().into()
    }

    /// Builder mode (`edit|present`).
    #[flutter_rust_bridge::frb(sync)]
    pub fn mode(&self) -> String {
        self.lock().context.mode().to_string()
    }

    /// Palette entries for the sidebar.
    #[flutter_rust_bridge::frb(sync)]
    pub fn palette(&self) -> Vec<String> {
        self.lock().context.palette().components().to_vec()
    }

    /// Layout render description as a JSON array of descriptors.
    #[flutter_rust_bridge::frb(sync)]
    pub fn render_description_json(&self) -> String {
        let descriptors = self.lock().context.render_description();
        to_json("render_description", &descriptors)
    }

    /// Report view description as a JSON object.
    #[flutter_rust_bridge::frb(sync)]
    pub fn render_report_json(&self) -> String {
        let view = self.lock().context.render_report();
        to_json("render_report", &view)
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        // Why: a panicking handler must not brick the session for Dart.
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn dispatch(&self, event: BoardroomEvent) -> Result<DispatchOutcome, String> {
        let mut guard = self.lock();
        let SessionState {
            context,
            dispatcher,
        } = &mut *guard;
        dispatcher
            .dispatch(context, &event)
            .map_err(|err| format!("{} failed: {err}", event.kind()))
    }
}

fn column_response(outcome: ColumnInsertOutcome) -> SessionActionResponse {
    match outcome {
        ColumnInsertOutcome::Inserted { column_id, .. } => {
            SessionActionResponse::success("Column added.", column_id.to_string())
        }
        ColumnInsertOutcome::NoSelection => {
            SessionActionResponse::failure("Select a row before adding a column.")
        }
        ColumnInsertOutcome::SelectionNotRow(kind) => SessionActionResponse::failure(format!(
            "Columns can only be added to rows, selected element is `{kind}`."
        )),
        ColumnInsertOutcome::RowNotFound(_) => {
            SessionActionResponse::failure("Selected row is not a top-level row.")
        }
    }
}

fn unexpected_outcome(operation: &str, outcome: DispatchOutcome) -> SessionActionResponse {
    warn!("event=ffi_dispatch module=ffi status=error op={operation} outcome={outcome:?}");
    SessionActionResponse::failure(format!("{operation} produced unexpected outcome"))
}

fn to_json<T: serde::Serialize>(operation: &str, value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| {
        warn!("event=ffi_serialize module=ffi status=error op={operation} error={err}");
        "null".to_string()
    })
}
