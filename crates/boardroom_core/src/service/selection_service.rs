//! Click-batch selection resolver.
//!
//! # Responsibility
//! - Decide which node the user clicked most recently when several rendered
//!   nodes report click timestamps in one update cycle.
//! - Apply the toggle rule: clicking the selected node again deselects it.
//!
//! # Invariants
//! - Undecodable signals are skipped, never failing the batch.
//! - An empty (or fully undecodable) batch leaves the selection unchanged.
//! - Exact timestamp ties resolve to the earliest supplied signal.

use crate::logging::sanitize_message;
use crate::model::selection::{ClickIdentity, ClickSignal, SelectedNode, Selection};
use log::{debug, warn};
use std::cmp::Ordering;

const MAX_IDENTITY_LOG_CHARS: usize = 96;

/// Holds the current selection across click batches.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionResolver {
    current: Selection,
}

impl SelectionResolver {
    /// Creates a resolver with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current selection.
    pub fn selection(&self) -> Selection {
        self.current
    }

    /// Resets the selection to none.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Resolves one click batch and returns the updated selection.
    pub fn resolve_click(&mut self, signals: &[ClickSignal]) -> Selection {
        let Some(candidate) = most_recent_click(signals) else {
            debug!(
                "event=selection_resolved module=selection status=unchanged signals={}",
                signals.len()
            );
            return self.current;
        };

        let candidate = candidate.as_selection();
        self.current = apply_toggle(self.current, candidate);
        debug!(
            "event=selection_resolved module=selection status={} signals={} kind={} id={}",
            if self.current.is_some() { "selected" } else { "cleared" },
            signals.len(),
            candidate.kind,
            candidate.id
        );
        self.current
    }
}

/// Returns the decodable signal with the largest timestamp.
///
/// Missing or non-numeric timestamps count as 0. Among equal timestamps the
/// first supplied signal wins.
pub fn most_recent_click(signals: &[ClickSignal]) -> Option<ClickIdentity> {
    let mut decoded = signals
        .iter()
        .filter_map(|signal| match signal.decode_identity() {
            Ok(identity) => Some((signal.timestamp_value(), identity)),
            Err(err) => {
                warn!(
                    "event=selection_signal_skipped module=selection status=error reason={} identity={}",
                    err,
                    sanitize_message(&signal.identity, MAX_IDENTITY_LOG_CHARS)
                );
                None
            }
        })
        .collect::<Vec<_>>();

    // Stable sort keeps supply order among ties. Timestamps are finite, and
    // `-0.0 == 0.0` must stay a tie.
    decoded.sort_by(|(left, _), (right, _)| {
        right.partial_cmp(left).unwrap_or(Ordering::Equal)
    });
    decoded.into_iter().next().map(|(_, identity)| identity)
}

/// Toggle rule: selecting the current selection again clears it.
pub fn apply_toggle(current: Selection, candidate: SelectedNode) -> Selection {
    if current == Some(candidate) {
        None
    } else {
        Some(candidate)
    }
}
