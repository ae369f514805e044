//! Report widgets for the present/edit report view.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Report widget category. Chart contents live in the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    Heading,
    Graph,
    Text,
}

/// One entry in a report's flat widget list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportWidget {
    pub id: Uuid,
    pub kind: WidgetKind,
    /// Heading/paragraph text, or a figure reference for graphs.
    pub label: String,
}

impl ReportWidget {
    pub fn new(kind: WidgetKind, label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            label: label.into(),
        }
    }
}
