//! Builder/report view mode.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Two-state view mode flipped by the "Switch Mode" button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Widgets render as draggable containers with visible borders.
    #[default]
    Edit,
    /// Read-only presentation.
    Present,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Edit => "edit",
            Self::Present => "present",
        }
    }

    /// Returns the opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Edit => Self::Present,
            Self::Present => Self::Edit,
        }
    }

    /// Label for the builder's mode button.
    pub fn builder_button_label(self) -> String {
        format!("Switch Mode: {}", self.as_str())
    }

    /// Label for the report view's mode button; names the mode it switches to.
    pub fn report_button_label(self) -> &'static str {
        match self {
            Self::Edit => "Switch to Present Mode",
            Self::Present => "Switch to Edit Mode",
        }
    }
}

impl Display for ViewMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Flips `current` and returns the new mode.
pub fn toggle_mode(current: ViewMode) -> ViewMode {
    current.toggled()
}
