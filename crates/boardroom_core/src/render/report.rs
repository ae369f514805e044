//! Present/edit projection of the flat report view.

use crate::model::mode::ViewMode;
use crate::model::node::StyleMap;
use crate::model::report::ReportWidget;
use serde::{Deserialize, Serialize};

/// One painted item of the report view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "element", rename_all = "snake_case")]
pub enum ReportItem {
    /// Mode banner at the top of the page.
    Heading { text: String },
    /// Widget painted as-is.
    Widget { widget: ReportWidget },
    /// Widget wrapped in a draggable, bordered edit frame.
    EditFrame {
        draggable: bool,
        style: StyleMap,
        widget: ReportWidget,
    },
}

/// Full report view description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportView {
    pub mode: ViewMode,
    pub toggle_label: String,
    pub items: Vec<ReportItem>,
}

/// Renders the widget list for `mode`.
pub fn render_report(widgets: &[ReportWidget], mode: ViewMode) -> ReportView {
    let banner = match mode {
        ViewMode::Edit => "Edit Mode",
        ViewMode::Present => "Presentation Mode",
    };

    let mut items = Vec::with_capacity(widgets.len() + 1);
    items.push(ReportItem::Heading {
        text: banner.to_string(),
    });
    items.extend(widgets.iter().cloned().map(|widget| match mode {
        ViewMode::Edit => ReportItem::EditFrame {
            draggable: true,
            style: edit_frame_style(),
            widget,
        },
        ViewMode::Present => ReportItem::Widget { widget },
    }));

    ReportView {
        mode,
        toggle_label: mode.report_button_label().to_string(),
        items,
    }
}

fn edit_frame_style() -> StyleMap {
    [
        ("border", "2px dashed #aaa"),
        ("padding", "10px"),
        ("margin-bottom", "10px"),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect()
}
