//! Layout tree render description.
//!
//! # Responsibility
//! - Project the layout tree into display-ready descriptors for the UI layer.
//! - Apply stacking defaults and selection highlight without touching stored
//!   node style.
//!
//! # Invariants
//! - Rendering is pure: same tree + selection yields the same descriptors.
//! - Traversal is depth-first, pre-order; child order is preserved.

use crate::model::node::{LayoutNode, NodeId, NodeKind, StyleMap};
use crate::model::selection::{ClickIdentity, Selection};
use serde::{Deserialize, Serialize};

/// Style key for stacking order.
pub const STYLE_Z_INDEX: &str = "zIndex";
/// Style key set on the selected node.
pub const STYLE_BACKGROUND_COLOR: &str = "backgroundColor";
/// Highlight color for the selected node.
pub const SELECTED_BACKGROUND_COLOR: &str = "#e0f7fa";

/// Identity triple of one rendered node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeIdentity {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub id: NodeId,
    pub depth: u32,
}

/// Shape of the container wrapping a node's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerLayout {
    /// Children flow left to right.
    HorizontalFlow,
    /// Children stack as one block.
    Block,
}

/// Container that embeds the rendered children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub layout: ContainerLayout,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    pub style: StyleMap,
    pub children: Vec<DisplayDescriptor>,
}

/// Display-ready description of one layout node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayDescriptor {
    pub identity: NodeIdentity,
    /// Metadata the UI echoes back in click signals.
    pub click_identity: ClickIdentity,
    pub computed_style: StyleMap,
    pub container: Container,
    pub n_clicks: u64,
    pub n_clicks_timestamp: u64,
}

/// Renders every root node of `roots` for the given selection.
pub fn render_description(roots: &[LayoutNode], selection: Selection) -> Vec<DisplayDescriptor> {
    roots
        .iter()
        .map(|node| render_node(node, selection))
        .collect()
}

/// Renders one node and its subtree.
pub fn render_node(node: &LayoutNode, selection: Selection) -> DisplayDescriptor {
    let children = node
        .children
        .iter()
        .map(|child| render_node(child, selection))
        .collect();

    DisplayDescriptor {
        identity: NodeIdentity {
            kind: node.kind,
            id: node.id,
            depth: node.depth,
        },
        click_identity: ClickIdentity::new(node.kind, node.id, node.depth),
        computed_style: computed_style(node, selection),
        container: container_for(node.kind, children),
        n_clicks: 0,
        n_clicks_timestamp: 0,
    }
}

/// Stored style plus stacking default and selection highlight.
///
/// Keys already present in the stored style always win.
pub fn computed_style(node: &LayoutNode, selection: Selection) -> StyleMap {
    let mut style = node.style.clone();
    style
        .entry(STYLE_Z_INDEX.to_string())
        .or_insert_with(|| node.depth.to_string());

    let is_selected = selection.is_some_and(|selected| node.matches(selected.kind, selected.id));
    if is_selected {
        style
            .entry(STYLE_BACKGROUND_COLOR.to_string())
            .or_insert_with(|| SELECTED_BACKGROUND_COLOR.to_string());
    }
    style
}

fn container_for(kind: NodeKind, children: Vec<DisplayDescriptor>) -> Container {
    match kind {
        NodeKind::Row => Container {
            layout: ContainerLayout::HorizontalFlow,
            class_name: Some("mb-3".to_string()),
            style: row_container_style(),
            children,
        },
        // Column and Custom share the same block shape for now.
        NodeKind::Column => Container {
            layout: ContainerLayout::Block,
            class_name: None,
            style: StyleMap::new(),
            children,
        },
        NodeKind::Custom => Container {
            layout: ContainerLayout::Block,
            class_name: None,
            style: StyleMap::new(),
            children,
        },
    }
}

fn row_container_style() -> StyleMap {
    [
        ("border", "1px solid #ccc"),
        ("padding", "10px"),
        ("cursor", "pointer"),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value.to_string()))
    .collect()
}
