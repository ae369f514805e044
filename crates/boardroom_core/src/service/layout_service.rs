//! Layout tree use-case service.
//!
//! # Responsibility
//! - Own the in-memory layout tree for one builder session.
//! - Provide append-only row/column insertion.
//!
//! # Invariants
//! - Rows are always appended at root level with depth 1.
//! - Columns are only appended to a selected root-level row; the search does
//!   not descend into nested rows.
//! - Node ids stay unique across the whole tree.

use crate::model::node::{LayoutNode, NodeId, NodeKind, ROOT_DEPTH};
use crate::model::selection::Selection;
use log::debug;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from loading caller-provided nodes into a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutTreeError {
    /// Two nodes share one id.
    DuplicateNodeId(NodeId),
    /// Root node is not at depth 1.
    InvalidRootDepth { node_id: NodeId, depth: u32 },
    /// Child depth is not parent depth + 1.
    InvalidChildDepth {
        node_id: NodeId,
        parent_depth: u32,
        depth: u32,
    },
}

impl Display for LayoutTreeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateNodeId(id) => write!(f, "duplicate layout node id: {id}"),
            Self::InvalidRootDepth { node_id, depth } => write!(
                f,
                "root layout node {node_id} must have depth {ROOT_DEPTH}, got {depth}"
            ),
            Self::InvalidChildDepth {
                node_id,
                parent_depth,
                depth,
            } => write!(
                f,
                "layout node {node_id} has depth {depth} under parent depth {parent_depth}"
            ),
        }
    }
}

impl Error for LayoutTreeError {}

/// Result of one column insertion request.
///
/// Every variant except `Inserted` leaves the tree unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnInsertOutcome {
    /// New column appended to the selected row.
    Inserted { row_id: NodeId, column_id: NodeId },
    /// Nothing is selected.
    NoSelection,
    /// Selected node is not a row.
    SelectionNotRow(NodeKind),
    /// No root-level row matches the selection.
    RowNotFound(NodeId),
}

impl ColumnInsertOutcome {
    pub fn is_inserted(&self) -> bool {
        matches!(self, Self::Inserted { .. })
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Inserted { .. } => "inserted",
            Self::NoSelection => "no_selection",
            Self::SelectionNotRow(_) => "selection_not_row",
            Self::RowNotFound(_) => "row_not_found",
        }
    }
}

/// In-memory layout tree for the builder playground.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutTree {
    roots: Vec<LayoutNode>,
}

impl LayoutTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree from existing nodes after validating id/depth invariants.
    pub fn from_nodes(roots: Vec<LayoutNode>) -> Result<Self, LayoutTreeError> {
        let mut seen = HashSet::new();
        for root in &roots {
            if root.depth != ROOT_DEPTH {
                return Err(LayoutTreeError::InvalidRootDepth {
                    node_id: root.id,
                    depth: root.depth,
                });
            }
            validate_subtree(root, &mut seen)?;
        }
        Ok(Self { roots })
    }

    /// Root-level nodes in display order.
    pub fn root_nodes(&self) -> &[LayoutNode] {
        &self.roots
    }

    /// Number of nodes in the whole tree.
    pub fn node_count(&self) -> usize {
        self.roots.iter().map(LayoutNode::subtree_len).sum()
    }

    /// Finds a node anywhere in the tree by `(kind, id)`.
    pub fn find(&self, kind: NodeKind, id: NodeId) -> Option<&LayoutNode> {
        fn search(nodes: &[LayoutNode], kind: NodeKind, id: NodeId) -> Option<&LayoutNode> {
            for node in nodes {
                if node.matches(kind, id) {
                    return Some(node);
                }
                if let Some(found) = search(&node.children, kind, id) {
                    return Some(found);
                }
            }
            None
        }
        search(&self.roots, kind, id)
    }

    /// Returns whether `selection` still names a node in this tree.
    pub fn contains_selection(&self, selection: Selection) -> bool {
        selection.is_some_and(|selected| self.find(selected.kind, selected.id).is_some())
    }

    /// Appends a new root-level row and returns the updated roots.
    pub fn insert_row(&mut self) -> &[LayoutNode] {
        self.append_row();
        &self.roots
    }

    /// Appends a new root-level row and returns its id.
    pub fn append_row(&mut self) -> NodeId {
        let row = LayoutNode::row();
        let row_id = row.id;
        self.roots.push(row);
        debug!(
            "event=layout_insert_row module=layout status=ok node_id={} root_count={}",
            row_id,
            self.roots.len()
        );
        row_id
    }

    /// Appends a new column to the selected root-level row.
    ///
    /// Non-row or missing selections, and rows nested below the root level,
    /// leave the tree unchanged.
    pub fn insert_column(&mut self, selection: Selection) -> ColumnInsertOutcome {
        let outcome = self.try_insert_column(selection);
        debug!(
            "event=layout_insert_col module=layout status={} selection={} node_count={}",
            outcome.label(),
            selection
                .map(|selected| format!("{}:{}", selected.kind, selected.id))
                .unwrap_or_else(|| "none".to_string()),
            self.node_count()
        );
        outcome
    }

    fn try_insert_column(&mut self, selection: Selection) -> ColumnInsertOutcome {
        let Some(selected) = selection else {
            return ColumnInsertOutcome::NoSelection;
        };
        if selected.kind != NodeKind::Row {
            return ColumnInsertOutcome::SelectionNotRow(selected.kind);
        }

        let Some(row) = self
            .roots
            .iter_mut()
            .find(|node| node.matches(NodeKind::Row, selected.id))
        else {
            return ColumnInsertOutcome::RowNotFound(selected.id);
        };

        let column = row.new_child(NodeKind::Column);
        let column_id = column.id;
        row.children.push(column);
        ColumnInsertOutcome::Inserted {
            row_id: row.id,
            column_id,
        }
    }
}

fn validate_subtree(
    node: &LayoutNode,
    seen: &mut HashSet<NodeId>,
) -> Result<(), LayoutTreeError> {
    if !seen.insert(node.id) {
        return Err(LayoutTreeError::DuplicateNodeId(node.id));
    }
    for child in &node.children {
        if child.depth != node.depth + 1 {
            return Err(LayoutTreeError::InvalidChildDepth {
                node_id: child.id,
                parent_depth: node.depth,
                depth: child.depth,
            });
        }
        validate_subtree(child, seen)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ColumnInsertOutcome, LayoutTree, LayoutTreeError};
    use crate::model::node::{LayoutNode, NodeKind};
    use crate::model::selection::SelectedNode;

    #[test]
    fn insert_column_reports_each_noop_reason() {
        let mut tree = LayoutTree::new();
        let row_id = tree.insert_row()[0].id;

        assert_eq!(tree.insert_column(None), ColumnInsertOutcome::NoSelection);
        assert_eq!(
            tree.insert_column(Some(SelectedNode::new(NodeKind::Column, row_id))),
            ColumnInsertOutcome::SelectionNotRow(NodeKind::Column)
        );

        let missing = uuid::Uuid::new_v4();
        assert_eq!(
            tree.insert_column(Some(SelectedNode::new(NodeKind::Row, missing))),
            ColumnInsertOutcome::RowNotFound(missing)
        );
        assert!(tree.root_nodes()[0].children.is_empty());
    }

    #[test]
    fn from_nodes_rejects_duplicate_ids() {
        let row = LayoutNode::row();
        let twin = row.clone();
        let err = LayoutTree::from_nodes(vec![row.clone(), twin]).unwrap_err();
        assert_eq!(err, LayoutTreeError::DuplicateNodeId(row.id));
    }

    #[test]
    fn from_nodes_rejects_depth_gaps() {
        let mut row = LayoutNode::row();
        let deep = LayoutNode::new(NodeKind::Column, 3);
        let deep_id = deep.id;
        row.children.push(deep);

        let err = LayoutTree::from_nodes(vec![row]).unwrap_err();
        assert_eq!(
            err,
            LayoutTreeError::InvalidChildDepth {
                node_id: deep_id,
                parent_depth: 1,
                depth: 3,
            }
        );

        let nested_root = LayoutNode::new(NodeKind::Row, 2);
        assert!(matches!(
            LayoutTree::from_nodes(vec![nested_root]),
            Err(LayoutTreeError::InvalidRootDepth { depth: 2, .. })
        ));
    }

    #[test]
    fn find_descends_into_children() {
        let mut tree = LayoutTree::new();
        let row_id = tree.insert_row()[0].id;
        let outcome = tree.insert_column(Some(SelectedNode::new(NodeKind::Row, row_id)));
        let ColumnInsertOutcome::Inserted { column_id, .. } = outcome else {
            panic!("column should be inserted, got {outcome:?}");
        };

        let column = tree.find(NodeKind::Column, column_id).unwrap();
        assert_eq!(column.depth, 2);
        assert!(tree.find(NodeKind::Row, column_id).is_none());
        assert_eq!(tree.node_count(), 2);
    }
}
