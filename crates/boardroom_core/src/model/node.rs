//! Layout tree node model.
//!
//! # Responsibility
//! - Define the canonical shape of rows, columns and custom widgets in the
//!   builder playground.
//! - Provide constructors that always assign a fresh stable ID.
//!
//! # Invariants
//! - `id` is stable and never reused for another node.
//! - `depth` is `>= 1`; a child is always one level deeper than its parent.
//! - Children are owned exclusively by their parent; order is display order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable layout node identifier.
pub type NodeId = Uuid;

/// Free-form display properties (`zIndex`, `backgroundColor`, ...).
///
/// Ordered map so render output stays deterministic.
pub type StyleMap = BTreeMap<String, String>;

/// Depth assigned to every root-level node.
pub const ROOT_DEPTH: u32 = 1;

/// Closed set of layout node kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Horizontal container of columns.
    Row,
    /// Vertical slot inside a row.
    #[serde(rename = "col")]
    Column,
    /// User-provided widget placeholder.
    Custom,
}

impl NodeKind {
    /// Stable wire name used in click identities.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::Column => "col",
            Self::Custom => "custom",
        }
    }

    /// Parses a wire name back into a kind.
    pub fn parse(value: &str) -> Result<Self, UnknownNodeKind> {
        match value.trim() {
            "row" => Ok(Self::Row),
            "col" => Ok(Self::Column),
            "custom" => Ok(Self::Custom),
            other => Err(UnknownNodeKind(other.to_string())),
        }
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire name did not match any [`NodeKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNodeKind(pub String);

impl Display for UnknownNodeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown layout node kind `{}`", self.0)
    }
}

impl Error for UnknownNodeKind {}

/// One element of the layout tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutNode {
    pub id: NodeId,
    /// Serialized as `type` to match the playground identity naming.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Nesting level, used for stacking order only.
    pub depth: u32,
    #[serde(default)]
    pub style: StyleMap,
    #[serde(default)]
    pub children: Vec<LayoutNode>,
}

impl LayoutNode {
    /// Creates a childless node with a generated ID and empty style.
    pub fn new(kind: NodeKind, depth: u32) -> Self {
        Self::with_id(Uuid::new_v4(), kind, depth)
    }

    /// Creates a node with a caller-provided ID.
    ///
    /// Used by loading paths and tests where identity already exists.
    pub fn with_id(id: NodeId, kind: NodeKind, depth: u32) -> Self {
        Self {
            id,
            kind,
            depth: depth.max(ROOT_DEPTH),
            style: StyleMap::new(),
            children: Vec::new(),
        }
    }

    /// Creates a new root-level row.
    pub fn row() -> Self {
        Self::new(NodeKind::Row, ROOT_DEPTH)
    }

    /// Creates a fresh node of `kind` one level below `self`.
    pub fn new_child(&self, kind: NodeKind) -> Self {
        Self::new(kind, self.depth + 1)
    }

    /// Returns whether `(kind, id)` names this node.
    pub fn matches(&self, kind: NodeKind, id: NodeId) -> bool {
        self.kind == kind && self.id == id
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(LayoutNode::subtree_len)
            .sum::<usize>()
    }
}
