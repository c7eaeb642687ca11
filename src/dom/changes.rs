//! Edit recording.
//!
//! When [`AstSettings::record_changes`](super::AstSettings) is on, every
//! successful edit appends one [`AstChange`] to the tree's [`ChangeLog`].

use rustc_hash::FxHashSet;

use super::ast::NodeId;
use super::property::PropertyDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// A node was allocated.
    Created,
    /// A child was inserted into a list or set on an empty child slot.
    Added,
    /// A child was taken out of a list or a child slot was cleared.
    Removed,
    /// A child was swapped for another.
    Replaced,
    /// A scalar property or the flags changed.
    Changed,
}

/// One recorded edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AstChange {
    /// The node whose property was edited (or the created node).
    pub node: NodeId,
    /// `None` for creation and flag changes.
    pub property: Option<&'static PropertyDescriptor>,
    pub kind: ChangeKind,
    /// Child that left the property.
    pub old_child: Option<NodeId>,
    /// Child that entered the property.
    pub new_child: Option<NodeId>,
}

impl AstChange {
    pub(crate) fn created(node: NodeId) -> Self {
        Self {
            node,
            property: None,
            kind: ChangeKind::Created,
            old_child: None,
            new_child: None,
        }
    }

    pub(crate) fn changed(node: NodeId, property: Option<&'static PropertyDescriptor>) -> Self {
        Self {
            node,
            property,
            kind: ChangeKind::Changed,
            old_child: None,
            new_child: None,
        }
    }

    pub(crate) fn child_edit(
        node: NodeId,
        property: &'static PropertyDescriptor,
        old_child: Option<NodeId>,
        new_child: Option<NodeId>,
    ) -> Self {
        let kind = match (old_child, new_child) {
            (None, Some(_)) => ChangeKind::Added,
            (Some(_), None) => ChangeKind::Removed,
            _ => ChangeKind::Replaced,
        };
        Self {
            node,
            property: Some(property),
            kind,
            old_child,
            new_child,
        }
    }
}

/// Ordered log of edits applied to one tree.
#[derive(Debug, Clone, Default)]
pub struct ChangeLog {
    changes: Vec<AstChange>,
}

impl ChangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, change: AstChange) {
        self.changes.push(change);
    }

    pub fn clear(&mut self) {
        self.changes.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AstChange> {
        self.changes.iter()
    }

    /// Whether any edit touched `node` itself.
    pub fn is_dirty(&self, node: NodeId) -> bool {
        self.changes.iter().any(|c| c.node == node)
    }

    /// Nodes created since the log was last drained.
    pub fn created(&self) -> FxHashSet<NodeId> {
        self.changes
            .iter()
            .filter(|c| c.kind == ChangeKind::Created)
            .map(|c| c.node)
            .collect()
    }

    /// Nodes detached from a parent since the log was last drained.
    pub fn removed(&self) -> FxHashSet<NodeId> {
        self.changes.iter().filter_map(|c| c.old_child).collect()
    }

    pub(crate) fn take(&mut self) -> Vec<AstChange> {
        std::mem::take(&mut self.changes)
    }
}
