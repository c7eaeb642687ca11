//! Deep copies of subtrees, within one tree or across trees.
//!
//! A copy goes through a detached owned form first. That form is checked
//! against the target tree's level before any node is allocated, so a
//! rejected copy leaves the target untouched.

use tracing::{debug, trace};

use super::ast::{Ast, NodeId, Slot};
use super::error::{DomError, DomResult};
use super::flags::NodeFlags;
use super::kind::NodeKind;
use super::level::ApiLevel;
use super::property::{PropertyDescriptor, PropertyShape};
use super::values::SimpleValue;
use crate::base::SourceRange;

#[derive(Debug, Clone)]
struct Detached {
    kind: NodeKind,
    range: SourceRange,
    flags: NodeFlags,
    properties: Vec<(&'static PropertyDescriptor, DetachedValue)>,
}

#[derive(Debug, Clone)]
enum DetachedValue {
    Simple(SimpleValue),
    Child(Option<Box<Detached>>),
    List(Vec<Detached>),
}

impl DetachedValue {
    /// Whether dropping this value loses nothing.
    fn is_default(&self, property: &PropertyDescriptor) -> bool {
        match (self, property.shape()) {
            (Self::Simple(value), PropertyShape::Simple { default, .. }) => value == default,
            (Self::Child(child), _) => child.is_none(),
            (Self::List(items), _) => items.is_empty(),
            _ => false,
        }
    }
}

fn detach(ast: &Ast, node: NodeId) -> Detached {
    let data = ast.data(node);
    let properties = data
        .kind
        .properties(ast.level())
        .iter()
        .zip(&data.slots)
        .map(|(&property, slot)| {
            let value = match slot {
                Slot::Simple(value) => DetachedValue::Simple(value.clone()),
                Slot::Child(child) => {
                    DetachedValue::Child(child.map(|c| Box::new(detach(ast, c))))
                }
                Slot::List(items) => {
                    DetachedValue::List(items.iter().map(|&c| detach(ast, c)).collect())
                }
            };
            (property, value)
        })
        .collect();
    Detached {
        kind: data.kind,
        range: data.range,
        flags: data.flags,
        properties,
    }
}

/// Check that every non-default property has a home at `level`.
fn check_level(detached: &Detached, level: ApiLevel) -> DomResult<()> {
    if !detached.kind.is_supported_at(level) {
        return Err(DomError::UnsupportedKind {
            kind: detached.kind,
            level,
        });
    }
    let target = detached.kind.properties(level);
    for &(property, ref value) in &detached.properties {
        if !target.contains(&property) {
            if value.is_default(property) {
                continue;
            }
            return Err(DomError::UnsupportedProperty { property, level });
        }
        match value {
            DetachedValue::Simple(_) | DetachedValue::Child(None) => {}
            DetachedValue::Child(Some(child)) => check_level(child, level)?,
            DetachedValue::List(items) => {
                for item in items {
                    check_level(item, level)?;
                }
            }
        }
    }
    Ok(())
}

impl Ast {
    fn materialize(&mut self, detached: &Detached) -> NodeId {
        let node = self.alloc(detached.kind);
        {
            let data = self.data_mut(node);
            data.range = detached.range;
            data.flags = detached
                .flags
                .difference(NodeFlags::PROTECT.union(NodeFlags::ORIGINAL));
        }
        for &(property, ref value) in &detached.properties {
            let Ok(slot) = self.slot_of(detached.kind, property) else {
                continue;
            };
            match value {
                DetachedValue::Simple(value) => {
                    *self.slot_mut(node, slot) = Slot::Simple(value.clone());
                }
                DetachedValue::Child(None) => {}
                DetachedValue::Child(Some(child)) => {
                    let child = self.materialize(child);
                    self.link(node, slot, property, child);
                }
                DetachedValue::List(items) => {
                    for item in items {
                        let child = self.materialize(item);
                        self.link(node, slot, property, child);
                    }
                }
            }
        }
        self.fill_missing_defaults(node);
        node
    }

    /// Give empty mandatory children their default node.
    fn fill_missing_defaults(&mut self, node: NodeId) {
        let kind = self.data(node).kind;
        for (slot, &property) in kind.properties(self.level()).iter().enumerate() {
            let PropertyShape::Child {
                mandatory: true,
                default: Some(default),
                ..
            } = property.shape()
            else {
                continue;
            };
            if matches!(self.slot(node, slot), Slot::Child(None)) {
                let child = self.build_default(*default);
                self.link(node, slot, property, child);
            }
        }
    }

    /// Deep copy of `node` within this tree. The copy is unparented.
    pub fn copy_subtree(&mut self, node: NodeId) -> DomResult<NodeId> {
        self.check(node)?;
        let detached = detach(self, node);
        let copy = self.materialize(&detached);
        self.finish_creation(copy);
        trace!("[AST] copied {node} to {copy}");
        Ok(copy)
    }

    /// Deep copy of `node` from `source` into this tree.
    ///
    /// Properties are matched by id. A property with a non-default value
    /// and no counterpart at this tree's level fails with an
    /// unsupported-at-level error, and nothing is created.
    pub fn import_subtree(&mut self, source: &Ast, node: NodeId) -> DomResult<NodeId> {
        source.check(node)?;
        let detached = detach(source, node);
        check_level(&detached, self.level())
            .inspect_err(|err| debug!("[AST] rejected import: {err}"))?;
        let copy = self.materialize(&detached);
        self.finish_creation(copy);
        trace!("[AST] imported {node} as {copy}");
        Ok(copy)
    }
}
