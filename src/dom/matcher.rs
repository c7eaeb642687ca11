//! Structural comparison of subtrees.
//!
//! [`subtree_match`] compares kind, then every declared property in order.
//! Each comparison goes back through the matcher, so an implementation can
//! override one kind (by matching on [`NodeRef::kind`] in
//! [`AstMatcher::match_node`]) and fall back to [`subtree_match`] for the
//! rest.

use super::ast::{Ast, NodeId, NodeRef};
use super::error::DomResult;
use super::property::{PropertyDescriptor, PropertyShape};
use super::values::SimpleValue;

pub trait AstMatcher {
    /// Compare two nodes. Defaults to a full structural comparison.
    fn match_node(&mut self, left: NodeRef<'_>, right: NodeRef<'_>) -> bool {
        subtree_match(self, left, right)
    }

    fn match_simple(
        &mut self,
        _property: &'static PropertyDescriptor,
        left: &SimpleValue,
        right: &SimpleValue,
    ) -> bool {
        left == right
    }

    /// Whether source ranges take part in the comparison.
    fn match_ranges(&self) -> bool {
        false
    }
}

/// Ignores source ranges and flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMatcher;

impl AstMatcher for DefaultMatcher {}

/// Like [`DefaultMatcher`] but ranges must be equal too.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionMatcher;

impl AstMatcher for PositionMatcher {
    fn match_ranges(&self) -> bool {
        true
    }
}

/// Compare two subtrees property by property. The nodes may live in
/// different trees.
pub fn subtree_match<M: AstMatcher + ?Sized>(
    matcher: &mut M,
    left: NodeRef<'_>,
    right: NodeRef<'_>,
) -> bool {
    if left.kind() != right.kind() {
        return false;
    }
    if matcher.match_ranges() && left.source_range() != right.source_range() {
        return false;
    }
    let properties = left.properties();
    if properties != right.properties() {
        return false;
    }
    properties
        .iter()
        .all(|&property| match_property(matcher, property, left, right))
}

fn match_property<M: AstMatcher + ?Sized>(
    matcher: &mut M,
    property: &'static PropertyDescriptor,
    left: NodeRef<'_>,
    right: NodeRef<'_>,
) -> bool {
    match property.shape() {
        PropertyShape::Simple { .. } => match (left.simple(property), right.simple(property)) {
            (Ok(l), Ok(r)) => matcher.match_simple(property, l, r),
            _ => false,
        },
        PropertyShape::Child { .. } => match (left.child(property), right.child(property)) {
            (Ok(None), Ok(None)) => true,
            (Ok(Some(l)), Ok(Some(r))) => matcher.match_node(l, r),
            _ => false,
        },
        PropertyShape::ChildList { .. } => match (left.list(property), right.list(property)) {
            (Ok(l), Ok(r)) => {
                l.len() == r.len()
                    && l.iter().zip(r.iter()).all(|(a, b)| {
                        match (left.ast().node(a), right.ast().node(b)) {
                            (Ok(a), Ok(b)) => matcher.match_node(a, b),
                            _ => false,
                        }
                    })
            }
            _ => false,
        },
    }
}

impl Ast {
    /// Structural equality of `node` with `other_node` in `other`, ignoring
    /// ranges and flags.
    pub fn structurally_equals(
        &self,
        node: NodeId,
        other: &Ast,
        other_node: NodeId,
    ) -> DomResult<bool> {
        self.subtree_match_with(&mut DefaultMatcher, node, other, other_node)
    }

    pub fn subtree_match_with<M: AstMatcher + ?Sized>(
        &self,
        matcher: &mut M,
        node: NodeId,
        other: &Ast,
        other_node: NodeId,
    ) -> DomResult<bool> {
        let left = self.node(node)?;
        let right = other.node(other_node)?;
        Ok(matcher.match_node(left, right))
    }
}
