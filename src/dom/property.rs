//! Structural property descriptors.
//!
//! Every node kind declares its structure as an ordered list of descriptors.
//! A descriptor is one of three shapes:
//!
//! ```text
//! Simple     → scalar value (identifier, flag, operator, ...)
//! Child      → at most one child node, mandatory or optional
//! ChildList  → ordered list of child nodes (a NodeList)
//! ```
//!
//! Child and child-list descriptors carry a cycle-risk flag: when set, the
//! incoming node must not be an ancestor of the owner.

use std::fmt;

use super::kind::NodeKind;
use super::values::{SimpleValue, ValueType};
use crate::base::PrimitiveKind;

/// Category a child must belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeClass {
    /// Any node.
    Node,
    Expression,
    Statement,
    Type,
    Name,
    BodyDeclaration,
    /// Exactly this kind.
    Kind(NodeKind),
}

impl fmt::Display for NodeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node => f.write_str("Node"),
            Self::Expression => f.write_str("Expression"),
            Self::Statement => f.write_str("Statement"),
            Self::Type => f.write_str("Type"),
            Self::Name => f.write_str("Name"),
            Self::BodyDeclaration => f.write_str("BodyDeclaration"),
            Self::Kind(kind) => write!(f, "{kind}"),
        }
    }
}

/// What a new node gets for a child property before anyone assigns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultChild {
    Node(NodeKind),
    /// A `PrimitiveType` node with the given code.
    Primitive(PrimitiveKind),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyShape {
    Simple {
        value: ValueType,
        default: SimpleValue,
    },
    Child {
        class: NodeClass,
        mandatory: bool,
        cycle_risk: bool,
        default: Option<DefaultChild>,
    },
    ChildList {
        class: NodeClass,
        cycle_risk: bool,
    },
}

/// Metadata for one structural property of a node kind.
///
/// Descriptors are immutable `static` items. Two descriptors are the same
/// property when owner and id match.
#[derive(Debug)]
pub struct PropertyDescriptor {
    owner: NodeKind,
    id: &'static str,
    shape: PropertyShape,
}

impl PropertyDescriptor {
    pub const fn simple(
        owner: NodeKind,
        id: &'static str,
        value: ValueType,
        default: SimpleValue,
    ) -> Self {
        Self {
            owner,
            id,
            shape: PropertyShape::Simple { value, default },
        }
    }

    pub const fn child(
        owner: NodeKind,
        id: &'static str,
        class: NodeClass,
        mandatory: bool,
        cycle_risk: bool,
        default: Option<DefaultChild>,
    ) -> Self {
        Self {
            owner,
            id,
            shape: PropertyShape::Child {
                class,
                mandatory,
                cycle_risk,
                default,
            },
        }
    }

    pub const fn child_list(
        owner: NodeKind,
        id: &'static str,
        class: NodeClass,
        cycle_risk: bool,
    ) -> Self {
        Self {
            owner,
            id,
            shape: PropertyShape::ChildList { class, cycle_risk },
        }
    }

    pub fn owner(&self) -> NodeKind {
        self.owner
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn shape(&self) -> &PropertyShape {
        &self.shape
    }

    pub fn is_simple(&self) -> bool {
        matches!(self.shape, PropertyShape::Simple { .. })
    }

    pub fn is_child(&self) -> bool {
        matches!(self.shape, PropertyShape::Child { .. })
    }

    pub fn is_child_list(&self) -> bool {
        matches!(self.shape, PropertyShape::ChildList { .. })
    }

    /// Whether a child property must always hold a node.
    pub fn is_mandatory(&self) -> bool {
        matches!(self.shape, PropertyShape::Child { mandatory: true, .. })
    }

    pub fn cycle_risk(&self) -> bool {
        match self.shape {
            PropertyShape::Child { cycle_risk, .. } | PropertyShape::ChildList { cycle_risk, .. } => {
                cycle_risk
            }
            PropertyShape::Simple { .. } => false,
        }
    }

    /// Element category for child and child-list properties.
    pub fn class(&self) -> Option<NodeClass> {
        match self.shape {
            PropertyShape::Child { class, .. } | PropertyShape::ChildList { class, .. } => {
                Some(class)
            }
            PropertyShape::Simple { .. } => None,
        }
    }

    pub fn value_type(&self) -> Option<ValueType> {
        match self.shape {
            PropertyShape::Simple { value, .. } => Some(value),
            _ => None,
        }
    }
}

impl PartialEq for PropertyDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.id == other.id
    }
}

impl Eq for PropertyDescriptor {}

impl fmt::Display for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.owner, self.id)
    }
}
