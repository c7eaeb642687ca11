//! Errors raised by tree mutations and property access.

use thiserror::Error;

use super::ast::NodeId;
use super::kind::NodeKind;
use super::level::ApiLevel;
use super::property::{NodeClass, PropertyDescriptor};
use super::values::ValueType;

/// Failure class of a [`DomError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong category, foreign tree, already parented, cycle and friends.
    Argument,
    /// The property or kind does not exist at the tree's language level.
    UnsupportedAtLevel,
    /// A list index outside the list bounds.
    Range,
}

/// Errors from structural edits and property access on an [`Ast`](super::Ast).
///
/// A failed operation leaves the tree exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("node {node} belongs to another tree")]
    ForeignNode { node: NodeId },

    #[error("node {node} already has a parent")]
    AlreadyParented { node: NodeId },

    #[error("attaching {child} under {owner} would create a cycle")]
    Cycle { owner: NodeId, child: NodeId },

    #[error("{property} expects {expected}, got {found}")]
    WrongClass {
        property: &'static PropertyDescriptor,
        expected: NodeClass,
        found: NodeKind,
    },

    #[error("{property} is mandatory and cannot be cleared")]
    MissingChild { property: &'static PropertyDescriptor },

    #[error("{property} holds {expected:?} values, got {found:?}")]
    WrongValue {
        property: &'static PropertyDescriptor,
        expected: ValueType,
        found: ValueType,
    },

    #[error("invalid value for {property}: {message}")]
    InvalidValue {
        property: &'static PropertyDescriptor,
        message: String,
    },

    #[error("{property} is not a {expected} property")]
    WrongShape {
        property: &'static PropertyDescriptor,
        expected: &'static str,
    },

    #[error("node {node} is protected")]
    Protected { node: NodeId },

    #[error("invalid source range (start {start}, length {length})")]
    InvalidSourceRange { start: i64, length: i64 },

    #[error("{kind} has no property {property}")]
    UnknownProperty {
        kind: NodeKind,
        property: &'static PropertyDescriptor,
    },

    #[error("{property} is not available at {level}")]
    UnsupportedProperty {
        property: &'static PropertyDescriptor,
        level: ApiLevel,
    },

    #[error("{kind} is not available at {level}")]
    UnsupportedKind { kind: NodeKind, level: ApiLevel },

    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl DomError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UnsupportedProperty { .. } | Self::UnsupportedKind { .. } => {
                ErrorKind::UnsupportedAtLevel
            }
            Self::IndexOutOfRange { .. } => ErrorKind::Range,
            _ => ErrorKind::Argument,
        }
    }

    pub fn is_argument(&self) -> bool {
        self.kind() == ErrorKind::Argument
    }

    pub(crate) fn invalid_value(
        property: &'static PropertyDescriptor,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            property,
            message: message.into(),
        }
    }

    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { index, len }
    }
}

pub type DomResult<T> = Result<T, DomError>;
