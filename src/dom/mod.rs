//! Self-describing syntax trees.
//!
//! Every node kind declares its structure as an ordered list of
//! [`PropertyDescriptor`]s. The [`Ast`] arena stores nodes against those
//! descriptors and enforces the tree invariants on every edit:
//!
//! - a node has at most one parent and belongs to exactly one tree
//! - attaching a parented node, a node of another tree, or an ancestor of
//!   the owner (for cycle-risk properties) fails and changes nothing
//! - every structural edit bumps the modification count
//!
//! ## Key Types
//!
//! - [`Ast`] / [`NodeId`] - the arena and its node handles
//! - [`NodeKind`] / [`PropertyDescriptor`] - the property model, per [`ApiLevel`]
//! - [`NodeList`] / [`NodeListMut`] - child-list views
//! - [`Visitor`] - traversal with well-defined behavior under edits
//! - [`AstMatcher`] - pluggable structural comparison
//! - [`NodeFinder`] - position lookup
//!
//! Descriptors for each kind live in [`nodes`], e.g.
//! `nodes::type_declaration::NAME`.

mod ast;
mod changes;
mod clone;
mod error;
mod finder;
mod flags;
mod kind;
mod level;
mod matcher;
mod node_list;
pub mod nodes;
mod property;
mod settings;
mod values;
mod visitor;

pub use ast::{Ast, AstId, NodeId, NodeRef};
pub use changes::{AstChange, ChangeKind, ChangeLog};
pub use error::{DomError, DomResult, ErrorKind};
pub use finder::NodeFinder;
pub use flags::NodeFlags;
pub use kind::NodeKind;
pub use level::ApiLevel;
pub use matcher::{AstMatcher, DefaultMatcher, PositionMatcher, subtree_match};
pub use node_list::{NodeList, NodeListMut};
pub use nodes::MISSING_IDENTIFIER;
pub use property::{DefaultChild, NodeClass, PropertyDescriptor, PropertyShape};
pub use settings::AstSettings;
pub use values::{AssignmentOperator, InfixOperator, ModifierKeyword, SimpleValue, ValueType};
pub use visitor::Visitor;

#[cfg(test)]
mod tests;
