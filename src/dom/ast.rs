//! The tree arena.
//!
//! An [`Ast`] owns every node it creates. Nodes are addressed by [`NodeId`],
//! an index into the arena tagged with the arena's own [`AstId`], so ids
//! from one tree are rejected by every other tree at the API boundary.
//!
//! ## Structure
//!
//! Each node stores one slot per property its kind declares at the tree's
//! language level, in declared order:
//!
//! ```text
//! Simple     → Slot::Simple(value)
//! Child      → Slot::Child(Option<NodeId>)
//! ChildList  → Slot::List(Vec<NodeId>)
//! ```
//!
//! Mandatory children are created together with their owner, so a read never
//! has to materialize anything and never touches the modification count.
//!
//! ## Invariants
//!
//! - A node has at most one parent, recorded as `(owner, property)`.
//! - The owner's slot for that property holds the node, and vice versa.
//! - No node is its own ancestor.
//! - Every structural edit bumps [`Ast::modification_count`].

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use smol_str::SmolStr;
use tracing::{debug, trace};

use super::changes::{AstChange, ChangeLog};
use super::error::{DomError, DomResult};
use super::flags::NodeFlags;
use super::kind::NodeKind;
use super::level::ApiLevel;
use super::node_list::{NodeList, NodeListMut};
use super::nodes;
use super::property::{DefaultChild, PropertyDescriptor, PropertyShape};
use super::settings::AstSettings;
use super::values::{ModifierKeyword, SimpleValue};
use crate::base::{PrimitiveKind, SourceRange, is_identifier};

static NEXT_AST_ID: AtomicU32 = AtomicU32::new(1);

/// Process-unique identity of one [`Ast`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AstId(u32);

impl AstId {
    fn next() -> Self {
        Self(NEXT_AST_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

/// A node handle: arena identity plus slot index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    ast: AstId,
    index: u32,
}

impl NodeId {
    pub fn ast(self) -> AstId {
        self.ast
    }

    pub fn index(self) -> u32 {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}.{}", self.ast.0, self.index)
    }
}

#[derive(Debug, Clone)]
pub(crate) enum Slot {
    Simple(SimpleValue),
    Child(Option<NodeId>),
    List(Vec<NodeId>),
}

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<(NodeId, &'static PropertyDescriptor)>,
    pub(crate) range: SourceRange,
    pub(crate) flags: NodeFlags,
    pub(crate) slots: Vec<Slot>,
}

/// Live position of an in-progress walk over one child list.
///
/// `position` is the index of the next element to visit.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ListCursor {
    pub(crate) owner: NodeId,
    pub(crate) slot: usize,
    pub(crate) position: usize,
}

/// A syntax tree arena.
#[derive(Debug)]
pub struct Ast {
    id: AstId,
    settings: AstSettings,
    nodes: Vec<NodeData>,
    modification_count: u64,
    pub(crate) cursors: Vec<ListCursor>,
    changes: ChangeLog,
}

impl Default for Ast {
    fn default() -> Self {
        Self::new(AstSettings::default())
    }
}

impl Ast {
    pub fn new(settings: AstSettings) -> Self {
        Self {
            id: AstId::next(),
            settings,
            nodes: Vec::new(),
            modification_count: 0,
            cursors: Vec::new(),
            changes: ChangeLog::new(),
        }
    }

    pub fn with_level(level: ApiLevel) -> Self {
        Self::new(AstSettings::new(level))
    }

    pub fn id(&self) -> AstId {
        self.id
    }

    pub fn settings(&self) -> &AstSettings {
        &self.settings
    }

    pub fn level(&self) -> ApiLevel {
        self.settings.level
    }

    /// Number of nodes ever allocated, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Counter bumped by every structural edit.
    pub fn modification_count(&self) -> u64 {
        self.modification_count
    }

    pub fn changes(&self) -> &ChangeLog {
        &self.changes
    }

    /// Drain the recorded edits.
    pub fn take_changes(&mut self) -> Vec<AstChange> {
        self.changes.take()
    }

    /// Whether `node` was allocated by this tree.
    pub fn contains(&self, node: NodeId) -> bool {
        node.ast == self.id && (node.index as usize) < self.nodes.len()
    }

    // ========================================================================
    // INTERNAL ACCESS
    // ========================================================================

    pub(crate) fn check(&self, node: NodeId) -> DomResult<()> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(DomError::ForeignNode { node })
        }
    }

    /// Data of a node already known to belong to this tree.
    pub(crate) fn data(&self, node: NodeId) -> &NodeData {
        &self.nodes[node.index as usize]
    }

    pub(crate) fn data_mut(&mut self, node: NodeId) -> &mut NodeData {
        &mut self.nodes[node.index as usize]
    }

    pub(crate) fn slot_of(
        &self,
        kind: NodeKind,
        property: &'static PropertyDescriptor,
    ) -> DomResult<usize> {
        let level = self.level();
        kind.properties(level)
            .iter()
            .position(|p| *p == property)
            .ok_or_else(|| {
                if kind.declares(property) {
                    DomError::UnsupportedProperty { property, level }
                } else {
                    DomError::UnknownProperty { kind, property }
                }
            })
    }

    /// Validate `node` and locate its slot for `property`.
    pub(crate) fn slot_index(
        &self,
        node: NodeId,
        property: &'static PropertyDescriptor,
    ) -> DomResult<usize> {
        self.check(node)?;
        self.slot_of(self.data(node).kind, property)
    }

    pub(crate) fn slot(&self, node: NodeId, slot: usize) -> &Slot {
        &self.data(node).slots[slot]
    }

    pub(crate) fn slot_mut(&mut self, node: NodeId, slot: usize) -> &mut Slot {
        &mut self.data_mut(node).slots[slot]
    }

    pub(crate) fn set_parent(
        &mut self,
        node: NodeId,
        parent: Option<(NodeId, &'static PropertyDescriptor)>,
    ) {
        self.data_mut(node).parent = parent;
    }

    pub(crate) fn bump(&mut self) {
        self.modification_count += 1;
    }

    pub(crate) fn record(&mut self, change: AstChange) {
        if self.settings.record_changes {
            self.changes.record(change);
        }
    }

    // ========================================================================
    // NODE CREATION
    // ========================================================================

    /// Create an unparented node of `kind` with all defaults in place.
    ///
    /// Scalar properties start at their declared default. Child properties
    /// with a default child get a fresh one, and a JLS8 array type starts
    /// with a single dimension.
    pub fn new_node(&mut self, kind: NodeKind) -> DomResult<NodeId> {
        let level = self.level();
        if !kind.is_supported_at(level) {
            let err = DomError::UnsupportedKind { kind, level };
            debug!("[AST] rejected new_node: {err}");
            return Err(err);
        }
        let node = self.build_node(kind);
        self.finish_creation(node);
        Ok(node)
    }

    pub(crate) fn finish_creation(&mut self, node: NodeId) {
        self.bump();
        self.record(AstChange::created(node));
        trace!("[AST] created {} {node}", self.data(node).kind);
    }

    /// Allocate a node with scalar defaults and empty child slots.
    pub(crate) fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let slots = kind
            .properties(self.level())
            .iter()
            .map(|property| match property.shape() {
                PropertyShape::Simple { default, .. } => Slot::Simple(default.clone()),
                PropertyShape::Child { .. } => Slot::Child(None),
                PropertyShape::ChildList { .. } => Slot::List(Vec::new()),
            })
            .collect();
        let node = NodeId {
            ast: self.id,
            index: self.nodes.len() as u32,
        };
        self.nodes.push(NodeData {
            kind,
            parent: None,
            range: SourceRange::UNKNOWN,
            flags: self.settings.default_flags,
            slots,
        });
        node
    }

    fn build_node(&mut self, kind: NodeKind) -> NodeId {
        let node = self.alloc(kind);
        let level = self.level();
        for (slot, property) in kind.properties(level).iter().enumerate() {
            let PropertyShape::Child {
                default: Some(default),
                ..
            } = property.shape()
            else {
                continue;
            };
            let child = self.build_default(*default);
            self.link(node, slot, property, child);
        }
        if kind == NodeKind::ArrayType && level >= ApiLevel::Jls8 {
            let dimension = self.build_node(NodeKind::Dimension);
            self.link_into(node, &nodes::array_type::DIMENSIONS, dimension);
        }
        node
    }

    /// Build the node a child property starts out with.
    pub(crate) fn build_default(&mut self, default: DefaultChild) -> NodeId {
        match default {
            DefaultChild::Node(kind) => self.build_node(kind),
            DefaultChild::Primitive(code) => {
                let child = self.build_node(NodeKind::PrimitiveType);
                self.init_simple(
                    child,
                    &nodes::primitive_type::PRIMITIVE_TYPE_CODE,
                    SimpleValue::Primitive(code),
                );
                child
            }
        }
    }

    /// Store a scalar without validation or bookkeeping.
    pub(crate) fn init_simple(
        &mut self,
        node: NodeId,
        property: &'static PropertyDescriptor,
        value: SimpleValue,
    ) {
        if let Ok(slot) = self.slot_of(self.data(node).kind, property) {
            *self.slot_mut(node, slot) = Slot::Simple(value);
        }
    }

    /// Attach `child` without validation or bookkeeping.
    pub(crate) fn link(
        &mut self,
        owner: NodeId,
        slot: usize,
        property: &'static PropertyDescriptor,
        child: NodeId,
    ) {
        match self.slot_mut(owner, slot) {
            Slot::Child(current) => *current = Some(child),
            Slot::List(items) => items.push(child),
            Slot::Simple(_) => return,
        }
        self.set_parent(child, Some((owner, property)));
    }

    pub(crate) fn link_into(
        &mut self,
        owner: NodeId,
        property: &'static PropertyDescriptor,
        child: NodeId,
    ) {
        if let Ok(slot) = self.slot_of(self.data(owner).kind, property) {
            self.link(owner, slot, property, child);
        }
    }

    // ========================================================================
    // NODE ACCESSORS
    // ========================================================================

    /// Read view of a node.
    pub fn node(&self, node: NodeId) -> DomResult<NodeRef<'_>> {
        self.check(node)?;
        Ok(NodeRef { ast: self, id: node })
    }

    pub fn kind(&self, node: NodeId) -> DomResult<NodeKind> {
        self.check(node)?;
        Ok(self.data(node).kind)
    }

    pub fn parent(&self, node: NodeId) -> DomResult<Option<NodeId>> {
        self.check(node)?;
        Ok(self.data(node).parent.map(|(parent, _)| parent))
    }

    /// The property of the parent that holds `node`.
    pub fn location_in_parent(
        &self,
        node: NodeId,
    ) -> DomResult<Option<&'static PropertyDescriptor>> {
        self.check(node)?;
        Ok(self.data(node).parent.map(|(_, property)| property))
    }

    /// The topmost ancestor of `node` (itself when unparented).
    pub fn root(&self, node: NodeId) -> DomResult<NodeId> {
        self.check(node)?;
        let mut current = node;
        while let Some((parent, _)) = self.data(current).parent {
            current = parent;
        }
        Ok(current)
    }

    /// Whether `ancestor` is `node` or one of its ancestors.
    pub(crate) fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == ancestor {
                return true;
            }
            current = self.data(n).parent.map(|(parent, _)| parent);
        }
        false
    }

    pub fn source_range(&self, node: NodeId) -> DomResult<SourceRange> {
        self.check(node)?;
        Ok(self.data(node).range)
    }

    /// Set the source position of `node`.
    ///
    /// Accepts `start >= 0 && length >= 0`, or `(-1, 0)` for "unknown".
    /// Positions are not structure, so the modification count is untouched.
    pub fn set_source_range(&mut self, node: NodeId, start: i64, length: i64) -> DomResult<()> {
        self.check(node)?;
        let range = SourceRange::from_raw(start, length)
            .ok_or(DomError::InvalidSourceRange { start, length })
            .inspect_err(|err| debug!("[AST] rejected set_source_range: {err}"))?;
        self.check_unprotected(node)?;
        self.data_mut(node).range = range;
        Ok(())
    }

    pub fn flags(&self, node: NodeId) -> DomResult<NodeFlags> {
        self.check(node)?;
        Ok(self.data(node).flags)
    }

    /// Replace the flags of `node`. Allowed on protected nodes.
    pub fn set_flags(&mut self, node: NodeId, flags: NodeFlags) -> DomResult<()> {
        self.check(node)?;
        self.data_mut(node).flags = flags;
        self.bump();
        self.record(AstChange::changed(node, None));
        Ok(())
    }

    pub(crate) fn check_unprotected(&self, node: NodeId) -> DomResult<()> {
        if self.data(node).flags.contains(NodeFlags::PROTECT) {
            let err = DomError::Protected { node };
            debug!("[AST] rejected edit: {err}");
            return Err(err);
        }
        Ok(())
    }

    // ========================================================================
    // PROPERTY ACCESS
    // ========================================================================

    pub fn simple(
        &self,
        node: NodeId,
        property: &'static PropertyDescriptor,
    ) -> DomResult<&SimpleValue> {
        let slot = self.slot_index(node, property)?;
        match self.slot(node, slot) {
            Slot::Simple(value) => Ok(value),
            _ => Err(DomError::WrongShape {
                property,
                expected: "simple",
            }),
        }
    }

    pub fn set_simple(
        &mut self,
        node: NodeId,
        property: &'static PropertyDescriptor,
        value: SimpleValue,
    ) -> DomResult<()> {
        let slot = self
            .validate_simple(node, property, &value)
            .inspect_err(|err| debug!("[AST] rejected set_simple: {err}"))?;
        self.check_unprotected(node)?;
        *self.slot_mut(node, slot) = Slot::Simple(value);
        self.bump();
        self.record(AstChange::changed(node, Some(property)));
        Ok(())
    }

    fn validate_simple(
        &self,
        node: NodeId,
        property: &'static PropertyDescriptor,
        value: &SimpleValue,
    ) -> DomResult<usize> {
        let slot = self.slot_index(node, property)?;
        let PropertyShape::Simple {
            value: expected, ..
        } = property.shape()
        else {
            return Err(DomError::WrongShape {
                property,
                expected: "simple",
            });
        };
        if value.value_type() != *expected {
            return Err(DomError::WrongValue {
                property,
                expected: *expected,
                found: value.value_type(),
            });
        }
        match value {
            SimpleValue::Identifier(text) if !is_identifier(text) => Err(
                DomError::invalid_value(property, format!("`{text}` is not an identifier")),
            ),
            SimpleValue::Int(n) if *n < 0 => {
                Err(DomError::invalid_value(property, "must not be negative"))
            }
            SimpleValue::Modifiers(bits) if bits & !ModifierKeyword::ALL_FLAGS != 0 => Err(
                DomError::invalid_value(property, format!("unknown modifier bits {bits:#x}")),
            ),
            SimpleValue::Str(text) if property == &nodes::number_literal::TOKEN => {
                if text.is_empty() {
                    Err(DomError::invalid_value(property, "empty number token"))
                } else {
                    Ok(slot)
                }
            }
            SimpleValue::Str(text) if property == &nodes::string_literal::ESCAPED_VALUE => {
                if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
                    Ok(slot)
                } else {
                    Err(DomError::invalid_value(property, "string literal must be quoted"))
                }
            }
            _ => Ok(slot),
        }
    }

    pub fn child(
        &self,
        node: NodeId,
        property: &'static PropertyDescriptor,
    ) -> DomResult<Option<NodeId>> {
        let slot = self.slot_index(node, property)?;
        match self.slot(node, slot) {
            Slot::Child(child) => Ok(*child),
            _ => Err(DomError::WrongShape {
                property,
                expected: "child",
            }),
        }
    }

    /// Assign a single-child property, returning the previous child.
    ///
    /// The previous child is left unparented. `None` is only accepted for
    /// optional properties.
    pub fn set_child(
        &mut self,
        node: NodeId,
        property: &'static PropertyDescriptor,
        child: Option<NodeId>,
    ) -> DomResult<Option<NodeId>> {
        let (slot, old) = self
            .validate_set_child(node, property, child)
            .inspect_err(|err| debug!("[AST] rejected set_child: {err}"))?;
        if let Some(old) = old {
            self.set_parent(old, None);
        }
        if let Some(new) = child {
            self.set_parent(new, Some((node, property)));
        }
        *self.slot_mut(node, slot) = Slot::Child(child);
        self.bump();
        self.record(AstChange::child_edit(node, property, old, child));
        trace!("[AST] {node}.{} = {child:?}", property.id());
        Ok(old)
    }

    fn validate_set_child(
        &self,
        node: NodeId,
        property: &'static PropertyDescriptor,
        child: Option<NodeId>,
    ) -> DomResult<(usize, Option<NodeId>)> {
        let slot = self.slot_index(node, property)?;
        let old = match self.slot(node, slot) {
            Slot::Child(old) => *old,
            _ => {
                return Err(DomError::WrongShape {
                    property,
                    expected: "child",
                });
            }
        };
        match child {
            Some(new) => self.check_attach(node, property, new)?,
            None if property.is_mandatory() => {
                return Err(DomError::MissingChild { property });
            }
            None => {}
        }
        self.check_unprotected(node)?;
        if let Some(old) = old {
            self.check_unprotected(old)?;
        }
        Ok((slot, old))
    }

    /// Checks shared by every attach: tree, category, ownership, cycle and
    /// protection of the incoming node.
    pub(crate) fn check_attach(
        &self,
        owner: NodeId,
        property: &'static PropertyDescriptor,
        child: NodeId,
    ) -> DomResult<()> {
        self.check(child)?;
        let data = self.data(child);
        if let Some(expected) = property.class() {
            if !data.kind.is_a(expected) {
                return Err(DomError::WrongClass {
                    property,
                    expected,
                    found: data.kind,
                });
            }
        }
        if data.parent.is_some() {
            return Err(DomError::AlreadyParented { node: child });
        }
        if child == owner || (property.cycle_risk() && self.is_ancestor_or_self(child, owner)) {
            return Err(DomError::Cycle { owner, child });
        }
        self.check_unprotected(child)
    }

    /// Read view of a child-list property.
    pub fn list(
        &self,
        node: NodeId,
        property: &'static PropertyDescriptor,
    ) -> DomResult<NodeList<'_>> {
        let slot = self.slot_index(node, property)?;
        match self.slot(node, slot) {
            Slot::List(items) => Ok(NodeList::new(items, node, property)),
            _ => Err(DomError::WrongShape {
                property,
                expected: "child list",
            }),
        }
    }

    /// Write view of a child-list property.
    pub fn list_mut(
        &mut self,
        node: NodeId,
        property: &'static PropertyDescriptor,
    ) -> DomResult<NodeListMut<'_>> {
        let slot = self.slot_index(node, property)?;
        if !matches!(self.slot(node, slot), Slot::List(_)) {
            return Err(DomError::WrongShape {
                property,
                expected: "child list",
            });
        }
        Ok(NodeListMut::new(self, node, slot, property))
    }

    /// All children of `node` in declared property order.
    pub fn children(&self, node: NodeId) -> DomResult<Vec<NodeId>> {
        self.check(node)?;
        let mut children = Vec::new();
        for slot in &self.data(node).slots {
            match slot {
                Slot::Child(Some(child)) => children.push(*child),
                Slot::List(items) => children.extend_from_slice(items),
                _ => {}
            }
        }
        Ok(children)
    }

    /// Detach `node` from its parent. A no-op for unparented nodes.
    ///
    /// Fails when `node` fills a mandatory child property.
    pub fn delete(&mut self, node: NodeId) -> DomResult<()> {
        self.check(node)?;
        let Some((parent, property)) = self.data(node).parent else {
            return Ok(());
        };
        if property.is_child_list() {
            let slot = self.slot_of(self.data(parent).kind, property)?;
            let index = match self.slot(parent, slot) {
                Slot::List(items) => items.iter().position(|&n| n == node),
                _ => None,
            };
            if let Some(index) = index {
                self.list_remove(parent, slot, property, index)?;
            }
            Ok(())
        } else {
            self.set_child(parent, property, None).map(|_| ())
        }
    }

    // ========================================================================
    // CONVENIENCE CONSTRUCTORS
    // ========================================================================

    /// A `SimpleName` with the given identifier.
    pub fn new_simple_name(&mut self, identifier: &str) -> DomResult<NodeId> {
        let property = &nodes::simple_name::IDENTIFIER;
        if !is_identifier(identifier) {
            return Err(DomError::invalid_value(
                property,
                format!("`{identifier}` is not an identifier"),
            ));
        }
        let node = self.build_node(NodeKind::SimpleName);
        self.init_simple(node, property, SimpleValue::Identifier(SmolStr::new(identifier)));
        self.finish_creation(node);
        Ok(node)
    }

    /// A left-nested chain of `QualifiedName`s for a dotted name.
    ///
    /// A name without dots yields a plain `SimpleName`.
    pub fn new_name(&mut self, dotted: &str) -> DomResult<NodeId> {
        let segments: Vec<&str> = dotted.split('.').collect();
        if let Some(bad) = segments.iter().find(|s| !is_identifier(s)) {
            return Err(DomError::invalid_value(
                &nodes::simple_name::IDENTIFIER,
                format!("`{bad}` in `{dotted}` is not an identifier"),
            ));
        }
        let mut segments = segments.into_iter();
        let Some(first) = segments.next() else {
            return Err(DomError::invalid_value(
                &nodes::simple_name::IDENTIFIER,
                "empty name",
            ));
        };
        let mut name = self.new_simple_name(first)?;
        for segment in segments {
            let simple = self.new_simple_name(segment)?;
            let qualified = self.alloc(NodeKind::QualifiedName);
            self.link_into(qualified, &nodes::qualified_name::QUALIFIER, name);
            self.link_into(qualified, &nodes::qualified_name::NAME, simple);
            self.finish_creation(qualified);
            name = qualified;
        }
        Ok(name)
    }

    /// A `QualifiedName` for a name with at least two segments.
    pub fn new_qualified_name(&mut self, dotted: &str) -> DomResult<NodeId> {
        if !dotted.contains('.') {
            return Err(DomError::invalid_value(
                &nodes::qualified_name::NAME,
                format!("`{dotted}` is not qualified"),
            ));
        }
        self.new_name(dotted)
    }

    pub fn new_primitive_type(&mut self, code: PrimitiveKind) -> NodeId {
        let node = self.build_node(NodeKind::PrimitiveType);
        self.init_simple(
            node,
            &nodes::primitive_type::PRIMITIVE_TYPE_CODE,
            SimpleValue::Primitive(code),
        );
        self.finish_creation(node);
        node
    }

    /// A `SimpleType` wrapping an unparented name.
    pub fn new_simple_type(&mut self, name: NodeId) -> DomResult<NodeId> {
        let property = &nodes::simple_type::NAME;
        self.check_orphan(property, name)?;
        let node = self.alloc(NodeKind::SimpleType);
        self.link_into(node, property, name);
        self.finish_creation(node);
        Ok(node)
    }

    /// An array type with `dimensions` dimensions over `element`.
    ///
    /// At JLS8 this is one `ArrayType` with dimension nodes. Older levels
    /// nest one `ArrayType` per dimension.
    pub fn new_array_type(&mut self, element: NodeId, dimensions: usize) -> DomResult<NodeId> {
        if self.level() >= ApiLevel::Jls8 {
            let property = &nodes::array_type::ELEMENT_TYPE;
            self.check_orphan(property, element)?;
            if self.data(element).kind == NodeKind::ArrayType {
                return Err(DomError::invalid_value(
                    property,
                    "element type must not be an array type",
                ));
            }
            if dimensions == 0 {
                return Err(DomError::invalid_value(
                    &nodes::array_type::DIMENSIONS,
                    "at least one dimension",
                ));
            }
            let node = self.alloc(NodeKind::ArrayType);
            self.link_into(node, property, element);
            for _ in 0..dimensions {
                let dimension = self.build_node(NodeKind::Dimension);
                self.link_into(node, &nodes::array_type::DIMENSIONS, dimension);
            }
            self.finish_creation(node);
            Ok(node)
        } else {
            let property = &nodes::array_type::COMPONENT_TYPE;
            self.check_orphan(property, element)?;
            if dimensions == 0 {
                return Err(DomError::invalid_value(property, "at least one dimension"));
            }
            let mut component = element;
            for _ in 0..dimensions {
                let node = self.alloc(NodeKind::ArrayType);
                self.link_into(node, property, component);
                self.finish_creation(node);
                component = node;
            }
            Ok(component)
        }
    }

    /// A `ParameterizedType` over `base` with the given type arguments.
    pub fn new_parameterized_type(
        &mut self,
        base: NodeId,
        arguments: &[NodeId],
    ) -> DomResult<NodeId> {
        let level = self.level();
        if !NodeKind::ParameterizedType.is_supported_at(level) {
            return Err(DomError::UnsupportedKind {
                kind: NodeKind::ParameterizedType,
                level,
            });
        }
        self.check_orphan(&nodes::parameterized_type::TYPE, base)?;
        for (i, &argument) in arguments.iter().enumerate() {
            self.check_orphan(&nodes::parameterized_type::TYPE_ARGUMENTS, argument)?;
            if arguments[..i].contains(&argument) || argument == base {
                return Err(DomError::AlreadyParented { node: argument });
            }
        }
        let node = self.alloc(NodeKind::ParameterizedType);
        self.link_into(node, &nodes::parameterized_type::TYPE, base);
        for &argument in arguments {
            self.link_into(node, &nodes::parameterized_type::TYPE_ARGUMENTS, argument);
        }
        self.finish_creation(node);
        Ok(node)
    }

    pub fn new_number_literal(&mut self, token: &str) -> DomResult<NodeId> {
        let property = &nodes::number_literal::TOKEN;
        if token.is_empty() {
            return Err(DomError::invalid_value(property, "empty number token"));
        }
        let node = self.build_node(NodeKind::NumberLiteral);
        self.init_simple(node, property, SimpleValue::Str(SmolStr::new(token)));
        self.finish_creation(node);
        Ok(node)
    }

    /// A `StringLiteral` whose escaped form encodes `value`.
    pub fn new_string_literal(&mut self, value: &str) -> NodeId {
        let mut escaped = String::with_capacity(value.len() + 2);
        escaped.push('"');
        for c in value.chars() {
            match c {
                '"' => escaped.push_str("\\\""),
                '\\' => escaped.push_str("\\\\"),
                '\n' => escaped.push_str("\\n"),
                '\r' => escaped.push_str("\\r"),
                '\t' => escaped.push_str("\\t"),
                c => escaped.push(c),
            }
        }
        escaped.push('"');
        let node = self.build_node(NodeKind::StringLiteral);
        self.init_simple(
            node,
            &nodes::string_literal::ESCAPED_VALUE,
            SimpleValue::Str(SmolStr::new(escaped)),
        );
        self.finish_creation(node);
        node
    }

    pub fn new_boolean_literal(&mut self, value: bool) -> NodeId {
        let node = self.build_node(NodeKind::BooleanLiteral);
        self.init_simple(
            node,
            &nodes::boolean_literal::BOOLEAN_VALUE,
            SimpleValue::Bool(value),
        );
        self.finish_creation(node);
        node
    }

    /// A `Modifier` node (JLS3 and later).
    pub fn new_modifier(&mut self, keyword: ModifierKeyword) -> DomResult<NodeId> {
        let node = self.new_node(NodeKind::Modifier)?;
        self.init_simple(
            node,
            &nodes::modifier::KEYWORD,
            SimpleValue::ModifierKeyword(keyword),
        );
        Ok(node)
    }

    /// One `Modifier` node per bit set in `flags`, in keyword order.
    pub fn new_modifiers(&mut self, flags: u32) -> DomResult<Vec<NodeId>> {
        ModifierKeyword::from_flags(flags)
            .into_iter()
            .map(|keyword| self.new_modifier(keyword))
            .collect()
    }

    fn check_orphan(&self, property: &'static PropertyDescriptor, node: NodeId) -> DomResult<()> {
        self.check(node)?;
        let data = self.data(node);
        if let Some(expected) = property.class() {
            if !data.kind.is_a(expected) {
                return Err(DomError::WrongClass {
                    property,
                    expected,
                    found: data.kind,
                });
            }
        }
        if data.parent.is_some() {
            return Err(DomError::AlreadyParented { node });
        }
        self.check_unprotected(node)
    }
}

// ============================================================================
// NODE REF
// ============================================================================

/// A node paired with the tree it lives in.
///
/// Created through [`Ast::node`], so the id is known to be valid.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    ast: &'a Ast,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub fn ast(&self) -> &'a Ast {
        self.ast
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.ast.data(self.id).kind
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.ast.data(self.id).parent.map(|(parent, _)| NodeRef {
            ast: self.ast,
            id: parent,
        })
    }

    pub fn location_in_parent(&self) -> Option<&'static PropertyDescriptor> {
        self.ast.data(self.id).parent.map(|(_, property)| property)
    }

    pub fn source_range(&self) -> SourceRange {
        self.ast.data(self.id).range
    }

    pub fn flags(&self) -> NodeFlags {
        self.ast.data(self.id).flags
    }

    /// Declared properties at the tree's level.
    pub fn properties(&self) -> &'static [&'static PropertyDescriptor] {
        self.kind().properties(self.ast.level())
    }

    pub fn simple(&self, property: &'static PropertyDescriptor) -> DomResult<&'a SimpleValue> {
        self.ast.simple(self.id, property)
    }

    pub fn child(&self, property: &'static PropertyDescriptor) -> DomResult<Option<NodeRef<'a>>> {
        Ok(self
            .ast
            .child(self.id, property)?
            .map(|id| NodeRef { ast: self.ast, id }))
    }

    pub fn list(&self, property: &'static PropertyDescriptor) -> DomResult<NodeList<'a>> {
        self.ast.list(self.id, property)
    }

    pub fn children(&self) -> Vec<NodeRef<'a>> {
        self.ast
            .children(self.id)
            .unwrap_or_default()
            .into_iter()
            .map(|id| NodeRef { ast: self.ast, id })
            .collect()
    }

    /// Identifier text of a `SimpleName`, or the dotted form of a `QualifiedName`.
    pub fn name_text(&self) -> Option<String> {
        match self.kind() {
            NodeKind::SimpleName => self
                .simple(&nodes::simple_name::IDENTIFIER)
                .ok()
                .and_then(|v| v.as_str().map(str::to_string)),
            NodeKind::QualifiedName => {
                let qualifier = self.child(&nodes::qualified_name::QUALIFIER).ok()??;
                let name = self.child(&nodes::qualified_name::NAME).ok()??;
                Some(format!("{}.{}", qualifier.name_text()?, name.name_text()?))
            }
            _ => None,
        }
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.ast, other.ast) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}
