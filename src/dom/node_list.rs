//! Child-list properties.
//!
//! [`NodeList`] is a read view over one list slot; [`NodeListMut`] edits it.
//! Every edit validates before touching anything:
//!
//! ```text
//! index range → tree → category → unparented → cycle → protection
//! ```
//!
//! then relinks parents, shifts live traversal cursors and bumps the
//! modification count.

use tracing::{debug, trace};

use super::ast::{Ast, NodeId, Slot};
use super::changes::AstChange;
use super::error::{DomError, DomResult};
use super::property::PropertyDescriptor;

/// Read view of a child-list property.
#[derive(Debug, Clone, Copy)]
pub struct NodeList<'a> {
    items: &'a [NodeId],
    owner: NodeId,
    property: &'static PropertyDescriptor,
}

impl<'a> NodeList<'a> {
    pub(crate) fn new(
        items: &'a [NodeId],
        owner: NodeId,
        property: &'static PropertyDescriptor,
    ) -> Self {
        Self {
            items,
            owner,
            property,
        }
    }

    pub fn owner(&self) -> NodeId {
        self.owner
    }

    pub fn property(&self) -> &'static PropertyDescriptor {
        self.property
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<NodeId> {
        self.items.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + 'a {
        self.items.iter().copied()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.items.contains(&node)
    }

    pub fn as_slice(&self) -> &'a [NodeId] {
        self.items
    }

    pub fn to_vec(&self) -> Vec<NodeId> {
        self.items.to_vec()
    }
}

/// Write view of a child-list property.
#[derive(Debug)]
pub struct NodeListMut<'a> {
    ast: &'a mut Ast,
    owner: NodeId,
    slot: usize,
    property: &'static PropertyDescriptor,
}

impl<'a> NodeListMut<'a> {
    pub(crate) fn new(
        ast: &'a mut Ast,
        owner: NodeId,
        slot: usize,
        property: &'static PropertyDescriptor,
    ) -> Self {
        Self {
            ast,
            owner,
            slot,
            property,
        }
    }

    fn items(&self) -> &[NodeId] {
        match self.ast.slot(self.owner, self.slot) {
            Slot::List(items) => items,
            _ => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<NodeId> {
        self.items().get(index).copied()
    }

    pub fn to_vec(&self) -> Vec<NodeId> {
        self.items().to_vec()
    }

    /// Insert `node` before position `index` (`index == len` appends).
    pub fn insert(&mut self, index: usize, node: NodeId) -> DomResult<()> {
        self.ast
            .list_insert(self.owner, self.slot, self.property, index, node)
    }

    pub fn push(&mut self, node: NodeId) -> DomResult<()> {
        let len = self.len();
        self.insert(len, node)
    }

    /// Remove and return the element at `index`, now unparented.
    pub fn remove(&mut self, index: usize) -> DomResult<NodeId> {
        self.ast
            .list_remove(self.owner, self.slot, self.property, index)
    }

    /// Replace the element at `index`, returning the unparented old one.
    pub fn replace(&mut self, index: usize, node: NodeId) -> DomResult<NodeId> {
        self.ast
            .list_replace(self.owner, self.slot, self.property, index, node)
    }

    /// Remove every element, last first.
    pub fn clear(&mut self) -> DomResult<Vec<NodeId>> {
        let mut removed = Vec::with_capacity(self.len());
        while let Some(last) = self.len().checked_sub(1) {
            removed.push(self.remove(last)?);
        }
        removed.reverse();
        Ok(removed)
    }
}

// ============================================================================
// LIST EDITS
// ============================================================================

impl Ast {
    fn list_items(&self, owner: NodeId, slot: usize) -> &[NodeId] {
        match self.slot(owner, slot) {
            Slot::List(items) => items,
            _ => &[],
        }
    }

    fn list_items_mut(&mut self, owner: NodeId, slot: usize) -> Option<&mut Vec<NodeId>> {
        match self.slot_mut(owner, slot) {
            Slot::List(items) => Some(items),
            _ => None,
        }
    }

    /// Shift cursors walking this list past an insertion (`+1`) or
    /// removal (`-1`) at `index`.
    fn shift_cursors(&mut self, owner: NodeId, slot: usize, index: usize, inserted: bool) {
        for cursor in self
            .cursors
            .iter_mut()
            .filter(|c| c.owner == owner && c.slot == slot)
        {
            if cursor.position > index {
                if inserted {
                    cursor.position += 1;
                } else {
                    cursor.position -= 1;
                }
            }
        }
    }

    pub(crate) fn list_insert(
        &mut self,
        owner: NodeId,
        slot: usize,
        property: &'static PropertyDescriptor,
        index: usize,
        node: NodeId,
    ) -> DomResult<()> {
        let len = self.list_items(owner, slot).len();
        let checked = if index > len {
            Err(DomError::out_of_range(index, len))
        } else {
            self.check_attach(owner, property, node)
                .and_then(|()| self.check_unprotected(owner))
        };
        checked.inspect_err(|err| debug!("[AST] rejected list insert: {err}"))?;

        if let Some(items) = self.list_items_mut(owner, slot) {
            items.insert(index, node);
        }
        self.set_parent(node, Some((owner, property)));
        self.shift_cursors(owner, slot, index, true);
        self.bump();
        self.record(AstChange::child_edit(owner, property, None, Some(node)));
        trace!("[AST] {owner}.{}[{index}] += {node}", property.id());
        Ok(())
    }

    pub(crate) fn list_remove(
        &mut self,
        owner: NodeId,
        slot: usize,
        property: &'static PropertyDescriptor,
        index: usize,
    ) -> DomResult<NodeId> {
        let items = self.list_items(owner, slot);
        let len = items.len();
        let Some(&old) = items.get(index) else {
            let err = DomError::out_of_range(index, len);
            debug!("[AST] rejected list remove: {err}");
            return Err(err);
        };
        self.check_unprotected(owner)?;
        self.check_unprotected(old)?;

        if let Some(items) = self.list_items_mut(owner, slot) {
            items.remove(index);
        }
        self.set_parent(old, None);
        self.shift_cursors(owner, slot, index, false);
        self.bump();
        self.record(AstChange::child_edit(owner, property, Some(old), None));
        trace!("[AST] {owner}.{}[{index}] -= {old}", property.id());
        Ok(old)
    }

    pub(crate) fn list_replace(
        &mut self,
        owner: NodeId,
        slot: usize,
        property: &'static PropertyDescriptor,
        index: usize,
        node: NodeId,
    ) -> DomResult<NodeId> {
        let items = self.list_items(owner, slot);
        let len = items.len();
        let Some(&old) = items.get(index) else {
            let err = DomError::out_of_range(index, len);
            debug!("[AST] rejected list replace: {err}");
            return Err(err);
        };
        self.check_attach(owner, property, node)
            .and_then(|()| self.check_unprotected(owner))
            .and_then(|()| self.check_unprotected(old))
            .inspect_err(|err| debug!("[AST] rejected list replace: {err}"))?;

        if let Some(items) = self.list_items_mut(owner, slot) {
            items[index] = node;
        }
        self.set_parent(old, None);
        self.set_parent(node, Some((owner, property)));
        self.bump();
        self.record(AstChange::child_edit(owner, property, Some(old), Some(node)));
        trace!("[AST] {owner}.{}[{index}] = {node} (was {old})", property.id());
        Ok(old)
    }

    // ========================================================================
    // TRAVERSAL CURSORS
    // ========================================================================

    /// Register a cursor at the start of a list and return its handle.
    pub(crate) fn open_cursor(&mut self, owner: NodeId, slot: usize) -> usize {
        self.cursors.push(super::ast::ListCursor {
            owner,
            slot,
            position: 0,
        });
        self.cursors.len() - 1
    }

    /// The element under the cursor, advancing past it.
    pub(crate) fn cursor_next(&mut self, handle: usize) -> Option<NodeId> {
        let cursor = *self.cursors.get(handle)?;
        let next = self
            .list_items(cursor.owner, cursor.slot)
            .get(cursor.position)
            .copied()?;
        if let Some(cursor) = self.cursors.get_mut(handle) {
            cursor.position += 1;
        }
        Some(next)
    }

    /// Release a cursor and every cursor opened after it.
    pub(crate) fn close_cursor(&mut self, handle: usize) {
        self.cursors.truncate(handle);
    }
}
