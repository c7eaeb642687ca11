//! Tree traversal.
//!
//! For each node the walk runs
//!
//! ```text
//! pre_visit(N) → enter(N) → [children] → leave(N) → post_visit(N)
//! ```
//!
//! `enter` returning `false` skips the children but not `leave(N)`.
//! `pre_visit` returning `false` skips `enter`, the children and `leave`;
//! `post_visit(N)` always runs. Children are visited in declared property
//! order. A hook returning `Err` stops the walk and the error comes out of
//! [`Ast::accept`].
//!
//! ## Editing during a walk
//!
//! Hooks get `&mut Ast` and may edit the tree. Each child list being walked
//! keeps a cursor between visited and not-yet-visited elements:
//!
//! - removing an element behind the cursor does not disturb the walk
//! - an element inserted at or after the cursor is visited later in the
//!   same walk
//! - an element moved from behind the cursor to ahead of it (or into a
//!   subtree not yet visited) is visited again
//!
//! Single children are read when the walk reaches them.

use tracing::debug;

use super::ast::{Ast, NodeId, Slot};

/// Traversal hooks. Every default continues without effect.
///
/// Per-kind behavior is a `match` on [`Ast::kind`] inside the hook.
pub trait Visitor {
    /// Value carried out of the walk by a hook that stops it.
    type Break;

    /// Runs before everything else for a node; `false` skips it.
    fn pre_visit(&mut self, _ast: &mut Ast, _node: NodeId) -> Result<bool, Self::Break> {
        Ok(true)
    }

    /// `false` means "do not descend".
    fn enter(&mut self, _ast: &mut Ast, _node: NodeId) -> Result<bool, Self::Break> {
        Ok(true)
    }

    fn leave(&mut self, _ast: &mut Ast, _node: NodeId) -> Result<(), Self::Break> {
        Ok(())
    }

    fn post_visit(&mut self, _ast: &mut Ast, _node: NodeId) -> Result<(), Self::Break> {
        Ok(())
    }
}

impl Ast {
    /// Walk the subtree rooted at `root`.
    ///
    /// A node of another tree is not visited.
    pub fn accept<V: Visitor + ?Sized>(
        &mut self,
        root: NodeId,
        visitor: &mut V,
    ) -> Result<(), V::Break> {
        if !self.contains(root) {
            debug!("[AST] accept on foreign node {root}");
            return Ok(());
        }
        walk(self, root, visitor)
    }
}

enum Step {
    Skip,
    Child(NodeId),
    List,
}

fn walk<V: Visitor + ?Sized>(ast: &mut Ast, node: NodeId, visitor: &mut V) -> Result<(), V::Break> {
    if visitor.pre_visit(ast, node)? {
        if visitor.enter(ast, node)? {
            walk_children(ast, node, visitor)?;
        }
        visitor.leave(ast, node)?;
    }
    visitor.post_visit(ast, node)
}

fn walk_children<V: Visitor + ?Sized>(
    ast: &mut Ast,
    node: NodeId,
    visitor: &mut V,
) -> Result<(), V::Break> {
    let slots = ast.data(node).slots.len();
    for slot in 0..slots {
        let step = match ast.slot(node, slot) {
            Slot::Simple(_) | Slot::Child(None) => Step::Skip,
            Slot::Child(Some(child)) => Step::Child(*child),
            Slot::List(_) => Step::List,
        };
        match step {
            Step::Skip => {}
            Step::Child(child) => walk(ast, child, visitor)?,
            Step::List => walk_list(ast, node, slot, visitor)?,
        }
    }
    Ok(())
}

fn walk_list<V: Visitor + ?Sized>(
    ast: &mut Ast,
    owner: NodeId,
    slot: usize,
    visitor: &mut V,
) -> Result<(), V::Break> {
    let cursor = ast.open_cursor(owner, slot);
    let result = loop {
        let Some(next) = ast.cursor_next(cursor) else {
            break Ok(());
        };
        if let Err(stop) = walk(ast, next, visitor) {
            break Err(stop);
        }
    };
    ast.close_cursor(cursor);
    result
}
