//! Locating nodes by source position.

use std::convert::Infallible;

use super::ast::{Ast, NodeId};
use super::visitor::Visitor;

/// Finds the innermost node covering a range, and the outermost node the
/// range covers.
///
/// Nodes with an unknown source range are never selected and their
/// subtrees are skipped.
#[derive(Debug, Clone)]
pub struct NodeFinder {
    start: i64,
    end: i64,
    covering: Option<NodeId>,
    covered: Option<NodeId>,
}

impl NodeFinder {
    pub fn new(start: i64, length: i64) -> Self {
        Self {
            start,
            end: start + length,
            covering: None,
            covered: None,
        }
    }

    /// Run a finder over `root` and collect its answers.
    pub fn search(ast: &mut Ast, root: NodeId, start: i64, length: i64) -> Self {
        let mut finder = Self::new(start, length);
        let Ok(()) = ast.accept(root, &mut finder);
        finder
    }

    /// The node whose range is exactly `(start, length)` if any, otherwise
    /// the innermost covering node.
    pub fn perform(ast: &mut Ast, root: NodeId, start: i64, length: i64) -> Option<NodeId> {
        let finder = Self::search(ast, root, start, length);
        match finder.covered {
            Some(covered) => {
                let range = ast.data(covered).range;
                if range.start() == start && range.length() == length {
                    Some(covered)
                } else {
                    finder.covering
                }
            }
            None => finder.covering,
        }
    }

    /// Innermost node whose range contains the searched range.
    pub fn covering_node(&self) -> Option<NodeId> {
        self.covering
    }

    /// First top-level node whose range lies inside the searched range.
    pub fn covered_node(&self) -> Option<NodeId> {
        self.covered
    }
}

impl Visitor for NodeFinder {
    type Break = Infallible;

    fn pre_visit(&mut self, ast: &mut Ast, node: NodeId) -> Result<bool, Infallible> {
        let range = ast.data(node).range;
        if !range.is_known() {
            return Ok(false);
        }
        let node_start = range.start();
        let node_end = range.end();
        if node_end < self.start || self.end < node_start {
            return Ok(false);
        }
        if node_start <= self.start && self.end <= node_end {
            self.covering = Some(node);
        }
        if self.start <= node_start && node_end <= self.end {
            if self.covering == Some(node) {
                // same extent as the parent; keep looking below
                self.covered = Some(node);
                return Ok(true);
            }
            if self.covered.is_none() {
                self.covered = Some(node);
            }
            return Ok(false);
        }
        Ok(true)
    }
}
