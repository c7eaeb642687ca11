//! # sapwood-base
//!
//! Self-describing syntax trees and semantic binding identity.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! dom       → Node arena, property descriptors, child lists, visitor,
//!             clone/match, position finder
//! binding   → Binding-key codec, binding arena, resolver, structural equality
//!   ↓  (dom and binding do not depend on each other)
//! base      → Primitives (SourceRange, PrimitiveKind, identifiers)
//! ```

// ============================================================================
// MODULES (dependency order: base → dom, base → binding)
// ============================================================================

/// Foundation types: SourceRange, PrimitiveKind, identifier rules
pub mod base;

/// Syntax trees: nodes, properties, lists, traversal
pub mod dom;

/// Bindings: keys, resolution, equality
pub mod binding;

// Re-export foundation types
pub use base::{PrimitiveKind, SourceRange, TextRange, TextSize};
