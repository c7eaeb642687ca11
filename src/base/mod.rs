//! Foundation types for the sapwood toolchain.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`SourceRange`] - Start/length source positions with an explicit "unknown" form
//! - [`is_identifier`] - Identifier validation (Unicode XID)
//! - [`PrimitiveKind`] - Primitive type codes (keywords and key characters)
//! - [`CompoundName`] helpers - dotted/slashed qualified name splitting
//!
//! This module has NO dependencies on other sapwood modules.

mod name;
mod primitive;
mod range;

pub use name::{CompoundName, is_identifier, split_compound};
pub use primitive::PrimitiveKind;
pub use range::SourceRange;

// Re-export text-size types for convenience
pub use text_size::{self, TextRange, TextSize};

#[cfg(test)]
mod tests;
