//! Semantic bindings and their string keys.
//!
//! ```text
//! key      encode/decode binding keys (scanner → parser → KeyShape)
//! model    BindingTable arena of Binding records
//! decl     declarations consumed by the resolver
//! resolve  key → BindingId, source first, then library, then synthesis
//! equality structural comparison of possibly cyclic binding graphs
//! ```
//!
//! This module depends on `base` only; it never touches the tree.

mod decl;
mod equality;
mod error;
pub mod key;
mod model;
mod resolve;

pub use decl::{
    AnnotationDecl, DeclarationIndex, DeclarationProvider, FieldDecl, InitializerDecl, LocalDecl,
    LocalTypeDecl, MethodDecl, TypeDecl, TypeDeclKind, TypeParamDecl, TypeRef,
};
pub use equality::{BindingEquality, is_equal};
pub use error::{BindingError, BindingResult};
pub use key::{BindingKey, DecodedKey, KeyShape, WildcardKind};
pub use model::{
    Binding, BindingData, BindingId, BindingKind, BindingTable, BindingView, MethodBinding,
    Origin, ReferenceType, TypeBinding, VariableBinding,
};
pub use resolve::{BindingResolver, ResolutionObserver, ResolverOptions};

#[cfg(test)]
mod tests;
