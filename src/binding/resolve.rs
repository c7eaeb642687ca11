//! Key → binding resolution.
//!
//! Lookup order for a class type:
//!
//! ```text
//! source types (members by name, local/anonymous types by ordinal)
//!   → library types (by compound name)
//!   → recovered reference (when recovery is on)
//! ```
//!
//! Base, array, parameterized, raw and wildcard shapes are synthesized on
//! top of whatever the class lookup produced. Declared types, methods and
//! variables are deduplicated per origin; synthesized shapes are not.

use std::sync::Arc;

use parking_lot::Mutex;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tracing::{debug, trace};

use super::decl::{
    AnnotationDecl, DeclarationProvider, LocalDecl, MethodDecl, TypeDecl, TypeDeclKind,
    TypeParamDecl, TypeRef, has_annotation,
};
use super::key::{ClassTypeKey, DecodedKey, FieldKey, KeyShape, MethodKey, TypeSegment};
use super::model::{
    Binding, BindingData, BindingId, BindingTable, MethodBinding, Origin, ReferenceType,
    TypeBinding, VariableBinding,
};
use crate::base::{CompoundName, is_identifier, split_compound};

/// Receives the outcome of every top-level resolution.
pub trait ResolutionObserver: Send + Sync {
    fn resolved(&self, key: &str, id: BindingId);

    fn unresolved(&self, _key: &str) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Produce recovered bindings for names nothing declares.
    pub recovery: bool,
    /// Report failed resolutions to the observer.
    pub notify_unresolved: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            recovery: true,
            notify_unresolved: true,
        }
    }
}

#[derive(Debug, Default)]
struct ResolverState {
    keys: FxHashMap<String, Option<BindingId>>,
    declared: FxHashMap<(Origin, String), BindingId>,
}

impl ResolverState {
    fn declared(&self, origin: Origin, key: &str) -> Option<BindingId> {
        self.declared.get(&(origin, key.to_string())).copied()
    }
}

/// Type variables visible at a declaration, innermost last.
#[derive(Debug, Clone, Default)]
struct Scope {
    variables: Vec<(SmolStr, BindingId)>,
}

impl Scope {
    fn lookup(&self, name: &str) -> Option<BindingId> {
        self.variables
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|&(_, id)| id)
    }
}

#[derive(Clone, Copy)]
struct Found<'p> {
    origin: Origin,
    decl: &'p TypeDecl,
}

/// Resolves keys against a [`DeclarationProvider`] into a [`BindingTable`].
///
/// Resolution state sits behind one mutex, so concurrent callers are
/// serialized per key but share every cached binding.
pub struct BindingResolver<'p> {
    provider: &'p dyn DeclarationProvider,
    table: BindingTable,
    options: ResolverOptions,
    observer: Option<Arc<dyn ResolutionObserver>>,
    state: Mutex<ResolverState>,
}

impl<'p> BindingResolver<'p> {
    pub fn new(provider: &'p dyn DeclarationProvider) -> Self {
        Self::with_options(provider, ResolverOptions::default())
    }

    pub fn with_options(provider: &'p dyn DeclarationProvider, options: ResolverOptions) -> Self {
        Self {
            provider,
            table: BindingTable::new(),
            options,
            observer: None,
            state: Mutex::new(ResolverState::default()),
        }
    }

    pub fn with_observer(mut self, observer: Arc<dyn ResolutionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn table(&self) -> &BindingTable {
        &self.table
    }

    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    pub fn get(&self, id: BindingId) -> Option<Binding> {
        self.table.get(id)
    }

    /// Resolve a key, caching the outcome per key text.
    pub fn resolve_key(&self, key: &str) -> Option<BindingId> {
        if let Some(&cached) = self.state.lock().keys.get(key) {
            return cached;
        }
        let decoded = DecodedKey::decode(key);
        if decoded.is_malformed() {
            debug!("[RESOLVE] malformed key `{key}`");
        }

        let result = {
            let mut state = self.state.lock();
            if let Some(&cached) = state.keys.get(key) {
                return cached;
            }
            let result = decoded
                .shape()
                .and_then(|shape| self.resolve_shape(&mut state, shape, self.options.recovery));
            state.keys.insert(key.to_string(), result);
            result
        };
        self.notify(key, result);
        result
    }

    /// Resolve an already decoded key, bypassing the per-key cache.
    pub fn resolve(&self, key: &DecodedKey) -> Option<BindingId> {
        let shape = key.shape()?;
        let result = {
            let mut state = self.state.lock();
            self.resolve_shape(&mut state, shape, self.options.recovery)
        };
        self.notify(&shape.to_string(), result);
        result
    }

    /// Resolve many keys on the rayon pool; results follow input order.
    pub fn resolve_all(&self, keys: &[&str]) -> Vec<Option<BindingId>> {
        keys.par_iter().map(|key| self.resolve_key(key)).collect()
    }

    /// Binding for an import of the dotted `name`.
    ///
    /// Single-type imports target the type; on-demand imports target the
    /// package, or the type whose members they import. Static imports
    /// target the type declaring the imported member.
    pub fn resolve_import(&self, name: &str, on_demand: bool, is_static: bool) -> Option<BindingId> {
        let compound = split_compound(name, &['.']);
        if compound.is_empty() || compound.iter().any(|s| !is_identifier(s)) {
            debug!("[RESOLVE] invalid import name `{name}`");
            return None;
        }
        let key = format!(
            "{}{}{}",
            if is_static { "static " } else { "" },
            compound.join("."),
            if on_demand { ".*" } else { "" }
        );

        let result = {
            let mut state = self.state.lock();
            self.resolve_import_in(&mut state, &key, compound, on_demand, is_static)
        };
        self.notify(&key, result);
        result
    }

    fn notify(&self, key: &str, result: Option<BindingId>) {
        match result {
            Some(id) => {
                trace!("[RESOLVE] {key} → {id}");
                if let Some(observer) = &self.observer {
                    observer.resolved(key, id);
                }
            }
            None => {
                trace!("[RESOLVE] {key} unresolved");
                if self.options.notify_unresolved {
                    if let Some(observer) = &self.observer {
                        observer.unresolved(key);
                    }
                }
            }
        }
    }

    fn alloc(&self, binding: Binding) -> BindingId {
        self.table.alloc(binding)
    }

    fn alloc_declared(&self, state: &mut ResolverState, binding: Binding) -> BindingId {
        let origin = binding.origin;
        let key = binding.key.clone();
        let id = self.alloc(binding);
        state.declared.insert((origin, key), id);
        id
    }

    // ========================================================================
    // DISPATCH
    // ========================================================================

    fn resolve_shape(
        &self,
        state: &mut ResolverState,
        shape: &KeyShape,
        recover: bool,
    ) -> Option<BindingId> {
        match shape {
            KeyShape::Package(name) => self.resolve_package(state, name, recover),
            KeyShape::Module(name) => self.resolve_module(state, name),
            KeyShape::Field(field) => self.resolve_field(state, field, recover),
            KeyShape::Method(method) => self.resolve_method(state, method, recover),
            KeyShape::Initializer { .. } => None,
            KeyShape::LocalVariable {
                declaring,
                name,
                occurrence,
            } => self.resolve_local(state, shape, declaring, name, occurrence.unwrap_or(0)),
            KeyShape::Annotation {
                annotated,
                annotation,
            } => self.resolve_annotation(state, shape, annotated, annotation, recover),
            ty => self.resolve_type(state, ty, &Scope::default(), Origin::Synthesized, recover),
        }
    }

    fn resolve_package(
        &self,
        state: &mut ResolverState,
        name: &CompoundName,
        recover: bool,
    ) -> Option<BindingId> {
        let known = self.provider.has_package(name);
        if !known && !recover {
            return None;
        }
        let key = name.join("/");
        if let Some(id) = state.declared(Origin::Synthesized, &key) {
            return Some(id);
        }
        let binding = Binding::new(
            BindingData::Package { name: name.clone() },
            key,
            Origin::Synthesized,
        );
        let binding = if known { binding } else { binding.recovered() };
        Some(self.alloc_declared(state, binding))
    }

    fn resolve_module(&self, state: &mut ResolverState, name: &CompoundName) -> Option<BindingId> {
        if !self.provider.has_module(name) {
            return None;
        }
        let key = format!("\"{}", name.join("."));
        if let Some(id) = state.declared(Origin::Synthesized, &key) {
            return Some(id);
        }
        let binding = Binding::new(
            BindingData::Module { name: name.clone() },
            key,
            Origin::Synthesized,
        );
        Some(self.alloc_declared(state, binding))
    }

    // ========================================================================
    // TYPES
    // ========================================================================

    fn resolve_type(
        &self,
        state: &mut ResolverState,
        shape: &KeyShape,
        scope: &Scope,
        origin: Origin,
        recover: bool,
    ) -> Option<BindingId> {
        let ty = match shape {
            KeyShape::Base(primitive) => TypeBinding::Primitive(*primitive),
            KeyShape::Array {
                element,
                dimensions,
            } => TypeBinding::Array {
                element: self.resolve_type(state, element, scope, origin, recover)?,
                dimensions: *dimensions,
            },
            KeyShape::Class(class) => return self.resolve_class(state, class, scope, origin, recover),
            KeyShape::TypeVariable {
                declaring: None,
                name,
            } => {
                if let Some(id) = scope.lookup(name) {
                    return Some(id);
                }
                if !recover {
                    return None;
                }
                let ty = TypeBinding::TypeVariable {
                    name: name.clone(),
                    rank: 0,
                    declaring: None,
                    bounds: Vec::new(),
                };
                let binding = Binding::new(BindingData::Type(ty), shape.to_string(), origin);
                return Some(self.alloc(binding.recovered()));
            }
            KeyShape::TypeVariable {
                declaring: Some(declaring),
                name,
            } => return self.resolve_declared_type_variable(state, declaring, name),
            KeyShape::Wildcard { kind, bound } => TypeBinding::Wildcard {
                kind: *kind,
                bound: match bound {
                    Some(bound) => Some(self.resolve_type(state, bound, scope, origin, recover)?),
                    None => None,
                },
            },
            _ => return None,
        };
        Some(self.alloc(Binding::new(BindingData::Type(ty), shape.to_string(), origin)))
    }

    fn resolve_class(
        &self,
        state: &mut ResolverState,
        class: &ClassTypeKey,
        scope: &Scope,
        origin: Origin,
        recover: bool,
    ) -> Option<BindingId> {
        let generic = self.resolve_erasure(state, &class.erasure(), recover)?;
        if !class.is_generic_instance() {
            return Some(generic);
        }

        let enclosing = match class.enclosing() {
            Some(outer) if outer.is_generic_instance() => {
                Some(self.resolve_class(state, &outer, scope, origin, recover)?)
            }
            _ => None,
        };
        let ty = match class.last().and_then(|s| s.arguments.as_ref()) {
            Some(arguments) if arguments.is_empty() => TypeBinding::Raw { generic },
            Some(arguments) => TypeBinding::Parameterized {
                generic,
                arguments: arguments
                    .iter()
                    .map(|a| self.resolve_type(state, a, scope, origin, recover))
                    .collect::<Option<Vec<_>>>()?,
                enclosing,
            },
            None => TypeBinding::Parameterized {
                generic,
                arguments: Vec::new(),
                enclosing,
            },
        };
        let binding = Binding::new(BindingData::Type(ty), class.to_string(), Origin::Synthesized);
        Some(self.alloc(binding))
    }

    /// Find the declaration of an erased class type.
    fn find_type(&self, class: &ClassTypeKey) -> Option<Found<'p>> {
        let (top, members) = class.segments.split_first()?;
        let top = top.name.simple_name();
        let candidates = [
            (Origin::Source, self.provider.source_type(&class.package, top)),
            (Origin::Library, self.provider.library_type(&class.package, top)),
        ];
        candidates.into_iter().find_map(|(origin, decl)| {
            let decl = members
                .iter()
                .try_fold(decl?, |decl, segment| decl.member(&segment.name))?;
            Some(Found { origin, decl })
        })
    }

    fn resolve_erasure(
        &self,
        state: &mut ResolverState,
        class: &ClassTypeKey,
        recover: bool,
    ) -> Option<BindingId> {
        if let Some(found) = self.find_type(class) {
            return Some(self.declare_type(state, found, class));
        }
        if !recover {
            return None;
        }
        let key = class.to_string();
        if let Some(id) = state.declared(Origin::Synthesized, &key) {
            return Some(id);
        }
        debug!("[RESOLVE] recovering unresolved type {key}");
        let reference = ReferenceType::new(class.compound_name(), TypeDeclKind::Class);
        let binding = Binding::new(
            BindingData::Type(TypeBinding::Reference(reference)),
            key,
            Origin::Synthesized,
        );
        Some(self.alloc_declared(state, binding.recovered()))
    }

    fn declare_type(&self, state: &mut ResolverState, found: Found<'p>, class: &ClassTypeKey) -> BindingId {
        let key = class.to_string();
        if let Some(id) = state.declared(found.origin, &key) {
            return id;
        }
        let enclosing = class
            .enclosing()
            .and_then(|outer| self.resolve_erasure(state, &outer, true));

        let decl = found.decl;
        let mut reference = ReferenceType::new(class.compound_name(), decl.kind);
        reference.enclosing = enclosing;
        let id = self.alloc_declared(
            state,
            Binding::new(
                BindingData::Type(TypeBinding::Reference(reference)),
                key.clone(),
                found.origin,
            ),
        );
        trace!("[RESOLVE] declared {key} as {id} ({:?})", found.origin);

        let mut scope = enclosing.map(|e| self.scope_of(e)).unwrap_or_default();
        let type_parameters = self.declare_type_parameters(
            state,
            &decl.type_parameters,
            id,
            &key,
            &mut scope,
            found.origin,
        );
        let superclass = decl
            .superclass
            .as_ref()
            .map(|r| self.type_from_ref(state, r, &scope, found.origin));
        let interfaces = decl
            .interfaces
            .iter()
            .map(|r| self.type_from_ref(state, r, &scope, found.origin))
            .collect();

        self.table.update(id, |data| {
            if let BindingData::Type(TypeBinding::Reference(reference)) = data {
                reference.type_parameters = type_parameters;
                reference.superclass = superclass;
                reference.interfaces = interfaces;
            }
        });
        id
    }

    fn declare_type_parameters(
        &self,
        state: &mut ResolverState,
        parameters: &[TypeParamDecl],
        declaring: BindingId,
        declaring_key: &str,
        scope: &mut Scope,
        origin: Origin,
    ) -> Vec<BindingId> {
        let ids: Vec<BindingId> = parameters
            .iter()
            .enumerate()
            .map(|(rank, parameter)| {
                let ty = TypeBinding::TypeVariable {
                    name: parameter.name.clone(),
                    rank: rank as u32,
                    declaring: Some(declaring),
                    bounds: Vec::new(),
                };
                let key = format!("{declaring_key}:T{};", parameter.name);
                self.alloc(Binding::new(BindingData::Type(ty), key, origin))
            })
            .collect();
        scope.variables.extend(
            parameters
                .iter()
                .map(|p| p.name.clone())
                .zip(ids.iter().copied()),
        );

        for (parameter, &id) in parameters.iter().zip(&ids) {
            let resolved: Vec<BindingId> = parameter
                .bounds
                .iter()
                .map(|bound| self.type_from_ref(state, bound, scope, origin))
                .collect();
            self.table.update(id, |data| {
                if let BindingData::Type(TypeBinding::TypeVariable { bounds, .. }) = data {
                    *bounds = resolved;
                }
            });
        }
        ids
    }

    /// Binding for a type written in a declaration; never fails.
    fn type_from_ref(
        &self,
        state: &mut ResolverState,
        ty: &TypeRef,
        scope: &Scope,
        origin: Origin,
    ) -> BindingId {
        if let Some(id) = ty
            .key_shape()
            .and_then(|shape| self.resolve_type(state, &shape, scope, origin, true))
        {
            return id;
        }
        let name = match ty {
            TypeRef::Named { name, .. } => name.clone(),
            other => SmolStr::new(other.signature()),
        };
        debug!("[RESOLVE] unusable type reference `{name}`");
        let reference = ReferenceType::new(
            split_compound(&name, &['.', '/', '$']),
            TypeDeclKind::Class,
        );
        let binding = Binding::new(
            BindingData::Type(TypeBinding::Reference(reference)),
            name.to_string(),
            Origin::Synthesized,
        );
        self.alloc(binding.recovered())
    }

    /// Type variables visible inside a type or method binding.
    fn scope_of(&self, id: BindingId) -> Scope {
        let mut chain = Vec::new();
        let mut current = Some(id);
        while let Some(id) = current {
            let Some(binding) = self.table.get(id) else {
                break;
            };
            current = match &binding.data {
                BindingData::Type(TypeBinding::Reference(reference)) => reference.enclosing,
                BindingData::Method(method) => Some(method.declaring),
                _ => None,
            };
            chain.push(binding.type_parameters().to_vec());
        }

        let mut scope = Scope::default();
        for &parameter in chain.iter().rev().flatten() {
            if let Some(Binding {
                data: BindingData::Type(TypeBinding::TypeVariable { name, .. }),
                ..
            }) = self.table.get(parameter)
            {
                scope.variables.push((name, parameter));
            }
        }
        scope
    }

    fn resolve_declared_type_variable(
        &self,
        state: &mut ResolverState,
        declaring: &KeyShape,
        name: &str,
    ) -> Option<BindingId> {
        let owner = match declaring {
            KeyShape::Class(class) => self.resolve_erasure(state, &class.erasure(), false)?,
            KeyShape::Method(method) => self.resolve_method(state, method, false)?,
            _ => return None,
        };
        let binding = self.table.get(owner)?;
        binding.type_parameters().iter().copied().find(|&id| {
            matches!(
                self.table.get(id),
                Some(Binding {
                    data: BindingData::Type(TypeBinding::TypeVariable { name: n, .. }),
                    ..
                }) if n == name
            )
        })
    }

    // ========================================================================
    // MEMBERS
    // ========================================================================

    fn resolve_method(
        &self,
        state: &mut ResolverState,
        method: &MethodKey,
        recover: bool,
    ) -> Option<BindingId> {
        let erased = method.declaring.erasure();
        let found = self.find_type(&erased).and_then(|found| {
            found
                .decl
                .method(&method.name, &method.signature())
                .map(|decl| (found, decl))
        });
        match found {
            Some((found, decl)) => {
                let declaring = self.declare_type(state, found, &erased);
                Some(self.declare_method(state, found.origin, declaring, &erased, decl))
            }
            None if recover => self.recover_method(state, method),
            None => None,
        }
    }

    fn method_key(erased: &ClassTypeKey, decl: &MethodDecl) -> String {
        let mut key = format!("{erased}.{}{}", decl.name, decl.signature());
        for thrown in &decl.thrown {
            key.push('^');
            key.push_str(&thrown.signature());
        }
        key
    }

    fn declare_method(
        &self,
        state: &mut ResolverState,
        origin: Origin,
        declaring: BindingId,
        erased: &ClassTypeKey,
        decl: &MethodDecl,
    ) -> BindingId {
        let key = Self::method_key(erased, decl);
        if let Some(id) = state.declared(origin, &key) {
            return id;
        }
        let placeholder = MethodBinding {
            name: decl.name.clone(),
            declaring,
            type_parameters: Vec::new(),
            parameters: Vec::new(),
            return_type: declaring,
            thrown: Vec::new(),
        };
        let id = self.alloc_declared(
            state,
            Binding::new(BindingData::Method(placeholder), key.clone(), origin),
        );

        let mut scope = self.scope_of(declaring);
        let type_parameters = self.declare_type_parameters(
            state,
            &decl.type_parameters,
            id,
            &key,
            &mut scope,
            origin,
        );
        let parameters = decl
            .parameters
            .iter()
            .map(|p| self.type_from_ref(state, p, &scope, origin))
            .collect();
        let return_type = self.type_from_ref(state, &decl.return_type, &scope, origin);
        let thrown = decl
            .thrown
            .iter()
            .map(|t| self.type_from_ref(state, t, &scope, origin))
            .collect();

        self.table.update(id, |data| {
            if let BindingData::Method(method) = data {
                method.type_parameters = type_parameters;
                method.parameters = parameters;
                method.return_type = return_type;
                method.thrown = thrown;
            }
        });
        id
    }

    fn recover_method(&self, state: &mut ResolverState, method: &MethodKey) -> Option<BindingId> {
        let key = KeyShape::Method(method.clone()).to_string();
        if let Some(id) = state.declared(Origin::Synthesized, &key) {
            return Some(id);
        }
        debug!("[RESOLVE] recovering unresolved method {key}");
        let declaring = self.resolve_erasure(state, &method.declaring.erasure(), true)?;
        let scope = Scope::default();
        let mut types = |shapes: &[KeyShape]| {
            shapes
                .iter()
                .map(|s| self.resolve_type(state, s, &scope, Origin::Synthesized, true))
                .collect::<Option<Vec<_>>>()
        };
        let parameters = types(&method.parameters)?;
        let thrown = types(&method.thrown)?;
        let return_type = types(std::slice::from_ref(method.return_type.as_ref()))?
            .pop()?;
        let binding = Binding::new(
            BindingData::Method(MethodBinding {
                name: method.name.clone(),
                declaring,
                type_parameters: Vec::new(),
                parameters,
                return_type,
                thrown,
            }),
            key,
            Origin::Synthesized,
        );
        Some(self.alloc_declared(state, binding.recovered()))
    }

    fn resolve_field(
        &self,
        state: &mut ResolverState,
        field: &FieldKey,
        recover: bool,
    ) -> Option<BindingId> {
        let erased = field.declaring.erasure();
        let expected = field.ty.to_string();
        let found = self.find_type(&erased).and_then(|found| {
            found
                .decl
                .field(&field.name)
                .filter(|decl| decl.ty.signature() == expected)
                .map(|decl| (found, decl))
        });

        let Some((found, decl)) = found else {
            if !recover {
                return None;
            }
            let key = KeyShape::Field(field.clone()).to_string();
            if let Some(id) = state.declared(Origin::Synthesized, &key) {
                return Some(id);
            }
            debug!("[RESOLVE] recovering unresolved field {key}");
            let declaring = self.resolve_erasure(state, &erased, true)?;
            let ty = self.resolve_type(state, &field.ty, &Scope::default(), Origin::Synthesized, true)?;
            let binding = Binding::new(
                BindingData::Variable(VariableBinding {
                    name: field.name.clone(),
                    ty,
                    declaring_type: Some(declaring),
                    declaring_method: None,
                    is_field: true,
                    occurrence: 0,
                }),
                key,
                Origin::Synthesized,
            );
            return Some(self.alloc_declared(state, binding.recovered()));
        };

        let declaring = self.declare_type(state, found, &erased);
        let key = format!("{erased}.{}){expected}", decl.name);
        if let Some(id) = state.declared(found.origin, &key) {
            return Some(id);
        }
        let scope = self.scope_of(declaring);
        let ty = self.type_from_ref(state, &decl.ty, &scope, found.origin);
        let binding = Binding::new(
            BindingData::Variable(VariableBinding {
                name: decl.name.clone(),
                ty,
                declaring_type: Some(declaring),
                declaring_method: None,
                is_field: true,
                occurrence: 0,
            }),
            key,
            found.origin,
        );
        Some(self.alloc_declared(state, binding))
    }

    fn resolve_local(
        &self,
        state: &mut ResolverState,
        shape: &KeyShape,
        declaring: &KeyShape,
        name: &str,
        occurrence: u32,
    ) -> Option<BindingId> {
        let (found, erased, method, locals): (_, _, Option<&'p MethodDecl>, &'p [LocalDecl]) =
            match declaring {
                KeyShape::Method(method) => {
                    let erased = method.declaring.erasure();
                    let found = self.find_type(&erased)?;
                    let decl = found.decl.method(&method.name, &method.signature())?;
                    (found, erased, Some(decl), decl.locals.as_slice())
                }
                KeyShape::Initializer { declaring, ordinal } => {
                    let erased = declaring.erasure();
                    let found = self.find_type(&erased)?;
                    let index = usize::try_from(ordinal.checked_sub(1)?).ok()?;
                    let initializer = found.decl.initializers.get(index)?;
                    (found, erased, None, initializer.locals.as_slice())
                }
                _ => return None,
            };
        let local = locals
            .iter()
            .filter(|l| l.name == name)
            .nth(usize::try_from(occurrence).ok()?)?;

        let key = shape.to_string();
        if let Some(id) = state.declared(found.origin, &key) {
            return Some(id);
        }
        let declaring_type = self.declare_type(state, found, &erased);
        let declaring_method =
            method.map(|decl| self.declare_method(state, found.origin, declaring_type, &erased, decl));
        let scope = self.scope_of(declaring_method.unwrap_or(declaring_type));
        let ty = self.type_from_ref(state, &local.ty, &scope, found.origin);
        let binding = Binding::new(
            BindingData::Variable(VariableBinding {
                name: local.name.clone(),
                ty,
                declaring_type: Some(declaring_type),
                declaring_method,
                is_field: false,
                occurrence,
            }),
            key,
            found.origin,
        );
        Some(self.alloc_declared(state, binding))
    }

    fn resolve_annotation(
        &self,
        state: &mut ResolverState,
        shape: &KeyShape,
        annotated: &KeyShape,
        annotation: &ClassTypeKey,
        recover: bool,
    ) -> Option<BindingId> {
        let annotated_id = self.resolve_shape(state, annotated, recover)?;
        let binary_name = annotation.binary_name();
        let present = self
            .annotations_of(annotated)
            .is_some_and(|annotations| has_annotation(annotations, &binary_name));
        if !present && !recover {
            return None;
        }

        let key = shape.to_string();
        let origin = if present {
            Origin::Source
        } else {
            Origin::Synthesized
        };
        if let Some(id) = state.declared(origin, &key) {
            return Some(id);
        }
        let annotation_type = self.resolve_erasure(state, &annotation.erasure(), recover)?;
        let binding = Binding::new(
            BindingData::Annotation {
                annotation_type,
                annotated: annotated_id,
            },
            key,
            origin,
        );
        let binding = if present { binding } else { binding.recovered() };
        Some(self.alloc_declared(state, binding))
    }

    fn annotations_of(&self, annotated: &KeyShape) -> Option<&'p [AnnotationDecl]> {
        match annotated {
            KeyShape::Class(class) => Some(&self.find_type(&class.erasure())?.decl.annotations),
            KeyShape::Field(field) => {
                let found = self.find_type(&field.declaring.erasure())?;
                Some(&found.decl.field(&field.name)?.annotations)
            }
            KeyShape::Method(method) => {
                let found = self.find_type(&method.declaring.erasure())?;
                Some(&found.decl.method(&method.name, &method.signature())?.annotations)
            }
            _ => None,
        }
    }

    // ========================================================================
    // IMPORTS
    // ========================================================================

    /// Class key for a dotted name, trying each package/type split point.
    fn find_dotted_type(&self, name: &[SmolStr]) -> Option<ClassTypeKey> {
        (0..name.len()).find_map(|split| {
            let class = ClassTypeKey {
                package: name[..split].to_vec(),
                segments: name[split..].iter().cloned().map(TypeSegment::named).collect(),
            };
            self.find_type(&class).map(|_| class)
        })
    }

    fn resolve_import_in(
        &self,
        state: &mut ResolverState,
        key: &str,
        name: CompoundName,
        on_demand: bool,
        is_static: bool,
    ) -> Option<BindingId> {
        if let Some(id) = state.declared(Origin::Synthesized, key) {
            return Some(id);
        }
        let type_target = |state: &mut ResolverState, name: &[SmolStr]| {
            let class = self.find_dotted_type(name)?;
            self.resolve_erasure(state, &class, false)
        };
        let target = match (on_demand, is_static) {
            (true, false) if self.provider.has_package(&name) => {
                self.resolve_package(state, &name, false)
            }
            (false, true) => type_target(state, &name[..name.len() - 1]),
            _ => type_target(state, &name),
        };
        if target.is_none() && !self.options.recovery {
            return None;
        }

        let binding = Binding::new(
            BindingData::Import {
                name,
                on_demand,
                is_static,
                target,
            },
            key,
            Origin::Synthesized,
        );
        let binding = if target.is_some() {
            binding
        } else {
            binding.recovered()
        };
        Some(self.alloc_declared(state, binding))
    }
}
