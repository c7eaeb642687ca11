//! Binding arena.
//!
//! Bindings live in a [`BindingTable`] and refer to each other by
//! [`BindingId`], so mutually recursive graphs (a generic type and its
//! type variables, `T extends Comparable<T>`) are plain data.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use parking_lot::{RwLock, RwLockReadGuard};
use smol_str::SmolStr;

use super::decl::TypeDeclKind;
use super::key::WildcardKind;
use crate::base::{CompoundName, PrimitiveKind};

static NEXT_TABLE_ID: AtomicU32 = AtomicU32::new(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BindingId(u32);

impl BindingId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BindingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b{}", self.0)
    }
}

/// Where a binding's declaration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    Source,
    Library,
    /// Built from the key shape alone.
    Synthesized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingKind {
    Type,
    Method,
    Variable,
    Package,
    Annotation,
    Module,
    Import,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceType {
    pub compound_name: CompoundName,
    pub kind: TypeDeclKind,
    /// Non-empty for generic declarations.
    pub type_parameters: Vec<BindingId>,
    pub enclosing: Option<BindingId>,
    pub superclass: Option<BindingId>,
    pub interfaces: Vec<BindingId>,
}

impl ReferenceType {
    pub fn new(compound_name: CompoundName, kind: TypeDeclKind) -> Self {
        Self {
            compound_name,
            kind,
            type_parameters: Vec::new(),
            enclosing: None,
            superclass: None,
            interfaces: Vec::new(),
        }
    }

    pub fn is_generic(&self) -> bool {
        !self.type_parameters.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeBinding {
    Primitive(PrimitiveKind),
    Reference(ReferenceType),
    Array {
        element: BindingId,
        dimensions: u32,
    },
    Parameterized {
        generic: BindingId,
        arguments: Vec<BindingId>,
        enclosing: Option<BindingId>,
    },
    Raw {
        generic: BindingId,
    },
    Wildcard {
        kind: WildcardKind,
        bound: Option<BindingId>,
    },
    TypeVariable {
        name: SmolStr,
        rank: u32,
        declaring: Option<BindingId>,
        bounds: Vec<BindingId>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodBinding {
    /// Empty for constructors.
    pub name: SmolStr,
    pub declaring: BindingId,
    pub type_parameters: Vec<BindingId>,
    pub parameters: Vec<BindingId>,
    pub return_type: BindingId,
    pub thrown: Vec<BindingId>,
}

impl MethodBinding {
    pub fn is_constructor(&self) -> bool {
        self.name.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableBinding {
    pub name: SmolStr,
    pub ty: BindingId,
    pub declaring_type: Option<BindingId>,
    pub declaring_method: Option<BindingId>,
    pub is_field: bool,
    pub occurrence: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingData {
    Package {
        name: CompoundName,
    },
    Module {
        name: CompoundName,
    },
    Type(TypeBinding),
    Method(MethodBinding),
    Variable(VariableBinding),
    Annotation {
        annotation_type: BindingId,
        annotated: BindingId,
    },
    Import {
        name: CompoundName,
        on_demand: bool,
        is_static: bool,
        target: Option<BindingId>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub data: BindingData,
    pub key: String,
    /// Built without a declaration to back it.
    pub recovered: bool,
    pub origin: Origin,
}

impl Binding {
    pub fn new(data: BindingData, key: impl Into<String>, origin: Origin) -> Self {
        Self {
            data,
            key: key.into(),
            recovered: false,
            origin,
        }
    }

    pub fn recovered(mut self) -> Self {
        self.recovered = true;
        self
    }

    pub fn is_recovered(&self) -> bool {
        self.recovered
    }

    pub fn kind(&self) -> BindingKind {
        match self.data {
            BindingData::Package { .. } => BindingKind::Package,
            BindingData::Module { .. } => BindingKind::Module,
            BindingData::Type(_) => BindingKind::Type,
            BindingData::Method(_) => BindingKind::Method,
            BindingData::Variable(_) => BindingKind::Variable,
            BindingData::Annotation { .. } => BindingKind::Annotation,
            BindingData::Import { .. } => BindingKind::Import,
        }
    }

    pub fn as_type(&self) -> Option<&TypeBinding> {
        match &self.data {
            BindingData::Type(ty) => Some(ty),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&MethodBinding> {
        match &self.data {
            BindingData::Method(method) => Some(method),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&VariableBinding> {
        match &self.data {
            BindingData::Variable(variable) => Some(variable),
            _ => None,
        }
    }

    /// Type parameters of a generic type or method.
    pub fn type_parameters(&self) -> &[BindingId] {
        match &self.data {
            BindingData::Type(TypeBinding::Reference(reference)) => &reference.type_parameters,
            BindingData::Method(method) => &method.type_parameters,
            _ => &[],
        }
    }
}

/// Append-only binding arena shared between resolver threads.
#[derive(Debug)]
pub struct BindingTable {
    id: u32,
    bindings: RwLock<Vec<Binding>>,
}

impl Default for BindingTable {
    fn default() -> Self {
        Self::new()
    }
}

impl BindingTable {
    pub fn new() -> Self {
        Self {
            id: NEXT_TABLE_ID.fetch_add(1, Ordering::Relaxed),
            bindings: RwLock::new(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.read().is_empty()
    }

    pub(crate) fn alloc(&self, binding: Binding) -> BindingId {
        let mut bindings = self.bindings.write();
        let id = BindingId(bindings.len() as u32);
        bindings.push(binding);
        id
    }

    pub(crate) fn update(&self, id: BindingId, f: impl FnOnce(&mut BindingData)) {
        if let Some(binding) = self.bindings.write().get_mut(id.index()) {
            f(&mut binding.data);
        }
    }

    /// Snapshot of one binding.
    pub fn get(&self, id: BindingId) -> Option<Binding> {
        self.bindings.read().get(id.index()).cloned()
    }

    /// Read-only view over the whole arena.
    ///
    /// Holding a view blocks resolution on other threads; resolving on the
    /// same thread while holding one deadlocks.
    pub fn view(&self) -> BindingView<'_> {
        BindingView {
            table: self.id,
            bindings: self.bindings.read_recursive(),
        }
    }
}

pub struct BindingView<'a> {
    table: u32,
    bindings: RwLockReadGuard<'a, Vec<Binding>>,
}

impl BindingView<'_> {
    pub fn get(&self, id: BindingId) -> Option<&Binding> {
        self.bindings.get(id.index())
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub(crate) fn same_table(&self, other: &BindingView<'_>) -> bool {
        self.table == other.table
    }
}

impl fmt::Debug for BindingView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingView")
            .field("table", &self.table)
            .field("len", &self.bindings.len())
            .finish()
    }
}
