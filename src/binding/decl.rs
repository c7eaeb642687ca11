//! Declarations the resolver reads.
//!
//! Whatever front end produces the semantic model hands the resolver a
//! [`DeclarationProvider`]. [`DeclarationIndex`] is the in-memory one.

use indexmap::{IndexMap, IndexSet};
use smol_str::SmolStr;

use super::key::{ClassTypeKey, KeyShape, TypeName, WildcardKind};
use crate::base::{CompoundName, PrimitiveKind, split_compound};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeDeclKind {
    Class,
    Interface,
    Enum,
    Annotation,
}

/// A type as written in a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Primitive(PrimitiveKind),
    /// Binary name such as `java.util.Map$Entry`.
    Named {
        name: SmolStr,
        arguments: Vec<TypeRef>,
    },
    Array {
        element: Box<TypeRef>,
        dimensions: u32,
    },
    Variable(SmolStr),
    Wildcard {
        kind: WildcardKind,
        bound: Option<Box<TypeRef>>,
    },
}

impl TypeRef {
    pub fn named(name: impl Into<SmolStr>) -> Self {
        Self::Named {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    pub fn generic(name: impl Into<SmolStr>, arguments: Vec<TypeRef>) -> Self {
        Self::Named {
            name: name.into(),
            arguments,
        }
    }

    pub fn array(element: TypeRef, dimensions: u32) -> Self {
        Self::Array {
            element: Box::new(element),
            dimensions,
        }
    }

    pub fn variable(name: impl Into<SmolStr>) -> Self {
        Self::Variable(name.into())
    }

    /// Key shape of this type; `None` for an invalid binary name.
    pub fn key_shape(&self) -> Option<KeyShape> {
        Some(match self {
            Self::Primitive(primitive) => KeyShape::Base(*primitive),
            Self::Named { name, arguments } => {
                let mut class = ClassTypeKey::from_binary_name(name)?;
                if !arguments.is_empty() {
                    let arguments = arguments
                        .iter()
                        .map(TypeRef::key_shape)
                        .collect::<Option<Vec<_>>>()?;
                    class.last_mut()?.arguments = Some(arguments);
                }
                KeyShape::Class(class)
            }
            Self::Array {
                element,
                dimensions,
            } => KeyShape::Array {
                element: Box::new(element.key_shape()?),
                dimensions: *dimensions,
            },
            Self::Variable(name) => KeyShape::TypeVariable {
                declaring: None,
                name: name.clone(),
            },
            Self::Wildcard { kind, bound } => KeyShape::Wildcard {
                kind: *kind,
                bound: match bound {
                    Some(bound) => Some(Box::new(bound.key_shape()?)),
                    None => None,
                },
            },
        })
    }

    /// Key-grammar signature, used to match method parameters against keys.
    pub fn signature(&self) -> String {
        self.key_shape().map(|s| s.to_string()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeParamDecl {
    pub name: SmolStr,
    pub bounds: Vec<TypeRef>,
}

impl TypeParamDecl {
    pub fn new(name: impl Into<SmolStr>, bounds: Vec<TypeRef>) -> Self {
        Self {
            name: name.into(),
            bounds,
        }
    }
}

/// An annotation applied to a declaration, by binary name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationDecl {
    pub type_name: SmolStr,
}

impl AnnotationDecl {
    pub fn new(type_name: impl Into<SmolStr>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalDecl {
    pub name: SmolStr,
    pub ty: TypeRef,
}

impl LocalDecl {
    pub fn new(name: impl Into<SmolStr>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: SmolStr,
    pub ty: TypeRef,
    pub annotations: Vec<AnnotationDecl>,
}

impl FieldDecl {
    pub fn new(name: impl Into<SmolStr>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            annotations: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    /// Empty for constructors.
    pub name: SmolStr,
    pub type_parameters: Vec<TypeParamDecl>,
    pub parameters: Vec<TypeRef>,
    pub return_type: TypeRef,
    pub thrown: Vec<TypeRef>,
    /// In declaration order; repeated names are told apart by occurrence.
    pub locals: Vec<LocalDecl>,
    pub annotations: Vec<AnnotationDecl>,
}

impl MethodDecl {
    pub fn new(name: impl Into<SmolStr>, parameters: Vec<TypeRef>, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_parameters: Vec::new(),
            parameters,
            return_type,
            thrown: Vec::new(),
            locals: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn with_thrown(mut self, thrown: Vec<TypeRef>) -> Self {
        self.thrown = thrown;
        self
    }

    pub fn with_type_parameters(mut self, type_parameters: Vec<TypeParamDecl>) -> Self {
        self.type_parameters = type_parameters;
        self
    }

    pub fn with_locals(mut self, locals: Vec<LocalDecl>) -> Self {
        self.locals = locals;
        self
    }

    pub fn signature(&self) -> String {
        let mut out = String::from("(");
        for parameter in &self.parameters {
            out.push_str(&parameter.signature());
        }
        out.push(')');
        out.push_str(&self.return_type.signature());
        out
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitializerDecl {
    pub is_static: bool,
    pub locals: Vec<LocalDecl>,
}

/// A local or anonymous type, numbered within its top-level type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalTypeDecl {
    pub ordinal: u32,
    /// Empty name for an anonymous type.
    pub decl: TypeDecl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub name: SmolStr,
    pub kind: TypeDeclKind,
    pub type_parameters: Vec<TypeParamDecl>,
    pub superclass: Option<TypeRef>,
    pub interfaces: Vec<TypeRef>,
    pub fields: Vec<FieldDecl>,
    pub methods: Vec<MethodDecl>,
    /// Numbered `{1}`, `{2}`, ...
    pub initializers: Vec<InitializerDecl>,
    pub member_types: Vec<TypeDecl>,
    pub local_types: Vec<LocalTypeDecl>,
    pub annotations: Vec<AnnotationDecl>,
}

impl TypeDecl {
    pub fn new(name: impl Into<SmolStr>, kind: TypeDeclKind) -> Self {
        Self {
            name: name.into(),
            kind,
            type_parameters: Vec::new(),
            superclass: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            initializers: Vec::new(),
            member_types: Vec::new(),
            local_types: Vec::new(),
            annotations: Vec::new(),
        }
    }

    pub fn class(name: impl Into<SmolStr>) -> Self {
        Self::new(name, TypeDeclKind::Class)
    }

    pub fn interface(name: impl Into<SmolStr>) -> Self {
        Self::new(name, TypeDeclKind::Interface)
    }

    pub fn with_type_parameters(mut self, type_parameters: Vec<TypeParamDecl>) -> Self {
        self.type_parameters = type_parameters;
        self
    }

    pub fn with_superclass(mut self, superclass: TypeRef) -> Self {
        self.superclass = Some(superclass);
        self
    }

    pub fn with_interfaces(mut self, interfaces: Vec<TypeRef>) -> Self {
        self.interfaces = interfaces;
        self
    }

    pub fn with_field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: MethodDecl) -> Self {
        self.methods.push(method);
        self
    }

    pub fn with_initializer(mut self, initializer: InitializerDecl) -> Self {
        self.initializers.push(initializer);
        self
    }

    pub fn with_member(mut self, member: TypeDecl) -> Self {
        self.member_types.push(member);
        self
    }

    pub fn with_local_type(mut self, ordinal: u32, decl: TypeDecl) -> Self {
        self.local_types.push(LocalTypeDecl { ordinal, decl });
        self
    }

    pub fn with_annotation(mut self, annotation: AnnotationDecl) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Follow one segment below this type.
    pub fn member(&self, name: &TypeName) -> Option<&TypeDecl> {
        match name {
            TypeName::Named(name) => self.member_types.iter().find(|t| t.name == *name),
            TypeName::Anonymous(ordinal) => self
                .local_types
                .iter()
                .find(|t| t.ordinal == *ordinal && t.decl.name.is_empty())
                .map(|t| &t.decl),
            TypeName::Local(ordinal, name) => self
                .local_types
                .iter()
                .find(|t| t.ordinal == *ordinal && t.decl.name == *name)
                .map(|t| &t.decl),
        }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Method by name and `(params)return` signature.
    pub fn method(&self, name: &str, signature: &str) -> Option<&MethodDecl> {
        self.methods
            .iter()
            .find(|m| m.name == name && m.signature() == signature)
    }
}

pub(crate) fn has_annotation(annotations: &[AnnotationDecl], binary_name: &str) -> bool {
    annotations.iter().any(|a| a.type_name == binary_name)
}

/// Source of declarations for the resolver.
pub trait DeclarationProvider: Send + Sync {
    /// Top-level type `name` in `package`, declared in source.
    fn source_type(&self, package: &[SmolStr], name: &str) -> Option<&TypeDecl>;

    /// Top-level type `name` in `package`, from a library.
    fn library_type(&self, package: &[SmolStr], name: &str) -> Option<&TypeDecl>;

    fn has_package(&self, package: &[SmolStr]) -> bool;

    fn has_module(&self, name: &[SmolStr]) -> bool;
}

type TypeTable = IndexMap<(CompoundName, SmolStr), TypeDecl>;

/// In-memory [`DeclarationProvider`].
#[derive(Debug, Clone, Default)]
pub struct DeclarationIndex {
    source: TypeTable,
    library: TypeTable,
    packages: IndexSet<CompoundName>,
    modules: IndexSet<CompoundName>,
}

impl DeclarationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source type under a dotted package name.
    pub fn add_source(&mut self, package: &str, decl: TypeDecl) -> &mut Self {
        let package = self.register_package(package);
        self.source.insert((package, decl.name.clone()), decl);
        self
    }

    pub fn add_library(&mut self, package: &str, decl: TypeDecl) -> &mut Self {
        let package = self.register_package(package);
        self.library.insert((package, decl.name.clone()), decl);
        self
    }

    pub fn add_module(&mut self, name: &str) -> &mut Self {
        self.modules.insert(split_compound(name, &['.']));
        self
    }

    fn register_package(&mut self, package: &str) -> CompoundName {
        let package = split_compound(package, &['.', '/']);
        if !package.is_empty() {
            self.packages.insert(package.clone());
        }
        package
    }

    pub fn source_types(&self) -> impl Iterator<Item = &TypeDecl> {
        self.source.values()
    }

    pub fn library_types(&self) -> impl Iterator<Item = &TypeDecl> {
        self.library.values()
    }
}

fn lookup<'a>(table: &'a TypeTable, package: &[SmolStr], name: &str) -> Option<&'a TypeDecl> {
    table.get(&(package.to_vec(), SmolStr::new(name)))
}

impl DeclarationProvider for DeclarationIndex {
    fn source_type(&self, package: &[SmolStr], name: &str) -> Option<&TypeDecl> {
        lookup(&self.source, package, name)
    }

    fn library_type(&self, package: &[SmolStr], name: &str) -> Option<&TypeDecl> {
        lookup(&self.library, package, name)
    }

    fn has_package(&self, package: &[SmolStr]) -> bool {
        self.packages.contains(package)
    }

    fn has_module(&self, name: &[SmolStr]) -> bool {
        self.modules.contains(name)
    }
}
