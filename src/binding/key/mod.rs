//! Binding keys: the string identity of a semantic binding.
//!
//! ```text
//! java/util                         package
//! Ljava/util/Map$Entry;             member type
//! [[Ljava/util/List<Ljava/lang/String;>;   2-D array of a parameterized type
//! Lp/X;.foo(ILjava/lang/String;)V^Ljava/io/IOException;   method
//! Lp/X;.count)I                     field
//! Lp/X;.run()V#i#1                  second local named `i`
//! ```
//!
//! [`KeyScanner`] tokenizes, [`KeyParser`] builds a [`KeyShape`], and
//! `KeyShape`'s `Display` encodes it back. [`BindingKey`] wraps an encoded
//! key with typed builders and queries.

mod parser;
mod scanner;
mod shape;

use std::fmt;

use smol_str::SmolStr;

use super::error::{BindingError, BindingResult};
use crate::base::{CompoundName, PrimitiveKind, is_identifier};

pub use parser::{KeyParser, MAX_NESTING};
pub use scanner::{KeyScanner, Token};
pub use shape::{
    ClassTypeKey, FieldKey, KeyShape, MethodKey, TypeName, TypeParamKey, TypeSegment, WildcardKind,
};

/// Result of decoding a key; malformed keys decode to a sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedKey {
    shape: Option<KeyShape>,
}

impl DecodedKey {
    pub fn decode(key: &str) -> Self {
        Self {
            shape: KeyParser::new(key).parse(),
        }
    }

    pub fn malformed() -> Self {
        Self { shape: None }
    }

    pub fn from_shape(shape: KeyShape) -> Self {
        Self { shape: Some(shape) }
    }

    pub fn is_malformed(&self) -> bool {
        self.shape.is_none()
    }

    pub fn shape(&self) -> Option<&KeyShape> {
        self.shape.as_ref()
    }

    pub fn into_shape(self) -> Option<KeyShape> {
        self.shape
    }

    /// Qualified name of the type (or package/module) the key names.
    ///
    /// Arrays report their element type; members report their declaring
    /// type. Empty for malformed keys.
    pub fn compound_name(&self) -> CompoundName {
        let Some(shape) = &self.shape else {
            return CompoundName::new();
        };
        match shape.leaf_type() {
            KeyShape::Package(name) | KeyShape::Module(name) => name.clone(),
            KeyShape::Base(primitive) => vec![SmolStr::new_static(primitive.keyword())],
            KeyShape::Class(class) => class.compound_name(),
            KeyShape::TypeVariable {
                declaring: None,
                name,
            } => vec![name.clone()],
            other => other
                .declaring_class()
                .map(ClassTypeKey::compound_name)
                .unwrap_or_default(),
        }
    }

    /// Array dimensions, 0 for anything else.
    pub fn dimensions(&self) -> u32 {
        match &self.shape {
            Some(KeyShape::Array { dimensions, .. }) => *dimensions,
            _ => 0,
        }
    }

    /// Type arguments of the innermost parameterized segment.
    ///
    /// Arrays report their element's arguments.
    pub fn type_arguments(&self) -> &[KeyShape] {
        let Some(KeyShape::Class(class)) = self.shape.as_ref().map(KeyShape::leaf_type) else {
            return &[];
        };
        class
            .segments
            .iter()
            .rev()
            .find_map(|s| s.arguments.as_deref())
            .unwrap_or(&[])
    }
}

/// An encoded binding key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BindingKey(String);

impl BindingKey {
    /// Wrap raw key text without validating it.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn decode(&self) -> DecodedKey {
        DecodedKey::decode(&self.0)
    }

    fn from_shape(shape: &KeyShape) -> Self {
        Self(shape.to_string())
    }

    fn shape(&self) -> Option<KeyShape> {
        self.decode().into_shape()
    }

    fn type_shape(&self) -> BindingResult<KeyShape> {
        self.shape()
            .and_then(|s| s.type_signature())
            .ok_or_else(|| BindingError::wrong_kind(&self.0, "a type key"))
    }

    fn class_shape(&self) -> BindingResult<ClassTypeKey> {
        match self.shape() {
            Some(KeyShape::Class(class)) => Ok(class),
            _ => Err(BindingError::wrong_kind(&self.0, "a class type key")),
        }
    }

    // ========================================================================
    // BUILDERS
    // ========================================================================

    /// `java.util` → `java/util`
    ///
    /// Names whose key would scan as a signature (`Lombok`, `B`) or that
    /// contain a key delimiter (`a$b`) have no package key.
    pub fn package(name: &str) -> BindingResult<Self> {
        let segments: CompoundName = name.split('.').map(SmolStr::new).collect();
        if segments.iter().any(|s| !is_identifier(s)) {
            return Err(BindingError::invalid_name(name, "package name"));
        }
        let key = Self::from_shape(&KeyShape::Package(segments));
        if !scanner::reads_as_package(key.as_str()) {
            return Err(BindingError::invalid_name(name, "package name"));
        }
        Ok(key)
    }

    /// Key of a type given by source-like name.
    ///
    /// Accepts primitive keywords (`int`), binary names
    /// (`java.util.Map$Entry`), and trailing `[]` pairs for arrays.
    pub fn type_key(name: &str) -> BindingResult<Self> {
        let mut element = name.trim();
        let mut dimensions = 0u32;
        while let Some(stripped) = element.strip_suffix("[]") {
            element = stripped.trim_end();
            dimensions += 1;
        }
        let shape = match PrimitiveKind::from_keyword(element) {
            Some(primitive) => KeyShape::Base(primitive),
            None => ClassTypeKey::from_binary_name(element)
                .map(KeyShape::Class)
                .ok_or_else(|| BindingError::invalid_name(name, "type name"))?,
        };
        let shape = if dimensions > 0 {
            KeyShape::Array {
                element: Box::new(shape),
                dimensions,
            }
        } else {
            shape
        };
        Ok(Self::from_shape(&shape))
    }

    /// Array of `element` with `dimensions` more dimensions.
    pub fn array_type(element: &BindingKey, dimensions: u32) -> BindingResult<Self> {
        if dimensions == 0 {
            return Err(BindingError::ZeroDimensions);
        }
        let shape = match element.type_shape()? {
            KeyShape::Array {
                element,
                dimensions: inner,
            } => KeyShape::Array {
                element,
                dimensions: inner
                    .checked_add(dimensions)
                    .ok_or(BindingError::TooManyDimensions { inner, added: dimensions })?,
            },
            KeyShape::Wildcard { .. } => {
                return Err(BindingError::wrong_kind(&element.0, "an array element type"));
            }
            shape => KeyShape::Array {
                element: Box::new(shape),
                dimensions,
            },
        };
        Ok(Self::from_shape(&shape))
    }

    /// `generic` instantiated with `arguments` on its innermost segment.
    pub fn parameterized_type(generic: &BindingKey, arguments: &[BindingKey]) -> BindingResult<Self> {
        let arguments = arguments
            .iter()
            .map(BindingKey::type_shape)
            .collect::<BindingResult<Vec<_>>>()?;
        Self::with_arguments(generic, arguments)
    }

    /// `generic<>`
    pub fn raw_type(generic: &BindingKey) -> BindingResult<Self> {
        Self::with_arguments(generic, Vec::new())
    }

    fn with_arguments(generic: &BindingKey, arguments: Vec<KeyShape>) -> BindingResult<Self> {
        let mut class = generic.class_shape()?;
        let already = || BindingError::AlreadyParameterized {
            key: generic.0.clone(),
        };
        let segment = class.last_mut().ok_or_else(already)?;
        if segment.arguments.is_some() {
            return Err(already());
        }
        segment.arguments = Some(arguments);
        Ok(Self::from_shape(&KeyShape::Class(class)))
    }

    /// Type variable `name` declared by a class or method key.
    pub fn type_variable(declaring: &BindingKey, name: &str) -> BindingResult<Self> {
        if !is_identifier(name) {
            return Err(BindingError::invalid_name(name, "type variable name"));
        }
        let declaring = match declaring.shape() {
            Some(shape @ (KeyShape::Class(_) | KeyShape::Method(_))) => shape,
            _ => return Err(BindingError::wrong_kind(&declaring.0, "a class or method key")),
        };
        Ok(Self::from_shape(&KeyShape::TypeVariable {
            declaring: Some(Box::new(declaring)),
            name: SmolStr::new(name),
        }))
    }

    pub fn wildcard(kind: WildcardKind, bound: Option<&BindingKey>) -> BindingResult<Self> {
        let bound = match (kind, bound) {
            (WildcardKind::Unbounded, None) => None,
            (WildcardKind::Unbounded, Some(_)) => {
                return Err(BindingError::WildcardBound {
                    kind,
                    problem: "cannot have a bound",
                });
            }
            (_, None) => {
                return Err(BindingError::WildcardBound {
                    kind,
                    problem: "needs a bound",
                });
            }
            (_, Some(bound)) => Some(Box::new(bound.type_shape()?)),
        };
        Ok(Self::from_shape(&KeyShape::Wildcard { kind, bound }))
    }

    pub fn field(declaring: &BindingKey, name: &str, ty: &BindingKey) -> BindingResult<Self> {
        if !is_identifier(name) {
            return Err(BindingError::invalid_name(name, "field name"));
        }
        Ok(Self::from_shape(&KeyShape::Field(FieldKey {
            declaring: declaring.class_shape()?,
            name: SmolStr::new(name),
            ty: Box::new(ty.type_shape()?),
        })))
    }

    /// Method key; an empty `name` denotes a constructor.
    pub fn method(
        declaring: &BindingKey,
        name: &str,
        parameters: &[BindingKey],
        return_type: &BindingKey,
        thrown: &[BindingKey],
    ) -> BindingResult<Self> {
        if !name.is_empty() && !is_identifier(name) {
            return Err(BindingError::invalid_name(name, "method name"));
        }
        let types = |keys: &[BindingKey]| {
            keys.iter()
                .map(BindingKey::type_shape)
                .collect::<BindingResult<Vec<_>>>()
        };
        Ok(Self::from_shape(&KeyShape::Method(MethodKey {
            declaring: declaring.class_shape()?,
            name: SmolStr::new(name),
            type_parameters: Vec::new(),
            parameters: types(parameters)?,
            return_type: Box::new(return_type.type_shape()?),
            thrown: types(thrown)?,
        })))
    }

    /// Local variable of a method or initializer key.
    pub fn local_variable(
        declaring: &BindingKey,
        name: &str,
        occurrence: Option<u32>,
    ) -> BindingResult<Self> {
        if !is_identifier(name) {
            return Err(BindingError::invalid_name(name, "local variable name"));
        }
        let declaring = match declaring.shape() {
            Some(shape @ (KeyShape::Method(_) | KeyShape::Initializer { .. })) => shape,
            _ => {
                return Err(BindingError::wrong_kind(
                    &declaring.0,
                    "a method or initializer key",
                ));
            }
        };
        Ok(Self::from_shape(&KeyShape::LocalVariable {
            declaring: Box::new(declaring),
            name: SmolStr::new(name),
            occurrence,
        }))
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// A class type with a non-empty argument list on some segment.
    pub fn is_parameterized_type(&self) -> bool {
        match self.shape() {
            Some(KeyShape::Class(class)) => class
                .segments
                .iter()
                .any(|s| s.arguments.as_ref().is_some_and(|a| !a.is_empty())),
            _ => false,
        }
    }

    /// A class type whose innermost segment is `<>`.
    pub fn is_raw_type(&self) -> bool {
        match self.shape() {
            Some(KeyShape::Class(class)) => class
                .last()
                .and_then(|s| s.arguments.as_ref())
                .is_some_and(Vec::is_empty),
            _ => false,
        }
    }

    pub fn type_arguments(&self) -> Vec<BindingKey> {
        self.decode()
            .type_arguments()
            .iter()
            .map(BindingKey::from_shape)
            .collect()
    }

    pub fn thrown_exceptions(&self) -> Vec<BindingKey> {
        match self.shape() {
            Some(KeyShape::Method(method)) => {
                method.thrown.iter().map(BindingKey::from_shape).collect()
            }
            _ => Vec::new(),
        }
    }

    /// The type declaring a member, or enclosing a member type.
    pub fn declaring_type(&self) -> Option<BindingKey> {
        let shape = self.shape()?;
        let declaring = match &shape {
            KeyShape::Class(class) => class.enclosing()?,
            other => other.declaring_class()?.clone(),
        };
        Some(Self::from_shape(&KeyShape::Class(declaring)))
    }

    /// Type signature for types and fields, `(params)return` for methods.
    pub fn to_signature(&self) -> Option<String> {
        match self.shape()? {
            KeyShape::Method(method) => Some(method.signature()),
            KeyShape::Field(field) => Some(field.ty.to_string()),
            shape => shape.type_signature().map(|s| s.to_string()),
        }
    }
}

impl fmt::Display for BindingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for BindingKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
