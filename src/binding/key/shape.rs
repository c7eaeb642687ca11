//! Decoded form of a binding key.
//!
//! `Display` on every shape writes the exact key text back, so the encoder
//! and the decoder share one data model.

use std::fmt::{self, Write};

use smol_str::SmolStr;

use crate::base::{CompoundName, PrimitiveKind};

/// Name of one class-type segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeName {
    Named(SmolStr),
    /// `$1`
    Anonymous(u32),
    /// `$1Local`
    Local(u32, SmolStr),
}

impl TypeName {
    /// Parse the text after `$`.
    pub fn parse(text: &str) -> Option<Self> {
        let digits = text.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return (!text.is_empty()).then(|| Self::Named(SmolStr::new(text)));
        }
        let ordinal = text[..digits].parse().ok()?;
        if digits == text.len() {
            Some(Self::Anonymous(ordinal))
        } else {
            Some(Self::Local(ordinal, SmolStr::new(&text[digits..])))
        }
    }

    /// Simple name; anonymous types have none.
    pub fn simple_name(&self) -> &str {
        match self {
            Self::Named(name) | Self::Local(_, name) => name,
            Self::Anonymous(_) => "",
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Anonymous(ordinal) => write!(f, "{ordinal}"),
            Self::Local(ordinal, name) => write!(f, "{ordinal}{name}"),
        }
    }
}

/// One `$`- or `.`-separated segment of a class type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeSegment {
    pub name: TypeName,
    /// `None` for no `<…>`, `Some(empty)` for a raw `<>`.
    pub arguments: Option<Vec<KeyShape>>,
}

impl TypeSegment {
    pub fn named(name: impl Into<SmolStr>) -> Self {
        Self {
            name: TypeName::Named(name.into()),
            arguments: None,
        }
    }
}

/// `Lpackage/Outer$Inner<…>;`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassTypeKey {
    pub package: CompoundName,
    pub segments: Vec<TypeSegment>,
}

impl ClassTypeKey {
    /// Build from a binary name such as `java.util.Map$Entry`.
    pub fn from_binary_name(name: &str) -> Option<Self> {
        let (package, simple) = match name.rsplit_once(['.', '/']) {
            Some((package, simple)) => (package, simple),
            None => ("", name),
        };
        let package: CompoundName = if package.is_empty() {
            Vec::new()
        } else {
            package.split(['.', '/']).map(SmolStr::new).collect()
        };
        if package
            .iter()
            .any(|s| !crate::base::is_identifier(s))
        {
            return None;
        }
        let mut parts = simple.split('$');
        let top = parts.next().filter(|s| crate::base::is_identifier(s))?;
        let mut segments = vec![TypeSegment::named(top)];
        for part in parts {
            segments.push(TypeSegment {
                name: TypeName::parse(part)?,
                arguments: None,
            });
        }
        Some(Self { package, segments })
    }

    /// Package segments followed by every segment name.
    pub fn compound_name(&self) -> CompoundName {
        let mut name = self.package.clone();
        name.extend(self.segments.iter().map(|s| SmolStr::new(s.name.to_string())));
        name
    }

    /// Binary name with `.` package separators and `$` member separators.
    pub fn binary_name(&self) -> String {
        let mut out = String::new();
        for segment in &self.package {
            out.push_str(segment);
            out.push('.');
        }
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                out.push('$');
            }
            let _ = write!(out, "{}", segment.name);
        }
        out
    }

    /// The same type with every argument list removed.
    pub fn erasure(&self) -> Self {
        Self {
            package: self.package.clone(),
            segments: self
                .segments
                .iter()
                .map(|s| TypeSegment {
                    name: s.name.clone(),
                    arguments: None,
                })
                .collect(),
        }
    }

    /// The enclosing type, if this is a member.
    pub fn enclosing(&self) -> Option<Self> {
        if self.segments.len() < 2 {
            return None;
        }
        let mut outer = self.clone();
        outer.segments.pop();
        Some(outer)
    }

    pub fn is_generic_instance(&self) -> bool {
        self.segments.iter().any(|s| s.arguments.is_some())
    }

    pub fn last(&self) -> Option<&TypeSegment> {
        self.segments.last()
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut TypeSegment> {
        self.segments.last_mut()
    }
}

impl fmt::Display for ClassTypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('L')?;
        for segment in &self.package {
            write!(f, "{segment}/")?;
        }
        let mut parameterized = false;
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_char(if parameterized { '.' } else { '$' })?;
            }
            write!(f, "{}", segment.name)?;
            if let Some(arguments) = &segment.arguments {
                parameterized = true;
                f.write_char('<')?;
                for argument in arguments {
                    write!(f, "{argument}")?;
                }
                f.write_char('>')?;
            }
        }
        f.write_char(';')
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WildcardKind {
    Unbounded,
    Extends,
    Super,
}

impl WildcardKind {
    pub fn key_char(self) -> char {
        match self {
            Self::Unbounded => '*',
            Self::Extends => '+',
            Self::Super => '-',
        }
    }

    pub fn from_key_char(c: char) -> Option<Self> {
        match c {
            '*' => Some(Self::Unbounded),
            '+' => Some(Self::Extends),
            '-' => Some(Self::Super),
            _ => None,
        }
    }
}

/// `Name:ClassBound:InterfaceBound…` inside a method's `<…>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeParamKey {
    pub name: SmolStr,
    pub class_bound: Option<Box<KeyShape>>,
    pub interface_bounds: Vec<KeyShape>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldKey {
    pub declaring: ClassTypeKey,
    pub name: SmolStr,
    pub ty: Box<KeyShape>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodKey {
    pub declaring: ClassTypeKey,
    /// Empty for constructors.
    pub name: SmolStr,
    pub type_parameters: Vec<TypeParamKey>,
    pub parameters: Vec<KeyShape>,
    pub return_type: Box<KeyShape>,
    pub thrown: Vec<KeyShape>,
}

impl MethodKey {
    pub fn is_constructor(&self) -> bool {
        self.name.is_empty()
    }

    /// `(params)return`
    pub fn signature(&self) -> String {
        let mut out = String::from("(");
        for parameter in &self.parameters {
            let _ = write!(out, "{parameter}");
        }
        let _ = write!(out, "){}", self.return_type);
        out
    }
}

/// A fully decoded key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyShape {
    Package(CompoundName),
    Module(CompoundName),
    Base(PrimitiveKind),
    Class(ClassTypeKey),
    Array {
        element: Box<KeyShape>,
        dimensions: u32,
    },
    /// `declaring` is `None` for a bare `TName;` inside a signature.
    TypeVariable {
        declaring: Option<Box<KeyShape>>,
        name: SmolStr,
    },
    Wildcard {
        kind: WildcardKind,
        bound: Option<Box<KeyShape>>,
    },
    Field(FieldKey),
    Method(MethodKey),
    Initializer {
        declaring: ClassTypeKey,
        ordinal: u32,
    },
    LocalVariable {
        declaring: Box<KeyShape>,
        name: SmolStr,
        occurrence: Option<u32>,
    },
    Annotation {
        annotated: Box<KeyShape>,
        annotation: ClassTypeKey,
    },
}

impl KeyShape {
    pub fn is_type(&self) -> bool {
        matches!(
            self,
            Self::Base(_)
                | Self::Class(_)
                | Self::Array { .. }
                | Self::TypeVariable { .. }
                | Self::Wildcard { .. }
        )
    }

    /// This shape as it appears inside a signature.
    ///
    /// A declared type variable (`Lp/X;:TT;`) becomes the bare `TT;`.
    pub fn type_signature(&self) -> Option<KeyShape> {
        match self {
            Self::TypeVariable { name, .. } => Some(Self::TypeVariable {
                declaring: None,
                name: name.clone(),
            }),
            shape if shape.is_type() => Some(shape.clone()),
            _ => None,
        }
    }

    /// Element type of an array, or the shape itself.
    pub fn leaf_type(&self) -> &KeyShape {
        match self {
            Self::Array { element, .. } => element,
            shape => shape,
        }
    }

    pub fn as_class(&self) -> Option<&ClassTypeKey> {
        match self {
            Self::Class(class) => Some(class),
            _ => None,
        }
    }

    /// The class type that declares a member shape.
    pub fn declaring_class(&self) -> Option<&ClassTypeKey> {
        match self {
            Self::Field(field) => Some(&field.declaring),
            Self::Method(method) => Some(&method.declaring),
            Self::Initializer { declaring, .. } => Some(declaring),
            Self::LocalVariable { declaring, .. } => declaring.declaring_class(),
            Self::TypeVariable {
                declaring: Some(declaring),
                ..
            } => match declaring.as_ref() {
                Self::Class(class) => Some(class),
                other => other.declaring_class(),
            },
            Self::Annotation { annotated, .. } => match annotated.as_ref() {
                Self::Class(class) => Some(class),
                other => other.declaring_class(),
            },
            _ => None,
        }
    }
}

impl fmt::Display for KeyShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Package(name) => f.write_str(&name.join("/")),
            Self::Module(name) => write!(f, "\"{}", name.join(".")),
            Self::Base(primitive) => f.write_char(primitive.key_char()),
            Self::Class(class) => write!(f, "{class}"),
            Self::Array {
                element,
                dimensions,
            } => {
                for _ in 0..*dimensions {
                    f.write_char('[')?;
                }
                write!(f, "{element}")
            }
            Self::TypeVariable { declaring, name } => {
                if let Some(declaring) = declaring {
                    write!(f, "{declaring}:")?;
                }
                write!(f, "T{name};")
            }
            Self::Wildcard { kind, bound } => {
                f.write_char(kind.key_char())?;
                match bound {
                    Some(bound) => write!(f, "{bound}"),
                    None => Ok(()),
                }
            }
            Self::Field(field) => write!(f, "{}.{}){}", field.declaring, field.name, field.ty),
            Self::Method(method) => {
                write!(f, "{}.{}", method.declaring, method.name)?;
                if !method.type_parameters.is_empty() {
                    f.write_char('<')?;
                    for parameter in &method.type_parameters {
                        write!(f, "{}:", parameter.name)?;
                        if let Some(bound) = &parameter.class_bound {
                            write!(f, "{bound}")?;
                        }
                        for bound in &parameter.interface_bounds {
                            write!(f, ":{bound}")?;
                        }
                    }
                    f.write_char('>')?;
                }
                f.write_str(&method.signature())?;
                for thrown in &method.thrown {
                    write!(f, "^{thrown}")?;
                }
                Ok(())
            }
            Self::Initializer { declaring, ordinal } => write!(f, "{declaring}{{{ordinal}}}"),
            Self::LocalVariable {
                declaring,
                name,
                occurrence,
            } => {
                write!(f, "{declaring}#{name}")?;
                match occurrence {
                    Some(occurrence) => write!(f, "#{occurrence}"),
                    None => Ok(()),
                }
            }
            Self::Annotation {
                annotated,
                annotation,
            } => write!(f, "{annotated}@{annotation}"),
        }
    }
}
