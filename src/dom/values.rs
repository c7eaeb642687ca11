//! Scalar ("simple") property values.

use std::fmt;

use smol_str::SmolStr;

use crate::base::PrimitiveKind;

/// Value type declared by a simple property descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Bool,
    Int,
    Str,
    Identifier,
    Modifiers,
    ModifierKeyword,
    Primitive,
    AssignmentOperator,
    InfixOperator,
}

/// The value held by a simple property.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimpleValue {
    Bool(bool),
    Int(i32),
    Str(SmolStr),
    Identifier(SmolStr),
    Modifiers(u32),
    ModifierKeyword(ModifierKeyword),
    Primitive(PrimitiveKind),
    AssignmentOperator(AssignmentOperator),
    InfixOperator(InfixOperator),
}

impl SimpleValue {
    pub fn value_type(&self) -> ValueType {
        match self {
            Self::Bool(_) => ValueType::Bool,
            Self::Int(_) => ValueType::Int,
            Self::Str(_) => ValueType::Str,
            Self::Identifier(_) => ValueType::Identifier,
            Self::Modifiers(_) => ValueType::Modifiers,
            Self::ModifierKeyword(_) => ValueType::ModifierKeyword,
            Self::Primitive(_) => ValueType::Primitive,
            Self::AssignmentOperator(_) => ValueType::AssignmentOperator,
            Self::InfixOperator(_) => ValueType::InfixOperator,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Text of a `Str` or `Identifier` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) | Self::Identifier(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_modifiers(&self) -> Option<u32> {
        match self {
            Self::Modifiers(m) => Some(*m),
            _ => None,
        }
    }

    pub fn as_primitive(&self) -> Option<PrimitiveKind> {
        match self {
            Self::Primitive(p) => Some(*p),
            _ => None,
        }
    }
}

impl fmt::Display for SimpleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Str(s) | Self::Identifier(s) => f.write_str(s),
            Self::Modifiers(m) => write!(f, "{m:#x}"),
            Self::ModifierKeyword(k) => f.write_str(k.keyword()),
            Self::Primitive(p) => f.write_str(p.keyword()),
            Self::AssignmentOperator(op) => f.write_str(op.token()),
            Self::InfixOperator(op) => f.write_str(op.token()),
        }
    }
}

// ============================================================================
// MODIFIERS
// ============================================================================

/// Modifier keywords, each with the flag bit used by the flat `modifiers`
/// representation of older language levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModifierKeyword {
    Public,
    Private,
    Protected,
    Static,
    Final,
    Synchronized,
    Volatile,
    Transient,
    Native,
    Abstract,
    Strictfp,
    Default,
}

impl ModifierKeyword {
    pub const ALL: [ModifierKeyword; 12] = [
        Self::Public,
        Self::Private,
        Self::Protected,
        Self::Static,
        Self::Final,
        Self::Synchronized,
        Self::Volatile,
        Self::Transient,
        Self::Native,
        Self::Abstract,
        Self::Strictfp,
        Self::Default,
    ];

    /// Union of every keyword flag.
    pub const ALL_FLAGS: u32 = 0x0001
        | 0x0002
        | 0x0004
        | 0x0008
        | 0x0010
        | 0x0020
        | 0x0040
        | 0x0080
        | 0x0100
        | 0x0400
        | 0x0800
        | 0x10000;

    pub fn flag(self) -> u32 {
        match self {
            Self::Public => 0x0001,
            Self::Private => 0x0002,
            Self::Protected => 0x0004,
            Self::Static => 0x0008,
            Self::Final => 0x0010,
            Self::Synchronized => 0x0020,
            Self::Volatile => 0x0040,
            Self::Transient => 0x0080,
            Self::Native => 0x0100,
            Self::Abstract => 0x0400,
            Self::Strictfp => 0x0800,
            Self::Default => 0x10000,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Protected => "protected",
            Self::Static => "static",
            Self::Final => "final",
            Self::Synchronized => "synchronized",
            Self::Volatile => "volatile",
            Self::Transient => "transient",
            Self::Native => "native",
            Self::Abstract => "abstract",
            Self::Strictfp => "strictfp",
            Self::Default => "default",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.keyword() == keyword)
    }

    /// Keywords whose flag bit is set in `flags`, in declaration order.
    pub fn from_flags(flags: u32) -> Vec<Self> {
        Self::ALL
            .into_iter()
            .filter(|k| flags & k.flag() != 0)
            .collect()
    }
}

// ============================================================================
// OPERATORS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssignmentOperator {
    Assign,
    PlusAssign,
    MinusAssign,
    TimesAssign,
    DivideAssign,
    RemainderAssign,
    BitAndAssign,
    BitOrAssign,
    BitXorAssign,
}

impl AssignmentOperator {
    pub fn token(self) -> &'static str {
        match self {
            Self::Assign => "=",
            Self::PlusAssign => "+=",
            Self::MinusAssign => "-=",
            Self::TimesAssign => "*=",
            Self::DivideAssign => "/=",
            Self::RemainderAssign => "%=",
            Self::BitAndAssign => "&=",
            Self::BitOrAssign => "|=",
            Self::BitXorAssign => "^=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfixOperator {
    Times,
    Divide,
    Remainder,
    Plus,
    Minus,
    Less,
    Greater,
    LessEquals,
    GreaterEquals,
    Equals,
    NotEquals,
    ConditionalAnd,
    ConditionalOr,
}

impl InfixOperator {
    pub fn token(self) -> &'static str {
        match self {
            Self::Times => "*",
            Self::Divide => "/",
            Self::Remainder => "%",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEquals => "<=",
            Self::GreaterEquals => ">=",
            Self::Equals => "==",
            Self::NotEquals => "!=",
            Self::ConditionalAnd => "&&",
            Self::ConditionalOr => "||",
        }
    }
}
