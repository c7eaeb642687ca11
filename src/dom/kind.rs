use std::fmt;

use super::level::ApiLevel;
use super::nodes;
use super::property::{NodeClass, PropertyDescriptor};

/// Category tag of a tree node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKind {
    // Declarations
    CompilationUnit,
    PackageDeclaration,
    ImportDeclaration,
    TypeDeclaration,
    MethodDeclaration,
    FieldDeclaration,
    VariableDeclarationFragment,
    SingleVariableDeclaration,
    TypeParameter,
    Modifier,

    // Statements
    Block,
    ExpressionStatement,
    ReturnStatement,
    IfStatement,

    // Names
    SimpleName,
    QualifiedName,

    // Types
    PrimitiveType,
    SimpleType,
    ArrayType,
    Dimension,
    ParameterizedType,
    WildcardType,

    // Expressions
    MethodInvocation,
    Assignment,
    InfixExpression,
    NumberLiteral,
    StringLiteral,
    BooleanLiteral,
    NullLiteral,
}

impl NodeKind {
    pub const ALL: [NodeKind; 29] = [
        Self::CompilationUnit,
        Self::PackageDeclaration,
        Self::ImportDeclaration,
        Self::TypeDeclaration,
        Self::MethodDeclaration,
        Self::FieldDeclaration,
        Self::VariableDeclarationFragment,
        Self::SingleVariableDeclaration,
        Self::TypeParameter,
        Self::Modifier,
        Self::Block,
        Self::ExpressionStatement,
        Self::ReturnStatement,
        Self::IfStatement,
        Self::SimpleName,
        Self::QualifiedName,
        Self::PrimitiveType,
        Self::SimpleType,
        Self::ArrayType,
        Self::Dimension,
        Self::ParameterizedType,
        Self::WildcardType,
        Self::MethodInvocation,
        Self::Assignment,
        Self::InfixExpression,
        Self::NumberLiteral,
        Self::StringLiteral,
        Self::BooleanLiteral,
        Self::NullLiteral,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::CompilationUnit => "CompilationUnit",
            Self::PackageDeclaration => "PackageDeclaration",
            Self::ImportDeclaration => "ImportDeclaration",
            Self::TypeDeclaration => "TypeDeclaration",
            Self::MethodDeclaration => "MethodDeclaration",
            Self::FieldDeclaration => "FieldDeclaration",
            Self::VariableDeclarationFragment => "VariableDeclarationFragment",
            Self::SingleVariableDeclaration => "SingleVariableDeclaration",
            Self::TypeParameter => "TypeParameter",
            Self::Modifier => "Modifier",
            Self::Block => "Block",
            Self::ExpressionStatement => "ExpressionStatement",
            Self::ReturnStatement => "ReturnStatement",
            Self::IfStatement => "IfStatement",
            Self::SimpleName => "SimpleName",
            Self::QualifiedName => "QualifiedName",
            Self::PrimitiveType => "PrimitiveType",
            Self::SimpleType => "SimpleType",
            Self::ArrayType => "ArrayType",
            Self::Dimension => "Dimension",
            Self::ParameterizedType => "ParameterizedType",
            Self::WildcardType => "WildcardType",
            Self::MethodInvocation => "MethodInvocation",
            Self::Assignment => "Assignment",
            Self::InfixExpression => "InfixExpression",
            Self::NumberLiteral => "NumberLiteral",
            Self::StringLiteral => "StringLiteral",
            Self::BooleanLiteral => "BooleanLiteral",
            Self::NullLiteral => "NullLiteral",
        }
    }

    /// Lowest language level at which this kind exists.
    pub fn min_level(self) -> ApiLevel {
        match self {
            Self::TypeParameter
            | Self::Modifier
            | Self::ParameterizedType
            | Self::WildcardType => ApiLevel::Jls3,
            Self::Dimension => ApiLevel::Jls8,
            _ => ApiLevel::Jls2,
        }
    }

    pub fn is_supported_at(self, level: ApiLevel) -> bool {
        level >= self.min_level()
    }

    pub fn is_expression(self) -> bool {
        matches!(
            self,
            Self::SimpleName
                | Self::QualifiedName
                | Self::MethodInvocation
                | Self::Assignment
                | Self::InfixExpression
                | Self::NumberLiteral
                | Self::StringLiteral
                | Self::BooleanLiteral
                | Self::NullLiteral
        )
    }

    pub fn is_statement(self) -> bool {
        matches!(
            self,
            Self::Block | Self::ExpressionStatement | Self::ReturnStatement | Self::IfStatement
        )
    }

    pub fn is_type(self) -> bool {
        matches!(
            self,
            Self::PrimitiveType
                | Self::SimpleType
                | Self::ArrayType
                | Self::ParameterizedType
                | Self::WildcardType
        )
    }

    pub fn is_name(self) -> bool {
        matches!(self, Self::SimpleName | Self::QualifiedName)
    }

    pub fn is_body_declaration(self) -> bool {
        matches!(
            self,
            Self::TypeDeclaration | Self::MethodDeclaration | Self::FieldDeclaration
        )
    }

    /// Check membership in a child category.
    pub fn is_a(self, class: NodeClass) -> bool {
        match class {
            NodeClass::Node => true,
            NodeClass::Expression => self.is_expression(),
            NodeClass::Statement => self.is_statement(),
            NodeClass::Type => self.is_type(),
            NodeClass::Name => self.is_name(),
            NodeClass::BodyDeclaration => self.is_body_declaration(),
            NodeClass::Kind(kind) => self == kind,
        }
    }

    /// Structural properties in declared left-to-right order at `level`.
    ///
    /// Returns an empty slice for kinds that do not exist at `level`.
    pub fn properties(self, level: ApiLevel) -> &'static [&'static PropertyDescriptor] {
        if !self.is_supported_at(level) {
            return &[];
        }
        nodes::properties(self, level)
    }

    /// Whether `property` belongs to this kind at any level.
    pub fn declares(self, property: &PropertyDescriptor) -> bool {
        property.owner() == self
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
