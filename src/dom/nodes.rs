//! Property descriptors for every concrete node kind.
//!
//! Each kind gets a module holding its descriptors plus one table per
//! language level listing them in traversal order. Properties that only
//! exist at some levels are simply absent from the other tables.

use smol_str::SmolStr;

use super::kind::NodeKind;
use super::level::ApiLevel;
use super::property::{DefaultChild, NodeClass, PropertyDescriptor};
use super::values::{AssignmentOperator, InfixOperator, ModifierKeyword, SimpleValue, ValueType};
use crate::base::PrimitiveKind;

type Table = &'static [&'static PropertyDescriptor];

/// Placeholder identifier given to names nobody has set yet.
pub const MISSING_IDENTIFIER: &str = "MISSING";

const DEFAULT_NAME: Option<DefaultChild> = Some(DefaultChild::Node(NodeKind::SimpleName));
const DEFAULT_SIMPLE_TYPE: Option<DefaultChild> = Some(DefaultChild::Node(NodeKind::SimpleType));

pub(crate) fn properties(kind: NodeKind, level: ApiLevel) -> Table {
    use ApiLevel::{Jls2, Jls3, Jls8};

    match (kind, level) {
        (NodeKind::CompilationUnit, _) => compilation_unit::PROPERTIES,
        (NodeKind::PackageDeclaration, _) => package_declaration::PROPERTIES,
        (NodeKind::ImportDeclaration, Jls2) => import_declaration::PROPERTIES_2,
        (NodeKind::ImportDeclaration, _) => import_declaration::PROPERTIES_3,
        (NodeKind::TypeDeclaration, Jls2) => type_declaration::PROPERTIES_2,
        (NodeKind::TypeDeclaration, _) => type_declaration::PROPERTIES_3,
        (NodeKind::MethodDeclaration, Jls2) => method_declaration::PROPERTIES_2,
        (NodeKind::MethodDeclaration, Jls3) => method_declaration::PROPERTIES_3,
        (NodeKind::MethodDeclaration, Jls8) => method_declaration::PROPERTIES_8,
        (NodeKind::FieldDeclaration, Jls2) => field_declaration::PROPERTIES_2,
        (NodeKind::FieldDeclaration, _) => field_declaration::PROPERTIES_3,
        (NodeKind::VariableDeclarationFragment, Jls8) => variable_declaration_fragment::PROPERTIES_8,
        (NodeKind::VariableDeclarationFragment, _) => variable_declaration_fragment::PROPERTIES_2,
        (NodeKind::SingleVariableDeclaration, Jls2) => single_variable_declaration::PROPERTIES_2,
        (NodeKind::SingleVariableDeclaration, Jls3) => single_variable_declaration::PROPERTIES_3,
        (NodeKind::SingleVariableDeclaration, Jls8) => single_variable_declaration::PROPERTIES_8,
        (NodeKind::TypeParameter, _) => type_parameter::PROPERTIES,
        (NodeKind::Modifier, _) => modifier::PROPERTIES,
        (NodeKind::Block, _) => block::PROPERTIES,
        (NodeKind::ExpressionStatement, _) => expression_statement::PROPERTIES,
        (NodeKind::ReturnStatement, _) => return_statement::PROPERTIES,
        (NodeKind::IfStatement, _) => if_statement::PROPERTIES,
        (NodeKind::SimpleName, _) => simple_name::PROPERTIES,
        (NodeKind::QualifiedName, _) => qualified_name::PROPERTIES,
        (NodeKind::PrimitiveType, _) => primitive_type::PROPERTIES,
        (NodeKind::SimpleType, _) => simple_type::PROPERTIES,
        (NodeKind::ArrayType, Jls8) => array_type::PROPERTIES_8,
        (NodeKind::ArrayType, _) => array_type::PROPERTIES_2,
        (NodeKind::Dimension, _) => &[],
        (NodeKind::ParameterizedType, _) => parameterized_type::PROPERTIES,
        (NodeKind::WildcardType, _) => wildcard_type::PROPERTIES,
        (NodeKind::MethodInvocation, Jls2) => method_invocation::PROPERTIES_2,
        (NodeKind::MethodInvocation, _) => method_invocation::PROPERTIES_3,
        (NodeKind::Assignment, _) => assignment::PROPERTIES,
        (NodeKind::InfixExpression, _) => infix_expression::PROPERTIES,
        (NodeKind::NumberLiteral, _) => number_literal::PROPERTIES,
        (NodeKind::StringLiteral, _) => string_literal::PROPERTIES,
        (NodeKind::BooleanLiteral, _) => boolean_literal::PROPERTIES,
        (NodeKind::NullLiteral, _) => &[],
    }
}

// ============================================================================
// DECLARATIONS
// ============================================================================

pub mod compilation_unit {
    use super::*;

    const K: NodeKind = NodeKind::CompilationUnit;

    pub static PACKAGE: PropertyDescriptor = PropertyDescriptor::child(
        K,
        "package",
        NodeClass::Kind(NodeKind::PackageDeclaration),
        false,
        false,
        None,
    );
    pub static IMPORTS: PropertyDescriptor = PropertyDescriptor::child_list(
        K,
        "imports",
        NodeClass::Kind(NodeKind::ImportDeclaration),
        false,
    );
    pub static TYPES: PropertyDescriptor = PropertyDescriptor::child_list(
        K,
        "types",
        NodeClass::Kind(NodeKind::TypeDeclaration),
        true,
    );

    pub(crate) static PROPERTIES: Table = &[&PACKAGE, &IMPORTS, &TYPES];
}

pub mod package_declaration {
    use super::*;

    pub static NAME: PropertyDescriptor = PropertyDescriptor::child(
        NodeKind::PackageDeclaration,
        "name",
        NodeClass::Name,
        true,
        false,
        DEFAULT_NAME,
    );

    pub(crate) static PROPERTIES: Table = &[&NAME];
}

pub mod import_declaration {
    use super::*;

    const K: NodeKind = NodeKind::ImportDeclaration;

    pub static NAME: PropertyDescriptor =
        PropertyDescriptor::child(K, "name", NodeClass::Name, true, false, DEFAULT_NAME);
    pub static ON_DEMAND: PropertyDescriptor =
        PropertyDescriptor::simple(K, "onDemand", ValueType::Bool, SimpleValue::Bool(false));
    /// Since JLS3.
    pub static STATIC: PropertyDescriptor =
        PropertyDescriptor::simple(K, "static", ValueType::Bool, SimpleValue::Bool(false));

    pub(crate) static PROPERTIES_2: Table = &[&NAME, &ON_DEMAND];
    pub(crate) static PROPERTIES_3: Table = &[&STATIC, &NAME, &ON_DEMAND];
}

pub mod type_declaration {
    use super::*;

    const K: NodeKind = NodeKind::TypeDeclaration;

    /// JLS2 only: flat modifier bits.
    pub static MODIFIERS: PropertyDescriptor =
        PropertyDescriptor::simple(K, "modifiers", ValueType::Modifiers, SimpleValue::Modifiers(0));
    /// Since JLS3: modifier nodes.
    pub static MODIFIERS2: PropertyDescriptor = PropertyDescriptor::child_list(
        K,
        "modifiers2",
        NodeClass::Kind(NodeKind::Modifier),
        false,
    );
    pub static INTERFACE: PropertyDescriptor =
        PropertyDescriptor::simple(K, "interface", ValueType::Bool, SimpleValue::Bool(false));
    pub static NAME: PropertyDescriptor = PropertyDescriptor::child(
        K,
        "name",
        NodeClass::Kind(NodeKind::SimpleName),
        true,
        false,
        DEFAULT_NAME,
    );
    /// JLS2 only.
    pub static SUPERCLASS: PropertyDescriptor =
        PropertyDescriptor::child(K, "superclass", NodeClass::Name, false, false, None);
    /// JLS2 only.
    pub static SUPER_INTERFACES: PropertyDescriptor =
        PropertyDescriptor::child_list(K, "superInterfaces", NodeClass::Name, false);
    pub static TYPE_PARAMETERS: PropertyDescriptor = PropertyDescriptor::child_list(
        K,
        "typeParameters",
        NodeClass::Kind(NodeKind::TypeParameter),
        false,
    );
    pub static SUPERCLASS_TYPE: PropertyDescriptor =
        PropertyDescriptor::child(K, "superclassType", NodeClass::Type, false, false, None);
    pub static SUPER_INTERFACE_TYPES: PropertyDescriptor =
        PropertyDescriptor::child_list(K, "superInterfaceTypes", NodeClass::Type, false);
    pub static BODY_DECLARATIONS: PropertyDescriptor =
        PropertyDescriptor::child_list(K, "bodyDeclarations", NodeClass::BodyDeclaration, true);

    pub(crate) static PROPERTIES_2: Table = &[
        &MODIFIERS,
        &INTERFACE,
        &NAME,
        &SUPERCLASS,
        &SUPER_INTERFACES,
        &BODY_DECLARATIONS,
    ];
    pub(crate) static PROPERTIES_3: Table = &[
        &MODIFIERS2,
        &INTERFACE,
        &NAME,
        &TYPE_PARAMETERS,
        &SUPERCLASS_TYPE,
        &SUPER_INTERFACE_TYPES,
        &BODY_DECLARATIONS,
    ];
}

pub mod method_declaration {
    use super::*;

    const K: NodeKind = NodeKind::MethodDeclaration;

    pub static MODIFIERS: PropertyDescriptor =
        PropertyDescriptor::simple(K, "modifiers", ValueType::Modifiers, SimpleValue::Modifiers(0));
    pub static MODIFIERS2: PropertyDescriptor = PropertyDescriptor::child_list(
        K,
        "modifiers2",
        NodeClass::Kind(NodeKind::Modifier),
        false,
    );
    pub static CONSTRUCTOR: PropertyDescriptor =
        PropertyDescriptor::simple(K, "constructor", ValueType::Bool, SimpleValue::Bool(false));
    pub static TYPE_PARAMETERS: PropertyDescriptor = PropertyDescriptor::child_list(
        K,
        "typeParameters",
        NodeClass::Kind(NodeKind::TypeParameter),
        false,
    );
    /// JLS2: the return type is mandatory.
    pub static RETURN_TYPE: PropertyDescriptor = PropertyDescriptor::child(
        K,
        "returnType",
        NodeClass::Type,
        true,
        false,
        Some(DefaultChild::Primitive(PrimitiveKind::Void)),
    );
    /// Since JLS3: optional (constructors have none) but starts out as `void`.
    pub static RETURN_TYPE2: PropertyDescriptor = PropertyDescriptor::child(
        K,
        "returnType2",
        NodeClass::Type,
        false,
        false,
        Some(DefaultChild::Primitive(PrimitiveKind::Void)),
    );
    pub static NAME: PropertyDescriptor = PropertyDescriptor::child(
        K,
        "name",
        NodeClass::Kind(NodeKind::SimpleName),
        true,
        false,
        DEFAULT_NAME,
    );
    pub static PARAMETERS: PropertyDescriptor = PropertyDescriptor::child_list(
        K,
        "parameters",
        NodeClass::Kind(NodeKind::SingleVariableDeclaration),
        true,
    );
    pub static EXTRA_DIMENSIONS: PropertyDescriptor =
        PropertyDescriptor::simple(K, "extraDimensions", ValueType::Int, SimpleValue::Int(0));
    pub static EXTRA_DIMENSIONS2: PropertyDescriptor = PropertyDescriptor::child_list(
        K,
        "extraDimensions2",
        NodeClass::Kind(NodeKind::Dimension),
        false,
    );
    pub static THROWN_EXCEPTIONS: PropertyDescriptor =
        PropertyDescriptor::child_list(K, "thrownExceptions", NodeClass::Name, false);
    pub static THROWN_EXCEPTION_TYPES: PropertyDescriptor =
        PropertyDescriptor::child_list(K, "thrownExceptionTypes", NodeClass::Type, false);
    pub static BODY: PropertyDescriptor = PropertyDescriptor::child(
        K,
        "body",
        NodeClass::Kind(NodeKind::Block),
        false,
        true,
        None,
    );

    pub(crate) static PROPERTIES_2: Table = &[
        &MODIFIERS,
        &CONSTRUCTOR,
        &RETURN_TYPE,
        &NAME,
        &PARAMETERS,
        &EXTRA_DIMENSIONS,
        &THROWN_EXCEPTIONS,
        &BODY,
    ];
    pub(crate) static PROPERTIES_3: Table = &[
        &MODIFIERS2,
        &CONSTRUCTOR,
        &TYPE_PARAMETERS,
        &RETURN_TYPE2,
        &NAME,
        &PARAMETERS,
        &EXTRA_DIMENSIONS,
        &THROWN_EXCEPTIONS,
        &BODY,
    ];
    pub(crate) static PROPERTIES_8: Table = &[
        &MODIFIERS2,
        &CONSTRUCTOR,
        &TYPE_PARAMETERS,
        &RETURN_TYPE2,
        &NAME,
        &PARAMETERS,
        &EXTRA_DIMENSIONS2,
        &THROWN_EXCEPTION_TYPES,
        &BODY,
    ];
}

pub mod field_declaration {
    use super::*;

    const K: NodeKind = NodeKind::FieldDeclaration;

    pub static MODIFIERS: PropertyDescriptor =
        PropertyDescriptor::simple(K, "modifiers", ValueType::Modifiers, SimpleValue::Modifiers(0));
    pub static MODIFIERS2: PropertyDescriptor = PropertyDescriptor::child_list(
        K,
        "modifiers2",
        NodeClass::Kind(NodeKind::Modifier),
        false,
    );
    pub static TYPE: PropertyDescriptor = PropertyDescriptor::child(
        K,
        "type",
        NodeClass::Type,
        true,
        false,
        Some(DefaultChild::Primitive(PrimitiveKind::Int)),
    );
    pub static FRAGMENTS: PropertyDescriptor = PropertyDescriptor::child_list(
        K,
        "fragments",
        NodeClass::Kind(NodeKind::VariableDeclarationFragment),
        true,
    );

    pub(crate) static PROPERTIES_2: Table = &[&MODIFIERS, &TYPE, &FRAGMENTS];
    pub(crate) static PROPERTIES_3: Table = &[&MODIFIERS2, &TYPE, &FRAGMENTS];
}

pub mod variable_declaration_fragment {
    use super::*;

    const K: NodeKind = NodeKind::VariableDeclarationFragment;

    pub static NAME: PropertyDescriptor = PropertyDescriptor::child(
        K,
        "name",
        NodeClass::Kind(NodeKind::SimpleName),
        true,
        false,
        DEFAULT_NAME,
    );
    pub static EXTRA_DIMENSIONS: PropertyDescriptor =
        PropertyDescriptor::simple(K, "extraDimensions", ValueType::Int, SimpleValue::Int(0));
    pub static EXTRA_DIMENSIONS2: PropertyDescriptor = PropertyDescriptor::child_list(
        K,
        "extraDimensions2",
        NodeClass::Kind(NodeKind::Dimension),
        false,
    );
    pub static INITIALIZER: PropertyDescriptor =
        PropertyDescriptor::child(K, "initializer", NodeClass::Expression, false, true, None);

    pub(crate) static PROPERTIES_2: Table = &[&NAME, &EXTRA_DIMENSIONS, &INITIALIZER];
    pub(crate) static PROPERTIES_8: Table = &[&NAME, &EXTRA_DIMENSIONS2, &INITIALIZER];
}

pub mod single_variable_declaration {
    use super::*;

    const K: NodeKind = NodeKind::SingleVariableDeclaration;

    pub static MODIFIERS: PropertyDescriptor =
        PropertyDescriptor::simple(K, "modifiers", ValueType::Modifiers, SimpleValue::Modifiers(0));
    pub static MODIFIERS2: PropertyDescriptor = PropertyDescriptor::child_list(
        K,
        "modifiers2",
        NodeClass::Kind(NodeKind::Modifier),
        false,
    );
    pub static TYPE: PropertyDescriptor = PropertyDescriptor::child(
        K,
        "type",
        NodeClass::Type,
        true,
        false,
        Some(DefaultChild::Primitive(PrimitiveKind::Int)),
    );
    pub static VARARGS: PropertyDescriptor =
        PropertyDescriptor::simple(K, "varargs", ValueType::Bool, SimpleValue::Bool(false));
    pub static NAME: PropertyDescriptor = PropertyDescriptor::child(
        K,
        "name",
        NodeClass::Kind(NodeKind::SimpleName),
        true,
        false,
        DEFAULT_NAME,
    );
    pub static EXTRA_DIMENSIONS: PropertyDescriptor =
        PropertyDescriptor::simple(K, "extraDimensions", ValueType::Int, SimpleValue::Int(0));
    pub static EXTRA_DIMENSIONS2: PropertyDescriptor = PropertyDescriptor::child_list(
        K,
        "extraDimensions2",
        NodeClass::Kind(NodeKind::Dimension),
        false,
    );
    pub static INITIALIZER: PropertyDescriptor =
        PropertyDescriptor::child(K, "initializer", NodeClass::Expression, false, true, None);

    pub(crate) static PROPERTIES_2: Table =
        &[&MODIFIERS, &TYPE, &NAME, &EXTRA_DIMENSIONS, &INITIALIZER];
    pub(crate) static PROPERTIES_3: Table = &[
        &MODIFIERS2,
        &TYPE,
        &VARARGS,
        &NAME,
        &EXTRA_DIMENSIONS,
        &INITIALIZER,
    ];
    pub(crate) static PROPERTIES_8: Table = &[
        &MODIFIERS2,
        &TYPE,
        &VARARGS,
        &NAME,
        &EXTRA_DIMENSIONS2,
        &INITIALIZER,
    ];
}

pub mod type_parameter {
    use super::*;

    const K: NodeKind = NodeKind::TypeParameter;

    pub static NAME: PropertyDescriptor = PropertyDescriptor::child(
        K,
        "name",
        NodeClass::Kind(NodeKind::SimpleName),
        true,
        false,
        DEFAULT_NAME,
    );
    pub static TYPE_BOUNDS: PropertyDescriptor =
        PropertyDescriptor::child_list(K, "typeBounds", NodeClass::Type, false);

    pub(crate) static PROPERTIES: Table = &[&NAME, &TYPE_BOUNDS];
}

pub mod modifier {
    use super::*;

    pub static KEYWORD: PropertyDescriptor = PropertyDescriptor::simple(
        NodeKind::Modifier,
        "keyword",
        ValueType::ModifierKeyword,
        SimpleValue::ModifierKeyword(ModifierKeyword::Public),
    );

    pub(crate) static PROPERTIES: Table = &[&KEYWORD];
}

// ============================================================================
// STATEMENTS
// ============================================================================

pub mod block {
    use super::*;

    pub static STATEMENTS: PropertyDescriptor = PropertyDescriptor::child_list(
        NodeKind::Block,
        "statements",
        NodeClass::Statement,
        true,
    );

    pub(crate) static PROPERTIES: Table = &[&STATEMENTS];
}

pub mod expression_statement {
    use super::*;

    pub static EXPRESSION: PropertyDescriptor = PropertyDescriptor::child(
        NodeKind::ExpressionStatement,
        "expression",
        NodeClass::Expression,
        true,
        true,
        Some(DefaultChild::Node(NodeKind::MethodInvocation)),
    );

    pub(crate) static PROPERTIES: Table = &[&EXPRESSION];
}

pub mod return_statement {
    use super::*;

    pub static EXPRESSION: PropertyDescriptor = PropertyDescriptor::child(
        NodeKind::ReturnStatement,
        "expression",
        NodeClass::Expression,
        false,
        true,
        None,
    );

    pub(crate) static PROPERTIES: Table = &[&EXPRESSION];
}

pub mod if_statement {
    use super::*;

    const K: NodeKind = NodeKind::IfStatement;

    pub static EXPRESSION: PropertyDescriptor =
        PropertyDescriptor::child(K, "expression", NodeClass::Expression, true, true, DEFAULT_NAME);
    pub static THEN_STATEMENT: PropertyDescriptor = PropertyDescriptor::child(
        K,
        "thenStatement",
        NodeClass::Statement,
        true,
        true,
        Some(DefaultChild::Node(NodeKind::Block)),
    );
    pub static ELSE_STATEMENT: PropertyDescriptor =
        PropertyDescriptor::child(K, "elseStatement", NodeClass::Statement, false, true, None);

    pub(crate) static PROPERTIES: Table = &[&EXPRESSION, &THEN_STATEMENT, &ELSE_STATEMENT];
}

// ============================================================================
// NAMES
// ============================================================================

pub mod simple_name {
    use super::*;

    pub static IDENTIFIER: PropertyDescriptor = PropertyDescriptor::simple(
        NodeKind::SimpleName,
        "identifier",
        ValueType::Identifier,
        SimpleValue::Identifier(SmolStr::new_static(MISSING_IDENTIFIER)),
    );

    pub(crate) static PROPERTIES: Table = &[&IDENTIFIER];
}

pub mod qualified_name {
    use super::*;

    const K: NodeKind = NodeKind::QualifiedName;

    pub static QUALIFIER: PropertyDescriptor =
        PropertyDescriptor::child(K, "qualifier", NodeClass::Name, true, true, DEFAULT_NAME);
    pub static NAME: PropertyDescriptor = PropertyDescriptor::child(
        K,
        "name",
        NodeClass::Kind(NodeKind::SimpleName),
        true,
        false,
        DEFAULT_NAME,
    );

    pub(crate) static PROPERTIES: Table = &[&QUALIFIER, &NAME];
}

// ============================================================================
// TYPES
// ============================================================================

pub mod primitive_type {
    use super::*;

    pub static PRIMITIVE_TYPE_CODE: PropertyDescriptor = PropertyDescriptor::simple(
        NodeKind::PrimitiveType,
        "primitiveTypeCode",
        ValueType::Primitive,
        SimpleValue::Primitive(PrimitiveKind::Int),
    );

    pub(crate) static PROPERTIES: Table = &[&PRIMITIVE_TYPE_CODE];
}

pub mod simple_type {
    use super::*;

    pub static NAME: PropertyDescriptor = PropertyDescriptor::child(
        NodeKind::SimpleType,
        "name",
        NodeClass::Name,
        true,
        false,
        DEFAULT_NAME,
    );

    pub(crate) static PROPERTIES: Table = &[&NAME];
}

pub mod array_type {
    use super::*;

    const K: NodeKind = NodeKind::ArrayType;

    /// JLS2/JLS3: nested array types, one dimension per level.
    pub static COMPONENT_TYPE: PropertyDescriptor = PropertyDescriptor::child(
        K,
        "componentType",
        NodeClass::Type,
        true,
        true,
        DEFAULT_SIMPLE_TYPE,
    );
    /// JLS8: element type plus explicit dimension nodes.
    pub static ELEMENT_TYPE: PropertyDescriptor = PropertyDescriptor::child(
        K,
        "elementType",
        NodeClass::Type,
        true,
        true,
        DEFAULT_SIMPLE_TYPE,
    );
    pub static DIMENSIONS: PropertyDescriptor = PropertyDescriptor::child_list(
        K,
        "dimensions",
        NodeClass::Kind(NodeKind::Dimension),
        false,
    );

    pub(crate) static PROPERTIES_2: Table = &[&COMPONENT_TYPE];
    pub(crate) static PROPERTIES_8: Table = &[&ELEMENT_TYPE, &DIMENSIONS];
}

pub mod parameterized_type {
    use super::*;

    const K: NodeKind = NodeKind::ParameterizedType;

    pub static TYPE: PropertyDescriptor =
        PropertyDescriptor::child(K, "type", NodeClass::Type, true, true, DEFAULT_SIMPLE_TYPE);
    pub static TYPE_ARGUMENTS: PropertyDescriptor =
        PropertyDescriptor::child_list(K, "typeArguments", NodeClass::Type, true);

    pub(crate) static PROPERTIES: Table = &[&TYPE, &TYPE_ARGUMENTS];
}

pub mod wildcard_type {
    use super::*;

    const K: NodeKind = NodeKind::WildcardType;

    pub static BOUND: PropertyDescriptor =
        PropertyDescriptor::child(K, "bound", NodeClass::Type, false, true, None);
    pub static UPPER_BOUND: PropertyDescriptor =
        PropertyDescriptor::simple(K, "upperBound", ValueType::Bool, SimpleValue::Bool(true));

    pub(crate) static PROPERTIES: Table = &[&BOUND, &UPPER_BOUND];
}

// ============================================================================
// EXPRESSIONS
// ============================================================================

pub mod method_invocation {
    use super::*;

    const K: NodeKind = NodeKind::MethodInvocation;

    pub static EXPRESSION: PropertyDescriptor =
        PropertyDescriptor::child(K, "expression", NodeClass::Expression, false, true, None);
    /// Since JLS3.
    pub static TYPE_ARGUMENTS: PropertyDescriptor =
        PropertyDescriptor::child_list(K, "typeArguments", NodeClass::Type, false);
    pub static NAME: PropertyDescriptor = PropertyDescriptor::child(
        K,
        "name",
        NodeClass::Kind(NodeKind::SimpleName),
        true,
        false,
        DEFAULT_NAME,
    );
    pub static ARGUMENTS: PropertyDescriptor =
        PropertyDescriptor::child_list(K, "arguments", NodeClass::Expression, true);

    pub(crate) static PROPERTIES_2: Table = &[&EXPRESSION, &NAME, &ARGUMENTS];
    pub(crate) static PROPERTIES_3: Table = &[&EXPRESSION, &TYPE_ARGUMENTS, &NAME, &ARGUMENTS];
}

pub mod assignment {
    use super::*;

    const K: NodeKind = NodeKind::Assignment;

    pub static LEFT_HAND_SIDE: PropertyDescriptor =
        PropertyDescriptor::child(K, "leftHandSide", NodeClass::Expression, true, true, DEFAULT_NAME);
    pub static OPERATOR: PropertyDescriptor = PropertyDescriptor::simple(
        K,
        "operator",
        ValueType::AssignmentOperator,
        SimpleValue::AssignmentOperator(AssignmentOperator::Assign),
    );
    pub static RIGHT_HAND_SIDE: PropertyDescriptor = PropertyDescriptor::child(
        K,
        "rightHandSide",
        NodeClass::Expression,
        true,
        true,
        DEFAULT_NAME,
    );

    pub(crate) static PROPERTIES: Table = &[&LEFT_HAND_SIDE, &OPERATOR, &RIGHT_HAND_SIDE];
}

pub mod infix_expression {
    use super::*;

    const K: NodeKind = NodeKind::InfixExpression;

    pub static LEFT_OPERAND: PropertyDescriptor =
        PropertyDescriptor::child(K, "leftOperand", NodeClass::Expression, true, true, DEFAULT_NAME);
    pub static OPERATOR: PropertyDescriptor = PropertyDescriptor::simple(
        K,
        "operator",
        ValueType::InfixOperator,
        SimpleValue::InfixOperator(InfixOperator::Plus),
    );
    pub static RIGHT_OPERAND: PropertyDescriptor = PropertyDescriptor::child(
        K,
        "rightOperand",
        NodeClass::Expression,
        true,
        true,
        DEFAULT_NAME,
    );
    pub static EXTENDED_OPERANDS: PropertyDescriptor =
        PropertyDescriptor::child_list(K, "extendedOperands", NodeClass::Expression, true);

    pub(crate) static PROPERTIES: Table =
        &[&LEFT_OPERAND, &OPERATOR, &RIGHT_OPERAND, &EXTENDED_OPERANDS];
}

pub mod number_literal {
    use super::*;

    pub static TOKEN: PropertyDescriptor = PropertyDescriptor::simple(
        NodeKind::NumberLiteral,
        "token",
        ValueType::Str,
        SimpleValue::Str(SmolStr::new_static("0")),
    );

    pub(crate) static PROPERTIES: Table = &[&TOKEN];
}

pub mod string_literal {
    use super::*;

    pub static ESCAPED_VALUE: PropertyDescriptor = PropertyDescriptor::simple(
        NodeKind::StringLiteral,
        "escapedValue",
        ValueType::Str,
        SimpleValue::Str(SmolStr::new_static("\"\"")),
    );

    pub(crate) static PROPERTIES: Table = &[&ESCAPED_VALUE];
}

pub mod boolean_literal {
    use super::*;

    pub static BOOLEAN_VALUE: PropertyDescriptor = PropertyDescriptor::simple(
        NodeKind::BooleanLiteral,
        "booleanValue",
        ValueType::Bool,
        SimpleValue::Bool(false),
    );

    pub(crate) static PROPERTIES: Table = &[&BOOLEAN_VALUE];
}
