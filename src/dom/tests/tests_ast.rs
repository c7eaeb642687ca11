#![allow(clippy::unwrap_used)]

use rstest::rstest;

use super::super::*;
use crate::base::PrimitiveKind;

fn identifier(ast: &Ast, name: NodeId) -> String {
    ast.simple(name, &nodes::simple_name::IDENTIFIER)
        .unwrap()
        .as_str()
        .unwrap()
        .to_string()
}

// ============================================================================
// CREATION AND DEFAULTS
// ============================================================================

#[test]
fn test_new_node_materializes_mandatory_children() {
    let mut ast = Ast::default();
    let ty = ast.new_node(NodeKind::TypeDeclaration).unwrap();

    let name = ast
        .child(ty, &nodes::type_declaration::NAME)
        .unwrap()
        .unwrap();
    assert_eq!(ast.kind(name).unwrap(), NodeKind::SimpleName);
    assert_eq!(ast.parent(name).unwrap(), Some(ty));
    assert_eq!(identifier(&ast, name), MISSING_IDENTIFIER);
}

#[test]
fn test_reading_default_child_twice_is_stable() {
    let mut ast = Ast::default();
    let ty = ast.new_node(NodeKind::TypeDeclaration).unwrap();
    let count = ast.modification_count();

    let first = ast.child(ty, &nodes::type_declaration::NAME).unwrap();
    let second = ast.child(ty, &nodes::type_declaration::NAME).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        ast.modification_count(),
        count,
        "reads must not bump the counter"
    );
}

#[test]
fn test_default_child_is_replaceable() {
    let mut ast = Ast::default();
    let ty = ast.new_node(NodeKind::TypeDeclaration).unwrap();
    let default = ast.child(ty, &nodes::type_declaration::NAME).unwrap();
    let name = ast.new_simple_name("Vehicle").unwrap();

    let old = ast
        .set_child(ty, &nodes::type_declaration::NAME, Some(name))
        .unwrap();

    assert_eq!(old, default);
    assert_eq!(ast.parent(old.unwrap()).unwrap(), None);
    assert_eq!(ast.parent(name).unwrap(), Some(ty));
}

#[test]
fn test_method_return_type_defaults_to_void() {
    let mut ast = Ast::with_level(ApiLevel::Jls8);
    let method = ast.new_node(NodeKind::MethodDeclaration).unwrap();
    let ret = ast
        .child(method, &nodes::method_declaration::RETURN_TYPE2)
        .unwrap()
        .unwrap();
    assert_eq!(
        ast.simple(ret, &nodes::primitive_type::PRIMITIVE_TYPE_CODE)
            .unwrap()
            .as_primitive(),
        Some(PrimitiveKind::Void)
    );

    let mut old = Ast::with_level(ApiLevel::Jls2);
    let method = old.new_node(NodeKind::MethodDeclaration).unwrap();
    assert!(
        old.child(method, &nodes::method_declaration::RETURN_TYPE)
            .unwrap()
            .is_some()
    );
}

#[test]
fn test_optional_child_starts_empty_and_can_be_cleared() {
    let mut ast = Ast::default();
    let method = ast.new_node(NodeKind::MethodDeclaration).unwrap();
    assert_eq!(
        ast.child(method, &nodes::method_declaration::BODY).unwrap(),
        None
    );

    let body = ast.new_node(NodeKind::Block).unwrap();
    ast.set_child(method, &nodes::method_declaration::BODY, Some(body))
        .unwrap();
    let old = ast
        .set_child(method, &nodes::method_declaration::BODY, None)
        .unwrap();

    assert_eq!(old, Some(body));
    assert_eq!(ast.parent(body).unwrap(), None);
}

#[test]
fn test_clearing_mandatory_child_fails() {
    let mut ast = Ast::default();
    let ty = ast.new_node(NodeKind::TypeDeclaration).unwrap();

    let err = ast
        .set_child(ty, &nodes::type_declaration::NAME, None)
        .unwrap_err();

    assert!(matches!(err, DomError::MissingChild { .. }));
    assert_eq!(err.kind(), ErrorKind::Argument);
}

#[test]
fn test_array_type_at_jls8_starts_with_one_dimension() {
    let mut ast = Ast::with_level(ApiLevel::Jls8);
    let array = ast.new_node(NodeKind::ArrayType).unwrap();
    assert_eq!(
        ast.list(array, &nodes::array_type::DIMENSIONS)
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn test_node_creation_bumps_counter_once() {
    let mut ast = Ast::default();
    let before = ast.modification_count();
    ast.new_node(NodeKind::IfStatement).unwrap();
    assert_eq!(ast.modification_count(), before + 1);
}

// ============================================================================
// LANGUAGE LEVELS
// ============================================================================

#[rstest]
#[case(ApiLevel::Jls2, NodeKind::TypeParameter)]
#[case(ApiLevel::Jls2, NodeKind::Modifier)]
#[case(ApiLevel::Jls2, NodeKind::WildcardType)]
#[case(ApiLevel::Jls2, NodeKind::ParameterizedType)]
#[case(ApiLevel::Jls3, NodeKind::Dimension)]
fn test_kind_unsupported_at_level(#[case] level: ApiLevel, #[case] kind: NodeKind) {
    let mut ast = Ast::with_level(level);
    let err = ast.new_node(kind).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedAtLevel);
    assert!(ast.is_empty());
}

#[rstest]
#[case(ApiLevel::Jls2, NodeKind::TypeDeclaration, &nodes::type_declaration::MODIFIERS2)]
#[case(ApiLevel::Jls2, NodeKind::TypeDeclaration, &nodes::type_declaration::TYPE_PARAMETERS)]
#[case(ApiLevel::Jls8, NodeKind::TypeDeclaration, &nodes::type_declaration::MODIFIERS)]
#[case(ApiLevel::Jls8, NodeKind::TypeDeclaration, &nodes::type_declaration::SUPERCLASS)]
#[case(ApiLevel::Jls8, NodeKind::MethodDeclaration, &nodes::method_declaration::THROWN_EXCEPTIONS)]
#[case(ApiLevel::Jls3, NodeKind::MethodDeclaration, &nodes::method_declaration::EXTRA_DIMENSIONS2)]
#[case(ApiLevel::Jls8, NodeKind::ArrayType, &nodes::array_type::COMPONENT_TYPE)]
#[case(ApiLevel::Jls3, NodeKind::ArrayType, &nodes::array_type::ELEMENT_TYPE)]
#[case(ApiLevel::Jls2, NodeKind::ImportDeclaration, &nodes::import_declaration::STATIC)]
fn test_property_unsupported_at_level(
    #[case] level: ApiLevel,
    #[case] kind: NodeKind,
    #[case] property: &'static PropertyDescriptor,
) {
    let mut ast = Ast::with_level(level);
    let node = ast.new_node(kind).unwrap();

    let err = match property.shape() {
        PropertyShape::Simple { .. } => ast.simple(node, property).map(|_| ()).unwrap_err(),
        PropertyShape::Child { .. } => ast.child(node, property).map(|_| ()).unwrap_err(),
        PropertyShape::ChildList { .. } => ast.list(node, property).map(|_| ()).unwrap_err(),
    };
    assert_eq!(err.kind(), ErrorKind::UnsupportedAtLevel, "{property} at {level}");
}

#[test]
fn test_property_of_other_kind_is_argument_error() {
    let mut ast = Ast::default();
    let name = ast.new_simple_name("x").unwrap();
    let err = ast.child(name, &nodes::type_declaration::NAME).unwrap_err();
    assert!(matches!(err, DomError::UnknownProperty { .. }));
    assert_eq!(err.kind(), ErrorKind::Argument);
}

#[test]
fn test_property_order_differs_by_level() {
    let ids = |level| {
        NodeKind::TypeDeclaration
            .properties(level)
            .iter()
            .map(|p| p.id())
            .collect::<Vec<_>>()
    };
    assert_eq!(
        ids(ApiLevel::Jls2),
        [
            "modifiers",
            "interface",
            "name",
            "superclass",
            "superInterfaces",
            "bodyDeclarations"
        ]
    );
    assert_eq!(
        ids(ApiLevel::Jls8),
        [
            "modifiers2",
            "interface",
            "name",
            "typeParameters",
            "superclassType",
            "superInterfaceTypes",
            "bodyDeclarations"
        ]
    );
}

#[test]
fn test_every_property_belongs_to_its_kind() {
    for level in [ApiLevel::Jls2, ApiLevel::Jls3, ApiLevel::Jls8] {
        for kind in NodeKind::ALL {
            for property in kind.properties(level) {
                assert_eq!(property.owner(), kind, "{property} listed under {kind}");
            }
        }
    }
}

// ============================================================================
// ATTACH VALIDATION
// ============================================================================

#[test]
fn test_wrong_class_is_rejected() {
    let mut ast = Ast::default();
    let ty = ast.new_node(NodeKind::TypeDeclaration).unwrap();
    let qualified = ast.new_qualified_name("a.b").unwrap();

    let err = ast
        .set_child(ty, &nodes::type_declaration::NAME, Some(qualified))
        .unwrap_err();

    assert!(matches!(err, DomError::WrongClass { .. }));
    assert_eq!(ast.parent(qualified).unwrap(), None);
}

#[test]
fn test_foreign_node_is_rejected() {
    let mut ast = Ast::default();
    let mut other = Ast::default();
    let ty = ast.new_node(NodeKind::TypeDeclaration).unwrap();
    let foreign = other.new_simple_name("Foreign").unwrap();

    let err = ast
        .set_child(ty, &nodes::type_declaration::NAME, Some(foreign))
        .unwrap_err();
    assert_eq!(err, DomError::ForeignNode { node: foreign });
    assert!(matches!(
        ast.kind(foreign),
        Err(DomError::ForeignNode { .. })
    ));
}

#[test]
fn test_already_parented_node_is_rejected() {
    let mut ast = Ast::default();
    let first = ast.new_node(NodeKind::TypeDeclaration).unwrap();
    let second = ast.new_node(NodeKind::TypeDeclaration).unwrap();
    let name = ast.child(first, &nodes::type_declaration::NAME).unwrap();
    let count = ast.modification_count();

    let err = ast
        .set_child(second, &nodes::type_declaration::NAME, name)
        .unwrap_err();

    assert!(matches!(err, DomError::AlreadyParented { .. }));
    assert_eq!(ast.parent(name.unwrap()).unwrap(), Some(first));
    assert_eq!(ast.modification_count(), count);
}

#[test]
fn test_ancestor_cannot_become_descendant() {
    let mut ast = Ast::default();
    let if_stmt = ast.new_node(NodeKind::IfStatement).unwrap();
    let block = ast
        .child(if_stmt, &nodes::if_statement::THEN_STATEMENT)
        .unwrap()
        .unwrap();

    let err = ast
        .list_mut(block, &nodes::block::STATEMENTS)
        .unwrap()
        .push(if_stmt)
        .unwrap_err();

    assert_eq!(
        err,
        DomError::Cycle {
            owner: block,
            child: if_stmt
        }
    );
    assert!(ast.list(block, &nodes::block::STATEMENTS).unwrap().is_empty());
}

#[test]
fn test_node_cannot_be_its_own_child() {
    let mut ast = Ast::default();
    let block = ast.new_node(NodeKind::Block).unwrap();
    let err = ast
        .list_mut(block, &nodes::block::STATEMENTS)
        .unwrap()
        .push(block)
        .unwrap_err();
    assert!(matches!(err, DomError::Cycle { .. }));
}

// ============================================================================
// SCALARS, RANGES, FLAGS
// ============================================================================

#[test]
fn test_set_simple_bumps_counter() {
    let mut ast = Ast::default();
    let name = ast.new_simple_name("a").unwrap();
    let count = ast.modification_count();

    ast.set_simple(
        name,
        &nodes::simple_name::IDENTIFIER,
        SimpleValue::Identifier("b".into()),
    )
    .unwrap();

    assert_eq!(identifier(&ast, name), "b");
    assert_eq!(ast.modification_count(), count + 1);
}

#[rstest]
#[case(SimpleValue::Bool(true))]
#[case(SimpleValue::Identifier("not valid".into()))]
#[case(SimpleValue::Identifier("".into()))]
fn test_set_simple_rejects_bad_values(#[case] value: SimpleValue) {
    let mut ast = Ast::default();
    let name = ast.new_simple_name("a").unwrap();
    let err = ast
        .set_simple(name, &nodes::simple_name::IDENTIFIER, value)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Argument);
    assert_eq!(identifier(&ast, name), "a");
}

#[test]
fn test_negative_extra_dimensions_rejected() {
    let mut ast = Ast::with_level(ApiLevel::Jls3);
    let method = ast.new_node(NodeKind::MethodDeclaration).unwrap();
    let err = ast
        .set_simple(
            method,
            &nodes::method_declaration::EXTRA_DIMENSIONS,
            SimpleValue::Int(-1),
        )
        .unwrap_err();
    assert!(matches!(err, DomError::InvalidValue { .. }));
}

#[rstest]
#[case(0, 0)]
#[case(5, 10)]
#[case(-1, 0)]
fn test_valid_source_ranges(#[case] start: i64, #[case] length: i64) {
    let mut ast = Ast::default();
    let name = ast.new_simple_name("a").unwrap();
    let count = ast.modification_count();

    ast.set_source_range(name, start, length).unwrap();

    let range = ast.source_range(name).unwrap();
    assert_eq!((range.start(), range.length()), (start, length));
    assert_eq!(ast.modification_count(), count);
}

#[rstest]
#[case(-1, 5)]
#[case(3, -1)]
#[case(-2, 0)]
#[case(-1, -1)]
fn test_invalid_source_ranges(#[case] start: i64, #[case] length: i64) {
    let mut ast = Ast::default();
    let name = ast.new_simple_name("a").unwrap();
    ast.set_source_range(name, 4, 2).unwrap();

    let err = ast.set_source_range(name, start, length).unwrap_err();

    assert_eq!(err, DomError::InvalidSourceRange { start, length });
    assert_eq!(ast.source_range(name).unwrap().start(), 4);
}

#[test]
fn test_protected_node_rejects_edits() {
    let mut ast = Ast::default();
    let name = ast.new_simple_name("a").unwrap();
    ast.set_flags(name, NodeFlags::PROTECT).unwrap();

    let err = ast
        .set_simple(
            name,
            &nodes::simple_name::IDENTIFIER,
            SimpleValue::Identifier("b".into()),
        )
        .unwrap_err();
    assert_eq!(err, DomError::Protected { node: name });

    ast.set_flags(name, NodeFlags::NONE).unwrap();
    ast.set_simple(
        name,
        &nodes::simple_name::IDENTIFIER,
        SimpleValue::Identifier("b".into()),
    )
    .unwrap();
}

#[test]
fn test_protected_node_cannot_be_attached() {
    let mut ast = Ast::default();
    let ty = ast.new_node(NodeKind::TypeDeclaration).unwrap();
    let name = ast.new_simple_name("A").unwrap();
    ast.set_flags(name, NodeFlags::PROTECT).unwrap();

    let err = ast
        .set_child(ty, &nodes::type_declaration::NAME, Some(name))
        .unwrap_err();
    assert!(matches!(err, DomError::Protected { .. }));
}

#[test]
fn test_default_flags_are_stamped_on_new_nodes() {
    let settings = AstSettings::default().with_default_flags(NodeFlags::ORIGINAL);
    let mut ast = Ast::new(settings);
    let name = ast.new_simple_name("a").unwrap();
    assert!(ast.flags(name).unwrap().contains(NodeFlags::ORIGINAL));
}

// ============================================================================
// NAVIGATION AND DELETION
// ============================================================================

#[test]
fn test_root_and_location_in_parent() {
    let mut ast = Ast::default();
    let unit = ast.new_node(NodeKind::CompilationUnit).unwrap();
    let ty = ast.new_node(NodeKind::TypeDeclaration).unwrap();
    ast.list_mut(unit, &nodes::compilation_unit::TYPES)
        .unwrap()
        .push(ty)
        .unwrap();
    let name = ast
        .child(ty, &nodes::type_declaration::NAME)
        .unwrap()
        .unwrap();

    assert_eq!(ast.root(name).unwrap(), unit);
    assert_eq!(
        ast.location_in_parent(name).unwrap(),
        Some(&nodes::type_declaration::NAME)
    );
    assert_eq!(
        ast.location_in_parent(ty).unwrap(),
        Some(&nodes::compilation_unit::TYPES)
    );
    assert_eq!(ast.root(unit).unwrap(), unit);
}

#[test]
fn test_delete_detaches_from_list_and_optional_child() {
    let mut ast = Ast::default();
    let method = ast.new_node(NodeKind::MethodDeclaration).unwrap();
    let body = ast.new_node(NodeKind::Block).unwrap();
    let stmt = ast.new_node(NodeKind::ReturnStatement).unwrap();
    ast.set_child(method, &nodes::method_declaration::BODY, Some(body))
        .unwrap();
    ast.list_mut(body, &nodes::block::STATEMENTS)
        .unwrap()
        .push(stmt)
        .unwrap();

    ast.delete(stmt).unwrap();
    assert!(ast.list(body, &nodes::block::STATEMENTS).unwrap().is_empty());
    assert_eq!(ast.parent(stmt).unwrap(), None);

    ast.delete(body).unwrap();
    assert_eq!(
        ast.child(method, &nodes::method_declaration::BODY).unwrap(),
        None
    );

    // unparented: no-op
    ast.delete(body).unwrap();
}

#[test]
fn test_delete_mandatory_child_fails() {
    let mut ast = Ast::default();
    let ty = ast.new_node(NodeKind::TypeDeclaration).unwrap();
    let name = ast
        .child(ty, &nodes::type_declaration::NAME)
        .unwrap()
        .unwrap();
    assert!(matches!(
        ast.delete(name),
        Err(DomError::MissingChild { .. })
    ));
    assert_eq!(ast.parent(name).unwrap(), Some(ty));
}

#[test]
fn test_children_follow_declared_order() {
    let mut ast = Ast::default();
    let method = ast.new_node(NodeKind::MethodDeclaration).unwrap();
    let modifier = ast.new_modifier(ModifierKeyword::Public).unwrap();
    ast.list_mut(method, &nodes::method_declaration::MODIFIERS2)
        .unwrap()
        .push(modifier)
        .unwrap();

    let ret = ast
        .child(method, &nodes::method_declaration::RETURN_TYPE2)
        .unwrap()
        .unwrap();
    let name = ast
        .child(method, &nodes::method_declaration::NAME)
        .unwrap()
        .unwrap();
    assert_eq!(ast.children(method).unwrap(), vec![modifier, ret, name]);
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

#[test]
fn test_new_qualified_name_nests_left() {
    let mut ast = Ast::default();
    let name = ast.new_qualified_name("java.util.List").unwrap();

    assert_eq!(ast.kind(name).unwrap(), NodeKind::QualifiedName);
    let qualifier = ast
        .child(name, &nodes::qualified_name::QUALIFIER)
        .unwrap()
        .unwrap();
    assert_eq!(ast.kind(qualifier).unwrap(), NodeKind::QualifiedName);
    assert_eq!(
        ast.node(name).unwrap().name_text().as_deref(),
        Some("java.util.List")
    );
}

#[rstest]
#[case("")]
#[case("a..b")]
#[case("java.1util")]
#[case("Single")]
fn test_new_qualified_name_rejects_bad_input(#[case] text: &str) {
    let mut ast = Ast::default();
    assert!(ast.new_qualified_name(text).is_err());
}

#[test]
fn test_new_array_type_jls8_uses_dimension_nodes() {
    let mut ast = Ast::with_level(ApiLevel::Jls8);
    let int = ast.new_primitive_type(PrimitiveKind::Int);
    let array = ast.new_array_type(int, 2).unwrap();

    assert_eq!(
        ast.list(array, &nodes::array_type::DIMENSIONS)
            .unwrap()
            .len(),
        2
    );
    assert_eq!(
        ast.child(array, &nodes::array_type::ELEMENT_TYPE).unwrap(),
        Some(int)
    );
}

#[test]
fn test_new_array_type_jls2_nests_component_types() {
    let mut ast = Ast::with_level(ApiLevel::Jls2);
    let int = ast.new_primitive_type(PrimitiveKind::Int);
    let array = ast.new_array_type(int, 2).unwrap();

    let inner = ast
        .child(array, &nodes::array_type::COMPONENT_TYPE)
        .unwrap()
        .unwrap();
    assert_eq!(ast.kind(inner).unwrap(), NodeKind::ArrayType);
    assert_eq!(
        ast.child(inner, &nodes::array_type::COMPONENT_TYPE).unwrap(),
        Some(int)
    );
}

#[test]
fn test_new_string_literal_escapes() {
    let mut ast = Ast::default();
    let literal = ast.new_string_literal("say \"hi\"\n");
    assert_eq!(
        ast.simple(literal, &nodes::string_literal::ESCAPED_VALUE)
            .unwrap()
            .as_str(),
        Some("\"say \\\"hi\\\"\\n\"")
    );
}

#[test]
fn test_new_modifiers_from_flags() {
    let mut ast = Ast::default();
    let flags = ModifierKeyword::Public.flag() | ModifierKeyword::Static.flag();
    let modifiers = ast.new_modifiers(flags).unwrap();
    let keywords: Vec<_> = modifiers
        .iter()
        .map(|&m| ast.simple(m, &nodes::modifier::KEYWORD).unwrap().to_string())
        .collect();
    assert_eq!(keywords, ["public", "static"]);
}

// ============================================================================
// CHANGE RECORDING
// ============================================================================

#[test]
fn test_changes_are_recorded_when_enabled() {
    let mut ast = Ast::new(AstSettings::default().with_record_changes(true));
    let ty = ast.new_node(NodeKind::TypeDeclaration).unwrap();
    let name = ast.new_simple_name("A").unwrap();
    let old = ast
        .set_child(ty, &nodes::type_declaration::NAME, Some(name))
        .unwrap()
        .unwrap();

    let log = ast.changes();
    assert!(log.created().contains(&ty));
    assert!(log.removed().contains(&old));
    assert!(log.is_dirty(ty));

    let changes = ast.take_changes();
    assert_eq!(changes.len(), 3);
    assert_eq!(changes[2].kind, ChangeKind::Replaced);
    assert_eq!(changes[2].new_child, Some(name));
    assert!(ast.changes().is_empty());
}

#[test]
fn test_changes_not_recorded_by_default() {
    let mut ast = Ast::default();
    ast.new_node(NodeKind::Block).unwrap();
    assert!(ast.changes().is_empty());
}
