use crate::base::PrimitiveKind;
use crate::binding::*;

pub(super) fn int() -> TypeRef {
    TypeRef::Primitive(PrimitiveKind::Int)
}

pub(super) fn string() -> TypeRef {
    TypeRef::named("java.lang.String")
}

/// A small library (`java.*`, `q`) plus a source package `p`.
pub(super) fn declarations() -> DeclarationIndex {
    let mut index = DeclarationIndex::new();
    index
        .add_library("java.lang", TypeDecl::class("Object"))
        .add_library("java.lang", TypeDecl::class("String"))
        .add_library(
            "java.lang",
            TypeDecl::interface("Comparable")
                .with_type_parameters(vec![TypeParamDecl::new("T", vec![])]),
        )
        .add_library(
            "java.util",
            TypeDecl::interface("List").with_type_parameters(vec![TypeParamDecl::new("E", vec![])]),
        )
        .add_library(
            "java.util",
            TypeDecl::interface("Map")
                .with_type_parameters(vec![
                    TypeParamDecl::new("K", vec![]),
                    TypeParamDecl::new("V", vec![]),
                ])
                .with_member(TypeDecl::interface("Entry")),
        )
        .add_library("java.io", TypeDecl::class("IOException"))
        .add_library(
            "q",
            TypeDecl::class("Lib").with_field(FieldDecl::new("ints", TypeRef::array(int(), 1))),
        )
        .add_source("p", TypeDecl::new("Marker", TypeDeclKind::Annotation))
        .add_source("p", box_decl())
        .add_module("java.base");
    index
}

/// `class Box<T extends Comparable<T>>` with members of every kind.
pub(super) fn box_decl() -> TypeDecl {
    TypeDecl::class("Box")
        .with_type_parameters(vec![TypeParamDecl::new(
            "T",
            vec![TypeRef::generic(
                "java.lang.Comparable",
                vec![TypeRef::variable("T")],
            )],
        )])
        .with_superclass(TypeRef::named("java.lang.Object"))
        .with_field(FieldDecl::new("value", TypeRef::variable("T")))
        .with_field(FieldDecl::new("ints", TypeRef::array(int(), 1)))
        .with_method(MethodDecl::new("", vec![], TypeRef::Primitive(PrimitiveKind::Void)))
        .with_method(MethodDecl::new("get", vec![], TypeRef::variable("T")))
        .with_method(
            MethodDecl::new("read", vec![string()], TypeRef::Primitive(PrimitiveKind::Void))
                .with_thrown(vec![TypeRef::named("java.io.IOException")])
                .with_locals(vec![LocalDecl::new("i", int()), LocalDecl::new("i", string())]),
        )
        .with_method(
            MethodDecl::new("map", vec![TypeRef::variable("U")], TypeRef::variable("U"))
                .with_type_parameters(vec![TypeParamDecl::new("U", vec![])]),
        )
        .with_initializer(InitializerDecl {
            is_static: true,
            locals: vec![LocalDecl::new("tmp", int())],
        })
        .with_member(TypeDecl::class("Inner"))
        .with_local_type(1, TypeDecl::class(""))
        .with_local_type(2, TypeDecl::class("Helper"))
        .with_annotation(AnnotationDecl::new("p.Marker"))
}
