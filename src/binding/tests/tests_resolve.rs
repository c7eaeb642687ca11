#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use parking_lot::Mutex;
use rstest::rstest;

use super::fixture::declarations;
use crate::base::PrimitiveKind;
use crate::binding::*;

fn resolve(resolver: &BindingResolver<'_>, key: &str) -> Binding {
    let id = resolver.resolve_key(key).unwrap();
    resolver.get(id).unwrap()
}

fn reference(binding: &Binding) -> &ReferenceType {
    match &binding.data {
        BindingData::Type(TypeBinding::Reference(reference)) => reference,
        other => panic!("expected a reference type, got {other:?}"),
    }
}

#[derive(Default)]
struct Recorder {
    resolved: Mutex<Vec<String>>,
    unresolved: Mutex<Vec<String>>,
}

impl ResolutionObserver for Recorder {
    fn resolved(&self, key: &str, _id: BindingId) {
        self.resolved.lock().push(key.to_string());
    }

    fn unresolved(&self, key: &str) {
        self.unresolved.lock().push(key.to_string());
    }
}

// ============================================================================
// TYPES
// ============================================================================

#[rstest]
#[case::source("Lp/Box;", Origin::Source)]
#[case::member("Lp/Box$Inner;", Origin::Source)]
#[case::anonymous("Lp/Box$1;", Origin::Source)]
#[case::local("Lp/Box$2Helper;", Origin::Source)]
#[case::library("Ljava/lang/String;", Origin::Library)]
#[case::library_member("Ljava/util/Map$Entry;", Origin::Library)]
fn test_declared_type_origin(#[case] key: &str, #[case] origin: Origin) {
    let index = declarations();
    let resolver = BindingResolver::new(&index);
    let binding = resolve(&resolver, key);

    assert_eq!(binding.kind(), BindingKind::Type);
    assert_eq!(binding.origin, origin);
    assert!(!binding.recovered);
    assert_eq!(binding.key, key);
}

#[test]
fn test_member_type_links_enclosing() {
    let index = declarations();
    let resolver = BindingResolver::new(&index);
    let entry = resolve(&resolver, "Ljava/util/Map$Entry;");
    let map = resolver.resolve_key("Ljava/util/Map;").unwrap();

    assert_eq!(reference(&entry).enclosing, Some(map));
    assert_eq!(
        reference(&entry).compound_name,
        ["java", "util", "Map", "Entry"]
    );
}

#[test]
fn test_unknown_local_type_ordinal_is_recovered() {
    let index = declarations();
    let resolver = BindingResolver::new(&index);
    let binding = resolve(&resolver, "Lp/Box$3;");
    assert!(binding.recovered);
    assert_eq!(binding.origin, Origin::Synthesized);
}

#[test]
fn test_generic_declaration_with_recursive_bound() {
    let index = declarations();
    let resolver = BindingResolver::new(&index);
    let box_id = resolver.resolve_key("Lp/Box;").unwrap();
    let boxed = resolver.get(box_id).unwrap();
    let reference = reference(&boxed);

    assert_eq!(reference.type_parameters.len(), 1);
    let t = reference.type_parameters[0];
    let Some(TypeBinding::TypeVariable {
        name,
        rank,
        declaring,
        bounds,
    }) = resolver.get(t).unwrap().as_type().cloned()
    else {
        panic!("expected a type variable");
    };
    assert_eq!(name, "T");
    assert_eq!(rank, 0);
    assert_eq!(declaring, Some(box_id));
    assert_eq!(bounds.len(), 1);

    // Comparable<T> refers back to the same variable
    let bound = resolver.get(bounds[0]).unwrap();
    let Some(TypeBinding::Parameterized { arguments, .. }) = bound.as_type() else {
        panic!("expected a parameterized bound");
    };
    assert_eq!(arguments, &vec![t]);

    let superclass = resolver.get(reference.superclass.unwrap()).unwrap();
    assert_eq!(
        superclass.key, "Ljava/lang/Object;",
        "superclass resolves through the library"
    );
}

#[test]
fn test_declared_type_variable_keys() {
    let index = declarations();
    let resolver = BindingResolver::new(&index);
    let box_id = resolver.resolve_key("Lp/Box;").unwrap();
    let t = resolver.resolve_key("Lp/Box;:TT;").unwrap();
    assert_eq!(resolver.get(box_id).unwrap().type_parameters(), &[t]);

    let method = resolver.resolve_key("Lp/Box;.map<U:>(TU;)TU;").unwrap();
    let u = resolver.resolve_key("Lp/Box;.map<U:>(TU;)TU;:TU;").unwrap();
    assert_eq!(resolver.get(method).unwrap().type_parameters(), &[u]);

    assert_eq!(resolver.resolve_key("Lp/Box;:TX;"), None);
}

#[test]
fn test_synthesized_shapes() {
    let index = declarations();
    let resolver = BindingResolver::new(&index);

    let list = resolver.resolve_key("Ljava/util/List;").unwrap();
    let string = resolver.resolve_key("Ljava/lang/String;").unwrap();

    let parameterized = resolve(&resolver, "Ljava/util/List<Ljava/lang/String;>;");
    assert_eq!(
        parameterized.as_type(),
        Some(&TypeBinding::Parameterized {
            generic: list,
            arguments: vec![string],
            enclosing: None,
        })
    );
    assert_eq!(parameterized.origin, Origin::Synthesized);

    let raw = resolve(&resolver, "Ljava/util/List<>;");
    assert_eq!(raw.as_type(), Some(&TypeBinding::Raw { generic: list }));

    let array = resolve(&resolver, "[[I");
    let Some(&TypeBinding::Array {
        element,
        dimensions,
    }) = array.as_type()
    else {
        panic!("expected an array");
    };
    assert_eq!(dimensions, 2);
    assert_eq!(
        resolver.get(element).unwrap().as_type(),
        Some(&TypeBinding::Primitive(PrimitiveKind::Int))
    );

    let wildcard = resolve(&resolver, "Ljava/util/List<*>;");
    let Some(TypeBinding::Parameterized { arguments, .. }) = wildcard.as_type() else {
        panic!("expected a parameterized type");
    };
    assert_eq!(
        resolver.get(arguments[0]).unwrap().as_type(),
        Some(&TypeBinding::Wildcard {
            kind: WildcardKind::Unbounded,
            bound: None,
        })
    );
}

#[test]
fn test_recovery_for_unknown_types() {
    let index = declarations();
    let resolver = BindingResolver::new(&index);
    let missing = resolve(&resolver, "Lz/Missing;");
    assert!(missing.recovered);
    assert_eq!(reference(&missing).compound_name, ["z", "Missing"]);

    let strict = BindingResolver::with_options(
        &index,
        ResolverOptions {
            recovery: false,
            ..ResolverOptions::default()
        },
    );
    assert_eq!(strict.resolve_key("Lz/Missing;"), None);
    assert_eq!(strict.resolve_key("Ljava/util/List<Lz/Missing;>;"), None);
    assert!(strict.resolve_key("Ljava/util/List;").is_some());
}

#[rstest]
#[case("Ljava/lang/String")]
#[case("")]
#[case("Lp/Box;.get(")]
fn test_malformed_keys_resolve_to_none(#[case] key: &str) {
    let index = declarations();
    let resolver = BindingResolver::new(&index);
    assert_eq!(resolver.resolve_key(key), None);
    assert_eq!(resolver.resolve(&DecodedKey::decode(key)), None);
}

// ============================================================================
// MEMBERS
// ============================================================================

#[test]
fn test_method_binding() {
    let index = declarations();
    let resolver = BindingResolver::new(&index);
    let box_id = resolver.resolve_key("Lp/Box;").unwrap();
    let read = resolve(
        &resolver,
        "Lp/Box;.read(Ljava/lang/String;)V^Ljava/io/IOException;",
    );
    let method = read.as_method().unwrap();

    assert_eq!(read.origin, Origin::Source);
    assert_eq!(method.name, "read");
    assert_eq!(method.declaring, box_id);
    assert_eq!(method.parameters.len(), 1);
    assert_eq!(method.thrown.len(), 1);
    assert_eq!(
        resolver.get(method.thrown[0]).unwrap().key,
        "Ljava/io/IOException;"
    );
    assert_eq!(
        resolver.get(method.return_type).unwrap().as_type(),
        Some(&TypeBinding::Primitive(PrimitiveKind::Void))
    );
}

#[test]
fn test_method_keys_without_thrown_share_the_binding() {
    let index = declarations();
    let resolver = BindingResolver::new(&index);
    let full = resolver
        .resolve_key("Lp/Box;.read(Ljava/lang/String;)V^Ljava/io/IOException;")
        .unwrap();
    let short = resolver.resolve_key("Lp/Box;.read(Ljava/lang/String;)V").unwrap();
    assert_eq!(full, short);
}

#[test]
fn test_constructor_and_generic_method() {
    let index = declarations();
    let resolver = BindingResolver::new(&index);
    let constructor = resolve(&resolver, "Lp/Box;.()V");
    assert!(constructor.as_method().unwrap().is_constructor());

    let get = resolve(&resolver, "Lp/Box;.get()TT;");
    let t = resolver.resolve_key("Lp/Box;:TT;").unwrap();
    assert_eq!(get.as_method().unwrap().return_type, t);

    let map = resolve(&resolver, "Lp/Box;.map<U:>(TU;)TU;");
    let method = map.as_method().unwrap();
    assert_eq!(method.parameters, method.type_parameters);
    assert_eq!(method.return_type, method.type_parameters[0]);
}

#[test]
fn test_unknown_method_recovers_only_with_recovery() {
    let index = declarations();
    let resolver = BindingResolver::new(&index);
    let missing = resolve(&resolver, "Lp/Box;.nothing(I)V");
    assert!(missing.recovered);
    assert_eq!(missing.as_method().unwrap().parameters.len(), 1);

    let strict = BindingResolver::with_options(
        &index,
        ResolverOptions {
            recovery: false,
            notify_unresolved: false,
        },
    );
    assert_eq!(strict.resolve_key("Lp/Box;.nothing(I)V"), None);
}

#[test]
fn test_field_bindings() {
    let index = declarations();
    let resolver = BindingResolver::new(&index);
    let value = resolve(&resolver, "Lp/Box;.value)TT;");
    let variable = value.as_variable().unwrap();
    let t = resolver.resolve_key("Lp/Box;:TT;").unwrap();

    assert!(variable.is_field);
    assert_eq!(variable.ty, t);
    assert_eq!(variable.declaring_method, None);

    // a field key with the wrong type does not name the declared field
    let wrong = resolve(&resolver, "Lp/Box;.value)I");
    assert!(wrong.recovered);
}

#[test]
fn test_local_variable_occurrences() {
    let index = declarations();
    let resolver = BindingResolver::new(&index);
    let method = resolver.resolve_key("Lp/Box;.read(Ljava/lang/String;)V").unwrap();
    let string = resolver.resolve_key("Ljava/lang/String;").unwrap();

    let first = resolve(&resolver, "Lp/Box;.read(Ljava/lang/String;)V#i");
    let second = resolve(&resolver, "Lp/Box;.read(Ljava/lang/String;)V#i#1");
    let first = first.as_variable().unwrap();
    let second = second.as_variable().unwrap();

    assert!(!first.is_field);
    assert_eq!(first.declaring_method, Some(method));
    assert_eq!(first.occurrence, 0);
    assert_eq!(second.occurrence, 1);
    assert_eq!(second.ty, string);

    assert_eq!(
        resolver.resolve_key("Lp/Box;.read(Ljava/lang/String;)V#i#2"),
        None
    );
}

#[test]
fn test_initializer_locals() {
    let index = declarations();
    let resolver = BindingResolver::new(&index);
    let tmp = resolve(&resolver, "Lp/Box;{1}#tmp");
    let variable = tmp.as_variable().unwrap();
    assert_eq!(variable.declaring_method, None);
    assert!(variable.declaring_type.is_some());

    assert_eq!(resolver.resolve_key("Lp/Box;{2}#tmp"), None);
    assert_eq!(resolver.resolve_key("Lp/Box;{1}"), None);
}

#[test]
fn test_annotation_binding() {
    let index = declarations();
    let resolver = BindingResolver::new(&index);
    let box_id = resolver.resolve_key("Lp/Box;").unwrap();
    let marker = resolver.resolve_key("Lp/Marker;").unwrap();

    let annotation = resolve(&resolver, "Lp/Box;@Lp/Marker;");
    assert_eq!(annotation.kind(), BindingKind::Annotation);
    assert!(!annotation.recovered);
    assert_eq!(
        annotation.data,
        BindingData::Annotation {
            annotation_type: marker,
            annotated: box_id,
        }
    );

    let absent = resolve(&resolver, "Ljava/lang/String;@Lp/Marker;");
    assert!(absent.recovered);
}

// ============================================================================
// PACKAGES, MODULES, IMPORTS
// ============================================================================

#[test]
fn test_packages_and_modules() {
    let index = declarations();
    let resolver = BindingResolver::new(&index);

    let util = resolve(&resolver, "java/util");
    assert_eq!(util.kind(), BindingKind::Package);
    assert!(!util.recovered);
    assert!(resolve(&resolver, "nowhere/at/all").recovered);

    let module = resolve(&resolver, "\"java.base");
    assert_eq!(module.kind(), BindingKind::Module);
    assert_eq!(resolver.resolve_key("\"java.desktop"), None);
}

#[rstest]
#[case::single_type("java.util.List", false, false, Some("Ljava/util/List;"))]
#[case::member_type("java.util.Map.Entry", false, false, Some("Ljava/util/Map$Entry;"))]
#[case::on_demand_package("java.util", true, false, Some("java/util"))]
#[case::on_demand_type("java.util.Map", true, false, Some("Ljava/util/Map;"))]
#[case::single_static("java.lang.String.valueOf", false, true, Some("Ljava/lang/String;"))]
#[case::static_on_demand("java.lang.String", true, true, Some("Ljava/lang/String;"))]
#[case::unknown("z.Nothing", false, false, None)]
fn test_import_targets(
    #[case] name: &str,
    #[case] on_demand: bool,
    #[case] is_static: bool,
    #[case] target_key: Option<&str>,
) {
    let index = declarations();
    let resolver = BindingResolver::new(&index);
    let import = resolver.get(resolver.resolve_import(name, on_demand, is_static).unwrap()).unwrap();

    let BindingData::Import {
        target,
        on_demand: d,
        is_static: s,
        ..
    } = &import.data
    else {
        panic!("expected an import");
    };
    assert_eq!((*d, *s), (on_demand, is_static));
    assert_eq!(import.recovered, target_key.is_none());
    assert_eq!(
        target.map(|t| resolver.get(t).unwrap().key),
        target_key.map(str::to_string)
    );
}

#[test]
fn test_invalid_import_names() {
    let index = declarations();
    let resolver = BindingResolver::new(&index);
    assert_eq!(resolver.resolve_import("", false, false), None);
    assert_eq!(resolver.resolve_import("java.1util", false, false), None);
}

// ============================================================================
// CACHING, PARALLELISM, OBSERVERS
// ============================================================================

#[test]
fn test_resolve_key_is_cached() {
    let index = declarations();
    let resolver = BindingResolver::new(&index);
    let first = resolver.resolve_key("[Ljava/lang/String;").unwrap();
    let len = resolver.table().len();
    let second = resolver.resolve_key("[Ljava/lang/String;").unwrap();

    assert_eq!(first, second);
    assert_eq!(resolver.table().len(), len);
}

#[test]
fn test_resolve_all_matches_sequential_resolution() {
    let index = declarations();
    let resolver = BindingResolver::new(&index);
    let keys = [
        "Lp/Box;",
        "Ljava/util/List<Ljava/lang/String;>;",
        "broken;",
        "Lp/Box;.get()TT;",
        "Lp/Box;",
    ];
    let results = resolver.resolve_all(&keys);

    assert_eq!(results.len(), keys.len());
    assert_eq!(results[2], None);
    assert_eq!(results[0], results[4]);
    for (key, result) in keys.iter().zip(&results) {
        assert_eq!(resolver.resolve_key(key), *result);
    }
}

#[test]
fn test_observer_notifications() {
    let index = declarations();
    let recorder = Arc::new(Recorder::default());
    let resolver = BindingResolver::with_options(
        &index,
        ResolverOptions {
            recovery: false,
            notify_unresolved: true,
        },
    )
    .with_observer(recorder.clone());

    resolver.resolve_key("Lp/Box;");
    resolver.resolve_key("Lz/Missing;");
    resolver.resolve_key("Lbroken");

    assert_eq!(*recorder.resolved.lock(), vec!["Lp/Box;".to_string()]);
    assert_eq!(
        *recorder.unresolved.lock(),
        vec!["Lz/Missing;".to_string(), "Lbroken".to_string()]
    );
}

#[test]
fn test_unresolved_notifications_can_be_silenced() {
    let index = declarations();
    let recorder = Arc::new(Recorder::default());
    let resolver = BindingResolver::with_options(
        &index,
        ResolverOptions {
            recovery: false,
            notify_unresolved: false,
        },
    )
    .with_observer(recorder.clone());

    resolver.resolve_key("Lz/Missing;");
    assert!(recorder.unresolved.lock().is_empty());
}
