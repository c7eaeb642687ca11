use super::*;

#[test]
fn test_source_range_valid() {
    let range = SourceRange::from_raw(4, 10).unwrap();
    assert!(range.is_known());
    assert_eq!(range.start(), 4);
    assert_eq!(range.length(), 10);
    assert_eq!(range.end(), 14);
}

#[test]
fn test_source_range_unknown_sentinel() {
    let range = SourceRange::from_raw(-1, 0).unwrap();
    assert!(!range.is_known());
    assert_eq!(range, SourceRange::UNKNOWN);
    assert_eq!(range.start(), -1);
    assert_eq!(range.length(), 0);
}

#[test]
fn test_source_range_rejects_mixed() {
    assert!(SourceRange::from_raw(-1, 3).is_none());
    assert!(SourceRange::from_raw(3, -1).is_none());
    assert!(SourceRange::from_raw(-5, 0).is_none());
}

#[test]
fn test_source_range_covers() {
    let outer = SourceRange::from_raw(0, 20).unwrap();
    let inner = SourceRange::from_raw(5, 5).unwrap();
    assert!(outer.covers(&inner));
    assert!(!inner.covers(&outer));
    assert!(!outer.covers(&SourceRange::UNKNOWN));
}

#[test]
fn test_is_identifier() {
    assert!(is_identifier("foo"));
    assert!(is_identifier("_bar1"));
    assert!(is_identifier("$proxy"));
    assert!(is_identifier("größe"));
    assert!(!is_identifier(""));
    assert!(!is_identifier("1abc"));
    assert!(!is_identifier("a.b"));
    assert!(!is_identifier("a b"));
}

#[test]
fn test_split_compound() {
    let parts = split_compound("java.util.List", &['.']);
    assert_eq!(parts, vec!["java", "util", "List"]);
    let parts = split_compound("java/util/Map$Entry", &['/', '$']);
    assert_eq!(parts, vec!["java", "util", "Map", "Entry"]);
    assert!(split_compound("", &['.']).is_empty());
}

#[test]
fn test_primitive_kind_mappings() {
    for kind in PrimitiveKind::ALL {
        assert_eq!(PrimitiveKind::from_keyword(kind.keyword()), Some(kind));
        assert_eq!(PrimitiveKind::from_key_char(kind.key_char()), Some(kind));
    }
    assert_eq!(PrimitiveKind::Long.key_char(), 'J');
    assert_eq!(PrimitiveKind::Boolean.key_char(), 'Z');
    assert!(PrimitiveKind::from_key_char('L').is_none());
    assert!(PrimitiveKind::from_keyword("String").is_none());
}
