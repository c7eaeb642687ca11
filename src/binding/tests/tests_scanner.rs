use rstest::rstest;

use crate::binding::key::{KeyScanner, Token};

fn tokens(key: &str) -> Vec<Token> {
    let mut scanner = KeyScanner::new(key);
    let mut out = Vec::new();
    loop {
        let token = scanner.next_token();
        out.push(token);
        if matches!(token, Token::End | Token::Error) {
            return out;
        }
    }
}

fn texts(key: &str) -> Vec<(Token, String)> {
    let mut scanner = KeyScanner::new(key);
    let mut out = Vec::new();
    loop {
        let token = scanner.next_token();
        if matches!(token, Token::End | Token::Error) {
            return out;
        }
        out.push((token, scanner.text().to_string()));
    }
}

#[rstest]
#[case::package("java/util", vec![Token::Package, Token::End])]
#[case::module("\"java.base", vec![Token::Module, Token::End])]
#[case::base("I", vec![Token::BaseType, Token::End])]
#[case::array("[[J", vec![Token::Array, Token::BaseType, Token::End])]
#[case::class("Ljava/lang/String;", vec![Token::Type, Token::TypeEnd, Token::End])]
#[case::member(
    "Ljava/util/Map$Entry;",
    vec![Token::Type, Token::MemberType, Token::TypeEnd, Token::End]
)]
#[case::parameterized(
    "Ljava/util/List<Ljava/lang/String;>;",
    vec![
        Token::Type, Token::TypeArgsStart, Token::Type, Token::TypeEnd,
        Token::TypeArgsEnd, Token::TypeEnd, Token::End,
    ]
)]
#[case::raw(
    "Ljava/util/List<>;",
    vec![Token::Type, Token::TypeArgsStart, Token::TypeArgsEnd, Token::TypeEnd, Token::End]
)]
#[case::member_of_parameterized(
    "Lp/Outer<TT;>.Inner;",
    vec![
        Token::Type, Token::TypeArgsStart, Token::TypeVariable, Token::TypeArgsEnd,
        Token::MemberType, Token::TypeEnd, Token::End,
    ]
)]
#[case::wildcards(
    "Lp/X<*+Lp/A;-Lp/B;>;",
    vec![
        Token::Type, Token::TypeArgsStart, Token::Wildcard, Token::Wildcard, Token::Type,
        Token::TypeEnd, Token::Wildcard, Token::Type, Token::TypeEnd, Token::TypeArgsEnd,
        Token::TypeEnd, Token::End,
    ]
)]
#[case::field(
    "Lp/X;.count)I",
    vec![Token::Type, Token::TypeEnd, Token::Field, Token::BaseType, Token::End]
)]
#[case::method(
    "Lp/X;.foo(ILjava/lang/String;)V^Ljava/io/IOException;",
    vec![
        Token::Type, Token::TypeEnd, Token::Method, Token::ParamsStart, Token::BaseType,
        Token::Type, Token::TypeEnd, Token::ParamsEnd, Token::BaseType, Token::Thrown,
        Token::Type, Token::TypeEnd, Token::End,
    ]
)]
#[case::constructor(
    "Lp/X;.()V",
    vec![
        Token::Type, Token::TypeEnd, Token::Method, Token::ParamsStart, Token::ParamsEnd,
        Token::BaseType, Token::End,
    ]
)]
#[case::generic_method(
    "Lp/X;.id<T:Ljava/lang/Object;U::Lp/I;>(TT;)TU;",
    vec![
        Token::Type, Token::TypeEnd, Token::Method, Token::TypeParamsStart,
        Token::TypeParameter, Token::Type, Token::TypeEnd, Token::TypeParameter,
        Token::Bound, Token::Type, Token::TypeEnd, Token::TypeParamsEnd, Token::ParamsStart,
        Token::TypeVariable, Token::ParamsEnd, Token::TypeVariable, Token::End,
    ]
)]
#[case::initializer(
    "Lp/X;{1}",
    vec![Token::Type, Token::TypeEnd, Token::Initializer, Token::End]
)]
#[case::array_parameter(
    "Lp/X;.f([I[Lp/Y;)V",
    vec![
        Token::Type, Token::TypeEnd, Token::Method, Token::ParamsStart, Token::Array,
        Token::BaseType, Token::Array, Token::Type, Token::TypeEnd, Token::ParamsEnd,
        Token::BaseType, Token::End,
    ]
)]
#[case::type_variable_of_method(
    "Lp/X;.m<U:>()V:TU;",
    vec![
        Token::Type, Token::TypeEnd, Token::Method, Token::TypeParamsStart,
        Token::TypeParameter, Token::TypeParamsEnd, Token::ParamsStart, Token::ParamsEnd,
        Token::BaseType, Token::TypeVariableOf, Token::TypeVariable, Token::End,
    ]
)]
#[case::initializer_local(
    "Lp/X;{1}#i",
    vec![Token::Type, Token::TypeEnd, Token::Initializer, Token::LocalVariable, Token::End]
)]
#[case::local_occurrence(
    "Lp/X;.run()V#i#1",
    vec![
        Token::Type, Token::TypeEnd, Token::Method, Token::ParamsStart, Token::ParamsEnd,
        Token::BaseType, Token::LocalVariable, Token::Occurrence, Token::End,
    ]
)]
#[case::type_variable_of_class(
    "Lp/X;:TT;",
    vec![Token::Type, Token::TypeEnd, Token::TypeVariableOf, Token::TypeVariable, Token::End]
)]
#[case::annotation(
    "Lp/X;@Lp/Ann;",
    vec![Token::Type, Token::TypeEnd, Token::Annotation, Token::Type, Token::TypeEnd, Token::End]
)]
fn test_token_sequence(#[case] key: &str, #[case] expected: Vec<Token>) {
    assert_eq!(tokens(key), expected);
}

#[rstest]
#[case::empty("")]
#[case::missing_terminator("Ljava/lang/String")]
#[case::unclosed_arguments("Ljava/util/List<Ljava/lang/String;")]
#[case::unclosed_params("Lp/X;.foo(I")]
#[case::stray_close("Lp/X;>")]
#[case::empty_class_name("L;")]
#[case::empty_segment("Ljava//String;")]
#[case::dollar_after_arguments("Lp/X<I>$Y;")]
#[case::bad_signature_char("Lp/X;.f)Q")]
#[case::member_without_terminator("Lp/X;.foo")]
#[case::bad_initializer("Lp/X;{a}")]
#[case::type_variable_unterminated("Lp/X<TT>;")]
#[case::package_with_delimiter("java/ut;il")]
fn test_malformed_keys_end_in_error(#[case] key: &str) {
    assert_eq!(tokens(key).last(), Some(&Token::Error));
}

#[test]
fn test_token_text_excludes_delimiters() {
    assert_eq!(
        texts("Ljava/util/Map$Entry;"),
        vec![
            (Token::Type, "java/util/Map".to_string()),
            (Token::MemberType, "Entry".to_string()),
            (Token::TypeEnd, ";".to_string()),
        ]
    );
    assert_eq!(
        texts("Lp/X;.id<T:>(TT;)V")
            .into_iter()
            .filter(|(t, _)| matches!(t, Token::Method | Token::TypeParameter | Token::TypeVariable))
            .collect::<Vec<_>>(),
        vec![
            (Token::Method, "id".to_string()),
            (Token::TypeParameter, "T".to_string()),
            (Token::TypeVariable, "T".to_string()),
        ]
    );
}

#[test]
fn test_array_text_counts_dimensions() {
    let mut scanner = KeyScanner::new("[[[I");
    assert_eq!(scanner.next_token(), Token::Array);
    assert_eq!(scanner.text().len(), 3);
}

#[test]
fn test_error_is_sticky() {
    let mut scanner = KeyScanner::new("L;");
    assert_eq!(scanner.next_token(), Token::Error);
    assert_eq!(scanner.next_token(), Token::Error);
    assert_eq!(scanner.token(), Token::Error);
}

#[test]
fn test_type_parameter_named_like_a_signature() {
    // `L` and `T` start both signatures and identifiers
    assert_eq!(
        tokens("Lp/X;.m<T:Lx:>()V"),
        vec![
            Token::Type,
            Token::TypeEnd,
            Token::Method,
            Token::TypeParamsStart,
            Token::TypeParameter,
            Token::TypeParameter,
            Token::TypeParamsEnd,
            Token::ParamsStart,
            Token::ParamsEnd,
            Token::BaseType,
            Token::End,
        ]
    );
}
