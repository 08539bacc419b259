//! Tests for the text case transforms

use pretty_assertions::assert_eq;
use tcv::converters::{
    to_camel_case, to_kebab_case, to_lower_case, to_pascal_case, to_snake_case, to_upper_case,
    TextCase,
};

#[test]
fn test_reference_examples() {
    assert_eq!(to_snake_case("helloWorld"), "hello_world");
    assert_eq!(to_camel_case("hello world"), "helloWorld");
    assert_eq!(to_kebab_case("Hello_World"), "hello-world");
    assert_eq!(to_pascal_case("hello-world"), "HelloWorld");
}

#[test]
fn test_upper_lower() {
    assert_eq!(to_upper_case("Mixed Case ß"), "MIXED CASE SS");
    assert_eq!(to_lower_case("Mixed CASE"), "mixed case");
}

#[test]
fn test_single_word() {
    assert_eq!(to_camel_case("WORD"), "word");
    assert_eq!(to_pascal_case("word"), "Word");
    assert_eq!(to_snake_case("word"), "word");
    assert_eq!(to_kebab_case("word"), "word");
}

#[test]
fn test_mixed_separators() {
    let input = "user_account-id  value";
    assert_eq!(to_camel_case(input), "userAccountIdValue");
    assert_eq!(to_pascal_case(input), "UserAccountIdValue");
    assert_eq!(to_snake_case(input), "user_account_id_value");
    assert_eq!(to_kebab_case(input), "user-account-id-value");
}

#[test]
fn test_selector_parsing() {
    for name in ["upper", "lower", "camel", "snake", "kebab", "pascal"] {
        let case: TextCase = name.parse().unwrap();
        assert_eq!(case.as_str(), name);
    }
    assert!("Upper".parse::<TextCase>().is_err());
}

#[test]
fn test_apply_matches_functions() {
    let input = "some input_text";
    assert_eq!(TextCase::Camel.apply(input), to_camel_case(input));
    assert_eq!(TextCase::Kebab.apply(input), to_kebab_case(input));
}
