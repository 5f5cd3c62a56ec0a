//! Integration tests for selector encoding.

use selkit_encode::{
    EncodedSelector, SelectorFlags, SelectorToken, encode_negative_segment,
    encode_positive_segment, encode_selector, encode_selector_group, encode_selectors,
};
use selkit_selector::{CssSelector, SelectorParseError};

const NOT: SelectorFlags = SelectorFlags::NOT;
const ATTRIBUTE: SelectorFlags = SelectorFlags::ATTRIBUTE;
const ELEMENT: SelectorFlags = SelectorFlags::ELEMENT;
const CLASS: SelectorFlags = SelectorFlags::CLASS;

fn lit(value: &str) -> SelectorToken {
    SelectorToken::literal(value)
}

fn flag(flags: SelectorFlags) -> SelectorToken {
    SelectorToken::Flag(flags)
}

// Positive segment

#[test]
fn test_empty_selector_encodes_to_empty_sequence() {
    assert!(encode_selector(&CssSelector::new()).is_empty());
    assert!(encode_selector(&CssSelector::new().with_element("*")).is_empty());
}

#[test]
fn test_element_attributes_and_classes() {
    let selector = CssSelector::new()
        .with_element("div")
        .with_attribute("title", "x")
        .with_class("a")
        .with_class("b");
    assert_eq!(
        encode_selector(&selector),
        [lit("div"), lit("title"), lit("x"), flag(CLASS), lit("a"), lit("b")]
    );
}

#[test]
fn test_element_only() {
    let selector = CssSelector::new().with_element("my-widget");
    assert_eq!(encode_positive_segment(&selector), [lit("my-widget")]);
}

#[test]
fn test_no_class_flag_without_classes() {
    let selector = CssSelector::new()
        .with_element("input")
        .with_attribute("type", "text");
    let encoded = encode_positive_segment(&selector);
    assert_eq!(encoded, [lit("input"), lit("type"), lit("text")]);
    assert!(encoded.iter().all(|token| token.as_flag().is_none()));
}

#[test]
fn test_missing_element_leads_with_empty_string() {
    let selector = CssSelector::new().with_class("a");
    assert_eq!(
        encode_positive_segment(&selector),
        [lit(""), flag(CLASS), lit("a")]
    );
}

#[test]
fn test_universal_element_same_as_absent() {
    let universal = CssSelector::new().with_element("*").with_attribute("foo", "");
    let absent = CssSelector::new().with_attribute("foo", "");
    assert_eq!(encode_positive_segment(&universal), encode_positive_segment(&absent));
    assert_eq!(encode_positive_segment(&absent), [lit(""), lit("foo"), lit("")]);
}

#[test]
fn test_attribute_order_and_duplicates_preserved() {
    let selector = CssSelector::new()
        .with_attribute("b", "2")
        .with_attribute("a", "1")
        .with_attribute("b", "3");
    assert_eq!(
        encode_positive_segment(&selector),
        [lit(""), lit("b"), lit("2"), lit("a"), lit("1"), lit("b"), lit("3")]
    );
}

// Negative segment

#[test]
fn test_negated_attribute() {
    let negated = CssSelector::new().with_element("").with_attribute("disabled", "");
    assert_eq!(
        encode_negative_segment(&negated),
        [flag(NOT | ATTRIBUTE), lit("disabled"), lit("")]
    );
}

#[test]
fn test_negated_element_wins_over_attributes() {
    let negated = CssSelector::new()
        .with_element("span")
        .with_attribute("role", "tab")
        .with_class("x");
    assert_eq!(
        encode_negative_segment(&negated),
        [
            flag(NOT | ELEMENT),
            lit("span"),
            lit("role"),
            lit("tab"),
            flag(CLASS),
            lit("x"),
        ]
    );
}

#[test]
fn test_negated_element_alone() {
    let negated = CssSelector::new().with_element("span");
    assert_eq!(encode_negative_segment(&negated), [flag(NOT | ELEMENT), lit("span")]);
}

#[test]
fn test_negated_attribute_with_classes() {
    let negated = CssSelector::new()
        .with_attribute("hidden", "")
        .with_class("a")
        .with_class("b");
    assert_eq!(
        encode_negative_segment(&negated),
        [
            flag(NOT | ATTRIBUTE),
            lit("hidden"),
            lit(""),
            flag(CLASS),
            lit("a"),
            lit("b"),
        ]
    );
}

#[test]
fn test_negated_classes_only() {
    let negated = CssSelector::new().with_class("a").with_class("b");
    assert_eq!(
        encode_negative_segment(&negated),
        [flag(NOT | CLASS), lit("a"), lit("b")]
    );
}

#[test]
fn test_negated_universal_with_nothing_else_is_empty() {
    assert!(encode_negative_segment(&CssSelector::new()).is_empty());
    assert!(encode_negative_segment(&CssSelector::new().with_element("*")).is_empty());
}

// Full selector

#[test]
fn test_concatenation_of_segments() {
    let n1 = CssSelector::new().with_class("ghost");
    let n2 = CssSelector::new().with_attribute("disabled", "");
    let selector = CssSelector::new()
        .with_element("button")
        .with_class("primary")
        .with_negation(n1.clone())
        .with_negation(n2.clone());

    let mut expected = encode_positive_segment(&selector);
    expected.append(encode_negative_segment(&n1));
    expected.append(encode_negative_segment(&n2));

    let encoded = encode_selector(&selector);
    assert_eq!(encoded, expected);
    assert_eq!(
        encoded,
        [
            lit("button"),
            flag(CLASS),
            lit("primary"),
            flag(NOT | CLASS),
            lit("ghost"),
            flag(NOT | ATTRIBUTE),
            lit("disabled"),
            lit(""),
        ]
    );
}

#[test]
fn test_no_negations_equals_positive_segment() {
    let selector = CssSelector::new().with_element("a").with_attribute("href", "");
    assert_eq!(encode_selector(&selector), encode_positive_segment(&selector));
}

#[test]
fn test_empty_negation_contributes_nothing() {
    let selector = CssSelector::new()
        .with_element("div")
        .with_negation(CssSelector::new());
    assert_eq!(encode_selector(&selector), [lit("div")]);
}

// Group encoding

#[test]
fn test_group_preserves_comma_order() {
    let group = encode_selector_group("a, b").unwrap();
    assert_eq!(group, vec![EncodedSelector::from(vec![lit("a")]), vec![lit("b")].into()]);
}

#[test]
fn test_group_from_text() {
    let group = encode_selector_group("button.primary:not(.ghost), [role=tab]:not(span)").unwrap();
    assert_eq!(group.len(), 2);
    assert_eq!(
        group[0],
        [lit("button"), flag(CLASS), lit("primary"), flag(NOT | CLASS), lit("ghost")]
    );
    assert_eq!(
        group[1],
        [lit(""), lit("role"), lit("tab"), flag(NOT | ELEMENT), lit("span")]
    );
}

#[test]
fn test_universal_and_bare_attribute_text_encode_identically() {
    assert_eq!(
        encode_selector_group("*[foo]").unwrap(),
        encode_selector_group("[foo]").unwrap()
    );
}

#[test]
fn test_negation_only_text() {
    let group = encode_selector_group(":not(.hidden)").unwrap();
    assert_eq!(
        group,
        vec![EncodedSelector::from(vec![lit(""), flag(NOT | CLASS), lit("hidden")])]
    );
}

#[test]
fn test_negation_only_selector_keeps_element_slot() {
    let selector = CssSelector::new().with_negation(CssSelector::new().with_class("hidden"));
    assert_eq!(encode_positive_segment(&selector), [lit("")]);
    assert_eq!(
        encode_selector(&selector),
        [lit(""), flag(NOT | CLASS), lit("hidden")]
    );

    for raw in [":not(.hidden)", "*:not([disabled])", ":not(span)"] {
        let encoded = encode_selector_group(raw).unwrap().remove(0);
        let first = encoded.tokens().first().and_then(SelectorToken::as_literal);
        assert_eq!(first, Some(""), "{raw}");
    }
}

#[test]
fn test_encode_selectors_matches_per_selector_encoding() {
    let selectors = [
        CssSelector::new().with_element("a"),
        CssSelector::new().with_class("x"),
    ];
    let group = encode_selectors(&selectors);
    assert_eq!(group, vec![encode_selector(&selectors[0]), encode_selector(&selectors[1])]);
}

#[test]
fn test_group_propagates_parse_errors() {
    assert_eq!(
        encode_selector_group("a:not(:not(b))"),
        Err(SelectorParseError::NestedNot { offset: 6 })
    );
    assert!(matches!(
        encode_selector_group("[unclosed"),
        Err(SelectorParseError::UnclosedAttribute { offset: 0 })
    ));
}

// Boundary serialization

#[test]
fn test_serializes_to_untyped_array() {
    let group = encode_selector_group("div[title=x].a:not(span)").unwrap();
    let json = serde_json::to_string(&group).unwrap();
    assert_eq!(json, r#"[["div","title","x",8,"a",5,"span"]]"#);
}

#[test]
fn test_display_names_flags() {
    let encoded = encode_selector_group("div.a:not([b])").unwrap().remove(0);
    assert_eq!(
        encoded.to_string(),
        r#"["div", CLASS, "a", NOT|ATTRIBUTE, "b", ""]"#
    );
}
