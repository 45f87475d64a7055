//! Integration tests for the attribute serializer.

use phat_common::warning::has_warned;
use phat_html::{
    AttrValue, Markup, NamePolicy, attrs, build_attribute_string, parse_attribute_string,
};

/// Helper to serialize a single name/value pair
fn attr(name: impl Into<AttrValue>, value: impl Into<AttrValue>) -> String {
    build_attribute_string(&name.into(), &value.into())
}

/// Helper to build an ordered map value
fn map(pairs: Vec<(&str, AttrValue)>) -> AttrValue {
    pairs.into_iter().collect()
}

#[test]
fn test_boolean_collapsing() {
    assert_eq!(attr("disabled", true), "disabled");
    assert_eq!(attr("disabled", false), "");
    assert_eq!(attr("disabled", ""), "disabled");
}

#[test]
fn test_null_drops_attribute() {
    assert_eq!(attr("title", AttrValue::Null), "");
    assert_eq!(attr(AttrValue::Null, "x"), "");
    assert_eq!(attr(true, "x"), "");
}

#[test]
fn test_values_are_single_quoted_and_escaped() {
    assert_eq!(attr("title", "it's"), "title='it&apos;s'");
    assert_eq!(
        attr("title", r#"a<b & "c""#),
        "title='a&lt;b &amp; &quot;c&quot;'"
    );
    assert_eq!(attr("title", "&copy; kept"), "title='&copy; kept'");
}

#[test]
fn test_map_preserves_order() {
    let set = map(vec![
        ("id", "x".into()),
        ("class", AttrValue::from(["a", "b"])),
    ]);
    assert_eq!(attrs(&set), "id='x' class='a b'");
}

#[test]
fn test_map_skips_absent_attributes() {
    let set = map(vec![
        ("id", "x".into()),
        ("hidden", false.into()),
        ("title", AttrValue::Null),
        ("checked", true.into()),
    ]);
    assert_eq!(attrs(&set), "id='x' checked");
}

#[test]
fn test_positional_list_of_names() {
    assert_eq!(attrs(&AttrValue::from(["async", "defer"])), "async defer");
}

#[test]
fn test_list_of_names_shares_value() {
    assert_eq!(attr(AttrValue::from(["a", "b"]), "x"), "a='x' b='x'");
}

#[test]
fn test_numeric_keys_are_positions() {
    let set = map(vec![("0", "async".into()), ("id", "x".into())]);
    assert_eq!(attrs(&set), "async id='x'");
    assert_eq!(attr(3, "hidden"), "hidden");
}

#[test]
fn test_stringified_fragment_is_reparsed() {
    assert_eq!(attr(r#"title="x" hidden"#, "ignored"), "title='x' hidden");
    assert_eq!(attrs(&"async defer".into()), "async defer");
    assert_eq!(attrs(&"  lang=en ".into()), "lang='en'");
}

#[test]
fn test_fragment_name_reports_ignored_value() {
    assert_eq!(attr("data x", "v"), "data x");
    assert!(has_warned(
        "Attributes",
        "ignoring value for attribute fragment 'data x'"
    ));

    assert_eq!(attrs(&"data y".into()), "data y");
    assert!(!has_warned(
        "Attributes",
        "ignoring value for attribute fragment 'data y'"
    ));
}

#[test]
fn test_names_are_sanitized() {
    assert_eq!(attr("on<click", "x"), "onclick='x'");
    assert_eq!(attr("a>b", "x"), "a='x'");
    assert_eq!(attr("  data-x  ", "1"), "data-x='1'");
}

#[test]
fn test_invalid_name_is_dropped() {
    assert_eq!(attr("!!!", "x"), "");
    assert_eq!(attr("", "x"), "");
    let set = map(vec![("$", "x".into()), ("id", "y".into())]);
    assert_eq!(attrs(&set), "id='y'");
}

#[test]
fn test_numbers_and_json_values() {
    assert_eq!(attr("data-n", 5), "data-n='5'");
    assert_eq!(attr("data-f", 1.5), "data-f='1.5'");
    assert_eq!(attr("data-x", map(vec![("a", 1.into())])), r#"data-x='{"a":1}'"#);
    assert_eq!(
        attr("data-x", AttrValue::from(["it's", "<b>"])),
        r#"data-x='["it&apos;s","\u003cb\u003e"]'"#
    );
}

#[test]
fn test_delimited_lists() {
    assert_eq!(
        attr("accept", AttrValue::from(["image/png", "image/gif"])),
        "accept='image/png,image/gif'"
    );
    let nested = AttrValue::List(vec![AttrValue::from(["a", "b"]), "c".into()]);
    assert_eq!(attr("class", nested), "class='a b c'");
    assert_eq!(attr("CLASS", AttrValue::from(["a", "b"])), "CLASS='a b'");
}

#[test]
fn test_empty_list_value_collapses() {
    assert_eq!(attr("class", AttrValue::List(Vec::new())), "class");
}

#[test]
fn test_deferred_name_and_value() {
    let name = AttrValue::deferred(|| "title".into());
    let value = AttrValue::deferred(|| AttrValue::deferred(|| "x".into()));
    assert_eq!(build_attribute_string(&name, &value), "title='x'");
    assert_eq!(attr("hidden", AttrValue::deferred(|| false.into())), "");
}

#[test]
fn test_strict_name_policy() {
    let strict = Markup::new().with_name_policy(NamePolicy::RequireLetterStart);
    assert_eq!(strict.attrs(&"9lives".into(), &"x".into()), "");
    assert_eq!(strict.attrs(&"_x".into(), &"y".into()), "_x='y'");
    assert_eq!(Markup::new().attrs(&"9lives".into(), &"x".into()), "9lives='x'");
}

#[test]
fn test_parse_then_serialize() {
    let parsed = parse_attribute_string(r#"<a href="x" target=_blank >"#);
    assert_eq!(attrs(&parsed.into()), "href='x' target='_blank'");

    let parsed = parse_attribute_string(r#"<a target=_blank href="x">"#);
    assert_eq!(attrs(&parsed.into()), "target='_blank' href='x'");
}

#[test]
fn test_parse_then_serialize_bare_value_before_bracket() {
    // The closing `>` belongs to the bare value and is escaped on output.
    let parsed = parse_attribute_string(r#"<a href="x" target=_blank>"#);
    assert_eq!(attrs(&parsed.into()), "href='x' target='_blank&gt;'");
}

#[test]
fn test_parse_then_serialize_keeps_booleans() {
    let parsed = parse_attribute_string(r#"<input type="checkbox" checked name='n'>"#);
    assert_eq!(attrs(&parsed.into()), "type='checkbox' checked name='n'");
}
