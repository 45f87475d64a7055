//! Integration tests for attribute value encoding and decoding.

use phat_html::{AttrValue, Encoded, decode, encode, encode_with};

#[test]
fn test_encode_strings() {
    assert_eq!(encode(&"plain".into(), None), "plain");
    assert_eq!(encode(&"".into(), None), "");
    assert_eq!(encode(&"it's".into(), None), "it&apos;s");
    assert_eq!(encode(&r#"<a href="x">"#.into(), None), "&lt;a href=&quot;x&quot;&gt;");
}

#[test]
fn test_encode_does_not_double_encode() {
    assert_eq!(encode(&"a &amp; b & c".into(), None), "a &amp; b &amp; c");
    assert_eq!(encode(&"&#169; &nbsp;".into(), None), "&#169; &nbsp;");
}

#[test]
fn test_encode_literals() {
    assert_eq!(encode(&AttrValue::Null, None), "null");
    assert_eq!(encode(&false.into(), None), "");
    assert_eq!(encode(&true.into(), None), "true");
    assert_eq!(encode(&AttrValue::from(f64::NAN), None), "null");
    assert_eq!(encode(&AttrValue::from(-2), None), "-2");
}

#[test]
fn test_encode_with_preserved_literals() {
    assert_eq!(encode_with(&true.into(), None, true), Encoded::Bool(true));
    assert_eq!(encode_with(&false.into(), None, true), Encoded::Bool(false));
    assert_eq!(encode_with(&AttrValue::Null, None, true), Encoded::Null);
    assert_eq!(
        encode_with(&"x".into(), None, true),
        Encoded::Text("x".to_owned())
    );
    assert_eq!(encode_with(&true.into(), None, false).into_text(), "true");
}

#[test]
fn test_encode_empty_composites() {
    assert_eq!(encode(&AttrValue::List(Vec::new()), None), "");
    assert_eq!(encode(&AttrValue::List(Vec::new()), Some("class")), "");
    let empty: AttrValue = Vec::<(&str, AttrValue)>::new().into_iter().collect();
    assert_eq!(encode(&empty, None), "");
}

#[test]
fn test_encode_delimited_lists() {
    assert_eq!(encode(&AttrValue::from(["a", "b"]), Some("class")), "a b");
    assert_eq!(encode(&AttrValue::from(["a", "b"]), Some("accept")), "a,b");
    assert_eq!(encode(&AttrValue::from([" a ", "b"]), Some("rel")), "a b");
    assert_eq!(
        encode(&AttrValue::from(["x<y", "it's"]), Some("class")),
        "x&lt;y it&apos;s"
    );
}

#[test]
fn test_encode_json_for_undelimited_composites() {
    assert_eq!(encode(&AttrValue::from(["a", "b"]), None), r#"["a","b"]"#);
    assert_eq!(
        encode(&AttrValue::from(["a", "b"]), Some("data-list")),
        r#"["a","b"]"#
    );
    let map: AttrValue = [("b", AttrValue::from(1)), ("a", AttrValue::from(true))]
        .into_iter()
        .collect();
    assert_eq!(encode(&map, Some("data-x")), r#"{"b":1,"a":true}"#);
}

#[test]
fn test_encoded_json_is_attribute_safe() {
    let value = AttrValue::from(["it's", "<b>&</b>"]);
    let encoded = encode(&value, None);
    assert_eq!(
        encoded,
        r#"["it&apos;s","\u003cb\u003e\u0026\u003c/b\u003e"]"#
    );
    assert!(!encoded.contains(['\'', '<', '>']));
}

#[test]
fn test_encode_resolves_deferred_values() {
    let value = AttrValue::deferred(|| AttrValue::from(["a", "b"]));
    assert_eq!(encode(&value, Some("class")), "a b");
    let nested = AttrValue::deferred(|| AttrValue::deferred(|| "x".into()));
    assert_eq!(encode(&nested, None), "x");
    let inner = AttrValue::List(vec![AttrValue::deferred(|| 7.into())]);
    assert_eq!(encode(&inner, None), "[7]");
}

#[test]
fn test_decode_delimited() {
    assert_eq!(decode("a,b", Some("accept")), AttrValue::from(["a", "b"]));
    assert_eq!(decode("  a   b ", Some("class")), AttrValue::from(["a", "b"]));
    assert_eq!(decode("a b", Some("CLASS")), AttrValue::from(["a", "b"]));
    assert_eq!(decode("a&amp;b c", Some("class")), AttrValue::from(["a&b", "c"]));
    assert_eq!(decode("a,,b", Some("accept")), AttrValue::from(["a", "", "b"]));
    assert_eq!(decode("   ", Some("class")), AttrValue::List(Vec::new()));
}

#[test]
fn test_decode_json() {
    assert_eq!(decode("5", Some("data-count")), AttrValue::from(5));
    assert_eq!(decode("null", None), AttrValue::Null);
    assert_eq!(decode("true", None), AttrValue::from(true));
    assert_eq!(decode(r#""x""#, None), AttrValue::from("x"));
    let map: AttrValue = [("a", AttrValue::from(1))].into_iter().collect();
    assert_eq!(decode(r#"{"a":1}"#, None), map);
}

#[test]
fn test_decode_plain_text() {
    assert_eq!(decode("", None), AttrValue::from(""));
    assert_eq!(decode("", Some("class")), AttrValue::from(""));
    assert_eq!(decode("hello world", None), AttrValue::from("hello world"));
    assert_eq!(decode("a &lt; b", None), AttrValue::from("a < b"));
    assert_eq!(decode("it&apos;s", None), AttrValue::from("it's"));
}

#[test]
fn test_json_survives_encode_then_decode() {
    let value = AttrValue::from(["it's", "<b>&</b>"]);
    assert_eq!(decode(&encode(&value, None), None), value);
}

#[test]
fn test_numeric_strings_decode_as_numbers() {
    // Not an inverse: the encoded string "5" reads back as JSON.
    assert_eq!(encode(&"5".into(), None), "5");
    assert_eq!(decode("5", None), AttrValue::from(5));
}
