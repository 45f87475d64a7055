//! Property tests for sanitizing and the serialize/parse round trip.

use indexmap::IndexMap;
use phat_html::entities::unescape_html;
use phat_html::{
    AttrValue, NamePolicy, attrs, parse_attribute_string, sanitize_attr_name,
    sanitize_attr_name_with,
};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

/// Sanitized, non-positional names paired with their values.
fn named_entries(pairs: Vec<(String, String)>) -> IndexMap<String, String> {
    let mut entries = IndexMap::new();
    for (name, value) in pairs {
        let name = sanitize_attr_name(&name);
        if name.is_empty() || name.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }
        let _ = entries.entry(name).or_insert(value);
    }
    entries
}

#[quickcheck]
fn sanitize_attr_name_is_idempotent(input: String) -> bool {
    let once = sanitize_attr_name(&input);
    sanitize_attr_name(&once) == once
}

#[quickcheck]
fn strict_sanitize_is_idempotent(input: String) -> bool {
    let once = sanitize_attr_name_with(&input, NamePolicy::RequireLetterStart);
    sanitize_attr_name_with(&once, NamePolicy::RequireLetterStart) == once
}

#[quickcheck]
fn sanitized_names_never_hold_separators(input: String) -> bool {
    !sanitize_attr_name(&input).contains(|c: char| c.is_whitespace() || "=>'\"<".contains(c))
}

#[quickcheck]
fn plain_values_round_trip(pairs: Vec<(String, String)>) -> TestResult {
    let plain = |value: &String| value.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ');
    if !pairs.iter().all(|(_, value)| plain(value)) {
        return TestResult::discard();
    }
    let entries = named_entries(pairs);
    let parsed = parse_attribute_string(&attrs(&entries.clone().into()));
    TestResult::from_bool(parsed.iter().eq(entries.iter()))
}

#[quickcheck]
fn escaped_values_round_trip(pairs: Vec<(String, String)>) -> TestResult {
    if pairs.iter().any(|(_, value)| value.contains('&')) {
        return TestResult::discard();
    }
    let entries = named_entries(pairs);
    let parsed = parse_attribute_string(&attrs(&AttrValue::from(entries.clone())));
    let decoded: Vec<(String, String)> = parsed
        .into_iter()
        .map(|(name, raw)| (name, unescape_html(&raw)))
        .collect();
    TestResult::from_bool(decoded.into_iter().eq(entries))
}
