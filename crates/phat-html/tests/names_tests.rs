//! Integration tests for tag and attribute name sanitizing.

use phat_html::{NamePolicy, sanitize_attr_name, sanitize_attr_name_with, sanitize_tag_name};

#[test]
fn test_tag_name_from_tag() {
    assert_eq!(sanitize_tag_name("<img src=x>"), "img");
    assert_eq!(sanitize_tag_name("  <<div class='a'>"), "div");
    assert_eq!(sanitize_tag_name("h1 class"), "h1");
}

#[test]
fn test_tag_name_allowed_characters() {
    assert_eq!(sanitize_tag_name("svg:rect"), "svg:rect");
    assert_eq!(sanitize_tag_name("my-element_2.x"), "my-element_2.x");
    assert_eq!(sanitize_tag_name("p/"), "p");
}

#[test]
fn test_tag_name_invalid() {
    assert_eq!(sanitize_tag_name(""), "");
    assert_eq!(sanitize_tag_name("!doctype"), "");
    assert_eq!(sanitize_tag_name("   "), "");
}

#[test]
fn test_attr_name_cut_at_equals_or_bracket() {
    assert_eq!(sanitize_attr_name("title=x"), "title");
    assert_eq!(sanitize_attr_name("a>b"), "a");
    assert_eq!(sanitize_attr_name("=x"), "");
}

#[test]
fn test_attr_name_filters_characters() {
    assert_eq!(sanitize_attr_name("data-x"), "data-x");
    assert_eq!(sanitize_attr_name("on click"), "onclick");
    assert_eq!(sanitize_attr_name("x$y\"z"), "xyz");
    assert_eq!(sanitize_attr_name("xlink:href"), "xlink:href");
    assert_eq!(sanitize_attr_name("héllo"), "héllo");
    assert_eq!(sanitize_attr_name("!!!"), "");
}

#[test]
fn test_attr_name_lenient_policy() {
    assert_eq!(sanitize_attr_name("9lives"), "9lives");
    assert_eq!(sanitize_attr_name("-x"), "-x");
}

#[test]
fn test_attr_name_letter_start_policy() {
    let strict = NamePolicy::RequireLetterStart;
    assert_eq!(sanitize_attr_name_with("9lives", strict), "");
    assert_eq!(sanitize_attr_name_with("-x", strict), "");
    assert_eq!(sanitize_attr_name_with("_x", strict), "_x");
    assert_eq!(sanitize_attr_name_with("$id", strict), "id");
    assert_eq!(sanitize_attr_name_with("ébène", strict), "ébène");
}

#[test]
fn test_policy_display() {
    assert_eq!(NamePolicy::default(), NamePolicy::Lenient);
    assert_eq!(NamePolicy::Lenient.to_string(), "lenient");
    assert_eq!(NamePolicy::RequireLetterStart.to_string(), "letter-start");
}
