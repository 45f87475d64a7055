//! Attribute string parser.
//!
//! A single-pass character state machine that turns text such as
//! `href="a b" title=c disabled` into an ordered [`AttributeMap`]. If the
//! text starts with a tag (`<a href=x>`), the tag name is skipped and parsing
//! stops at the first `>` outside a value.
//!
//! Values are returned raw: no entity decoding, no token splitting. Run them
//! through [`decode`](crate::decode) for that.

use std::mem;

use phat_common::warning::warn_once;
use strum_macros::Display;

use crate::is_space;
use crate::value::AttributeMap;

/// Where the parser is relative to the current attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum State {
    /// Between attributes.
    Neutral,
    /// Reading an attribute name.
    Name,
    /// After `=`, reading (or waiting for) a value.
    Value,
}

/// What ends the value being captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    /// The matching quote character.
    Quote(char),
    /// Any whitespace (bare value).
    Whitespace,
}

impl Stop {
    const fn matches(self, c: char) -> bool {
        match self {
            Self::Quote(quote) => c == quote,
            Self::Whitespace => is_space(c),
        }
    }
}

/// Skip a leading tag opener (`<` characters and the tag name after them).
fn strip_tag_opener(input: &str) -> &str {
    let input = input.trim_matches(is_space);
    if !input.starts_with('<') {
        return input;
    }
    let rest = input.trim_start_matches('<');
    rest.find(is_space).map_or("", |end| &rest[end..])
}

/// State machine over one attribute string.
pub struct AttributeParser<'a> {
    input: &'a str,
    state: State,
    name: String,
    value: String,
    /// `None` until the first character of a value is seen.
    stop: Option<Stop>,
    /// Whitespace followed the current name.
    after_space: bool,
    attributes: AttributeMap,
}

impl<'a> AttributeParser<'a> {
    /// Create a parser for the given input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input: strip_tag_opener(input),
            state: State::Neutral,
            name: String::new(),
            value: String::new(),
            stop: None,
            after_space: false,
            attributes: AttributeMap::new(),
        }
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    /// Commit the pending name (if any) with the pending value. A later
    /// occurrence of a name overwrites the earlier value in place.
    fn commit(&mut self) {
        if !self.name.is_empty() {
            let _ = self.attributes.insert(
                mem::take(&mut self.name),
                mem::take(&mut self.value),
            );
        }
        self.value.clear();
    }

    /// Run the state machine to the end of the input or the first `>` that
    /// closes the tag.
    pub fn run(&mut self) {
        let input = self.input;
        for c in input.chars() {
            match self.state {
                State::Neutral => {
                    if c == '>' {
                        break;
                    }
                    if !is_space(c) {
                        self.name.push(c);
                        self.after_space = false;
                        self.state = State::Name;
                    }
                }
                State::Name => match c {
                    '=' => {
                        self.stop = None;
                        self.state = State::Value;
                    }
                    '>' => break,
                    c if is_space(c) => self.after_space = true,
                    c => {
                        if self.after_space {
                            // The previous name had no value.
                            self.commit();
                            self.after_space = false;
                        }
                        self.name.push(c);
                    }
                },
                State::Value => match self.stop {
                    None => {
                        if c == '"' || c == '\'' {
                            self.value.clear();
                            self.stop = Some(Stop::Quote(c));
                        } else if !is_space(c) {
                            self.value.clear();
                            self.value.push(c);
                            self.stop = Some(Stop::Whitespace);
                        }
                    }
                    Some(stop) if stop.matches(c) => {
                        self.commit();
                        self.state = State::Neutral;
                    }
                    Some(_) => self.value.push(c),
                },
            }
        }

        if self.state == State::Value
            && let Some(Stop::Quote(quote)) = self.stop
        {
            warn_once(
                "Attributes",
                &format!("unterminated {quote}-quoted value for '{}'", self.name),
            );
        }
        self.commit();
    }

    /// Consume the parser and return the attributes it collected.
    #[must_use]
    pub fn into_attributes(self) -> AttributeMap {
        self.attributes
    }
}

/// Parse an attribute string (optionally starting with a tag) into an
/// ordered map of raw values.
///
/// ```
/// use phat_html::parse_attribute_string;
///
/// let attrs = parse_attribute_string(r#"<a href="a b" target=_blank hidden>"#);
/// assert_eq!(attrs["href"], "a b");
/// assert_eq!(attrs["target"], "_blank");
/// assert_eq!(attrs["hidden"], "");
/// ```
#[must_use]
pub fn parse_attribute_string(raw: &str) -> AttributeMap {
    let mut parser = AttributeParser::new(raw);
    parser.run();
    parser.into_attributes()
}
