//! Output wrappers.
//!
//! [`Echo`] pairs a [`Markup`] with an output sink. Each method runs the
//! operation of the same name and writes its result to the sink instead of
//! returning it. Composite results (parsed maps, decoded values) are written
//! as JSON.

use std::io::{self, Stdout, Write};

use serde_json::Value;

use crate::markup::Markup;
use crate::value::AttrValue;

/// Writes operation results to a sink.
///
/// ```
/// use phat_html::{AttrValue, Echo, Markup};
///
/// let mut echo = Echo::new(Markup::new(), Vec::new());
/// echo.attrs(&"hidden".into(), &true.into()).unwrap();
/// assert_eq!(echo.into_inner(), b"hidden");
/// ```
#[derive(Debug)]
pub struct Echo<W: Write> {
    markup: Markup,
    out: W,
}

impl Echo<Stdout> {
    /// Write to standard output.
    #[must_use]
    pub fn stdout(markup: Markup) -> Self {
        Self::new(markup, io::stdout())
    }
}

impl<W: Write> Echo<W> {
    /// Write to `out`.
    pub const fn new(markup: Markup, out: W) -> Self {
        Self { markup, out }
    }

    /// Return the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    fn write_json(&mut self, json: &Value) -> io::Result<()> {
        self.write(&json.to_string())
    }

    /// Write a line break and flush.
    ///
    /// # Errors
    ///
    /// Returns any error from the sink.
    pub fn newline(&mut self) -> io::Result<()> {
        self.write("\n")?;
        self.out.flush()
    }

    /// Write [`Markup::attrs`].
    ///
    /// # Errors
    ///
    /// Returns any error from the sink.
    pub fn attrs(&mut self, name: &AttrValue, value: &AttrValue) -> io::Result<()> {
        let text = self.markup.attrs(name, value);
        self.write(&text)
    }

    /// Write [`Markup::parse_attrs`] as a JSON object.
    ///
    /// # Errors
    ///
    /// Returns any error from the sink.
    pub fn parse_attrs(&mut self, raw: &str) -> io::Result<()> {
        let parsed = AttrValue::from(self.markup.parse_attrs(raw));
        self.write_json(&parsed.to_json())
    }

    /// Write [`Markup::encode`].
    ///
    /// # Errors
    ///
    /// Returns any error from the sink.
    pub fn encode(&mut self, value: &AttrValue, name: Option<&str>) -> io::Result<()> {
        let text = self.markup.encode(value, name);
        self.write(&text)
    }

    /// Write [`Markup::decode`] as JSON.
    ///
    /// # Errors
    ///
    /// Returns any error from the sink.
    pub fn decode(&mut self, raw: &str, name: Option<&str>) -> io::Result<()> {
        let decoded = self.markup.decode(raw, name);
        self.write_json(&decoded.to_json())
    }

    /// Write [`Markup::tag_name`].
    ///
    /// # Errors
    ///
    /// Returns any error from the sink.
    pub fn tag_name(&mut self, input: &str) -> io::Result<()> {
        let text = self.markup.tag_name(input);
        self.write(&text)
    }

    /// Write [`Markup::attr_name`].
    ///
    /// # Errors
    ///
    /// Returns any error from the sink.
    pub fn attr_name(&mut self, input: &str) -> io::Result<()> {
        let text = self.markup.attr_name(input);
        self.write(&text)
    }

    /// Write [`Markup::implode`].
    ///
    /// # Errors
    ///
    /// Returns any error from the sink.
    pub fn implode(&mut self, tokens: &AttrValue, glue: &str) -> io::Result<()> {
        let text = self.markup.implode(tokens, glue);
        self.write(&text)
    }

    /// Write [`Markup::explode`] as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns any error from the sink.
    pub fn explode(&mut self, tokens: &AttrValue, glue: &[&str]) -> io::Result<()> {
        let parts = self.markup.explode(tokens, glue);
        self.write_json(&AttrValue::from(parts).to_json())
    }

    /// Write [`esc`](crate::text::esc).
    ///
    /// # Errors
    ///
    /// Returns any error from the sink.
    pub fn esc(&mut self, text: &str) -> io::Result<()> {
        self.write(&crate::text::esc(text))
    }
}
