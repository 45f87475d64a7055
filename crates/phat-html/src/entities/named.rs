//! Named character reference table.
//!
//! Covers the references most likely to appear in attribute values. Names are
//! stored with their terminating semicolon; references without one are not
//! recognized.

use std::collections::HashMap;
use std::sync::LazyLock;

static NAMED: LazyLock<HashMap<&'static str, char>> = LazyLock::new(|| {
    HashMap::from([
        // Markup
        ("amp;", '&'),
        ("lt;", '<'),
        ("gt;", '>'),
        ("quot;", '"'),
        ("apos;", '\''),
        ("nbsp;", '\u{00A0}'),
        ("shy;", '\u{00AD}'),
        // Punctuation and symbols
        ("iexcl;", '\u{00A1}'),
        ("iquest;", '\u{00BF}'),
        ("sect;", '\u{00A7}'),
        ("para;", '\u{00B6}'),
        ("copy;", '\u{00A9}'),
        ("reg;", '\u{00AE}'),
        ("trade;", '\u{2122}'),
        ("mdash;", '\u{2014}'),
        ("ndash;", '\u{2013}'),
        ("hellip;", '\u{2026}'),
        ("bull;", '\u{2022}'),
        ("middot;", '\u{00B7}'),
        ("lsquo;", '\u{2018}'),
        ("rsquo;", '\u{2019}'),
        ("ldquo;", '\u{201C}'),
        ("rdquo;", '\u{201D}'),
        ("laquo;", '\u{00AB}'),
        ("raquo;", '\u{00BB}'),
        // Currency
        ("cent;", '\u{00A2}'),
        ("pound;", '\u{00A3}'),
        ("euro;", '\u{20AC}'),
        ("yen;", '\u{00A5}'),
        // Math
        ("times;", '\u{00D7}'),
        ("divide;", '\u{00F7}'),
        ("plusmn;", '\u{00B1}'),
        ("ne;", '\u{2260}'),
        ("le;", '\u{2264}'),
        ("ge;", '\u{2265}'),
        ("deg;", '\u{00B0}'),
        ("frac12;", '\u{00BD}'),
        ("frac14;", '\u{00BC}'),
        ("frac34;", '\u{00BE}'),
        // Arrows
        ("larr;", '\u{2190}'),
        ("rarr;", '\u{2192}'),
        ("uarr;", '\u{2191}'),
        ("darr;", '\u{2193}'),
        // Greek
        ("alpha;", '\u{03B1}'),
        ("beta;", '\u{03B2}'),
        ("gamma;", '\u{03B3}'),
        ("delta;", '\u{03B4}'),
        ("pi;", '\u{03C0}'),
        ("sigma;", '\u{03C3}'),
        ("omega;", '\u{03C9}'),
        // Latin-1 letters
        ("Agrave;", '\u{00C0}'),
        ("Aacute;", '\u{00C1}'),
        ("Acirc;", '\u{00C2}'),
        ("Auml;", '\u{00C4}'),
        ("agrave;", '\u{00E0}'),
        ("aacute;", '\u{00E1}'),
        ("acirc;", '\u{00E2}'),
        ("auml;", '\u{00E4}'),
        ("Eacute;", '\u{00C9}'),
        ("egrave;", '\u{00E8}'),
        ("eacute;", '\u{00E9}'),
        ("ecirc;", '\u{00EA}'),
        ("iacute;", '\u{00ED}'),
        ("oacute;", '\u{00F3}'),
        ("ouml;", '\u{00F6}'),
        ("Ouml;", '\u{00D6}'),
        ("uacute;", '\u{00FA}'),
        ("uuml;", '\u{00FC}'),
        ("Uuml;", '\u{00DC}'),
        ("ntilde;", '\u{00F1}'),
        ("Ntilde;", '\u{00D1}'),
        ("ccedil;", '\u{00E7}'),
        ("Ccedil;", '\u{00C7}'),
        ("szlig;", '\u{00DF}'),
    ])
});

/// Look up a named character reference.
///
/// `name` excludes the leading `&` and includes the trailing `;`.
///
/// ```
/// use phat_html::entities::lookup_entity;
///
/// assert_eq!(lookup_entity("amp;"), Some('&'));
/// assert_eq!(lookup_entity("amp"), None);
/// ```
#[must_use]
pub fn lookup_entity(name: &str) -> Option<char> {
    NAMED.get(name).copied()
}
