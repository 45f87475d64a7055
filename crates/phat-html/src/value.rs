//! In-memory attribute values.
//!
//! [`AttrValue`] is everything a caller may hand to the serializer or the
//! value codec: scalars, nested lists and maps, and deferred values that are
//! produced on demand.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Number, Value};

/// Ordered map of attribute names to raw (undecoded) attribute values.
///
/// A boolean attribute such as `disabled` is stored with an empty value.
pub type AttributeMap = IndexMap<String, String>;

/// A function producing a value on demand.
pub type Producer = Arc<dyn Fn() -> AttrValue + Send + Sync>;

/// A value that can be serialized into, or decoded from, an attribute.
#[derive(Clone, Default)]
pub enum AttrValue {
    /// Absent. Never produces an attribute.
    #[default]
    Null,
    /// `true` collapses to a bare attribute, `false` omits it.
    Bool(bool),
    /// A JSON number.
    Number(Number),
    /// Plain text.
    String(String),
    /// An ordered list of values.
    List(Vec<AttrValue>),
    /// A name-keyed map of values, in insertion order.
    Map(IndexMap<String, AttrValue>),
    /// A value computed when it is first needed.
    Deferred(Producer),
}

impl AttrValue {
    /// Wrap a closure as a deferred value.
    pub fn deferred<F>(produce: F) -> Self
    where
        F: Fn() -> Self + Send + Sync + 'static,
    {
        Self::Deferred(Arc::new(produce))
    }

    /// Invoke a deferred value (repeatedly, if it produces another deferred
    /// value). Anything else is borrowed as is.
    #[must_use]
    pub fn resolve(&self) -> Cow<'_, Self> {
        let Self::Deferred(produce) = self else {
            return Cow::Borrowed(self);
        };
        let mut value = produce();
        loop {
            match value {
                Self::Deferred(next) => value = next(),
                resolved => return Cow::Owned(resolved),
            }
        }
    }

    /// Returns the position if this value is a non-negative integer, i.e. the
    /// key of an entry in a positional list.
    #[must_use]
    pub fn as_index(&self) -> Option<u64> {
        match self {
            Self::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    /// Returns true for an empty list or map.
    #[must_use]
    pub fn is_empty_composite(&self) -> bool {
        match self {
            Self::List(items) => items.is_empty(),
            Self::Map(entries) => entries.is_empty(),
            _ => false,
        }
    }

    /// Text form of a scalar: strings as is, numbers in JSON notation,
    /// `true` as `"1"` and `false` as `""`. `None` for null and composites.
    #[must_use]
    pub fn scalar_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::String(s) => Some(Cow::Borrowed(s)),
            Self::Number(n) => Some(Cow::Owned(n.to_string())),
            Self::Bool(true) => Some(Cow::Borrowed("1")),
            Self::Bool(false) => Some(Cow::Borrowed("")),
            Self::Deferred(_) => self
                .resolve()
                .scalar_text()
                .map(|text| Cow::Owned(text.into_owned())),
            Self::Null | Self::List(_) | Self::Map(_) => None,
        }
    }

    /// Convert to a JSON value, resolving deferred values at every depth.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => Value::Number(n.clone()),
            Self::String(s) => Value::String(s.clone()),
            Self::List(items) => Value::Array(items.iter().map(Self::to_json).collect()),
            Self::Map(entries) => Value::Object(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect::<Map<String, Value>>(),
            ),
            Self::Deferred(_) => self.resolve().to_json(),
        }
    }
}

impl fmt::Debug for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "Null"),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Self::String(s) => f.debug_tuple("String").field(s).finish(),
            Self::List(items) => f.debug_tuple("List").field(items).finish(),
            Self::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            Self::Deferred(_) => write!(f, "Deferred(..)"),
        }
    }
}

impl PartialEq for AttrValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Deferred(a), Self::Deferred(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&String> for AttrValue {
    fn from(s: &String) -> Self {
        Self::String(s.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

macro_rules! from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for AttrValue {
                fn from(n: $t) -> Self {
                    Self::Number(Number::from(n))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f64> for AttrValue {
    /// Non-finite floats have no JSON form and become [`AttrValue::Null`].
    fn from(n: f64) -> Self {
        Number::from_f64(n).map_or(Self::Null, Self::Number)
    }
}

impl<T: Into<Self>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Self>> From<Vec<T>> for AttrValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>, const N: usize> From<[T; N]> for AttrValue {
    fn from(items: [T; N]) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<Self>> From<IndexMap<String, V>> for AttrValue {
    fn from(entries: IndexMap<String, V>) -> Self {
        Self::Map(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<Self>> FromIterator<(K, V)> for AttrValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Map(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<Value> for AttrValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(entries) => {
                Self::Map(entries.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}
