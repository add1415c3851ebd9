//! Coercion of arbitrary values into the text a style wraps.
//!
//! Style functions accept anything convertible into [`StyleInput`]. Every
//! value has a text form, including absent ones: `None` and `()` render as
//! `undefined`, JSON `null` as `null`, and non-finite floats as `NaN`,
//! `Infinity` and `-Infinity`. This matches what string interpolation
//! produces in scripting environments, so styled output stays predictable
//! when values come from loosely typed sources such as JSON documents.

use std::borrow::Cow;
use std::fmt;

/// A value that can be styled.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleInput<'a> {
    /// An absent value, rendered as `undefined`.
    Undefined,
    /// An explicit null, rendered as `null`.
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(Cow<'a, str>),
}

impl<'a> StyleInput<'a> {
    /// Returns the text form, borrowing when the input already is text.
    pub fn into_text(self) -> Cow<'a, str> {
        match self {
            StyleInput::Text(text) => text,
            other => Cow::Owned(other.to_string()),
        }
    }
}

impl fmt::Display for StyleInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleInput::Undefined => f.write_str("undefined"),
            StyleInput::Null => f.write_str("null"),
            StyleInput::Bool(b) => write!(f, "{}", b),
            StyleInput::Int(n) => write!(f, "{}", n),
            StyleInput::Uint(n) => write!(f, "{}", n),
            StyleInput::Float(n) => write_float(f, *n),
            StyleInput::Text(text) => f.write_str(text),
        }
    }
}

// Shortest round-trip digits. Magnitudes at or above 1e21 or below 1e-6 use
// exponent form with an explicit `+` on positive exponents, and negative zero
// prints as `0`.
fn write_float(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n == 0.0 {
        f.write_str("0")
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        let repr = format!("{:e}", n);
        match repr.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                write!(f, "{}e+{}", mantissa, exponent)
            }
            _ => f.write_str(&repr),
        }
    } else {
        write!(f, "{}", n)
    }
}

impl<'a> From<&'a str> for StyleInput<'a> {
    fn from(value: &'a str) -> Self {
        StyleInput::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for StyleInput<'a> {
    fn from(value: &'a String) -> Self {
        StyleInput::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for StyleInput<'_> {
    fn from(value: String) -> Self {
        StyleInput::Text(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for StyleInput<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        StyleInput::Text(value)
    }
}

impl From<char> for StyleInput<'_> {
    fn from(value: char) -> Self {
        StyleInput::Text(Cow::Owned(value.to_string()))
    }
}

impl From<fmt::Arguments<'_>> for StyleInput<'_> {
    fn from(value: fmt::Arguments<'_>) -> Self {
        StyleInput::Text(Cow::Owned(value.to_string()))
    }
}

impl From<bool> for StyleInput<'_> {
    fn from(value: bool) -> Self {
        StyleInput::Bool(value)
    }
}

impl From<()> for StyleInput<'_> {
    fn from(_: ()) -> Self {
        StyleInput::Undefined
    }
}

impl<'a, T: Into<StyleInput<'a>>> From<Option<T>> for StyleInput<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(StyleInput::Undefined, Into::into)
    }
}

macro_rules! impl_from_int {
    ($variant:ident as $target:ty: $($ty:ty),*) => {
        $(
            impl From<$ty> for StyleInput<'_> {
                fn from(value: $ty) -> Self {
                    StyleInput::$variant(value as $target)
                }
            }
        )*
    };
}

impl_from_int!(Int as i64: i8, i16, i32, i64, isize);
impl_from_int!(Uint as u64: u8, u16, u32, u64, usize);

impl From<f32> for StyleInput<'_> {
    fn from(value: f32) -> Self {
        StyleInput::Float(f64::from(value))
    }
}

impl From<f64> for StyleInput<'_> {
    fn from(value: f64) -> Self {
        StyleInput::Float(value)
    }
}

impl From<serde_json::Value> for StyleInput<'_> {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => StyleInput::Null,
            serde_json::Value::Bool(b) => StyleInput::Bool(b),
            serde_json::Value::String(s) => StyleInput::Text(Cow::Owned(s)),
            other => StyleInput::Text(Cow::Owned(StyleInput::from(&other).to_string())),
        }
    }
}

impl<'a> From<&'a serde_json::Value> for StyleInput<'a> {
    fn from(value: &'a serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => StyleInput::Null,
            Value::Bool(b) => StyleInput::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    StyleInput::Int(i)
                } else if let Some(u) = n.as_u64() {
                    StyleInput::Uint(u)
                } else {
                    StyleInput::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => StyleInput::Text(Cow::Borrowed(s.as_str())),
            // Arrays join their items with commas; null items become empty.
            Value::Array(items) => {
                let parts: Vec<Cow<'_, str>> = items
                    .iter()
                    .map(|item| match item {
                        Value::Null => Cow::Borrowed(""),
                        other => StyleInput::from(other).into_text(),
                    })
                    .collect();
                StyleInput::Text(Cow::Owned(parts.join(",")))
            }
            Value::Object(_) => StyleInput::Text(Cow::Borrowed("[object Object]")),
        }
    }
}
