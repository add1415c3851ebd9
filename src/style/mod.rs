//! Style table mapping style names to escape sequences.
//!
//! This module provides the static styling primitives:
//!
//! - [`Style`]: One variant per supported style name
//! - [`StyleDefinition`]: The `(open, close)` escape sequence pair of a style
//! - [`lookup`]: Runtime resolution of a style name to its definition
//! - [`UnknownStyleError`]: The error for names that match no style
//!
//! Styles whose close sequences are identical form a *close class*. All
//! foreground colors close with `ESC[39m`, all backgrounds with `ESC[49m`,
//! and bold shares `ESC[22m` with dim. The wrapper engine relies on this to
//! re-open an outer style after an inner style of the same class closes.

mod error;
mod table;

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use error::UnknownStyleError;
pub(crate) use table::for_each_style;

/// The pair of escape sequences that turn a style on and off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StyleDefinition {
    open: &'static str,
    close: &'static str,
}

impl StyleDefinition {
    /// The sequence that turns the style on.
    pub const fn open(&self) -> &'static str {
        self.open
    }

    /// The sequence that turns the style off.
    pub const fn close(&self) -> &'static str {
        self.close
    }

    /// Returns true if both styles end with the same close sequence.
    pub fn shares_close_class(&self, other: &StyleDefinition) -> bool {
        self.close == other.close
    }
}

macro_rules! define_styles {
    ($(($variant:ident, $method:ident, $name:literal, $open:literal, $close:literal)),* $(,)?) => {
        /// A supported terminal style.
        ///
        /// Because styles are an enum, an unknown style cannot be applied; the
        /// only fallible path is parsing a name at runtime through [`lookup`]
        /// or [`FromStr`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Style {
            $(
                #[doc = concat!("The `", $name, "` style.")]
                $variant,
            )*
        }

        impl Style {
            /// Every supported style, in table order.
            pub const ALL: &'static [Style] = &[$(Style::$variant),*];

            /// The canonical name of the style, e.g. `"bgRedBright"`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Style::$variant => $name,)*
                }
            }

            /// The snake_case name used for methods and template filters,
            /// e.g. `"bg_red_bright"`.
            pub const fn method_name(self) -> &'static str {
                match self {
                    $(Style::$variant => stringify!($method),)*
                }
            }

            /// The escape sequences for this style.
            pub const fn definition(self) -> StyleDefinition {
                match self {
                    $(
                        Style::$variant => StyleDefinition {
                            open: concat!("\x1b[", $open, "m"),
                            close: concat!("\x1b[", $close, "m"),
                        },
                    )*
                }
            }
        }
    };
}

for_each_style!(define_styles);

/// Resolves a style name to its definition.
///
/// Both the canonical name (`"bgRed"`) and the method name (`"bg_red"`) are
/// accepted.
///
/// # Example
///
/// ```rust
/// use piccolore::lookup;
///
/// let red = lookup("red").unwrap();
/// assert_eq!(red.open(), "\x1b[31m");
/// assert_eq!(red.close(), "\x1b[39m");
/// assert!(lookup("chartreuse").is_err());
/// ```
pub fn lookup(name: &str) -> Result<StyleDefinition, UnknownStyleError> {
    name.parse::<Style>().map(Style::definition)
}

impl FromStr for Style {
    type Err = UnknownStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::ALL
            .iter()
            .copied()
            .find(|style| style.name() == s || style.method_name() == s)
            .ok_or_else(|| UnknownStyleError::new(s))
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Style {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Style {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
