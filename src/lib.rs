//! # Piccolore - tiny terminal colors that nest correctly
//!
//! Piccolore wraps text in ANSI escape sequences for colors, backgrounds and
//! text attributes. Its one subtle job is nesting: terminals do not stack
//! styles, so closing an inner red span inside an outer yellow one would
//! normally drop the rest of the outer span back to the default color.
//! Every style function re-opens its style after any embedded close sequence
//! of the same kind, so composed calls render the way they read.
//!
//! ```rust
//! use piccolore::Colors;
//!
//! let c = Colors::new(true);
//! let line = c.yellow(format!("warning: {} failed", c.red("build")));
//! assert_eq!(
//!     line,
//!     "\x1b[33mwarning: \x1b[31mbuild\x1b[39m\x1b[33m failed\x1b[39m"
//! );
//! ```
//!
//! ## Choosing whether to color
//!
//! [`Colors::new`] takes the decision explicitly. [`Colors::detect`] and the
//! free functions ([`red`], [`bold`], ...) decide from the environment:
//! `NO_COLOR`, `FORCE_COLOR`, `--no-color`/`--color`, whether stdout is a
//! terminal, and CI providers. See [`output`] for the full rules. A disabled
//! instance returns the text form of its input unchanged.
//!
//! ## Inputs
//!
//! Anything convertible into [`StyleInput`] can be styled: strings, numbers,
//! booleans, `Option`s, `()` and JSON values. Absent values render as
//! `undefined` and non-finite floats as `NaN` or `Infinity`.
//!
//! ## Templates
//!
//! [`register_filters`] exposes every style to MiniJinja templates, as
//! `{{ value | style("red") }}` or `{{ value | red }}`.

pub mod colors;
pub mod filters;
pub mod input;
pub mod output;
pub mod style;
pub mod wrap;

pub use colors::*;
pub use filters::register_filters;
pub use input::StyleInput;
pub use output::{detect_color_support, EnvSnapshot, OutputMode};
pub use style::{lookup, Style, StyleDefinition, UnknownStyleError};
pub use wrap::{reopen_count, wrap};
