//! Style functions bound to a coloring mode.

use once_cell::sync::Lazy;

use crate::input::StyleInput;
use crate::output::OutputMode;
use crate::style::{for_each_style, Style};
use crate::wrap::wrap;

/// A set of style functions that either all emit escape sequences or all
/// return their input unchanged.
///
/// The mode is fixed at construction, so enabled and disabled instances can
/// coexist in the same process.
///
/// # Example
///
/// ```rust
/// use piccolore::Colors;
///
/// let colors = Colors::new(true);
/// assert_eq!(colors.red("hi"), "\x1b[31mhi\x1b[39m");
/// assert_eq!(
///     colors.green(colors.bold("ok")),
///     "\x1b[32m\x1b[1mok\x1b[22m\x1b[39m"
/// );
///
/// let plain = Colors::new(false);
/// assert_eq!(plain.red("hi"), "hi");
/// assert_eq!(plain.red(f64::NAN), "NaN");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Colors {
    enabled: bool,
}

impl Colors {
    /// Creates style functions with coloring explicitly on or off.
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Creates style functions for an output mode.
    pub fn with_output(mode: OutputMode) -> Self {
        Self::new(mode.should_use_color())
    }

    /// Creates style functions with coloring detected from the environment.
    pub fn detect() -> Self {
        Self::with_output(OutputMode::Auto)
    }

    /// Returns true if this instance emits escape sequences.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Applies `style` to the text form of `value`.
    pub fn apply<'a, V: Into<StyleInput<'a>>>(&self, style: Style, value: V) -> String {
        let input: StyleInput<'a> = value.into();
        let text = input.into_text();
        if self.enabled {
            wrap(&style.definition(), &text)
        } else {
            text.into_owned()
        }
    }
}

impl Default for Colors {
    fn default() -> Self {
        Self::detect()
    }
}

static COLORS: Lazy<Colors> = Lazy::new(Colors::detect);

/// The process-wide style functions, detected on first use.
pub fn colors() -> &'static Colors {
    &COLORS
}

/// Returns true if the process-wide style functions emit colors.
pub fn is_color_supported() -> bool {
    COLORS.is_enabled()
}

macro_rules! define_style_functions {
    ($(($variant:ident, $method:ident, $name:literal, $open:literal, $close:literal)),* $(,)?) => {
        impl Colors {
            $(
                #[doc = concat!("Applies the `", $name, "` style to `value`.")]
                pub fn $method<'a, V: Into<StyleInput<'a>>>(&self, value: V) -> String {
                    self.apply(Style::$variant, value)
                }
            )*
        }

        $(
            #[doc = concat!("Applies the `", $name, "` style using the process-wide [`colors()`].")]
            pub fn $method<'a, V: Into<StyleInput<'a>>>(value: V) -> String {
                colors().$method(value)
            }
        )*
    };
}

for_each_style!(define_style_functions);
