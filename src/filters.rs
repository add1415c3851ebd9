//! MiniJinja filter registration.
//!
//! Exposes the style functions to templates, either through the generic
//! `style` filter or through one filter per style:
//!
//! ```text
//! {{ title | style("bold") }}
//! {{ status | bg_red | white }}
//! ```

use minijinja::value::ValueKind;
use minijinja::{Environment, Error, ErrorKind, Value};

use crate::colors::Colors;
use crate::input::StyleInput;
use crate::style::Style;

/// Registers the `style` filter and one filter per style on `env`.
///
/// # Example
///
/// ```rust
/// use minijinja::{context, Environment};
/// use piccolore::{register_filters, Colors};
///
/// let mut env = Environment::new();
/// register_filters(&mut env, Colors::new(true));
///
/// let out = env
///     .render_str(r#"{{ name | style("bold") }}"#, context! { name => "ok" })
///     .unwrap();
/// assert_eq!(out, "\x1b[1mok\x1b[22m");
/// ```
pub fn register_filters(env: &mut Environment<'_>, colors: Colors) {
    env.add_filter(
        "style",
        move |value: Value, name: String| -> Result<String, Error> {
            let style: Style = name
                .parse()
                .map_err(|e: crate::UnknownStyleError| {
                    Error::new(ErrorKind::InvalidOperation, e.to_string())
                })?;
            Ok(colors.apply(style, input_from_value(&value)))
        },
    );

    for &style in Style::ALL {
        env.add_filter(style.method_name(), move |value: Value| -> String {
            colors.apply(style, input_from_value(&value))
        });
    }
}

fn input_from_value(value: &Value) -> StyleInput<'_> {
    match value.kind() {
        ValueKind::Undefined => StyleInput::Undefined,
        ValueKind::None => StyleInput::Null,
        ValueKind::Bool => StyleInput::Bool(value.is_true()),
        ValueKind::Number => {
            let repr = value.to_string();
            if let Ok(n) = repr.parse::<i64>() {
                StyleInput::Int(n)
            } else if let Ok(n) = repr.parse::<u64>() {
                StyleInput::Uint(n)
            } else {
                f64::try_from(value.clone())
                    .map_or_else(|_| StyleInput::from(repr), StyleInput::Float)
            }
        }
        _ => value
            .as_str()
            .map_or_else(|| StyleInput::from(value.to_string()), StyleInput::from),
    }
}
