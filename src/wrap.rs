//! The wrapper engine.
//!
//! Terminals do not stack styles: a close sequence resets its attribute to
//! the terminal default, not to whatever an enclosing span set. Nested
//! styling calls are evaluated innermost first, so by the time an outer style
//! wraps its body, any inner close sequences of the same class are already
//! literally present in the text. [`wrap`] finds each of them and re-opens
//! the outer style right after it.
//!
//! ```text
//! red("foo " + red("bar") + " baz")
//!
//! ESC[31m foo ESC[31m bar ESC[39m ESC[31m  baz ESC[39m
//!                         ^^^^^^^^^^^^^^^^ patched: close + re-open
//! ```

use crate::style::StyleDefinition;

/// Wraps `body` in the open and close sequences of `definition`.
///
/// Every occurrence of the close sequence inside `body` is followed by the
/// open sequence, so the style continues after an inner span of the same
/// close class ends. The body is scanned once, front to back, so the cost is
/// linear in its length no matter how many occurrences it contains.
///
/// # Example
///
/// ```rust
/// use piccolore::{wrap, Style};
///
/// let red = Style::Red.definition();
/// let inner = wrap(&red, "bar");
/// let outer = wrap(&red, &format!("foo {inner} baz"));
/// assert_eq!(
///     outer,
///     "\x1b[31mfoo \x1b[31mbar\x1b[39m\x1b[31m baz\x1b[39m"
/// );
/// ```
pub fn wrap(definition: &StyleDefinition, body: &str) -> String {
    let open = definition.open();
    let close = definition.close();

    let mut out = String::with_capacity(body.len() + open.len() + close.len());
    out.push_str(open);

    let mut copied = 0;
    for (index, matched) in body.match_indices(close) {
        let end = index + matched.len();
        out.push_str(&body[copied..end]);
        out.push_str(open);
        copied = end;
    }
    out.push_str(&body[copied..]);

    out.push_str(close);
    out
}

/// Counts how many times `wrap` would re-open the style inside `body`.
pub fn reopen_count(definition: &StyleDefinition, body: &str) -> usize {
    body.matches(definition.close()).count()
}
