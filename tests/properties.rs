use piccolore::{reopen_count, wrap, Colors, Style};
use proptest::prelude::*;

fn any_style() -> impl Strategy<Value = Style> {
    proptest::sample::select(Style::ALL)
}

// Plain text mixed with fragments that look like escape sequences.
fn body() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-z ]{0,8}",
            Just("\x1b[39m".to_string()),
            Just("\x1b[49m".to_string()),
            Just("\x1b[22m".to_string()),
            Just("\x1b[31m".to_string()),
        ],
        0..16,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn disabled_mode_returns_input(style in any_style(), text in body()) {
        prop_assert_eq!(Colors::new(false).apply(style, text.as_str()), text);
    }

    #[test]
    fn wrapped_output_is_framed_by_open_and_close(style in any_style(), text in body()) {
        let def = style.definition();
        let out = Colors::new(true).apply(style, text.as_str());
        prop_assert!(out.starts_with(def.open()));
        prop_assert!(out.ends_with(def.close()));
    }

    #[test]
    fn every_embedded_close_is_followed_by_open(style in any_style(), text in body()) {
        let def = style.definition();
        let out = wrap(&def, &text);
        let inner = &out[def.open().len()..out.len() - def.close().len()];

        for (index, close) in inner.match_indices(def.close()) {
            let rest = &inner[index + close.len()..];
            prop_assert!(rest.starts_with(def.open()), "unpatched close in {:?}", out);
        }
    }

    #[test]
    fn output_length_grows_by_one_open_per_patch(style in any_style(), text in body()) {
        let def = style.definition();
        let out = wrap(&def, &text);
        let patches = reopen_count(&def, &text);
        prop_assert_eq!(
            out.len(),
            text.len() + def.open().len() * (patches + 1) + def.close().len()
        );
    }

    #[test]
    fn stripping_sequences_recovers_plain_text(style in any_style(), text in "[a-z ]{0,32}") {
        let out = Colors::new(true).apply(style, text.as_str());
        prop_assert_eq!(console::strip_ansi_codes(&out).into_owned(), text);
    }
}
