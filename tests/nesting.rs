use piccolore::{Colors, Style};

const C: Colors = Colors::new(true);

fn open(style: Style) -> &'static str {
    style.definition().open()
}

fn close(style: Style) -> &'static str {
    style.definition().close()
}

#[test]
fn test_red_text() {
    assert_eq!(C.red("This is red text."), "\x1b[31mThis is red text.\x1b[39m");
}

#[test]
fn test_green_bold_text() {
    assert_eq!(
        C.green(C.bold("This is bold green text.")),
        "\x1b[32m\x1b[1mThis is bold green text.\x1b[22m\x1b[39m"
    );
}

#[test]
fn test_blue_background_white_underlined() {
    assert_eq!(
        C.bg_blue(C.white(C.underline("underlined white on blue"))),
        "\x1b[44m\x1b[37m\x1b[4munderlined white on blue\x1b[24m\x1b[39m\x1b[49m"
    );
}

#[test]
fn test_reset_inside_styles() {
    assert_eq!(
        C.red(C.bold(C.reset("reset"))),
        "\x1b[31m\x1b[1m\x1b[0mreset\x1b[0m\x1b[22m\x1b[39m"
    );
}

#[test]
fn test_format_and_color_nesting() {
    use Style::*;

    let out = C.bold(format!("BOLD {} BOLD", C.red(format!("RED {} RED", C.dim("DIM")))));
    let expected = [
        open(Bold),
        "BOLD ",
        open(Red),
        "RED ",
        open(Dim),
        "DIM",
        close(Dim),
        open(Bold),
        " RED",
        close(Red),
        " BOLD",
        close(Bold),
    ]
    .concat();
    assert_eq!(out, expected);
}

#[test]
fn test_proper_wrapping() {
    use Style::*;

    assert_eq!(
        C.red(C.bold("==TEST==")),
        [open(Red), open(Bold), "==TEST==", close(Bold), close(Red)].concat()
    );
}

#[test]
fn test_deep_composition_orders_sequences() {
    use Style::*;

    assert_eq!(
        C.bold(C.yellow(C.bg_red(C.italic("==TEST==")))),
        [
            open(Bold),
            open(Yellow),
            open(BgRed),
            open(Italic),
            "==TEST==",
            close(Italic),
            close(BgRed),
            close(Yellow),
            close(Bold),
        ]
        .concat()
    );

    assert_eq!(
        C.cyan(C.bold(C.underline("==TEST=="))),
        [
            open(Cyan),
            open(Bold),
            open(Underline),
            "==TEST==",
            close(Underline),
            close(Bold),
            close(Cyan),
        ]
        .concat()
    );
}

#[test]
fn test_close_sequence_reopens_outer_color() {
    use Style::*;

    assert_eq!(
        C.red(format!("foo {} baz", C.yellow("bar"))),
        [
            open(Red),
            "foo ",
            open(Yellow),
            "bar",
            close(Yellow),
            open(Red),
            " baz",
            close(Red),
        ]
        .concat()
    );
}

#[test]
fn test_close_sequence_reopens_outer_modifier() {
    use Style::*;

    assert_eq!(
        C.bold(format!("foo {} baz", C.red(C.dim("bar")))),
        [
            open(Bold),
            "foo ",
            open(Red),
            open(Dim),
            "bar",
            close(Dim),
            open(Bold),
            close(Red),
            " baz",
            close(Bold),
        ]
        .concat()
    );
}

#[test]
fn test_close_sequence_reopens_across_siblings() {
    use Style::*;

    let out = C.yellow(format!(
        "foo {} bar {} baz",
        C.red(C.bold("red")),
        C.cyan("cyan")
    ));
    let expected = [
        open(Yellow),
        "foo ",
        open(Red),
        open(Bold),
        "red",
        close(Bold),
        close(Red),
        open(Yellow),
        " bar ",
        open(Cyan),
        "cyan",
        close(Cyan),
        open(Yellow),
        " baz",
        close(Yellow),
    ]
    .concat();
    assert_eq!(out, expected);
}

#[test]
fn test_concatenated_siblings_keep_their_spans() {
    let twice = format!("{}{}", C.green("a"), C.green("b"));
    assert_eq!(twice, "\x1b[32ma\x1b[39m\x1b[32mb\x1b[39m");
}

#[test]
fn test_non_string_input() {
    let red = |s: &str| format!("\x1b[31m{s}\x1b[39m");

    assert_eq!(C.red(()), red("undefined"));
    assert_eq!(C.red(None::<&str>), red("undefined"));
    assert_eq!(C.red(0), red("0"));
    assert_eq!(C.red(f64::NAN), red("NaN"));
    assert_eq!(C.red(serde_json::Value::Null), red("null"));
    assert_eq!(C.red(true), red("true"));
    assert_eq!(C.red(false), red("false"));
    assert_eq!(C.red(f64::INFINITY), red("Infinity"));
}

#[test]
fn test_large_already_colored_text() {
    let body = C.red("x").repeat(10_000);
    let out = C.blue(&body);

    assert!(out.starts_with("\x1b[34m"));
    assert!(out.ends_with("\x1b[39m"));
    assert_eq!(out.matches("\x1b[34m").count(), 10_001);
    assert_eq!(console::strip_ansi_codes(&out), "x".repeat(10_000));
}

#[test]
fn test_disabled_mode_is_identity() {
    let off = Colors::new(false);
    let input = "foo \x1b[33mbar\x1b[39m baz";
    for &style in Style::ALL {
        assert_eq!(off.apply(style, input), input);
    }
    assert_eq!(off.red(f64::NEG_INFINITY), "-Infinity");
}
