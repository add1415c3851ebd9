//! The table of supported styles.
//!
//! Each row is `(Variant, method, "name", open_code, close_code)`. The
//! `for_each_style!` macro hands the full table to another macro, so the
//! [`Style`](super::Style) enum, the [`Colors`](crate::Colors) methods and the
//! free functions are all generated from this one list.

macro_rules! for_each_style {
    ($callback:ident) => {
        $callback! {
            (Reset, reset, "reset", 0, 0),
            (Bold, bold, "bold", 1, 22),
            (Dim, dim, "dim", 2, 22),
            (Italic, italic, "italic", 3, 23),
            (Underline, underline, "underline", 4, 24),
            (Inverse, inverse, "inverse", 7, 27),
            (Hidden, hidden, "hidden", 8, 28),
            (Strikethrough, strikethrough, "strikethrough", 9, 29),

            (Black, black, "black", 30, 39),
            (Red, red, "red", 31, 39),
            (Green, green, "green", 32, 39),
            (Yellow, yellow, "yellow", 33, 39),
            (Blue, blue, "blue", 34, 39),
            (Magenta, magenta, "magenta", 35, 39),
            (Cyan, cyan, "cyan", 36, 39),
            (White, white, "white", 37, 39),
            (Gray, gray, "gray", 90, 39),

            (BgBlack, bg_black, "bgBlack", 40, 49),
            (BgRed, bg_red, "bgRed", 41, 49),
            (BgGreen, bg_green, "bgGreen", 42, 49),
            (BgYellow, bg_yellow, "bgYellow", 43, 49),
            (BgBlue, bg_blue, "bgBlue", 44, 49),
            (BgMagenta, bg_magenta, "bgMagenta", 45, 49),
            (BgCyan, bg_cyan, "bgCyan", 46, 49),
            (BgWhite, bg_white, "bgWhite", 47, 49),

            (BlackBright, black_bright, "blackBright", 90, 39),
            (RedBright, red_bright, "redBright", 91, 39),
            (GreenBright, green_bright, "greenBright", 92, 39),
            (YellowBright, yellow_bright, "yellowBright", 93, 39),
            (BlueBright, blue_bright, "blueBright", 94, 39),
            (MagentaBright, magenta_bright, "magentaBright", 95, 39),
            (CyanBright, cyan_bright, "cyanBright", 96, 39),
            (WhiteBright, white_bright, "whiteBright", 97, 39),

            (BgBlackBright, bg_black_bright, "bgBlackBright", 100, 49),
            (BgRedBright, bg_red_bright, "bgRedBright", 101, 49),
            (BgGreenBright, bg_green_bright, "bgGreenBright", 102, 49),
            (BgYellowBright, bg_yellow_bright, "bgYellowBright", 103, 49),
            (BgBlueBright, bg_blue_bright, "bgBlueBright", 104, 49),
            (BgMagentaBright, bg_magenta_bright, "bgMagentaBright", 105, 49),
            (BgCyanBright, bg_cyan_bright, "bgCyanBright", 106, 49),
            (BgWhiteBright, bg_white_bright, "bgWhiteBright", 107, 49),
        }
    };
}

pub(crate) use for_each_style;
