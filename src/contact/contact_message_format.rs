use regex::Regex;
use std::sync::LazyLock;

pub const LINE_BREAK_TAG: &str = "<br>";

static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\n|\r").expect("static line break regex is valid"));

/// The message split at every line break, in order. Rendered by the
/// notification template with `<br>` between lines.
pub fn message_lines(message: &str) -> Vec<&str> {
    LINE_BREAK.split(message).collect()
}

/// Replace every line break with `<br>`. Everything else, markup included, is
/// copied through untouched.
pub fn format_message(message: &str) -> String {
    message_lines(message).join(LINE_BREAK_TAG)
}
