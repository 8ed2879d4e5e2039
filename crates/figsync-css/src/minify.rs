//! Textual minification.

use regex::Regex;
use std::sync::OnceLock;

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"/\*[\s\S]*?\*/|[\r\n]|\s{2,}").expect("minify pattern is valid")
    })
}

/// Strip comments, line breaks, and runs of two or more whitespace
/// characters. Single spaces are kept, so declarations are unchanged.
pub fn minify(css: &str) -> String {
    pattern().replace_all(css, "").into_owned()
}
