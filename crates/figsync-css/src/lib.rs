//! figsync CSS generator
//!
//! Renders a [`TokenSnapshot`] as a stylesheet: a `:root` block of custom
//! properties, utility classes that reference them, and a fixed tail of
//! responsive and dark-mode rules. Output depends only on the snapshot, so
//! the stylesheet can be regenerated at any time.
//!
//! ```text
//! TokenSnapshot → generate() → Stylesheet { css, minified }
//! ```

pub mod minify;
pub mod statics;
pub mod utilities;
pub mod variables;

pub use minify::minify;

use figsync_tokens::TokenSnapshot;

const HEADER: &str = "/**
 * Design System Variables
 * Auto-generated from design tokens
 */

";

/// A generated stylesheet and its minified form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stylesheet {
    pub css: String,
    pub minified: String,
}

/// Generate the full and minified stylesheets for a snapshot.
///
/// Sections are emitted colors, shadows, typography; tokens within a
/// section keep the snapshot's insertion order.
pub fn generate(snapshot: &TokenSnapshot) -> Stylesheet {
    let mut css = String::from(HEADER);
    variables::generate(snapshot, &mut css);
    css.push_str("\n\n");

    utilities::generate(snapshot, &mut css);
    statics::generate(&mut css);

    let minified = minify(&css);
    log::debug!(
        "Generated stylesheet: {} bytes, {} minified",
        css.len(),
        minified.len()
    );

    Stylesheet { css, minified }
}

/// Escape a raw value for use inside a class selector.
pub fn escape_class(raw: &str) -> String {
    raw.replace('.', "\\.")
}

/// Names that mean something else when written as a bare family.
const RESERVED_FAMILIES: &[&str] = &[
    "inherit",
    "initial",
    "unset",
    "revert",
    "default",
    "serif",
    "sans-serif",
    "monospace",
    "cursive",
    "fantasy",
    "system-ui",
];

/// Render a font family as a CSS value.
///
/// One pair of surrounding quotes is removed first. Plain identifiers such
/// as `Inter` are written bare; anything else becomes a double-quoted
/// string in which quotes, backslashes, `*`, `/` and control characters are
/// escaped, and whitespace never repeats, so neither a comment nor the
/// minifier can change the declaration.
pub fn font_family_value(raw: &str) -> String {
    let name = ['"', '\'']
        .iter()
        .find_map(|&q| raw.strip_prefix(q).and_then(|rest| rest.strip_suffix(q)))
        .unwrap_or(raw);

    let is_ident = name.starts_with(|c: char| c.is_ascii_alphabetic())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        && !RESERVED_FAMILIES
            .iter()
            .any(|reserved| reserved.eq_ignore_ascii_case(name));
    if is_ident {
        return name.to_string();
    }

    let mut out = String::with_capacity(name.len() + 2);
    out.push('"');
    let mut after_space = false;
    for c in name.chars() {
        match c {
            '"' | '\\' | '*' | '/' => {
                out.push('\\');
                out.push(c);
            }
            ' ' if after_space => out.push_str("\\20 "),
            ' ' => out.push(' '),
            c if c.is_whitespace() || c.is_control() => {
                out.push_str(&format!("\\{:x} ", c as u32));
            }
            c => out.push(c),
        }
        after_space = c.is_whitespace();
    }
    out.push('"');
    out
}
