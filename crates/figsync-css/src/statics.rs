//! Rules appended to every stylesheet regardless of token content.

/// Breakpoint prefix and minimum viewport width.
pub const BREAKPOINTS: &[(&str, &str)] = &[("sm", "640px"), ("md", "768px"), ("lg", "1024px")];

/// Display utility suffix and `display` value.
pub const DISPLAY_UTILITIES: &[(&str, &str)] = &[
    ("hidden", "none"),
    ("block", "block"),
    ("inline-block", "inline-block"),
    ("flex", "flex"),
];

const DARK_MODE: &str = "/* Dark Mode Support */
@media (prefers-color-scheme: dark) {
  :root {
    --color-text: #ffffff;
    --color-text-muted: #a1a1a1;
    --color-background: #1d1d1f;
    --color-surface: #2d2d2f;
    --color-border: #3d3d3f;
    --color-hover: #3d3d3f;
    --color-selected: #4d4d4f;
  }
}
";

/// Write the responsive display utilities and the dark-mode overrides.
pub fn generate(out: &mut String) {
    out.push_str("\n/* Responsive Utilities */\n");
    for (prefix, width) in BREAKPOINTS {
        out.push_str(&format!("@media (min-width: {width}) {{\n"));
        for (name, display) in DISPLAY_UTILITIES {
            out.push_str(&format!(
                "  .{prefix}\\:{name} {{ display: {display}; }}\n"
            ));
        }
        out.push_str("}\n\n");
    }
    out.push_str(DARK_MODE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_static_block() {
        let mut out = String::new();
        generate(&mut out);
        let expected = "
/* Responsive Utilities */
@media (min-width: 640px) {
  .sm\\:hidden { display: none; }
  .sm\\:block { display: block; }
  .sm\\:inline-block { display: inline-block; }
  .sm\\:flex { display: flex; }
}

@media (min-width: 768px) {
  .md\\:hidden { display: none; }
  .md\\:block { display: block; }
  .md\\:inline-block { display: inline-block; }
  .md\\:flex { display: flex; }
}

@media (min-width: 1024px) {
  .lg\\:hidden { display: none; }
  .lg\\:block { display: block; }
  .lg\\:inline-block { display: inline-block; }
  .lg\\:flex { display: flex; }
}

/* Dark Mode Support */
@media (prefers-color-scheme: dark) {
  :root {
    --color-text: #ffffff;
    --color-text-muted: #a1a1a1;
    --color-background: #1d1d1f;
    --color-surface: #2d2d2f;
    --color-border: #3d3d3f;
    --color-hover: #3d3d3f;
    --color-selected: #4d4d4f;
  }
}
";
        assert_eq!(out, expected);
    }
}
