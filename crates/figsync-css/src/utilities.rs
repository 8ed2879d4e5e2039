//! Utility classes.
//!
//! Per-token classes reference the custom properties from the `:root` block.
//! Per-value classes for typography attributes are emitted once for each
//! distinct value, in first-seen order.

use figsync_tokens::{format_number, TokenSnapshot};
use indexmap::IndexSet;

use crate::{escape_class, font_family_value};

/// Write the utility class section.
pub fn generate(snapshot: &TokenSnapshot, out: &mut String) {
    out.push_str("/* Utility Classes */\n\n");
    color_classes(snapshot, out);
    shadow_classes(snapshot, out);
    typography_classes(snapshot, out);
}

fn color_classes(snapshot: &TokenSnapshot, out: &mut String) {
    for name in snapshot.global.colors.keys() {
        let var = format!("--color-{name}");
        out.push_str(&format!(".bg-{name} {{ background-color: var({var}); }}\n"));
        out.push_str(&format!(".text-{name} {{ color: var({var}); }}\n"));
        out.push_str(&format!(".border-{name} {{ border-color: var({var}); }}\n"));
        out.push_str(&format!(
            ".hover\\:bg-{name}:hover {{ background-color: var({var}); }}\n"
        ));
        out.push_str(&format!(".hover\\:text-{name}:hover {{ color: var({var}); }}\n"));
        out.push_str(&format!(
            ".hover\\:border-{name}:hover {{ border-color: var({var}); }}\n"
        ));
    }
}

fn shadow_classes(snapshot: &TokenSnapshot, out: &mut String) {
    for name in snapshot.global.shadows.keys() {
        let var = format!("--shadow-{name}");
        out.push_str(&format!(".shadow-{name} {{ box-shadow: var({var}); }}\n"));
        out.push_str(&format!(
            ".hover\\:shadow-{name}:hover {{ box-shadow: var({var}); }}\n"
        ));
    }
}

/// Distinct typography values across all tokens.
#[derive(Default)]
struct UniqueValues {
    font_sizes: IndexSet<String>,
    font_weights: IndexSet<String>,
    line_heights: IndexSet<String>,
    font_families: IndexSet<String>,
    letter_spacings: IndexSet<String>,
}

fn typography_classes(snapshot: &TokenSnapshot, out: &mut String) {
    let mut unique = UniqueValues::default();

    for (name, token) in &snapshot.global.typography {
        let style = &token.value;
        unique.font_sizes.insert(style.font_size.clone());
        unique.font_weights.insert(format_number(style.font_weight));
        unique.line_heights.insert(format_number(style.line_height));
        unique.font_families.insert(style.font_family.clone());
        if style.letter_spacing != "normal" {
            unique.letter_spacings.insert(style.letter_spacing.clone());
        }

        let prefix = format!("--typography-{name}");
        out.push_str(&format!(
            ".typography-{name} {{
  font-family: var({prefix}-font-family);
  font-size: var({prefix}-font-size);
  font-weight: var({prefix}-font-weight);
  line-height: var({prefix}-line-height);
  letter-spacing: var({prefix}-letter-spacing);
}}\n"
        ));
    }

    out.push_str("\n/* Font Size Utilities */\n");
    for size in &unique.font_sizes {
        let class = escape_class(strip_unit(size, &["rem"]));
        out.push_str(&format!(".text-{class} {{ font-size: {size}; }}\n"));
    }

    out.push_str("\n/* Font Weight Utilities */\n");
    for weight in &unique.font_weights {
        let class = escape_class(weight);
        out.push_str(&format!(".font-{class} {{ font-weight: {weight}; }}\n"));
    }

    out.push_str("\n/* Line Height Utilities */\n");
    for height in &unique.line_heights {
        let class = escape_class(height);
        out.push_str(&format!(".leading-{class} {{ line-height: {height}; }}\n"));
    }

    out.push_str("\n/* Font Family Utilities */\n");
    for family in &unique.font_families {
        out.push_str(&format!(
            ".font-{} {{ font-family: {}; }}\n",
            family_class(family),
            font_family_value(family)
        ));
    }

    if !unique.letter_spacings.is_empty() {
        out.push_str("\n/* Letter Spacing Utilities */\n");
        for spacing in &unique.letter_spacings {
            let class = escape_class(strip_unit(spacing, &["px", "em"]));
            out.push_str(&format!(
                ".tracking-{class} {{ letter-spacing: {spacing}; }}\n"
            ));
        }
    }
}

fn strip_unit<'a>(value: &'a str, units: &[&str]) -> &'a str {
    units
        .iter()
        .find_map(|unit| value.strip_suffix(unit))
        .unwrap_or(value)
}

/// Lowercase, with every character outside `[a-z0-9]` replaced by `-`.
fn family_class(family: &str) -> String {
    family
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                '-'
            }
        })
        .collect()
}
