//! The `:root` custom-property block.

use figsync_tokens::{format_number, TokenSnapshot};

use crate::font_family_value;

/// Write `:root { ... }` with one section per category.
pub fn generate(snapshot: &TokenSnapshot, out: &mut String) {
    let tokens = &snapshot.global;
    out.push_str(":root {\n");

    out.push_str("  /* Colors */\n");
    for (name, token) in &tokens.colors {
        out.push_str(&format!("  --color-{name}: {};\n", token.value));
    }

    out.push_str("\n  /* Shadows */\n");
    for (name, token) in &tokens.shadows {
        out.push_str(&format!("  --shadow-{name}: {};\n", token.value.shorthand()));
    }

    out.push_str("\n  /* Typography */\n");
    for (name, token) in &tokens.typography {
        let style = &token.value;
        let prefix = format!("--typography-{name}");
        let label = if token.description.is_empty() {
            name.as_str()
        } else {
            token.description.as_str()
        };

        out.push_str(&format!("\n  /* {} */\n", comment_text(label)));
        out.push_str(&format!(
            "  {prefix}-font-family: {};\n",
            font_family_value(&style.font_family)
        ));
        out.push_str(&format!("  {prefix}-font-size: {};\n", style.font_size));
        out.push_str(&format!(
            "  {prefix}-font-weight: {};\n",
            format_number(style.font_weight)
        ));
        out.push_str(&format!(
            "  {prefix}-line-height: {};\n",
            format_number(style.line_height)
        ));
        out.push_str(&format!(
            "  {prefix}-letter-spacing: {};\n",
            style.letter_spacing
        ));
    }

    out.push('}');
}

/// Keep free text from closing the comment it is written into.
fn comment_text(text: &str) -> String {
    text.replace("*/", "* /")
}

#[cfg(test)]
mod tests {
    use super::*;
    use figsync_tokens::{HexColor, ShadowValue, Token, TokenKind, TypographyValue};
    use pretty_assertions::assert_eq;

    fn render(snapshot: &TokenSnapshot) -> String {
        let mut out = String::new();
        generate(snapshot, &mut out);
        out
    }

    #[test]
    fn test_full_root_block() {
        let mut snapshot = TokenSnapshot::new();
        snapshot.global.colors.insert(
            "primary".into(),
            Token::new(HexColor("#3366cc".into()), TokenKind::Color, "Primary"),
        );
        snapshot.global.shadows.insert(
            "card".into(),
            Token::new(
                ShadowValue {
                    x: "0px".into(),
                    y: "4px".into(),
                    blur: "8px".into(),
                    spread: "0px".into(),
                    color: HexColor("#00000040".into()),
                },
                TokenKind::BoxShadow,
                "Card",
            ),
        );
        snapshot.global.typography.insert(
            "heading".into(),
            Token::new(
                TypographyValue {
                    font_family: "Inter".into(),
                    font_size: "2rem".into(),
                    font_weight: 700.0,
                    line_height: 1.25,
                    letter_spacing: "normal".into(),
                },
                TokenKind::Typography,
                "Heading/H1",
            ),
        );

        let expected = ":root {
  /* Colors */
  --color-primary: #3366cc;

  /* Shadows */
  --shadow-card: 0px 4px 8px 0px #00000040;

  /* Typography */

  /* Heading/H1 */
  --typography-heading-font-family: Inter;
  --typography-heading-font-size: 2rem;
  --typography-heading-font-weight: 700;
  --typography-heading-line-height: 1.25;
  --typography-heading-letter-spacing: normal;
}";
        assert_eq!(render(&snapshot), expected);
    }

    #[test]
    fn test_description_falls_back_to_name() {
        let mut snapshot = TokenSnapshot::new();
        snapshot.global.typography.insert(
            "caption".into(),
            Token::new(
                TypographyValue {
                    font_family: "Inter".into(),
                    font_size: "0.75rem".into(),
                    font_weight: 400.0,
                    line_height: 1.0,
                    letter_spacing: "normal".into(),
                },
                TokenKind::Typography,
                "",
            ),
        );
        assert!(render(&snapshot).contains("\n  /* caption */\n"));
    }

    #[test]
    fn test_comment_cannot_be_closed_early() {
        assert_eq!(comment_text("a */ b"), "a * / b");
    }
}
