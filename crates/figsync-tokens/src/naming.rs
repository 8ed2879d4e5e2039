//! Style-name normalization.
//!
//! Figma style names are free-form labels such as `Primary/Brand Blue` or
//! `Heading / H1 (Bold)`. Tokens are keyed by a camelCase identifier built
//! from those labels.

/// Turn a human-readable style label into a token identifier.
///
/// The label is split on `/` and then on whitespace. Every character outside
/// `[A-Za-z0-9]` is dropped from each segment. The first non-empty segment is
/// lowercased, each later segment is lowercased with its first letter
/// uppercased, and the segments are joined with no separator.
///
/// Labels made only of punctuation normalize to the empty string. Callers key
/// maps by the result, so distinct labels can collide.
pub fn normalize(name: &str) -> String {
    let mut ident = String::with_capacity(name.len());

    for segment in name.split('/').flat_map(str::split_whitespace) {
        let cleaned: String = segment
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect();
        if cleaned.is_empty() {
            continue;
        }

        if ident.is_empty() {
            ident.push_str(&cleaned.to_ascii_lowercase());
        } else {
            let mut chars = cleaned.chars();
            if let Some(first) = chars.next() {
                ident.push(first.to_ascii_uppercase());
                ident.push_str(&chars.as_str().to_ascii_lowercase());
            }
        }
    }

    ident
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slash_and_space_segments() {
        assert_eq!(normalize("Primary/Brand Blue"), "primaryBrandBlue");
    }

    #[test]
    fn test_single_word() {
        assert_eq!(normalize("Primary"), "primary");
    }

    #[test]
    fn test_first_segment_lowercased() {
        assert_eq!(normalize("BRAND/Accent"), "brandAccent");
    }

    #[test]
    fn test_later_segments_lowercased_after_first_char() {
        assert_eq!(normalize("text/BODY LARGE"), "textBodyLarge");
    }

    #[test]
    fn test_special_characters_stripped() {
        assert_eq!(normalize("Heading / H1 (Bold)"), "headingH1Bold");
        assert_eq!(normalize("gray-100"), "gray100");
    }

    #[test]
    fn test_spaces_around_slashes() {
        assert_eq!(normalize("  Shadow /  Large  "), "shadowLarge");
    }

    #[test]
    fn test_leading_punctuation_segment_skipped() {
        assert_eq!(normalize("🎨 Primary Color"), "primaryColor");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_punctuation_only_is_degenerate() {
        assert_eq!(normalize("/ - /"), "");
    }

    #[test]
    fn test_output_is_alphanumeric() {
        let names = [
            "Primary/Brand Blue",
            "a_b/c.d e!f",
            "Ünïcode/Näme",
            "tab\tseparated/name",
            "100/200 300",
        ];
        for name in names {
            let ident = normalize(name);
            assert!(
                ident.chars().all(|c| c.is_ascii_alphanumeric()),
                "{name:?} -> {ident:?}"
            );
            assert_eq!(ident, normalize(name));
        }
    }
}
