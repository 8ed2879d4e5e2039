//! Token extractors, one per style category.

use figsync_tokens::{
    normalize, px, px_to_rem, rgba_to_hex, round_to, Category, HexColor, ShadowValue, Token,
    TokenKind, TokenMap, TokenSnapshot, TypographyValue,
};

use crate::style::{Effect, Paint, RawStyle, Rgba, StyleMeta, TypeStyle};

/// Run all three extractors and assemble a snapshot.
pub fn extract_tokens(styles: &[RawStyle]) -> TokenSnapshot {
    let mut snapshot = TokenSnapshot::new();
    snapshot.global.colors = extract_colors(styles);
    snapshot.global.shadows = extract_shadows(styles);
    snapshot.global.typography = extract_typography(styles);

    let counts = snapshot.counts();
    log::info!(
        "Extracted {} colors, {} shadows, {} typography tokens from {} styles",
        counts.colors,
        counts.shadows,
        counts.typography,
        styles.len()
    );
    snapshot
}

/// Color tokens from `FILL` styles whose first paint is solid.
pub fn extract_colors(styles: &[RawStyle]) -> TokenMap<HexColor> {
    let mut colors = TokenMap::new();

    for style in styles {
        let RawStyle::Fill { meta, fills } = style else {
            continue;
        };
        match fills.first() {
            Some(Paint::Solid { color, opacity }) => {
                let hex = hex(color, color.a * opacity);
                insert(&mut colors, Category::Colors, meta, HexColor(hex), TokenKind::Color);
            }
            _ => log::debug!("Skipping fill style {:?}: no solid fill", meta.name),
        }
    }

    colors
}

/// Shadow tokens from the first drop shadow of each `EFFECT` style.
pub fn extract_shadows(styles: &[RawStyle]) -> TokenMap<ShadowValue> {
    let mut shadows = TokenMap::new();

    for style in styles {
        let RawStyle::Effect { meta, effects } = style else {
            continue;
        };
        let first = effects.iter().find_map(|effect| match effect {
            Effect::DropShadow {
                color,
                offset,
                radius,
                spread,
            } => Some(ShadowValue {
                x: px(offset.x),
                y: px(offset.y),
                blur: px(*radius),
                spread: px(*spread),
                color: HexColor(hex(color, color.a)),
            }),
            Effect::Other => None,
        });

        match first {
            Some(shadow) => insert(
                &mut shadows,
                Category::Shadows,
                meta,
                shadow,
                TokenKind::BoxShadow,
            ),
            None => log::debug!("Skipping effect style {:?}: no drop shadow", meta.name),
        }
    }

    shadows
}

/// Typography tokens from `TEXT` styles that carry a type style.
pub fn extract_typography(styles: &[RawStyle]) -> TokenMap<TypographyValue> {
    let mut typography = TokenMap::new();

    for style in styles {
        let RawStyle::Text { meta, style } = style else {
            continue;
        };
        match style {
            Some(text) => insert(
                &mut typography,
                Category::Typography,
                meta,
                typography_value(text),
                TokenKind::Typography,
            ),
            None => log::debug!("Skipping text style {:?}: no type style", meta.name),
        }
    }

    typography
}

fn typography_value(text: &TypeStyle) -> TypographyValue {
    let font_family = if text.font_family.contains(char::is_whitespace) {
        format!("\"{}\"", text.font_family)
    } else {
        text.font_family.clone()
    };

    let line_height = match text.line_height_px {
        Some(lh) if lh != 0.0 && text.font_size != 0.0 => round_to(lh / text.font_size, 3),
        _ => 1.0,
    };

    let letter_spacing = if text.letter_spacing == 0.0 {
        "normal".to_string()
    } else {
        px(text.letter_spacing)
    };

    TypographyValue {
        font_family,
        font_size: px_to_rem(text.font_size),
        font_weight: text.font_weight,
        line_height,
        letter_spacing,
    }
}

fn hex(color: &Rgba, alpha: f64) -> String {
    rgba_to_hex(color.r, color.g, color.b, alpha)
}

/// Insert under the normalized name. A later style with the same identifier
/// replaces the earlier one.
fn insert<V>(
    map: &mut TokenMap<V>,
    category: Category,
    meta: &StyleMeta,
    value: V,
    kind: TokenKind,
) {
    let ident = normalize(&meta.name);
    if ident.is_empty() {
        log::warn!("Style {:?} normalizes to an empty {category} identifier", meta.name);
    }
    let token = Token::new(value, kind, meta.label());
    if map.insert(ident.clone(), token).is_some() {
        log::warn!(
            "Duplicate {category} identifier {ident:?}: {:?} replaces an earlier style",
            meta.name
        );
    } else {
        log::debug!("Processed {category} token: {} -> {ident}", meta.name);
    }
}
