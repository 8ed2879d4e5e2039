use indexmap::IndexMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::TokenError;

/// Token type tag, serialized as the descriptor's `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenKind {
    Color,
    BoxShadow,
    Typography,
}

/// A named design value: `{ value, type, description }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token<V> {
    pub value: V,
    #[serde(rename = "type")]
    pub kind: TokenKind,
    #[serde(default)]
    pub description: String,
}

impl<V> Token<V> {
    pub fn new(value: V, kind: TokenKind, description: impl Into<String>) -> Self {
        Self {
            value,
            kind,
            description: description.into(),
        }
    }
}

/// A `#rrggbb` or `#rrggbbaa` color string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexColor(pub String);

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Drop-shadow geometry and color, each already in CSS form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowValue {
    pub x: String,
    pub y: String,
    pub blur: String,
    pub spread: String,
    pub color: HexColor,
}

impl ShadowValue {
    /// `x y blur spread color`, the `box-shadow` shorthand.
    pub fn shorthand(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.x, self.y, self.blur, self.spread, self.color
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyValue {
    pub font_family: String,
    pub font_size: String,
    #[serde(serialize_with = "serialize_number")]
    pub font_weight: f64,
    #[serde(serialize_with = "serialize_number")]
    pub line_height: f64,
    pub letter_spacing: String,
}

/// Whole numbers are written without a fractional part (`400`, not `400.0`).
fn serialize_number<S: Serializer>(n: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if n.fract() == 0.0 && n.is_finite() && n.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*n as i64)
    } else {
        serializer.serialize_f64(*n)
    }
}

/// Identifier → token, in insertion order.
pub type TokenMap<V> = IndexMap<String, Token<V>>;

/// Token categories, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Colors,
    Shadows,
    Typography,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Colors, Category::Shadows, Category::Typography];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Colors => "colors",
            Category::Shadows => "shadows",
            Category::Typography => "typography",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenGroups {
    #[serde(default)]
    pub colors: TokenMap<HexColor>,
    #[serde(default)]
    pub shadows: TokenMap<ShadowValue>,
    #[serde(default)]
    pub typography: TokenMap<TypographyValue>,
}

/// The complete persisted set of tokens: `{ "global": { colors, shadows, typography } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenSnapshot {
    #[serde(default)]
    pub global: TokenGroups,
}

impl TokenSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a snapshot document.
    pub fn from_json(source: &str) -> Result<Self, TokenError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Serialize as two-space-indented JSON.
    pub fn to_json_pretty(&self) -> Result<String, TokenError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialized form of each token in one category, keyed by identifier.
    ///
    /// Used for change detection, where two descriptors are equal iff their
    /// JSON values are equal.
    pub fn serialized(&self, category: Category) -> IndexMap<&str, serde_json::Value> {
        fn values<V: Serialize>(map: &TokenMap<V>) -> IndexMap<&str, serde_json::Value> {
            map.iter()
                .map(|(id, token)| {
                    let value = serde_json::to_value(token).unwrap_or(serde_json::Value::Null);
                    (id.as_str(), value)
                })
                .collect()
        }

        match category {
            Category::Colors => values(&self.global.colors),
            Category::Shadows => values(&self.global.shadows),
            Category::Typography => values(&self.global.typography),
        }
    }

    pub fn counts(&self) -> TokenCounts {
        TokenCounts {
            colors: self.global.colors.len(),
            shadows: self.global.shadows.len(),
            typography: self.global.typography.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.counts().total() == 0
    }
}

/// Number of tokens per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenCounts {
    pub colors: usize,
    pub shadows: usize,
    pub typography: usize,
}

impl TokenCounts {
    pub fn total(&self) -> usize {
        self.colors + self.shadows + self.typography
    }
}
