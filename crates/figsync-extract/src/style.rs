//! Resolved style records.
//!
//! Figma attaches a loosely-shaped node document to every published style.
//! Here each style carries only the payload that matters for its category.

use serde::Deserialize;

/// Fields shared by every style category.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleMeta {
    pub node_id: String,
    pub name: String,
    pub description: String,
}

impl StyleMeta {
    /// The style description, falling back to the style name.
    pub fn label(&self) -> &str {
        if self.description.is_empty() {
            &self.name
        } else {
            &self.description
        }
    }
}

/// One published style with its resolved node payload.
#[derive(Debug, Clone, PartialEq)]
pub enum RawStyle {
    /// `FILL`: the node's paint list, in Figma order.
    Fill { meta: StyleMeta, fills: Vec<Paint> },
    /// `EFFECT`: the node's effect list, in Figma order.
    Effect { meta: StyleMeta, effects: Vec<Effect> },
    /// `TEXT`: the node's type style, if it could be read.
    Text {
        meta: StyleMeta,
        style: Option<TypeStyle>,
    },
}

impl RawStyle {
    pub fn meta(&self) -> &StyleMeta {
        match self {
            RawStyle::Fill { meta, .. }
            | RawStyle::Effect { meta, .. }
            | RawStyle::Text { meta, .. } => meta,
        }
    }
}

/// Normalized RGBA color; every channel is in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    #[serde(default = "one")]
    pub a: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Paint {
    Solid {
        color: Rgba,
        #[serde(default = "one")]
        opacity: f64,
    },
    /// Gradients, images, and entries that could not be decoded.
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Effect {
    DropShadow {
        color: Rgba,
        offset: Vector,
        radius: f64,
        #[serde(default)]
        spread: f64,
    },
    /// Inner shadows, blurs, and entries that could not be decoded.
    #[serde(other)]
    Other,
}

/// Text attributes of a `TEXT` style node.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStyle {
    pub font_family: String,
    pub font_size: f64,
    pub font_weight: f64,
    #[serde(default)]
    pub line_height_px: Option<f64>,
    #[serde(default)]
    pub letter_spacing: f64,
}

fn one() -> f64 {
    1.0
}
