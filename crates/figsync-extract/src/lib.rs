//! figsync extraction
//!
//! Turns Figma's published styles into a normalized [`TokenSnapshot`].
//! Wire documents are resolved into category-tagged [`RawStyle`] records,
//! then each extractor picks out the records of its category.
//!
//! ```text
//! styles + nodes → resolve() → Vec<RawStyle> → extract_tokens() → TokenSnapshot
//! ```

pub mod extractor;
pub mod figma;
pub mod style;

pub use extractor::{extract_colors, extract_shadows, extract_tokens, extract_typography};
pub use figma::{resolve, NodeEntry, NodesResponse, PublishedStyle, StyleDump, StylesResponse};
pub use style::{Effect, Paint, RawStyle, Rgba, StyleMeta, TypeStyle, Vector};

use figsync_tokens::TokenSnapshot;

/// A Figma document could not be decoded.
#[derive(Debug, thiserror::Error)]
#[error("Malformed Figma document: {message}")]
pub struct ExtractError {
    pub message: String,
}

impl From<serde_json::Error> for ExtractError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

/// Decode a combined styles + nodes dump and extract its tokens.
pub fn extract_from_dump(source: &str) -> Result<TokenSnapshot, ExtractError> {
    let dump = StyleDump::from_json(source)?;
    Ok(extract_tokens(&dump.resolve()))
}
