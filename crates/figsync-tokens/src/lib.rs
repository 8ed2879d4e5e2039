//! figsync token model
//!
//! The normalized design-token schema that every other figsync crate speaks:
//! typed token descriptors, the persisted [`TokenSnapshot`], the style-name
//! normalizer, and the small numeric helpers that keep rendered values stable.
//!
//! # Example
//!
//! ```
//! use figsync_tokens::{normalize, rgba_to_hex};
//!
//! assert_eq!(normalize("Primary/Brand Blue"), "primaryBrandBlue");
//! assert_eq!(rgba_to_hex(0.2, 0.4, 0.8, 1.0), "#3366cc");
//! ```

pub mod naming;
pub mod number;
pub mod token;

pub use naming::normalize;
pub use number::{format_number, px, px_to_rem, rgba_to_hex, round_to};
pub use token::{
    Category, HexColor, ShadowValue, Token, TokenCounts, TokenGroups, TokenKind, TokenMap,
    TokenSnapshot, TypographyValue,
};

/// Error reading or writing a token snapshot document.
#[derive(Debug, thiserror::Error)]
#[error("Invalid token snapshot: {message}")]
pub struct TokenError {
    pub message: String,
}

impl From<serde_json::Error> for TokenError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}
