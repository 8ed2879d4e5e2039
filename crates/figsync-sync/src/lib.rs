//! figsync sync pipeline
//!
//! Fetches published styles, extracts tokens, diffs them against the
//! previous snapshot, and writes the new snapshot plus both stylesheets.
//!
//! ```text
//! StyleSource → extract → diff → generate → stage → commit → SyncResult
//! ```
//!
//! Nothing is written unless every stage up to the commit succeeds.

pub mod config;
pub mod diff;
pub mod figma;
pub mod source;
pub mod store;
pub mod syncer;

pub use config::SyncConfig;
pub use diff::{diff, CategoryDiff, ChangeCounts, Diff};
pub use figma::{AccessReport, FigmaClient, FileInfo};
pub use source::{JsonDumpSource, StaticSource, StyleSource};
pub use store::{PreviousSnapshot, SnapshotStore, Transaction};
pub use syncer::{regenerate, SyncReport, SyncResult, Syncer};

use std::path::PathBuf;

use figsync_extract::ExtractError;
use figsync_tokens::TokenError;

/// Any failure that aborts a sync run.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("Figma request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Figma API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to fetch styles: {0}")]
    Fetch(String),

    #[error(transparent)]
    Decode(#[from] ExtractError),

    #[error(transparent)]
    Snapshot(#[from] TokenError),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SyncError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SyncError::Io {
            path: path.into(),
            source,
        }
    }
}
