//! Where raw styles come from.

use std::fs;
use std::path::{Path, PathBuf};

use figsync_extract::{RawStyle, StyleDump};

use crate::SyncError;

/// Supplies the published styles of one design file, with node payloads
/// already attached.
pub trait StyleSource {
    /// Human-readable label identifying this source.
    fn label(&self) -> &str;

    /// Fetch every published style.
    fn fetch_styles(&self) -> Result<Vec<RawStyle>, SyncError>;
}

impl<S: StyleSource + ?Sized> StyleSource for &S {
    fn label(&self) -> &str {
        (**self).label()
    }

    fn fetch_styles(&self) -> Result<Vec<RawStyle>, SyncError> {
        (**self).fetch_styles()
    }
}

impl<S: StyleSource + ?Sized> StyleSource for Box<S> {
    fn label(&self) -> &str {
        (**self).label()
    }

    fn fetch_styles(&self) -> Result<Vec<RawStyle>, SyncError> {
        (**self).fetch_styles()
    }
}

/// A local JSON file holding the styles and nodes responses side by side.
#[derive(Debug, Clone)]
pub struct JsonDumpSource {
    path: PathBuf,
    label: String,
}

impl JsonDumpSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = path.display().to_string();
        Self { path, label }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StyleSource for JsonDumpSource {
    fn label(&self) -> &str {
        &self.label
    }

    fn fetch_styles(&self) -> Result<Vec<RawStyle>, SyncError> {
        let raw = fs::read_to_string(&self.path).map_err(|e| SyncError::io(&self.path, e))?;
        Ok(StyleDump::from_json(&raw)?.resolve())
    }
}

/// Styles held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    styles: Vec<RawStyle>,
}

impl StaticSource {
    pub fn new(styles: Vec<RawStyle>) -> Self {
        Self { styles }
    }
}

impl StyleSource for StaticSource {
    fn label(&self) -> &str {
        "memory"
    }

    fn fetch_styles(&self) -> Result<Vec<RawStyle>, SyncError> {
        Ok(self.styles.clone())
    }
}
