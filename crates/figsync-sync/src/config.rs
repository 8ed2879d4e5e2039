//! Output locations for a sync run.

use std::path::{Path, PathBuf};

pub const DEFAULT_TOKENS_PATH: &str = "tokens/tokens.json";
pub const DEFAULT_CSS_PATH: &str = "css/variables.css";
pub const DEFAULT_MINIFIED_CSS_PATH: &str = "css/variables.min.css";

/// Where the snapshot and stylesheets live.
///
/// Relative paths resolve against the process working directory at the
/// moment files are opened; use [`SyncConfig::in_dir`] to anchor them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    pub tokens_path: PathBuf,
    pub css_path: PathBuf,
    pub minified_css_path: PathBuf,
    /// If set, the previous snapshot is copied here before it is replaced.
    pub backup_path: Option<PathBuf>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            tokens_path: PathBuf::from(DEFAULT_TOKENS_PATH),
            css_path: PathBuf::from(DEFAULT_CSS_PATH),
            minified_css_path: PathBuf::from(DEFAULT_MINIFIED_CSS_PATH),
            backup_path: None,
        }
    }
}

impl SyncConfig {
    /// The default layout under `root`.
    pub fn in_dir(root: &Path) -> Self {
        Self {
            tokens_path: root.join(DEFAULT_TOKENS_PATH),
            css_path: root.join(DEFAULT_CSS_PATH),
            minified_css_path: root.join(DEFAULT_MINIFIED_CSS_PATH),
            backup_path: None,
        }
    }

    pub fn with_backup(mut self, path: impl Into<PathBuf>) -> Self {
        self.backup_path = Some(path.into());
        self
    }
}
