//! Snapshot persistence and all-or-nothing output writes.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use figsync_tokens::TokenSnapshot;
use tempfile::NamedTempFile;

use crate::SyncError;

/// The snapshot found before a sync, with the bytes it was parsed from.
///
/// `raw` is kept even when it failed to parse, so a backup preserves the
/// file exactly as it was.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviousSnapshot {
    pub snapshot: TokenSnapshot,
    pub raw: Option<String>,
}

/// The on-disk token snapshot.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw contents of the snapshot file, or `None` if it cannot be read.
    pub fn read_raw(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Some(contents),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::info!("No existing snapshot at {}", self.path.display());
                None
            }
            Err(err) => {
                log::warn!("Cannot read snapshot {}: {err}", self.path.display());
                None
            }
        }
    }

    /// The previous snapshot. Missing or invalid files load as empty.
    pub fn load_previous(&self) -> PreviousSnapshot {
        let raw = self.read_raw();
        let snapshot = match raw.as_deref().map(TokenSnapshot::from_json) {
            Some(Ok(snapshot)) => snapshot,
            Some(Err(err)) => {
                log::warn!("Ignoring corrupt snapshot {}: {err}", self.path.display());
                TokenSnapshot::default()
            }
            None => TokenSnapshot::default(),
        };
        PreviousSnapshot { snapshot, raw }
    }

    /// The snapshot, failing if it is missing or invalid.
    pub fn load(&self) -> Result<TokenSnapshot, SyncError> {
        let raw = fs::read_to_string(&self.path).map_err(|e| SyncError::io(&self.path, e))?;
        Ok(TokenSnapshot::from_json(&raw)?)
    }
}

struct StagedFile {
    target: PathBuf,
    file: NamedTempFile,
}

/// A set of file writes that become visible together.
///
/// [`stage`](Transaction::stage) writes contents to a temp file beside the
/// target. [`commit`](Transaction::commit) renames every staged file into
/// place. Dropping an uncommitted transaction removes the temp files and
/// leaves the targets untouched.
#[derive(Default)]
pub struct Transaction {
    staged: Vec<StagedFile>,
}

impl Transaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&mut self, target: &Path, contents: &[u8]) -> Result<(), SyncError> {
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| SyncError::io(dir, e))?;

        let mut file = NamedTempFile::new_in(dir).map_err(|e| SyncError::io(dir, e))?;
        file.write_all(contents)
            .and_then(|()| file.as_file().sync_all())
            .map_err(|e| SyncError::io(file.path(), e))?;

        self.staged.push(StagedFile {
            target: target.to_path_buf(),
            file,
        });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.staged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    /// Move every staged file into place, returning the written paths.
    pub fn commit(self) -> Result<Vec<PathBuf>, SyncError> {
        let mut written = Vec::with_capacity(self.staged.len());
        for StagedFile { target, file } in self.staged {
            file.persist(&target)
                .map_err(|e| SyncError::io(&target, e.error))?;
            log::debug!("Wrote {}", target.display());
            written.push(target);
        }
        Ok(written)
    }
}
