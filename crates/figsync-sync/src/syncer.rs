//! The sync orchestrator.

use std::path::PathBuf;

use figsync_css::Stylesheet;
use figsync_extract::extract_tokens;
use figsync_tokens::{TokenCounts, TokenSnapshot};
use serde::{Serialize, Serializer};

use crate::config::SyncConfig;
use crate::diff::{diff, ChangeCounts, Diff};
use crate::source::StyleSource;
use crate::store::{SnapshotStore, Transaction};
use crate::SyncError;

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncReport {
    pub diff: Diff,
    pub snapshot: TokenSnapshot,
    pub counts: TokenCounts,
    /// Where the previous snapshot was copied, if a backup was taken.
    pub backup: Option<PathBuf>,
    pub written: Vec<PathBuf>,
}

/// What the invoking layer sees: a report, or the message of the first
/// failure.
///
/// Serializes as `{ "success": true, "diff", "hasChanges", "changeCounts",
/// "tokenCounts", "tokens", "backup"? }` or `{ "success": false, "error" }`.
#[derive(Debug, Clone, PartialEq)]
pub enum SyncResult {
    Success(SyncReport),
    Failure { error: String },
}

impl SyncResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SyncResult::Success(_))
    }

    pub fn report(&self) -> Option<&SyncReport> {
        match self {
            SyncResult::Success(report) => Some(report),
            SyncResult::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            SyncResult::Success(_) => None,
            SyncResult::Failure { error } => Some(error),
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum WireResult<'a> {
    #[serde(rename_all = "camelCase")]
    Success {
        success: bool,
        diff: &'a Diff,
        has_changes: bool,
        change_counts: ChangeCounts,
        token_counts: TokenCounts,
        tokens: &'a TokenSnapshot,
        #[serde(skip_serializing_if = "Option::is_none")]
        backup: Option<&'a PathBuf>,
    },
    Failure {
        success: bool,
        error: &'a str,
    },
}

impl Serialize for SyncResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = match self {
            SyncResult::Success(report) => WireResult::Success {
                success: true,
                diff: &report.diff,
                has_changes: report.diff.has_changes(),
                change_counts: report.diff.counts(),
                token_counts: report.counts,
                tokens: &report.snapshot,
                backup: report.backup.as_ref(),
            },
            SyncResult::Failure { error } => WireResult::Failure {
                success: false,
                error: error.as_str(),
            },
        };
        wire.serialize(serializer)
    }
}

/// Runs the fetch → extract → diff → persist → generate sequence.
pub struct Syncer<S> {
    config: SyncConfig,
    source: S,
}

impl<S: StyleSource> Syncer<S> {
    pub fn new(config: SyncConfig, source: S) -> Self {
        Self { config, source }
    }

    /// Run once and fold any failure into a [`SyncResult`].
    pub fn sync(&mut self) -> SyncResult {
        log::info!("Starting token sync from {}", self.source.label());
        match self.run() {
            Ok(report) => {
                log::info!("Token sync complete");
                SyncResult::Success(report)
            }
            Err(err) => {
                log::error!("Token sync failed: {err}");
                SyncResult::Failure {
                    error: err.to_string(),
                }
            }
        }
    }

    /// Run once. Target files are only replaced if every stage succeeds.
    pub fn run(&mut self) -> Result<SyncReport, SyncError> {
        let styles = self.source.fetch_styles()?;
        let snapshot = extract_tokens(&styles);

        let previous = SnapshotStore::new(&self.config.tokens_path).load_previous();
        let diff = diff(&previous.snapshot, &snapshot);

        let stylesheet = figsync_css::generate(&snapshot);

        let mut tx = Transaction::new();
        let backup = match (&self.config.backup_path, &previous.raw) {
            (Some(path), Some(raw)) => {
                tx.stage(path, raw.as_bytes())?;
                Some(path.clone())
            }
            _ => None,
        };
        stage_outputs(&mut tx, &self.config, &snapshot, &stylesheet)?;
        let written = tx.commit()?;

        Ok(SyncReport {
            counts: snapshot.counts(),
            diff,
            snapshot,
            backup,
            written,
        })
    }
}

/// Rewrite both stylesheets from the persisted snapshot, without fetching.
pub fn regenerate(config: &SyncConfig) -> Result<Stylesheet, SyncError> {
    let snapshot = SnapshotStore::new(&config.tokens_path).load()?;
    let stylesheet = figsync_css::generate(&snapshot);

    let mut tx = Transaction::new();
    tx.stage(&config.css_path, stylesheet.css.as_bytes())?;
    tx.stage(&config.minified_css_path, stylesheet.minified.as_bytes())?;
    tx.commit()?;

    log::info!("Generated {}", config.css_path.display());
    Ok(stylesheet)
}

fn stage_outputs(
    tx: &mut Transaction,
    config: &SyncConfig,
    snapshot: &TokenSnapshot,
    stylesheet: &Stylesheet,
) -> Result<(), SyncError> {
    let json = snapshot.to_json_pretty()?;
    tx.stage(&config.tokens_path, json.as_bytes())?;
    tx.stage(&config.css_path, stylesheet.css.as_bytes())?;
    tx.stage(&config.minified_css_path, stylesheet.minified.as_bytes())?;
    Ok(())
}
