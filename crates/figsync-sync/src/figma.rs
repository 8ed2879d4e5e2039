//! Figma REST client.

use std::fmt;
use std::time::Duration;

use figsync_extract::{resolve, NodesResponse, PublishedStyle, RawStyle, StylesResponse};
use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::source::StyleSource;
use crate::SyncError;

pub const DEFAULT_BASE_URL: &str = "https://api.figma.com/v1";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// File metadata from `GET /files/:key`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub last_modified: Option<String>,
}

/// What the token can see of a file: its metadata and published styles.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessReport {
    pub file: FileInfo,
    pub styles: Vec<PublishedStyle>,
}

impl AccessReport {
    /// Published styles of one `style_type`, e.g. `FILL`.
    pub fn of_type<'a>(&'a self, style_type: &'a str) -> impl Iterator<Item = &'a PublishedStyle> {
        self.styles
            .iter()
            .filter(move |style| style.style_type == style_type)
    }

    pub fn count(&self, style_type: &str) -> usize {
        self.of_type(style_type).count()
    }
}

/// Reads published styles of one Figma file through the REST API.
#[derive(Clone)]
pub struct FigmaClient {
    http: Client,
    base_url: String,
    file_key: String,
    token: String,
}

impl fmt::Debug for FigmaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FigmaClient")
            .field("base_url", &self.base_url)
            .field("file_key", &self.file_key)
            .finish_non_exhaustive()
    }
}

impl FigmaClient {
    pub fn new(token: impl Into<String>, file_key: impl Into<String>) -> Result<Self, SyncError> {
        Self::with_options(token, file_key, DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    pub fn with_options(
        token: impl Into<String>,
        file_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SyncError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            file_key: file_key.into(),
            token: token.into(),
        })
    }

    pub fn file_key(&self) -> &str {
        &self.file_key
    }

    /// Check that the token can read the file and its published styles.
    ///
    /// Fetches the file metadata at depth 1 and the style list. Node
    /// documents are not requested.
    pub fn check_access(&self) -> Result<AccessReport, SyncError> {
        let file: FileInfo = self.get("", &[("depth", "1")])?;
        log::info!("File {} is readable: {}", self.file_key, file.name);
        let styles: StylesResponse = self.get("/styles", &[])?;
        Ok(AccessReport {
            file,
            styles: styles.meta.styles,
        })
    }

    fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, SyncError> {
        let url = format!("{}/files/{}{path}", self.base_url, self.file_key);
        log::debug!("GET {url}");
        let response = self
            .http
            .get(&url)
            .header("X-Figma-Token", &self.token)
            .query(query)
            .send()?;
        Ok(check(response)?.json()?)
    }
}

/// Turn a non-success status into [`SyncError::Api`], keeping Figma's
/// `err` message when the body carries one.
fn check(response: Response) -> Result<Response, SyncError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("err").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or(body);
    Err(SyncError::Api {
        status: status.as_u16(),
        message,
    })
}

impl StyleSource for FigmaClient {
    fn label(&self) -> &str {
        &self.file_key
    }

    fn fetch_styles(&self) -> Result<Vec<RawStyle>, SyncError> {
        let styles: StylesResponse = self.get("/styles", &[])?;
        let styles = styles.meta.styles;
        log::info!("Found {} published styles in {}", styles.len(), self.file_key);
        if styles.is_empty() {
            return Ok(Vec::new());
        }

        let ids = styles
            .iter()
            .map(|style| style.node_id.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let nodes: NodesResponse = self.get("/nodes", &[("ids", ids.as_str())])?;

        Ok(resolve(&styles, &nodes))
    }
}
