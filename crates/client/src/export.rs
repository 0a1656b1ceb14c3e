//! Export download URL builders
//!
//! The export endpoints return files and are opened by direct navigation
//! (new tab, `window.location`, or a download manager), not fetched through
//! the JSON envelope path. The builders here produce fully-formed URLs and
//! never issue HTTP; bearer auth is deliberately absent because navigation
//! cannot carry headers.

use tapverse_domain::ContentKind;
use url::Url;

use crate::errors::ApiError;

/// File format an export endpoint can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

impl ExportFormat {
    /// Wire value for the `format` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
        }
    }
}

/// Builders for the three export navigation targets.
#[derive(Debug, Clone)]
pub struct ExportLinks {
    base_url: String,
}

impl ExportLinks {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Download URL for keyword research results.
    pub fn keywords(&self, seed: &str, format: ExportFormat) -> Result<Url, ApiError> {
        let mut url = self.endpoint("/export/keywords")?;
        url.query_pairs_mut()
            .append_pair("seed", seed)
            .append_pair("format", format.as_str());
        Ok(url)
    }

    /// Download URL for a project's stored content, optionally one kind only.
    pub fn content(
        &self,
        project_id: &str,
        kind: Option<ContentKind>,
        format: ExportFormat,
    ) -> Result<Url, ApiError> {
        let mut url = self.endpoint("/export/content")?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("project_id", project_id);
            if let Some(kind) = kind {
                pairs.append_pair("kind", kind.as_str());
            }
            pairs.append_pair("format", format.as_str());
        }
        Ok(url)
    }

    /// Download URL for a project's roadmap tasks.
    pub fn tasks(&self, project_id: &str, format: ExportFormat) -> Result<Url, ApiError> {
        let mut url = self.endpoint("/export/tasks")?;
        url.query_pairs_mut()
            .append_pair("project_id", project_id)
            .append_pair("format", format.as_str());
        Ok(url)
    }

    // `Url::join` would resolve against the host and drop the `/api` suffix,
    // so the path is appended textually before parsing.
    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| ApiError::Config(format!("invalid export URL: {}", e)))
    }
}
