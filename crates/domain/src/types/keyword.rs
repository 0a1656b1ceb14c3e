//! Keyword research rows

use serde::{Deserialize, Serialize};

/// Request body for `POST /keywords/research`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordResearchRequest {
    pub seed: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// One keyword suggestion with its metrics.
///
/// Metrics are optional on the wire; upstream providers omit them for
/// low-volume terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRow {
    pub keyword: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_volume: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpc: Option<f64>,
}
