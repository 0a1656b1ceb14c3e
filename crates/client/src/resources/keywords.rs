//! Keyword research operations

use tapverse_domain::{KeywordResearchRequest, KeywordRow};
use tracing::{debug, instrument};

use crate::api::ApiClient;
use crate::errors::ApiError;

/// Operations on `/keywords`.
pub struct KeywordsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> KeywordsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Run keyword research for a seed term.
    #[instrument(skip(self, request), fields(seed = %request.seed))]
    pub async fn research(&self, request: &KeywordResearchRequest) -> Result<Vec<KeywordRow>, ApiError> {
        let rows: Vec<KeywordRow> = self.client.post("/keywords/research", request).await?;
        debug!(rows = rows.len(), "keyword research completed");
        Ok(rows)
    }
}
