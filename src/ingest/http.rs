//! HTTP client for the ingestion service
//!
//! Speaks the service's `/v1/ingest/text` contract: a JSON POST carrying the
//! document name and raw text, answered with the list of persisted document
//! records.

use crate::ingest::{IngestedDocument, Ingestor};
use crate::IngestError;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Serialize)]
struct IngestTextRequest<'a> {
    file_name: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct IngestTextResponse {
    data: Vec<IngestedDocument>,
}

/// Client for the ingestion service's text endpoint
#[derive(Debug, Clone)]
pub struct HttpIngestClient {
    client: Client,
    endpoint: Url,
}

impl HttpIngestClient {
    /// Creates a client for the service rooted at `base_url`
    pub fn new(client: Client, base_url: &Url) -> Result<Self, IngestError> {
        let endpoint = base_url.join("v1/ingest/text")?;
        Ok(Self { client, endpoint })
    }
}

impl Ingestor for HttpIngestClient {
    async fn ingest(
        &self,
        file_name: &str,
        text: &str,
    ) -> Result<Vec<IngestedDocument>, IngestError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&IngestTextRequest { file_name, text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IngestError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: IngestTextResponse = response.json().await?;
        Ok(parsed.data)
    }
}
