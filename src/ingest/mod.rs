//! Ingestion boundary
//!
//! The crawl hands its aggregated document to this seam exactly once per
//! run. The trait keeps the crawl logic independent of the concrete
//! service; [`HttpIngestClient`] talks to the real one.

mod http;

pub use http::HttpIngestClient;

use crate::IngestError;
use serde::Deserialize;

/// A document record returned by the ingestion service
#[derive(Debug, Clone, Deserialize)]
pub struct IngestedDocument {
    /// Identifier assigned by the service
    pub doc_id: String,
}

/// Boundary to the downstream text-ingestion service
#[allow(async_fn_in_trait)]
pub trait Ingestor {
    /// Submits a named document and returns the persisted records
    async fn ingest(
        &self,
        file_name: &str,
        text: &str,
    ) -> Result<Vec<IngestedDocument>, IngestError>;
}
