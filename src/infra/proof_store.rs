//! Content-addressed proof storage.
//!
//! A proof document is named by its content identifier and retrieved as a
//! stream of byte chunks that the store concatenates. The trait is the seam
//! the oracle is generic over; tests substitute an in-memory map.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use futures::StreamExt;
#[cfg(test)]
use mockall::automock;
use tracing::{debug, instrument};

use super::{OracleError, Result};

/// Retrieve proof bytes by content identifier.
///
/// No retry is attempted here; retry policy belongs to the external caller.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProofStore: Send + Sync {
    /// Fetch the full byte content for `cid`.
    async fn cat(&self, cid: &str) -> Result<Bytes>;
}

/// Proof store backed by an IPFS HTTP gateway (`GET {base}/ipfs/{cid}`).
pub struct HttpGatewayStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGatewayStore {
    /// Build a gateway client with a bounded per-request timeout.
    ///
    /// The timeout covers the whole fetch including the body stream; expiry
    /// surfaces as a `Fetch` error the caller may retry.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OracleError::Configuration(format!("failed to build HTTP client: {e}")))?;

        let base_url = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ProofStore for HttpGatewayStore {
    #[instrument(skip(self))]
    async fn cat(&self, cid: &str) -> Result<Bytes> {
        let url = format!("{}/ipfs/{}", self.base_url, cid);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| OracleError::fetch(cid, e.to_string()))?;

        if !response.status().is_success() {
            return Err(OracleError::fetch(
                cid,
                format!("gateway returned {}", response.status()),
            ));
        }

        let mut stream = response.bytes_stream();
        let mut content = BytesMut::new();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| OracleError::fetch(cid, e.to_string()))?;
            content.extend_from_slice(&chunk);
        }

        debug!(bytes = content.len(), "fetched proof document");
        Ok(content.freeze())
    }
}

/// In-memory proof store for tests and local development.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProofStore {
    documents: HashMap<String, Bytes>,
}

impl InMemoryProofStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document under `cid`, replacing any previous content.
    pub fn insert(&mut self, cid: impl Into<String>, content: impl Into<Bytes>) {
        self.documents.insert(cid.into(), content.into());
    }

    /// Builder-style insert for fixtures.
    pub fn with_document(mut self, cid: impl Into<String>, content: impl Into<Bytes>) -> Self {
        self.insert(cid, content);
        self
    }
}

#[async_trait]
impl ProofStore for InMemoryProofStore {
    async fn cat(&self, cid: &str) -> Result<Bytes> {
        self.documents
            .get(cid)
            .cloned()
            .ok_or_else(|| OracleError::fetch(cid, "content identifier not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_store_hit_and_miss() {
        let store =
            InMemoryProofStore::new().with_document("Qm123", Bytes::from_static(b"{\"a\":1}"));

        let content = store.cat("Qm123").await.unwrap();
        assert_eq!(&content[..], b"{\"a\":1}");

        let err = store.cat("QmMissing").await.unwrap_err();
        assert!(matches!(err, OracleError::Fetch { .. }));
    }

    #[tokio::test]
    async fn test_gateway_url_normalization() {
        let store =
            HttpGatewayStore::new("https://ipfs.example/", Duration::from_secs(1)).unwrap();
        assert_eq!(store.base_url, "https://ipfs.example");
    }
}
