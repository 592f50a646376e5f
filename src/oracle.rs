//! Request orchestration for the verification oracle.
//!
//! Fetches the proof document from content-addressed storage, decodes it as
//! UTF-8 text, applies the rule set for the declared verification type, and
//! packages the outcome. Each request is independent; the only shared handle
//! is the proof store client, injected at construction and owned by the host
//! process.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::domain::{VerificationRequest, VerificationResult};
use crate::infra::{OracleError, ProofStore, Result};
use crate::verify::validate_proof;

/// Stateless verification oracle.
pub struct Oracle {
    store: Arc<dyn ProofStore>,
}

impl Oracle {
    pub fn new(store: Arc<dyn ProofStore>) -> Self {
        Self { store }
    }

    /// Run one verification request end to end.
    ///
    /// Idempotent: an identical request against an unchanged proof document
    /// yields an identical result.
    #[instrument(skip(self, request), fields(
        project_id = request.project_id,
        milestone_id = request.milestone_id,
        proof_cid = %request.proof_cid,
        verification_type = %request.verification_type,
    ))]
    pub async fn verify(&self, request: &VerificationRequest) -> Result<VerificationResult> {
        info!("processing verification request");

        let text = self.fetch_proof_text(request.proof_cid.as_str()).await?;
        let verdict = validate_proof(&request.verification_type, &text);

        info!(
            verified = verdict.verified,
            status_msg = %verdict.status_msg,
            "verification finished"
        );

        Ok(VerificationResult {
            verified: verdict.verified,
            status_msg: verdict.status_msg,
            proof_cid: request.proof_cid.clone(),
        })
    }

    /// Fetch the proof document and decode it as UTF-8 text.
    async fn fetch_proof_text(&self, cid: &str) -> Result<String> {
        let content = self.store.cat(cid).await?;
        String::from_utf8(content.to_vec()).map_err(|_| OracleError::Decode {
            cid: cid.to_string(),
        })
    }
}
