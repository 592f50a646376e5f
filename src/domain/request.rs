//! Verification request envelope and field-level validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::infra::OracleError;

use super::{ProofCid, VerificationType};

/// A validated verification request.
///
/// Constructed once per inbound call. The raw `data` payload is checked
/// field by field so the caller gets a 400-class error naming the offending
/// field before any storage fetch happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRequest {
    #[serde(rename = "projectId")]
    pub project_id: i64,
    #[serde(rename = "milestoneId")]
    pub milestone_id: i64,
    #[serde(rename = "proofCID")]
    pub proof_cid: ProofCid,
    #[serde(rename = "verificationType")]
    pub verification_type: VerificationType,
}

impl VerificationRequest {
    /// Validate an untyped job payload.
    ///
    /// `projectId` and `milestoneId` must be integral numbers; `proofCID`
    /// and `verificationType` must be non-empty strings.
    pub fn from_value(data: &Value) -> Result<Self, OracleError> {
        let project_id = require_integer(data, "projectId")?;
        let milestone_id = require_integer(data, "milestoneId")?;
        let proof_cid = require_string(data, "proofCID")?;
        let verification_type = require_string(data, "verificationType")?;

        Ok(Self {
            project_id,
            milestone_id,
            proof_cid: ProofCid::new(proof_cid),
            verification_type: VerificationType::parse(&verification_type),
        })
    }
}

/// Outcome of a single verification request.
///
/// Produced once per request and returned to the caller; on-chain submission
/// happens in a separate process outside this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub verified: bool,
    #[serde(rename = "statusMsg")]
    pub status_msg: String,
    #[serde(rename = "proofCID")]
    pub proof_cid: ProofCid,
}

fn require_integer(data: &Value, field: &'static str) -> Result<i64, OracleError> {
    match data.get(field) {
        None | Some(Value::Null) => Err(OracleError::missing_field(field)),
        Some(value) => value
            .as_i64()
            .ok_or_else(|| OracleError::invalid_field(field, "must be an integer")),
    }
}

fn require_string(data: &Value, field: &'static str) -> Result<String, OracleError> {
    match data.get(field) {
        None | Some(Value::Null) => Err(OracleError::missing_field(field)),
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::String(_)) => Err(OracleError::invalid_field(field, "must be non-empty")),
        Some(_) => Err(OracleError::invalid_field(field, "must be a string")),
    }
}
