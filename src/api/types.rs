//! Request and response envelopes for the job-callback protocol.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::domain::VerificationResult;

/// Inbound job envelope.
///
/// `data` stays untyped here; field-level validation happens in
/// [`crate::domain::VerificationRequest::from_value`] so error responses can
/// name the offending field.
#[derive(Debug, Deserialize)]
pub struct JobRequest {
    /// Correlation identifier assigned by the caller.
    #[serde(default)]
    pub id: Option<String>,
    /// Untyped request payload.
    #[serde(default)]
    pub data: Value,
}

impl JobRequest {
    /// Correlation id echoed in every response; generated when absent so
    /// even rejected jobs can be traced.
    pub fn job_run_id(&self) -> String {
        match &self.id {
            Some(id) if !id.is_empty() => id.clone(),
            _ => Uuid::new_v4().to_string(),
        }
    }
}

/// Successful job response.
#[derive(Debug, Serialize, Deserialize)]
pub struct JobSuccess {
    #[serde(rename = "jobRunID")]
    pub job_run_id: String,
    pub data: VerificationResult,
    /// The verification outcome, duplicated at the top level for callers
    /// that only read `result`.
    pub result: bool,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl JobSuccess {
    pub fn new(job_run_id: String, result: VerificationResult) -> Self {
        Self {
            job_run_id,
            result: result.verified,
            data: result,
            status_code: 200,
        }
    }
}

/// Errored job response.
#[derive(Debug, Serialize, Deserialize)]
pub struct JobErrored {
    #[serde(rename = "jobRunID")]
    pub job_run_id: String,
    /// Always `"errored"`.
    pub status: String,
    pub error: String,
    /// Always an empty object.
    pub data: Value,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

impl JobErrored {
    pub fn new(job_run_id: String, status_code: u16, error: impl Into<String>) -> Self {
        Self {
            job_run_id,
            status: "errored".to_string(),
            error: error.into(),
            data: Value::Object(Default::default()),
            status_code,
        }
    }
}
