//! Error mapping for the job-callback protocol.
//!
//! Only system faults surface as errored envelopes. Business outcomes
//! (failed verification, unknown type, malformed proof) resolve to a
//! successful envelope carrying `verified=false` so the caller does not
//! blindly retry them.

use axum::http::StatusCode;

use crate::infra::OracleError;

use super::types::JobErrored;

/// HTTP-equivalent status for an oracle error.
///
/// Validation failures are the caller's fault (400-class); everything else
/// is a system fault (500-class) the caller may retry.
pub fn error_status(err: &OracleError) -> StatusCode {
    match err {
        OracleError::Validation { .. } => StatusCode::BAD_REQUEST,
        OracleError::Fetch { .. }
        | OracleError::Decode { .. }
        | OracleError::Configuration(_)
        | OracleError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Build the errored envelope for a failed job.
pub fn errored(job_run_id: String, err: &OracleError) -> (StatusCode, JobErrored) {
    let status = error_status(err);
    (
        status,
        JobErrored::new(job_run_id, status.as_u16(), err.to_string()),
    )
}
