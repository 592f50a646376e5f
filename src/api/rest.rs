//! REST endpoints for the verification oracle.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tracing::{debug, instrument, warn};

use crate::api::error::errored;
use crate::api::types::{JobRequest, JobSuccess};
use crate::domain::VerificationRequest;
use crate::server::AppState;

/// Build the oracle router.
///
/// The job runner posts to `/`; `/v1/verify` is the same handler under a
/// versioned path for callers that cannot use the root.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(run_job))
        .route("/v1/verify", post(run_job))
        .route("/v1/metrics", get(get_metrics))
}

/// POST / - Execute a verification job.
#[instrument(skip(state, request))]
pub async fn run_job(State(state): State<AppState>, Json(request): Json<JobRequest>) -> Response {
    let job_run_id = request.job_run_id();
    debug!(job_run_id = %job_run_id, "received verification job");

    let verification = match VerificationRequest::from_value(&request.data) {
        Ok(verification) => verification,
        Err(err) => {
            warn!(job_run_id = %job_run_id, %err, "request failed validation");
            state.metrics.inc_counter("jobs_rejected").await;
            let (status, body) = errored(job_run_id, &err);
            return (status, Json(body)).into_response();
        }
    };

    match state.oracle.verify(&verification).await {
        Ok(result) => {
            let counter = if result.verified {
                "jobs_verified"
            } else {
                "jobs_unverified"
            };
            state.metrics.inc_counter(counter).await;
            (
                StatusCode::OK,
                Json(JobSuccess::new(job_run_id, result)),
            )
                .into_response()
        }
        Err(err) => {
            warn!(job_run_id = %job_run_id, %err, "verification job errored");
            state.metrics.inc_counter("jobs_errored").await;
            let (status, body) = errored(job_run_id, &err);
            (status, Json(body)).into_response()
        }
    }
}

/// GET /v1/metrics - Counter snapshot for debugging.
pub async fn get_metrics(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(state.metrics.snapshot().await)
}
