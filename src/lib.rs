//! Milestone Verification Oracle
//!
//! External adapter that verifies milestone proof documents for a
//! disaster-relief funding platform. A job runner submits a verification
//! request; the oracle fetches the referenced proof document from
//! content-addressed storage, applies the rule set for the declared
//! verification type, and returns the outcome in the job-callback envelope.
//!
//! ## Modules
//!
//! - [`domain`] - Core types (verification requests, types, results)
//! - [`verify`] - Proof validation rule sets
//! - [`infra`] - Proof store implementations and the error taxonomy
//! - [`oracle`] - Request orchestration (fetch, decode, validate)
//! - [`api`] - REST routes implementing the job-callback protocol
//! - [`metrics`] - Observability counters
//! - [`telemetry`] - Logging setup

pub mod api;
pub mod domain;
pub mod infra;
pub mod metrics;
pub mod oracle;
pub mod server;
pub mod telemetry;
pub mod verify;

// Re-export commonly used types
pub use domain::{ProofCid, VerificationRequest, VerificationResult, VerificationType};
pub use infra::{HttpGatewayStore, InMemoryProofStore, OracleError, ProofStore, Result};
pub use oracle::Oracle;
pub use verify::{validate_proof, Verdict};
