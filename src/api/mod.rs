//! API layer for the verification oracle.
//!
//! REST endpoints implementing the external job-callback protocol.

mod error;
mod rest;
mod types;

pub use error::*;
pub use rest::*;
pub use types::*;
