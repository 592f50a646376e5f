//! Core type definitions for the milestone verification oracle.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Content identifier naming a proof document in content-addressed storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProofCid(pub String);

impl ProofCid {
    pub fn new(cid: impl Into<String>) -> Self {
        Self(cid.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProofCid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProofCid {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ProofCid {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Proof category declared by the submitter.
///
/// Closed set of supported rule sets plus an explicit `Unsupported` variant.
/// An unrecognised type is a business outcome (the verification fails with a
/// status message), never a transport failure, so the original string is
/// preserved for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VerificationType {
    /// Expense receipts for purchased relief supplies.
    Receipts,
    /// Geo-tagged photographic evidence from the field.
    GeoTagged,
    /// Medical relief documentation with hospital sign-off.
    Medical,
    /// Final audit report with external auditor credentials.
    Audit,
    /// Any verification type with no registered rule set.
    Unsupported(String),
}

impl VerificationType {
    /// Parse the wire string used by the job protocol.
    pub fn parse(s: &str) -> Self {
        match s {
            "receipts" => Self::Receipts,
            "geo-tagged" => Self::GeoTagged,
            "medical" => Self::Medical,
            "audit" => Self::Audit,
            other => Self::Unsupported(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Receipts => "receipts",
            Self::GeoTagged => "geo-tagged",
            Self::Medical => "medical",
            Self::Audit => "audit",
            Self::Unsupported(s) => s,
        }
    }

    /// Whether a rule set exists for this type.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }
}

impl fmt::Display for VerificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for VerificationType {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for VerificationType {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl Serialize for VerificationType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for VerificationType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}
