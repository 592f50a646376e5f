//! Proof validation rule sets.
//!
//! Parses fetched proof text as JSON and applies exactly one rule set chosen
//! by the declared verification type. All checks are presence/shape checks:
//! a false positive releases escrowed funds irrecoverably, while a false
//! negative only delays release and can be resubmitted, so any missing field
//! rejects the whole document.

mod rules;

use serde_json::Value;
use tracing::debug;

use crate::domain::VerificationType;

pub use rules::{verify_audit, verify_geo_tagged, verify_medical, verify_receipts, MIN_GEO_IMAGES};

/// Status message for a completed rule-set evaluation.
pub const VERIFICATION_COMPLETED: &str = "Verification completed";

/// Status message when the declared verification type has no rule set.
pub const UNKNOWN_VERIFICATION_TYPE: &str = "Unknown verification type";

/// Status message when the proof document is not valid JSON.
pub const MALFORMED_PROOF: &str = "Malformed proof document";

/// Verdict produced by the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub verified: bool,
    pub status_msg: String,
}

impl Verdict {
    fn completed(verified: bool) -> Self {
        Self {
            verified,
            status_msg: VERIFICATION_COMPLETED.to_string(),
        }
    }

    fn rejected(status_msg: &str) -> Self {
        Self {
            verified: false,
            status_msg: status_msg.to_string(),
        }
    }
}

/// Parse proof text and apply the rule set for `verification_type`.
///
/// Never fails: malformed JSON and unknown verification types are business
/// outcomes carried in the verdict, not faults surfaced to the caller.
pub fn validate_proof(verification_type: &VerificationType, text: &str) -> Verdict {
    let proof: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(err) => {
            debug!(%err, "proof document is not valid JSON");
            return Verdict::rejected(MALFORMED_PROOF);
        }
    };

    let verified = match verification_type {
        VerificationType::Receipts => rules::verify_receipts(&proof),
        VerificationType::GeoTagged => rules::verify_geo_tagged(&proof),
        VerificationType::Medical => rules::verify_medical(&proof),
        VerificationType::Audit => rules::verify_audit(&proof),
        VerificationType::Unsupported(other) => {
            debug!(verification_type = %other, "no rule set for verification type");
            return Verdict::rejected(UNKNOWN_VERIFICATION_TYPE);
        }
    };

    Verdict::completed(verified)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn receipt() -> serde_json::Value {
        json!({
            "vendorName": "Relief Supplies Co",
            "amount": 1250.00,
            "date": "2023-01-15",
            "itemList": ["tents", "blankets"],
        })
    }

    #[test]
    fn test_receipts_all_fields_verifies() {
        let proof = json!({ "receipts": [receipt(), receipt()] }).to_string();
        let verdict = validate_proof(&VerificationType::Receipts, &proof);
        assert!(verdict.verified);
        assert_eq!(verdict.status_msg, VERIFICATION_COMPLETED);
    }

    #[test]
    fn test_receipts_single_missing_field_rejects() {
        let mut bad = receipt();
        bad.as_object_mut().unwrap().remove("date");
        let proof = json!({ "receipts": [receipt(), bad] }).to_string();

        let verdict = validate_proof(&VerificationType::Receipts, &proof);
        assert!(!verdict.verified);
        assert_eq!(verdict.status_msg, VERIFICATION_COMPLETED);
    }

    #[test]
    fn test_receipts_empty_list_rejects() {
        let verdict = validate_proof(&VerificationType::Receipts, r#"{"receipts":[]}"#);
        assert!(!verdict.verified);
    }

    #[test]
    fn test_receipts_wrong_shape_rejects() {
        let verdict = validate_proof(&VerificationType::Receipts, r#"{"receipts":"a lot"}"#);
        assert!(!verdict.verified);
    }

    #[test]
    fn test_geo_tagged_below_image_floor_rejects() {
        // Field-complete but only one image.
        let proof = json!({
            "images": [{
                "latitude": 23.81,
                "longitude": 90.41,
                "timestamp": "2023-02-01T10:00:00Z",
                "ipfsCid": "QmImg1",
            }],
        })
        .to_string();

        let verdict = validate_proof(&VerificationType::GeoTagged, &proof);
        assert!(!verdict.verified);
    }

    #[test]
    fn test_geo_tagged_five_complete_images_verifies() {
        let image = json!({
            "latitude": 23.81,
            "longitude": 90.41,
            "timestamp": "2023-02-01T10:00:00Z",
            "ipfsCid": "QmImg1",
        });
        let images = vec![image; 5];
        let proof = json!({ "images": images }).to_string();

        let verdict = validate_proof(&VerificationType::GeoTagged, &proof);
        assert!(verdict.verified);
    }

    #[test]
    fn test_geo_tagged_image_without_cid_rejects() {
        let complete = json!({
            "latitude": 23.81,
            "longitude": 90.41,
            "timestamp": "2023-02-01T10:00:00Z",
            "ipfsCid": "QmImg1",
        });
        let mut incomplete = complete.clone();
        incomplete.as_object_mut().unwrap().remove("ipfsCid");
        let proof = json!({
            "images": [complete.clone(), complete.clone(), complete.clone(), complete, incomplete],
        })
        .to_string();

        let verdict = validate_proof(&VerificationType::GeoTagged, &proof);
        assert!(!verdict.verified);
    }

    #[test]
    fn test_medical_requires_hospital_signature() {
        let complete = json!({
            "medicalReports": [{"patientCount": 120}],
            "doctorVerifications": [{"doctorId": "D-9"}],
            "hospitalVerification": {"signature": "0xabc"},
        })
        .to_string();
        assert!(validate_proof(&VerificationType::Medical, &complete).verified);

        let unsigned = json!({
            "medicalReports": [{"patientCount": 120}],
            "doctorVerifications": [{"doctorId": "D-9"}],
            "hospitalVerification": {},
        })
        .to_string();
        assert!(!validate_proof(&VerificationType::Medical, &unsigned).verified);
    }

    #[test]
    fn test_audit_requires_auditor_credentials() {
        let complete = json!({
            "auditReport": {"summary": "funds accounted for"},
            "communityFeedback": [{"rating": 5}],
            "externalAuditorVerification": {"auditorId": "AUD-1", "signature": "0xdef"},
        })
        .to_string();
        assert!(validate_proof(&VerificationType::Audit, &complete).verified);

        let anonymous = json!({
            "auditReport": {"summary": "funds accounted for"},
            "communityFeedback": [{"rating": 5}],
            "externalAuditorVerification": {"signature": "0xdef"},
        })
        .to_string();
        assert!(!validate_proof(&VerificationType::Audit, &anonymous).verified);
    }

    #[test]
    fn test_unknown_type_rejects_with_message() {
        let vt = VerificationType::Unsupported("satellite".to_string());
        let verdict = validate_proof(&vt, r#"{"anything": true}"#);
        assert!(!verdict.verified);
        assert_eq!(verdict.status_msg, UNKNOWN_VERIFICATION_TYPE);
    }

    #[test]
    fn test_malformed_json_rejects_without_panicking() {
        let verdict = validate_proof(&VerificationType::Receipts, "not json at all {{{");
        assert!(!verdict.verified);
        assert_eq!(verdict.status_msg, MALFORMED_PROOF);
    }

    #[test]
    fn test_zero_amount_fails_presence_check() {
        // Presence follows the submission contract: the number zero does not
        // count as a present amount.
        let mut zero = receipt();
        zero.as_object_mut()
            .unwrap()
            .insert("amount".to_string(), json!(0));
        let proof = json!({ "receipts": [zero] }).to_string();

        assert!(!validate_proof(&VerificationType::Receipts, &proof).verified);
    }

    #[test]
    fn test_empty_item_list_counts_as_present() {
        let mut sparse = receipt();
        sparse
            .as_object_mut()
            .unwrap()
            .insert("itemList".to_string(), json!([]));
        let proof = json!({ "receipts": [sparse] }).to_string();

        assert!(validate_proof(&VerificationType::Receipts, &proof).verified);
    }
}
