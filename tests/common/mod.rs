//! Common test fixtures for integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};

/// CID used for the fixture proof documents.
pub const TEST_CID: &str = "QmTestProof123";

/// A well-formed receipts proof document.
pub fn receipts_proof_document() -> Value {
    json!({
        "receipts": [
            {
                "vendorName": "Relief Supplies Co",
                "amount": 1250.00,
                "date": "2023-01-15",
                "itemList": ["tents", "blankets", "water filters"],
            },
            {
                "vendorName": "Gulf Medical Traders",
                "amount": 640.50,
                "date": "2023-01-18",
                "itemList": ["first aid kits"],
            },
        ],
    })
}

/// A geo-tagged proof document with `count` complete images.
pub fn geo_proof_document(count: usize) -> Value {
    let image = json!({
        "latitude": 23.8103,
        "longitude": 90.4125,
        "timestamp": "2023-02-01T10:00:00Z",
        "ipfsCid": "QmImg1",
    });
    json!({ "images": vec![image; count] })
}

/// A complete medical proof document.
pub fn medical_proof_document() -> Value {
    json!({
        "medicalReports": [{"patientCount": 120, "period": "2023-01"}],
        "doctorVerifications": [{"doctorId": "D-9", "licenseNo": "ML-2231"}],
        "hospitalVerification": {"hospitalId": "H-4", "signature": "0xabc123"},
    })
}

/// A complete audit proof document.
pub fn audit_proof_document() -> Value {
    json!({
        "auditReport": {"summary": "funds accounted for"},
        "communityFeedback": [{"rating": 5, "comment": "supplies arrived"}],
        "externalAuditorVerification": {"auditorId": "AUD-1", "signature": "0xdef456"},
    })
}

/// A job envelope wrapping the given data payload.
pub fn job_envelope(id: &str, data: Value) -> Value {
    json!({ "id": id, "data": data })
}

/// A well-formed verification request payload.
pub fn request_data(cid: &str, verification_type: &str) -> Value {
    json!({
        "projectId": 1,
        "milestoneId": 2,
        "proofCID": cid,
        "verificationType": verification_type,
    })
}
