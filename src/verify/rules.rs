//! Per-type rule sets for proof documents.
//!
//! A field is "present" when it exists, is not null, and is not an empty
//! string, `false`, or the number zero. Arrays and objects count as present
//! even when empty. These semantics match the milestone submission contract;
//! note the quirk that `amount: 0` or `latitude: 0` fails the check.

use serde_json::Value;

/// Minimum number of geo-tagged images required as photographic evidence.
pub const MIN_GEO_IMAGES: usize = 5;

fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Some(Value::Bool(b)) => *b,
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn has_field(object: &Value, field: &str) -> bool {
    is_present(object.get(field))
}

/// Expense receipts: every receipt must carry vendor, amount, date, and an
/// item list.
pub fn verify_receipts(proof: &Value) -> bool {
    let receipts = match proof.get("receipts").and_then(Value::as_array) {
        Some(receipts) if !receipts.is_empty() => receipts,
        _ => return false,
    };

    receipts.iter().all(|receipt| {
        has_field(receipt, "vendorName")
            && has_field(receipt, "amount")
            && has_field(receipt, "date")
            && has_field(receipt, "itemList")
    })
}

/// Geo-tagged photographic evidence: at least [`MIN_GEO_IMAGES`] images,
/// each with coordinates, a timestamp, and the content identifier of the
/// stored image.
///
/// TODO(geofence): image coordinates are not yet checked against the
/// disaster zone boundary, and beneficiary signatures in the optional
/// `signatures` list are not verified.
pub fn verify_geo_tagged(proof: &Value) -> bool {
    let images = match proof.get("images").and_then(Value::as_array) {
        Some(images) if images.len() >= MIN_GEO_IMAGES => images,
        _ => return false,
    };

    images.iter().all(|image| {
        has_field(image, "latitude")
            && has_field(image, "longitude")
            && has_field(image, "timestamp")
            && has_field(image, "ipfsCid")
    })
}

/// Medical relief documentation: reports, doctor sign-off, and a hospital
/// signature. The signature bytes are not verified cryptographically.
pub fn verify_medical(proof: &Value) -> bool {
    has_field(proof, "medicalReports")
        && has_field(proof, "doctorVerifications")
        && proof
            .get("hospitalVerification")
            .map(|hospital| has_field(hospital, "signature"))
            .unwrap_or(false)
}

/// Final audit: report, community feedback, and external auditor
/// credentials (auditor id plus signature, presence only).
pub fn verify_audit(proof: &Value) -> bool {
    let auditor = match proof.get("externalAuditorVerification") {
        Some(auditor) if is_present(Some(auditor)) => auditor,
        _ => return false,
    };

    has_field(proof, "auditReport")
        && has_field(proof, "communityFeedback")
        && has_field(auditor, "auditorId")
        && has_field(auditor, "signature")
}
