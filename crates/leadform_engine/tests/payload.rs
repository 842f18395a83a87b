use leadform_engine::{build_payload, LeadDraft, SOURCE_TAG, STATUS_NEW};
use pretty_assertions::assert_eq;
use serde_json::json;

fn draft() -> LeadDraft {
    LeadDraft {
        job_title: "Full Stack Developer".to_string(),
        city: "New York".to_string(),
        email: "lead@example.com".to_string(),
    }
}

#[test]
fn payload_duplicates_record_nested_and_flat() {
    let payload = build_payload(&draft(), "2026-08-23T12:00:00+00:00", "1724407200000");
    let value = serde_json::to_value(&payload).expect("serializes");

    let record = json!({
        "jobTitle": "Full Stack Developer",
        "city": "New York",
        "email": "lead@example.com",
        "timestamp": "2026-08-23T12:00:00+00:00",
        "status": "new",
        "source": "lead-generation-form",
        "id": "1724407200000",
    });

    assert_eq!(value["data"], record);
    for (key, expected) in record.as_object().expect("object") {
        assert_eq!(&value[key], expected, "flat field {key}");
    }
}

#[test]
fn payload_carries_fixed_literals() {
    let payload = build_payload(&draft(), "ts", "id");
    assert_eq!(payload.data.status, STATUS_NEW);
    assert_eq!(payload.data.source, SOURCE_TAG);
    assert_eq!(payload.data, payload.flat);
}

#[test]
fn payload_preserves_draft_values_verbatim() {
    // Trimming happened upstream; the engine must not touch the values again.
    let draft = LeadDraft {
        job_title: "QA  Engineer".to_string(),
        city: "São Paulo".to_string(),
        email: "not-provided".to_string(),
    };
    let payload = build_payload(&draft, "ts", "id");
    assert_eq!(payload.data.job_title, "QA  Engineer");
    assert_eq!(payload.data.city, "São Paulo");
    assert_eq!(payload.data.email, "not-provided");
}
