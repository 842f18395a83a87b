use serde::Serialize;

use crate::LeadDraft;

/// Fixed status literal stamped onto every outbound lead.
pub const STATUS_NEW: &str = "new";
/// Fixed source tag identifying this form to the downstream workflow.
pub const SOURCE_TAG: &str = "lead-generation-form";

/// One lead plus derived metadata, in the field names the workflow expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    pub job_title: String,
    pub city: String,
    pub email: String,
    pub timestamp: String,
    pub status: &'static str,
    pub source: &'static str,
    pub id: String,
}

/// The outbound JSON document.
///
/// The record appears twice: nested under `data` and flattened at the top
/// level. The downstream workflow's expected schema is not pinned down
/// anywhere, so both shapes are sent and it reads whichever it wants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeadPayload {
    pub data: LeadRecord,
    #[serde(flatten)]
    pub flat: LeadRecord,
}

/// Builds the payload from a validated draft, an RFC 3339 timestamp and a
/// generated identifier. Identifiers are time-based; collisions are harmless
/// since the payload carries no idempotency contract.
pub fn build_payload(draft: &LeadDraft, timestamp: &str, id: &str) -> LeadPayload {
    let record = LeadRecord {
        job_title: draft.job_title.clone(),
        city: draft.city.clone(),
        email: draft.email.clone(),
        timestamp: timestamp.to_string(),
        status: STATUS_NEW,
        source: SOURCE_TAG,
        id: id.to_string(),
    };
    LeadPayload {
        data: record.clone(),
        flat: record,
    }
}
