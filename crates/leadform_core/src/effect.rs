/// Validated, trimmed field values ready for dispatch.
///
/// `email` is never empty here: a blank input has already been replaced by
/// the `"not-provided"` sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadDraft {
    pub job_title: String,
    pub city: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Dispatch { draft: LeadDraft },
}
