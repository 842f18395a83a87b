use crate::status::StatusLine;
use crate::{Field, FormState, SubmissionStatus};

/// Submit-control label while no attempt is outstanding.
pub const LABEL_IDLE: &str = "🚀 Start Lead Generation";
/// Submit-control label while an attempt is in flight.
pub const LABEL_IN_FLIGHT: &str = "⏳ Generating Leads...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormViewModel {
    pub job_title: String,
    pub city: String,
    pub email: String,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub status: Option<StatusLine>,
}

impl FormViewModel {
    pub(crate) fn of(state: &FormState) -> Self {
        let in_flight = state.submission() == SubmissionStatus::InFlight;
        Self {
            job_title: state.field(Field::JobTitle).to_string(),
            city: state.field(Field::City).to_string(),
            email: state.field(Field::Email).to_string(),
            submit_enabled: !in_flight,
            submit_label: if in_flight { LABEL_IN_FLIGHT } else { LABEL_IDLE },
            status: state.status_line().cloned(),
        }
    }
}
