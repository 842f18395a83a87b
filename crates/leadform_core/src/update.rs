use crate::status::{failure_status, success_status, StatusLine};
use crate::{Effect, Field, FormState, LeadDraft, Msg, SubmissionStatus};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: FormState, msg: Msg) -> (FormState, Vec<Effect>) {
    let effects = match msg {
        Msg::FieldEdited { field, value } => {
            state.set_field(field, value);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // Advisory guard only: the UI disables the control while a request
            // is outstanding, and a bypassed click is simply dropped here.
            if state.submission() == SubmissionStatus::InFlight {
                return (state, Vec::new());
            }
            match validate(&state) {
                Ok(draft) => {
                    state.begin_submission();
                    vec![Effect::Dispatch { draft }]
                }
                Err(line) => {
                    state.set_status(line);
                    Vec::new()
                }
            }
        }
        Msg::SubmissionSettled { result } => {
            // Finalization invariant: the in-flight flag clears on every
            // settlement path, success and failure alike.
            state.finish_submission();
            match result {
                Ok(_ack) => {
                    state.set_status(success_status());
                    state.reset_fields();
                }
                Err(failure) => state.set_status(failure_status(&failure)),
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// First-failure-wins required-field check. Email is never format-validated;
/// a blank email becomes the `"not-provided"` sentinel.
fn validate(state: &FormState) -> Result<LeadDraft, StatusLine> {
    let job_title = state.field(Field::JobTitle).trim();
    if job_title.is_empty() {
        return Err(StatusLine::failure("Job Title is required"));
    }
    let city = state.field(Field::City).trim();
    if city.is_empty() {
        return Err(StatusLine::failure("Target City is required"));
    }
    let email = state.field(Field::Email).trim();
    Ok(LeadDraft {
        job_title: job_title.to_string(),
        city: city.to_string(),
        email: if email.is_empty() {
            "not-provided".to_string()
        } else {
            email.to_string()
        },
    })
}
