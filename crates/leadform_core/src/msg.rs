use crate::status::{SubmitAck, SubmitFailure};
use crate::Field;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited one input field (whole-value replacement).
    FieldEdited { field: Field, value: String },
    /// User activated the submit control.
    SubmitClicked,
    /// The dispatch engine settled the outstanding attempt.
    SubmissionSettled {
        result: Result<SubmitAck, SubmitFailure>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
