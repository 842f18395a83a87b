//! Leadform core: pure form state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod status;
mod update;
mod view_model;

pub use effect::{Effect, LeadDraft};
pub use msg::Msg;
pub use state::{Field, FormState, SubmissionStatus};
pub use status::{FailureKind, StatusKind, StatusLine, SubmitAck, SubmitFailure};
pub use update::update;
pub use view_model::{FormViewModel, LABEL_IDLE, LABEL_IN_FLIGHT};
