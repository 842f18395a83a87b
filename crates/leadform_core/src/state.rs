use crate::status::StatusLine;
use crate::view_model::FormViewModel;

/// One of the three user-editable inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    JobTitle,
    City,
    Email,
}

/// Whether a submission attempt is currently awaiting the webhook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    InFlight,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormState {
    job_title: String,
    city: String,
    email: String,
    submission: SubmissionStatus,
    status_line: Option<StatusLine>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::JobTitle => &self.job_title,
            Field::City => &self.city,
            Field::Email => &self.email,
        }
    }

    /// Overwrites exactly one field; the other two are untouched.
    pub(crate) fn set_field(&mut self, field: Field, value: String) {
        match field {
            Field::JobTitle => self.job_title = value,
            Field::City => self.city = value,
            Field::Email => self.email = value,
        }
    }

    pub fn submission(&self) -> SubmissionStatus {
        self.submission
    }

    pub fn status_line(&self) -> Option<&StatusLine> {
        self.status_line.as_ref()
    }

    pub(crate) fn set_status(&mut self, line: StatusLine) {
        self.status_line = Some(line);
    }

    /// Enter the in-flight state and drop any message from a previous attempt.
    pub(crate) fn begin_submission(&mut self) {
        self.submission = SubmissionStatus::InFlight;
        self.status_line = None;
    }

    /// Leave the in-flight state. Runs on every settlement path.
    pub(crate) fn finish_submission(&mut self) {
        self.submission = SubmissionStatus::Idle;
    }

    pub(crate) fn reset_fields(&mut self) {
        self.job_title.clear();
        self.city.clear();
        self.email.clear();
    }

    pub fn view(&self) -> FormViewModel {
        FormViewModel::of(self)
    }
}
