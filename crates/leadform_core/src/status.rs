use std::fmt;

/// Informal success/failure classification of a status message,
/// carried by the leading glyph of the rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Failure,
}

/// A single-line status message shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    kind: StatusKind,
    text: String,
}

impl StatusLine {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Failure,
            text: text.into(),
        }
    }

    pub fn kind(&self) -> StatusKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Full display form, glyph included.
    pub fn render(&self) -> String {
        match self.kind {
            StatusKind::Success => format!("✅ {}", self.text),
            StatusKind::Failure => format!("❌ {}", self.text),
        }
    }
}

/// Whatever the webhook acknowledged with on a 2xx response.
/// A non-JSON body settles as an empty ack.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmitAck {
    pub message: Option<String>,
}

/// A settled failure: a closed category plus whatever error text was recovered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitFailure {
    pub kind: FailureKind,
    pub message: String,
}

/// Closed taxonomy of submission failures.
///
/// The first five come from an HTTP response; the rest are transport-level,
/// produced before any response arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    WorkflowMisconfigured,
    ServerError,
    WebhookNotFound,
    AccessDenied,
    HttpStatus(u16),
    ConnectionFailed,
    CrossOriginBlocked,
    Aborted,
    TransportOther,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::WorkflowMisconfigured => write!(f, "workflow misconfigured"),
            FailureKind::ServerError => write!(f, "server error"),
            FailureKind::WebhookNotFound => write!(f, "webhook not found"),
            FailureKind::AccessDenied => write!(f, "access denied"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::ConnectionFailed => write!(f, "connection failed"),
            FailureKind::CrossOriginBlocked => write!(f, "cross-origin blocked"),
            FailureKind::Aborted => write!(f, "aborted"),
            FailureKind::TransportOther => write!(f, "transport error"),
        }
    }
}

pub(crate) fn success_status() -> StatusLine {
    StatusLine::success("Lead generation started successfully! Check your Google Sheet for results.")
}

pub(crate) fn failure_status(failure: &SubmitFailure) -> StatusLine {
    let text = match failure.kind {
        FailureKind::WorkflowMisconfigured => {
            "Workflow Error: The workflow is not configured properly. \
             Please check your workflow setup."
                .to_string()
        }
        FailureKind::ServerError => format!("Server Error (500): {}", failure.message),
        FailureKind::WebhookNotFound => "Webhook Not Found: Check your webhook URL".to_string(),
        FailureKind::AccessDenied => "Access Denied: Check your webhook permissions".to_string(),
        FailureKind::HttpStatus(code) => format!("Error ({code}): {}", failure.message),
        FailureKind::ConnectionFailed => {
            "Network Error: Cannot connect to the webhook. \
             Check if the URL is correct and the service is running."
                .to_string()
        }
        FailureKind::CrossOriginBlocked => {
            "CORS Error: The webhook needs to allow cross-origin requests".to_string()
        }
        FailureKind::Aborted => {
            "Request Timeout: The request took too long to complete".to_string()
        }
        FailureKind::TransportOther => format!("Unexpected Error: {}", failure.message),
    };
    StatusLine::failure(text)
}
