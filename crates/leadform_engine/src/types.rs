use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Validated, trimmed field values handed over by the front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadDraft {
    pub job_title: String,
    pub city: String,
    pub email: String,
}

/// Body of a 2xx response, as far as this engine cares about it.
/// A non-JSON success body deserializes to the default (empty) ack.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct SubmitAck {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct SubmitError {
    pub kind: FailureKind,
    pub message: String,
}

impl SubmitError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Closed classification of why a dispatch settled without success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// 500 whose error body names the known empty-return marker.
    WorkflowMisconfigured,
    /// Any other 500.
    ServerError,
    /// 404.
    WebhookNotFound,
    /// 403.
    AccessDenied,
    /// Any other non-2xx status.
    HttpStatus(u16),
    /// The connection could not be established.
    ConnectionFailed,
    /// Cross-origin restriction reported by the transport.
    CrossOriginBlocked,
    /// The request timed out or was aborted before settling.
    Aborted,
    /// Transport failure that fits no other category.
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

/// Events flowing back from the engine thread to the front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Settled {
        result: Result<SubmitAck, SubmitError>,
    },
}
