use std::time::Duration;

use form_logging::{form_debug, form_warn};
use reqwest::header::ACCEPT;
use reqwest::StatusCode;

use crate::{FailureKind, LeadPayload, SubmitAck, SubmitError};

/// The production webhook endpoint of the downstream automation workflow.
pub const DEFAULT_WEBHOOK_URL: &str =
    "https://preetkachhadiyaa.app.n8n.cloud/webhook-test/lead-generation";

/// Marker substring a misconfigured workflow puts in its 500 error body
/// when it finishes without producing an item.
const EMPTY_RETURN_MARKER: &str = "No item to return";

#[derive(Debug, Clone)]
pub struct DispatchSettings {
    pub endpoint: String,
    /// No timeout by default; the transport's own limits apply.
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
}

impl Default for DispatchSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_WEBHOOK_URL.to_string(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

#[async_trait::async_trait]
pub trait Dispatcher: Send + Sync {
    async fn dispatch(&self, payload: &LeadPayload) -> Result<SubmitAck, SubmitError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestDispatcher {
    settings: DispatchSettings,
}

impl ReqwestDispatcher {
    pub fn new(settings: DispatchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, SubmitError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| SubmitError::new(FailureKind::TransportOther, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Dispatcher for ReqwestDispatcher {
    async fn dispatch(&self, payload: &LeadPayload) -> Result<SubmitAck, SubmitError> {
        let url = reqwest::Url::parse(&self.settings.endpoint)
            .map_err(|err| SubmitError::new(FailureKind::TransportOther, err.to_string()))?;
        let client = self.build_client()?;

        form_debug!("POST {}", url);
        let response = client
            .post(url)
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        form_debug!("webhook responded with status {}", status);
        if status.is_success() {
            // A non-JSON success body is coerced into an empty ack,
            // never treated as an error.
            let ack = response.json::<SubmitAck>().await.unwrap_or_default();
            return Ok(ack);
        }

        let recovered = recover_error_message(response).await;
        let error = classify_status(status, recovered);
        form_warn!("dispatch failed: {}", error);
        Err(error)
    }
}

/// Pulls whatever error text the response carries: the `message` field of a
/// JSON body, else the raw text body, else nothing.
async fn recover_error_message(response: reqwest::Response) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    let text = response.text().await.unwrap_or_default();
    if let Ok(body) = serde_json::from_str::<ErrorBody>(&text) {
        if let Some(message) = body.message {
            return Some(message);
        }
    }
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn classify_status(status: StatusCode, recovered: Option<String>) -> SubmitError {
    match status.as_u16() {
        500 => {
            let message =
                recovered.unwrap_or_else(|| "Internal server error in workflow".to_string());
            if message.contains(EMPTY_RETURN_MARKER) {
                SubmitError::new(FailureKind::WorkflowMisconfigured, message)
            } else {
                SubmitError::new(FailureKind::ServerError, message)
            }
        }
        404 => SubmitError::new(
            FailureKind::WebhookNotFound,
            recovered.unwrap_or_default(),
        ),
        403 => SubmitError::new(FailureKind::AccessDenied, recovered.unwrap_or_default()),
        code => SubmitError::new(
            FailureKind::HttpStatus(code),
            recovered.unwrap_or_else(|| "Unknown error occurred".to_string()),
        ),
    }
}

/// Maps a request that never produced a response onto the closed transport
/// taxonomy, preferring reqwest's own predicates over error text.
fn map_transport_error(err: reqwest::Error) -> SubmitError {
    if err.is_connect() {
        return SubmitError::new(FailureKind::ConnectionFailed, err.to_string());
    }
    if err.is_timeout() {
        return SubmitError::new(FailureKind::Aborted, err.to_string());
    }
    classify_transport_text(err.to_string())
}

/// Last-resort classification by substring matching on the error description.
/// Heuristic by nature; only consulted when the transport gave no usable
/// predicate for the failure.
pub fn classify_transport_text(text: String) -> SubmitError {
    let kind = if text.contains("fetch") {
        FailureKind::ConnectionFailed
    } else if text.contains("CORS") {
        FailureKind::CrossOriginBlocked
    } else if text.to_ascii_lowercase().contains("abort") {
        FailureKind::Aborted
    } else {
        FailureKind::TransportOther
    };
    SubmitError::new(kind, text)
}
