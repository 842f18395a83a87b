//! Leadform engine: payload construction and webhook dispatch.
mod dispatch;
mod engine;
mod payload;
mod types;

pub use dispatch::{
    classify_transport_text, DispatchSettings, Dispatcher, ReqwestDispatcher, DEFAULT_WEBHOOK_URL,
};
pub use engine::{EngineConfig, EngineHandle};
pub use payload::{build_payload, LeadPayload, LeadRecord, SOURCE_TAG, STATUS_NEW};
pub use types::{EngineEvent, FailureKind, LeadDraft, SubmitAck, SubmitError};
