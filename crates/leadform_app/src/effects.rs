use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use form_logging::{form_info, form_warn};
use leadform_core::{Effect, Msg};
use leadform_engine::{EngineConfig, EngineEvent, EngineHandle};

/// Executes core effects against the dispatch engine and forwards settled
/// results back to the front-end as messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>) -> Self {
        let engine = EngineHandle::new(EngineConfig::default());
        let runner = Self { engine };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Dispatch { draft } => {
                    form_info!(
                        "Dispatch job_title={} city={} email_set={}",
                        draft.job_title,
                        draft.city,
                        draft.email != "not-provided"
                    );
                    self.engine.submit(map_draft(draft));
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                match event {
                    EngineEvent::Settled { result } => {
                        let result = match result {
                            Ok(ack) => Ok(map_ack(ack)),
                            Err(error) => {
                                form_warn!("Submission failed: {}", error);
                                Err(map_failure(error))
                            }
                        };
                        if msg_tx.send(Msg::SubmissionSettled { result }).is_err() {
                            break;
                        }
                    }
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_draft(draft: leadform_core::LeadDraft) -> leadform_engine::LeadDraft {
    leadform_engine::LeadDraft {
        job_title: draft.job_title,
        city: draft.city,
        email: draft.email,
    }
}

fn map_ack(ack: leadform_engine::SubmitAck) -> leadform_core::SubmitAck {
    leadform_core::SubmitAck {
        message: ack.message,
    }
}

fn map_failure(error: leadform_engine::SubmitError) -> leadform_core::SubmitFailure {
    leadform_core::SubmitFailure {
        kind: map_kind(error.kind),
        message: error.message,
    }
}

fn map_kind(kind: leadform_engine::FailureKind) -> leadform_core::FailureKind {
    match kind {
        leadform_engine::FailureKind::WorkflowMisconfigured => {
            leadform_core::FailureKind::WorkflowMisconfigured
        }
        leadform_engine::FailureKind::ServerError => leadform_core::FailureKind::ServerError,
        leadform_engine::FailureKind::WebhookNotFound => {
            leadform_core::FailureKind::WebhookNotFound
        }
        leadform_engine::FailureKind::AccessDenied => leadform_core::FailureKind::AccessDenied,
        leadform_engine::FailureKind::HttpStatus(code) => {
            leadform_core::FailureKind::HttpStatus(code)
        }
        leadform_engine::FailureKind::ConnectionFailed => {
            leadform_core::FailureKind::ConnectionFailed
        }
        leadform_engine::FailureKind::CrossOriginBlocked => {
            leadform_core::FailureKind::CrossOriginBlocked
        }
        leadform_engine::FailureKind::Aborted => leadform_core::FailureKind::Aborted,
        leadform_engine::FailureKind::TransportOther => leadform_core::FailureKind::TransportOther,
    }
}
