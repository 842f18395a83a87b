use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use chrono::Utc;
use form_logging::form_info;

use crate::dispatch::{DispatchSettings, Dispatcher, ReqwestDispatcher};
use crate::payload::build_payload;
use crate::{EngineEvent, LeadDraft};

/// Derived-metadata sources are injectable so tests can pin them down;
/// the defaults stamp real wall-clock values.
#[derive(Clone)]
pub struct EngineConfig {
    pub settings: DispatchSettings,
    pub submitted_utc: Arc<dyn Fn() -> String + Send + Sync>,
    pub lead_id: Arc<dyn Fn() -> String + Send + Sync>,
}

impl EngineConfig {
    pub fn new(settings: DispatchSettings) -> Self {
        Self {
            settings,
            submitted_utc: Arc::new(|| Utc::now().to_rfc3339()),
            lead_id: Arc::new(|| Utc::now().timestamp_millis().to_string()),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(DispatchSettings::default())
    }
}

enum EngineCommand {
    Dispatch { draft: LeadDraft },
}

/// Bridge between a synchronous front-end and the async dispatcher.
/// Commands go in over a channel; settled results come back as events.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let dispatcher = Arc::new(ReqwestDispatcher::new(config.settings.clone()));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let dispatcher = dispatcher.clone();
                let event_tx = event_tx.clone();
                let config = config.clone();
                runtime.spawn(async move {
                    handle_command(dispatcher.as_ref(), &config, command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn submit(&self, draft: LeadDraft) {
        let _ = self.cmd_tx.send(EngineCommand::Dispatch { draft });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    dispatcher: &dyn Dispatcher,
    config: &EngineConfig,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Dispatch { draft } => {
            let timestamp = (config.submitted_utc)();
            let id = (config.lead_id)();
            form_info!("dispatching lead id={} to {}", id, config.settings.endpoint);
            let payload = build_payload(&draft, &timestamp, &id);
            let result = dispatcher.dispatch(&payload).await;
            let _ = event_tx.send(EngineEvent::Settled { result });
        }
    }
}
