use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use shortly_logging::client_debug;

use crate::shorten::{HttpShortener, ShortenSettings, Shortener};
use crate::{ClientEvent, RequestId};

enum ClientCommand {
    Shorten { request_id: RequestId, url: String },
}

/// Handle to the background shortening worker.
///
/// Commands go in over a channel; the worker runs each request on its own
/// tokio task and reports completions back over the event channel. Clones
/// share both channels, so one clone can submit while another polls.
#[derive(Clone)]
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<ClientEvent>>>,
}

impl ClientHandle {
    pub fn new(settings: ShortenSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let shortener = Arc::new(HttpShortener::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let shortener = shortener.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(shortener.as_ref(), command, event_tx).await;
                });
            }
        });

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn submit(&self, request_id: RequestId, url: impl Into<String>) {
        let _ = self.cmd_tx.send(ClientCommand::Shorten {
            request_id,
            url: url.into(),
        });
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        let Ok(event_rx) = self.event_rx.lock() else {
            return None;
        };
        event_rx.try_recv().ok()
    }
}

async fn handle_command(
    shortener: &dyn Shortener,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::Shorten { request_id, url } => {
            let result = shortener.shorten(&url).await;
            if let Err(err) = &result {
                client_debug!(
                    "shorten request {} failed: {} ({})",
                    request_id,
                    err.kind,
                    err.message
                );
            }
            let _ = event_tx.send(ClientEvent::Completed { request_id, result });
        }
    }
}
