use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use chrono::Utc;
use shortly_client::{ClientEvent, ClientHandle, ShortenSettings};
use shortly_core::{Effect, Msg, RequestOutcome};
use shortly_logging::{client_info, client_warn};

use super::clipboard;

pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>) -> Self {
        let mut settings = ShortenSettings::default();
        if let Ok(endpoint) = std::env::var("SHORTLY_ENDPOINT") {
            settings.endpoint = endpoint;
        }
        settings.completed_utc = std::sync::Arc::new(|| Utc::now().to_rfc3339());

        let client = ClientHandle::new(settings);
        let runner = Self { client };
        runner.spawn_event_loop(msg_tx);
        runner
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ShortenUrl { request_id, url } => {
                    client_info!("ShortenUrl request_id={} url={}", request_id, url);
                    self.client.submit(request_id, url);
                }
                Effect::CopyToClipboard { text } => {
                    if let Err(err) = clipboard::copy_to_clipboard(&text) {
                        client_warn!("Clipboard copy failed: {}", err);
                    }
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let client = self.client.clone();
        thread::spawn(move || loop {
            if let Some(event) = client.try_recv() {
                match event {
                    ClientEvent::Completed { request_id, result } => {
                        let outcome = match result {
                            Ok(shortening) => RequestOutcome::Success {
                                short_url: shortening.short_url,
                                shortened_at: shortening.shortened_at,
                            },
                            Err(err) => {
                                client_warn!(
                                    "Request {} failed: {} ({})",
                                    request_id,
                                    err.kind,
                                    err.message
                                );
                                RequestOutcome::Failed
                            }
                        };
                        let _ = msg_tx.send(Msg::ShortenCompleted {
                            request_id,
                            outcome,
                        });
                    }
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}
