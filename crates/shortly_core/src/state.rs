use crate::view_model::{AppViewModel, HistoryRowView};

pub type RequestId = u64;

/// Form phase: at most one shorten request is in flight at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Phase {
    #[default]
    Idle,
    Submitting,
}

/// Result of a shorten request, as reported back by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    Success {
        short_url: String,
        shortened_at: String,
    },
    Failed,
}

/// One successful shortening, kept in the session history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedShortening {
    pub long_url: String,
    pub short_url: String,
    pub shortened_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveRequest {
    request_id: RequestId,
    url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    input: String,
    phase: Phase,
    error: Option<String>,
    short_url: Option<String>,
    next_request_id: RequestId,
    active: Option<ActiveRequest>,
    history: Vec<CompletedShortening>,
    spinner_frame: u8,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            input: self.input.clone(),
            busy: self.phase == Phase::Submitting,
            error: self.error.clone(),
            short_url: self.short_url.clone(),
            // Most recent shortening first.
            history: self
                .history
                .iter()
                .rev()
                .map(|entry| HistoryRowView {
                    long_url: entry.long_url.clone(),
                    short_url: entry.short_url.clone(),
                    shortened_at: entry.shortened_at.clone(),
                })
                .collect(),
            spinner_frame: self.spinner_frame,
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    /// Completed shortenings in arrival order, for persistence.
    pub fn history_snapshot(&self) -> Vec<CompletedShortening> {
        self.history.clone()
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn input(&self) -> &str {
        &self.input
    }

    pub(crate) fn short_url(&self) -> Option<&str> {
        self.short_url.as_deref()
    }

    pub(crate) fn active_request(&self) -> Option<RequestId> {
        self.active.as_ref().map(|active| active.request_id)
    }

    pub(crate) fn set_input(&mut self, text: String) {
        if self.input != text {
            self.input = text;
            self.mark_dirty();
        }
    }

    /// Clears the previous result and error shown on screen.
    pub(crate) fn clear_outcome(&mut self) {
        if self.error.is_some() || self.short_url.is_some() {
            self.error = None;
            self.short_url = None;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
        self.mark_dirty();
    }

    /// Allocates a request id for the current input and enters `Submitting`.
    pub(crate) fn begin_request(&mut self) -> RequestId {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.active = Some(ActiveRequest {
            request_id,
            url: self.input.clone(),
        });
        self.phase = Phase::Submitting;
        self.mark_dirty();
        request_id
    }

    /// Publishes the outcome of the active request and returns to `Idle`.
    pub(crate) fn apply_completion(&mut self, outcome: RequestOutcome) {
        let Some(active) = self.active.take() else {
            return;
        };
        self.phase = Phase::Idle;
        match outcome {
            RequestOutcome::Success {
                short_url,
                shortened_at,
            } => {
                self.history.push(CompletedShortening {
                    long_url: active.url,
                    short_url: short_url.clone(),
                    shortened_at,
                });
                self.short_url = Some(short_url);
            }
            RequestOutcome::Failed => {
                self.error = Some(crate::REQUEST_FAILED_ERROR.to_string());
            }
        }
        self.mark_dirty();
    }

    pub(crate) fn restore_history(&mut self, entries: Vec<CompletedShortening>) {
        if entries.is_empty() {
            return;
        }
        self.history = entries;
        self.mark_dirty();
    }

    /// Advances the pending-request spinner; a no-op while idle.
    pub(crate) fn advance_spinner(&mut self) {
        if self.phase == Phase::Submitting {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
            self.mark_dirty();
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
