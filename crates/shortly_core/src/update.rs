use crate::state::Phase;
use crate::{AppState, Effect, Msg};

/// Shown when the user submits with nothing in the input box.
pub const EMPTY_INPUT_ERROR: &str = "Please enter a URL to shorten.";

/// Shown when a shorten request fails, whatever the cause.
pub const REQUEST_FAILED_ERROR: &str = "Failed to shorten URL. Please try again.";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            // The input box is inert while a request is in flight.
            if state.phase() == Phase::Submitting {
                return (state, Vec::new());
            }
            state.set_input(text);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // A request is already in flight; drop the re-submission.
            if state.phase() == Phase::Submitting {
                return (state, Vec::new());
            }
            state.clear_outcome();
            if state.input().is_empty() {
                state.set_error(EMPTY_INPUT_ERROR);
                return (state, Vec::new());
            }
            let url = state.input().to_string();
            let request_id = state.begin_request();
            vec![Effect::ShortenUrl { request_id, url }]
        }
        Msg::ShortenCompleted {
            request_id,
            outcome,
        } => {
            // Only the active request may publish a result; stale completions
            // from earlier submissions are dropped.
            if state.active_request() == Some(request_id) {
                state.apply_completion(outcome);
            }
            Vec::new()
        }
        Msg::CopyResultClicked => match state.short_url() {
            Some(short_url) => vec![Effect::CopyToClipboard {
                text: short_url.to_string(),
            }],
            None => Vec::new(),
        },
        Msg::RestoreHistory(entries) => {
            state.restore_history(entries);
            Vec::new()
        }
        Msg::Tick => {
            state.advance_spinner();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
