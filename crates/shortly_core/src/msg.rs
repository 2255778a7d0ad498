#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box (full replacement text).
    InputChanged(String),
    /// User submitted the form with the current input.
    SubmitClicked,
    /// Client completion for a shorten request.
    ShortenCompleted {
        request_id: crate::RequestId,
        outcome: crate::RequestOutcome,
    },
    /// User asked to copy the current short URL.
    CopyResultClicked,
    /// Restore previously completed shortenings from persisted state.
    RestoreHistory(Vec<crate::CompletedShortening>),
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
