#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ShortenUrl {
        request_id: crate::RequestId,
        url: String,
    },
    CopyToClipboard {
        text: String,
    },
}
