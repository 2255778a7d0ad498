#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub input: String,
    pub busy: bool,
    pub error: Option<String>,
    pub short_url: Option<String>,
    pub history: Vec<HistoryRowView>,
    pub spinner_frame: u8,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRowView {
    pub long_url: String,
    pub short_url: String,
    pub shortened_at: String,
}
