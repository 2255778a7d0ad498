//! Shortly client: HTTP shortening worker and effect execution.
mod persist;
mod shorten;
mod types;
mod worker;

pub use persist::{AtomicFileWriter, PersistError};
pub use shorten::{HttpShortener, ShortenSettings, Shortener, DEFAULT_ENDPOINT};
pub use types::{ClientEvent, FailureKind, RequestId, ShortenError, Shortening};
pub use worker::ClientHandle;
