use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{FailureKind, ShortenError, Shortening};

/// Default shortening endpoint, matching the local backend.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080";

#[derive(Clone)]
pub struct ShortenSettings {
    pub endpoint: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Clock for the `shortened_at` stamp, injected by the platform.
    pub completed_utc: Arc<dyn Fn() -> String + Send + Sync>,
}

impl Default for ShortenSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            completed_utc: Arc::new(String::new),
        }
    }
}

/// Request body sent to the shortening endpoint.
#[derive(Debug, Serialize)]
struct ShortenRequest<'a> {
    url: &'a str,
}

/// Response body expected from the shortening endpoint.
#[derive(Debug, Deserialize)]
struct ShortenResponse {
    short_url: String,
}

#[async_trait::async_trait]
pub trait Shortener: Send + Sync {
    async fn shorten(&self, long_url: &str) -> Result<Shortening, ShortenError>;
}

#[derive(Clone)]
pub struct HttpShortener {
    settings: ShortenSettings,
}

impl HttpShortener {
    pub fn new(settings: ShortenSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ShortenError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| ShortenError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Shortener for HttpShortener {
    async fn shorten(&self, long_url: &str) -> Result<Shortening, ShortenError> {
        let endpoint = reqwest::Url::parse(&self.settings.endpoint)
            .map_err(|err| ShortenError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
        let client = self.build_client()?;

        let response = client
            .post(endpoint)
            .json(&ShortenRequest { url: long_url })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ShortenError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body: ShortenResponse = response.json().await.map_err(|err| {
            if err.is_decode() {
                ShortenError::new(FailureKind::InvalidResponse, err.to_string())
            } else {
                map_reqwest_error(err)
            }
        })?;

        Ok(Shortening {
            short_url: body.short_url,
            shortened_at: (self.settings.completed_utc)(),
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ShortenError {
    if err.is_timeout() {
        return ShortenError::new(FailureKind::Timeout, err.to_string());
    }
    ShortenError::new(FailureKind::Network, err.to_string())
}
