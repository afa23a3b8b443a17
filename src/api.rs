//! Release-notes API client.
//!
//! A single GET against [`RELEASE_NOTES_PATH`]. Failures are not retried here;
//! retry policy belongs to the [`QueryClient`](crate::QueryClient).

use reqwest::blocking::Client;
use tracing::{debug, instrument};

use crate::domain::{Config, ReleaseNotes};

/// Path of the English release notes, relative to the API base URL.
pub const RELEASE_NOTES_PATH: &str = "/api/app/v1/release_notes/english/";

/// Why a release-notes fetch failed.
///
/// Cloneable so that a failed query can be cached and shown to every reader.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("Network response was not ok")]
    NotOk {
        /// The HTTP status code received.
        status: u16,
    },

    /// The request could not be completed or the body was not a valid
    /// payload.
    #[error("{0}")]
    Transport(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(error.to_string())
    }
}

/// Something that can produce the release-notes payload.
pub trait ReleaseNotesSource: Send + Sync {
    /// Fetches the release notes once.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if the payload could not be retrieved.
    fn fetch(&self) -> Result<ReleaseNotes, FetchError>;
}

/// Fetches release notes from the HTTP API.
#[derive(Debug, Clone)]
pub struct HttpReleaseNotes {
    client: Client,
    url: String,
}

impl HttpReleaseNotes {
    /// Builds a client for the API described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let mut builder = Client::builder()
            .user_agent(format!("release-faq/{}", env!("CARGO_PKG_VERSION")))
            .danger_accept_invalid_certs(config.accept_invalid_certs);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let url = format!(
            "{}{RELEASE_NOTES_PATH}",
            config.api_base_url.trim_end_matches('/')
        );

        Ok(Self {
            client: builder.build()?,
            url,
        })
    }

    /// The full URL that is requested.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ReleaseNotesSource for HttpReleaseNotes {
    #[instrument(level = "debug", skip(self), fields(url = %self.url))]
    fn fetch(&self) -> Result<ReleaseNotes, FetchError> {
        let response = self.client.get(&self.url).send()?;

        let status = response.status();
        debug!(%status, "release notes response");
        if !status.is_success() {
            return Err(FetchError::NotOk {
                status: status.as_u16(),
            });
        }

        Ok(response.json::<ReleaseNotes>()?)
    }
}
