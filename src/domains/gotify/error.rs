//! Gotify-specific error types.

use thiserror::Error;

/// Errors that can occur while resolving credentials or delivering a message.
#[derive(Debug, Error)]
pub enum GotifyError {
    /// A required environment variable is unset or empty.
    #[error("{0} environment variable is not set")]
    Configuration(&'static str),

    /// The HTTP request could not be completed.
    #[error("failed to send message: {0}")]
    Transport(reqwest::Error),

    /// The Gotify server answered with a status other than 200 OK.
    #[error("gotify server returned status: {0}")]
    Backend(u16),
}

/// The conversion strips the request URL: it carries the token as a query
/// parameter and must not reach result text or logs.
impl From<reqwest::Error> for GotifyError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.without_url())
    }
}
