//! Gotify HTTP client.
//!
//! One tool invocation makes exactly one outbound call: an authenticated POST
//! of a [`GotifyMessage`] to the server's `/message` endpoint. The client is
//! built from explicit credentials so it can be pointed at any backend in
//! tests without touching the process environment.

use reqwest::StatusCode;
use tracing::debug;

use super::error::GotifyError;
use super::message::GotifyMessage;

// ============================================================================
// Credentials
// ============================================================================

/// Connection settings for the Gotify backend.
///
/// Resolved from the environment at each call boundary rather than cached at
/// startup, so fixing the environment takes effect without a server restart.
#[derive(Clone)]
pub struct GotifyCredentials {
    /// Base URL of the Gotify server, e.g. `https://gotify.example.com`.
    pub url: String,

    /// Application token used to authenticate the push.
    pub token: String,
}

impl GotifyCredentials {
    /// Environment variable holding the Gotify base URL.
    pub const URL_VAR: &'static str = "GOTIFY_URL";

    /// Environment variable holding the Gotify application token.
    pub const TOKEN_VAR: &'static str = "GOTIFY_TOKEN";

    /// Create credentials from explicit values.
    pub fn new(url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: token.into(),
        }
    }

    /// Read credentials from the process environment.
    ///
    /// The URL is checked before the token; a variable that is unset or empty
    /// is reported as a configuration error naming that variable.
    pub fn from_env() -> Result<Self, GotifyError> {
        let url = read_var(Self::URL_VAR)?;
        let token = read_var(Self::TOKEN_VAR)?;
        Ok(Self { url, token })
    }

    /// Full endpoint for message creation, with the token as query parameter.
    fn message_url(&self) -> String {
        format!("{}/message?token={}", self.url, self.token)
    }
}

fn read_var(name: &'static str) -> Result<String, GotifyError> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or(GotifyError::Configuration(name))
}

/// Custom Debug implementation to redact the token from logs.
impl std::fmt::Debug for GotifyCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GotifyCredentials")
            .field("url", &self.url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Client
// ============================================================================

/// Client for pushing messages to a Gotify server.
///
/// Holds only the credentials. Each push opens its own connection and drops
/// it afterwards, so no connection state outlives an invocation.
#[derive(Debug, Clone)]
pub struct GotifyClient {
    credentials: GotifyCredentials,
}

impl GotifyClient {
    /// Create a client from explicit credentials.
    pub fn new(credentials: GotifyCredentials) -> Self {
        Self { credentials }
    }

    /// Create a client from `GOTIFY_URL` and `GOTIFY_TOKEN`.
    pub fn from_env() -> Result<Self, GotifyError> {
        Ok(Self::new(GotifyCredentials::from_env()?))
    }

    /// Deliver one message, blocking until the backend answers or the
    /// transport fails.
    ///
    /// Any response status other than 200 OK is a backend error carrying the
    /// numeric status; the response body is not inspected. No retries are
    /// attempted.
    pub fn push(&self, message: &GotifyMessage) -> Result<(), GotifyError> {
        debug!("Pushing notification to {}", self.credentials.url);

        let client = reqwest::blocking::Client::builder().build()?;
        let response = client
            .post(self.credentials.message_url())
            .json(message)
            .send()?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(GotifyError::Backend(status.as_u16()));
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
