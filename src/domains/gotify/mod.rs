//! Gotify domain module.
//!
//! Everything that talks to the notification backend lives here: the wire
//! payload ([`GotifyMessage`]), the credentials resolved from the environment
//! ([`GotifyCredentials`]), and the HTTP client that performs the single
//! authenticated POST per invocation ([`GotifyClient`]).

mod client;
mod error;
mod message;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{GotifyClient, GotifyCredentials};
pub use error::GotifyError;
pub use message::GotifyMessage;
