//! Test support: a minimal in-process HTTP stub standing in for a Gotify
//! server, plus helpers for tests that touch the `GOTIFY_*` environment.

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

use super::client::GotifyCredentials;

/// Serializes tests that read or write the `GOTIFY_*` environment variables.
pub(crate) static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Point `GOTIFY_URL` and `GOTIFY_TOKEN` at the given backend.
pub(crate) fn set_credentials(url: &str, token: &str) {
    unsafe {
        std::env::set_var(GotifyCredentials::URL_VAR, url);
        std::env::set_var(GotifyCredentials::TOKEN_VAR, token);
    }
}

/// Remove `GOTIFY_URL` and `GOTIFY_TOKEN` from the environment.
pub(crate) fn clear_credentials() {
    unsafe {
        std::env::remove_var(GotifyCredentials::URL_VAR);
        std::env::remove_var(GotifyCredentials::TOKEN_VAR);
    }
}

/// One request as seen by the stub.
#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    /// Request target, e.g. `/message?token=abc`.
    pub(crate) target: String,

    /// Value of the Content-Type header, empty when absent.
    pub(crate) content_type: String,

    /// Request body parsed as JSON.
    pub(crate) body: serde_json::Value,
}

/// A single-purpose HTTP server that records every request it receives and
/// answers each one with a fixed status code and an empty body.
pub(crate) struct StubServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    /// Bind an ephemeral localhost port and start answering with `status`.
    ///
    /// The listener thread lives for the rest of the test process; each test
    /// gets its own port, so leaked listeners never interfere.
    pub(crate) fn start(status: u16) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
        let addr = listener.local_addr().expect("stub listener address");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { return };
                if let Some(request) = read_request(&mut stream) {
                    recorded.lock().unwrap().push(request);
                }
                let response = format!(
                    "HTTP/1.1 {status} Stub\r\ncontent-length: 0\r\nconnection: close\r\n\r\n"
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        Self { addr, requests }
    }

    /// Base URL suitable for `GOTIFY_URL`.
    pub(crate) fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of requests received so far.
    pub(crate) fn hits(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// All requests received so far.
    pub(crate) fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Read one HTTP request off the stream: head until the blank line, then
/// exactly Content-Length body bytes.
fn read_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
    let mut raw = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        if let Some(pos) = find_header_end(&raw) {
            break pos;
        }
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            return None;
        }
        raw.extend_from_slice(&chunk[..n]);
    };

    let head = String::from_utf8_lossy(&raw[..header_end]).to_string();
    let target = head.lines().next()?.split_whitespace().nth(1)?.to_string();
    let content_type = header_value(&head, "content-type").unwrap_or_default();
    let content_length: usize = header_value(&head, "content-length")?.parse().ok()?;

    let body_start = header_end + 4;
    while raw.len() < body_start + content_length {
        let n = stream.read(&mut chunk).ok()?;
        if n == 0 {
            return None;
        }
        raw.extend_from_slice(&chunk[..n]);
    }

    let body = serde_json::from_slice(&raw[body_start..body_start + content_length]).ok()?;
    Some(RecordedRequest {
        target,
        content_type,
        body,
    })
}

fn find_header_end(raw: &[u8]) -> Option<usize> {
    raw.windows(4).position(|window| window == b"\r\n\r\n")
}

fn header_value(head: &str, name: &str) -> Option<String> {
    head.lines().find_map(|line| {
        let (key, value) = line.split_once(':')?;
        key.eq_ignore_ascii_case(name)
            .then(|| value.trim().to_string())
    })
}
