//! Domains module containing business logic organized by bounded contexts.
//!
//! Each subdomain represents a specific area of functionality within the MCP
//! server: `tools` exposes the notification operations to clients, `gotify`
//! owns the payload type and the HTTP delivery to the backend.

pub mod gotify;
pub mod tools;
