//! Gotify message payload.

use serde::Serialize;

/// A single notification as accepted by the Gotify `/message` endpoint.
///
/// Built fresh for every tool invocation and consumed by the client call that
/// delivers it. Unset `title` and `priority` are omitted from the wire form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GotifyMessage {
    /// Notification body shown to the user.
    pub message: String,

    /// Optional message title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Message priority; Gotify treats higher values as more urgent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

impl GotifyMessage {
    /// Create a message with no title and backend-default priority.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            title: None,
            priority: None,
        }
    }

    /// Set the message title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the message priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_all_fields() {
        let message = GotifyMessage::new("backup finished")
            .with_title("Nightly")
            .with_priority(6);

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(
            value,
            json!({ "message": "backup finished", "title": "Nightly", "priority": 6 })
        );
    }

    #[test]
    fn test_omits_unset_optional_fields() {
        let message = GotifyMessage::new("hello");

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value, json!({ "message": "hello" }));
    }

    #[test]
    fn test_priority_zero_is_kept_on_the_wire() {
        let message = GotifyMessage::new("quiet").with_priority(0);

        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value, json!({ "message": "quiet", "priority": 0 }));
    }
}
