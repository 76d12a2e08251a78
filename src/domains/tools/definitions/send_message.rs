//! `send-message` tool definition.
//!
//! Forwards a caller-supplied message as-is, with an optional title and an
//! optional caller-chosen priority.

use super::{ArgumentSpec, MessageStyle, ToolDefinition};

/// Definition for the `send-message` tool.
pub static SEND_MESSAGE: ToolDefinition = ToolDefinition {
    name: "send-message",
    description: "Send a message to a Gotify server for notifications",
    required: ArgumentSpec {
        name: "message",
        description: "The message content to send",
    },
    style: MessageStyle::Direct {
        title: ArgumentSpec {
            name: "title",
            description: "Optional title for the message",
        },
        priority: ArgumentSpec {
            name: "priority",
            description: "Message priority (0-10, default: 5)",
        },
        default_priority: 5.0,
    },
    success_text: "Message sent successfully",
    failure_prefix: "Failed to send message",
};
