//! `ask-for-help` tool definition.
//!
//! High-priority notification asking the user for assistance, with an
//! optional error detail appended to the body.

use super::{ArgumentSpec, DetailSpec, MessageStyle, ToolDefinition};

/// Definition for the `ask-for-help` tool.
pub static ASK_FOR_HELP: ToolDefinition = ToolDefinition {
    name: "ask-for-help",
    description: "Send a help request notification to the user via Gotify",
    required: ArgumentSpec {
        name: "context",
        description: "Context or description of what help is needed",
    },
    style: MessageStyle::Templated {
        prefix: "Help needed: ",
        title: "Help Request",
        priority: 8,
        detail: DetailSpec {
            name: "error",
            label: "Error",
            description: "Optional error message or details",
        },
    },
    success_text: "Help request sent successfully",
    failure_prefix: "Failed to send help request",
};
