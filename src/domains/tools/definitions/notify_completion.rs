//! `notify-completion` tool definition.
//!
//! Notifies the user that a task finished, with an optional outcome appended
//! to the body.

use super::{ArgumentSpec, DetailSpec, MessageStyle, ToolDefinition};

/// Definition for the `notify-completion` tool.
pub static NOTIFY_COMPLETION: ToolDefinition = ToolDefinition {
    name: "notify-completion",
    description: "Send a completion notification to the user via Gotify",
    required: ArgumentSpec {
        name: "task",
        description: "Description of the completed task",
    },
    style: MessageStyle::Templated {
        prefix: "Task completed: ",
        title: "Task Completed",
        priority: 6,
        detail: DetailSpec {
            name: "result",
            label: "Result",
            description: "Optional result or outcome details",
        },
    },
    success_text: "Completion notification sent successfully",
    failure_prefix: "Failed to send completion notification",
};
