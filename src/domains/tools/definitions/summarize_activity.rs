//! `summarize-activity` tool definition.
//!
//! Low-priority status digest, with optional extra details appended to the
//! body.

use super::{ArgumentSpec, DetailSpec, MessageStyle, ToolDefinition};

/// Definition for the `summarize-activity` tool.
pub static SUMMARIZE_ACTIVITY: ToolDefinition = ToolDefinition {
    name: "summarize-activity",
    description: "Send a summary of current activities or status to the user via Gotify",
    required: ArgumentSpec {
        name: "summary",
        description: "Summary of activities or current status",
    },
    style: MessageStyle::Templated {
        prefix: "Activity Summary: ",
        title: "Activity Summary",
        priority: 4,
        detail: DetailSpec {
            name: "details",
            label: "Details",
            description: "Optional additional details",
        },
    },
    success_text: "Activity summary sent successfully",
    failure_prefix: "Failed to send summary",
};

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::JsonObject;
    use serde_json::json;

    fn bag(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_summary_only_uses_fixed_metadata() {
        let payload = SUMMARIZE_ACTIVITY
            .payload(&bag(json!({ "summary": "3 builds green" })))
            .unwrap();
        assert_eq!(payload.message, "Activity Summary: 3 builds green");
        assert_eq!(payload.title.as_deref(), Some("Activity Summary"));
        assert_eq!(payload.priority, Some(4));
    }

    #[test]
    fn test_details_are_appended() {
        let payload = SUMMARIZE_ACTIVITY
            .payload(&bag(json!({ "summary": "3 builds green", "details": "1 flaky test" })))
            .unwrap();
        assert_eq!(
            payload.message,
            "Activity Summary: 3 builds green\nDetails: 1 flaky test"
        );
    }

    #[test]
    fn test_empty_details_add_nothing() {
        let payload = SUMMARIZE_ACTIVITY
            .payload(&bag(json!({ "summary": "3 builds green", "details": "" })))
            .unwrap();
        assert_eq!(payload.message, "Activity Summary: 3 builds green");
    }

    #[test]
    fn test_missing_summary_is_rejected() {
        let err = SUMMARIZE_ACTIVITY
            .payload(&bag(json!({ "details": "x" })))
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing or invalid 'summary' parameter");
    }
}
