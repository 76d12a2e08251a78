//! Tool definitions module.
//!
//! Every tool the server exposes is described by a [`ToolDefinition`]: the
//! argument it requires, the optional arguments it accepts, and the fixed
//! title/priority/template rules used to build the Gotify payload. The
//! definitions are plain static data; one generic handler in `handlers`
//! executes whichever definition was invoked. Adding a tool means adding a
//! definition file and listing it in [`all`].

mod ask_for_help;
mod notify_completion;
mod send_message;
mod summarize_activity;

pub use ask_for_help::ASK_FOR_HELP;
pub use notify_completion::NOTIFY_COMPLETION;
pub use send_message::SEND_MESSAGE;
pub use summarize_activity::SUMMARIZE_ACTIVITY;

use std::sync::Arc;

use rmcp::model::{JsonObject, Tool};
use serde_json::{Value, json};

use super::arguments::{get_number, get_string, require_string};
use super::error::ToolError;
use crate::domains::gotify::GotifyMessage;

/// All tool definitions exposed by the server, in registration order.
pub fn all() -> [&'static ToolDefinition; 4] {
    [
        &SEND_MESSAGE,
        &ASK_FOR_HELP,
        &NOTIFY_COMPLETION,
        &SUMMARIZE_ACTIVITY,
    ]
}

// ============================================================================
// Definition model
// ============================================================================

/// A single argument accepted by a tool.
#[derive(Debug)]
pub struct ArgumentSpec {
    /// Argument name as it appears in the call's argument object.
    pub name: &'static str,

    /// Description shown to clients in the tool's input schema.
    pub description: &'static str,
}

/// An optional secondary argument appended to the message body.
///
/// When supplied and non-empty, the value lands on its own line as
/// `"<label>: <value>"`; otherwise the body is left untouched.
#[derive(Debug)]
pub struct DetailSpec {
    /// Argument name as it appears in the call's argument object.
    pub name: &'static str,

    /// Label prefixed to the value in the message body.
    pub label: &'static str,

    /// Description shown to clients in the tool's input schema.
    pub description: &'static str,
}

/// How a tool turns its arguments into a Gotify payload.
#[derive(Debug)]
pub enum MessageStyle {
    /// The required argument is the message body as-is; the caller may choose
    /// the title and priority.
    Direct {
        title: ArgumentSpec,
        priority: ArgumentSpec,
        /// Priority used when the caller does not supply one.
        default_priority: f64,
    },

    /// The message body is a fixed prefix plus the required argument; title
    /// and priority are fixed and cannot be overridden by the caller.
    Templated {
        prefix: &'static str,
        title: &'static str,
        priority: i64,
        detail: DetailSpec,
    },
}

/// Complete description of one notification tool.
#[derive(Debug)]
pub struct ToolDefinition {
    /// Tool name as registered with MCP clients.
    pub name: &'static str,

    /// Tool description shown to clients.
    pub description: &'static str,

    /// The argument that must be present for the call to proceed.
    pub required: ArgumentSpec,

    /// Payload construction rules.
    pub style: MessageStyle,

    /// Confirmation text returned after a delivered notification.
    pub success_text: &'static str,

    /// Prefix for the error text when delivery fails.
    pub failure_prefix: &'static str,
}

// ============================================================================
// Payload construction
// ============================================================================

impl ToolDefinition {
    /// Build the Gotify payload for one invocation.
    ///
    /// Fails only when the required argument is absent or not a string.
    /// Optional arguments that are missing or mistyped fall back to their
    /// defaults; an empty title or detail is treated as absent.
    pub fn payload(&self, args: &JsonObject) -> Result<GotifyMessage, ToolError> {
        let required = require_string(args, self.required.name)?;

        Ok(match &self.style {
            MessageStyle::Direct {
                title,
                priority,
                default_priority,
            } => {
                let title = get_string(args, title.name, "");
                let priority = get_number(args, priority.name, *default_priority) as i64;

                let mut message = GotifyMessage::new(required).with_priority(priority);
                if !title.is_empty() {
                    message = message.with_title(title);
                }
                message
            }
            MessageStyle::Templated {
                prefix,
                title,
                priority,
                detail,
            } => {
                let mut body = format!("{}{}", prefix, required);
                let extra = get_string(args, detail.name, "");
                if !extra.is_empty() {
                    body.push_str(&format!("\n{}: {}", detail.label, extra));
                }

                GotifyMessage::new(body)
                    .with_title(*title)
                    .with_priority(*priority)
            }
        })
    }

    // ========================================================================
    // Tool metadata
    // ========================================================================

    /// Input schema advertised for this tool, derived from its argument specs.
    pub fn input_schema(&self) -> JsonObject {
        let mut properties = JsonObject::new();
        properties.insert(
            self.required.name.to_string(),
            json!({ "type": "string", "description": self.required.description }),
        );

        match &self.style {
            MessageStyle::Direct {
                title, priority, ..
            } => {
                properties.insert(
                    title.name.to_string(),
                    json!({ "type": "string", "description": title.description }),
                );
                properties.insert(
                    priority.name.to_string(),
                    json!({ "type": "number", "description": priority.description }),
                );
            }
            MessageStyle::Templated { detail, .. } => {
                properties.insert(
                    detail.name.to_string(),
                    json!({ "type": "string", "description": detail.description }),
                );
            }
        }

        let mut schema = JsonObject::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        schema.insert("required".to_string(), json!([self.required.name]));
        schema
    }

    /// Create a Tool model for this definition (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: Arc::new(self.input_schema()),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lists_every_tool_once() {
        let mut names: Vec<_> = all().iter().map(|def| def.name).collect();
        assert_eq!(names.len(), 4);
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 4);
    }

    #[test]
    fn test_schemas_mark_only_the_required_argument() {
        for def in all() {
            let schema = def.input_schema();
            assert_eq!(schema.get("type"), Some(&json!("object")));
            assert_eq!(
                schema.get("required"),
                Some(&json!([def.required.name])),
                "unexpected required list for {}",
                def.name
            );

            let properties = schema["properties"].as_object().unwrap();
            assert!(properties.contains_key(def.required.name));
            for property in properties.values() {
                assert!(property.get("description").is_some());
            }
        }
    }

    #[test]
    fn test_to_tool_carries_name_and_description() {
        for def in all() {
            let tool = def.to_tool();
            assert_eq!(tool.name.as_ref(), def.name);
            assert_eq!(tool.description.as_deref(), Some(def.description));
        }
    }
}
