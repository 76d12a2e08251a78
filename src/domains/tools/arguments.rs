//! Argument extraction for tool calls.
//!
//! Tool arguments arrive as a loosely typed JSON object. Required fields are
//! extracted strictly; optional fields fall back to a default when absent or
//! of the wrong type, so a sloppy caller degrades to defaults instead of
//! failing the invocation.

use rmcp::model::JsonObject;
use serde_json::Value;

use super::error::ToolError;

/// Extract an optional string argument, falling back to `default` when the
/// key is absent or the value is not a string.
pub fn get_string(args: &JsonObject, key: &str, default: &str) -> String {
    args.get(key)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

/// Extract an optional numeric argument, falling back to `default` when the
/// key is absent or the value is not a number.
pub fn get_number(args: &JsonObject, key: &str, default: f64) -> f64 {
    args.get(key).and_then(Value::as_f64).unwrap_or(default)
}

/// Extract a required string argument.
pub fn require_string(args: &JsonObject, key: &'static str) -> Result<String, ToolError> {
    args.get(key)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(ToolError::MissingArgument(key))
}

// ============================================================================
// Tests
// ============================================================================
