//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur while extracting tool arguments.
#[derive(Debug, Error)]
pub enum ToolError {
    /// A required argument was absent or not of the expected type.
    #[error("Missing or invalid '{0}' parameter")]
    MissingArgument(&'static str),
}
