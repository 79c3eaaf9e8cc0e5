//! Uniform tool response envelope.
//!
//! Every tool answers with the same JSON shape as its text content:
//! `{"ok":true,"id":N}` on success, `{"ok":false,"message":"..."}` on
//! failure. Failures also set the MCP error flag on the result, so clients
//! that only look at `is_error` behave correctly too.

use rmcp::model::{CallToolResult, Content};
use serde::{Deserialize, Serialize};

/// The response envelope shared by all tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// Whether the operation succeeded.
    pub ok: bool,

    /// The id of the created record, on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// A human-readable failure message, on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ResponseEnvelope {
    /// Envelope for a successfully created record.
    pub fn created(id: u64) -> Self {
        Self {
            ok: true,
            id: Some(id),
            message: None,
        }
    }

    /// Envelope for a failed operation.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            message: Some(message.into()),
        }
    }

    /// Render the envelope as an MCP tool result.
    pub fn into_result(self) -> CallToolResult {
        let ok = self.ok;
        let text = serde_json::to_string(&self)
            .unwrap_or_else(|_| r#"{"ok":false,"message":"serialization failed"}"#.to_string());

        if ok {
            CallToolResult::success(vec![Content::text(text)])
        } else {
            CallToolResult::error(vec![Content::text(text)])
        }
    }
}
