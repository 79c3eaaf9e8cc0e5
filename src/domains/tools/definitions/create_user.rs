//! Create user tool definition.
//!
//! Validates the caller-supplied fields and appends a new record to the store.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::domains::tools::ResponseEnvelope;
use crate::domains::tools::error::ToolError;
use crate::domains::users::{NewUser, RecordStore};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the create user tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateUserParams {
    /// Full name of the user.
    pub name: String,

    /// Email address of the user.
    pub email: String,

    /// Postal address of the user.
    pub address: String,

    /// Phone number of the user.
    pub phone: String,
}

impl CreateUserParams {
    fn into_new_user(self) -> NewUser {
        NewUser {
            name: self.name,
            email: self.email,
            address: self.address,
            phone: self.phone,
        }
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Create user tool - appends a new user record to the store.
pub struct CreateUserTool;

impl CreateUserTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_user";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Create a new user record in the store. Returns the id assigned to the new user.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(name = %params.name))]
    pub async fn execute(params: CreateUserParams, store: &RecordStore) -> CallToolResult {
        info!("Create user tool called");

        match Self::try_execute(params, store).await {
            Ok(id) => {
                info!("User {} created successfully", id);
                ResponseEnvelope::created(id).into_result()
            }
            Err(e) => {
                warn!("Create user failed: {}", e);
                ResponseEnvelope::failure(e.to_string()).into_result()
            }
        }
    }

    async fn try_execute(params: CreateUserParams, store: &RecordStore) -> Result<u64, ToolError> {
        let new_user = params.into_new_user();
        new_user
            .validate()
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        store
            .append(new_user)
            .await
            .map_err(|e| ToolError::execution_failed(format!("Failed to save user: {e}")))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CreateUserParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute bound to the given store.
    pub fn create_route<S>(store: Arc<RecordStore>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let store = store.clone();
            async move {
                let params: CreateUserParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(params, &store).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store(dir: &TempDir) -> RecordStore {
        RecordStore::new(dir.path().join("users.json"))
    }

    fn params(email: &str) -> CreateUserParams {
        CreateUserParams {
            name: "Ana".to_string(),
            email: email.to_string(),
            address: "1 Rd".to_string(),
            phone: "555".to_string(),
        }
    }

    fn envelope_of(result: &CallToolResult) -> ResponseEnvelope {
        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };
        serde_json::from_str(text).unwrap()
    }

    #[tokio::test]
    async fn test_create_user_returns_first_id() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let result = CreateUserTool::execute(params("ana@x.com"), &store).await;
        assert!(result.is_error.is_none() || !result.is_error.unwrap());

        let envelope = envelope_of(&result);
        assert_eq!(envelope, ResponseEnvelope::created(1));

        let record = store.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(record.name, "Ana");
    }

    #[tokio::test]
    async fn test_create_user_invalid_email_fails() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let result = CreateUserTool::execute(params("not-an-email"), &store).await;
        assert!(result.is_error.unwrap_or(false));

        let envelope = envelope_of(&result);
        assert!(!envelope.ok);
        assert!(envelope.message.unwrap().contains("email"));
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_user_corrupt_store_fails_cleanly() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users.json");
        std::fs::write(&path, "not json").unwrap();
        let store = RecordStore::new(&path);

        let result = CreateUserTool::execute(params("ana@x.com"), &store).await;
        assert!(result.is_error.unwrap_or(false));

        let envelope = envelope_of(&result);
        assert!(envelope.message.unwrap().contains("Failed to save user"));
    }

    #[test]
    fn test_to_tool_metadata() {
        let tool = CreateUserTool::to_tool();
        assert_eq!(tool.name.as_ref(), "create_user");
        assert!(tool.description.is_some());
    }
}
