//! Create random user tool definition.
//!
//! Asks the text generation collaborator for a user profile, parses the reply
//! (stripping any Markdown code fence) and appends the result to the store.
//! Generation and parse failures become failure envelopes, never panics.

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

use crate::domains::prompts::GenerateUserPrompt;
use crate::domains::tools::ResponseEnvelope;
use crate::domains::tools::error::ToolError;
use crate::domains::users::{
    GeneratedContent, GenerationParseError, RecordStore, TextGenerator, parse_generated_user,
};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the create random user tool (none).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct CreateRandomUserParams {}

// ============================================================================
// Tool Definition
// ============================================================================

/// Create random user tool - generates profile data and stores it.
pub struct CreateRandomUserTool;

impl CreateRandomUserTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_random_user";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Create a user record with generated random data. Returns the id assigned to the new user.";

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub async fn execute(store: &RecordStore, generator: &dyn TextGenerator) -> CallToolResult {
        info!("Create random user tool called");

        match Self::try_execute(store, generator).await {
            Ok(id) => {
                info!("Random user {} created successfully", id);
                ResponseEnvelope::created(id).into_result()
            }
            Err(e) => {
                warn!("Create random user failed: {}", e);
                ResponseEnvelope::failure(e.to_string()).into_result()
            }
        }
    }

    async fn try_execute(
        store: &RecordStore,
        generator: &dyn TextGenerator,
    ) -> Result<u64, ToolError> {
        // The generation instructions are the same template the prompt surface
        // serves, rendered without a name hint.
        let prompt = GenerateUserPrompt::plain_text();

        let content = generator
            .generate(&prompt)
            .await
            .map_err(|e| ToolError::execution_failed(e.to_string()))?;

        let text = match content {
            GeneratedContent::Text(text) => text,
            GeneratedContent::Other(kind) => {
                return Err(ToolError::execution_failed(
                    GenerationParseError::NotText(kind).to_string(),
                ));
            }
        };

        let new_user = parse_generated_user(&text)
            .map_err(|e| ToolError::execution_failed(e.to_string()))?;

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
            input_schema: cached_schema_for_type::<CreateRandomUserParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute bound to the given store and generator.
    pub fn create_route<S>(
        store: Arc<RecordStore>,
        generator: Arc<dyn TextGenerator>,
    ) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let store = store.clone();
            let generator = generator.clone();
            async move {
                let _params: CreateRandomUserParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&store, generator.as_ref()).await)
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
    use async_trait::async_trait;
    use tempfile::TempDir;

    use super::*;

    struct FixedGenerator(GeneratedContent);

    #[async_trait]
    impl TextGenerator for FixedGenerator {
        async fn generate(
            &self,
            _prompt: &str,
        ) -> Result<GeneratedContent, GenerationParseError> {
            Ok(self.0.clone())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(
            &self,
            _prompt: &str,
        ) -> Result<GeneratedContent, GenerationParseError> {
            Err(GenerationParseError::GenerationFailed(
                "model unavailable".to_string(),
            ))
        }
    }

    fn test_store(dir: &TempDir) -> RecordStore {
        RecordStore::new(dir.path().join("users.json"))
    }

    fn envelope_of(result: &CallToolResult) -> ResponseEnvelope {
        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };
        serde_json::from_str(text).unwrap()
    }

    #[tokio::test]
    async fn test_fenced_generation_is_appended() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        let generator = FixedGenerator(GeneratedContent::Text(
            "```json\n{\"name\":\"Bo\",\"email\":\"bo@x.com\",\"address\":\"2 Rd\",\"phone\":\"555\"}\n```"
                .to_string(),
        ));

        let result = CreateRandomUserTool::execute(&store, &generator).await;
        assert_eq!(envelope_of(&result), ResponseEnvelope::created(1));

        let record = store.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(record.name, "Bo");
        assert_eq!(record.email, "bo@x.com");
    }

    #[tokio::test]
    async fn test_unparseable_generation_is_failure_envelope() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        let generator =
            FixedGenerator(GeneratedContent::Text("sorry, no JSON today".to_string()));

        let result = CreateRandomUserTool::execute(&store, &generator).await;
        assert!(result.is_error.unwrap_or(false));
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_non_text_generation_is_failure_envelope() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        let generator = FixedGenerator(GeneratedContent::Other("image".to_string()));

        let result = CreateRandomUserTool::execute(&store, &generator).await;
        assert!(result.is_error.unwrap_or(false));

        let envelope = envelope_of(&result);
        assert!(envelope.message.unwrap().contains("text"));
    }

    #[tokio::test]
    async fn test_generator_error_is_failure_envelope() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let result = CreateRandomUserTool::execute(&store, &FailingGenerator).await;
        assert!(result.is_error.unwrap_or(false));

        let envelope = envelope_of(&result);
        assert!(envelope.message.unwrap().contains("model unavailable"));
    }

    #[test]
    fn test_to_tool_metadata() {
        let tool = CreateRandomUserTool::to_tool();
        assert_eq!(tool.name.as_ref(), "create_random_user");
    }
}
