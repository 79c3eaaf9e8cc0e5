//! Generate user prompt definition.
//!
//! Instructions for a language model to produce fake user data in exactly the
//! JSON shape the store accepts. The `create_random_user` tool sends the same
//! text to its generation collaborator.

use std::collections::HashMap;

use rmcp::model::PromptArgument;

use super::PromptDefinition;
use crate::domains::prompts::templates::PromptTemplate;

/// Prompt that asks a model for a fake user profile as raw JSON.
pub struct GenerateUserPrompt;

impl GenerateUserPrompt {
    /// The template rendered without any argument, for use as a direct
    /// generation prompt.
    pub fn plain_text() -> String {
        let template = PromptTemplate::new(Self::NAME, None, vec![], Self::template());
        template
            .render(&HashMap::new())
            .unwrap_or_else(|_| Self::template().to_string())
    }
}

impl PromptDefinition for GenerateUserPrompt {
    const NAME: &'static str = "generate_user";
    const DESCRIPTION: &'static str =
        "Instructions for generating realistic fake user data as raw JSON";

    fn template() -> &'static str {
        "Generate a fake user profile{{#if name}} for a person named {{name}}{{/if}}. \
         Respond with a single raw JSON object containing exactly these string \
         fields: name, email, address, phone. The email must be a plausible \
         address. Do not add any other fields, explanation, or formatting."
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![PromptArgument {
            name: "name".to_string(),
            title: None,
            description: Some("Optional name to base the generated profile on".to_string()),
            required: Some(false),
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_user_metadata() {
        assert_eq!(GenerateUserPrompt::NAME, "generate_user");
        assert!(!GenerateUserPrompt::DESCRIPTION.is_empty());

        let args = GenerateUserPrompt::arguments();
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].name, "name");
        assert_eq!(args[0].required, Some(false));
    }

    #[test]
    fn test_plain_text_has_no_placeholders() {
        let text = GenerateUserPrompt::plain_text();
        assert!(!text.contains("{{"));
        assert!(text.contains("name, email, address, phone"));
    }

    #[test]
    fn test_template_mentions_every_field() {
        let text = GenerateUserPrompt::template();
        for field in ["name", "email", "address", "phone"] {
            assert!(text.contains(field));
        }
    }
}
