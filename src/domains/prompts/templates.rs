//! Prompt templates module.
//!
//! A small rendering engine for prompt text. Supported syntax:
//! - `{{variable}}` - substituted with the argument value
//! - `{{#if variable}}...{{/if}}` - kept only when the variable is set
//! - `{{#if variable}}...{{else}}...{{/if}}` - with an alternative branch
//!
//! Unmatched simple placeholders are removed, so optional arguments can
//! appear in a template without leaving `{{...}}` litter behind.

use std::collections::HashMap;

use rmcp::model::PromptArgument;

use super::error::PromptError;

const IF_OPEN: &str = "{{#if ";
const ELSE_TAG: &str = "{{else}}";
const ENDIF_TAG: &str = "{{/if}}";

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template string with placeholders.
    pub template: String,
}

impl PromptTemplate {
    /// Create a new prompt template.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        arguments: Vec<PromptArgument>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            arguments,
            template: template.into(),
        }
    }

    /// Render the template with the given arguments.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        let mut result = expand_conditionals(&self.template, arguments)?;

        for (key, value) in arguments {
            result = result.replace(&format!("{{{{{key}}}}}"), value);
        }

        Ok(drop_unmatched_placeholders(&result))
    }
}

/// Resolve every `{{#if}}` block, innermost-first is not needed since blocks
/// do not nest in practice; each pass resolves the leftmost block.
fn expand_conditionals(
    template: &str,
    arguments: &HashMap<String, String>,
) -> Result<String, PromptError> {
    let mut result = template.to_string();

    while let Some(open) = result.find(IF_OPEN) {
        let var_close = result[open..]
            .find("}}")
            .map(|p| open + p)
            .ok_or_else(|| PromptError::template("Unclosed {{#if}} tag"))?;
        let var_name = result[open + IF_OPEN.len()..var_close].trim().to_string();

        let end = result[var_close..]
            .find(ENDIF_TAG)
            .map(|p| var_close + p)
            .ok_or_else(|| PromptError::template("Missing {{/if}} tag"))?;

        let block = &result[var_close + 2..end];
        let (when_set, when_unset) = match block.find(ELSE_TAG) {
            Some(pos) => (&block[..pos], &block[pos + ELSE_TAG.len()..]),
            None => (block, ""),
        };

        let is_set = arguments.get(&var_name).is_some_and(|v| !v.is_empty());
        let chosen = if is_set { when_set } else { when_unset };

        result = format!(
            "{}{}{}",
            &result[..open],
            chosen,
            &result[end + ENDIF_TAG.len()..]
        );
    }

    Ok(result)
}

/// Remove simple `{{placeholder}}` occurrences that were never substituted.
fn drop_unmatched_placeholders(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find("{{") {
        match rest[open..].find("}}") {
            Some(close) => {
                let inner = &rest[open + 2..open + close];
                result.push_str(&rest[..open]);
                // Keep anything that is not a plain variable name.
                if inner.contains('#') || inner.contains('/') {
                    result.push_str(&rest[open..open + close + 2]);
                }
                rest = &rest[open + close + 2..];
            }
            None => break,
        }
    }
    result.push_str(rest);

    result
}
