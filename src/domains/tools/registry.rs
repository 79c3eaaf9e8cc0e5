//! Tool registry - metadata listing for all tools.
//!
//! The single source of truth for which tools exist. The router test checks
//! it stays in sync with `router.rs`.

use rmcp::model::Tool;

use super::definitions::{CreateRandomUserTool, CreateUserTool};

/// Get all tool names.
pub fn tool_names() -> Vec<&'static str> {
    vec![CreateUserTool::NAME, CreateRandomUserTool::NAME]
}

/// Get all tools as Tool models (metadata).
pub fn all_tools() -> Vec<Tool> {
    vec![CreateUserTool::to_tool(), CreateRandomUserTool::to_tool()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_names() {
        let names = tool_names();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"create_user"));
        assert!(names.contains(&"create_random_user"));
    }

    #[test]
    fn test_all_tools_have_descriptions() {
        for tool in all_tools() {
            assert!(tool.description.is_some(), "{} lacks description", tool.name);
        }
    }
}
