//! Tool Router - builds the rmcp ToolRouter from the definitions.
//!
//! Each tool knows how to create its own route; this module just wires the
//! store and generator into them.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::users::{RecordStore, TextGenerator};

use super::definitions::{CreateRandomUserTool, CreateUserTool};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(
    store: Arc<RecordStore>,
    generator: Arc<dyn TextGenerator>,
) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(CreateUserTool::create_route(store.clone()))
        .with_route(CreateRandomUserTool::create_route(store, generator))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use crate::domains::users::SampleDataGenerator;

    use super::super::registry::{all_tools, tool_names};
    use super::*;

    struct TestServer {}

    #[test]
    fn test_build_router() {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(RecordStore::new(dir.path().join("users.json")));
        let generator: Arc<dyn TextGenerator> = Arc::new(SampleDataGenerator::new());

        let router: ToolRouter<TestServer> = build_tool_router(store, generator);
        let tools = router.list_all();
        assert_eq!(tools.len(), 2);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"create_user"));
        assert!(names.contains(&"create_random_user"));
    }

    #[test]
    fn test_registry_matches_router() {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(RecordStore::new(dir.path().join("users.json")));
        let generator: Arc<dyn TextGenerator> = Arc::new(SampleDataGenerator::new());

        let router: ToolRouter<TestServer> = build_tool_router(store, generator);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        let registry_names = tool_names();
        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }

        assert_eq!(all_tools().len(), router_names.len());
    }
}
