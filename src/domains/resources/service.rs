//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access. It maintains a
//! registry of available resources, resolves dynamic content against the
//! record store, and answers `users://{id}/profile` template reads.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new resource does NOT require modifying this file.

use std::collections::HashMap;
use std::sync::Arc;

use rmcp::model::{ReadResourceResult, Resource, ResourceContents, ResourceTemplate};
use tracing::info;

use super::error::ResourceError;
use super::registry::{get_all_resource_templates, get_all_resources};
use crate::domains::users::RecordStore;

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// The record store backing the dynamic resources.
    store: Arc<RecordStore>,

    /// Registry of available resources.
    /// Key: resource URI, Value: resource metadata
    resources: HashMap<String, ResourceEntry>,

    /// Resource templates for parameterized resources.
    templates: Vec<ResourceTemplate>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub content: ResourceContent,
}

/// Different types of resource content.
#[derive(Debug, Clone)]
pub enum ResourceContent {
    /// Static text content.
    Text(String),

    /// Dynamic content that requires computation.
    Dynamic(DynamicResourceType),
}

/// Types of dynamic resources.
#[derive(Debug, Clone)]
pub enum DynamicResourceType {
    /// Server information.
    ServerInfo,

    /// The full user dataset.
    AllUsers,
}

impl ResourceService {
    /// Create a new ResourceService over the given store.
    pub fn new(store: Arc<RecordStore>) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            store,
            resources: HashMap::new(),
            templates: get_all_resource_templates(),
        };

        for entry in get_all_resources() {
            service.register_resource(entry);
        }

        service
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        info!("Registering resource: {}", entry.resource.raw.uri);
        self.resources
            .insert(entry.resource.raw.uri.to_string(), entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    ///
    /// Exact URIs are looked up in the registry; anything else is matched
    /// against the `users://{id}/profile` template.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let Some(entry) = self.resources.get(uri) else {
            return self.read_profile(uri).await;
        };

        let content = match &entry.content {
            ResourceContent::Text(text) => ResourceContents::text(text, uri),
            ResourceContent::Dynamic(dynamic_type) => {
                self.resolve_dynamic_content(uri, dynamic_type).await?
            }
        };

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }

    /// Resolve dynamic resource content against the store.
    async fn resolve_dynamic_content(
        &self,
        uri: &str,
        dynamic_type: &DynamicResourceType,
    ) -> Result<ResourceContents, ResourceError> {
        match dynamic_type {
            DynamicResourceType::ServerInfo => {
                let info = serde_json::json!({
                    "server": env!("CARGO_PKG_NAME"),
                    "version": env!("CARGO_PKG_VERSION"),
                    "store_path": self.store.path().display().to_string(),
                });

                Ok(ResourceContents::text(
                    serde_json::to_string_pretty(&info)
                        .map_err(|e| ResourceError::internal(e.to_string()))?,
                    uri,
                ))
            }
            DynamicResourceType::AllUsers => {
                let records = self.store.load_all().await?;
                Ok(ResourceContents::text(
                    serde_json::to_string_pretty(&records)
                        .map_err(|e| ResourceError::internal(e.to_string()))?,
                    uri,
                ))
            }
        }
    }

    /// Resolve a `users://{id}/profile` template read.
    async fn read_profile(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let id = parse_profile_uri(uri).ok_or_else(|| ResourceError::not_found(uri))?;

        let record = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let json = serde_json::to_string_pretty(&record)
            .map_err(|e| ResourceError::internal(e.to_string()))?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(json, uri)],
        })
    }
}

/// Extract the id from a `users://{id}/profile` URI.
fn parse_profile_uri(uri: &str) -> Option<u64> {
    let rest = uri.strip_prefix("users://")?;
    let id = rest.strip_suffix("/profile")?;
    id.parse().ok()
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use crate::domains::users::NewUser;

    use super::*;

    fn sample_user() -> NewUser {
        NewUser {
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            address: "1 Rd".to_string(),
            phone: "555".to_string(),
        }
    }

    fn service_in(dir: &TempDir) -> (ResourceService, Arc<RecordStore>) {
        let store = Arc::new(RecordStore::new(dir.path().join("users.json")));
        (ResourceService::new(store.clone()), store)
    }

    fn text_of(result: &ReadResourceResult) -> String {
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text.clone(),
            _ => panic!("Expected text contents"),
        }
    }

    #[tokio::test]
    async fn test_resource_service_creation() {
        let dir = TempDir::new().unwrap();
        let (service, _) = service_in(&dir);

        let resources = service.list_resources().await;
        assert_eq!(resources.len(), 2);
        assert_eq!(service.list_resource_templates().await.len(), 1);
    }

    #[tokio::test]
    async fn test_read_all_users_empty() {
        let dir = TempDir::new().unwrap();
        let (service, _) = service_in(&dir);

        let result = service.read_resource("users://all").await.unwrap();
        let parsed: Vec<serde_json::Value> =
            serde_json::from_str(&text_of(&result)).unwrap();
        assert!(parsed.is_empty());
    }

    #[tokio::test]
    async fn test_read_all_users_after_append() {
        let dir = TempDir::new().unwrap();
        let (service, store) = service_in(&dir);
        store.append(sample_user()).await.unwrap();

        let result = service.read_resource("users://all").await.unwrap();
        let text = text_of(&result);
        assert!(text.contains("Ana"));
        assert!(text.contains("ana@x.com"));
    }

    #[tokio::test]
    async fn test_read_profile_by_template() {
        let dir = TempDir::new().unwrap();
        let (service, store) = service_in(&dir);
        let id = store.append(sample_user()).await.unwrap();

        let uri = format!("users://{id}/profile");
        let result = service.read_resource(&uri).await.unwrap();
        assert!(text_of(&result).contains("Ana"));
    }

    #[tokio::test]
    async fn test_read_missing_profile_is_not_found() {
        let dir = TempDir::new().unwrap();
        let (service, _) = service_in(&dir);

        let result = service.read_resource("users://42/profile").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_read_unknown_uri_is_not_found() {
        let dir = TempDir::new().unwrap();
        let (service, _) = service_in(&dir);

        let result = service.read_resource("mcp://server/nonexistent").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_read_server_info() {
        let dir = TempDir::new().unwrap();
        let (service, _) = service_in(&dir);

        let result = service.read_resource("mcp://server/info").await.unwrap();
        assert!(text_of(&result).contains("users.json"));
    }

    #[test]
    fn test_parse_profile_uri() {
        assert_eq!(parse_profile_uri("users://7/profile"), Some(7));
        assert_eq!(parse_profile_uri("users://abc/profile"), None);
        assert_eq!(parse_profile_uri("users://7"), None);
        assert_eq!(parse_profile_uri("files://7/profile"), None);
    }
}
