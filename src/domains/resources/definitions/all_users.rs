//! All users resource definition.
//!
//! Exposes the entire record store as a pretty-printed JSON array.

use super::ResourceDefinition;
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};

/// The full user dataset (dynamic, read from the store on every access).
pub struct AllUsersResource;

impl ResourceDefinition for AllUsersResource {
    const URI: &'static str = "users://all";
    const NAME: &'static str = "All Users";
    const DESCRIPTION: &'static str = "Every user record currently in the store";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::AllUsers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_users_metadata() {
        assert_eq!(AllUsersResource::URI, "users://all");
        assert_eq!(AllUsersResource::MIME_TYPE, "application/json");
    }
}
