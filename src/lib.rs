//! Users MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server around a small
//! file-backed user record store.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **users**: The record store: file persistence, validation, generated-text parsing
//!   - **tools**: MCP tools that create records
//!   - **resources**: Store-backed resources that can be read by clients
//!   - **prompts**: Prompt templates for generating record data
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use users_mcp_server::core::{Config, McpServer};
//! use users_mcp_server::domains::users::{RecordStore, SampleDataGenerator};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let store = Arc::new(RecordStore::new(config.store.path.clone()));
//!     let server = McpServer::new(config, store, Arc::new(SampleDataGenerator::new()));
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
