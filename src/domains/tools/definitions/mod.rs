//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

mod create_random_user;
mod create_user;

pub use create_random_user::{CreateRandomUserParams, CreateRandomUserTool};
pub use create_user::{CreateUserParams, CreateUserTool};
