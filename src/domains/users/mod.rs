//! Users domain module.
//!
//! This is the persistence core of the server: a file-backed store of user
//! records with monotonic id assignment, plus the parsing layer that turns
//! model-generated text into new records.
//!
//! ## Architecture
//!
//! - `record.rs` - Record types and field validation
//! - `store.rs` - The file-backed `RecordStore` (single-writer appends)
//! - `generated.rs` - Fence-stripping and parsing of generated text
//! - `generator.rs` - The `TextGenerator` collaborator trait
//! - `error.rs` - Domain error types

mod error;
mod generated;
mod generator;
mod record;
mod store;

pub use error::{GenerationParseError, StoreError, ValidationError};
pub use generated::parse_generated_user;
pub use generator::{GeneratedContent, SampleDataGenerator, TextGenerator};
pub use record::{NewUser, UserRecord};
pub use store::RecordStore;
