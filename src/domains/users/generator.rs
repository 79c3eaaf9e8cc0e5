//! Text generation collaborator.
//!
//! The server itself does not generate text; it asks a collaborator (normally
//! the language model on the client side) to do so and parses the reply. The
//! seam is the [`TextGenerator`] trait so tools can be wired to whatever
//! generation backend the deployment has, and tests can use mocks.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::error::GenerationParseError;

/// What a generation request produced.
#[derive(Debug, Clone)]
pub enum GeneratedContent {
    /// Plain text content, possibly fence-wrapped JSON.
    Text(String),

    /// A non-text result (image, audio, ...). Callers treat this as failure;
    /// the payload names the kind for the error message.
    Other(String),
}

/// A collaborator that turns a prompt into generated content.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate content for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<GeneratedContent, GenerationParseError>;
}

/// A local stand-in generator producing canned sample users.
///
/// Used as the default wiring so the server works against clients without
/// sampling support. It ignores the prompt and rotates through a fixed pool,
/// emitting the JSON fenced the way a model typically would.
pub struct SampleDataGenerator {
    next: AtomicUsize,
}

const SAMPLE_POOL: &[(&str, &str, &str, &str)] = &[
    ("Maya Lindqvist", "maya.lindqvist@example.com", "12 Birch Lane", "555-0131"),
    ("Omar Haddad", "omar.haddad@example.com", "44 Cedar Court", "555-0177"),
    ("Priya Raman", "priya.raman@example.com", "7 Juniper Way", "555-0109"),
    ("Tomas Vitek", "tomas.vitek@example.com", "91 Alder Street", "555-0164"),
];

impl SampleDataGenerator {
    pub fn new() -> Self {
        Self {
            next: AtomicUsize::new(0),
        }
    }
}

impl Default for SampleDataGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerator for SampleDataGenerator {
    async fn generate(&self, _prompt: &str) -> Result<GeneratedContent, GenerationParseError> {
        let index = self.next.fetch_add(1, Ordering::Relaxed) % SAMPLE_POOL.len();
        let (name, email, address, phone) = SAMPLE_POOL[index];

        let json = serde_json::json!({
            "name": name,
            "email": email,
            "address": address,
            "phone": phone,
        });

        Ok(GeneratedContent::Text(format!("```json\n{json}\n```")))
    }
}
