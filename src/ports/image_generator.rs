//! Image generator port for the external generative-image API.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::StudioError;

/// A request to create an image from scratch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// The model identifier (e.g., `"gemini-2.5-flash-image"`).
    pub model: String,
    /// The text prompt describing the desired image.
    pub prompt: String,
}

/// A request to edit a previously encoded image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditRequest {
    /// The model identifier.
    pub model: String,
    /// The source image as a `data:<mime>;base64,<payload>` URI.
    pub source: String,
    /// The edit instruction text.
    pub instruction: String,
}

/// The decoded result of a single call: one image as a data URI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageResponse {
    /// The image encoded as a `data:<mime>;base64,<payload>` URI.
    pub data_uri: String,
}

/// Boxed future type returned by [`ImageGenerator`] operations.
pub type GenerateFuture<'a> =
    Pin<Box<dyn Future<Output = Result<ImageResponse, StudioError>> + Send + 'a>>;

/// Produces images from text prompts via an external API.
///
/// Both operations are single-shot and stateless: no retry, no client-side
/// timeout, no caching.
pub trait ImageGenerator: Send + Sync {
    /// Generate an image for the given prompt.
    fn generate(&self, request: &GenerateRequest) -> GenerateFuture<'_>;

    /// Edit the given source image per the instruction.
    fn edit(&self, request: &EditRequest) -> GenerateFuture<'_>;
}
