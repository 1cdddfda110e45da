//! Live adapter for the Gemini image generation API.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::data_uri::DataUri;
use crate::error::StudioError;
use crate::ports::image_generator::{
    EditRequest, GenerateFuture, GenerateRequest, ImageGenerator, ImageResponse,
};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Fixed style instruction appended to every generation prompt.
const STYLE_INSTRUCTION: &str = "Produce a high-resolution, photorealistic 1024x1024 image \
    based on the prompt. Use cinematic lighting, high detail, realistic textures, and natural \
    color grading. Avoid text/letters in the image. Provide a neutral background and focus on \
    subject clarity.";

/// Live Gemini image generator that calls the Google AI API.
pub struct GeminiGenerator {
    client: Client,
    api_key: String,
}

impl GeminiGenerator {
    /// Create a new Gemini generator with the given API key.
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self { client: Client::new(), api_key }
    }

    async fn call(&self, model: &str, parts: Vec<RequestPart>) -> Result<ImageResponse, StudioError> {
        let url = format!("{GEMINI_API_BASE}/{model}:generateContent");

        let body = serde_json::json!({
            "contents": [{ "parts": parts }],
            "generationConfig": { "responseModalities": ["IMAGE"] },
        });

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let response_text = response.text().await?;

        if !status.is_success() {
            return Err(StudioError::Api { status: status.as_u16(), message: response_text });
        }

        decode_response(&response_text)
    }
}

/// Template for edit instructions sent alongside the source image.
fn edit_instruction(instruction: &str) -> String {
    format!(
        "Edit this image. Instruction: {instruction}. Maintain the original aspect ratio \
         and core subject unless instructed otherwise."
    )
}

/// Scan the reply's content parts for the first inline image payload.
fn decode_response(response_text: &str) -> Result<ImageResponse, StudioError> {
    let parsed: GeminiResponse = serde_json::from_str(response_text).map_err(|e| {
        StudioError::Api { status: 200, message: format!("Failed to parse response: {e}") }
    })?;

    for candidate in parsed.candidates {
        for part in candidate.content.parts {
            if let Some(inline) = part.inline_data {
                let uri = DataUri::from_base64(&inline.mime_type, &inline.data);
                return Ok(ImageResponse { data_uri: uri.to_string() });
            }
        }
    }

    let truncated = if response_text.len() > 500 {
        format!("{}...", &response_text[..500])
    } else {
        response_text.to_string()
    };
    Err(StudioError::NoImage(truncated))
}

impl ImageGenerator for GeminiGenerator {
    fn generate(&self, request: &GenerateRequest) -> GenerateFuture<'_> {
        let request = request.clone();
        Box::pin(async move {
            let parts = vec![
                RequestPart::Text { text: request.prompt },
                RequestPart::Text { text: STYLE_INSTRUCTION.to_string() },
            ];
            self.call(&request.model, parts).await
        })
    }

    fn edit(&self, request: &EditRequest) -> GenerateFuture<'_> {
        let request = request.clone();
        Box::pin(async move {
            let source = DataUri::parse(&request.source)?;
            let parts = vec![
                RequestPart::InlineData {
                    inline_data: InlineData {
                        mime_type: source.mime_type().to_string(),
                        data: source.payload().to_string(),
                    },
                },
                RequestPart::Text { text: edit_instruction(&request.instruction) },
            ];
            self.call(&request.model, parts).await
        })
    }
}

// --- Gemini API request/response types ---

/// A part in a request body: text or inline image data.
#[derive(Serialize)]
#[serde(untagged)]
enum RequestPart {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[derive(Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPart {
    #[allow(dead_code)]
    text: Option<String>,
    inline_data: Option<GeminiInlineData>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiInlineData {
    mime_type: String,
    data: String,
}
