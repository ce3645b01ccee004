//! Wire types for the Gemini `generateContent` API.
//!
//! These match the REST API's camelCase JSON. The same request/response
//! shape serves both the chat completion and the image generation call;
//! image payloads arrive as base64 `inlineData` parts.

use serde::{Deserialize, Serialize};

/// Wire role for user turns.
pub const ROLE_USER: &str = "user";
/// Wire role for assistant turns.
pub const ROLE_MODEL: &str = "model";

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    /// Fixed persona instruction. Sent without a role.
    #[serde(rename = "systemInstruction", skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    /// Ordered conversation turns, oldest first.
    pub contents: Vec<Content>,
    /// Sampling configuration.
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

/// A single turn (or the system instruction): a role plus ordered parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// `"user"` or `"model"`; absent on the system instruction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Ordered content parts.
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// A user turn with a single text part.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Some(ROLE_USER.to_owned()),
            parts: vec![Part::Text { text: text.into() }],
        }
    }

    /// A model turn with a single text part.
    #[must_use]
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Some(ROLE_MODEL.to_owned()),
            parts: vec![Part::Text { text: text.into() }],
        }
    }

    /// A role-less content block for the system instruction.
    #[must_use]
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: None,
            parts: vec![Part::Text { text: text.into() }],
        }
    }
}

/// A content part within a turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// Plain text.
    Text {
        /// The text content.
        text: String,
    },
    /// Inline binary payload (images).
    InlineData {
        /// The payload.
        #[serde(rename = "inlineData")]
        inline_data: Blob,
    },
    /// Any other part kind the API may emit.
    Other(serde_json::Value),
}

/// Base64 payload with its MIME type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blob {
    /// MIME type (e.g., `image/png`).
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    /// Base64-encoded bytes.
    pub data: String,
}

/// Sampling configuration.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    /// Sampling temperature.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// Response from `models/{model}:generateContent`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    /// Response candidates; the first one is used.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// A single response candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// The candidate's content, if any.
    #[serde(default)]
    pub content: Option<Content>,
}

/// A generated image payload, held in session state until invalidated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedImage {
    /// MIME type (e.g., `image/png`).
    pub mime_type: String,
    /// Base64-encoded bytes, as received from the backend.
    pub data: String,
}

impl GeneratedImage {
    /// Render as a `data:` URI suitable for an `<img src>` attribute.
    #[must_use]
    pub fn as_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }
}

/// First text part of the first candidate, if any.
#[must_use]
pub fn first_text(response: &GenerateContentResponse) -> Option<&str> {
    response
        .candidates
        .first()?
        .content
        .as_ref()?
        .parts
        .iter()
        .find_map(|part| match part {
            Part::Text { text } => Some(text.as_str()),
            _ => None,
        })
}

/// First inline image part of the first candidate, if any.
#[must_use]
pub fn first_inline_image(response: &GenerateContentResponse) -> Option<GeneratedImage> {
    response
        .candidates
        .first()?
        .content
        .as_ref()?
        .parts
        .iter()
        .find_map(|part| match part {
            Part::InlineData { inline_data } => Some(GeneratedImage {
                mime_type: inline_data.mime_type.clone(),
                data: inline_data.data.clone(),
            }),
            _ => None,
        })
}
