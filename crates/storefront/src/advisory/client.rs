//! HTTP client for the advisory backend.
//!
//! A thin wrapper over the Gemini `generateContent` REST endpoint. The
//! public operations absorb every failure: `send` returns a fallback reply
//! and `generate_preview_image` returns `None`, so callers never need a
//! failure branch of their own.

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use tracing::instrument;

use crate::config::AdvisoryConfig;

use super::error::{AdvisoryError, ApiErrorResponse};
use super::session::AdvisorSession;
use super::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GeneratedImage, GenerationConfig,
    first_inline_image, first_text,
};

const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const CHAT_TEMPERATURE: f32 = 0.7;

/// Advisory backend client.
///
/// Cheap to clone; the HTTP client and model names live behind an `Arc`.
#[derive(Clone)]
pub struct AdvisoryClient {
    inner: Arc<AdvisoryClientInner>,
}

struct AdvisoryClientInner {
    client: reqwest::Client,
    chat_model: String,
    image_model: String,
}

impl AdvisoryClient {
    /// Create a new advisory client.
    ///
    /// # Panics
    ///
    /// Panics if the API key contains invalid header characters.
    #[must_use]
    pub fn new(config: &AdvisoryConfig) -> Self {
        let api_key = config.api_key.expose_secret();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(api_key).expect("Invalid API key for header"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            inner: Arc::new(AdvisoryClientInner {
                client,
                chat_model: config.chat_model.clone(),
                image_model: config.image_model.clone(),
            }),
        }
    }

    /// Start a new advisor conversation.
    ///
    /// Infallible: backend failures are deferred to send time.
    #[must_use]
    pub fn start_session(&self) -> AdvisorSession {
        AdvisorSession::new()
    }

    /// Send a user message and return the assistant reply.
    ///
    /// Appends exactly one user and one assistant message to the session
    /// transcript, whatever happens on the wire. Never returns an error:
    /// transport failures yield the fixed fallback reply.
    #[instrument(skip(self, session, user_text), fields(model = %self.inner.chat_model))]
    pub async fn send(&self, session: &mut AdvisorSession, user_text: &str) -> String {
        let outcome = self.request_completion(session.history(), user_text).await;
        session.record_exchange(user_text, outcome)
    }

    /// Generate a holster preview image for a manufacturer/model pair.
    ///
    /// One-shot and stateless. Returns `None` on any failure or when the
    /// response carries no image part; callers fall back to the static
    /// catalog image.
    #[instrument(skip(self), fields(model = %self.inner.image_model))]
    pub async fn generate_preview_image(
        &self,
        manufacturer: &str,
        model: &str,
    ) -> Option<GeneratedImage> {
        let request = GenerateContentRequest {
            system_instruction: None,
            contents: vec![Content::user(build_image_prompt(manufacturer, model))],
            generation_config: None,
        };

        match self.post_generate(&self.inner.image_model, &request).await {
            Ok(response) => first_inline_image(&response),
            Err(err) => {
                tracing::warn!(error = %err, manufacturer, model, "preview generation failed");
                None
            }
        }
    }

    /// Request a completion for the session history plus a new user turn.
    async fn request_completion(
        &self,
        history: &[Content],
        user_text: &str,
    ) -> Result<String, AdvisoryError> {
        let mut contents = history.to_vec();
        contents.push(Content::user(user_text));

        let request = GenerateContentRequest {
            system_instruction: Some(Content::system(super::ADVISOR_PERSONA)),
            contents,
            generation_config: Some(GenerationConfig {
                temperature: Some(CHAT_TEMPERATURE),
            }),
        };

        let response = self.post_generate(&self.inner.chat_model, &request).await?;
        Ok(first_text(&response).unwrap_or_default().to_owned())
    }

    /// POST a `generateContent` request to the given model.
    async fn post_generate(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, AdvisoryError> {
        let url = format!("{GEMINI_API_BASE_URL}/models/{model}:generateContent");

        let response = self.inner.client.post(&url).json(request).send().await?;

        self.handle_response(response).await
    }

    /// Handle a response, parsing the body or converting the error status.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<GenerateContentResponse, AdvisoryError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body)
                .map_err(|e| AdvisoryError::Parse(format!("Failed to parse response: {e}")))
        } else {
            Err(self.handle_error_status(status, response).await)
        }
    }

    /// Convert an error status code into an `AdvisoryError`.
    async fn handle_error_status(
        &self,
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> AdvisoryError {
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);
            return AdvisoryError::RateLimited(retry_after);
        }

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return AdvisoryError::Unauthorized("Invalid API key".to_string());
        }

        match response.text().await {
            Ok(body) => {
                if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(&body) {
                    AdvisoryError::Api {
                        status: api_error.error.status,
                        message: api_error.error.message,
                    }
                } else {
                    AdvisoryError::Api {
                        status: status.to_string(),
                        message: body,
                    }
                }
            }
            Err(e) => AdvisoryError::Http(e),
        }
    }
}

/// Build the image generation prompt for a manufacturer/model pair.
fn build_image_prompt(manufacturer: &str, model: &str) -> String {
    format!(
        "A professional studio product photography shot of a premium leather gun \
         holster custom molded for a {manufacturer} {model}. The holster is rich \
         brown italian leather, detailed stitching, tactical lighting, isolated on \
         a dark sleek background. High resolution, 4k, cinematic."
    )
}
