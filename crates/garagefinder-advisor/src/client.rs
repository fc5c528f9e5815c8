//! HTTP client for the Gemini `generateContent` endpoint.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::AdvisorError;
use crate::types::{
    GenerateRequest, GenerateResponse, GenerationConfig, RequestContent, RequestPart,
};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_USER_AGENT: &str = "garagefinder/0.1 (uae-directory)";

const TEMPERATURE: f32 = 0.4;
const MAX_OUTPUT_TOKENS: u32 = 2_048;

/// Client for Google's Generative Language API.
///
/// Use [`GeminiClient::new`] for production or
/// [`GeminiClient::with_base_url`] to point at a mock server in tests.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: Url,
}

impl GeminiClient {
    /// Creates a client for the production API using the default model.
    ///
    /// # Errors
    ///
    /// Returns [`AdvisorError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, AdvisorError> {
        Self::with_base_url(
            api_key,
            DEFAULT_MODEL,
            timeout_secs,
            DEFAULT_USER_AGENT,
            DEFAULT_BASE_URL,
        )
    }

    /// Creates a client with an explicit model, user agent, and base URL.
    ///
    /// # Errors
    ///
    /// Returns [`AdvisorError::Http`] if the `reqwest::Client` cannot be
    /// built, or [`AdvisorError::InvalidBaseUrl`] if the base URL or model
    /// does not form a valid endpoint.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, AdvisorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| AdvisorError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        let client = Self {
            client,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
            base_url,
        };
        // Fail at construction rather than on the first request.
        client.endpoint()?;
        Ok(client)
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends `prompt` as a single user turn and returns the model's text.
    ///
    /// # Errors
    ///
    /// - [`AdvisorError::Http`] / [`AdvisorError::UnexpectedStatus`] on
    ///   transport failure or a non-2xx response.
    /// - [`AdvisorError::Deserialize`] if the body is not a
    ///   `generateContent` response.
    /// - [`AdvisorError::EmptyResponse`] if the first candidate has no text.
    pub async fn generate(&self, prompt: &str, context: &str) -> Result<String, AdvisorError> {
        let request = GenerateRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let response = self
            .client
            .post(self.endpoint()?)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AdvisorError::UnexpectedStatus {
                status: status.as_u16(),
                context: context.to_string(),
            });
        }

        let body = response.text().await?;
        let parsed: GenerateResponse =
            serde_json::from_str(&body).map_err(|e| AdvisorError::Deserialize {
                context: context.to_string(),
                source: e,
            })?;

        let text = parsed.first_text().ok_or_else(|| AdvisorError::EmptyResponse {
            context: context.to_string(),
        })?;
        tracing::debug!(context, chars = text.len(), "gemini response received");
        Ok(text)
    }

    fn endpoint(&self) -> Result<Url, AdvisorError> {
        let path = format!("v1beta/models/{}:generateContent", self.model);
        let mut url = self
            .base_url
            .join(&path)
            .map_err(|e| AdvisorError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        url.query_pairs_mut().append_pair("key", &self.api_key);
        Ok(url)
    }
}
