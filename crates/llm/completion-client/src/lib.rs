//! # Completion client
//!
//! Sends one enhancement request to an OpenAI-compatible `/chat/completions` endpoint and
//! decodes the reply. Two response shapes are understood:
//!
//! - chat completion: `choices[0].message.content`
//! - content array: `content[0].text`
//!
//! A reply matching neither degrades to empty text. Non-success statuses become
//! [`EnhanceError::RemoteApi`] and are never retried.
//!
//! API keys only appear in logs through [`mask_token`].

mod response;
mod usage;

use cue_core::{Credentials, EnhanceError};
use prompt::{EnhancementRequest, MAX_OUTPUT_TOKENS};
use reqwest::Client;
use serde::Serialize;
use tracing::{info, instrument, warn};

pub use cue_core::mask_token;
pub use response::{extract_text, extract_usage};
pub use usage::{cost_per_token, Usage, DEFAULT_COST_PER_TOKEN};

/// Outcome of a successful completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct EnhancementResult {
    pub enhanced_prompt: String,
    /// Provider as selected by the user (echoed back).
    pub provider: String,
    /// Display model name as selected by the user (echoed back).
    pub model: String,
    /// Zero tokens when the reply carried no usage counts.
    pub usage: Usage,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct CompletionBody<'a> {
    model: String,
    messages: Vec<WireMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

/// Chat completion client. Cheap to clone; holds no credentials.
#[derive(Debug, Clone, Default)]
pub struct CompletionClient {
    http: Client,
}

impl CompletionClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses an existing HTTP client (shared pools, custom timeouts, proxies).
    pub fn with_http_client(http: Client) -> Self {
        Self { http }
    }

    /// Issues exactly one POST for `request`.
    ///
    /// Fails with [`EnhanceError::MissingCredentials`] before any network activity when the
    /// API key or base URL is blank.
    #[instrument(
        skip(self, request, credentials),
        fields(provider = %request.provider, model = %request.model)
    )]
    pub async fn complete(
        &self,
        request: &EnhancementRequest,
        credentials: &Credentials,
    ) -> Result<EnhancementResult, EnhanceError> {
        credentials.require()?;

        let messages = request.messages();
        let body = CompletionBody {
            model: request.model_id(),
            messages: messages
                .iter()
                .map(|m| WireMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
            temperature: request.temperature(),
            max_tokens: MAX_OUTPUT_TOKENS,
        };
        let url = credentials.chat_completions_url();

        info!(
            url = %url,
            model_id = %body.model,
            temperature = body.temperature,
            prompt_len = request.prompt.chars().count(),
            file_blocks = request.file_context.len(),
            api_key = %credentials.masked_key(),
            "Chat completion request"
        );

        let response = self
            .http
            .post(&url)
            .bearer_auth(&credentials.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| EnhanceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let status_text = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.as_str().to_string());
            warn!(status = status.as_u16(), "Chat completion rejected by remote API");
            return Err(EnhanceError::RemoteApi {
                status: status_text,
            });
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| EnhanceError::Transport(format!("invalid response body: {}", e)))?;

        let enhanced_prompt = extract_text(&payload);
        if enhanced_prompt.is_empty() {
            warn!("Chat completion response carried no text");
        }
        let usage = extract_usage(&payload, &request.provider);
        info!(tokens = usage.tokens, cost = usage.cost, "Chat completion usage");

        Ok(EnhancementResult {
            enhanced_prompt,
            provider: request.provider.clone(),
            model: request.model.clone(),
            usage,
        })
    }
}
