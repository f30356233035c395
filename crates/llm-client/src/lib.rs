//! # LLM client abstraction
//!
//! Defines the [`LlmClient`] trait and an HTTP implementation over
//! [`completion_client::CompletionClient`]. The enhancer depends only on the trait so tests
//! can count or script calls without a network.

use async_trait::async_trait;
use cue_core::{Credentials, EnhanceError};
use prompt::EnhancementRequest;

mod config;
mod http_llm;

pub use completion_client::{EnhancementResult, Usage};
pub use config::{EnvLlmConfig, LlmConfig};
pub use http_llm::HttpLlmClient;

/// Sends one enhancement request to a model provider.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Performs exactly one completion call. No retries.
    async fn enhance(
        &self,
        request: &EnhancementRequest,
        credentials: &Credentials,
    ) -> Result<EnhancementResult, EnhanceError>;
}

