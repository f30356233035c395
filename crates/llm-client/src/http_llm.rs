//! [`LlmClient`] backed by an OpenAI-compatible chat completion endpoint.

use async_trait::async_trait;
use completion_client::{CompletionClient, EnhancementResult};
use cue_core::{Credentials, EnhanceError};
use prompt::EnhancementRequest;
use tracing::instrument;

use super::LlmClient;

#[derive(Debug, Clone, Default)]
pub struct HttpLlmClient {
    client: CompletionClient,
}

impl HttpLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: CompletionClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl LlmClient for HttpLlmClient {
    #[instrument(skip(self, request, credentials), fields(tool = %request.tool_type))]
    async fn enhance(
        &self,
        request: &EnhancementRequest,
        credentials: &Credentials,
    ) -> Result<EnhancementResult, EnhanceError> {
        self.client.complete(request, credentials).await
    }
}
