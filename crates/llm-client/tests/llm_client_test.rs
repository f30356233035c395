//! Tests for the [`llm_client::LlmClient`] seam.

use std::sync::Arc;

use cue_core::{Credentials, EnhanceError};
use llm_client::{HttpLlmClient, LlmClient};
use prompt::EnhancementRequest;

/// **Test: The HTTP client enforces the credential gate.**
///
/// **Expected:** `MissingCredentials` without contacting any endpoint.
#[tokio::test]
async fn http_client_requires_credentials() {
    let client = HttpLlmClient::new();
    let err = client
        .enhance(&EnhancementRequest::default(), &Credentials::default())
        .await
        .unwrap_err();
    assert_eq!(err, EnhanceError::MissingCredentials);
}

/// **Test: Clients are usable as shared trait objects.**
#[tokio::test]
async fn arc_dyn_client_delegates() {
    let client: Arc<dyn LlmClient> = Arc::new(HttpLlmClient::new());
    let err = client
        .enhance(
            &EnhancementRequest::default(),
            &Credentials::new("", "https://example.invalid"),
        )
        .await
        .unwrap_err();
    assert_eq!(err, EnhanceError::MissingCredentials);
}
