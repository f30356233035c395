//! LLM configuration: trait and env-based implementation.

use cue_core::Credentials;
use std::env;

/// Endpoint configuration for OpenAI-compatible APIs.
pub trait LlmConfig: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;

    fn credentials(&self) -> Credentials {
        Credentials::from_parts(Some(self.api_key()), Some(self.base_url()))
    }
}

/// LLM config loaded from environment variables.
///
/// Missing values are left blank; enhancement fails with `MissingCredentials` until both are set.
#[derive(Debug, Clone, Default)]
pub struct EnvLlmConfig {
    pub api_key: String,
    pub base_url: String,
}

impl LlmConfig for EnvLlmConfig {
    fn api_key(&self) -> &str {
        &self.api_key
    }
    fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl EnvLlmConfig {
    /// Reads `CUE_API_KEY` / `CUE_BASE_URL`, falling back to `OPENAI_API_KEY` / `OPENAI_BASE_URL`.
    pub fn from_env() -> Self {
        let api_key = env::var("CUE_API_KEY")
            .or_else(|_| env::var("OPENAI_API_KEY"))
            .unwrap_or_default();
        let base_url = env::var("CUE_BASE_URL")
            .or_else(|_| env::var("OPENAI_BASE_URL"))
            .unwrap_or_default();
        Self {
            api_key: api_key.trim().to_string(),
            base_url: base_url.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("CUE_API_KEY");
        env::remove_var("CUE_BASE_URL");
        env::remove_var("OPENAI_API_KEY");
        env::remove_var("OPENAI_BASE_URL");
    }

    #[test]
    #[serial]
    fn test_from_env_prefers_cue_vars() {
        clear_env();
        env::set_var("CUE_API_KEY", "cue-key");
        env::set_var("OPENAI_API_KEY", "openai-key");
        env::set_var("CUE_BASE_URL", "https://cue.example.com/v1");

        let config = EnvLlmConfig::from_env();

        assert_eq!(config.api_key(), "cue-key");
        assert_eq!(config.base_url(), "https://cue.example.com/v1");
        assert!(config.credentials().is_complete());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_falls_back_to_openai_vars() {
        clear_env();
        env::set_var("OPENAI_API_KEY", " openai-key ");
        env::set_var("OPENAI_BASE_URL", "https://api.openai.com/v1");

        let config = EnvLlmConfig::from_env();

        assert_eq!(config.api_key(), "openai-key");
        assert_eq!(config.base_url(), "https://api.openai.com/v1");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_without_vars_is_incomplete() {
        clear_env();

        let config = EnvLlmConfig::from_env();

        assert!(config.api_key().is_empty());
        assert!(config.base_url().is_empty());
        assert!(!config.credentials().is_complete());
    }
}
