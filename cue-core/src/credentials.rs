//! Caller-supplied provider credentials.

use std::fmt;

use crate::error::EnhanceError;

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let len = chars.len();
    if len <= 11 {
        "***".to_string()
    } else {
        let head: String = chars[..7].iter().collect();
        let tail: String = chars[len - 4..].iter().collect();
        format!("{}***{}", head, tail)
    }
}

/// API key and base URL of an OpenAI-compatible endpoint. Never persisted by the pipeline.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub base_url: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Builds credentials from optional parts; blank values count as absent.
    pub fn from_parts(api_key: Option<&str>, base_url: Option<&str>) -> Self {
        Self {
            api_key: api_key.map(str::trim).unwrap_or_default().to_string(),
            base_url: base_url.map(str::trim).unwrap_or_default().to_string(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.api_key.trim().is_empty() && !self.base_url.trim().is_empty()
    }

    /// Fails with [`EnhanceError::MissingCredentials`] unless both parts are present.
    pub fn require(&self) -> Result<(), EnhanceError> {
        if self.is_complete() {
            Ok(())
        } else {
            Err(EnhanceError::MissingCredentials)
        }
    }

    /// `{base_url}/chat/completions`, tolerating a trailing slash on the base URL.
    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim().trim_end_matches('/'))
    }

    pub fn masked_key(&self) -> String {
        mask_token(&self.api_key)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.masked_key())
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_never_contains_full_key() {
        let creds = Credentials::new("sk-proj-1234567890abcdef", "https://api.example.com/v1");
        let out = format!("{:?}", creds);
        assert!(!out.contains("1234567890abcdef"));
        assert!(out.contains("sk-proj***cdef"));
    }

    #[test]
    fn blank_parts_are_incomplete() {
        assert!(!Credentials::from_parts(Some("  "), Some("https://x")).is_complete());
        assert!(!Credentials::from_parts(Some("key"), None).is_complete());
        assert_eq!(
            Credentials::from_parts(None, Some("https://x")).require(),
            Err(EnhanceError::MissingCredentials)
        );
        assert!(Credentials::from_parts(Some("key"), Some("https://x")).require().is_ok());
    }

    #[test]
    fn chat_completions_url_strips_trailing_slash() {
        let creds = Credentials::new("k", "https://api.example.com/v1/");
        assert_eq!(
            creds.chat_completions_url(),
            "https://api.example.com/v1/chat/completions"
        );
    }
}
