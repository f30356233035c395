//! Tool definition: one selectable use-case and its provider/model/file/output rules.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Upload constraints for a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUploadRules {
    /// Extensions with leading dot, matched as a case-insensitive filename suffix.
    pub allowed_types: Vec<String>,
    #[serde(rename = "maxSizeMB")]
    pub max_size_mb: u64,
}

impl FileUploadRules {
    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_mb * 1024 * 1024
    }

    pub fn allows(&self, file_name: &str) -> bool {
        let name = file_name.to_lowercase();
        self.allowed_types
            .iter()
            .any(|ext| name.ends_with(&ext.to_lowercase()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputFormats {
    pub options: Vec<String>,
    pub default_format: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub categories: Vec<String>,
    pub providers: Vec<String>,
    /// Provider name -> display model names, first entry is the default.
    #[serde(default)]
    pub models: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub agents: Vec<String>,
    #[serde(default)]
    pub allow_custom_provider: bool,
    #[serde(default)]
    pub allow_custom_model: bool,
    #[serde(default)]
    pub allow_custom_agent: bool,
    pub file_upload_rules: FileUploadRules,
    pub output_formats: OutputFormats,
}

impl ToolDefinition {
    pub fn models_for(&self, provider: &str) -> &[String] {
        self.models.get(provider).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn default_provider(&self) -> Option<&str> {
        self.providers.first().map(String::as_str)
    }

    pub fn default_model(&self, provider: &str) -> Option<&str> {
        self.models_for(provider).first().map(String::as_str)
    }

    pub fn default_agent(&self) -> Option<&str> {
        self.agents.first().map(String::as_str)
    }

    pub fn supports_provider(&self, provider: &str) -> bool {
        self.providers.iter().any(|p| p == provider)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> FileUploadRules {
        FileUploadRules {
            allowed_types: vec![".txt".into(), ".PDF".into()],
            max_size_mb: 2,
        }
    }

    #[test]
    fn allows_matches_suffix_case_insensitively() {
        let r = rules();
        assert!(r.allows("notes.TXT"));
        assert!(r.allows("report.pdf"));
        assert!(!r.allows("image.png"));
        assert!(!r.allows("txt"));
    }

    #[test]
    fn max_size_is_in_mebibytes() {
        assert_eq!(rules().max_size_bytes(), 2 * 1024 * 1024);
    }
}
