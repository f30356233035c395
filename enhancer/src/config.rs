//! Enhancer configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use catalog::Catalog;
use file_ingest::DEFAULT_MAX_FILES;
use prompt::CapPolicy;

#[derive(Debug, Clone)]
pub struct EnhancerConfig {
    pub database_url: String,
    pub log_file: String,
    /// Owner of saved prompts.
    pub user_id: String,
    /// Directory with `tools.json` and `templates.json`; builtin catalog when unset.
    pub catalog_dir: Option<PathBuf>,
    pub max_files: usize,
    pub caps: CapPolicy,
}

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}

impl EnhancerConfig {
    /// Reads the environment; unparseable numbers fall back to their defaults.
    pub fn load() -> Self {
        let defaults = CapPolicy::default();
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "./cue_library.db".to_string());
        let log_file = env::var("CUE_LOG_FILE").unwrap_or_else(|_| "logs/cue.log".to_string());
        let user_id = env::var("CUE_USER_ID")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "local".to_string());
        let catalog_dir = env::var("CUE_CATALOG_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);
        let caps = CapPolicy {
            per_file_chars: parse_or("CUE_MAX_FILE_CHARS", defaults.per_file_chars),
            total_file_chars: parse_or("CUE_MAX_TOTAL_FILE_CHARS", defaults.total_file_chars),
            prompt_chars: parse_or("CUE_MAX_PROMPT_CHARS", defaults.prompt_chars),
            compiled_chars: parse_or("CUE_MAX_COMPILED_CHARS", defaults.compiled_chars),
        };
        Self {
            database_url,
            log_file,
            user_id,
            catalog_dir,
            max_files: parse_or("CUE_MAX_FILES", DEFAULT_MAX_FILES),
            caps,
        }
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog_dir {
            Some(dir) => Catalog::load_dir(dir)
                .with_context(|| format!("Failed to load catalog from {}", dir.display())),
            None => Catalog::builtin().context("Builtin catalog is invalid"),
        }
    }
}
