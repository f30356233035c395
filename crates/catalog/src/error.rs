//! Catalog loading errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Duplicate tool id: {0}")]
    DuplicateTool(String),
}
