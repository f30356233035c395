//! Storage crate: the saved prompt library.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – NewSavedPrompt, SavedPrompt, PromptQuery
//! - [`repository`] – PromptStore trait
//! - [`prompt_repo`] – PromptRepository (SQLite)
//! - [`sqlite_pool`] – SqlitePoolManager
//!
//! Every read and write is scoped to the owning user id; a prompt of one user is invisible
//! to every other user.

mod error;
mod models;
mod prompt_repo;
mod repository;
mod sqlite_pool;

pub use error::StorageError;
pub use models::{NewSavedPrompt, PromptQuery, SavedPrompt};
pub use prompt_repo::PromptRepository;
pub use repository::PromptStore;
pub use sqlite_pool::SqlitePoolManager;
