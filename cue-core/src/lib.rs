//! # cue-core
//!
//! Core types shared by every crate of the enhancement pipeline: the error kinds
//! ([`IngestError`], [`EnhanceError`], [`CueError`]), caller-supplied [`Credentials`],
//! and tracing initialization. Has no knowledge of HTTP, storage or templates.

pub mod credentials;
pub mod error;
pub mod logger;

pub use credentials::{mask_token, Credentials};
pub use error::{CueError, EnhanceError, IngestError, Result};
pub use logger::init_tracing;
