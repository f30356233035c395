//! # cue-cli
//!
//! Argument parsing for the `cue` binary. Command handlers live in `main.rs`.

pub mod cli;

pub use cli::{parse_var, Cli, Commands, EnhanceArgs, LibraryCommand};
