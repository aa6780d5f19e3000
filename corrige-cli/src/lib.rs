//! CorrigeAI CLI library
//!
//! Command-line shell around `corrige-core`: reads texts from files or
//! stdin, enforces the input policy, and renders analysis results.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
