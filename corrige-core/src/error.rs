//! Layered error types
//!
//! Analysis itself never fails. Errors only surface while loading a lexicon,
//! building a configuration, or talking to the external grammar checker.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while parsing or validating a lexicon
#[derive(Error, Debug)]
pub enum LexiconError {
    /// The TOML document could not be parsed
    #[error("failed to parse lexicon: {0}")]
    Parse(#[from] toml::de::Error),

    /// A pattern failed to compile
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The offending pattern as written in the lexicon
        pattern: String,
        /// The regex compiler error
        #[source]
        source: regex::Error,
    },

    /// Metadata or table contents are unusable
    #[error("invalid lexicon: {0}")]
    Invalid(String),

    /// The lexicon file could not be read
    #[error("failed to read lexicon {path}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised by an external grammar checker
#[derive(Error, Debug)]
pub enum CheckerError {
    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(String),

    /// The checker did not answer within the configured timeout
    #[error("request timed out after {0} ms")]
    Timeout(u64),

    /// The checker answered with something we could not read
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// The checker could not be initialised
    #[error("checker unavailable: {0}")]
    Unavailable(String),
}

/// Top-level error type
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Lexicon loading error
    #[error(transparent)]
    Lexicon(#[from] LexiconError),

    /// External checker error
    #[error(transparent)]
    Checker(#[from] CheckerError),
}

/// Result type for fallible corrige operations
pub type Result<T> = std::result::Result<T, Error>;
