//! Common types and utilities shared across tubeseed crates.
//!
//! This crate defines the shared error type and the observability helpers
//! used by the library crates and the `tubeseed` binary.
//!
//! # Overview
//!
//! - [`observability`]: Centralised tracing/logging initialisation
//! - [`TubeseedError`] and [`Result`]: Shared error handling
//!
//! # Examples
//!
//! ```rust
//! use tubeseed_common::TubeseedError;
//!
//! let err = TubeseedError::MissingDeveloperKey;
//! assert!(err.is_fatal());
//! ```
use std::path::PathBuf;

use tubeseed_http::HttpError;

pub mod observability;

/// Error types used across the tubeseed workspace.
#[derive(thiserror::Error, Debug)]
pub enum TubeseedError {
    /// No API credential was supplied through flags, environment or settings.
    #[error(
        "Developer key not specified. Obtain one from Google and pass to --developer-key."
    )]
    MissingDeveloperKey,

    /// The seed file named on the command line could not be opened.
    #[error("Error opening seed file {path}: {source}")]
    SeedFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the next seed line failed mid-stream.
    #[error("Error reading seed input: {0}")]
    SeedRead(#[source] std::io::Error),

    /// Settings were incomplete or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A single search call failed.
    #[error("Error making search API call: {0}")]
    Search(#[from] HttpError),

    /// Writing results to the output sink failed.
    #[error("Error writing results: {0}")]
    Output(#[source] std::io::Error),
}

impl TubeseedError {
    /// Whether the error should stop the run rather than skip one seed.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, TubeseedError::Search(_))
    }
}

/// Convenient alias for results that use [`TubeseedError`].
pub type Result<T> = std::result::Result<T, TubeseedError>;
