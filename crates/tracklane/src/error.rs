//! Error types for Tracklane operations.
//!
//! Layout itself cannot fail once an [`OverlapGraph`](crate::structure::OverlapGraph)
//! exists; errors come from rejecting malformed input before the graph is
//! built, and from the I/O and configuration done by callers such as the CLI.

use std::io;

use thiserror::Error;

/// The main error type for Tracklane operations.
#[derive(Debug, Error)]
pub enum TracklaneError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Duplicate interval identity: {0}")]
    DuplicateId(String),

    #[error("Invalid tolerance {0}: expected a finite, non-negative number")]
    InvalidTolerance(f64),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    Input(String),
}
