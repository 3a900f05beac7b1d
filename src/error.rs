// src/error.rs
use std::io;

use thiserror::Error;

/// Everything the explorer core can fail with.
///
/// Empty results are never errors: searches that match nothing return an
/// empty `Vec`, random picks from an empty category return `None`.
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// A raw row has an unusable shape (bad id, missing ingredient text).
    #[error("malformed recipe row (id {id}): {reason}")]
    MalformedInput { id: String, reason: String },

    #[error("recipe {recipe_id} not found")]
    NotFound { recipe_id: i64 },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("config line {line}: {reason}")]
    Config { line: usize, reason: String },

    #[error("csv: {0}")]
    Csv(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
