use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to encode traversal: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to install tracing subscriber: {0}")]
    Logging(String),
}
