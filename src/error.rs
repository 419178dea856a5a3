use std::path::PathBuf;

use thiserror::Error;

/// Failure of one extraction attempt, or of every attempt in a pipeline.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{backend}: {message}")]
    Backend {
        backend: &'static str,
        message: String,
    },

    #[error("{backend}: panicked: {message}")]
    Panicked {
        backend: &'static str,
        message: String,
    },

    #[error("ghostscript: {0}")]
    Preprocess(String),

    #[error("{}", join_attempts(.0))]
    Exhausted(Vec<ExtractError>),
}

fn join_attempts(attempts: &[ExtractError]) -> String {
    attempts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Usage errors that abort before any extraction is attempted.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
}
