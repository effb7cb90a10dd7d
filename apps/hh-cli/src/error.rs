//! Error types for the CLI.

use std::path::PathBuf;

use hh_core::HhError;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] HhError),

    #[error("Failed to read fixture file: {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Fixture error: {0}")]
    Fixture(String),

    #[error("{failed} of {total} fixture cases did not match their expected verdict")]
    Mismatch { failed: usize, total: usize },
}

/// Render an error and its source chain on one line.
pub fn report(err: &CliError) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
