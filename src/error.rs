//! Error types for ollama-commit modules using thiserror.

use thiserror::Error;

/// Errors from invoking the system `git` binary.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git executable not found in PATH")]
    NotInstalled,

    #[error("Failed to run git {operation}: {source}")]
    SpawnFailed {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("git {operation} exited with {}: {stderr}",
             code.map_or("unknown status".to_string(), |c| format!("code {c}")))]
    NonZeroExit {
        operation: String,
        code: Option<i32>,
        stderr: String,
    },
}

/// Errors from the Ollama generate endpoint.
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Ollama responded with HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    #[error("Ollama reported an error: {0}")]
    Server(String),

    #[error("Failed to decode response fragment: {0}")]
    InvalidFragment(#[source] serde_json::Error),

    #[error("Response stream ended inside a fragment ({0} trailing bytes)")]
    TruncatedFragment(usize),
}

/// A fatal error from one stage of the commit pipeline.
///
/// The display form is `<stage description>: <cause>`, which the binary
/// prefixes with `ERROR: ` on stderr.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("Failed to get git diff: {0}")]
    Diff(#[source] GitError),

    #[error("Failed to generate commit message: {0}")]
    Generate(#[source] GenerateError),

    #[error("Failed to create commit: {0}")]
    Commit(#[source] GitError),

    #[error("Failed to push changes: {0}")]
    Push(#[source] GitError),
}
