//! ollama-commit - write a commit message for staged changes with a local Ollama model.
//!
//! # Overview
//!
//! ollama-commit reads the staged diff, asks a local Ollama server for a
//! conventional-commits style message, reduces the answer to a single line,
//! then runs `git commit` and `git push`.

pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod ollama;
pub mod pipeline;

// Re-export commonly used types
pub use commit::{build_commit_prompt, generate_commit_message, sanitize_commit_message};
pub use error::{GenerateError, GitError, RunError};
pub use git::{GitExecutor, SystemGit};
pub use ollama::{OllamaClient, TextGenerator};
pub use pipeline::{Outcome, run};
