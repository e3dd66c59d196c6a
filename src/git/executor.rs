//! Git operations for the commit pipeline: staged diff, commit, and push.
//!
//! All operations shell out to the system `git` binary, inheriting the user's
//! existing git config, SSH agent, and credential store.

use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::GitError;

/// Trait for the git operations the pipeline needs.
///
/// This abstraction allows mocking git in pipeline tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GitExecutor: Send + Sync {
    /// Return the text of `git diff --staged`. Empty when nothing is staged.
    async fn staged_diff(&self) -> Result<String, GitError>;

    /// Create a commit with `message` as the sole commit message.
    async fn commit(&self, message: &str) -> Result<(), GitError>;

    /// Push the current branch to its configured remote.
    async fn push(&self) -> Result<(), GitError>;
}

/// Executor that runs the real `git` binary.
#[derive(Debug, Clone, Default)]
pub struct SystemGit {
    workdir: Option<PathBuf>,
}

impl SystemGit {
    /// Run git in the process's current directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run git inside `workdir` instead of the current directory.
    pub fn in_dir(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: Some(workdir.into()),
        }
    }

    /// Run a git command and return its stdout, or a descriptive error.
    async fn run_git(&self, args: &[&str], operation: &str) -> Result<String, GitError> {
        if which::which("git").is_err() {
            return Err(GitError::NotInstalled);
        }

        debug!("Running git {}", args.join(" "));

        let mut command = Command::new("git");
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.workdir {
            command.current_dir(dir);
        }

        let output = command.output().await.map_err(|source| GitError::SpawnFailed {
            operation: operation.to_string(),
            source,
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitError::NonZeroExit {
                operation: operation.to_string(),
                code: output.status.code(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl GitExecutor for SystemGit {
    async fn staged_diff(&self) -> Result<String, GitError> {
        let diff = self.run_git(&["diff", "--staged"], "diff").await?;
        debug!("Staged diff: {} bytes", diff.len());
        Ok(diff)
    }

    async fn commit(&self, message: &str) -> Result<(), GitError> {
        self.run_git(&["commit", "-m", message], "commit").await?;
        Ok(())
    }

    async fn push(&self) -> Result<(), GitError> {
        self.run_git(&["push"], "push").await?;
        Ok(())
    }
}
