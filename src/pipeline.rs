//! The commit pipeline: staged diff, generated message, commit, push.
//!
//! Each stage feeds the next and the first failure ends the run. A push
//! failure leaves the new commit in the local repository.

use tracing::info;

use crate::commit::generate_commit_message;
use crate::error::RunError;
use crate::git::GitExecutor;
use crate::ollama::TextGenerator;

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing was staged; no model call, commit, or push happened.
    NothingToCommit,
    /// A commit with `message` was created and pushed.
    Pushed { message: String },
}

/// Run the full pipeline against `git` and `generator`.
pub async fn run<G, T>(git: &G, generator: &T, model: &str) -> Result<Outcome, RunError>
where
    G: GitExecutor,
    T: TextGenerator,
{
    let diff = git.staged_diff().await.map_err(RunError::Diff)?;
    if diff.is_empty() {
        info!("No staged changes");
        return Ok(Outcome::NothingToCommit);
    }

    let message = generate_commit_message(generator, model, &diff)
        .await
        .map_err(RunError::Generate)?;

    println!("Generated commit message:\n\n{}\n", message);

    git.commit(&message).await.map_err(RunError::Commit)?;
    info!("Created commit");

    git.push().await.map_err(RunError::Push)?;
    info!("Pushed to remote");

    Ok(Outcome::Pushed { message })
}
