//! Prompt construction for AI-generated commit messages.

/// Build the model prompt for generating a commit message from a staged diff.
///
/// The diff is embedded verbatim and the prompt ends on a `Commit message:`
/// cue so the model continues with the message itself.
pub fn build_commit_prompt(diff: &str) -> String {
    format!(
        r#"Generate a concise git commit message in active voice following conventional commits standard.
Focus on the change purpose rather than implementation details.

Changes:
{diff}

Commit message:"#
    )
}
