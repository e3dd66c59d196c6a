//! Commit message generation via the model server.

use tracing::debug;

use crate::commit::prompt::build_commit_prompt;
use crate::commit::sanitize::sanitize_commit_message;
use crate::error::GenerateError;
use crate::ollama::TextGenerator;

/// Generate a single-line commit message for `diff` using `model`.
///
/// The raw completion is reduced with [`sanitize_commit_message`]; an empty
/// result is returned as-is.
pub async fn generate_commit_message<G: TextGenerator>(
    generator: &G,
    model: &str,
    diff: &str,
) -> Result<String, GenerateError> {
    let prompt = build_commit_prompt(diff);
    let raw = generator.generate(model, &prompt).await?;

    debug!("Raw completion: {:?}", raw);

    Ok(sanitize_commit_message(&raw).to_string())
}
