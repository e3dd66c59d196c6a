//! AI-generated commit messages from staged diffs.

pub mod message;
pub mod prompt;
pub mod sanitize;

pub use message::generate_commit_message;
pub use prompt::build_commit_prompt;
pub use sanitize::sanitize_commit_message;
