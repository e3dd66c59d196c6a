//! Reduce raw model output to a single-line commit message.

/// Clean up model output into a commit subject.
///
/// 1. Trim surrounding whitespace.
/// 2. If the text contains a double quote, keep the first quoted segment
///    (the text between the first and second `"`). This drops preambles like
///    `Sure, here's a message: "fix bug"`.
/// 3. Keep only the first line.
///
/// The result may be empty; callers pass it through unchanged.
pub fn sanitize_commit_message(raw: &str) -> &str {
    let trimmed = raw.trim();

    let candidate = if trimmed.contains('"') {
        trimmed.split('"').nth(1).unwrap_or(trimmed)
    } else {
        trimmed
    };

    candidate.split('\n').next().unwrap_or(candidate)
}
