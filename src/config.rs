//! Runtime defaults and environment overrides.

use std::env;

use reqwest::Url;
use tracing::warn;

/// Model used when `--model` is not given.
pub const DEFAULT_MODEL: &str = "gemma3:1b";

/// Ollama generate endpoint on the local machine.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434/api/generate";

/// Environment variable to override the generate endpoint.
pub const ENDPOINT_ENV_VAR: &str = "OLLAMA_COMMIT_URL";

/// Resolve the generate endpoint.
///
/// Reads from OLLAMA_COMMIT_URL if set, otherwise uses the local default.
/// Logs a warning if the variable is set but is not a valid URL.
pub fn endpoint() -> String {
    match env::var(ENDPOINT_ENV_VAR) {
        Ok(v) if !v.trim().is_empty() => match Url::parse(v.trim()) {
            Ok(url) => url.to_string(),
            Err(e) => {
                warn!(
                    "Invalid {} value '{}' ({}), using default {}",
                    ENDPOINT_ENV_VAR, v, e, DEFAULT_ENDPOINT
                );
                DEFAULT_ENDPOINT.to_string()
            }
        },
        _ => DEFAULT_ENDPOINT.to_string(),
    }
}
