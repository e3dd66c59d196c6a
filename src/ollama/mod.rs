//! Ollama generate API: wire types, streamed response decoding, and client.

pub mod client;
pub mod stream;
pub mod types;

pub use client::{OllamaClient, TextGenerator};
pub use stream::{FragmentDecoder, ResponseAccumulator};
pub use types::{GenerateFragment, GenerateRequest};

#[cfg(test)]
pub use client::MockTextGenerator;
