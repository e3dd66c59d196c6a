//! Incremental decoding of the generate response body.
//!
//! The body is a sequence of JSON objects. Transport chunks do not line up
//! with object boundaries: one chunk may carry several objects, and one
//! object may be split over several chunks.

use serde_json::Deserializer;
use tracing::debug;

use crate::error::GenerateError;
use crate::ollama::types::GenerateFragment;

/// Splits raw body bytes into complete fragments, buffering partial ones.
///
/// Decoding stops at the first `done` fragment; bytes after it are never
/// parsed.
#[derive(Debug, Default)]
pub struct FragmentDecoder {
    buffer: Vec<u8>,
    done: bool,
}

impl FragmentDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `chunk` and return every fragment that is now complete.
    ///
    /// The buffer is only parsed when `chunk` contains a newline. Raw
    /// newlines cannot occur inside a JSON string, so a chunk without one
    /// cannot end a newline-delimited object, and skipping it keeps a large
    /// single object (`stream: false` with its `context` array) from being
    /// re-parsed from byte 0 on every chunk. Anything still buffered is
    /// parsed by [`finish`](Self::finish).
    pub fn feed(&mut self, chunk: &[u8]) -> Result<Vec<GenerateFragment>, GenerateError> {
        if self.done {
            return Ok(Vec::new());
        }

        self.buffer.extend_from_slice(chunk);
        if !chunk.contains(&b'\n') {
            return Ok(Vec::new());
        }

        self.decode()
    }

    /// Decode what is left at end of body.
    ///
    /// Returns the remaining fragments, or an error if the body stopped
    /// partway through an object.
    pub fn finish(&mut self) -> Result<Vec<GenerateFragment>, GenerateError> {
        let fragments = self.decode()?;
        if self.done || self.buffer.iter().all(u8::is_ascii_whitespace) {
            Ok(fragments)
        } else {
            Err(GenerateError::TruncatedFragment(self.buffer.len()))
        }
    }

    fn decode(&mut self) -> Result<Vec<GenerateFragment>, GenerateError> {
        let mut fragments = Vec::new();
        if self.done {
            return Ok(fragments);
        }

        let mut consumed = 0;
        {
            let mut values =
                Deserializer::from_slice(&self.buffer).into_iter::<GenerateFragment>();
            loop {
                match values.next() {
                    Some(Ok(fragment)) => {
                        consumed = values.byte_offset();
                        let done = fragment.done;
                        fragments.push(fragment);
                        if done {
                            self.done = true;
                            break;
                        }
                    }
                    Some(Err(e)) if e.is_eof() => break,
                    Some(Err(e)) => return Err(GenerateError::InvalidFragment(e)),
                    None => {
                        consumed = values.byte_offset();
                        break;
                    }
                }
            }
        }

        if self.done {
            self.buffer.clear();
        } else {
            self.buffer.drain(..consumed);
        }

        Ok(fragments)
    }
}

/// Collects fragment text in arrival order until a `done` fragment.
#[derive(Debug, Default)]
pub struct ResponseAccumulator {
    decoder: FragmentDecoder,
    text: String,
    fragments: usize,
    done: bool,
}

impl ResponseAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one transport chunk. Returns `true` once a `done` fragment has
    /// been seen; anything after it is ignored.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<bool, GenerateError> {
        if self.done {
            return Ok(true);
        }

        let fragments = self.decoder.feed(chunk)?;
        self.absorb(fragments)?;

        Ok(self.done)
    }

    fn absorb(&mut self, fragments: Vec<GenerateFragment>) -> Result<(), GenerateError> {
        for fragment in fragments {
            if let Some(message) = fragment.error.filter(|m| !m.is_empty()) {
                return Err(GenerateError::Server(message));
            }

            self.fragments += 1;
            self.text.push_str(&fragment.response);

            if fragment.done {
                self.done = true;
                break;
            }
        }
        Ok(())
    }

    /// Finish at end of body and return the accumulated text.
    ///
    /// A body that ends without a `done` fragment is accepted, unless it
    /// stops partway through an object.
    pub fn finish(mut self) -> Result<String, GenerateError> {
        if !self.done {
            let fragments = self.decoder.finish()?;
            self.absorb(fragments)?;
        }
        debug!(
            "Accumulated {} chars from {} fragments (done={})",
            self.text.len(),
            self.fragments,
            self.done
        );
        Ok(self.text)
    }
}
