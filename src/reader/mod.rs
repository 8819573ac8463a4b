//! Reader - the capture loop / reassembler.
//!
//! One [`Reader`] drives one read operation: it repeatedly pulls raw frames
//! from a [`FrameSource`], decodes them, deduplicates the decoded strings,
//! learns the expected total frame count from the head frame, and completes
//! the instant the set holds that many frames. The reader owns its own
//! frame set and expected count, so concurrent or sequential reads never
//! interfere.
//!
//! # Example
//!
//! ```no_run
//! use flipbook::reader::{GifSource, Reader};
//! use bytes::Bytes;
//!
//! # async fn demo(gif_bytes: Bytes) -> flipbook::Result<()> {
//! let source = GifSource::from_bytes(gif_bytes)?;
//! let payload = Reader::new(source).read().await?;
//! println!("{payload}");
//! # Ok(())
//! # }
//! ```

mod decoder;
mod source;

pub use decoder::{FrameDecoder, QrDecoder};
pub use source::{FrameSource, GifSource, RawFrame, StillSource, TrackSource};

use serde::{Deserialize, Serialize};

use crate::error::{FlipbookError, Result};
use crate::protocol::FrameSet;

/// Default bound on frame pull attempts per read operation.
pub const DEFAULT_MAX_ATTEMPTS: u64 = 10_000;

/// Configuration for the read path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderOptions {
    /// Maximum number of frame pulls before the read fails with
    /// [`FlipbookError::AttemptsExhausted`]. `None` disables the bound, in
    /// which case an unbounded source that never shows a head frame will
    /// loop forever.
    pub max_attempts: Option<u64>,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
        }
    }
}

/// Captures frames from a source and reassembles the original payload.
///
/// Consumes itself on [`read`](Reader::read); a reader performs exactly one
/// read operation and releases its source on every exit path.
#[derive(Debug)]
pub struct Reader<S, D = QrDecoder> {
    source: S,
    decoder: D,
    opts: ReaderOptions,
}

impl<S: FrameSource> Reader<S, QrDecoder> {
    /// Create a reader over the given source with the default QR decoder.
    pub fn new(source: S) -> Self {
        Self::with_decoder(source, QrDecoder)
    }
}

impl<S: FrameSource, D: FrameDecoder> Reader<S, D> {
    /// Create a reader with a custom frame decoder.
    pub fn with_decoder(source: S, decoder: D) -> Self {
        Self {
            source,
            decoder,
            opts: ReaderOptions::default(),
        }
    }

    /// Replace the reader options.
    pub fn with_options(mut self, opts: ReaderOptions) -> Self {
        self.opts = opts;
        self
    }

    /// Set or disable the bounded-attempts limit.
    pub fn max_attempts(mut self, limit: Option<u64>) -> Self {
        self.opts.max_attempts = limit;
        self
    }

    /// Run the capture loop to completion and reassemble the payload.
    ///
    /// The source is released exactly once, whether the read succeeds or
    /// fails.
    ///
    /// # Errors
    ///
    /// [`FlipbookError::IncompletePayload`] when the source exhausts with
    /// frames still missing, [`FlipbookError::MissingHeadFrame`] when it
    /// exhausts before any head frame was seen, and
    /// [`FlipbookError::AttemptsExhausted`] when the pull budget runs out.
    pub async fn read(mut self) -> Result<String> {
        let result = Self::capture(&mut self.source, &mut self.decoder, &self.opts).await;
        self.source.release();
        result
    }

    async fn capture(source: &mut S, decoder: &mut D, opts: &ReaderOptions) -> Result<String> {
        let mut set = FrameSet::new();
        let mut attempts: u64 = 0;

        loop {
            if set.is_complete() {
                tracing::debug!(frames = set.len(), "all frames captured");
                return Ok(set.into_payload());
            }

            if let Some(limit) = opts.max_attempts {
                if attempts >= limit {
                    tracing::warn!(attempts, "frame budget exhausted");
                    return Err(FlipbookError::AttemptsExhausted { attempts });
                }
            }
            attempts += 1;

            match source.next_frame().await? {
                Some(raw) => {
                    // Decode noise and duplicates are no-ops
                    if let Some(code) = decoder.decode(&raw) {
                        if set.insert(code) {
                            tracing::debug!(
                                frames = set.len(),
                                expected = ?set.expected(),
                                "captured new frame"
                            );
                        }
                    }
                }
                None => {
                    return Err(match set.expected() {
                        Some(expected) => FlipbookError::IncompletePayload {
                            captured: set.len(),
                            expected,
                        },
                        None => FlipbookError::MissingHeadFrame {
                            captured: set.len(),
                        },
                    });
                }
            }
        }
    }
}
