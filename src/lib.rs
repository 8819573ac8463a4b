//! # flipbook
//!
//! Encode an arbitrarily long text payload as a sequence of QR-code frames
//! played back as a looping animation, and losslessly reassemble the payload
//! from an unordered, possibly-duplicated stream of decoded frames.
//!
//! ## Architecture
//!
//! - **Write path**: payload → tagged shards → QR frames (normalized to one
//!   symbol version) → looping GIF
//! - **Read path**: frame source (GIF, still image, live track) → QR decode →
//!   dedup/order/reassemble → payload
//!
//! The framing protocol is textual: each frame string carries an index tag
//! (`>>>IDX<n>`), and the first frame additionally carries a head tag
//! (`>>>HEAD<total>`) announcing the total frame count.
//!
//! ## Example
//!
//! ```
//! use flipbook::{GifSource, Reader, Writer};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> flipbook::Result<()> {
//!     let writer = Writer::new();
//!     let frames = writer.encode("Hello, World!")?;
//!     let gif = writer.to_gif(&frames)?;
//!
//!     let payload = Reader::new(GifSource::from_bytes(gif)?).read().await?;
//!     assert_eq!(payload, "Hello, World!");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod protocol;
pub mod reader;
pub mod writer;

pub use error::{FlipbookError, Result};
pub use reader::{
    FrameDecoder, FrameSource, GifSource, QrDecoder, RawFrame, Reader, ReaderOptions, StillSource,
    TrackSource,
};
pub use writer::{compose_gif, EcLevel, EncodedFrame, Writer, WriterOptions};
