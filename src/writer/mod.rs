//! Writer - payload to QR frame sequence.
//!
//! The write path splits a payload into tagged shards, renders each shard as
//! a QR symbol, and normalizes every frame to a single QR version so the
//! whole animation shares identical pixel geometry.
//!
//! # Example
//!
//! ```
//! use flipbook::writer::Writer;
//!
//! let writer = Writer::new();
//! let frames = writer.encode("Hello, World!").unwrap();
//! assert_eq!(frames.len(), 1); // fits one shard at the default split length
//! let gif = writer.to_gif(&frames).unwrap();
//! assert!(!gif.is_empty());
//! ```

mod gif;

pub use gif::compose_gif;

use bytes::Bytes;
use image::GrayImage;
use qrcode::types::QrError;
use qrcode::{EcLevel as QrEcLevel, QrCode, Version};
use serde::{Deserialize, Serialize};

use crate::error::{FlipbookError, Result};
use crate::protocol::split_into_frames;

/// QR error correction level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EcLevel {
    /// Recovers 7% of data.
    L,
    /// Recovers 15% of data.
    #[default]
    M,
    /// Recovers 25% of data.
    Q,
    /// Recovers 30% of data.
    H,
}

impl From<EcLevel> for QrEcLevel {
    fn from(level: EcLevel) -> Self {
        match level {
            EcLevel::L => QrEcLevel::L,
            EcLevel::M => QrEcLevel::M,
            EcLevel::Q => QrEcLevel::Q,
            EcLevel::H => QrEcLevel::H,
        }
    }
}

/// Configuration for the write path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterOptions {
    /// Maximum shard length in characters.
    pub split_length: usize,
    /// QR error correction level.
    pub ec_level: EcLevel,
    /// Rendered pixels per QR module.
    pub module_size: u32,
    /// Render the standard 4-module quiet zone around each symbol.
    pub quiet_zone: bool,
    /// Playback delay per frame in milliseconds.
    pub frame_delay_ms: u32,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            split_length: 100,
            ec_level: EcLevel::M,
            module_size: 4,
            quiet_zone: true,
            frame_delay_ms: 100,
        }
    }
}

/// One rendered frame of the animation.
#[derive(Debug, Clone)]
pub struct EncodedFrame {
    /// The tagged shard string encoded in the symbol.
    pub code: String,
    /// Rendered QR raster (grayscale).
    pub image: GrayImage,
    /// QR version the symbol was rendered at (shared across the animation).
    pub version: i16,
}

/// Encodes payloads into QR frame sequences and composes them into GIFs.
#[derive(Debug, Clone, Default)]
pub struct Writer {
    opts: WriterOptions,
}

impl Writer {
    /// Create a writer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with the given options.
    pub fn with_options(opts: WriterOptions) -> Self {
        Self { opts }
    }

    /// Get the writer's options.
    pub fn options(&self) -> &WriterOptions {
        &self.opts
    }

    /// Encode a payload into a sequence of rendered QR frames.
    ///
    /// Every frame is rendered at the largest QR version any shard required,
    /// so all frames share identical pixel geometry. This renders each shard
    /// twice (once to learn its minimum version, once at the forced version);
    /// the double cost is a correctness requirement for playback, not an
    /// optimization target.
    ///
    /// An empty payload produces no frames.
    ///
    /// # Errors
    ///
    /// [`FlipbookError::InvalidSplitLength`] for a zero split length, and
    /// [`FlipbookError::ShardTooLarge`] when a shard cannot fit the forced
    /// version (the shard is too long for the chosen QR parameters).
    pub fn encode(&self, payload: &str) -> Result<Vec<EncodedFrame>> {
        let codes = split_into_frames(payload, self.opts.split_length)?;
        if codes.is_empty() {
            return Ok(Vec::new());
        }

        let ec: QrEcLevel = self.opts.ec_level.into();

        // Pass 1: let the encoder pick each shard's minimum version
        let mut highest: i16 = 1;
        for code in &codes {
            let qr = QrCode::with_error_correction_level(code, ec)?;
            let version = match qr.version() {
                Version::Normal(v) => v,
                // The encoder's optimal search never picks micro versions
                Version::Micro(_) => 1,
            };
            highest = highest.max(version);
        }

        tracing::debug!(version = highest, frames = codes.len(), "normalized QR version");

        // Pass 2: re-render every shard forced to the highest version
        codes
            .into_iter()
            .enumerate()
            .map(|(index, code)| {
                let qr = QrCode::with_version(&code, Version::Normal(highest), ec).map_err(
                    |e| match e {
                        QrError::DataTooLong => FlipbookError::ShardTooLarge {
                            index,
                            version: highest,
                        },
                        other => FlipbookError::QrEncode(other),
                    },
                )?;

                let image = qr
                    .render::<image::Luma<u8>>()
                    .module_dimensions(self.opts.module_size, self.opts.module_size)
                    .quiet_zone(self.opts.quiet_zone)
                    .build();

                Ok(EncodedFrame {
                    code,
                    image,
                    version: highest,
                })
            })
            .collect()
    }

    /// Compose rendered frames into a looping GIF animation.
    pub fn to_gif(&self, frames: &[EncodedFrame]) -> Result<Bytes> {
        compose_gif(frames, self.opts.frame_delay_ms)
    }
}
