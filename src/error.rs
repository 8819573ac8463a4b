//! Error types for flipbook.

use thiserror::Error;

/// Main error type for all flipbook operations.
#[derive(Debug, Error)]
pub enum FlipbookError {
    /// I/O error while reading or writing an artifact.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image encode/decode error (GIF composition, raster decoding).
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// QR symbol encoding error from the external encoder.
    #[error("QR encode error: {0:?}")]
    QrEncode(#[from] qrcode::types::QrError),

    /// Split length must be at least 1 character.
    #[error("invalid split length: {0}")]
    InvalidSplitLength(usize),

    /// A shard does not fit the QR version forced by the version normalizer.
    /// The shard is too long relative to the chosen QR parameters.
    #[error("shard {index} does not fit QR version {version}")]
    ShardTooLarge { index: usize, version: i16 },

    /// The frame source was exhausted before all expected frames were seen.
    #[error("incomplete payload: captured {captured} of {expected} frames")]
    IncompletePayload { captured: usize, expected: usize },

    /// The frame source was exhausted before any head frame was seen, so the
    /// expected frame count never became known.
    #[error("incomplete payload: no head frame seen after {captured} captured frames")]
    MissingHeadFrame { captured: usize },

    /// The capture loop hit its bounded-attempts limit before completing.
    #[error("frame budget exhausted after {attempts} pull attempts")]
    AttemptsExhausted { attempts: u64 },

    /// Error surfaced by a frame source (capture device unavailable, etc.).
    #[error("frame source error: {0}")]
    Source(String),
}

/// Result type alias using FlipbookError.
pub type Result<T> = std::result::Result<T, FlipbookError>;
