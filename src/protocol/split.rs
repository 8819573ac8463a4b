//! Deterministic payload splitting into tagged shards.
//!
//! The payload is walked left to right in non-overlapping windows of
//! `split_length` characters. Each shard is prefixed with its index tag; the
//! first shard additionally carries the head tag with the total shard count.
//! The split is fully deterministic for a given `(payload, split_length)`
//! pair, which is what makes the read-side round trip possible.
//!
//! Windows are measured in `char`s so shards always fall on UTF-8 boundaries.
//!
//! # Example
//!
//! ```
//! use flipbook::protocol::split_into_frames;
//!
//! let frames = split_into_frames("Hello, World!", 5).unwrap();
//! assert_eq!(
//!     frames,
//!     vec![
//!         ">>>HEAD3 >>>IDX0 Hello".to_string(),
//!         ">>>IDX1 , Wor".to_string(),
//!         ">>>IDX2 ld!".to_string(),
//!     ]
//! );
//! ```

use crate::error::{FlipbookError, Result};

use super::tag::{head_tag, index_tag};

/// Split a payload into tagged frame strings.
///
/// Returns `ceil(chars / split_length)` frames; the last shard may be
/// shorter. An empty payload yields no frames.
///
/// # Errors
///
/// Returns [`FlipbookError::InvalidSplitLength`] when `split_length` is 0.
pub fn split_into_frames(payload: &str, split_length: usize) -> Result<Vec<String>> {
    if split_length == 0 {
        return Err(FlipbookError::InvalidSplitLength(split_length));
    }

    // Walk the payload in windows of `split_length` chars
    let mut shards: Vec<&str> = Vec::new();
    let mut rest = payload;
    while !rest.is_empty() {
        let end = rest
            .char_indices()
            .nth(split_length)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        shards.push(&rest[..end]);
        rest = &rest[end..];
    }

    // Tag each shard with its ordinal
    let total = shards.len() as u64;
    let mut frames: Vec<String> = shards
        .iter()
        .enumerate()
        .map(|(i, shard)| format!("{} {shard}", index_tag(i as u64)))
        .collect();

    // The first frame carries the head tag as well
    if let Some(first) = frames.first_mut() {
        let head = format!("{} {first}", head_tag(total));
        *first = head;
    }

    tracing::debug!(frames = frames.len(), split_length, "split payload");

    Ok(frames)
}
