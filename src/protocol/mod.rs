//! Protocol module - tag wire format, splitting, and reassembly.
//!
//! This is the framing core of the crate:
//! - Textual tag encoding/parsing (`>>>IDX<n>`, `>>>HEAD<total>`)
//! - Deterministic payload splitting into tagged shards
//! - FrameSet accumulation, ordering, and lossless reassembly

mod assemble;
mod split;
mod tag;

pub use assemble::{assemble, compare_frames, strip_tags, FrameSet};
pub use split::split_into_frames;
pub use tag::{head_tag, index_tag, is_head, parse_head_total, parse_index, HEAD_TAG, INDEX_TAG};
